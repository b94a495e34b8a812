mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Reconstruct a boundary relation as GeoJSON feature with area, population and density
	Boundary(tools::boundary::Subcommand),

	/// Find the outline of a Wikidata entity
	Outline(tools::outline::Subcommand),

	/// Look up population and official area of a boundary relation
	Population(tools::population::Subcommand),

	/// Measure the area of a ring or of ways stitched into a ring, read from a JSON file
	Area(tools::area::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Boundary(arguments) => tools::boundary::run(arguments),
		Commands::Outline(arguments) => tools::outline::run(arguments),
		Commands::Population(arguments) => tools::population::run(arguments),
		Commands::Area(arguments) => tools::area::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geoscope"]).unwrap_err().to_string();
		assert!(err.starts_with("Reconstructs OpenStreetMap boundary relations"));
		assert!(err.contains("\nUsage: geoscope [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geoscope", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geoscope "));
	}

	#[test]
	fn boundary_subcommand() {
		let output = run_command(vec!["geoscope", "boundary"]).unwrap_err().to_string();
		assert!(output.starts_with("Reconstruct a boundary relation"));
	}

	#[test]
	fn outline_subcommand() {
		let output = run_command(vec!["geoscope", "outline"]).unwrap_err().to_string();
		assert!(output.starts_with("Find the outline of a Wikidata entity"));
	}

	#[test]
	fn population_subcommand() {
		let output = run_command(vec!["geoscope", "population"]).unwrap_err().to_string();
		assert!(output.starts_with("Look up population and official area"));
	}

	#[test]
	fn area_subcommand() {
		let output = run_command(vec!["geoscope", "area"]).unwrap_err().to_string();
		assert!(output.starts_with("Measure the area of a ring"));
	}
}
