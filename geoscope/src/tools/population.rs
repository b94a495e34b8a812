use super::{ConfigArgs, cancel_on_ctrl_c, print_json};
use anyhow::Result;
use geoscope_boundary::statistics::{SparqlStatisticsSource, fetch_population_data};
use serde_json::json;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// OpenStreetMap relation ID, e.g. 1903516
	#[arg()]
	relation_id: u64,

	/// print JSON on a single line
	#[arg(long, display_order = 1)]
	compact: bool,

	#[command(flatten)]
	config_args: ConfigArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.config_args.load()?;
	let source = SparqlStatisticsSource::new(&config.statistics, &config.http)?;
	let cancel = cancel_on_ctrl_c();

	let data = fetch_population_data(&source, arguments.relation_id, &cancel).await;

	print_json(
		&json!({
			"relation_id": arguments.relation_id,
			"population": data.population,
			"official_area_km2": data.official_area,
		}),
		arguments.compact,
	)
}
