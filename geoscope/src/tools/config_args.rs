use anyhow::Result;
use geoscope_core::config::Config;
use std::path::PathBuf;

/// Options shared by all subcommands that talk to Overpass or the statistics endpoint.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
	/// YAML configuration file
	#[arg(long, short, value_name = "FILE", display_order = 10)]
	config: Option<PathBuf>,

	/// use this Overpass interpreter instead of the configured endpoints
	#[arg(long, value_name = "URL", display_order = 11)]
	overpass_url: Option<String>,

	/// use this SPARQL endpoint for population and area statistics
	#[arg(long, value_name = "URL", display_order = 11)]
	statistics_url: Option<String>,

	/// endpoint tolerance in degrees when stitching ways
	#[arg(long, value_name = "DEGREES", display_order = 12)]
	tolerance: Option<f64>,
}

impl ConfigArgs {
	pub fn load(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};

		config.overpass.override_optional_endpoint(&self.overpass_url);
		config.statistics.override_optional_endpoint(&self.statistics_url);
		config.stitch.override_optional_tolerance(&self.tolerance);

		config.verify()?;
		log::debug!("configuration: {config:?}");
		Ok(config)
	}
}
