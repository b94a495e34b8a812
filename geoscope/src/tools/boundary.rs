use super::{ConfigArgs, cancel_on_ctrl_c, print_json};
use anyhow::Result;
use geoscope_boundary::resolver::BoundaryResolver;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// OpenStreetMap relation ID, e.g. 1903516
	#[arg()]
	relation_id: u64,

	/// print only area, population and density instead of the GeoJSON feature
	#[arg(long, display_order = 1)]
	stats_only: bool,

	/// print JSON on a single line
	#[arg(long, display_order = 1)]
	compact: bool,

	#[command(flatten)]
	config_args: ConfigArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.config_args.load()?;
	let resolver = BoundaryResolver::from_config(&config)?;
	let cancel = cancel_on_ctrl_c();

	let boundary = resolver.resolve_boundary(arguments.relation_id, &cancel).await;
	if boundary.geometry.is_none() {
		log::warn!("relation {} has no usable outer ring", arguments.relation_id);
	}

	let value = if arguments.stats_only {
		boundary.to_stats_json()
	} else {
		boundary.to_feature()
	};
	print_json(&value, arguments.compact)
}
