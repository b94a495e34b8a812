use super::{ConfigArgs, cancel_on_ctrl_c, print_json};
use anyhow::Result;
use geoscope_boundary::outline::OutlineResolver;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Wikidata entity, e.g. Q1858
	#[arg()]
	wikidata_id: String,

	/// print JSON on a single line
	#[arg(long, display_order = 1)]
	compact: bool,

	#[command(flatten)]
	config_args: ConfigArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.config_args.load()?;
	let resolver = OutlineResolver::from_config(&config)?;
	let cancel = cancel_on_ctrl_c();

	let outline = resolver
		.fetch_outline_by_identifier(&arguments.wikidata_id, &cancel)
		.await;
	log::info!("outline of {}: {}", arguments.wikidata_id, outline.source);

	print_json(&outline.to_json(), arguments.compact)
}
