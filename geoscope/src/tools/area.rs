use super::print_json;
use anyhow::{Context, Result, ensure};
use geoscope_core::config::StitchConfig;
use geoscope_geometry::{
	CompositeGeometryTrait, LineStringGeometry,
	math::round_to,
	stitch::{WayStitcher, close_ring},
};
use serde::Deserialize;
use serde_json::json;
use std::{
	fs::File,
	io::{BufReader, Read, stdin},
	path::{Path, PathBuf},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file with either one ring `[[lon,lat],...]` or a list of ways `[[[lon,lat],...],...]`.
	/// Ways are stitched into one ring first. Use "-" to read from stdin.
	#[arg(verbatim_doc_comment)]
	input_file: PathBuf,

	/// endpoint tolerance in degrees when stitching ways
	#[arg(long, value_name = "DEGREES", display_order = 1)]
	tolerance: Option<f64>,

	/// print JSON on a single line
	#[arg(long, display_order = 1)]
	compact: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AreaInput {
	Ring(Vec<[f64; 2]>),
	Ways(Vec<Vec<[f64; 2]>>),
}

impl AreaInput {
	fn into_ways(self) -> Vec<LineStringGeometry> {
		let ways: Vec<LineStringGeometry> = match self {
			AreaInput::Ring(ring) => vec![LineStringGeometry::from(ring)],
			AreaInput::Ways(ways) => ways.into_iter().map(LineStringGeometry::from).collect(),
		};
		ways.into_iter().filter(|way| !way.is_empty()).collect()
	}
}

fn read_input(path: &Path) -> Result<AreaInput> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		stdin().read_to_string(&mut text).context("reading stdin")?;
		return serde_json::from_str(&text).context("parsing coordinates from stdin");
	}

	let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
	serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing coordinates from {}", path.display()))
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut stitch = StitchConfig::default();
	stitch.override_optional_tolerance(&arguments.tolerance);
	stitch.verify()?;

	let ways = read_input(&arguments.input_file)?.into_ways();
	ensure!(!ways.is_empty(), "no coordinates in {}", arguments.input_file.display());

	let chain = WayStitcher::from(&stitch).connect_ways(&ways);
	let was_closed = chain.is_closed();
	let ring = close_ring(chain);
	let area = ring.area_km2();
	log::debug!("ring with {} vertices, {area} km²", ring.len());

	print_json(
		&json!({
			"ways": ways.len(),
			"vertices": ring.len(),
			"closed": was_closed,
			"area_km2": round_to(area, 2),
		}),
		arguments.compact,
	)
}
