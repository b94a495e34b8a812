use super::{HttpConfig, OverpassConfig, StatisticsConfig, StitchConfig};
use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Boundary geometry source
	#[serde(default)]
	pub overpass: OverpassConfig,

	/// Population and area statistics source
	#[serde(default)]
	pub statistics: StatisticsConfig,

	/// Retry and identification settings shared by all HTTP requests
	#[serde(default)]
	pub http: HttpConfig,

	/// Way stitching settings
	#[serde(default)]
	pub stitch: StitchConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {}", path.display()))?;
		let config = Config::from_reader(BufReader::new(file))
			.with_context(|| format!("parsing config file {}", path.display()))?;
		config.verify()?;
		Ok(config)
	}

	pub fn verify(&self) -> Result<()> {
		self.http.verify()?;
		self.overpass.verify()?;
		self.statistics.verify()?;
		self.stitch.verify()?;
		Ok(())
	}
}

pub(crate) fn verify_url(url: &str) -> Result<()> {
	let parsed = Url::parse(url).with_context(|| format!("invalid URL '{url}'"))?;
	match parsed.scheme() {
		"http" | "https" => Ok(()),
		other => bail!("unsupported URL scheme '{other}' in '{url}', expected 'http' or 'https'"),
	}
}
