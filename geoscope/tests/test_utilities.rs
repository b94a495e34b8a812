#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::{io::Write, path::PathBuf};
use tempfile::NamedTempFile;

#[cfg(windows)]
pub const BINARY_NAME: &str = "geoscope.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "geoscope";

/// Helper to create a Command for the geoscope binary.
pub fn geoscope_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Helper to write `content` into a temporary file that lives as long as the returned handle.
pub fn temp_file(content: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("failed to create temp file");
	file.write_all(content.as_bytes()).expect("failed to write temp file");
	file
}

/// Helper to run the binary and parse its stdout as JSON.
pub fn run_json(cmd: &mut Command) -> serde_json::Value {
	let output = cmd.assert().success().get_output().stdout.clone();
	serde_json::from_slice(&output).expect("stdout is not JSON")
}
