mod test_utilities;
use approx::assert_relative_eq;
use predicates::str;
use pretty_assertions::assert_eq;
use test_utilities::{geoscope_cmd, run_json, temp_file};

#[test]
fn open_ring_is_closed_and_measured() {
	let file = temp_file("[[0, 0], [0.01, 0], [0.01, 0.01], [0, 0.01]]");
	let result = run_json(geoscope_cmd().arg("area").arg(file.path()));

	assert_eq!(result["ways"], 1);
	assert_eq!(result["vertices"], 5);
	assert_eq!(result["closed"], false);
	assert_relative_eq!(result["area_km2"].as_f64().unwrap(), 1.24);
}

#[test]
fn ways_are_stitched_before_measuring() {
	let file = temp_file("[[[0, 0], [1, 0], [1, 1]], [[0, 0], [0, 1], [1, 1]]]");
	let result = run_json(geoscope_cmd().args(["area", "--compact"]).arg(file.path()));

	assert_eq!(result["ways"], 2);
	assert_eq!(result["vertices"], 5);
	assert_eq!(result["closed"], true);
	assert_relative_eq!(result["area_km2"].as_f64().unwrap(), 12363.68);
}

#[test]
fn tolerance_decides_whether_ways_connect() {
	let file = temp_file("[[[0, 0], [1, 0], [1, 1]], [[1.001, 1], [0, 1], [0, 0]]]");

	let strict = run_json(geoscope_cmd().arg("area").arg(file.path()));
	assert_eq!(strict["vertices"], 4);

	let loose = run_json(geoscope_cmd().args(["area", "--tolerance", "0.01"]).arg(file.path()));
	assert_eq!(loose["vertices"], 5);
	assert_eq!(loose["closed"], true);
}

#[test]
fn reads_stdin() {
	let result = run_json(
		geoscope_cmd()
			.args(["area", "-"])
			.write_stdin("[[0, 0], [0.01, 0], [0.01, 0.01], [0, 0]]"),
	);
	assert_eq!(result["vertices"], 4);
	assert_eq!(result["closed"], true);
}

#[test]
fn invalid_input_fails() {
	let file = temp_file(r#"{"type": "Point"}"#);
	geoscope_cmd()
		.arg("area")
		.arg(file.path())
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("parsing coordinates"));

	geoscope_cmd()
		.args(["area", "/does/not/exist.json"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("opening /does/not/exist.json"));

	let file = temp_file("[]");
	geoscope_cmd()
		.arg("area")
		.arg(file.path())
		.assert()
		.failure()
		.stderr(str::contains("no coordinates"));
}

#[test]
fn non_positive_tolerance_is_rejected() {
	let file = temp_file("[[0, 0], [1, 0], [1, 1]]");
	geoscope_cmd()
		.args(["area", "--tolerance", "0"])
		.arg(file.path())
		.assert()
		.failure()
		.stderr(str::contains("stitch.tolerance must be a positive number"));
}
