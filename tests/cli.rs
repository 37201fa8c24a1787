use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::fs;
use std::process::Command; // Run programs

#[test]
fn integration_file_doesnt_exist() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("test/file/doesnt/exist.txt");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("test/file/doesnt/exist.txt"));

    Ok(())
}

#[test]
fn integration_missing_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.env_remove("REASONER_PERF_LOG");
    cmd.assert().failure();

    Ok(())
}

#[test]
fn integration_charts_and_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let charts = dir.path().join("charts");
    let report = dir.path().join("report.html");
    let json = dir.path().join("timings.json");
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("tests/data/performance-results.txt")
        .arg("--output-dir")
        .arg(&charts)
        .arg("--report")
        .arg(&report)
        .arg("--json")
        .arg(&json);
    cmd.assert().success();

    for name in &["Italian_Food.svg", "Snomed_CT.svg", "GALEN.svg"] {
        let svg = fs::read_to_string(charts.join(name))?;
        assert!(svg.contains(">Concurrent ELPP</text>"));
    }
    let html = fs::read_to_string(report)?;
    assert!(html.contains("Comparing ELPP, Concurrent ELPP, ELK and HermiT"));
    let exported = fs::read_to_string(json)?;
    assert!(exported.contains("\"Snomed CT\""));

    Ok(())
}

#[test]
fn integration_input_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.env("REASONER_PERF_LOG", "tests/data/performance-results.txt")
        .arg("-o")
        .arg(dir.path());
    cmd.assert().success();
    assert!(dir.path().join("GALEN.svg").exists());

    Ok(())
}

#[test]
fn integration_malformed_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("tests/data/malformed.txt").arg("-o").arg(dir.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 3: malformed log line"));
    assert!(!dir.path().join("Italian_Food.svg").exists());

    Ok(())
}

#[test]
fn integration_skip_malformed_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("tests/data/malformed.txt")
        .arg("--skip-malformed")
        .arg("-o")
        .arg(dir.path());
    cmd.assert().success();
    let svg = fs::read_to_string(dir.path().join("Italian_Food.svg"))?;
    assert!(svg.contains(">ELPP</text>"));
    assert!(!svg.contains(">ELK</text>"));

    Ok(())
}

#[test]
fn integration_orphan_measurement() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("tests/data/orphan.txt")
        .arg("--skip-malformed")
        .arg("-o")
        .arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("orphan.txt: line 1"));

    Ok(())
}

#[test]
fn integration_unwritable_charts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    // a file where the output directory should be
    let blocked = dir.path().join("charts");
    fs::write(&blocked, "not a directory")?;
    let mut cmd = Command::cargo_bin("perf2svg")?;

    cmd.arg("tests/data/performance-results.txt")
        .arg("-o")
        .arg(&blocked);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot render chart for 'GALEN'"));

    Ok(())
}

#[test]
fn integration_json_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("perf2json")?;

    cmd.arg("tests/data/performance-results.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"reasoners\"").and(predicate::str::contains(
            "\"Concurrent ELPP\"",
        )));

    Ok(())
}
