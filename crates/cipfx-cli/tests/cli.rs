//! End-to-end tests for the `cipfx` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const QUOTES_1M: &str = "\
Date,1mSOFR,USDSGD_FX,Forward Points
2026-01-02,3.67738,1.3450,-27.47
2026-01-05,3.67510,1.3461,0
2026-01-06,3.67300,1.3455,-27.10
";

/// A `cipfx` command isolated from the user's config directory.
fn cipfx(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cipfx").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("CIPFX_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn compute_first_trade_of_2026() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "quotes.csv", QUOTES_1M);

    let report = json_stdout(cipfx(&dir).args(["--format", "json", "compute"]).arg(&input));

    assert_eq!(report["tenor"], "1M");
    assert_eq!(report["reference_column"], "1mSOFR");
    let first = &report["results"][0];
    assert_eq!(first["trade_date"], "2026-01-02");
    assert_eq!(first["spot_date"], "2026-01-06");
    assert_eq!(first["forward_date"], "2026-02-06");
    assert_eq!(first["actual_days"], 31);
    assert!((first["forward_rate"].as_f64().unwrap() - 1.342253).abs() < 1e-12);
    assert!((first["implied_rate_pct"].as_f64().unwrap() - 1.3161030249).abs() < 1e-9);
    assert!((first["diff_bps"].as_f64().unwrap() + 236.1276975074).abs() < 1e-7);

    assert_eq!(report["results"].as_array().unwrap().len(), 3);
    assert_eq!(report["summary"]["count"], 3);
    assert!(report["failures"].as_array().unwrap().is_empty());
}

#[test]
fn compute_table_output() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "quotes.csv", QUOTES_1M);

    cipfx(&dir)
        .arg("compute")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-02-06"))
        .stdout(predicate::str::contains("Summary (1M)"))
        .stdout(predicate::str::contains("1mSOFR"));
}

#[test]
fn compute_skips_bad_rows_unless_aborting() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "quotes.csv",
        "Date,1mSOFR,USDSGD_FX,Forward Points\n\
         2026-01-02,3.67738,1.3450,-27.47\n\
         2026-01-05,3.67510,0,-27.0\n",
    );

    let report = json_stdout(cipfx(&dir).args(["-f", "json", "compute"]).arg(&input));
    assert_eq!(report["results"].as_array().unwrap().len(), 1);
    assert_eq!(report["failures"][0]["row"], 2);
    assert_eq!(report["failures"][0]["trade_date"], "2026-01-05");

    cipfx(&dir)
        .args(["compute", "--policy", "abort"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Batch aborted"))
        .stderr(predicate::str::contains("2026-01-05"));
}

#[test]
fn compute_parallel_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "quotes.csv", QUOTES_1M);

    let seq = json_stdout(cipfx(&dir).args(["-f", "json", "compute"]).arg(&input));
    let par = json_stdout(
        cipfx(&dir)
            .args(["-f", "json", "compute", "--parallel"])
            .arg(&input),
    );
    assert_eq!(seq["results"], par["results"]);
}

#[test]
fn compute_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "quotes.csv", QUOTES_1M);
    let output = dir.path().join("out.csv");

    cipfx(&dir)
        .args(["-q", "compute"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("trade_date,tenor,spot_date,forward_date,actual_days"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn compute_needs_a_tenor() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "quotes.csv",
        "Date,SOFR,USDSGD_FX,Forward Points\n2026-01-02,3.6,1.345,-80\n",
    );

    cipfx(&dir)
        .arg("compute")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tenor not specified"));

    let report = json_stdout(
        cipfx(&dir)
            .args(["-f", "json", "compute", "--tenor", "3m"])
            .arg(&input),
    );
    assert_eq!(report["tenor"], "3M");
}

#[test]
fn compute_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "quotes.csv",
        "Date,1mSOFR,FX Spot,Forward Points\n2026-01-02,3.6,1.345,-27\n",
    );

    cipfx(&dir)
        .arg("compute")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing spot rate column"));
}

#[test]
fn config_supplies_tenor_columns_and_holidays() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "us.json",
        r#"{"jurisdiction": "US", "years": [2031], "holidays": ["2031-01-01"]}"#,
    );
    write(
        &dir,
        "sg.json",
        r#"{"jurisdiction": "SG", "years": [2031], "holidays": ["2031-01-01", "2031-01-23"]}"#,
    );
    let config = write(
        &dir,
        "cipfx.toml",
        "tenor = \"1M\"\n\
         [calendar]\n\
         domestic_file = \"us.json\"\n\
         foreign_file = \"sg.json\"\n\
         [columns]\n\
         spot = [\"FX Spot\"]\n",
    );
    // Tue 21 Jan 2031: Wed 22, then SG holiday Thu 23 -> spot Fri 24.
    let input = write(
        &dir,
        "quotes.csv",
        "Date,SOFR,FX Spot,Forward Points\n2031-01-21,3.0,1.30,-15\n",
    );

    let report = json_stdout(
        cipfx(&dir)
            .arg("--config")
            .arg(&config)
            .args(["-f", "json", "compute"])
            .arg(&input),
    );
    assert_eq!(report["results"][0]["spot_date"], "2031-01-24");
    assert_eq!(report["results"][0]["forward_date"], "2031-02-24");
}

#[test]
fn config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "cipfx.toml", "[output]\nformat = \"json\"\n");

    let result = json_stdout(
        cipfx(&dir)
            .env("CIPFX_CONFIG", &config)
            .args(["check", "2026-04-03"]),
    );
    assert_eq!(result["status"], "JointHoliday");
}

#[test]
fn check_reports_day_status() {
    let dir = TempDir::new().unwrap();

    let result = json_stdout(cipfx(&dir).args(["-f", "json", "check", "2026-01-19"]));
    assert_eq!(result["status"], "DomesticHoliday");
    assert_eq!(result["business_day"], false);
    assert_eq!(result["previous_business_day"], "2026-01-16");
    assert_eq!(result["next_business_day"], "2026-01-20");

    cipfx(&dir)
        .args(["check", "2026-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foreign holiday"));
}

#[test]
fn uncovered_year_fails_loudly() {
    let dir = TempDir::new().unwrap();

    cipfx(&dir)
        .args(["check", "2027-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No US holiday data for year 2027"));
}

#[test]
fn dates_explains_skipped_days() {
    let dir = TempDir::new().unwrap();

    let report = json_stdout(cipfx(&dir).args(["-f", "json", "dates", "2026-02-13", "-t", "1M"]));
    assert_eq!(report["tenors"][0]["spot_date"], "2026-02-20");

    let reasons: Vec<&str> = report["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["status"].as_str().unwrap())
        .collect();
    assert_eq!(
        reasons,
        ["Weekend", "Weekend", "DomesticHoliday", "ForeignHoliday", "ForeignHoliday"]
    );
}

#[test]
fn dates_for_every_tenor() {
    let dir = TempDir::new().unwrap();

    let output = cipfx(&dir)
        .args(["-f", "csv", "dates", "2026-01-02"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("1M,2026-01-02,2026-01-06,2026-02-06,2026-02-06,31"));
}

#[test]
fn forward_points_round_trip() {
    let dir = TempDir::new().unwrap();

    let result = json_stdout(cipfx(&dir).args([
        "-f",
        "json",
        "forward-points",
        "--trade-date",
        "2026-01-02",
        "--spot",
        "1.3450",
        "--reference-rate",
        "3.67738",
        "--local-rate",
        "1.3161030249",
        "--quoted-points",
        "-27.47",
    ]));

    assert_eq!(result["actual_days"], 31);
    let fair = result["forward_points_pips"].as_f64().unwrap();
    assert!((fair + 27.47).abs() < 1e-6, "fair points {fair}");
    let implied = result["quoted_implied_rate_pct"].as_f64().unwrap();
    assert!((implied - 1.3161030249).abs() < 1e-9);
}

#[test]
fn forward_points_rejects_bad_spot() {
    let dir = TempDir::new().unwrap();

    cipfx(&dir)
        .args([
            "forward-points",
            "--trade-date",
            "2026-01-02",
            "--spot",
            "0",
            "-r",
            "3.6",
            "-l",
            "1.5",
        ])
        .assert()
        .failure();
}

#[test]
fn invalid_date_argument() {
    let dir = TempDir::new().unwrap();
    let missing = Path::new("/nonexistent/cipfx.toml");

    cipfx(&dir)
        .args(["check", "2026/04/03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    cipfx(&dir)
        .arg("--config")
        .arg(missing)
        .args(["check", "2026-04-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
