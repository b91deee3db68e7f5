//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const SQUARE_TSP: &str = "\
NAME: square
TYPE: TSP
DIMENSION: 4
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 0.0 1.0
3 1.0 1.0
4 1.0 0.0
EOF
";

fn write_instance(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("should write instance");
    path
}

fn cli() -> Command {
    Command::cargo_bin("hormiga-tsp").expect("binary should build")
}

#[test]
fn test_solve_square() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "square.tsp", SQUARE_TSP);

    cli()
        .arg("solve")
        .arg(&path)
        .args(["--seed", "42", "--iterations", "50", "--ants", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("square (4 cities)"))
        .stdout(predicate::str::contains("Tour length:      4.00"));
}

#[test]
fn test_solve_verbose_reports_improvements() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "square.tsp", SQUARE_TSP);

    cli()
        .arg("solve")
        .arg(&path)
        .args(["--seed", "42", "--iterations", "20", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new best cost"));
}

#[test]
fn test_solve_writes_json_and_svg() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "square.tsp", SQUARE_TSP);
    let json_path = dir.path().join("solution.json");
    let svg_path = dir.path().join("tour.svg");

    cli()
        .arg("solve")
        .arg(&path)
        .args(["--seed", "42", "--iterations", "30"])
        .arg("--output")
        .arg(&json_path)
        .arg("--plot")
        .arg(&svg_path)
        .assert()
        .success();

    let json = std::fs::read_to_string(&json_path).expect("json written");
    let report: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(report["instance"], "square");
    assert_eq!(report["tour"].as_array().map(Vec::len), Some(4));
    assert_eq!(report["iterations"], 30);

    let svg = std::fs::read_to_string(&svg_path).expect("svg written");
    assert!(svg.contains("<polygon"));
}

#[test]
fn test_solve_missing_file_fails() {
    cli()
        .arg("solve")
        .arg("/nonexistent/cities.tsp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_solve_single_city_is_degenerate() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "one.tsp", "NODE_COORD_SECTION\n1 0.0 0.0\nEOF\n");

    cli()
        .arg("solve")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Degenerate instance"));
}

#[test]
fn test_solve_empty_instance_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "empty.tsp", "NODE_COORD_SECTION\nEOF\n");

    cli()
        .arg("solve")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty instance"));
}

#[test]
fn test_info_prints_statistics() {
    let dir = TempDir::new().unwrap();
    let path = write_instance(&dir, "square.tsp", SQUARE_TSP);

    cli()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:       square"))
        .stdout(predicate::str::contains("Cities:     4"))
        .stdout(predicate::str::contains("Mean nearest-neighbor distance: 1.000"));
}
