//! End-to-end tests for the roadnet CLI: building adjacency output and
//! running command files, including exit-code behaviour for fatal versus
//! per-line errors.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NETWORK: &str = "\
CITIES
A
B
C
ROADS
A B 5
B C 3
A C 12
";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn roadnet() -> Command {
    Command::cargo_bin("roadnet-cli").expect("binary exists")
}

#[test]
fn build_prints_adjacency_lines() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);

    roadnet()
        .args(["build", network.to_str().unwrap()])
        .assert()
        .success()
        .stdout("A: B(5), C(12)\nB: C(3)\nC:\n");
}

#[test]
fn build_json_emits_ordered_object() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);

    let output = roadnet()
        .args(["build", network.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(value["A"]["B"], 5);
    assert_eq!(value["B"]["C"], 3);
    assert_eq!(value["C"], serde_json::json!({}));
}

#[test]
fn query_streams_results_in_command_order() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);
    let commands = write_fixture(
        &dir,
        "commands.txt",
        "\
QUERY SHORTEST_PATH A C
TRAFFIC_REPORT A B +10
QUERY SHORTEST_PATH A C
QUERY K_PATHS A C 2
",
    );

    roadnet()
        .args([
            "query",
            network.to_str().unwrap(),
            commands.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            "SHORTEST_PATH A C: A -> B -> C (cost: 8)\n\
             SHORTEST_PATH A C: A -> C (cost: 12)\n\
             K_PATHS A C:\n\
             1) A -> C (12)\n\
             2) A -> B -> C (18)\n",
        );
}

#[test]
fn malformed_lines_go_to_stderr_and_leave_the_exit_code_alone() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);
    let commands = write_fixture(
        &dir,
        "commands.txt",
        "\
TRAFFIC_REPORT A B
QUERY SHORTEST_PATH A C
",
    );

    roadnet()
        .args([
            "query",
            network.to_str().unwrap(),
            commands.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SHORTEST_PATH A C: A -> B -> C (cost: 8)",
        ))
        .stderr(predicate::str::contains("Error processing line 1:"));
}

#[test]
fn unknown_cities_are_reported_as_no_path() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);
    let commands = write_fixture(&dir, "commands.txt", "QUERY SHORTEST_PATH A Z\n");

    roadnet()
        .args([
            "query",
            network.to_str().unwrap(),
            commands.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("SHORTEST_PATH A Z: No path found\n");
}

#[test]
fn missing_network_file_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("missing.txt");

    roadnet()
        .args(["build", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network definition"));
}

#[test]
fn missing_command_file_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(&dir, "network.txt", NETWORK);
    let missing = dir.path().join("missing.txt");

    roadnet()
        .args(["query", network.to_str().unwrap(), missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open command file"));
}

#[test]
fn invalid_network_definitions_are_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(
        &dir,
        "network.txt",
        "\
CITIES
A
A
",
    );

    roadnet()
        .args(["build", network.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate city"));
}

#[test]
fn multi_word_city_names_render_in_build_output() {
    let dir = TempDir::new().expect("create temp dir");
    let network = write_fixture(
        &dir,
        "network.txt",
        "\
CITIES
New York
Boston
ROADS
New York Boston 4
",
    );

    roadnet()
        .args(["build", network.to_str().unwrap()])
        .assert()
        .success()
        .stdout("New York: Boston(4)\nBoston:\n");
}
