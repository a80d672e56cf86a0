use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn simulate_prints_textbook_result() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args(["simulate", "-p", "Widget", "-d", "1000", "-s", "100", "-k", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Economic order quantity: 200.00 units"))
        .stdout(predicate::str::contains("Minimum total cost: BRL 1000.00"))
        .stdout(predicate::str::contains("Orders per year: 5"))
        .stdout(predicate::str::contains("Reorder interval: 73 days"))
        .stdout(predicate::str::contains("Annual savings: n/a"));
}

#[test]
fn simulate_writes_yaml_with_baseline_comparison() {
    let output_file = assert_fs::NamedTempFile::new("simulation.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "simulate", "-p", "Parafuso", "-d", "1200", "-s", "50", "-k", "2", "-c", "50", "-o",
        output_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Current total cost: BRL 1250.00"))
        .stdout(predicate::str::contains("Annual savings: BRL 760.10"))
        .stdout(predicate::str::contains(format!(
            "Simulation result written to {output_arg}"
        )));

    let output = std::fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("product_name: Parafuso"));
    assert!(output.contains("economic_order_quantity:"));
    assert!(output.contains("current_total_cost: 1250.0"));
    assert!(output.contains("cost_curve:"));
    assert!(output.contains("near_optimum: true"));
}

#[test]
fn simulate_prints_json_when_requested() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "simulate", "-p", "Widget", "-d", "1000", "-s", "100", "-k", "5", "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"economic_order_quantity\": 200.0"))
        .stdout(predicate::str::contains("\"annual_savings\": null"));
}

#[test]
fn simulate_json_stdout_stays_parseable_with_output_file() {
    let output_file = assert_fs::NamedTempFile::new("simulation.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "simulate", "-p", "Widget", "-d", "1000", "-s", "100", "-k", "5", "--json", "-o",
        output_arg,
    ]);

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Simulation result written to {output_arg}"
        )));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["product_name"], "Widget");
    assert_eq!(parsed["economic_order_quantity"], 200.0);
    output_file.assert(predicate::str::contains("product_name: Widget"));
}

#[test]
fn simulate_uses_sample_count_and_currency_from_config() {
    let config_file = assert_fs::NamedTempFile::new("planner.yaml").unwrap();
    config_file
        .write_str("sample_count: 10\ncurrency: USD\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args([
        "simulate",
        "-p",
        "Widget",
        "-d",
        "1000",
        "-s",
        "100",
        "-k",
        "5",
        "--config",
        config_file.path().to_str().unwrap(),
    ]);

    // step = ceil(340 / 10) = 34 => 60, 94, ..., 400
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimum total cost: USD 1000.00"))
        .stdout(predicate::str::contains("94 | "))
        .stdout(predicate::str::contains("400 | "));
}

#[test]
fn simulate_rejects_non_positive_demand() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("optistock");
    cmd.args(["simulate", "-p", "Widget", "-d", "0", "-s", "100", "-k", "5"]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to simulate"))
        .stderr(predicate::str::contains("annual_demand"));
}
