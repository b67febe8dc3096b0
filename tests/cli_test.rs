use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SEED_CASE: &str = indoc! {r#"
    {
      "initiative": {
        "projectName": "Churn reduction",
        "businessModel": "saas",
        "baseline": 5,
        "reach": 1000,
        "uplift": 2,
        "unitValue": 50,
        "grossMargin": 80,
        "deliveryCost": { "people": 2, "timeMonths": 3, "monthlyCost": 8000 },
        "runCost": 2000,
        "rampUp": "3-months",
        "horizon": 24,
        "templateInputs": { "currentChurn": 5, "churnReduction": 2 }
      },
      "risks": { "marketRisk": 2, "technicalRisk": 2, "timeToMarketRisk": 4 },
      "confidence": {
        "dataQuality": "measured",
        "dependencies": "1-2",
        "upliftNature": "ab-test"
      }
    }
"#};

fn roicast() -> Command {
    Command::cargo_bin("roicast").unwrap()
}

#[test]
fn calculate_emits_json_with_all_scenarios() {
    let dir = TempDir::new().unwrap();
    let case_path = dir.path().join("case.json");
    fs::write(&case_path, SEED_CASE).unwrap();

    let output = roicast()
        .current_dir(dir.path())
        .args(["calculate", "--input", "case.json", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let result: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(result["confidenceScore"], 85);
    for scenario in ["conservative", "base", "aggressive"] {
        assert!(
            result["scenarios"][scenario].is_object(),
            "missing {scenario} scenario"
        );
    }
    assert_eq!(result["scenarios"]["base"]["paybackMonths"], 999.0);
    assert_eq!(
        result["scenarios"]["base"]["cumulativeCashflow"]
            .as_array()
            .unwrap()
            .len(),
        24
    );
}

#[test]
fn calculate_respects_a_caller_supplied_report_id() {
    let dir = TempDir::new().unwrap();
    let case_path = dir.path().join("case.json");
    fs::write(&case_path, SEED_CASE).unwrap();

    let output = roicast()
        .current_dir(dir.path())
        .args([
            "calculate",
            "--input",
            "case.json",
            "--format",
            "json",
            "--report-id",
            "q3-churn-case",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let result: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(result["reportId"], "q3-churn-case");
}

#[test]
fn calculate_stores_the_report_when_asked() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("case.json"), SEED_CASE).unwrap();

    roicast()
        .current_dir(dir.path())
        .args([
            "calculate",
            "--input",
            "case.json",
            "--format",
            "json",
            "--report-id",
            "stored-case",
            "--store",
            "reports",
        ])
        .assert()
        .success();

    let stored = dir.path().join("reports").join("stored-case.json");
    assert!(stored.exists());
    let result: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(stored).unwrap()).unwrap();
    assert_eq!(result["reportId"], "stored-case");
}

#[test]
fn implausible_template_values_abort_unless_overridden() {
    let dir = TempDir::new().unwrap();
    let case = SEED_CASE.replace("\"currentChurn\": 5", "\"currentChurn\": 20");
    fs::write(dir.path().join("case.json"), &case).unwrap();

    roicast()
        .current_dir(dir.path())
        .args(["calculate", "--input", "case.json", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("implausible"));

    roicast()
        .current_dir(dir.path())
        .args([
            "calculate",
            "--input",
            "case.json",
            "--format",
            "json",
            "--no-validate",
        ])
        .assert()
        .success();
}

#[test]
fn unknown_enum_token_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let case = SEED_CASE.replace("\"measured\"", "\"guessed\"");
    fs::write(dir.path().join("case.json"), &case).unwrap();

    roicast()
        .current_dir(dir.path())
        .args(["calculate", "--input", "case.json", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("case.json"));
}

#[test]
fn negative_reach_fails_preconditions() {
    let dir = TempDir::new().unwrap();
    let case = SEED_CASE.replace("\"reach\": 1000", "\"reach\": -3");
    fs::write(dir.path().join("case.json"), &case).unwrap();

    roicast()
        .current_dir(dir.path())
        .args(["calculate", "--input", "case.json", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reach"));
}

#[test]
fn markdown_output_lands_in_the_requested_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("case.json"), SEED_CASE).unwrap();

    roicast()
        .current_dir(dir.path())
        .args([
            "calculate",
            "--input",
            "case.json",
            "--format",
            "markdown",
            "--output",
            "report.md",
        ])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.contains("# Churn reduction"));
    assert!(report.contains("## Scenarios"));
    assert!(report.contains("| Conservative |"));
    assert!(report.contains("Never"));
}

#[test]
fn init_writes_a_config_file_once() {
    let dir = TempDir::new().unwrap();

    roicast().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".roicast.toml").exists());

    roicast().current_dir(dir.path()).arg("init").assert().failure();
    roicast()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn templates_json_lists_all_four_models() {
    let output = roicast()
        .args(["templates", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let templates: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let list = templates.as_array().unwrap();
    assert_eq!(list.len(), 4);
    let ids: Vec<&str> = list.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["saas", "ecommerce", "b2b-sales", "cost-reduction"]);
}
