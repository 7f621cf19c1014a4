//! CLI contract tests for the generate and script subcommands.
//!
//! These tests validate:
//! - Help output lists the subcommands
//! - JSON output shape and schema_version
//! - Step rejections are reported, not fatal
//! - Boundary errors come back as `ok: false` with a failing exit status

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Get the CLI command
#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("balance_cli").unwrap();
    // Keep a stray balance_config.toml in the working directory out of the way.
    cmd.args(["--config", "/nonexistent/balance_config.toml"]);
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(&stdout).expect("Invalid JSON output")
}

fn eval_side(side: &Value, x: i64) -> i64 {
    side["coeff"].as_i64().unwrap() * x + side["constant"].as_i64().unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("repl"));
}

#[test]
fn test_generate_outputs_balanced_puzzle() {
    for difficulty in ["easy", "medium", "hard"] {
        let output = cli()
            .args(["generate", "--difficulty", difficulty, "--seed", "17"])
            .output()
            .expect("Failed to run CLI");
        assert!(output.status.success());

        let json = json_stdout(&output);
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["ok"], true);
        assert_eq!(json["difficulty"], difficulty);
        assert_eq!(json["seed"], 17);

        let x = json["solution"].as_i64().unwrap();
        assert_eq!(eval_side(&json["left"], x), eval_side(&json["right"], x));
        assert!(json["pans"]["left"]["groups"].is_array());
        assert!(json["equation"].as_str().unwrap().contains(" = "));
    }
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let run = || {
        cli()
            .args(["generate", "--difficulty", "hard", "--seed", "123"])
            .output()
            .expect("Failed to run CLI")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_rejects_unknown_difficulty() {
    let output = cli()
        .args(["generate", "--difficulty", "expert"])
        .output()
        .expect("Failed to run CLI");
    assert!(!output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["input"], "expert");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("invalid difficulty"));
}

#[test]
fn test_script_solves_typed_equation() {
    let output = cli()
        .args(["script", "--equation", "x + 5 = 12", "--step", "sub 5"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["start_equation"], "x + 5 = 12");
    assert_eq!(json["equation"], "x = 7");
    assert_eq!(json["solution"], 7);
    assert_eq!(json["solved"], true);
    assert_eq!(json["solved_side"], "left");
    assert_eq!(json["steps"][0], "Applied (- 5) to both sides.");
    assert_eq!(json["rejections"].as_array().unwrap().len(), 0);
    assert_eq!(json["feedback"]["kind"], "success");
}

#[test]
fn test_script_reports_rejections_and_continues() {
    let output = cli()
        .args([
            "script",
            "--equation",
            "3x + 2 = x + 14",
            "--step",
            "sub 2",
            "--step",
            "div 3",
            "--step",
            "mul 0",
            "--step",
            "pow 2",
            "--step",
            "sub x",
        ])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["equation"], "3x = x + 12");
    assert_eq!(json["steps"].as_array().unwrap().len(), 1);
    assert_eq!(json["solved"], false);

    let rejections = json["rejections"].as_array().unwrap();
    let kinds: Vec<_> = rejections.iter().map(|r| r["kind"].clone()).collect();
    assert_eq!(
        kinds,
        vec!["non_integer_division", "zero_operand", "parse", "parse"]
    );
    assert_eq!(rejections[0]["index"], 1);
    assert_eq!(rejections[0]["reason"], "non-integer result");
    assert_eq!(
        rejections[1]["reason"],
        "zero operand not allowed for multiply/divide"
    );
}

#[test]
fn test_script_refuses_steps_after_solved() {
    let output = cli()
        .args([
            "script",
            "--equation",
            "2x = 8",
            "--step",
            "div 2",
            "--step",
            "add 1",
        ])
        .output()
        .expect("Failed to run CLI");
    let json = json_stdout(&output);
    assert_eq!(json["equation"], "x = 4");
    assert_eq!(json["rejections"][0]["kind"], "already_solved");
    assert_eq!(json["steps"].as_array().unwrap().len(), 1);
}

#[test]
fn test_script_generated_puzzle() {
    let output = cli()
        .args(["script", "--difficulty", "medium", "--seed", "5", "--step", "add 0"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["difficulty"], "medium");
    assert_eq!(json["start_equation"], json["equation"]);
    assert_eq!(json["steps"][0], "Applied (+ 0) to both sides.");
}

#[test]
fn test_script_rejects_degenerate_equation() {
    cli()
        .args(["script", "--equation", "2x + 1 = 2x + 3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"ok\": false"))
        .stdout(predicate::str::contains("x cancels out"));
}

#[test]
fn test_script_rejects_fractional_root() {
    cli()
        .args(["script", "--equation", "4x = 6"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("3/2"));
}

#[test]
fn test_script_equation_conflicts_with_seed() {
    cli()
        .args(["script", "--equation", "x = 1", "--seed", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
