use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use regex::Regex;
use serde_json::Value;

const HOST_NAME_ENV_VAR: &str = "RUNSTAT_HOST_NAME";
const TEST_HOST: &str = "edge-test.example.org";

fn runstat_assert(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("runstat").unwrap();
    cmd.env(HOST_NAME_ENV_VAR, TEST_HOST).args(args).assert()
}

fn stdout_of(assert: Assert) -> String {
    String::from_utf8(assert.success().get_output().stdout.clone()).unwrap()
}

#[test]
fn hex_of_text() {
    runstat_assert(&["hex", "Hi!"]).success().stdout("486921\n");
}

#[test]
fn hex_without_text_fails() {
    runstat_assert(&["hex"]).failure().stdout("");
}

#[test]
fn tag_uses_short_host_name() {
    let out = stdout_of(runstat_assert(&["tag"]));
    let re = Regex::new(r#"^"host": "edge-test", "t_us": \d{16}\n$"#).unwrap();
    assert!(re.is_match(&out), "unexpected tag: {out}");
}

#[test]
fn tag_with_run_id() {
    let out = stdout_of(runstat_assert(&["tag", "--run"]));
    let re = Regex::new(r#"^"host": "edge-test", "t_us": \d+, "run": "[0-9a-f]{16}"\n$"#).unwrap();
    assert!(re.is_match(&out), "unexpected tag: {out}");
}

#[test]
fn stat_record_is_valid_json() {
    let out = stdout_of(runstat_assert(&["stat", r#""step": "sync", "ok": true"#]));
    assert!(out.starts_with(
        r#"{ "stat": { "step": "sync", "ok": true }, "host": "edge-test", "t_us": "#
    ));

    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["stat"]["step"], "sync");
    assert_eq!(v["stat"]["ok"], true);
    assert_eq!(v["host"], "edge-test");
    assert!(v["t_us"].as_u64().unwrap() > 1_577_836_800_000_000);
    assert!(v.get("run").is_none());
}

#[test]
fn stat_with_run_flag_before_body() {
    let out = stdout_of(runstat_assert(&["stat", "--run", r#""n": 1"#]));
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["stat"]["n"], 1);
    assert_eq!(v["run"].as_str().unwrap().len(), 16);
}

#[test]
fn field_values_are_typed() {
    runstat_assert(&["field", "count", "3"])
        .success()
        .stdout("\"count\": 3\n");
    runstat_assert(&["field", "ratio", "0.5"])
        .success()
        .stdout("\"ratio\": 0.500000\n");
    runstat_assert(&["field", "err", "null"])
        .success()
        .stdout("\"err\": null\n");
    runstat_assert(&["field", "msg", "say \"hi\""])
        .success()
        .stdout("\"msg\": \"say \\\"hi\\\"\"\n");
}

#[test]
fn now_in_seconds() {
    let out = stdout_of(runstat_assert(&["now"]));
    let re = Regex::new(r"^\d{10}\.\d{6}\n$").unwrap();
    assert!(re.is_match(&out), "unexpected time: {out}");
}

#[test]
fn now_iso() {
    runstat_assert(&["now", "--iso"])
        .success()
        .stdout(predicate::str::ends_with("+00:00\n"));
}

#[test]
fn unknown_subcommand_fails() {
    runstat_assert(&["frobnicate"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: Subcommand must be one of 'hex', 'tag', 'stat', 'field', 'now'",
        ));
}

#[test]
fn extra_arguments_are_rejected() {
    runstat_assert(&["hex", "a", "b"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error: Unexpected arguments: [\"b\"]"));
    runstat_assert(&["tag", "extra"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unexpected arguments"));
}

#[test]
fn unknown_flag_is_rejected() {
    runstat_assert(&["now", "--utc"])
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unexpected arguments"));
}

#[test]
fn oversized_integer_field_keeps_digits() {
    runstat_assert(&["field", "big", "99999999999999999999"])
        .success()
        .stdout("\"big\": 99999999999999999999\n");
}
