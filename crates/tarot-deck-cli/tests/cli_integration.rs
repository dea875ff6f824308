use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use jsonschema::JSONSchema;
use serde_json::Value;

fn run_deck<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_deck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|err| panic!("failed to execute deck binary: {err}"))
}

fn run_json<I, S>(args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_deck(args);
    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "deck command failed (status={}):\nstdout:\n{}\nstderr:\n{}",
            output.status, stdout, stderr
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    serde_json::from_str(&stdout)
        .unwrap_or_else(|err| panic!("stdout is not valid JSON: {err}\nstdout:\n{stdout}"))
}

fn run_failure<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_deck(args);
    assert!(
        !output.status.success(),
        "deck command unexpectedly succeeded:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(output.stdout.is_empty(), "failed command should not print a JSON document");
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn as_i64(value: &Value, key: &str) -> i64 {
    value
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or_else(|| panic!("missing integer field `{key}` in payload: {value}"))
}

fn as_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field `{key}` in payload: {value}"))
}

fn as_array<'a>(value: &'a Value, key: &str) -> &'a Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("missing array field `{key}` in payload: {value}"))
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .unwrap_or_else(|err| panic!("failed to canonicalize repo root: {err}"))
}

fn read_json_file(path: &Path) -> Value {
    let body = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read JSON file {}: {err}", path.display()));
    serde_json::from_str(&body)
        .unwrap_or_else(|err| panic!("failed to parse JSON file {}: {err}", path.display()))
}

fn validate_schema(schema_file: &str, instance: &Value) {
    let schema_path = repo_root().join("contracts/v1/schemas").join(schema_file);
    let schema_json = read_json_file(&schema_path);
    let compiled = JSONSchema::compile(&schema_json)
        .unwrap_or_else(|err| panic!("failed to compile schema {}: {err}", schema_path.display()));

    let errors = compiled
        .validate(instance)
        .err()
        .map(|iter| iter.map(|err| err.to_string()).collect::<Vec<_>>());
    if let Some(errors) = errors {
        panic!("schema validation failed for {}:\n{}", schema_file, errors.join("\n"));
    }
}

#[test]
fn card_show_returns_first_record() {
    let payload = run_json(["card", "show", "--index", "0"]);
    validate_schema("card.json", &payload);

    assert_eq!(as_i64(&payload, "index"), 0);
    assert_eq!(as_str(&payload, "arcana"), "major");
    assert_eq!(payload.get("suit"), Some(&Value::Null));
    assert_eq!(as_str(&payload, "crystal_display_name"), "Citrine");

    let card = payload.get("card").unwrap_or_else(|| panic!("missing card: {payload}"));
    assert_eq!(as_str(card, "name"), "The Fool");
    assert_eq!(as_str(card, "crystal"), "citrine");
    assert_eq!(as_array(card, "keywords").len(), 8);
}

#[test]
fn card_show_reaches_last_record() {
    let payload = run_json(["card", "show", "--index", "77"]);
    validate_schema("card.json", &payload);

    assert_eq!(as_i64(&payload, "index"), 77);
    assert_eq!(as_str(&payload, "suit"), "wands");
    let card = payload.get("card").unwrap_or_else(|| panic!("missing card: {payload}"));
    assert_eq!(as_str(card, "name"), "Page of Wands");
}

#[test]
fn card_show_rejects_out_of_range_indexes() {
    for index in ["78", "1000"] {
        let stderr = run_failure(["card", "show", "--index", index]);
        assert!(
            stderr.contains(&format!("record not found at index {index}")),
            "stderr should name index {index}:\n{stderr}"
        );
    }

    let stderr = run_failure(["card", "show", "--index=-1"]);
    assert!(stderr.contains("record not found at index -1"), "stderr:\n{stderr}");
}

#[test]
fn card_show_rejects_non_integer_index() {
    let output = run_deck(["card", "show", "--index", "2.5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn card_show_is_deterministic() {
    let first = run_json(["card", "show", "--index", "5", "--compact"]);
    let second = run_json(["card", "show", "--index", "5"]);
    assert_eq!(first, second);
}

#[test]
fn card_find_matches_name_case_insensitively() {
    let payload = run_json(["card", "find", "--name", "the tower"]);
    validate_schema("card.json", &payload);

    assert_eq!(as_i64(&payload, "index"), 15);
    let card = payload.get("card").unwrap_or_else(|| panic!("missing card: {payload}"));
    assert_eq!(as_str(card, "name"), "The Tower");

    let stderr = run_failure(["card", "find", "--name", "The Jester"]);
    assert!(stderr.contains("no card named `The Jester`"), "stderr:\n{stderr}");
}

#[test]
fn card_list_covers_catalog_in_order() {
    let payload = run_json(["card", "list"]);
    validate_schema("card_list.json", &payload);

    assert_eq!(as_i64(&payload, "count"), 78);
    let indexes = as_array(&payload, "cards")
        .iter()
        .map(|card| as_i64(card, "index"))
        .collect::<Vec<_>>();
    assert_eq!(indexes, (0..78).collect::<Vec<_>>());
}

#[test]
fn card_list_filters_by_arcana_and_suit() {
    let majors = run_json(["card", "list", "--arcana", "major"]);
    validate_schema("card_list.json", &majors);
    assert_eq!(as_i64(&majors, "count"), 22);

    let cups = run_json(["card", "list", "--suit", "cups"]);
    validate_schema("card_list.json", &cups);
    assert_eq!(as_i64(&cups, "count"), 14);
    assert!(as_array(&cups, "cards").iter().all(|card| as_str(card, "suit") == "cups"));

    let contradictory = run_json(["card", "list", "--arcana", "major", "--suit", "swords"]);
    assert_eq!(as_i64(&contradictory, "count"), 0);
}

#[test]
fn crystal_show_lists_every_paired_card() {
    let payload = run_json(["crystal", "show", "--crystal", "rose_quartz"]);
    validate_schema("crystal.json", &payload);

    assert_eq!(as_str(&payload, "display_name"), "Rose Quartz");
    let names =
        as_array(&payload, "cards").iter().map(|card| as_str(card, "name")).collect::<Vec<_>>();
    assert_eq!(names.first().copied(), Some("The Empress"));
    assert!(names.contains(&"The Lovers"));
    assert_eq!(as_i64(&payload, "count"), i64::try_from(names.len()).unwrap_or(i64::MAX));

    let stderr = run_failure(["crystal", "show", "--crystal", "unobtainium"]);
    assert!(stderr.contains("unobtainium"), "stderr:\n{stderr}");
}

#[test]
fn crystal_show_accepts_spaced_names() {
    let spaced = run_json(["crystal", "show", "--crystal", "Rose Quartz"]);
    validate_schema("crystal.json", &spaced);
    assert_eq!(as_str(&spaced, "crystal"), "rose_quartz");

    let canonical = run_json(["crystal", "show", "--crystal", "rose_quartz"]);
    assert_eq!(spaced, canonical);
}

#[test]
fn crystal_list_is_distinct() {
    let payload = run_json(["crystal", "list", "--compact"]);
    validate_schema("crystal_list.json", &payload);
    let crystals = as_array(&payload, "crystals");
    let distinct = crystals.iter().map(|crystal| crystal.to_string()).collect::<BTreeSet<_>>();
    assert_eq!(distinct.len(), crystals.len());
    assert_eq!(as_i64(&payload, "count"), i64::try_from(crystals.len()).unwrap_or(i64::MAX));
    assert_eq!(crystals.first().and_then(Value::as_str), Some("citrine"));
}

#[test]
fn catalog_verify_reports_ok() {
    let payload = run_json(["catalog", "verify"]);
    validate_schema("catalog_verify.json", &payload);

    assert_eq!(as_i64(&payload, "size"), 78);
    assert_eq!(as_i64(&payload, "major_count"), 22);
    assert_eq!(as_i64(&payload, "minor_count"), 56);
}

#[test]
fn logs_stay_off_stdout() {
    let output = run_deck(["--log-level", "debug", "card", "show", "--index", "3", "--compact"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout should be one JSON line:\n{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolving card by index"), "stderr:\n{stderr}");
}
