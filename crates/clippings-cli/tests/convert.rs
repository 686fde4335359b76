#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use std::fs;

use common::{clippings_cmd, fixture_path};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("output written")).expect("valid json")
}

#[test]
fn converts_fixture_to_file() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("clippings.json");

    clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Wrote 7 quotes from 4 titles by 4 authors",
        ));

    let json = read_json(&output);
    assert_eq!(
        json["Ursula K. Le Guin"]["Tales from Earthsea"]["l0163"][0]["date"],
        "20170618-0902"
    );
    assert_eq!(
        json["ZZNOAUTHOR"]["Meditations"]["p42"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n    \"Gabriel García Márquez\": {"));
}

#[test]
fn uses_configured_default_paths() {
    let tmp = tempdir().unwrap();
    let work = tmp.path().join("work");
    fs::create_dir_all(work.join("in")).unwrap();
    fs::copy(fixture_path(), work.join("in/My Clippings.txt")).unwrap();

    clippings_cmd(tmp.path())
        .current_dir(&work)
        .assert()
        .success();

    let json = read_json(&work.join("out/clippings.json"));
    assert!(json.get("John Updike").is_some());
}

#[test]
fn convert_subcommand_matches_bare_invocation() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("out.json");

    clippings_cmd(tmp.path())
        .arg("convert")
        .arg(fixture_path())
        .arg(&output)
        .assert()
        .success();

    assert!(read_json(&output).get("Ursula K. Le Guin").is_some());
}

#[test]
fn dash_writes_json_to_stdout() {
    let tmp = tempdir().unwrap();

    let assert = clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg("-")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json["ZZNOAUTHOR"]["Meditations"]["p07"][0]["quote"],
        "Très bien — « l’âme » 心"
    );
}

#[test]
fn missing_input_exits_not_found() {
    let tmp = tempdir().unwrap();

    clippings_cmd(tmp.path())
        .arg(tmp.path().join("absent.txt"))
        .arg(tmp.path().join("out.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn malformed_month_exits_invalid_input_without_output() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("bad.txt");
    let output = tmp.path().join("out/clippings.json");
    fs::write(
        &input,
        "Book (Writer)\n- Highlight Loc. 1 | Added on Monday, Smarch 4, 2019 9:15 AM\n\nq\n==========\n",
    )
    .unwrap();

    clippings_cmd(tmp.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Smarch"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_names_cause_once() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let assert = clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(blocker.join("out.json"))
        .assert()
        .code(5);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let line = stderr
        .lines()
        .find(|l| l.starts_with("error:"))
        .expect("error line");
    assert!(line.contains("Failed to create directory"));
    assert_eq!(line.matches("(os error").count(), 1, "{line}");
}

#[test]
fn non_utf8_input_exits_invalid_input() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("latin1.txt");
    fs::write(&input, b"Caf\xe9 (Writer)\n").unwrap();

    clippings_cmd(tmp.path())
        .arg(&input)
        .arg(tmp.path().join("out.json"))
        .assert()
        .code(4);
}

#[test]
fn substitution_file_merges_authors() {
    let tmp = tempdir().unwrap();
    let subs = tmp.path().join("subs.json");
    let output = tmp.path().join("out.json");
    fs::write(
        &subs,
        r#"[{"from": {"author": "ZZNOAUTHOR", "title": "Meditations"},
             "to": {"author": "Marcus Aurelius", "title": "Meditations"}}]"#,
    )
    .unwrap();

    clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(&output)
        .arg("--substitute")
        .arg(&subs)
        .assert()
        .success();

    let json = read_json(&output);
    assert!(json.get("ZZNOAUTHOR").is_none());
    assert_eq!(
        json["Marcus Aurelius"]["Meditations"]["p42"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn sentinel_author_flag_overrides_default() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("out.json");

    clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(&output)
        .args(["--sentinel-author", "Unknown"])
        .assert()
        .success();

    let json = read_json(&output);
    assert!(json.get("Unknown").is_some());
    assert!(json.get("ZZNOAUTHOR").is_none());
}

#[test]
fn malformed_config_exits_usage() {
    let tmp = tempdir().unwrap();
    fs::write(common::config_path(tmp.path()), "[convert\nindent = ").unwrap();

    clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(tmp.path().join("out.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn configured_indent_is_used() {
    let tmp = tempdir().unwrap();
    fs::write(
        common::config_path(tmp.path()),
        "[convert]\nindent = 2\nsentinel_author = \"Anon\"\n",
    )
    .unwrap();
    let output = tmp.path().join("out.json");

    clippings_cmd(tmp.path())
        .arg(fixture_path())
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n  \"Anon\": {"));
}
