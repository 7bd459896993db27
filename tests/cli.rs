use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const FEED: &str = r#"{
  "topics": ["Наука", "Технологии"],
  "articles": [
    {"title": "A", "url": "https://example.org/a", "topics": ["Наука"]},
    {"title": "B", "topics": ["Технологии"]},
    {"title": "C", "topics": ["наука", "ИИ"]},
    {"title": "D"},
    {"title": "E", "topics": ["Технологии"]},
    {"title": "F", "topics": ["Наука"]},
    {"title": "G", "topics": ["Технологии", "Наука"]}
  ]
}"#;

fn write_feed(dir: &Path) -> String {
    let path = dir.join("data.json");
    std::fs::write(&path, FEED).unwrap();
    path.to_string_lossy().into_owned()
}

fn digest() -> Command {
    Command::cargo_bin("digest").unwrap()
}

#[test]
fn cli_shows_help() {
    digest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("digest"));
}

#[test]
fn show_prints_daily_selection_for_fixed_date() {
    let dir = tempdir().unwrap();
    let data = write_feed(dir.path());
    let out = digest()
        .args(["show", "--data", &data, "--date", "2024-06-15"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let titles: Vec<&str> = text
        .lines()
        .filter_map(|l| l.split_once(". ").map(|(_, t)| t))
        .collect();
    assert_eq!(titles, ["A", "C", "E", "G", "D", "F"]);
}

#[test]
fn show_json_honours_query_topic() {
    let dir = tempdir().unwrap();
    let data = write_feed(dir.path());
    let out = digest()
        .args([
            "show",
            "--json",
            "--data",
            &data,
            "--date",
            "2024-06-15",
            "--query",
            "?topic=%20%D0%BD%D0%B0%D1%83%D0%BA%D0%B0%20",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let titles: Vec<&str> = v["state"]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "G", "F", "C"]);
}

#[test]
fn show_with_missing_feed_prints_fallback() {
    let dir = tempdir().unwrap();
    digest()
        .args(["show", "--data"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Не удалось загрузить данные"));
}

#[test]
fn build_writes_sidebar_page() {
    let dir = tempdir().unwrap();
    let data = write_feed(dir.path());
    let out = dir.path().join("public").join("index.html");
    digest()
        .args(["build", "--layout", "sidebar", "--theme", "dark", "--data", &data])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("sidebar-right"));
}

#[test]
fn export_infers_format_from_extension() {
    let dir = tempdir().unwrap();
    let data = write_feed(dir.path());
    let out = dir.path().join("daily.json");
    digest()
        .args(["export", "-n", "3", "--date", "2024-06-15", "--data", &data])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let titles: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "C", "E"]);
}

#[test]
fn export_fails_without_feed() {
    let dir = tempdir().unwrap();
    digest()
        .args(["export", "--data"])
        .arg(dir.path().join("nope.json"))
        .arg("--out")
        .arg(dir.path().join("x.csv"))
        .assert()
        .failure();
}

#[test]
fn theme_preference_round_trip() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("theme");
    digest()
        .args(["theme", "dark", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("dark\n");
    digest()
        .args(["theme", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("dark\n");
    digest()
        .args(["theme", "--toggle", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout("light\n");
}

#[test]
fn invalid_date_is_rejected() {
    digest()
        .args(["show", "--date", "15.06.2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
