//! Drives the `rusty_gallery` binary against scratch image databases.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DATABASE: &str = r#"{
    "0000": {"link": "", "alt": "Broken record"},
    "1b7c": {"link": "/img/sleepy-cat.jpg", "alt": "A sleepy cat", "page_url": "/cats"},
    "2f0a": {"link": "/img/logo.svg", "alt": "Logo"},
    "9e21": {"link": "https://cdn.org/happy_dog.png", "alt": "A happy dog"}
}"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("database.json"), DATABASE).unwrap();
    dir
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rusty_gallery").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn writes_gallery_page() {
    let dir = workspace();

    cmd(&dir)
        .args(["-d", "database.json", "-o", "out.html", "-t", "Pets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished!"));

    let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.contains("<title>Pets</title>"));
    assert!(html.contains("A sleepy cat"));
    assert!(html.contains("happy dog"));
    assert!(!html.contains("Logo"));
    assert!(!html.contains("Broken record"));
    assert_eq!(html.matches(r#"<figure class="image-container">"#).count(), 2);
}

#[test]
fn dumps_render_context() {
    let dir = workspace();

    cmd(&dir)
        .args(["-d", "database.json", "-o", "cards.json", "--dump-context"])
        .args(["--base-url", "https://example.com/"])
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("cards.json")).unwrap();
    let cards: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        cards[0],
        serde_json::json!({
            "template": "components.image-container",
            "context": {
                "url": "https://example.com/img/sleepy-cat.jpg",
                "alt": "A sleepy cat",
                "title": "sleepy cat",
                "page_url": "https://example.com/cats",
                "text": "A sleepy cat",
            }
        })
    );
    assert_eq!(cards[1]["context"]["page_url"], "");
    assert_eq!(cards.as_array().unwrap().len(), 2);
}

#[test]
fn max_images_caps_the_cards() {
    let dir = workspace();

    cmd(&dir)
        .args(["-o", "cards.json", "--dump-context", "--max-images", "1"])
        .args(["--database", "database.json"])
        .assert()
        .success();

    let json = fs::read_to_string(dir.path().join("cards.json")).unwrap();
    let cards: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(cards.as_array().unwrap().len(), 1);
}

#[test]
fn missing_database_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd(&dir)
        .args(["-d", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read image database"));
}

#[test]
fn invalid_base_url_fails() {
    let dir = workspace();

    cmd(&dir)
        .args(["-d", "database.json", "--base-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base url"));
}
