#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tehillim(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tehillim").unwrap();
    cmd.current_dir(dir.path())
        .env("TEHILLIM_ROOT", dir.path())
        .env_remove("TEHILLIM_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn init_project(dir: &TempDir) {
    tehillim(dir).arg("init").assert().success();
}

fn store_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(".tehillim/tehillim_chapters.json")
}

fn saved_statuses(dir: &TempDir) -> Vec<String> {
    let data = std::fs::read_to_string(store_file(dir)).unwrap();
    let list: Vec<serde_json::Value> = serde_json::from_str(&data).unwrap();
    list.iter()
        .map(|c| c["status"].as_str().unwrap().to_string())
        .collect()
}

fn status_json(dir: &TempDir) -> serde_json::Value {
    let out = tehillim(dir)
        .args(["status", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).unwrap()
}

fn write_content(dir: &TempDir) {
    std::fs::write(
        dir.path().join("appData.json"),
        r#"{"1": ["אשרי האיש", "כי אם בתורת ה׳"], "2": "למה רגשו גוים"}"#,
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// init / status
// ---------------------------------------------------------------------------

#[test]
fn init_creates_store_and_config() {
    let dir = TempDir::new().unwrap();
    tehillim(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("150 chapters available"));

    assert!(dir.path().join(".tehillim/config.yaml").exists());
    let statuses = saved_statuses(&dir);
    assert_eq!(statuses.len(), 150);
    assert!(statuses.iter().all(|s| s == "available"));
}

#[test]
fn init_is_idempotent_and_keeps_progress() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir).args(["select", "7"]).assert().success();
    tehillim(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
    assert_eq!(saved_statuses(&dir)[6], "reading");
}

#[test]
fn status_on_fresh_store() {
    let dir = TempDir::new().unwrap();
    tehillim(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 150"))
        .stdout(predicate::str::contains("No chapters taken yet."));
}

#[test]
fn read_only_commands_do_not_create_store() {
    let dir = TempDir::new().unwrap();
    tehillim(&dir).arg("status").assert().success();
    tehillim(&dir).arg("list").assert().success();
    tehillim(&dir).args(["draw", "--seed", "5"]).assert().success();
    assert!(!store_file(&dir).exists());
    assert!(!dir.path().join(".tehillim").exists());
}

#[test]
fn corrupt_store_resets_to_fresh() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(store_file(&dir), "{ definitely not chapters").unwrap();

    let status = status_json(&dir);
    assert_eq!(status["stats"]["available"], 150);
    assert_eq!(
        std::fs::read_to_string(store_file(&dir)).unwrap(),
        "{ definitely not chapters"
    );

    tehillim(&dir).args(["select", "9"]).assert().success();
    let statuses = saved_statuses(&dir);
    assert_eq!(statuses.len(), 150);
    assert_eq!(statuses.iter().filter(|s| *s == "reading").count(), 1);
}

// ---------------------------------------------------------------------------
// select / finish
// ---------------------------------------------------------------------------

#[test]
fn select_twice_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    tehillim(&dir).args(["select", "42"]).assert().success();
    tehillim(&dir)
        .args(["select", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already taken"));

    let status = status_json(&dir);
    assert_eq!(status["stats"]["reading"], 1);
    assert_eq!(status["reading"], serde_json::json!([42]));
}

#[test]
fn select_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["select", "151"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn finish_requires_reading() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["finish", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in progress"));
    assert_eq!(saved_statuses(&dir)[9], "available");
}

#[test]
fn select_then_finish_completes_chapter() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir).args(["select", "42"]).assert().success();
    tehillim(&dir)
        .args(["finish", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 150"));

    tehillim(&dir)
        .args(["list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("מ״ב"));
}

#[test]
fn list_rejects_unknown_status() {
    let dir = TempDir::new().unwrap();
    tehillim(&dir)
        .args(["list", "--status", "skipped"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_without_accept_does_not_save() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["draw", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drew"));
    assert!(saved_statuses(&dir).iter().all(|s| s == "available"));
}

#[test]
fn draw_with_same_seed_is_repeatable() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let first = tehillim(&dir)
        .args(["draw", "--seed", "11", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = tehillim(&dir)
        .args(["draw", "--seed", "11", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn draw_accept_takes_chapter() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["draw", "--accept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Took"));
    let status = status_json(&dir);
    assert_eq!(status["stats"]["reading"], 1);
    assert_eq!(status["stats"]["available"], 149);
}

#[test]
fn draw_accept_json_reports_taken_chapter() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let out = tehillim(&dir)
        .args(["draw", "--accept", "--seed", "4", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["accepted"], true);
    let id = value["id"].as_u64().unwrap() as usize;
    assert_eq!(saved_statuses(&dir)[id - 1], "reading");
    assert_eq!(status_json(&dir)["reading"], serde_json::json!([id]));
}

#[test]
fn draw_with_nothing_available_fails_without_change() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let all_reading: Vec<serde_json::Value> = (1..=150)
        .map(|id| serde_json::json!({ "id": id, "status": "reading" }))
        .collect();
    let data = serde_json::to_string(&all_reading).unwrap();
    std::fs::write(store_file(&dir), &data).unwrap();

    tehillim(&dir)
        .arg("draw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("all chapters have already been taken"));
    assert_eq!(std::fs::read_to_string(store_file(&dir)).unwrap(), data);
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_prints_verses() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_content(&dir);
    tehillim(&dir).args(["select", "1"]).assert().success();
    tehillim(&dir)
        .args(["read", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("אשרי האיש"))
        .stdout(predicate::str::contains("כי אם בתורת ה׳"));
}

#[test]
fn read_single_string_content() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_content(&dir);
    tehillim(&dir).args(["select", "2"]).assert().success();
    let out = tehillim(&dir)
        .args(["read", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["lines"], serde_json::json!(["למה רגשו גוים"]));
}

#[test]
fn read_missing_content_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_content(&dir);
    tehillim(&dir).args(["select", "150"]).assert().success();
    tehillim(&dir)
        .args(["read", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading chapter text."));
}

#[test]
fn read_requires_reading_status() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["read", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in progress"));
}

// ---------------------------------------------------------------------------
// numeral / session / config
// ---------------------------------------------------------------------------

#[test]
fn numeral_irregular_forms() {
    let dir = TempDir::new().unwrap();
    tehillim(&dir)
        .args(["numeral", "15"])
        .assert()
        .success()
        .stdout("ט״ו\n");
    tehillim(&dir)
        .args(["numeral", "120"])
        .assert()
        .success()
        .stdout("ק״כ\n");
}

#[test]
fn session_select_and_finish() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    write_content(&dir);
    tehillim(&dir)
        .arg("session")
        .write_stdin("select 1\nlist\nfinish\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("אשרי האיש"))
        .stdout(predicate::str::contains("Finished"))
        .stdout(predicate::str::contains("1 of 150"));
    assert_eq!(saved_statuses(&dir)[0], "completed");
}

#[test]
fn session_preview_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .arg("session")
        .write_stdin("draw\nredraw\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drew"));
    assert!(saved_statuses(&dir).iter().all(|s| s == "available"));
}

#[test]
fn config_validate_warns_on_missing_content() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    tehillim(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning]"));
}

#[test]
fn custom_storage_key_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".tehillim")).unwrap();
    std::fs::write(
        dir.path().join(".tehillim/config.yaml"),
        "storage_key: shul_chapters\n",
    )
    .unwrap();
    tehillim(&dir).args(["select", "3"]).assert().success();
    assert!(dir.path().join(".tehillim/shul_chapters.json").exists());
    assert!(!store_file(&dir).exists());
}
