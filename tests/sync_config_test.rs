use predicates::prelude::*;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_empty_chat_db(dir: &Path) -> PathBuf {
    let path = dir.join("chat.db");
    let conn = Connection::open(&path).expect("create chat db");
    conn.execute_batch(
        r#"
        CREATE TABLE chat (ROWID INTEGER PRIMARY KEY, chat_identifier TEXT);
        CREATE TABLE message (
            ROWID INTEGER PRIMARY KEY,
            date INTEGER,
            text TEXT,
            cache_has_attachments INTEGER
        );
        CREATE TABLE chat_message_join (chat_id INTEGER, message_id INTEGER);
        INSERT INTO chat (ROWID, chat_identifier) VALUES (1, 'chat123');
        "#,
    )
    .expect("create schema");
    path
}

#[test]
fn config_file_supplies_chat_and_sync_sections() {
    let tmp = tempdir().expect("tempdir");
    let db_path = write_empty_chat_db(tmp.path());

    let config_path = tmp.path().join("chatsync.toml");
    fs::write(
        &config_path,
        format!(
            "[chat]\ndb_path = {:?}\nchat_id = \"chat123\"\nlink_filter = \"spotify\"\n",
            db_path.to_string_lossy()
        ),
    )
    .expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config_path)
        .arg("links")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 links from chat db"));
}

#[test]
fn explicit_config_path_must_exist() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .arg("--config")
        .arg(tmp.path().join("missing.toml"))
        .arg("links")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn sync_fails_fast_without_credentials() {
    let tmp = tempdir().expect("tempdir");
    let db_path = write_empty_chat_db(tmp.path());

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .env("CHATSYNC_CONFIG_PATH", tmp.path().join("no-such.toml"))
        .env("CHATSYNC_DB_PATH", &db_path)
        .env("CHATSYNC_CHAT_ID", "chat123")
        .env("CHATSYNC_PLAYLIST_NAME", "tyvek gang")
        .arg("sync")
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing credentials"));
}

#[test]
fn status_flags_incomplete_configuration() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .env("CHATSYNC_CONFIG_PATH", tmp.path().join("no-such.toml"))
        .env("CHATSYNC_DB_PATH", tmp.path().join("absent.db"))
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chat db not found"))
        .stderr(predicate::str::contains("no chat id configured"))
        .stderr(predicate::str::contains("spotify credentials incomplete"));
}

#[test]
fn status_passes_with_complete_configuration() {
    let tmp = tempdir().expect("tempdir");
    let db_path = write_empty_chat_db(tmp.path());

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .env("CHATSYNC_CONFIG_PATH", tmp.path().join("no-such.toml"))
        .env("CHATSYNC_DB_PATH", &db_path)
        .env("CHATSYNC_CHAT_ID", "chat123")
        .env("CHATSYNC_PLAYLIST_NAME", "tyvek gang")
        .env("SPOTIFY_CLIENT_ID", "id")
        .env("SPOTIFY_CLIENT_SECRET", "secret")
        .env("SPOTIFY_REFRESH_TOKEN", "token")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("playlist_name=tyvek gang"));
}

#[test]
fn resolve_fails_fast_without_credentials() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("chatsync")
        .current_dir(tmp.path())
        .env("CHATSYNC_CONFIG_PATH", tmp.path().join("no-such.toml"))
        .arg("resolve")
        .arg("tyvek gang")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing credentials"));
}
