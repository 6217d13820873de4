use assert_cmd::prelude::*;
use dictd::SledTable;
use predicates::str::contains;
use std::net::TcpListener;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn server_requires_port_and_file() {
    Command::cargo_bin("dict-server").unwrap().assert().failure();

    Command::cargo_bin("dict-server")
        .unwrap()
        .args(&["not-a-port", "dictionary.db"])
        .assert()
        .failure();
}

#[test]
fn server_exits_when_port_is_taken() {
    let temp_dir = TempDir::new().unwrap();
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();

    Command::cargo_bin("dict-server")
        .unwrap()
        .args(&[port.as_str()])
        .arg(temp_dir.path().join("dictionary.db"))
        .assert()
        .failure();
}

#[test]
fn server_rejects_unknown_pool() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("dict-server")
        .unwrap()
        .args(&["--pool", "fibers", "4000"])
        .arg(temp_dir.path().join("dictionary.db"))
        .assert()
        .failure();
}

#[test]
fn offline_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("dictionary.db");

    Command::cargo_bin("dict")
        .unwrap()
        .arg(&db)
        .args(&["add", "dog", "a canine"])
        .assert()
        .success();

    Command::cargo_bin("dict")
        .unwrap()
        .arg(&db)
        .args(&["add", "dog", "a wolf"])
        .assert()
        .failure()
        .stderr(contains("Word already exists"));

    Command::cargo_bin("dict")
        .unwrap()
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("dog\ta canine"));
}

#[test]
fn client_fails_without_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    Command::cargo_bin("dict-client")
        .unwrap()
        .args(&["--addr", addr.as_str(), "search", "cat"])
        .assert()
        .failure();
}

#[test]
fn server_exits_when_table_is_a_regular_file() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_db = temp_dir.path().join("dictionary.txt");
    std::fs::write(&not_a_db, "cat\ta feline\n").unwrap();

    Command::cargo_bin("dict-server")
        .unwrap()
        .arg("0")
        .arg(&not_a_db)
        .assert()
        .code(1);
}

#[test]
fn server_exits_when_table_is_locked() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("dictionary.db");
    let _held = SledTable::open(&db).unwrap();

    Command::cargo_bin("dict-server")
        .unwrap()
        .arg("0")
        .arg(&db)
        .assert()
        .code(1);
}
