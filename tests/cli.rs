use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::net::TcpListener;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("site-pulse").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color").arg("--delay").arg("0");
    cmd
}

// A localhost port with nothing listening on it
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[test]
fn empty_input_creates_empty_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sites.csv"), "").unwrap();

    cmd(&dir).arg("sites.csv").assert().success().stdout(contains("Total: 0"));

    assert_eq!(fs::read_to_string(dir.path().join("working.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(dir.path().join("nworking.txt")).unwrap(), "");
}

#[test]
fn missing_input_argument_is_fatal() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .arg("nope.csv")
        .assert()
        .code(2)
        .stderr(contains("does not exist"));
}

#[test]
fn prompt_retries_until_file_exists() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sites.csv"), "").unwrap();

    cmd(&dir)
        .write_stdin("nope.csv\nsites.csv\n")
        .assert()
        .success()
        .stdout(contains("Enter the name of the file: "))
        .stdout(contains("File: nope.csv doesn't exist"));
}

#[test]
fn closed_stdin_is_fatal() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(contains("standard input closed"));
}

#[test]
fn unreachable_site_goes_to_nworking() {
    let dir = TempDir::new().unwrap();
    let host = format!("127.0.0.1:{}", closed_port());
    fs::write(dir.path().join("sites.csv"), format!("{}\n", host)).unwrap();

    cmd(&dir)
        .args(["sites.csv", "--timeout", "5"])
        .assert()
        .code(1)
        .stdout(contains(format!("https://{} - status: N/A FAIL", host)));

    assert_eq!(fs::read_to_string(dir.path().join("working.txt")).unwrap(), "");
    assert_eq!(
        fs::read_to_string(dir.path().join("nworking.txt")).unwrap(),
        format!("https://{}\n", host)
    );
}

#[test]
fn output_dir_and_json_summary() {
    let dir = TempDir::new().unwrap();
    let host = format!("127.0.0.1:{}", closed_port());
    fs::write(dir.path().join("sites.csv"), format!("{}\n", host)).unwrap();

    cmd(&dir)
        .args(["sites.csv", "--json", "--output-dir", "out"])
        .assert()
        .code(1)
        .stdout(contains("\"unreachable\": ["))
        .stdout(contains("\"outcome\": \"unreachable\""));

    assert!(dir.path().join("out").join("working.txt").is_file());
    assert!(dir.path().join("out").join("nworking.txt").is_file());
}
