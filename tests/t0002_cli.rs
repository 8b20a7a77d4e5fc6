//! Tests of the `objview` binary over real loose-object files on disk.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use predicates::prelude::*;

fn deflate(raw: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw).unwrap();
    encoder.finish().unwrap()
}

const HELLO_REPORT: &str = "signature: b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0\n\
                            type: blob\n\
                            size: 5\n\
                            ----------------------------------------\n\
                            68 65 6c 6c 6f                                      hello\n";

#[test]
fn report_for_loose_object_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loose");
    fs::write(&path, deflate(b"blob 5\0hello")).unwrap();

    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(HELLO_REPORT)
        .stderr("");
}

#[test]
fn report_for_object_id_under_git_dir() {
    let dir = tempfile::tempdir().unwrap();
    let fan_out = dir.path().join("objects").join("b6");
    fs::create_dir_all(&fan_out).unwrap();
    fs::write(
        fan_out.join("fc4c620b67d95f953a5c1c1230aaab5db5a1b0"),
        deflate(b"blob 5\0hello"),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.args(&[
        "--git-dir",
        dir.path().to_str().unwrap(),
        "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0",
    ])
    .assert()
    .success()
    .stdout(HELLO_REPORT);
}

#[test]
fn report_for_stdin() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(deflate(b"blob 5\0hello"))
        .assert()
        .success()
        .stdout(HELLO_REPORT);
}

#[test]
fn size_mismatch_warns_on_stderr_only() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(deflate(b"blob 99\0hello"))
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 99\n").and(predicate::str::contains("mismatch").not()))
        .stderr("warning: size mismatch: header claims 99 bytes but payload has 5\n");
}

#[test]
fn unknown_type_warns_and_hex_dumps() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(deflate(b"wotsit 2\0hi"))
        .assert()
        .success()
        .stdout(predicate::str::contains("type: wotsit\n").and(predicate::str::contains("68 69")))
        .stderr(predicate::str::contains("unrecognized object type `wotsit`"));
}

#[test]
fn error_not_a_zlib_stream() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(b"definitely not zlib".to_vec())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to decompress object"));
}

#[test]
fn error_malformed_header() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(deflate(b"blob 5hello"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "malformed object header: no NUL after the declared size",
        ));
}

#[test]
fn error_malformed_tree() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("-")
        .write_stdin(deflate(b"tree 5\0short"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed tree content"));
}

#[test]
fn version() {
    let mut cmd = Command::cargo_bin("objview").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("objview 0."));
}
