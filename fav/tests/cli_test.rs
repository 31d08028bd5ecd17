use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command; // Used for writing assertions

fn get_fav_cmd() -> Command {
    Command::cargo_bin("fav").unwrap()
}

fn write_manifest(dir: &tempfile::TempDir) -> PathBuf {
    let manifest = serde_json::json!({
        "entries": [
            { "path": "a/x.bin", "size": 10 },
            { "path": "a/b/y.bin", "size": 20 },
            { "path": "img10/big.bin", "size": 2048 },
            { "path": "img2/small.bin", "size": 512 },
        ]
    });
    let path = dir.path().join("manifest.json");
    fs::write(&path, manifest.to_string()).unwrap();
    path
}

#[test]
fn test_show_dirs_lists_natural_order_with_stats() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let output = get_fav_cmd()
        .arg("--archive")
        .arg(&manifest)
        .arg("show")
        .arg("dirs")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("a"));
    assert!(stdout.contains("30 B"));
    // Natural order: img2 must be listed before img10.
    let pos_img2 = stdout.find("img2").unwrap();
    let pos_img10 = stdout.find("img10").unwrap();
    assert!(pos_img2 < pos_img10, "img2 should come before img10");
    assert!(stdout.contains("2.00 KB"));
}

#[test]
fn test_show_files_lists_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let mut cmd = get_fav_cmd();
    cmd.arg("--archive")
        .arg(&manifest)
        .arg("show")
        .arg("files")
        .arg("--path")
        .arg("a");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("x.bin"))
        .stdout(predicate::str::contains("10 B"))
        .stdout(predicate::str::contains("y.bin").not());
}

#[test]
fn test_show_tree_expands_lazily_to_depth() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let mut cmd = get_fav_cmd();
    cmd.arg("--archive")
        .arg(&manifest)
        .arg("show")
        .arg("tree")
        .arg("--depth")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[root]"))
        .stdout(predicate::str::contains("a"))
        // Depth 1 stops above a/b.
        .stdout(predicate::str::contains("b  [").not());
}

#[test]
fn test_first_file_descends_into_subtree() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let mut cmd = get_fav_cmd();
    cmd.arg("--archive")
        .arg(&manifest)
        .arg("first-file")
        .arg("--path")
        .arg("a/b");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("y.bin (20 B)"));
}

#[test]
fn test_walk_lists_depth_first() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let output = get_fav_cmd()
        .arg("--archive")
        .arg(&manifest)
        .arg("walk")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let pos_a = stdout.find("a/\n").unwrap();
    let pos_ab = stdout.find("a/b/\n").unwrap();
    let pos_img2 = stdout.find("img2/\n").unwrap();
    assert!(pos_a < pos_ab);
    assert!(pos_ab < pos_img2, "a's subtree is finished before img2 starts");
    assert!(stdout.contains("a/b/y.bin"));
}

#[test]
fn test_unknown_directory_fails_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir);

    let mut cmd = get_fav_cmd();
    cmd.arg("--archive")
        .arg(&manifest)
        .arg("show")
        .arg("dirs")
        .arg("--path")
        .arg("nope");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no directory 'nope'"));
}

#[test]
fn test_missing_archive_flag_is_an_input_error() {
    let mut cmd = get_fav_cmd();
    cmd.arg("show").arg("dirs");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("archive manifest is required"));
}

#[test]
fn test_unreadable_manifest_is_an_io_error() {
    let mut cmd = get_fav_cmd();
    cmd.arg("--archive")
        .arg("/path/to/nonexistent/manifest.json")
        .arg("show")
        .arg("dirs");

    cmd.assert().failure().stderr(
        predicate::str::contains("No such file or directory")
            .or(predicate::str::contains("IoError")),
    );
}

#[test]
fn test_malformed_manifest_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    fs::write(
        &path,
        r#"{ "entries": [ { "path": "/absolute.bin", "size": 1 } ] }"#,
    )
    .unwrap();

    let mut cmd = get_fav_cmd();
    cmd.arg("--archive").arg(&path).arg("show").arg("dirs");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must be relative"));
}
