//! CLI integration tests
//!
//! These run the real `ziplist` binary against cached listings so that no
//! network access or AWS credentials are needed.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const LISTING: &str = "\
Archive:  vox1_test_wav.zip
  Length      Date    Time    Name
---------  ---------- -----   ----
   145964  05-29-2020 10:00   wav/id10270/5r0dWxy17C8/00001.wav
   289324  05-29-2020 10:00   wav/id10270/5r0dWxy17C8/00002.wav
    98604  05-29-2020 10:01   wav/id10271/1gtz-CUIygI/00001.wav
---------                     -------
   533892                     3 files
";

const EXPECTED: &str = "\
145964 wav/id10270/5r0dWxy17C8/00001.wav
289324 wav/id10270/5r0dWxy17C8/00002.wav
98604 wav/id10271/1gtz-CUIygI/00001.wav
";

fn ziplist() -> Command {
    let mut cmd = Command::cargo_bin("ziplist").unwrap();
    for var in [
        "ZIPLIST_SKIP_HEAD",
        "ZIPLIST_SKIP_TAIL",
        "ZIPLIST_NAME_DELIMITER",
        "ZIPLIST_PATH_DELIMITER",
        "ZIPLIST_PATH_PREFIX",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn cached_listing(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("filelist.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_generate_from_cached_listing() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);
    let output = temp_dir.path().join("filelist-2.txt");

    ziplist()
        .args(["generate", "-q", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn test_generate_default_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);

    ziplist()
        .current_dir(temp_dir.path())
        .args(["generate", "-q", "-i"])
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("filelist-2.txt")).unwrap();
    assert_eq!(written, EXPECTED);
}

#[test]
fn test_generate_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-i", "-", "-o"])
        .arg(&output)
        .write_stdin(LISTING)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn test_generate_empty_listing() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, "");
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_generate_fails_on_malformed_row() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(
        &temp_dir,
        &LISTING.replace("   wav/id10271", "   flac/id10271"),
    );
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 6"))
        .stderr(predicate::str::contains("wav/"));

    let partial = fs::read_to_string(&output).unwrap();
    assert_eq!(partial.lines().count(), 2);
}

#[test]
fn test_generate_with_custom_layout() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, "10 2 1 05-29-2020 10:00 wav/id001/00001.wav\n");
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args([
            "generate",
            "-q",
            "--skip-head",
            "0",
            "--skip-tail",
            "1",
            "--name-delimiter",
            " 05-29",
            "--path-delimiter",
            " wav/",
            "-i",
        ])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "10 2 1 wav/id001/00001.wav\n"
    );
}

#[test]
fn test_layout_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, "header\n   12  05-29-2020 10:00   wav/a.wav\n");
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .env("ZIPLIST_SKIP_HEAD", "1")
        .env("ZIPLIST_SKIP_TAIL", "1")
        .args(["generate", "-q", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "12 wav/a.wav\n");
}

#[test]
fn test_show_prints_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);

    ziplist()
        .args(["show", "-q", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_show_filter_and_long() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);

    ziplist()
        .args(["show", "-q", "--long", "--filter", "wav/id10271/*", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1gtz-CUIygI"))
        .stdout(predicate::str::contains("98.6"))
        .stdout(predicate::str::contains("5r0dWxy17C8").not());
}

#[test]
fn test_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);

    ziplist()
        .args(["show", "-q", "--json", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "145964""#))
        .stdout(predicate::str::contains(
            r#""path": "wav/id10270/5r0dWxy17C8/00001.wav""#,
        ));
}

#[cfg(unix)]
#[test]
fn test_generate_with_listing_command() {
    let temp_dir = TempDir::new().unwrap();
    let input = cached_listing(&temp_dir, LISTING);
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-o"])
        .arg(&output)
        .arg("--")
        .arg("cat")
        .arg(&input)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[cfg(unix)]
#[test]
fn test_strict_mode_rejects_failed_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "--strict", "-o"])
        .arg(&output)
        .args(["--", "sh", "-c", "echo 'access denied' >&2; exit 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("access denied"));

    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_failed_command_is_tolerated_without_strict() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-o"])
        .arg(&output)
        .args(["--", "sh", "-c", "exit 1"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_missing_program_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    ziplist()
        .args(["generate", "-q", "-o"])
        .arg(&output)
        .args(["--", "ziplist-no-such-program"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ziplist-no-such-program"));
}

#[test]
fn test_completions() {
    ziplist()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ziplist"));
}
