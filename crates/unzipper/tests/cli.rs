#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// `<root>/zipped` holds the archives, `<root>/work` is the working directory,
/// matching the default `../zipped/` source.
struct Layout {
    root: TempDir,
}

impl Layout {
    fn new() -> Self {
        let root = tempdir().expect("temp root");
        fs::create_dir(root.path().join("zipped")).unwrap();
        fs::create_dir(root.path().join("work")).unwrap();
        Self { root }
    }

    fn zipped(&self) -> PathBuf {
        self.root.path().join("zipped")
    }

    fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("unzipper").expect("unzipper binary");
        cmd.current_dir(self.work())
            .env_remove("UNZIPPER_SOURCE")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_zip(path: &Path, members: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in members {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    fs::write(path, writer.finish().unwrap().into_inner()).expect("write zip fixture");
}

fn write_gz(path: &Path, content: &str) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    fs::write(path, encoder.finish().unwrap()).expect("write gz fixture");
}

#[test]
fn no_arguments_extracts_default_source_into_cwd() {
    let layout = Layout::new();
    write_zip(&layout.zipped().join("a.zip"), &[("x.txt", "hello")]);
    write_gz(&layout.zipped().join("b.gz"), "world");
    fs::write(layout.zipped().join("notes.txt"), "ignored").unwrap();

    layout.command().assert().success();

    assert_eq!(fs::read_to_string(layout.work().join("x.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(layout.work().join("b")).unwrap(), "world");
    assert!(!layout.work().join("notes").exists());
    assert_eq!(fs::read_dir(layout.work()).unwrap().count(), 2);
}

#[test]
fn empty_source_exits_zero() {
    let layout = Layout::new();

    layout.command().assert().success();

    assert_eq!(fs::read_dir(layout.work()).unwrap().count(), 0);
}

#[test]
fn missing_source_exits_nonzero() {
    let layout = Layout::new();
    fs::remove_dir(layout.zipped()).unwrap();

    layout
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert_eq!(fs::read_dir(layout.work()).unwrap().count(), 0);
}

#[test]
fn explicit_source_and_dest() {
    let layout = Layout::new();
    let out = layout.root.path().join("out");
    write_gz(&layout.zipped().join("table.csv.gz"), "a,b\n");

    layout
        .command()
        .arg(layout.zipped())
        .arg("--dest")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out.join("table.csv")).unwrap(), "a,b\n");
    assert_eq!(fs::read_dir(layout.work()).unwrap().count(), 0);
}

#[test]
fn source_from_environment() {
    let layout = Layout::new();
    let elsewhere = layout.root.path().join("elsewhere");
    fs::create_dir(&elsewhere).unwrap();
    write_gz(&elsewhere.join("b.gz"), "world");

    layout
        .command()
        .env("UNZIPPER_SOURCE", &elsewhere)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(layout.work().join("b")).unwrap(), "world");
}

#[test]
fn on_conflict_error_fails_and_keeps_file() {
    let layout = Layout::new();
    write_gz(&layout.zipped().join("b.gz"), "world");
    fs::write(layout.work().join("b"), "keep me").unwrap();

    layout
        .command()
        .args(["--on-conflict", "error"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(layout.work().join("b")).unwrap(), "keep me");
}

#[test]
fn on_conflict_skip_keeps_file() {
    let layout = Layout::new();
    write_gz(&layout.zipped().join("b.gz"), "world");
    fs::write(layout.work().join("b"), "keep me").unwrap();

    layout
        .command()
        .args(["--on-conflict", "skip"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(layout.work().join("b")).unwrap(), "keep me");
}

#[test]
fn corrupt_gzip_exits_nonzero() {
    let layout = Layout::new();
    fs::write(layout.zipped().join("broken.gz"), "not gzip at all").unwrap();

    layout
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid gzip stream"));

    assert_eq!(fs::read_dir(layout.work()).unwrap().count(), 0);
}

#[test]
fn verbose_logs_ignored_entries() {
    let layout = Layout::new();
    fs::write(layout.zipped().join("notes.txt"), "ignored").unwrap();

    layout
        .command()
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring entry"));
}
