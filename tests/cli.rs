use std::fs;
use std::process::Command;

use tempfile::tempdir;
use zip301::{CompressedData, HuffmanCodec, Zip301Config};

fn zip301() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zip301"))
}

#[test]
fn test_encode_file_writes_beside_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("poem.txt");
    fs::write(&input, "roses are red\nviolets are blue\n").unwrap();

    let output = HuffmanCodec::encode_file(&input, &Zip301Config::default()).unwrap();
    assert_eq!(output, dir.path().join("poem.zip301"));

    let header = fs::read(&output).unwrap();
    let header = String::from_utf8_lossy(&header);
    assert!(header.contains(" newline\n"));
    assert!(header.contains("\n*****\n"));

    // The final line terminator is encoded like any other newline.
    let decoded = HuffmanCodec::decode_file(&output).unwrap();
    assert_eq!(decoded, b"roses are red\nviolets are blue\n");
}

#[test]
fn test_write_artifact_matches_encode_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("log.txt");
    fs::write(&input, "tab\there\r\n").unwrap();
    let config = Zip301Config::default();

    let from_file = HuffmanCodec::encode_file(&input, &config).unwrap();
    let from_file = fs::read(from_file).unwrap();

    let data = zip301::input::read_input(&input).unwrap();
    let output = HuffmanCodec::write_artifact(&input, &data, &config).unwrap();
    assert_eq!(output, dir.path().join("log.zip301"));
    assert_eq!(fs::read(&output).unwrap(), from_file);
    assert_eq!(HuffmanCodec::decode_file(&output).unwrap(), b"tab\there\r\n");
}

#[test]
fn test_binary_keeps_final_newline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("lines.txt");
    fs::write(&input, "a\n").unwrap();

    let out = zip301().arg(&input).output().unwrap();
    assert!(out.status.success());
    let decoded = HuffmanCodec::decode_file(&dir.path().join("lines.zip301")).unwrap();
    assert_eq!(decoded, b"a\n");
}

#[test]
fn test_binary_compresses_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.txt");
    fs::write(&input, "aaab").unwrap();

    let out = zip301().arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Zip301 Generated.");

    let artifact = CompressedData::read_file(&dir.path().join("data.zip301")).unwrap();
    assert_eq!(artifact.total_bits, 4);
    assert_eq!(HuffmanCodec::decode(&artifact).unwrap(), b"aaab");
}

#[test]
fn test_binary_empty_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    let out = zip301().arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("empty.zip301")).unwrap(), b"*****\n0\n");
}

#[test]
fn test_binary_requires_one_argument() {
    let out = zip301().output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("filename on the command line"));

    let out = zip301().args(["a.txt", "b.txt"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_binary_reports_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let out = zip301().arg(&missing).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Error opening file:"));
    assert!(!dir.path().join("nope.zip301").exists());
}
