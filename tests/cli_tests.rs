use serde_json::Value;
use std::fs;
use std::process::Command;

#[test]
fn generate_then_load() {
    let gen = env!("CARGO_BIN_EXE_gen_words");
    let load = env!("CARGO_BIN_EXE_load_words");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("random_words.txt");

    let output = Command::new(gen)
        .args([
            "--output",
            corpus.to_str().unwrap(),
            "--count",
            "25",
            "--seed",
            "3",
            "--json",
        ])
        .output()
        .expect("gen_words failed");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"].as_u64().unwrap(), 25);

    let output = Command::new(load)
        .args(["--input", corpus.to_str().unwrap()])
        .output()
        .expect("load_words failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("The first ten words:\n"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with(">> ")).count(), 11);
    assert!(stdout.contains("********************\n"));
    assert!(stdout.trim_end().ends_with("Number of words: 25"));
}

#[test]
fn load_missing_file_fails() {
    let load = env!("CARGO_BIN_EXE_load_words");
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = Command::new(load)
        .args(["--input", missing.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn load_json_summary() {
    let load = env!("CARGO_BIN_EXE_load_words");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("words.txt");
    fs::write(&corpus, "a b c").unwrap();
    let output = Command::new(load)
        .args(["--input", corpus.to_str().unwrap(), "--json"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"].as_u64().unwrap(), 3);
    assert_eq!(json["preview"].as_array().unwrap().len(), 3);
}

#[test]
fn cipher_encode_decode_via_codebook() {
    let exe = env!("CARGO_BIN_EXE_cipher");
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("book.json");

    let output = Command::new(exe)
        .args([
            "encode",
            "--message",
            "hello big world",
            "--codebook",
            book.to_str().unwrap(),
        ])
        .output()
        .expect("encode failed");
    assert!(output.status.success());
    let encoded = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(encoded, "0 1 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 words from 3 tokens"));

    let output = Command::new(exe)
        .args(["decode", "--message", &encoded, "--codebook", book.to_str().unwrap()])
        .output()
        .expect("decode failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello big world");
}

#[test]
fn cipher_decode_unknown_index_fails() {
    let exe = env!("CARGO_BIN_EXE_cipher");
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("book.json");
    let status = Command::new(exe)
        .args(["encode", "--message", "a b a", "--codebook", book.to_str().unwrap()])
        .status()
        .expect("encode failed");
    assert!(status.success());

    let output = Command::new(exe)
        .args(["decode", "--message", "0", "--codebook", book.to_str().unwrap()])
        .output()
        .expect("decode failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not in the codebook"));
}

#[test]
fn cipher_demo_by_default() {
    let exe = env!("CARGO_BIN_EXE_cipher");
    let output = Command::new(exe).output().expect("demo failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], wordcodec::DEMO_MESSAGE);
}

#[test]
fn cipher_reports_repeated_tokens() {
    let exe = env!("CARGO_BIN_EXE_cipher");
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("book.json");
    let output = Command::new(exe)
        .args(["encode", "--message", "a b a", "--codebook", book.to_str().unwrap()])
        .output()
        .expect("encode failed");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 words from 3 tokens"));
}

#[test]
fn load_last_index_limits_preview() {
    let load = env!("CARGO_BIN_EXE_load_words");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("words.txt");
    fs::write(&corpus, "a b c d e f g h i j k l m").unwrap();
    let output = Command::new(load)
        .args(["--input", corpus.to_str().unwrap(), "--last-index", "2"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let preview: Vec<&str> = stdout.lines().filter(|l| l.starts_with(">> ")).collect();
    assert_eq!(preview, vec![">> a", ">> b", ">> c"]);
    assert!(stdout.trim_end().ends_with("Number of words: 13"));
}

#[test]
fn every_binary_reports_version() {
    for exe in [
        env!("CARGO_BIN_EXE_cipher"),
        env!("CARGO_BIN_EXE_gen_words"),
        env!("CARGO_BIN_EXE_load_words"),
    ] {
        let output = Command::new(exe).arg("--version").output().expect("run failed");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    }
}
