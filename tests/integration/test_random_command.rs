//! Integration tests for the random command.

use std::fs;
use tempfile::TempDir;

use crate::helpers::{arg, list_files, read_fasta, run_genomesim};

#[test]
fn test_random_writes_named_files() {
    let output = TempDir::new().unwrap();
    let result = run_genomesim(&[
        "random",
        "-n",
        "3",
        "-o",
        arg(output.path()),
        "--length-mean",
        "1000",
        "--seed",
        "12",
    ]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    assert_eq!(
        list_files(output.path()),
        vec![
            "12_random_sequence_1_default_1mer.fasta",
            "12_random_sequence_2_default_1mer.fasta",
            "12_random_sequence_3_default_1mer.fasta",
        ]
    );

    let records = read_fasta(&output.path().join("12_random_sequence_2_default_1mer.fasta"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, "random_sequence_2");
    let seq = &records[0].1;
    assert!(!seq.is_empty());
    assert!(seq.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
}

#[test]
fn test_random_base_composition_is_roughly_uniform() {
    let output = TempDir::new().unwrap();
    let result = run_genomesim(&[
        "random",
        "-n",
        "1",
        "-o",
        arg(output.path()),
        "--length-mean",
        "20000",
        "--length-stddev",
        "0",
        "--seed",
        "4",
    ]);
    assert!(result.status.success());

    let records = read_fasta(&output.path().join("4_random_sequence_1_default_1mer.fasta"));
    let seq = records[0].1.as_bytes();
    assert_eq!(seq.len(), 20_000);
    for base in [b'A', b'C', b'G', b'T'] {
        let count = seq.iter().filter(|&&b| b == base).count();
        assert!((4_500..5_500).contains(&count), "{} count {count}", char::from(base));
    }
}

#[test]
fn test_random_is_deterministic_with_seed() {
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();
    for out in [&out1, &out2] {
        let result = run_genomesim(&[
            "random",
            "-n",
            "2",
            "-o",
            arg(out.path()),
            "--length-mean",
            "500",
            "--randomness",
            "0.05",
            "--seed",
            "21",
        ]);
        assert!(result.status.success());
    }

    for name in list_files(out1.path()) {
        assert_eq!(
            fs::read(out1.path().join(&name)).unwrap(),
            fs::read(out2.path().join(&name)).unwrap()
        );
    }
}

#[test]
fn test_random_without_seed_uses_random_label() {
    let output = TempDir::new().unwrap();
    let result =
        run_genomesim(&["random", "-n", "1", "-o", arg(output.path()), "--length-mean", "100"]);
    assert!(result.status.success());
    assert_eq!(list_files(output.path()), vec!["random_random_sequence_1_default_1mer.fasta"]);
}

#[test]
fn test_random_zero_files_is_error() {
    let output = TempDir::new().unwrap();
    let result = run_genomesim(&["random", "-n", "0", "-o", arg(output.path())]);
    assert!(!result.status.success());
}
