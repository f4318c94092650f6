//! Integration tests for the subsample command.

use std::fs;
use tempfile::TempDir;

use crate::helpers::{
    REFERENCE_A, REFERENCE_B, arg, list_files, read_fasta, run_genomesim, write_fasta,
};

#[test]
fn test_subsample_fragments_are_substrings() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "multi.fasta", &[("chr1", REFERENCE_A), ("chr2", REFERENCE_B)]);
    let out_dir = output.path().join("frags");

    let result = run_genomesim(&[
        "subsample",
        "-i",
        arg(input.path()),
        "-o",
        arg(&out_dir),
        "-l",
        "20",
        "-n",
        "4",
        "--seed",
        "2",
    ]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    let combined = format!("{REFERENCE_A}{REFERENCE_B}");
    let records = read_fasta(&out_dir.join("multi.fasta"));
    assert_eq!(records.len(), 4);
    for (i, (name, seq)) in records.iter().enumerate() {
        assert_eq!(name, &format!("multi.fasta_{i}"));
        assert_eq!(seq.len(), 20);
        assert!(combined.contains(seq.as_str()));
    }
}

#[test]
fn test_subsample_caps_fragment_count_by_length() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fa", &[("chr1", REFERENCE_B)]);

    let result = run_genomesim(&[
        "subsample",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-l",
        "10",
        "-n",
        "1000",
    ]);
    assert!(result.status.success());

    let records = read_fasta(&output.path().join("ref.fa"));
    assert_eq!(records.len(), REFERENCE_B.len() / 10);
}

#[test]
fn test_subsample_is_deterministic_with_seed() {
    let input = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();

    for out in [&out1, &out2] {
        let result = run_genomesim(&[
            "subsample",
            "-i",
            arg(input.path()),
            "-o",
            arg(out.path()),
            "-l",
            "15",
            "-n",
            "3",
            "--seed",
            "99",
        ]);
        assert!(result.status.success());
    }
    assert_eq!(
        fs::read(out1.path().join("ref.fasta")).unwrap(),
        fs::read(out2.path().join("ref.fasta")).unwrap()
    );
}

#[test]
fn test_subsample_skips_short_reference() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "long.fasta", &[("chr1", REFERENCE_A)]);
    write_fasta(input.path(), "short.fasta", &[("chr1", "ACGT")]);

    let result = run_genomesim(&[
        "subsample",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-l",
        "50",
        "-n",
        "1",
    ]);
    assert!(result.status.success());
    assert_eq!(list_files(output.path()), vec!["long.fasta"]);
}

#[test]
fn test_subsample_all_short_exits_non_zero() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "short.fasta", &[("chr1", "ACGT")]);

    let result = run_genomesim(&[
        "subsample",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-l",
        "50",
    ]);
    assert!(!result.status.success());
}
