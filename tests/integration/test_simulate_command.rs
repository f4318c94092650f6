//! Integration tests for the simulate command.

use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

use crate::helpers::{
    REFERENCE_A, REFERENCE_B, arg, list_files, read_fasta, run_genomesim, write_fasta,
};

/// Distinct k-mers of a reference, for checking that output decomposes into them.
fn kmer_support(reference: &str, k: usize) -> HashSet<String> {
    reference.as_bytes().windows(k).map(|w| String::from_utf8(w.to_vec()).unwrap()).collect()
}

#[test]
fn test_simulate_basic() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "alpha.fasta", &[("chr1", REFERENCE_A)]);
    write_fasta(input.path(), "beta.fa", &[("chr1", REFERENCE_B)]);
    let out_dir = output.path().join("sims");

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(&out_dir),
        "-k",
        "3",
        "--length-mean",
        "300",
        "--length-stddev",
        "0",
        "--seed",
        "42",
    ]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    assert_eq!(
        list_files(&out_dir),
        vec!["alpha_42_sim_1_3mer.fasta", "beta_42_sim_1_3mer.fasta"]
    );

    let records = read_fasta(&out_dir.join("alpha_42_sim_1_3mer.fasta"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, "alpha_simulated_1");
    assert_eq!(records[0].1.len(), 300);

    let support = kmer_support(REFERENCE_A, 3);
    for chunk in records[0].1.as_bytes().chunks(3) {
        assert!(support.contains(std::str::from_utf8(chunk).unwrap()));
    }
}

#[test]
fn test_simulate_output_is_unwrapped_with_trailing_newline() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let reference = write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(&reference),
        "-o",
        arg(output.path()),
        "-k",
        "2",
        "--length-mean",
        "500",
        "--length-stddev",
        "0",
        "--seed",
        "1",
    ]);
    assert!(result.status.success());

    let content = fs::read_to_string(output.path().join("ref_1_sim_1_2mer.fasta")).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].len(), 500);
}

#[test]
fn test_simulate_is_deterministic_with_seed() {
    let input = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);
    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();
    let out3 = TempDir::new().unwrap();

    for (out, seed) in [(&out1, "7"), (&out2, "7"), (&out3, "8")] {
        let result = run_genomesim(&[
            "simulate",
            "-i",
            arg(input.path()),
            "-o",
            arg(out.path()),
            "-k",
            "4",
            "--sim-size-kb",
            "2",
            "--randomness",
            "0.01",
            "--seed",
            seed,
        ]);
        assert!(result.status.success());
    }

    let a = fs::read(out1.path().join("ref_7_sim_1_4mer.fasta")).unwrap();
    let b = fs::read(out2.path().join("ref_7_sim_1_4mer.fasta")).unwrap();
    let c = fs::read(out3.path().join("ref_8_sim_1_4mer.fasta")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_simulate_length_truncated_to_whole_kmers() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "3",
        "--length-mean",
        "10",
        "--length-stddev",
        "0",
    ]);
    assert!(result.status.success());

    let records = read_fasta(&output.path().join("ref_random_sim_1_3mer.fasta"));
    assert_eq!(records[0].1.len(), 9);
}

#[test]
fn test_simulate_single_kmer_reference_repeats() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "tiny.fasta", &[("chr1", "ACGT")]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "4",
        "--length-mean",
        "40",
        "--length-stddev",
        "0",
        "--seed",
        "3",
    ]);
    assert!(result.status.success());

    let records = read_fasta(&output.path().join("tiny_3_sim_1_4mer.fasta"));
    assert_eq!(records[0].1, "ACGT".repeat(10));
}

#[test]
fn test_simulate_replicates_and_metrics() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);
    let metrics = output.path().join("metrics.tsv");
    let out_dir = output.path().join("sims");

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(&out_dir),
        "-k",
        "3",
        "-n",
        "3",
        "--length-mean",
        "90",
        "--length-stddev",
        "0",
        "--seed",
        "5",
        "--metrics",
        arg(&metrics),
        "--monitor-kmers",
        "ACG,TTT",
    ]);
    assert!(result.status.success());

    assert_eq!(
        list_files(&out_dir),
        vec!["ref_5_sim_1_3mer.fasta", "ref_5_sim_2_3mer.fasta", "ref_5_sim_3_3mer.fasta"]
    );
    let replicate_seqs: HashSet<String> = (1..=3)
        .map(|r| read_fasta(&out_dir.join(format!("ref_5_sim_{r}_3mer.fasta")))[0].1.clone())
        .collect();
    assert_eq!(replicate_seqs.len(), 3, "replicates should differ");

    let tsv = fs::read_to_string(&metrics).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("input\toutput\treplicate\tk"));
    assert!(lines[1].starts_with("ref.fasta\tref_5_sim_1_3mer.fasta\t1\t3\t"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Monitored k-mer frequencies"));
}

#[test]
fn test_simulate_skips_bad_reference() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "good.fasta", &[("chr1", REFERENCE_A)]);
    write_fasta(input.path(), "short.fasta", &[("chr1", "ACG")]);
    fs::write(input.path().join("empty.fna"), "").unwrap();

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "4",
        "--sim-size-kb",
        "1",
        "--seed",
        "9",
    ]);
    assert!(result.status.success());
    assert_eq!(list_files(output.path()), vec!["good_9_sim_1_4mer.fasta"]);

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("1 succeeded, 2 failed"), "stderr: {stderr}");
}

#[test]
fn test_simulate_all_failed_exits_non_zero() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "short.fasta", &[("chr1", "ACG")]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "4",
    ]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("failed to simulate"));
}

#[test]
fn test_simulate_reject_policy_fails_on_large_noise() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "3",
        "--sim-size-kb",
        "1",
        "--randomness",
        "0.5",
        "--negative-probabilities",
        "reject",
        "--seed",
        "1",
    ]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("negative"));
}

#[test]
fn test_simulate_no_references_exits_non_zero() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("notes.txt"), "not a genome").unwrap();

    let result = run_genomesim(&["simulate", "-i", arg(input.path()), "-o", arg(output.path())]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("no FASTA files"));
}

#[test]
fn test_simulate_filters_non_canonical_bases() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", "acgtNNNNacgtRYacgtttgca")]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "-k",
        "2",
        "--length-mean",
        "200",
        "--length-stddev",
        "0",
    ]);
    assert!(result.status.success());

    let records = read_fasta(&output.path().join("ref_random_sim_1_2mer.fasta"));
    assert!(records[0].1.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
    assert!(String::from_utf8_lossy(&result.stderr).contains("non-ACGT"));
}

#[test]
fn test_simulate_same_name_in_two_input_dirs() {
    let input1 = TempDir::new().unwrap();
    let input2 = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input1.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);
    write_fasta(input2.path(), "ref.fasta", &[("chr1", REFERENCE_B)]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input1.path()),
        arg(input2.path()),
        "-o",
        arg(output.path()),
        "-k",
        "2",
        "--length-mean",
        "100",
        "--length-stddev",
        "0",
        "--seed",
        "4",
    ]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(
        list_files(output.path()),
        vec!["ref_2_4_sim_1_2mer.fasta", "ref_4_sim_1_2mer.fasta"]
    );

    let renamed = read_fasta(&output.path().join("ref_2_4_sim_1_2mer.fasta"));
    assert_eq!(renamed[0].0, "ref_2_simulated_1");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("2 succeeded, 0 failed"), "stderr: {stderr}");
}

#[test]
fn test_simulate_oversized_randomness_is_rejected() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fasta(input.path(), "ref.fasta", &[("chr1", REFERENCE_A)]);

    let result = run_genomesim(&[
        "simulate",
        "-i",
        arg(input.path()),
        "-o",
        arg(output.path()),
        "--randomness",
        "1e308",
    ]);
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("randomness"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}
