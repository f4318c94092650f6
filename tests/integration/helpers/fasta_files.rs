//! FASTA fixtures and helpers for running the genomesim binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A 120 bp reference with every base and a mix of dinucleotides.
pub const REFERENCE_A: &str = "ACGTTGCAACGGTACCAGTAGGCTATCGATCGGATCCTAGGCATGCAAGCTTGACGTCA\
                               TTGACCATGGCAGTCAGTACGTAACCGGTTAACGTTACGCGATATCGCGGCCGCATTAGC";

/// A second, AT-rich reference.
pub const REFERENCE_B: &str = "AATTATATAATTTAAATATTAGCATTAATATATTAAATTTATATAATCGATTATAAATT";

/// Writes a FASTA file with the given `(name, sequence)` records, wrapping at 60 bases.
pub fn write_fasta(dir: &Path, file_name: &str, records: &[(&str, &str)]) -> PathBuf {
    let mut content = String::new();
    for (name, seq) in records {
        content.push('>');
        content.push_str(name);
        content.push('\n');
        for chunk in seq.as_bytes().chunks(60) {
            content.push_str(std::str::from_utf8(chunk).expect("ASCII sequence"));
            content.push('\n');
        }
    }
    let path = dir.join(file_name);
    fs::write(&path, content).expect("Failed to write FASTA");
    path
}

/// Reads every record of a FASTA file as `(name, sequence)`, joining wrapped lines.
pub fn read_fasta(path: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(path).expect("Failed to read FASTA");
    let mut records: Vec<(String, String)> = Vec::new();
    for line in content.lines() {
        if let Some(name) = line.strip_prefix('>') {
            records.push((name.to_string(), String::new()));
        } else if let Some((_, seq)) = records.last_mut() {
            seq.push_str(line);
        }
    }
    records
}

/// Sorted file names in a directory.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Runs the genomesim binary with `args`.
pub fn run_genomesim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genomesim"))
        .args(args)
        .output()
        .expect("Failed to execute genomesim")
}

/// Converts a path to `&str` for use as a CLI argument.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Non UTF-8 path")
}
