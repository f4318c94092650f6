//! FASTA reading and writing.
//!
//! References are parsed with the noodles FASTA reader. Output is written unwrapped:
//! each record is a `>` header line followed by the whole sequence on a single line.

use crate::errors::{Result, SimulationError};
use log::debug;
use noodles::fasta;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extensions (compared case-insensitively) recognised as FASTA references.
pub const FASTA_EXTENSIONS: [&str; 3] = ["fasta", "fa", "fna"];

/// Returns true if the path has one of the [`FASTA_EXTENSIONS`].
#[must_use]
pub fn has_fasta_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FASTA_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn open_reader(
    path: &Path,
) -> Result<fasta::io::Reader<Box<dyn std::io::BufRead>>> {
    if !path.exists() {
        return Err(SimulationError::InvalidInput {
            reason: format!("reference file does not exist: {}", path.display()),
        });
    }
    fasta::io::reader::Builder.build_from_path(path).map_err(|e| invalid_fasta(path, &e))
}

fn invalid_fasta(path: &Path, reason: &dyn std::fmt::Display) -> SimulationError {
    SimulationError::InvalidFileFormat {
        file_type: "FASTA".to_string(),
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn empty_reference(path: &Path) -> SimulationError {
    SimulationError::InvalidInput {
        reason: format!("reference contains no sequence: {}", path.display()),
    }
}

/// Reads the sequence of the first record in a FASTA file.
///
/// Later records are ignored.
///
/// # Errors
///
/// * [`SimulationError::InvalidInput`] if the file is missing, has no records, or the
///   first record is empty
/// * [`SimulationError::InvalidFileFormat`] if the file cannot be parsed
pub fn read_first_record<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let record = match reader.records().next() {
        Some(result) => result.map_err(|e| invalid_fasta(path, &e))?,
        None => return Err(empty_reference(path)),
    };

    let sequence: Vec<u8> = record.sequence().as_ref().to_vec();
    if sequence.is_empty() {
        return Err(empty_reference(path));
    }
    debug!("Read {} bases from first record of {}", sequence.len(), path.display());
    Ok(sequence)
}

/// Reads every record in a FASTA file and concatenates their sequences, upper-cased.
///
/// # Errors
///
/// * [`SimulationError::InvalidInput`] if the file is missing or holds no bases
/// * [`SimulationError::InvalidFileFormat`] if the file cannot be parsed
pub fn read_concatenated<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut combined = Vec::new();
    let mut n_records = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| invalid_fasta(path, &e))?;
        combined.extend(record.sequence().as_ref().iter().map(u8::to_ascii_uppercase));
        n_records += 1;
    }

    if combined.is_empty() {
        return Err(empty_reference(path));
    }
    debug!("Read {} bases from {n_records} records of {}", combined.len(), path.display());
    Ok(combined)
}

/// A writer for unwrapped FASTA files.
///
/// # Examples
///
/// ```no_run
/// use genomesim_lib::fasta::FastaWriter;
///
/// # fn main() -> genomesim_lib::errors::Result<()> {
/// let mut writer = FastaWriter::new("simulated.fasta")?;
/// writer.write_record("simulated_1", b"ACGTACGT")?;
///
/// // Important: call finish() to ensure all data is written
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct FastaWriter {
    path: PathBuf,
    inner: BufWriter<File>,
}

impl FastaWriter {
    /// Create (or truncate) the FASTA file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Io`] if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| SimulationError::io(&path, e))?;
        Ok(Self { path, inner: BufWriter::new(file) })
    }

    /// Write one record: `>name`, then the sequence on a single line.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Io`] if writing fails.
    pub fn write_record(&mut self, name: &str, seq: &[u8]) -> Result<()> {
        write_record_to(&mut self.inner, name, seq).map_err(|e| SimulationError::io(&self.path, e))
    }

    /// Flush all buffered data.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Io`] if flushing fails.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(|e| SimulationError::io(&self.path, e))
    }
}

/// Write a single FASTA record to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SimulationError::Io`] if the file cannot be created or written.
pub fn write_single_record<P: AsRef<Path>>(path: P, name: &str, seq: &[u8]) -> Result<()> {
    let mut writer = FastaWriter::new(path)?;
    writer.write_record(name, seq)?;
    writer.finish()
}

fn write_record_to<W: Write>(writer: &mut W, name: &str, seq: &[u8]) -> std::io::Result<()> {
    writeln!(writer, ">{name}")?;
    writer.write_all(seq)?;
    writeln!(writer)
}
