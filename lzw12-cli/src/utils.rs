//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use lzw12::{LzwDecoder, LzwError, unpack};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Path of the text file an archive extracts to: `<dir>/<stem>.txt`.
pub fn output_path_for(archive: &Path, dir: &Path) -> PathBuf {
    let mut name = archive
        .file_stem()
        .unwrap_or_else(|| archive.as_os_str())
        .to_os_string();
    name.push(".txt");
    dir.join(name)
}

/// Statistics gathered while decoding an archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    /// Archive path as given.
    pub archive: String,
    /// Archive size in bytes.
    pub archive_size: u64,
    /// Number of 12-bit codes in the archive.
    pub codes: usize,
    /// Size of the decoded text in bytes.
    pub decoded_size: usize,
    /// Number of times the dictionary wrapped.
    pub dictionary_resets: usize,
}

impl ArchiveReport {
    /// Space saved by compression, in percent of the decoded size.
    pub fn space_savings(&self) -> f64 {
        if self.decoded_size == 0 {
            return 0.0;
        }
        (1.0 - self.archive_size as f64 / self.decoded_size as f64) * 100.0
    }
}

/// Fully decode the archive at `path` and report on it.
pub fn inspect(path: &Path) -> Result<ArchiveReport, LzwError> {
    let archive_size = fs::metadata(path)?.len();
    let codes = unpack(BufReader::new(File::open(path)?))?;

    let mut decoder = LzwDecoder::new();
    let text = decoder.decode(&codes)?;

    Ok(ArchiveReport {
        archive: path.display().to_string(),
        archive_size,
        codes: codes.len(),
        decoded_size: text.len(),
        dictionary_resets: decoder.resets(),
    })
}
