//! Extract command implementation.

use crate::utils::{create_progress_bar, output_path_for};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_extract(
    archives: &[PathBuf],
    output: &Path,
    progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output)?;

    let pb = create_progress_bar(archives.len() as u64, progress);
    pb.set_message("archives");

    for archive in archives {
        let out_path = output_path_for(archive, output);
        lzw12::extract_file(archive, &out_path)?;

        info!(archive = %archive.display(), output = %out_path.display(), "extracted");
        if verbose {
            pb.println(format!(
                "  Extracted: {} -> {}",
                archive.display(),
                out_path.display()
            ));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");
    Ok(())
}
