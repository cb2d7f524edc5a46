//! Info command implementation.

use crate::utils::inspect;
use std::path::Path;

pub fn cmd_info(archive: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = inspect(archive)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Archive Information");
    println!("===================");
    println!("File: {}", report.archive);
    println!("Size: {} bytes", report.archive_size);
    println!();
    println!("Contents:");
    println!("  Codes: {}", report.codes);
    println!("  Decoded size: {} bytes", report.decoded_size);
    println!("  Dictionary resets: {}", report.dictionary_resets);
    if report.decoded_size > 0 {
        println!("  Compression ratio: {:.1}%", report.space_savings());
    }

    Ok(())
}
