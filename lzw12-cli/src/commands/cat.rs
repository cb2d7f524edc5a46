//! Cat command implementation.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub fn cmd_cat(archive: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(archive)?);
    let stdout = io::stdout();
    lzw12::extract(reader, stdout.lock())?;
    Ok(())
}
