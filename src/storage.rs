use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write the rendered order text to a file, replacing any existing content.
pub fn save_order<P: AsRef<Path>>(path: P, order_text: &str) -> Result<()> {
    fs::write(path, order_text)?;
    Ok(())
}
