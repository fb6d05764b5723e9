use std::fs;
use std::path::Path;

use crate::errors::{MindmapError, Result};

pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    Ok(())
}

pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Reads a file as UTF-8 text, verbatim.
pub fn read(path: &Path) -> Result<String> {
    if !exists(path) {
        return Err(MindmapError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}
