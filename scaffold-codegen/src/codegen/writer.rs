//! File writer - creates directories and overwrites files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Write `content` to `dir/file_name`, creating `dir` if needed.
///
/// Any existing file at that path is replaced.
pub fn write_file(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    info!("Wrote {}", path.display());
    Ok(path)
}
