pub mod report;
pub mod run;
pub mod version;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use ising_core::IsingError;
use tracing::info;

/// Creates `path` (and its parent directory), writes `contents` and flushes.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), IsingError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| IsingError::io("create-dir", parent, err))?;
    }
    let file = File::create(path).map_err(|err| IsingError::io("create-artifact", path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| IsingError::io("write-artifact", path, err))?;
    info!(
        path = %path.display(),
        bytes = contents.len(),
        sha256 = %ising_rg::hash::hash_text(contents),
        "wrote artifact"
    );
    Ok(())
}
