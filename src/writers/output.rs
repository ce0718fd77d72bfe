use crate::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Write already rendered outputs in order. If any write fails, files
/// written earlier in the same call are removed, so a run leaves either all
/// of its outputs or none.
pub fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<()> {
    let mut written: Vec<&Path> = Vec::with_capacity(outputs.len());

    for &(path, contents) in outputs {
        if let Err(e) = write_one(path, contents) {
            for done in &written {
                if let Err(remove_err) = std::fs::remove_file(done) {
                    warn!("Could not remove {}: {}", done.display(), remove_err);
                }
            }
            return Err(e);
        }

        info!("Wrote {} bytes to {}", contents.len(), path.display());
        written.push(path);
    }

    Ok(())
}

fn write_one(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
