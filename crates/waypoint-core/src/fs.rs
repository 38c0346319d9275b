//! Filesystem utilities for atomic writes.

use std::fs;
use std::io;
use std::path::Path;

/// Atomically move a freshly written temp file over the destination.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists; this removes the destination and retries.
/// The temp file is cleaned up if the rename ultimately fails.
///
/// # Errors
///
/// Returns an error if the rename fails even after the retry.
pub fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
