use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Rotates numbered backups of `current`: `.{n}` becomes `.{n+1}` from the
/// top down (the copy at `.{max_copies}` is overwritten), then the live file
/// is copied to `.0`. The live file itself is left in place.
pub fn rotate_file(current: &Path, max_copies: usize) -> Result<()> {
    for fnum in (0..max_copies).rev() {
        let from = numbered(current, fnum);
        if from.exists() {
            let to = numbered(current, fnum + 1);
            // rename does not replace an existing file on every platform
            if fs::rename(&from, &to).is_err() {
                fs::remove_file(&to)?;
                fs::rename(&from, &to)?;
            }
        }
    }
    if current.exists() {
        fs::copy(current, numbered(current, 0))?;
    }
    Ok(())
}

fn numbered(path: &Path, n: usize) -> PathBuf {
    let mut numbered = path.as_os_str().to_os_string();
    numbered.push(format!(".{n}"));
    PathBuf::from(numbered)
}
