use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use md5::{Digest, Md5};

const CHUNK_SIZE: usize = 4096;

/// Returns the MD5 sum of the given file as lowercase hex, reading in
/// fixed-size chunks so large files are not pulled into memory at once.
pub fn md5_hex(path: impl AsRef<Path>) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
