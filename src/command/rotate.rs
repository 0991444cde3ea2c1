use std::fs;

use anyhow::Result;

use crate::argsets::RotateArgs;
use crate::helpers::{rotate_file, units};

pub fn rotate(args: RotateArgs) -> Result<()> {
    if let Some(threshold) = &args.if_larger_than {
        let min_bytes = units::parse(threshold)?;
        let size = fs::metadata(&args.path).map(|m| m.len()).unwrap_or(0);
        if (size as f64) <= min_bytes {
            log::info!(
                "not rotating {}: {} does not exceed {}",
                args.path.display(),
                units::format(size as f64),
                threshold.trim()
            );
            return Ok(());
        }
    }
    rotate_file(&args.path, args.max_copies)
}
