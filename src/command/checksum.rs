use anyhow::Result;

use crate::argsets::ChecksumArgs;
use crate::helpers;

pub fn checksum(args: ChecksumArgs) -> Result<()> {
    let digest = helpers::md5_hex(&args.path)?;
    println!("{digest}");
    Ok(())
}
