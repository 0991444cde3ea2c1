use anyhow::Result;

use crate::argsets::GenPasswdArgs;
use crate::helpers;

pub fn gen_passwd(args: GenPasswdArgs) -> Result<()> {
    let passwd = if args.base64 {
        helpers::gen_base64_passwd(args.length)
    } else {
        helpers::gen_passwd(args.length)
    };
    println!("{passwd}");
    Ok(())
}
