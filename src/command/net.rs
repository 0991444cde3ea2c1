use anyhow::Result;

use crate::argsets::{NetFirstArgs, NetListArgs};
use crate::net_mgmt::{self, PollConfig};

// Historic output contract: callers match on this pair when nothing is up.
const NOT_FOUND: &str = "N/A";

pub fn net_first(args: NetFirstArgs) -> Result<()> {
    match net_mgmt::find_first_up(args.timeout)? {
        Some(record) => println!("{} {}", record.name, record.address),
        None => {
            log::warn!("no interface in state UP within {}s", args.timeout);
            println!("{NOT_FOUND} {NOT_FOUND}");
        }
    }
    Ok(())
}

pub fn net_list(args: NetListArgs) -> Result<()> {
    let records = net_mgmt::find_all(PollConfig {
        timeout_secs: args.timeout,
        include_down: args.include_down,
    })?;
    println!("{}", serde_json::to_string(&records)?);
    Ok(())
}
