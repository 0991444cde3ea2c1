use anyhow::Result;
use serde::Serialize;

use crate::constants::defaults;
use crate::helpers::{effective_gid, effective_uid, effective_username};
use crate::net_mgmt::{self, InterfaceRecord};

#[derive(Serialize)]
struct NodeInfo {
    username: String,
    uid: u32,
    gid: u32,
    interface: Option<InterfaceRecord>,
}

pub fn node_info() -> Result<()> {
    let interface = net_mgmt::find_first_up(defaults::POLL_TIMEOUT_SECS)?;
    if interface.is_none() {
        log::warn!("no interface in state UP; reporting identity only");
    }

    let info = NodeInfo {
        username: effective_username()?,
        uid: effective_uid(),
        gid: effective_gid(),
        interface,
    };
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}
