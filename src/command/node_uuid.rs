use anyhow::Result;

use crate::node_mgmt;

pub fn node_uuid() -> Result<()> {
    println!("{}", node_mgmt::gen_node_uuid());
    Ok(())
}
