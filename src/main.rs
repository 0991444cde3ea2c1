mod argsets;
mod command;
mod constants;
mod helpers;
mod net_mgmt;
mod node_mgmt;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

use crate::constants::defaults;

const CMD_NET_FIRST: &str = "net-first";
const CMD_NET_LIST: &str = "net-list";
const CMD_NODE_INFO: &str = "node-info";
const CMD_NODE_UUID: &str = "node-uuid";
const CMD_CHECKSUM: &str = "checksum";
const CMD_ROTATE: &str = "rotate";
const CMD_GEN_PASSWD: &str = "gen-passwd";

const LOG_LEVEL_ENV_VAR: &str = "LOGGING_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "INFO";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_NET_FIRST) => command::net_first(argsets::NetFirstArgs {
            timeout: args
                .opt_value_from_str("--timeout")?
                .unwrap_or(defaults::POLL_TIMEOUT_SECS),
        }),
        Some(CMD_NET_LIST) => command::net_list(argsets::NetListArgs {
            timeout: args
                .opt_value_from_str("--timeout")?
                .unwrap_or(defaults::POLL_TIMEOUT_SECS),
            include_down: args.contains("--include-down"),
        }),
        Some(CMD_NODE_INFO) => command::node_info(),
        Some(CMD_NODE_UUID) => command::node_uuid(),
        Some(CMD_CHECKSUM) => command::checksum(argsets::ChecksumArgs {
            path: args.free_from_str()?,
        }),
        Some(CMD_ROTATE) => command::rotate(argsets::RotateArgs {
            max_copies: args
                .opt_value_from_str("--max-copies")?
                .unwrap_or(defaults::MAX_BACKUP_COPIES),
            if_larger_than: args.opt_value_from_str("--if-larger-than")?,
            path: args.free_from_str()?,
        }),
        Some(CMD_GEN_PASSWD) => command::gen_passwd(argsets::GenPasswdArgs {
            length: args
                .opt_value_from_str("--length")?
                .unwrap_or(defaults::PASSWD_LENGTH),
            base64: args.contains("--base64"),
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_NET_FIRST}', '{CMD_NET_LIST}', '{CMD_NODE_INFO}', \
             '{CMD_NODE_UUID}', '{CMD_CHECKSUM}', '{CMD_ROTATE}', '{CMD_GEN_PASSWD}'"
        )),
    }
}
