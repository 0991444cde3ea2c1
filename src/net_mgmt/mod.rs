mod ip_cmd;
mod poller;

pub use ip_cmd::CommandError;
pub use poller::{find_all, find_first_up, InterfaceRecord, LinkState, PollConfig};
