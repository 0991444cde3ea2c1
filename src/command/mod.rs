mod checksum;
mod net;
mod node_info;
mod node_uuid;
mod passwd;
mod rotate;

pub use checksum::checksum;
pub use net::{net_first, net_list};
pub use node_info::node_info;
pub use node_uuid::node_uuid;
pub use passwd::gen_passwd;
pub use rotate::rotate;
