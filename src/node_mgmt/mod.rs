mod node_uuid;

pub use node_uuid::gen_node_uuid;
