use uuid::Uuid;

const NODE_UUID_LEN: usize = 40;

/// Generates a cluster node UUID: 40 uppercase hex chars, taken from two
/// concatenated random UUIDs.
pub fn gen_node_uuid() -> String {
    let mut hex = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    hex.truncate(NODE_UUID_LEN);
    hex.to_uppercase()
}
