use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{distributions::Alphanumeric, Rng};

/// Generates a new alphanumeric password with the given length.
pub fn gen_passwd(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a base64 encoded password from `length` random characters.
pub fn gen_base64_passwd(length: usize) -> String {
    BASE64.encode(gen_passwd(length))
}
