mod checksum;
mod passwd;
mod rotate;
mod user;

pub use checksum::md5_hex;
pub use passwd::{gen_base64_passwd, gen_passwd};
pub use rotate::rotate_file;
pub use user::{effective_gid, effective_uid, effective_username};

pub mod units;
