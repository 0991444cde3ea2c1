pub const POLL_TIMEOUT_SECS: u64 = 1;
pub const MAX_BACKUP_COPIES: usize = 10;
pub const PASSWD_LENGTH: usize = 16;
