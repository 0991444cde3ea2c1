use std::path::PathBuf;

pub struct NetFirstArgs {
    pub timeout: u64,
}

pub struct NetListArgs {
    pub timeout: u64,
    pub include_down: bool,
}

pub struct ChecksumArgs {
    pub path: PathBuf,
}

pub struct RotateArgs {
    pub path: PathBuf,
    pub max_copies: usize,
    pub if_larger_than: Option<String>,
}

pub struct GenPasswdArgs {
    pub length: usize,
    pub base64: bool,
}
