//! Effective user identity of the agent process.
//!
//! On unix hosts this goes through the user database; elsewhere a fixed
//! UID/GID and the session username are reported.

#[cfg(unix)]
mod imp {
    use anyhow::{anyhow, Result};
    use nix::unistd::{getegid, geteuid, User};

    pub fn effective_uid() -> u32 {
        geteuid().as_raw()
    }

    pub fn effective_gid() -> u32 {
        getegid().as_raw()
    }

    pub fn effective_username() -> Result<String> {
        let uid = geteuid();
        let user = User::from_uid(uid)?.ok_or_else(|| anyhow!("no passwd entry for uid {uid}"))?;
        Ok(user.name)
    }
}

#[cfg(not(unix))]
mod imp {
    use anyhow::Result;

    const FALLBACK_UID: u32 = 500;
    const FALLBACK_GID: u32 = 500;

    pub fn effective_uid() -> u32 {
        FALLBACK_UID
    }

    pub fn effective_gid() -> u32 {
        FALLBACK_GID
    }

    pub fn effective_username() -> Result<String> {
        Ok(whoami::username())
    }
}

pub use imp::{effective_gid, effective_uid, effective_username};
