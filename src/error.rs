use crate::device_id::DeviceId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No device found matching {id}")]
    NotFound { id: DeviceId },

    #[error("Malformed uevent {}: missing {field}", path.display())]
    MalformedUevent { path: PathBuf, field: &'static str },

    #[error("Invalid sysfs glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Could not scan sysfs: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Could not read {}: {source}", path.display())]
    ReadUevent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not reset {}: {source}", path.display())]
    Reset {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
