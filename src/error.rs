use framedraw::FrameFlags;
use mtheme::{FrameType, ThemeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetathemeError {
    #[error("{0}")]
    Theme(#[from] ThemeError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme has no frame style for a {kind} window with flags {flags:?}")]
    NoStyle { kind: FrameType, flags: FrameFlags },

    #[error("Could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, MetathemeError>;
