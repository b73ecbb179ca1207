//! Error types for fetching and caching fonts.

use std::{fmt, io, path::PathBuf, result};

/// Which network request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Stylesheet,
    Font,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Stylesheet => f.write_str("fetch stylesheet"),
            Stage::Font => f.write_str("download font"),
        }
    }
}

/// Errors that can occur while refreshing the font cache.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to {stage}: {source}")]
    Network {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {stage}: HTTP {status}")]
    HttpStatus { stage: Stage, status: u16 },

    #[error("failed to {stage}: error reading response body: {source}")]
    Body {
        stage: Stage,
        #[source]
        source: io::Error,
    },

    #[error("could not find woff2 URL in stylesheet")]
    Extraction,

    #[error("failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem { action, path: path.into(), source }
    }

    /// HTTP status code of a rejected request, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
