//! Remote collaborator boundary.
//!
//! # Responsibility
//! - Wrap upstream HTTP services behind narrow, stateless call contracts.
//! - Translate transport and status failures into one typed error for
//!   callers to render as transient notifications.
//!
//! # Invariants
//! - No retries and no caching; one request per call.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod nutrition_api;

pub use nutrition_api::{NutritionLookup, NutritionixClient};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Error for remote lookup calls.
#[derive(Debug)]
pub enum RemoteError {
    /// Required upstream credentials are not configured.
    Unconfigured(&'static str),
    /// The request could not be sent or the response not read.
    Transport(reqwest::Error),
    /// The upstream answered with a non-success status.
    Status { status: u16 },
    /// The upstream payload did not have the expected shape.
    Decode(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconfigured(what) => write!(f, "{what} credentials are not configured"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::Status { status } => write!(f, "upstream responded with status {status}"),
            Self::Decode(message) => write!(f, "unexpected upstream payload: {message}"),
        }
    }
}

impl Error for RemoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}
