//! Fetch error type.

use thiserror::Error;

/// Failure of a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request construction or network-level failure reported by curl.
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered with anything other than 200.
    #[error("failed to get {url:?}: {status}")]
    Status { url: String, code: u32, status: String },
    /// Copying the body into the sink failed.
    #[error("copying body of {url} failed")]
    Write {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("run cancelled")]
    Cancelled,
    #[error("run deadline exceeded")]
    DeadlineExceeded,
}

impl FetchError {
    /// HTTP status code for `Status` errors.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// URL involved, when the error is tied to one request.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Write { url, .. } => Some(url),
            FetchError::Cancelled | FetchError::DeadlineExceeded => None,
        }
    }
}
