// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure talking to the backend (connection, timeout, status).
    Http(String),
    /// The backend reported a failure and said why. Holds the backend's own message.
    Backend(String),
    /// The backend reported a failure without a message, or sent a body that
    /// could not be decoded. Holds the endpoint.
    Rejected(String),
    /// Caller-supplied input rejected before any request was made.
    InvalidInput(String),
}

impl Error {
    /// Returns the message without the category prefix, suitable for a
    /// user-facing notification body.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Error::Io(msg)
            | Error::Config(msg)
            | Error::Http(msg)
            | Error::Backend(msg)
            | Error::Rejected(msg)
            | Error::InvalidInput(msg) => msg,
        }
    }

    /// The failure message written by the backend, if it sent one.
    ///
    /// Screens show this verbatim and fall back to their own localized text
    /// for every other error.
    #[must_use]
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            Error::Backend(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
            Error::Rejected(endpoint) => write!(f, "Backend Error: {} rejected the request", endpoint),
            Error::InvalidInput(e) => write!(f, "Invalid Input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Http(format!("request timed out: {err}"))
        } else {
            Error::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
