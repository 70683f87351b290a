//! Error type for the Gitee Client

use serde::Deserialize;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(Cow<'static, str>),

    #[error("{1} ({0})")]
    GiteeClientError(reqwest::StatusCode, GiteeClientError),
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Gitee error responses carry a human readable message, e.g.
// {"message": "401 Unauthorized: Access token is expired"}
#[derive(Debug, Default, Deserialize)]
pub struct GiteeClientError {
    pub message: Option<String>,
}

impl fmt::Display for GiteeClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("unknown error"))
    }
}

#[cfg(test)]
mod test {
    use super::{Error, GiteeClientError};

    #[test]
    fn api_error_displays_the_message() {
        let payload: GiteeClientError =
            serde_json::from_str(r#"{"message": "quota exceeded"}"#).unwrap();
        let error = Error::GiteeClientError(reqwest::StatusCode::FORBIDDEN, payload);
        assert!(error.to_string().contains("quota exceeded"));
    }
}
