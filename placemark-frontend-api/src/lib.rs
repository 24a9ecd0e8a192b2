use thiserror::Error;

mod client;
mod groups;
mod places;
mod query;
mod transport;

pub use self::{client::*, groups::*, places::*, query::*, transport::*};

pub type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// No response was received.
    #[error("{0}")]
    Fetch(String),

    /// The server responded with a non-2xx status.
    #[error("{0}")]
    Api(#[from] placemark_boundary::Error),

    /// A 2xx response could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl Error {
    /// HTTP status of an [`Error::Api`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Fetch(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Api(err) => err.path.as_deref(),
            Self::Fetch(_) | Self::Decode(_) => None,
        }
    }

    /// Message that is suitable to be shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.message.clone(),
            Self::Fetch(_) | Self::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, message: &str) -> Error {
        placemark_boundary::Error {
            status,
            error: None,
            message: message.to_string(),
            path: Some("/api/v1/places/x".to_string()),
            timestamp: None,
        }
        .into()
    }

    #[test]
    fn user_message() {
        assert_eq!(api_error(404, "not found").user_message(), "not found");
        assert_eq!(
            Error::Fetch("TypeError: Failed to fetch".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            Error::Decode("expected value".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn status_and_path() {
        let err = api_error(400, "bad");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.path(), Some("/api/v1/places/x"));
        assert_eq!(err.to_string(), "bad");
        let err = Error::Fetch("offline".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.path(), None);
    }
}
