use std::fmt;

use skyhook_core::CharacterId;
use thiserror::Error;

pub type EsiResult<T> = Result<T, EsiError>;

#[derive(Debug, Error)]
pub enum EsiError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("http transport failed")]
    Transport(#[from] reqwest::Error),
    #[error("invalid request url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request path `{0}` escapes its route")]
    InvalidPath(String),
    #[error("response body did not match the expected shape")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Status(#[from] StatusError),
    #[error("no access token stored for character {character_id}")]
    MissingToken { character_id: CharacterId },
    #[error("access token for character {character_id} has expired")]
    TokenExpired { character_id: CharacterId },
    #[error("keyring operation failed")]
    Keyring(#[from] keyring::Error),
    #[error("token serialization failed")]
    SessionSerialization(#[source] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

impl EsiError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    pub fn status(&self) -> Option<&StatusError> {
        match self {
            Self::Status(err) => Some(err),
            _ => None,
        }
    }

    pub fn display_chain(&self) -> DisplayChainedError<'_> {
        DisplayChainedError { inner: self }
    }
}

/// Non-success HTTP status returned by ESI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} ({status}): {message}")]
pub struct StatusError {
    pub kind: StatusKind,
    pub status: u16,
    pub message: String,
    pub error_limit_remain: Option<u32>,
    pub error_limit_reset: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    /// ESI's error limiter (`420 Error Limited`).
    ErrorLimited,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    OtherClient,
    OtherServer,
    Unexpected,
}

impl StatusKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            420 => Self::ErrorLimited,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            400..=499 => Self::OtherClient,
            500..=599 => Self::OtherServer,
            _ => Self::Unexpected,
        }
    }

    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Unauthorized
                | Self::Forbidden
                | Self::NotFound
                | Self::ErrorLimited
                | Self::UnprocessableEntity
                | Self::TooManyRequests
                | Self::OtherClient
        )
    }

    pub fn is_server_error(self) -> bool {
        matches!(
            self,
            Self::InternalServerError
                | Self::BadGateway
                | Self::ServiceUnavailable
                | Self::GatewayTimeout
                | Self::OtherServer
        )
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::ErrorLimited => "error limited",
            Self::UnprocessableEntity => "unprocessable entity",
            Self::TooManyRequests => "too many requests",
            Self::InternalServerError => "internal server error",
            Self::BadGateway => "bad gateway",
            Self::ServiceUnavailable => "service unavailable",
            Self::GatewayTimeout => "gateway timeout",
            Self::OtherClient => "client error",
            Self::OtherServer => "server error",
            Self::Unexpected => "unexpected status",
        };
        f.write_str(label)
    }
}

pub struct DisplayChainedError<'a> {
    inner: &'a (dyn std::error::Error + 'static),
}

impl fmt::Debug for DisplayChainedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(self.inner);

        while let Some(err) = current {
            if first {
                first = false;
            } else {
                write!(f, " -> ")?;
            }

            write!(f, "{err}")?;
            current = err.source();
        }

        Ok(())
    }
}

impl fmt::Display for DisplayChainedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::{EsiError, StatusError, StatusKind};

    #[test]
    fn maps_documented_statuses() {
        assert_eq!(StatusKind::from_status(404), StatusKind::NotFound);
        assert_eq!(StatusKind::from_status(420), StatusKind::ErrorLimited);
        assert_eq!(StatusKind::from_status(504), StatusKind::GatewayTimeout);
    }

    #[test]
    fn falls_back_to_status_class() {
        assert_eq!(StatusKind::from_status(418), StatusKind::OtherClient);
        assert_eq!(StatusKind::from_status(599), StatusKind::OtherServer);
        assert_eq!(StatusKind::from_status(302), StatusKind::Unexpected);
        assert!(StatusKind::from_status(418).is_client_error());
        assert!(StatusKind::from_status(503).is_server_error());
        assert!(!StatusKind::Unexpected.is_client_error());
    }

    #[test]
    fn display_chain_includes_status_detail() {
        let err = EsiError::from(StatusError {
            kind: StatusKind::Forbidden,
            status: 403,
            message: "token not valid for scope".to_string(),
            error_limit_remain: Some(99),
            error_limit_reset: Some(12),
        });

        let rendered = err.display_chain().to_string();
        assert!(rendered.contains("forbidden (403): token not valid for scope"));
        assert_eq!(err.status().map(|status| status.status), Some(403));
    }
}
