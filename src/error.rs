use std::time::Duration;

use hyper::StatusCode;
use thiserror::Error;

pub type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /* upstream cloud */
    #[error("Status code: {}{}", .status.as_u16(), upstream_guidance(.status))]
    Upstream { status: StatusCode },

    #[error(transparent)]
    Transport(#[from] hyper::Error),

    #[error("Request to remote cloud timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed stone list from remote cloud: {0}")]
    MalformedPayload(#[source] JsonPathError),

    /* request and response construction */
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] hyper::http::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /* inbound directive */
    #[error("Malformed directive: {0}")]
    MalformedDirective(#[source] JsonPathError),

    #[error("Directive carries no access token")]
    MissingToken,

    #[error("Unsupported directive: {namespace}.{name}")]
    UnsupportedDirective { namespace: String, name: String },
}

fn upstream_guidance(status: &StatusCode) -> &'static str {
    match *status {
        StatusCode::UNAUTHORIZED => ". Please use the right token.",
        StatusCode::INTERNAL_SERVER_ERROR => ". Please use the right arguments.",
        StatusCode::FORBIDDEN => {
            ". Please, check if your token is correct and check your scope permissions"
        }
        _ => "",
    }
}

impl DiscoveryError {
    /// Status used when reporting this error back to the skill runtime.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { .. } | Self::Transport(_) | Self::MalformedPayload(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::UrlParse(_) | Self::Http(_) | Self::SerdeJson(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MalformedDirective(_)
            | Self::MissingToken
            | Self::UnsupportedDirective { .. } => StatusCode::BAD_REQUEST,
        }
    }
}
