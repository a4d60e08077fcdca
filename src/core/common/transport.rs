use std::fmt::Display;

use log::debug;
use reqwest::{Method, StatusCode};

/// Boxed cause carried by transport failures, the same shape the
/// [`HttpClient`](super::http_client_factory::HttpClient) trait returns.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned when the CMS answers with a status other than the expected one.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub method: Method,
    pub uri: String,
    pub expected_status: StatusCode,
    pub actual_status: StatusCode,
    /// Response body text, only set when the body was read and not empty.
    pub body: Option<String>,
    /// Set instead of `body` when the error body itself could not be read.
    pub read_failure: Option<String>,
}

impl ApiError {
    pub fn new(
        method: Method,
        uri: String,
        expected_status: StatusCode,
        actual_status: StatusCode,
    ) -> Self {
        Self {
            method,
            uri,
            expected_status,
            actual_status,
            body: None,
            read_failure: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_read_failure(mut self, reason: String) -> Self {
        self.read_failure = Some(reason);
        self
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.read_failure {
            Some(reason) => write!(
                f,
                "unexpected error attempting to read error response body: {:?} {} {} expected status: {} actual status: {}",
                reason,
                self.method,
                self.uri,
                self.expected_status.as_u16(),
                self.actual_status.as_u16()
            ),
            None => write!(
                f,
                "request {} {} expected status {} but received {}",
                self.method,
                self.uri,
                self.expected_status.as_u16(),
                self.actual_status.as_u16()
            ),
        }
    }
}

impl std::error::Error for ApiError {}

/// Every failure a client operation can report.
#[derive(Debug)]
pub enum ZebedeeError {
    /// The request never got a response (DNS, refused connection, timeout).
    Transport(BoxedError),
    /// The outbound payload could not be encoded as JSON.
    Serialization(serde_json::Error),
    /// The request itself could not be built, usually a malformed URL.
    RequestConstruction(String),
    /// The CMS answered with an unexpected status.
    Api(ApiError),
    /// The status was the expected one but its body could not be read.
    ResponseBody(BoxedError),
    /// The response body did not match the expected shape.
    Decode(serde_json::Error),
    /// The CMS accepted the request but reported the action as failed.
    Unsuccessful { action: String, id: String },
    Configuration(String),
}

impl ZebedeeError {
    pub fn unsuccessful(action: &str, id: &str) -> Self {
        ZebedeeError::Unsuccessful {
            action: action.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the status mismatch details, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ZebedeeError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ZebedeeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZebedeeError::Transport(e) => write!(f, "{e}"),
            ZebedeeError::Serialization(e) => write!(f, "cannot serialize request body: {e}"),
            ZebedeeError::RequestConstruction(reason) => {
                write!(f, "cannot build request: {reason}")
            }
            ZebedeeError::Api(e) => write!(f, "{e}"),
            ZebedeeError::ResponseBody(e) => write!(f, "cannot read response body: {e}"),
            ZebedeeError::Decode(e) => write!(f, "cannot decode response body: {e}"),
            ZebedeeError::Unsuccessful { action, id } => {
                write!(f, "{action} request unsuccessful: {id}")
            }
            ZebedeeError::Configuration(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ZebedeeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZebedeeError::Transport(e) | ZebedeeError::ResponseBody(e) => Some(e.as_ref()),
            ZebedeeError::Serialization(e) | ZebedeeError::Decode(e) => Some(e),
            ZebedeeError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for ZebedeeError {
    fn from(value: ApiError) -> Self {
        ZebedeeError::Api(value)
    }
}

/// Outcome of the endpoints answering with a bare boolean body.
///
/// `status` is the status the CMS accepted the request with, `success` is
/// the flag it reported for the action itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionResult {
    pub status: StatusCode,
    pub success: bool,
}

impl ActionResult {
    pub fn new(status: StatusCode, success: bool) -> Self {
        Self { status, success }
    }

    /// Turns a `false` flag into [`ZebedeeError::Unsuccessful`] naming the action and target.
    pub fn into_result(self, action: &str, id: &str) -> Result<(), ZebedeeError> {
        if self.success {
            return Ok(());
        }

        debug!("{action} request unsuccessful: {id}");
        Err(ZebedeeError::unsuccessful(action, id))
    }
}
