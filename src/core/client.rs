use std::{sync::Arc, time::Duration};

use log::debug;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Body, Method, Request, Response, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    common::{
        http_client_factory::{http_client_factory, HttpClient, DEFAULT_TIMEOUT},
        transport::{ActionResult, ApiError, ZebedeeError},
    },
    configuration::sections::ApiConfiguration,
};

#[cfg(test)]
mod tests;

/// Header carrying the session token on every authenticated request.
pub const FLORENCE_TOKEN_HEADER: &str = "x-florence-token";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the Zebedee CMS API.
///
/// Holds the CMS host and the transport shared by every operation. Cloning is
/// cheap and clones share the same connection pool. The operations themselves
/// live in the [`endpoints`](crate::endpoints) traits.
#[derive(Clone)]
pub struct ZebedeeClient {
    host: String,
    http_client: Arc<dyn HttpClient>,
}

impl ZebedeeClient {
    pub fn new(host: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Creates a client backed by a reqwest transport with the given timeout.
    pub fn with_timeout(host: impl Into<String>, timeout: Duration) -> Result<Self, ZebedeeError> {
        let http_client = http_client_factory(timeout)?;
        Ok(Self::new(host, Arc::new(http_client)))
    }

    pub fn from_configuration(conf: &ApiConfiguration) -> Result<Self, ZebedeeError> {
        let host = conf.assert_host_is_not_empty()?.to_string();

        let timeout = conf
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self::with_timeout(host, timeout)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds a request for `uri` (relative to the host, query string included).
    ///
    /// The content type is always JSON. The token header is only set when a
    /// token is given, the login request being the one sent without it.
    pub(crate) fn new_request(
        &self,
        uri: &str,
        token: Option<&str>,
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<Request, ZebedeeError> {
        let raw_url = format!("{}{}", self.host, uri);
        let url = Url::parse(&raw_url)
            .map_err(|e| ZebedeeError::RequestConstruction(format!("{e}: {raw_url}")))?;

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(token) = token {
            let value = HeaderValue::from_str(token).map_err(|e| {
                ZebedeeError::RequestConstruction(format!("invalid session token: {e}"))
            })?;
            headers.insert(FLORENCE_TOKEN_HEADER, value);
        }

        if let Some(body) = body {
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }

    /// Same as [`Self::new_request`] with `entity` encoded as the JSON body.
    pub(crate) fn new_json_request<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        token: Option<&str>,
        method: Method,
        entity: &T,
    ) -> Result<Request, ZebedeeError> {
        let body = serde_json::to_vec(entity).map_err(ZebedeeError::Serialization)?;
        self.new_request(uri, token, method, Some(body))
    }

    /// Sends the request and checks the status, handing back the unread response.
    pub(crate) async fn execute(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<Response, ZebedeeError> {
        let method = request.method().clone();
        let uri = request_uri(request.url());

        debug!("{method} {uri}");

        let response = match self.http_client.execute(request).await {
            Err(e) => {
                debug!("{method} {uri} failed: {e}");
                return Err(ZebedeeError::Transport(e));
            }
            Ok(r) => r,
        };

        check_response_status(response, expected, method, uri).await
    }

    /// Executes the request and decodes the JSON body into `T`.
    pub(crate) async fn request_object<T: DeserializeOwned>(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<T, ZebedeeError> {
        let response = self.execute(request, expected).await?;
        let body = read_body(response).await?;

        serde_json::from_slice::<T>(&body).map_err(ZebedeeError::Decode)
    }

    /// Executes the request and hands back the body untouched.
    pub(crate) async fn request_bytes(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<Vec<u8>, ZebedeeError> {
        let response = self.execute(request, expected).await?;
        read_body(response).await
    }

    /// Executes a request whose body is a bare boolean success flag.
    pub(crate) async fn request_action(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<ActionResult, ZebedeeError> {
        let success = self.request_object::<bool>(request, expected).await?;
        Ok(ActionResult::new(expected, success))
    }

    /// Executes the request, checks the status and drops the body.
    pub(crate) async fn execute_request_no_response(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<(), ZebedeeError> {
        let response = self.execute(request, expected).await?;
        read_body(response).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ZebedeeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZebedeeClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

/// Path and query of `url`, the form used in error messages.
pub(crate) fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}

/// Percent-encodes `value` so it stays a single path segment once parsed.
///
/// `/`, `%`, `?` and `#` are escaped. A bare `.` or `..` cannot be kept as a
/// segment by the URL parser and is rejected.
pub(crate) fn path_segment(value: &str) -> Result<String, ZebedeeError> {
    if value == "." || value == ".." {
        return Err(ZebedeeError::RequestConstruction(format!(
            "invalid path segment: {value}"
        )));
    }

    let mut scratch = Url::parse("http://localhost/")
        .map_err(|e| ZebedeeError::RequestConstruction(e.to_string()))?;

    scratch
        .path_segments_mut()
        .map_err(|_| ZebedeeError::RequestConstruction("cannot encode path segment".to_string()))?
        .push(value);

    Ok(scratch.path().trim_start_matches('/').to_string())
}

async fn read_body(response: Response) -> Result<Vec<u8>, ZebedeeError> {
    match response.bytes().await {
        Err(e) => Err(ZebedeeError::ResponseBody(Box::new(e))),
        Ok(b) => Ok(b.to_vec()),
    }
}

/// Returns the response untouched when its status is the expected one,
/// otherwise consumes the body into an [`ApiError`].
async fn check_response_status(
    response: Response,
    expected: StatusCode,
    method: Method,
    uri: String,
) -> Result<Response, ZebedeeError> {
    let actual = response.status();

    if actual == expected {
        return Ok(response);
    }

    debug!(
        "{method} {uri} expected status {} but received {}",
        expected.as_u16(),
        actual.as_u16()
    );

    let err = ApiError::new(method, uri, expected, actual);

    let err = match response.text().await {
        Err(e) => err.with_read_failure(e.to_string()),
        Ok(body) if body.is_empty() => err,
        Ok(body) => err.with_body(body),
    };

    Err(ZebedeeError::Api(err))
}
