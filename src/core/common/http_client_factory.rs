use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use mockall::automock;
use reqwest::{Client, Request, Response};

use super::transport::{BoxedError, ZebedeeError};

/// Default request timeout applied by [`http_client_factory`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Sends prepared requests to the CMS.
///
/// The client only ever talks to this trait, so a test can swap the network
/// for a `MockHttpClient` and inspect every request it receives.
#[automock]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, BoxedError>;
}

/// [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, BoxedError> {
        match self.client.execute(request).await {
            Err(e) => Err(Box::new(e)),
            Ok(r) => Ok(r),
        }
    }
}

/// Creates the HTTP client every request of a `ZebedeeClient` goes through.
///
/// The timeout covers the whole exchange and cannot be overridden per request.
pub fn http_client_factory(timeout: Duration) -> Result<ReqwestHttpClient, ZebedeeError> {
    debug!("creating HTTP client with a {}ms timeout", timeout.as_millis());

    let client = reqwest::ClientBuilder::new()
        .timeout(timeout)
        .user_agent(APP_USER_AGENT)
        .build()
        .map_err(|e| ZebedeeError::Transport(Box::new(e)))?;

    Ok(ReqwestHttpClient::new(client))
}
