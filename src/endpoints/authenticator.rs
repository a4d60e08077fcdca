use async_trait::async_trait;
use log::debug;
use reqwest::{Method, StatusCode};

use crate::core::{client::ZebedeeClient, common::transport::ZebedeeError};

pub mod common;

pub use common::{Credentials, Session};

/// Session endpoints of the CMS.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Logs in with the given credentials.
    ///
    /// The whole response body is the session token; it is paired with the
    /// credentials email to form the session.
    async fn open_session(&self, credentials: &Credentials) -> Result<Session, ZebedeeError>;

    /// Wraps a token obtained elsewhere into a session, without any request.
    fn open_session_jwt(&self, auth_token: &str) -> Session;
}

#[async_trait]
impl AuthApi for ZebedeeClient {
    async fn open_session(&self, credentials: &Credentials) -> Result<Session, ZebedeeError> {
        debug!("opening session");

        let req = self.new_json_request("/login", None, Method::POST, credentials)?;
        let body = self.request_bytes(req, StatusCode::OK).await?;

        let token = String::from_utf8(body).map_err(|e| {
            ZebedeeError::ResponseBody(Box::new(e))
        })?;

        Ok(Session {
            email: credentials.email.clone(),
            id: token,
        })
    }

    fn open_session_jwt(&self, auth_token: &str) -> Session {
        Session {
            email: String::new(),
            id: auth_token.to_string(),
        }
    }
}
