use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::core::{client::ZebedeeClient, common::transport::ZebedeeError};

use super::authenticator::Session;

#[async_trait]
pub trait KeyringApi: Send + Sync {
    /// IDs of the collections whose keys are on the session user's keyring.
    async fn list_user_keyring(&self, session: &Session) -> Result<Vec<String>, ZebedeeError>;
}

#[async_trait]
impl KeyringApi for ZebedeeClient {
    async fn list_user_keyring(&self, session: &Session) -> Result<Vec<String>, ZebedeeError> {
        let req = self.new_request("/ListKeyring", Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }
}
