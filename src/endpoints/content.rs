use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::core::{
    client::{path_segment, ZebedeeClient},
    common::transport::ZebedeeError,
};

use super::authenticator::Session;

#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetches the stored content at `uri` in a collection, body untouched.
    async fn get_content(
        &self,
        session: &Session,
        collection_id: &str,
        uri: &str,
    ) -> Result<Vec<u8>, ZebedeeError>;
}

#[async_trait]
impl ContentApi for ZebedeeClient {
    async fn get_content(
        &self,
        session: &Session,
        collection_id: &str,
        uri: &str,
    ) -> Result<Vec<u8>, ZebedeeError> {
        let uri = format!("/content/{}?uri={uri}", path_segment(collection_id)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_bytes(req, StatusCode::OK).await
    }
}
