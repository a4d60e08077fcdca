use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::{client::ZebedeeClient, common::transport::ZebedeeError};

use super::authenticator::Session;

/// CMS permissions of a user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub editor: bool,
}

#[async_trait]
pub trait PermissionsApi: Send + Sync {
    async fn set_permissions(
        &self,
        session: &Session,
        permissions: &Permissions,
    ) -> Result<(), ZebedeeError>;
    async fn get_permissions(
        &self,
        session: &Session,
        email: &str,
    ) -> Result<Permissions, ZebedeeError>;
}

#[async_trait]
impl PermissionsApi for ZebedeeClient {
    async fn set_permissions(
        &self,
        session: &Session,
        permissions: &Permissions,
    ) -> Result<(), ZebedeeError> {
        let req = self.new_json_request(
            "/permission",
            Some(session.id.as_str()),
            Method::POST,
            permissions,
        )?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn get_permissions(
        &self,
        session: &Session,
        email: &str,
    ) -> Result<Permissions, ZebedeeError> {
        let uri = format!("/permission?email={email}");
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }
}
