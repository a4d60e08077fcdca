use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::{client::ZebedeeClient, common::transport::ZebedeeError};

use super::authenticator::{Credentials, Session};

/// A CMS user account.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub inactive: bool,
    pub last_admin: String,
    pub temporary_password: bool,
}

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn create_user(&self, session: &Session, user: &User) -> Result<User, ZebedeeError>;
    async fn get_user(&self, session: &Session, email: &str) -> Result<User, ZebedeeError>;
    async fn get_users(&self, session: &Session) -> Result<Vec<User>, ZebedeeError>;
    async fn delete_user(&self, session: &Session, email: &str) -> Result<(), ZebedeeError>;
    /// Sets the password of `credentials.email`; `old_password` is required
    /// when users change their own password.
    async fn set_password(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<(), ZebedeeError>;
}

#[async_trait]
impl UsersApi for ZebedeeClient {
    async fn create_user(&self, session: &Session, user: &User) -> Result<User, ZebedeeError> {
        let req =
            self.new_json_request("/users", Some(session.id.as_str()), Method::POST, user)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn get_user(&self, session: &Session, email: &str) -> Result<User, ZebedeeError> {
        let uri = format!("/users?email={email}");
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn get_users(&self, session: &Session) -> Result<Vec<User>, ZebedeeError> {
        let req = self.new_request("/users", Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn delete_user(&self, session: &Session, email: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/users?email={email}");
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::DELETE, None)?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn set_password(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<(), ZebedeeError> {
        let req = self.new_json_request(
            "/password",
            Some(session.id.as_str()),
            Method::POST,
            credentials,
        )?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }
}
