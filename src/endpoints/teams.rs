use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::{
    client::{path_segment, ZebedeeClient},
    common::transport::{ActionResult, ZebedeeError},
};

use super::authenticator::Session;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TeamsList {
    pub teams: Vec<Team>,
}

#[async_trait]
pub trait TeamsApi: Send + Sync {
    async fn add_team_member(
        &self,
        session: &Session,
        team_name: &str,
        email: &str,
    ) -> Result<(), ZebedeeError>;
    async fn remove_team_member(
        &self,
        session: &Session,
        team_name: &str,
        email: &str,
    ) -> Result<(), ZebedeeError>;
    /// Creates a team. The CMS answers with a success flag, handed back as is.
    async fn create_team(
        &self,
        session: &Session,
        team_name: &str,
    ) -> Result<ActionResult, ZebedeeError>;
    async fn delete_team(&self, session: &Session, team_name: &str) -> Result<(), ZebedeeError>;
    async fn list_teams(&self, session: &Session) -> Result<TeamsList, ZebedeeError>;
    async fn get_team(&self, session: &Session, team_name: &str) -> Result<Team, ZebedeeError>;
}

#[async_trait]
impl TeamsApi for ZebedeeClient {
    async fn add_team_member(
        &self,
        session: &Session,
        team_name: &str,
        email: &str,
    ) -> Result<(), ZebedeeError> {
        let uri = format!("/teams/{}?email={email}", path_segment(team_name)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::POST, None)?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn remove_team_member(
        &self,
        session: &Session,
        team_name: &str,
        email: &str,
    ) -> Result<(), ZebedeeError> {
        let uri = format!("/teams/{}?email={email}", path_segment(team_name)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::DELETE, None)?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn create_team(
        &self,
        session: &Session,
        team_name: &str,
    ) -> Result<ActionResult, ZebedeeError> {
        let uri = format!("/teams/{}", path_segment(team_name)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::POST, None)?;
        self.request_action(req, StatusCode::OK).await
    }

    async fn delete_team(&self, session: &Session, team_name: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/teams/{}", path_segment(team_name)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::DELETE, None)?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn list_teams(&self, session: &Session) -> Result<TeamsList, ZebedeeError> {
        let req = self.new_request("/teams", Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn get_team(&self, session: &Session, team_name: &str) -> Result<Team, ZebedeeError> {
        let uri = format!("/teams/{}", path_segment(team_name)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }
}
