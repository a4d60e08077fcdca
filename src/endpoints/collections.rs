use async_trait::async_trait;
use log::info;
use reqwest::{Method, StatusCode};

use crate::core::{
    client::{path_segment, ZebedeeClient},
    common::transport::ZebedeeError,
};

use super::authenticator::Session;

pub mod models;

pub use models::{
    CollectionDescription, CollectionDetails, ContentDescription, ContentDetails, Dataset,
    DatasetVersion, Event, PendingDelete, PublishResult, PublishType, COLLECTION_DATE_FORMAT,
};

/// Flags telling the CMS how to merge uploaded content into a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentUpdateOptions {
    /// When false, content already in the collection is left untouched.
    pub overwrite_existing: bool,
    /// When true, the files stored alongside the page are added too, not
    /// only its `data.json`.
    pub recursive: bool,
    /// When true, the CMS checks the body is a valid page JSON structure.
    pub validate_json: bool,
}

impl Default for ContentUpdateOptions {
    fn default() -> Self {
        Self {
            overwrite_existing: true,
            recursive: false,
            validate_json: true,
        }
    }
}

/// Collection endpoints of the CMS.
///
/// The lifecycle calls (complete, review, approve, unlock, publish) only ask
/// the CMS for a transition; whether it is allowed is decided server side and
/// reported back as [`ZebedeeError::Unsuccessful`] when refused.
#[async_trait]
pub trait CollectionsApi: Send + Sync {
    async fn get_collection_by_id(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<CollectionDescription, ZebedeeError>;
    /// Returns the created collection, carrying the generated ID.
    async fn create_collection(
        &self,
        session: &Session,
        desc: &CollectionDescription,
    ) -> Result<CollectionDescription, ZebedeeError>;
    async fn delete_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError>;
    async fn get_collections(
        &self,
        session: &Session,
    ) -> Result<Vec<CollectionDescription>, ZebedeeError>;
    /// Updates the collection identified by `desc.id`.
    async fn update_collection(
        &self,
        session: &Session,
        desc: &CollectionDescription,
    ) -> Result<(), ZebedeeError>;
    async fn update_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        content: Vec<u8>,
        options: ContentUpdateOptions,
    ) -> Result<(), ZebedeeError>;
    async fn delete_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
    ) -> Result<(), ZebedeeError>;
    /// Marks content as complete, once its editor is done with it.
    async fn complete_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        recursive: bool,
    ) -> Result<(), ZebedeeError>;
    /// Marks content as reviewed by a user other than its editor.
    async fn review_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        recursive: bool,
    ) -> Result<(), ZebedeeError>;
    /// Approves a fully reviewed collection. Scheduled collections only publish once approved.
    async fn approve_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError>;
    /// Reverts an approval so the content can be edited again.
    async fn unlock_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError>;
    async fn publish_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError>;
    async fn get_collection_details(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<CollectionDetails, ZebedeeError>;
}

impl ZebedeeClient {
    /// POSTs to a lifecycle endpoint and maps a `false` answer to an error.
    async fn collection_action(
        &self,
        session: &Session,
        uri: &str,
        method: Method,
        action: &str,
        id: &str,
    ) -> Result<(), ZebedeeError> {
        let req = self.new_request(uri, Some(session.id.as_str()), method, None)?;
        self.request_action(req, StatusCode::OK)
            .await?
            .into_result(action, id)?;

        info!("{action} request succeeded: {id}");
        Ok(())
    }
}

#[async_trait]
impl CollectionsApi for ZebedeeClient {
    async fn get_collection_by_id(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<CollectionDescription, ZebedeeError> {
        let uri = format!("/collection/{}", path_segment(id)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn create_collection(
        &self,
        session: &Session,
        desc: &CollectionDescription,
    ) -> Result<CollectionDescription, ZebedeeError> {
        let req =
            self.new_json_request("/collection", Some(session.id.as_str()), Method::POST, desc)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn delete_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/collection/{}", path_segment(id)?);
        self.collection_action(session, &uri, Method::DELETE, "delete collection", id)
            .await
    }

    async fn get_collections(
        &self,
        session: &Session,
    ) -> Result<Vec<CollectionDescription>, ZebedeeError> {
        let req = self.new_request("/collections", Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }

    async fn update_collection(
        &self,
        session: &Session,
        desc: &CollectionDescription,
    ) -> Result<(), ZebedeeError> {
        let id = match desc.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(ZebedeeError::RequestConstruction(
                    "cannot update a collection without id".to_string(),
                ))
            }
        };

        let uri = format!("/collection/{}", path_segment(id)?);
        let req = self.new_json_request(&uri, Some(session.id.as_str()), Method::PUT, desc)?;
        self.execute_request_no_response(req, StatusCode::OK).await
    }

    async fn update_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        content: Vec<u8>,
        options: ContentUpdateOptions,
    ) -> Result<(), ZebedeeError> {
        let uri = format!(
            "/content/{}?uri={content_uri}&overwriteExisting={}&recursive={}&validateJson={}",
            path_segment(id)?,
            options.overwrite_existing,
            options.recursive,
            options.validate_json
        );

        let req = self.new_request(&uri, Some(session.id.as_str()), Method::POST, Some(content))?;
        self.request_action(req, StatusCode::OK)
            .await?
            .into_result("update collection content", id)
    }

    async fn delete_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
    ) -> Result<(), ZebedeeError> {
        let uri = format!("/content/{}?uri={content_uri}", path_segment(id)?);
        self.collection_action(
            session,
            &uri,
            Method::DELETE,
            "delete collection content",
            id,
        )
        .await
    }

    async fn complete_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        recursive: bool,
    ) -> Result<(), ZebedeeError> {
        let uri = format!(
            "/complete/{}?uri={content_uri}&recursive={recursive}",
            path_segment(id)?
        );
        self.collection_action(
            session,
            &uri,
            Method::POST,
            "complete collection content",
            id,
        )
        .await
    }

    async fn review_collection_content(
        &self,
        session: &Session,
        id: &str,
        content_uri: &str,
        recursive: bool,
    ) -> Result<(), ZebedeeError> {
        let uri = format!(
            "/review/{}?uri={content_uri}&recursive={recursive}",
            path_segment(id)?
        );
        self.collection_action(
            session,
            &uri,
            Method::POST,
            "review collection content",
            id,
        )
        .await
    }

    async fn approve_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/approve/{}", path_segment(id)?);
        self.collection_action(session, &uri, Method::POST, "approve collection", id)
            .await
    }

    async fn unlock_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/unlock/{}", path_segment(id)?);
        self.collection_action(session, &uri, Method::POST, "unlock collection", id)
            .await
    }

    async fn publish_collection(&self, session: &Session, id: &str) -> Result<(), ZebedeeError> {
        let uri = format!("/publish/{}", path_segment(id)?);
        self.collection_action(session, &uri, Method::POST, "publish collection", id)
            .await
    }

    async fn get_collection_details(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<CollectionDetails, ZebedeeError> {
        let uri = format!("/collectionDetails/{}", path_segment(id)?);
        let req = self.new_request(&uri, Some(session.id.as_str()), Method::GET, None)?;
        self.request_object(req, StatusCode::OK).await
    }
}
