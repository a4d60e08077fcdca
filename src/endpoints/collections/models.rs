use std::{collections::HashMap, fmt::Display};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Format of collection publish dates.
pub const COLLECTION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Whether a collection publishes on approval or at its publish date.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishType {
    Manual,
    Scheduled,
}

impl Display for PublishType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishType::Manual => write!(f, "manual"),
            PublishType::Scheduled => write!(f, "scheduled"),
        }
    }
}

// The CMS sends `null` for empty lists.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub id: String,
    pub title: Option<String>,
    pub uri: Option<String>,
    pub state: Option<String>,
    pub last_edited_by: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetVersion {
    pub id: String,
    pub title: Option<String>,
    pub edition: Option<String>,
    pub version: Option<String>,
    pub uri: Option<String>,
    pub state: Option<String>,
    pub last_edited_by: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingDelete {
    pub user: Option<String>,
    pub root: Option<serde_json::Value>,
    pub total_deletes: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishResult {
    pub message: Option<String>,
    pub error: bool,
    pub transaction: Option<serde_json::Value>,
}

/// Metadata and workflow state of a collection.
///
/// The workflow fields are maintained by the CMS; they change as a side
/// effect of the lifecycle calls and are only read by the client.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub publish_type: Option<PublishType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub teams: Vec<String>,
    pub encrypted: bool,
    pub publish_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub in_progress_uris: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub complete_uris: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub reviewed_uris: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub dataset_versions: Vec<DatasetVersion>,
    #[serde(deserialize_with = "nullable")]
    pub datasets: Vec<Dataset>,
    #[serde(deserialize_with = "nullable")]
    pub events_by_uri: HashMap<String, Vec<Event>>,
    #[serde(deserialize_with = "nullable")]
    pub pending_deletes: Vec<PendingDelete>,
    #[serde(deserialize_with = "nullable")]
    pub publish_results: Vec<PublishResult>,
    #[serde(deserialize_with = "nullable")]
    pub timeseries_import_files: Vec<String>,
}

impl CollectionDescription {
    /// A manual collection publishing now, with no team and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            publish_type: Some(PublishType::Manual),
            publish_date: Some(Utc::now().format(COLLECTION_DATE_FORMAT).to_string()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContentDescription {
    pub title: Option<String>,
    pub edition: Option<String>,
    pub language: Option<String>,
}

/// A page of a collection and its history.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContentDetails {
    pub uri: String,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub description: ContentDescription,
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<Event>,
}

/// Collection metadata with the content in each workflow stage.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionDetails {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub publish_type: Option<PublishType>,
    pub publish_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub teams: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub in_progress: Vec<ContentDetails>,
    #[serde(deserialize_with = "nullable")]
    pub complete: Vec<ContentDetails>,
    #[serde(deserialize_with = "nullable")]
    pub reviewed: Vec<ContentDetails>,
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<Event>,
    pub approval_status: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub pending_deletes: Vec<PendingDelete>,
    #[serde(deserialize_with = "nullable")]
    pub datasets: Vec<Dataset>,
    #[serde(deserialize_with = "nullable")]
    pub dataset_versions: Vec<DatasetVersion>,
}
