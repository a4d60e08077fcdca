//! Client for the HTTP API of the Zebedee content management system.
//!
//! A [`ZebedeeClient`] is built from a host (or a [`Configuration`]) and
//! exposes the CMS endpoints through the traits of [`endpoints`]: sessions,
//! users, permissions, teams, keyring, collections and their content.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use zebedee_client::{AuthApi, CollectionsApi, Credentials, ZebedeeClient};
//!
//! # async fn run() -> Result<(), zebedee_client::ZebedeeError> {
//! let client = ZebedeeClient::with_timeout("http://localhost:8082", Duration::from_secs(5))?;
//! let session = client
//!     .open_session(&Credentials::new("publisher@ons.gov.uk", "secret"))
//!     .await?;
//!
//! for collection in client.get_collections(&session).await? {
//!     println!("{}", collection.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod endpoints;

pub use crate::core::{
    client::{ZebedeeClient, FLORENCE_TOKEN_HEADER},
    common::{
        http_client_factory, ActionResult, ApiError, HttpClient, MockHttpClient,
        ReqwestHttpClient, ZebedeeError,
    },
    configuration::{
        get_configuration,
        sections::{ApiConfiguration, LogConfiguration},
        Configuration,
    },
};
pub use endpoints::*;
