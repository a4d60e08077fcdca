pub mod authenticator;
pub mod collections;
pub mod content;
pub mod keyring;
pub mod permissions;
pub mod teams;
pub mod users;

pub use authenticator::{AuthApi, Credentials, Session};
pub use collections::{
    CollectionDescription, CollectionDetails, CollectionsApi, ContentDescription,
    ContentDetails, ContentUpdateOptions, Dataset, DatasetVersion, Event, PendingDelete,
    PublishResult, PublishType, COLLECTION_DATE_FORMAT,
};
pub use content::ContentApi;
pub use keyring::KeyringApi;
pub use permissions::{Permissions, PermissionsApi};
pub use teams::{Team, TeamsApi, TeamsList};
pub use users::{User, UsersApi};

/// Every endpoint group of the CMS, as one trait object friendly bound.
///
/// Code depending on `dyn Client` (or `impl Client`) can be handed a
/// [`ZebedeeClient`](crate::ZebedeeClient) or any test double implementing
/// the individual traits.
pub trait Client:
    AuthApi + UsersApi + PermissionsApi + CollectionsApi + TeamsApi + KeyringApi + ContentApi
{
}

impl<T> Client for T where
    T: AuthApi + UsersApi + PermissionsApi + CollectionsApi + TeamsApi + KeyringApi + ContentApi
{
}
