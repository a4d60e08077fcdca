use serde::{Deserialize, Serialize};

/// Login details of a CMS user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only sent when changing a password.
    #[serde(
        rename = "oldPassword",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub old_password: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            old_password: None,
        }
    }
}

/// An open CMS session. `id` is the token sent with every authenticated request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub id: String,
}
