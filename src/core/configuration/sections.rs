use serde::Deserialize;

use crate::core::common::transport::ZebedeeError;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApiConfiguration {
    /// Base URL of the CMS, e.g. `http://localhost:8082`.
    pub host: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl ApiConfiguration {
    /// Returns the trimmed host, failing when it is missing or blank.
    pub fn assert_host_is_not_empty(&self) -> Result<&str, ZebedeeError> {
        match self.host.as_deref().map(str::trim) {
            Some(h) if !h.is_empty() => Ok(h),
            _ => Err(ZebedeeError::Configuration(
                "api host is missing from configuration".to_string(),
            )),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LogConfiguration {
    pub level: Option<String>,
}
