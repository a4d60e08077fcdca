use log::debug;
use serde::Deserialize;
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

use super::common::transport::ZebedeeError;

pub mod sections;

use sections::{ApiConfiguration, LogConfiguration};

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Configuration {
    pub api: ApiConfiguration,
    #[serde(default)]
    pub log: LogConfiguration,
}

/// Loads the TOML configuration file at `file_path`.
pub async fn get_configuration(file_path: String) -> Result<Configuration, ZebedeeError> {
    debug!("loading configuration from {file_path}");

    let path = Path::new(&file_path);

    if !path.exists() {
        return Err(ZebedeeError::Configuration(format!(
            "configuration file is missing: {file_path}"
        )));
    }

    let mut file = File::open(path)
        .await
        .map_err(|e| ZebedeeError::Configuration(format!("cannot open {file_path}: {e}")))?;
    let mut buffer = vec![];

    file.read_to_end(&mut buffer)
        .await
        .map_err(|e| ZebedeeError::Configuration(format!("cannot read {file_path}: {e}")))?;

    let content = String::from_utf8(buffer)
        .map_err(|e| ZebedeeError::Configuration(format!("{file_path} is not utf-8: {e}")))?;

    match toml::from_str::<Configuration>(&content) {
        Ok(c) => Ok(c),
        Err(e) => Err(ZebedeeError::Configuration(format!(
            "configuration file is corrupted: {e}"
        ))),
    }
}
