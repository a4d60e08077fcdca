pub mod client;
pub mod common;
pub mod configuration;
pub mod logger;
