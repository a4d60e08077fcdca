pub mod http_client_factory;
pub mod transport;

pub use http_client_factory::{http_client_factory, HttpClient, MockHttpClient, ReqwestHttpClient};
pub use transport::{ActionResult, ApiError, ZebedeeError};

#[cfg(test)]
pub mod testing;
