use std::sync::{Arc, Mutex};

use reqwest::{header::HeaderMap, Method, Request, Response};

use crate::{
    core::{
        client::{ZebedeeClient, FLORENCE_TOKEN_HEADER},
        common::http_client_factory::MockHttpClient,
    },
    endpoints::Session,
};

pub const HOST: &str = "http://localhost:8082";
pub const COLLECTION_ID: &str = "collectionID";
pub const CONTENT_URI: &str = "/the/uri";
pub const PAGE_CONTENT: &str = r#"{"type":"static_page"}"#;

/// Snapshot of a request handed to the mocked transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RecordedRequest {
    fn from_request(req: &Request) -> Self {
        Self {
            method: req.method().clone(),
            url: req.url().to_string(),
            headers: req.headers().clone(),
            body: req.body().and_then(|b| b.as_bytes()).map(|b| b.to_vec()),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn token(&self) -> Option<&str> {
        self.header(FLORENCE_TOKEN_HEADER)
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_ref().expect("request has no body"))
            .expect("request body is not json")
    }
}

pub type Calls = Arc<Mutex<Vec<RecordedRequest>>>;

pub fn session() -> Session {
    Session {
        email: "test@test.co.uk".to_string(),
        id: "666".to_string(),
    }
}

pub fn http_response(status: u16, body: &str) -> Response {
    Response::from(
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap(),
    )
}

/// Client whose transport answers every request with `status` and `body`.
pub fn mock_http_response(status: u16, body: &str) -> (ZebedeeClient, Calls) {
    let calls: Calls = Arc::new(Mutex::new(vec![]));
    let recorded = calls.clone();
    let body = body.to_string();

    let mut mock = MockHttpClient::new();
    mock.expect_execute().returning(move |req| {
        recorded
            .lock()
            .unwrap()
            .push(RecordedRequest::from_request(&req));
        Ok(http_response(status, &body))
    });

    (ZebedeeClient::new(HOST, Arc::new(mock)), calls)
}

/// Client whose transport fails every request with `reason`.
pub fn mock_http_error(reason: &'static str) -> (ZebedeeClient, Calls) {
    let calls: Calls = Arc::new(Mutex::new(vec![]));
    let recorded = calls.clone();

    let mut mock = MockHttpClient::new();
    mock.expect_execute().returning(move |req| {
        recorded
            .lock()
            .unwrap()
            .push(RecordedRequest::from_request(&req));
        Err(reason.into())
    });

    (ZebedeeClient::new(HOST, Arc::new(mock)), calls)
}

/// The single request recorded by the mock, panicking when there is not exactly one.
pub fn single_call(calls: &Calls) -> RecordedRequest {
    let calls = calls.lock().unwrap();
    assert_eq!(1, calls.len(), "expected exactly one request");
    calls[0].clone()
}
