use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde_json::json;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::core::{
    client::{path_segment, request_uri, ZebedeeClient, FLORENCE_TOKEN_HEADER},
    common::{
        testing::{mock_http_response, single_call, HOST},
        transport::ZebedeeError,
    },
    configuration::sections::ApiConfiguration,
};

#[test]
fn new_request_sets_token_and_content_type() {
    let (client, _) = mock_http_response(200, "");

    let req = client
        .new_request("/collections", Some("Bearer abc.def"), Method::GET, None)
        .unwrap();

    assert_eq!(Method::GET, *req.method());
    assert_eq!(format!("{HOST}/collections"), req.url().to_string());
    assert_eq!(
        "application/json",
        req.headers().get("content-type").unwrap().to_str().unwrap()
    );
    assert_eq!(
        "Bearer abc.def",
        req.headers().get(FLORENCE_TOKEN_HEADER).unwrap().to_str().unwrap()
    );
    assert!(req.body().is_none());
}

#[test]
fn new_request_without_token() {
    let (client, _) = mock_http_response(200, "");

    let req = client
        .new_request("/login", None, Method::POST, Some(b"{}".to_vec()))
        .unwrap();

    assert!(req.headers().get(FLORENCE_TOKEN_HEADER).is_none());
    assert_eq!(
        Some(b"{}".as_slice()),
        req.body().and_then(|b| b.as_bytes())
    );
}

#[test]
fn new_request_rejects_malformed_url() {
    let client = ZebedeeClient::with_timeout("not a host", Duration::from_secs(1)).unwrap();

    let err = client
        .new_request("/collections", None, Method::GET, None)
        .unwrap_err();

    assert!(matches!(err, ZebedeeError::RequestConstruction(_)));
}

#[test]
fn new_request_rejects_invalid_token() {
    let (client, _) = mock_http_response(200, "");

    let err = client
        .new_request("/collections", Some("bad\ntoken"), Method::GET, None)
        .unwrap_err();

    assert!(matches!(err, ZebedeeError::RequestConstruction(_)));
}

#[test]
fn trailing_slash_is_trimmed_from_host() {
    let client =
        ZebedeeClient::with_timeout("http://localhost:8082/", Duration::from_secs(1)).unwrap();

    assert_eq!("http://localhost:8082", client.host());

    let req = client
        .new_request("/collections", None, Method::GET, None)
        .unwrap();
    assert_eq!("http://localhost:8082/collections", req.url().as_str());
}

#[test]
fn request_uri_keeps_query() {
    let url = Url::parse("http://localhost:8082/content/c1?uri=/a/b&recursive=true").unwrap();
    assert_eq!("/content/c1?uri=/a/b&recursive=true", request_uri(&url));

    let url = Url::parse("http://localhost:8082/collections").unwrap();
    assert_eq!("/collections", request_uri(&url));
}

#[test]
fn path_segment_escapes_separators() {
    assert_eq!("collectionID", path_segment("collectionID").unwrap());
    assert_eq!("..%2Fusers", path_segment("../users").unwrap());
    assert_eq!("a%2Fb%3Fc%23d%25", path_segment("a/b?c#d%").unwrap());
    assert_eq!("my%20team", path_segment("my team").unwrap());
    assert_eq!("v1.2", path_segment("v1.2").unwrap());

    assert!(matches!(
        path_segment(".."),
        Err(ZebedeeError::RequestConstruction(_))
    ));
    assert!(matches!(
        path_segment("."),
        Err(ZebedeeError::RequestConstruction(_))
    ));
}

#[tokio::test]
async fn wrong_status_with_unreadable_body() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Announces more body than it sends, then hangs up.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0u8; 4096];
        let _ = socket.read(&mut buffer).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client =
        ZebedeeClient::with_timeout(format!("http://{addr}"), Duration::from_secs(3)).unwrap();

    let req = client
        .new_request("/collection/abc", Some("666"), Method::GET, None)
        .unwrap();
    let err = client
        .execute_request_no_response(req, StatusCode::OK)
        .await
        .unwrap_err();

    server.await.unwrap();

    let api_error = err.as_api_error().unwrap();
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, api_error.actual_status);
    assert!(api_error.read_failure.is_some());
    assert!(api_error.body.is_none());
    assert!(err
        .to_string()
        .starts_with("unexpected error attempting to read error response body"));
}

#[tokio::test]
async fn wrong_status_keeps_non_empty_body() {
    let (client, _) = mock_http_response(404, "collection not found");

    let req = client
        .new_request("/collection/abc", Some("666"), Method::GET, None)
        .unwrap();
    let err = client
        .execute_request_no_response(req, StatusCode::OK)
        .await
        .unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert_eq!(Method::GET, api_error.method);
    assert_eq!("/collection/abc", api_error.uri);
    assert_eq!(StatusCode::NOT_FOUND, api_error.actual_status);
    assert_eq!(Some("collection not found".to_string()), api_error.body);
    assert!(api_error.read_failure.is_none());
    assert_eq!(
        "request GET /collection/abc expected status 200 but received 404",
        err.to_string()
    );
}

#[tokio::test]
async fn wrong_status_with_empty_body() {
    let (client, calls) = mock_http_response(500, "");

    let req = client
        .new_request("/collections", Some("666"), Method::GET, None)
        .unwrap();
    let err = client
        .request_object::<Vec<String>>(req, StatusCode::OK)
        .await
        .unwrap_err();

    single_call(&calls);
    let api_error = err.as_api_error().unwrap();
    assert!(api_error.body.is_none());
    assert!(api_error.read_failure.is_none());
}

#[tokio::test]
async fn undecodable_body() {
    let (client, _) = mock_http_response(200, "not json");

    let req = client
        .new_request("/collections", Some("666"), Method::GET, None)
        .unwrap();
    let err = client
        .request_object::<Vec<String>>(req, StatusCode::OK)
        .await
        .unwrap_err();

    assert!(matches!(err, ZebedeeError::Decode(_)));
}

#[tokio::test]
async fn action_result_from_boolean_body() {
    let (client, _) = mock_http_response(200, "false");

    let req = client
        .new_request("/approve/c1", Some("666"), Method::POST, None)
        .unwrap();
    let result = client.request_action(req, StatusCode::OK).await.unwrap();

    assert_eq!(StatusCode::OK, result.status);
    assert!(!result.success);
}

#[tokio::test]
async fn request_through_reqwest_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(header(FLORENCE_TOKEN_HEADER, "666"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZebedeeClient::with_timeout(mock_server.uri(), Duration::from_secs(3)).unwrap();

    let req = client
        .new_request("/collections", Some("666"), Method::GET, None)
        .unwrap();
    let names: Vec<String> = client.request_object(req, StatusCode::OK).await.unwrap();

    assert_eq!(vec!["a".to_string(), "b".to_string()], names);
}

#[tokio::test]
async fn query_parameters_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("email", "user@ons.gov.uk"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZebedeeClient::with_timeout(mock_server.uri(), Duration::from_secs(3)).unwrap();

    let req = client
        .new_request("/users?email=user@ons.gov.uk", Some("666"), Method::GET, None)
        .unwrap();
    client
        .execute_request_no_response(req, StatusCode::OK)
        .await
        .unwrap();
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client =
        ZebedeeClient::with_timeout(mock_server.uri(), Duration::from_millis(50)).unwrap();

    let req = client
        .new_request("/collections", Some("666"), Method::GET, None)
        .unwrap();
    let err = client
        .execute_request_no_response(req, StatusCode::OK)
        .await
        .unwrap_err();

    assert!(matches!(err, ZebedeeError::Transport(_)));
}

#[test]
fn from_configuration() {
    let conf = ApiConfiguration {
        host: Some("http://localhost:8082".to_string()),
        timeout: Some(10),
    };
    let client = ZebedeeClient::from_configuration(&conf).unwrap();
    assert_eq!("http://localhost:8082", client.host());

    let err = ZebedeeClient::from_configuration(&ApiConfiguration::default()).unwrap_err();
    assert!(matches!(err, ZebedeeError::Configuration(_)));

    let blank = ApiConfiguration {
        host: Some("  ".to_string()),
        timeout: None,
    };
    assert!(ZebedeeClient::from_configuration(&blank).is_err());
}
