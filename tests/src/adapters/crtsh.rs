#![cfg(test)]
use std::time::Duration;

use dome_common::passive::PassiveSource;
use dome_core::passive::CrtSh;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::util::domain;

const TIMEOUT: Duration = Duration::from_secs(2);

fn source(server: &MockServer) -> CrtSh {
    CrtSh::with_endpoint(format!("{}/", server.uri()), TIMEOUT).unwrap()
}

#[tokio::test]
async fn crtsh_names_are_split_normalized_and_scoped() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "%.example.com"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name_value": "www.example.com\n*.example.com" },
            { "name_value": "Mail.Example.com" },
            { "name_value": "shop.example.org" },
            { "name_value": "www.example.com" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let names: Vec<String> = source(&server).lookup(&domain("example.com")).await;

    assert_eq!(names, vec!["example.com", "mail.example.com", "www.example.com"]);
}

#[tokio::test]
async fn crtsh_server_error_yields_no_names() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(source(&server).lookup(&domain("example.com")).await.is_empty());
}

#[tokio::test]
async fn crtsh_malformed_body_yields_no_names() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    assert!(source(&server).lookup(&domain("example.com")).await.is_empty());
}

#[tokio::test]
async fn crtsh_slow_answer_is_abandoned() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "name_value": "www.example.com" }]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let crtsh: CrtSh = CrtSh::with_endpoint(format!("{}/", server.uri()), Duration::from_millis(200)).unwrap();

    assert!(crtsh.lookup(&domain("example.com")).await.is_empty());
}
