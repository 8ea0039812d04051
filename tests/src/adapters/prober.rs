#![cfg(test)]
use std::time::Duration;

use dome_common::probe::{ProbeOutcome, Prober};
use dome_core::prober::HttpProber;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn plain_http_server_answers_http_only() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let port: u16 = server.address().port();

    let outcome: ProbeOutcome = HttpProber::new().probe("127.0.0.1", &[port], TIMEOUT).await;

    assert_eq!(outcome.http.map(|l| l.status), Some(204));
    assert_eq!(outcome.https, None);
}

#[tokio::test]
async fn error_status_still_counts_as_an_answer() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let port: u16 = server.address().port();

    let outcome: ProbeOutcome = HttpProber::new().probe("127.0.0.1", &[port], TIMEOUT).await;

    assert_eq!(outcome.http.map(|l| l.status), Some(404));
}

#[tokio::test]
async fn first_answering_port_wins() {
    let first: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&first)
        .await;
    let second: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&second)
        .await;
    let ports: [u16; 2] = [first.address().port(), second.address().port()];

    let outcome: ProbeOutcome = HttpProber::new().probe("127.0.0.1", &ports, TIMEOUT).await;

    assert_eq!(outcome.http.map(|l| l.status), Some(200));
}

#[tokio::test]
async fn redirects_are_followed() {
    let target: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&target)
        .await;
    let origin: MockServer = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", format!("{}/landing", target.uri())))
        .mount(&origin)
        .await;

    let outcome: ProbeOutcome = HttpProber::new()
        .probe("127.0.0.1", &[origin.address().port()], TIMEOUT)
        .await;

    assert_eq!(outcome.http.map(|l| l.status), Some(200));
}
