use std::fs;
use std::time::Duration;

use docmirror_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client")
}

#[tokio::test]
async fn writes_body_and_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc.pdf"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 ok".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("doc.pdf");
    let url = format!("{}/doc.pdf", server.uri());

    let outcome = fetcher(FetchSettings::default())
        .fetch(&url, &destination)
        .await
        .expect("fetch ok");

    assert_eq!(outcome.bytes_written, 11);
    assert_eq!(outcome.final_url, url);
    assert!(outcome.streamed);
    assert_eq!(fs::read(&destination).unwrap(), b"%PDF-1.7 ok");
}

#[tokio::test]
async fn streamed_body_is_byte_identical_with_small_chunks() {
    let body: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("large.bin");
    let settings = FetchSettings {
        chunk_size: 1000,
        ..FetchSettings::default()
    };

    let outcome = fetcher(settings)
        .fetch(&format!("{}/large.bin", server.uri()), &destination)
        .await
        .expect("fetch ok");

    assert_eq!(outcome.bytes_written, body.len() as u64);
    assert_eq!(fs::read(&destination).unwrap(), body);
}

#[tokio::test]
async fn empty_body_is_buffered_and_written() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("empty.html");

    let outcome = fetcher(FetchSettings::default())
        .fetch(&format!("{}/empty", server.uri()), &destination)
        .await
        .expect("fetch ok");

    assert!(!outcome.streamed);
    assert_eq!(outcome.bytes_written, 0);
    assert!(destination.is_file());
}

#[tokio::test]
async fn http_error_leaves_no_file_behind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("missing.html");

    let err = fetcher(FetchSettings::default())
        .fetch(&format!("{}/missing", server.uri()), &destination)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(!destination.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let temp = TempDir::new().unwrap();
    let destination = temp.path().join("slow.html");

    let err = fetcher(settings)
        .fetch(&format!("{}/slow", server.uri()), &destination)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
    assert!(!destination.exists());
}

#[tokio::test]
async fn rejects_invalid_url() {
    let temp = TempDir::new().unwrap();
    let err = fetcher(FetchSettings::default())
        .fetch("not a url", &temp.path().join("x.html"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn unwritable_destination_is_an_io_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let not_a_dir = temp.path().join("file");
    fs::write(&not_a_dir, "x").unwrap();

    let err = fetcher(FetchSettings::default())
        .fetch(&format!("{}/doc", server.uri()), &not_a_dir.join("doc.html"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}
