use daily_digest::source::{DataLoadError, DataSource, LOAD_FAILED_MESSAGE, Loader};
use std::time::Duration;
use tempfile::tempdir;

const FEED: &str = r#"{
  "topics": ["Наука", "Технологии"],
  "articles": [
    {"title": "Первая", "excerpt": "Кратко", "url": "https://example.org/1", "topics": ["Наука"]},
    {"title": "Вторая", "topics": null},
    {"title": "Третья"}
  ]
}"#;

#[test]
fn loads_feed_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, FEED).unwrap();

    let data = Loader::default()
        .load(&DataSource::File(path))
        .unwrap();
    assert_eq!(data.topics, ["Наука", "Технологии"]);
    assert_eq!(data.articles.len(), 3);
    assert_eq!(data.articles[0].excerpt.as_deref(), Some("Кратко"));
    assert!(data.articles[1].topics.is_empty());
    assert!(data.articles[2].url.is_none());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Loader::default()
        .load(&DataSource::File(dir.path().join("absent.json")))
        .unwrap_err();
    assert!(matches!(err, DataLoadError::Io { .. }));
    assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
}

#[test]
fn malformed_json_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{\"articles\": [").unwrap();
    let err = Loader::default().load(&DataSource::File(path)).unwrap_err();
    assert!(matches!(err, DataLoadError::Decode { .. }));
}

#[test]
fn wrong_shape_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"articles": [{"excerpt": "no title"}]}"#).unwrap();
    let err = Loader::default().load(&DataSource::File(path)).unwrap_err();
    assert!(matches!(err, DataLoadError::Decode { .. }));
}

#[test]
fn unreachable_url_is_network_error() {
    // Port 9 (discard) is closed on loopback in test environments.
    let loader = Loader::with_timeout(Duration::from_secs(2));
    let err = loader
        .load(&DataSource::Url("http://127.0.0.1:9/data.json".into()))
        .unwrap_err();
    assert!(matches!(err, DataLoadError::Network { .. }), "{err}");
}

#[test]
fn display_of_sources() {
    assert_eq!(DataSource::parse(" feed.json ").to_string(), "feed.json");
    assert_eq!(
        DataSource::from("https://example.org/x.json").to_string(),
        "https://example.org/x.json"
    );
    assert_eq!(DataSource::default().to_string(), "data.json");
}

/// Serve one canned HTTP response on a loopback port, returning the URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}/data.json", addr)
}

#[test]
fn loads_feed_over_http() {
    let url = serve_once("200 OK", FEED);
    let data = Loader::default().load(&DataSource::parse(&url)).unwrap();
    assert_eq!(data.articles.len(), 3);
}

#[test]
fn non_success_status_is_reported() {
    let url = serve_once("404 Not Found", "");
    let err = Loader::default().load(&DataSource::parse(&url)).unwrap_err();
    match err {
        DataLoadError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other}"),
    }
}
