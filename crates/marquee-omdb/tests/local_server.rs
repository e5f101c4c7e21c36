//! End-to-end client tests against a one-shot local HTTP server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use marquee_core::config::OmdbConfig;
use marquee_core::{Error, Movie, SearchProvider, SearchRequest};
use marquee_omdb::{OmdbClient, OmdbError};

/// Serve exactly one canned response and hand back the request line.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line
    });

    (format!("http://127.0.0.1:{port}/"), handle)
}

fn client_for(base_url: String) -> OmdbClient {
    OmdbClient::new(&OmdbConfig {
        api_key: "test-key".to_string(),
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

fn request(query: &str) -> SearchRequest {
    SearchRequest {
        id: 1,
        query: query.to_string(),
        page: 1,
    }
}

#[test]
fn search_sends_expected_query_parameters() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"Search":[{"Title":"Inception","Year":"2010","imdbID":"tt1375666","Type":"movie","Poster":"http://x/p.jpg"}],"totalResults":"1","Response":"True"}"#,
    );

    let movies = client_for(base_url).search(&request("inception")).unwrap();
    assert_eq!(movies, vec![Movie::new("Inception", "2010", "http://x/p.jpg")]);

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET /?"), "{request_line}");
    for param in ["apikey=test-key", "s=inception", "page=1", "type=movie"] {
        assert!(request_line.contains(param), "missing {param} in {request_line}");
    }
}

#[test]
fn not_found_is_an_empty_list() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"Response":"False","Error":"Movie not found!"}"#,
    );

    let movies = client_for(base_url).search(&request("zzzzz")).unwrap();
    assert!(movies.is_empty());
    server.join().unwrap();
}

#[test]
fn unauthorized_is_search_failed() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 401 Unauthorized",
        r#"{"Response":"False","Error":"Invalid API key!"}"#,
    );

    let client = client_for(base_url);
    match client.search_page("heat", 1) {
        Err(OmdbError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key!");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn transport_failure_is_search_failed() {
    // Bind then drop to get a port with nothing listening.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = client_for(format!("http://127.0.0.1:{port}/"))
        .search(&request("heat"))
        .unwrap_err();
    assert!(matches!(err, Error::SearchFailed(_)));
}

#[test]
fn missing_api_key_is_rejected() {
    let result = OmdbClient::new(&OmdbConfig {
        api_key: "  ".to_string(),
        ..OmdbConfig::default()
    });
    assert!(matches!(result, Err(OmdbError::MissingApiKey)));
}
