// crates/travelrec-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{Result, TravelError};
use crate::model::DestinationSet;

/// Downloads and parses a recommendation document.
///
/// One attempt, no retry. A non-success status becomes
/// [`TravelError::Network`]; a body that is not JSON becomes
/// [`TravelError::Parse`].
pub fn fetch_destinations(url: &str) -> Result<DestinationSet> {
    let response = reqwest::blocking::get(url).map_err(|e| TravelError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TravelError::Network {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .bytes()
        .map_err(|e| TravelError::Http(e.to_string()))?;
    let set = DestinationSet::from_json_slice(&body)?;
    tracing::debug!(%url, stats = ?set.stats(), "fetched destinations");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one canned HTTP response on a local port.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/travel_recommendation_api.json")
    }

    #[test]
    fn not_found_status_is_a_network_error() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        match fetch_destinations(&url) {
            Err(TravelError::Network { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected a 404 network error, got {other:?}"),
        }
    }

    #[test]
    fn success_body_is_parsed() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 31\r\nConnection: close\r\n\r\n{\"countries\":[{\"name\":\"Peru\"}]}",
        );
        let set = fetch_destinations(&url).unwrap();
        assert_eq!(set.stats().countries, 1);
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let err = fetch_destinations("http://127.0.0.1:9/travel_recommendation_api.json")
            .unwrap_err();
        assert!(matches!(err, TravelError::Http(_)));
    }
}
