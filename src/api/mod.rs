// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Client for the cassette server HTTP API.
//!
//! The server exposes three endpoints, all plain `GET`s:
//!
//! * `/api/cassettes` returns the catalog as a JSON object keyed by uuid.
//! * `/api/play/{uuid}` starts playback of a cassette.
//! * `/api/stop` stops whatever is playing.
//!
//! Responses to play and stop carry nothing of interest and are discarded.
//! Calls are blocking, so they must only be made from the task worker.

mod error;

pub(crate) use error::ApiError;

use std::time::Duration;

use log::debug;
use ureq::Agent;
use url::Url;

use crate::model::Catalog;

pub(crate) trait CassetteApi: Send + Sync {
    fn fetch_catalog(&self) -> Result<Catalog, ApiError>;
    fn play(&self, uuid: &str) -> Result<(), ApiError>;
    fn stop(&self) -> Result<(), ApiError>;
}

pub(crate) struct HttpCassetteApi {
    agent: Agent,
    base_url: Url,
}

impl HttpCassetteApi {
    /// Creates a client for the server at `base_url`.
    ///
    /// A `timeout` of `None` means requests may wait forever, which matches
    /// the behaviour users of the web front-end were used to.
    pub(crate) fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let agent = Agent::config_builder().timeout_global(timeout).build().into();

        Ok(Self { agent, base_url })
    }

    pub(crate) fn catalog_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["api", "cassettes"])
    }

    pub(crate) fn play_url(&self, uuid: &str) -> Result<Url, ApiError> {
        self.endpoint(&["api", "play", uuid])
    }

    pub(crate) fn stop_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["api", "stop"])
    }

    // Each segment is percent-encoded on its own, so a uuid can never escape
    // its path position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: &Url) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        debug!("GET {}", url);
        Ok(self.agent.get(url.as_str()).call()?)
    }
}

impl CassetteApi for HttpCassetteApi {
    fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        let mut response = self.get(&self.catalog_url()?)?;
        let body = response.body_mut().read_to_string()?;
        parse_catalog(&body)
    }

    fn play(&self, uuid: &str) -> Result<(), ApiError> {
        self.get(&self.play_url(uuid)?).map(|_| ())
    }

    fn stop(&self) -> Result<(), ApiError> {
        self.get(&self.stop_url()?).map(|_| ())
    }
}

/// Parses and validates a catalog response body.
///
/// Every entry must deserialize into a [`crate::model::Cassette`] and be
/// filed under its own uuid. A single bad entry rejects the whole catalog.
pub(crate) fn parse_catalog(body: &str) -> Result<Catalog, ApiError> {
    let catalog: Catalog = serde_json::from_str(body)?;

    if let Some((key, _)) = catalog
        .iter()
        .find(|(key, cassette)| cassette.uuid.is_empty() || **key != cassette.uuid)
    {
        return Err(ApiError::MalformedEntry(key.clone()));
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    /// Serves a single HTTP response on a local port, yielding the request
    /// line that was received.
    fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let status = status.to_string();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            reader.get_mut().write_all(response.as_bytes()).unwrap();
            request_line.trim_end().to_string()
        });

        (base, handle)
    }

    fn api(base: &str) -> HttpCassetteApi {
        HttpCassetteApi::new(base, None).unwrap()
    }

    #[test]
    fn endpoints_resolve_against_the_server_root() {
        let api = api("http://localhost:3030");
        assert_eq!(
            api.catalog_url().unwrap().as_str(),
            "http://localhost:3030/api/cassettes"
        );
        assert_eq!(
            api.play_url("u1").unwrap().as_str(),
            "http://localhost:3030/api/play/u1"
        );
        assert_eq!(
            api.stop_url().unwrap().as_str(),
            "http://localhost:3030/api/stop"
        );
    }

    #[test]
    fn endpoints_keep_a_path_prefix() {
        let api = api("http://media.local/tape/");
        assert_eq!(
            api.stop_url().unwrap().as_str(),
            "http://media.local/tape/api/stop"
        );
    }

    #[test]
    fn uuid_is_a_single_encoded_segment() {
        let api = api("http://localhost:3030");
        assert_eq!(
            api.play_url("a/b c").unwrap().as_str(),
            "http://localhost:3030/api/play/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpCassetteApi::new("not a url", None),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpCassetteApi::new("mailto:someone@example.com", None),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn parses_a_catalog() {
        let body = r#"{"a-1":{"uuid":"a-1","name":"Tape A","url":"http://x/a","created_at":"2021-01-01T00:00:00Z"}}"#;
        let catalog = parse_catalog(body).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["a-1"].name, "Tape A");
        assert_eq!(catalog["a-1"].url, "http://x/a");
    }

    #[test]
    fn parses_an_empty_catalog() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn ignores_extra_server_fields() {
        let body = r#"{"u":{"uuid":"u","name":"N","safe_name":"N","path":"cassettes/2019/01/N",
            "url":"http://x","yt_url":"http://y","image_url":null,"labels":["Rock"],
            "subcategories":[],"created_at":"2019-01-15T20:50:00.001+02:00"}}"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog["u"].labels, vec!["Rock".to_string()]);
    }

    #[test]
    fn rejects_entries_missing_fields() {
        let body = r#"{"u":{"uuid":"u","name":"N"}}"#;
        assert!(matches!(parse_catalog(body), Err(ApiError::Body(_))));
    }

    #[test]
    fn rejects_entries_filed_under_another_key() {
        let body = r#"{"k":{"uuid":"u","name":"N","url":"http://x","created_at":"2020-01-01T00:00:00Z"}}"#;
        assert_eq!(
            parse_catalog(body),
            Err(ApiError::MalformedEntry("k".into()))
        );
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(matches!(parse_catalog("[]"), Err(ApiError::Body(_))));
        assert!(matches!(parse_catalog("<html>"), Err(ApiError::Body(_))));
    }

    #[test]
    fn fetches_the_catalog_over_http() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"u1":{"uuid":"u1","name":"Tape","url":"http://x/u1","created_at":"2021-01-01T00:00:00Z"}}"#,
        );

        let catalog = api(&base).fetch_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["u1"].name, "Tape");
        assert_eq!(server.join().unwrap(), "GET /api/cassettes HTTP/1.1");
    }

    #[test]
    fn error_status_fails_the_catalog() {
        let (base, server) = serve_once("500 Internal Server Error", "oops");

        let err = api(&base).fetch_catalog().unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert_eq!(err.to_string(), "server responded with status 500");
        server.join().unwrap();
    }

    #[test]
    fn play_and_stop_request_their_endpoints() {
        let (base, server) = serve_once("200 OK", "");
        api(&base).play("u1").unwrap();
        assert_eq!(server.join().unwrap(), "GET /api/play/u1 HTTP/1.1");

        let (base, server) = serve_once("200 OK", "");
        api(&base).stop().unwrap();
        assert_eq!(server.join().unwrap(), "GET /api/stop HTTP/1.1");
    }
}
