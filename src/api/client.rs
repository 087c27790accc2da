//! HTTP client for the metadata service and the delivery endpoint.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::source::{MetadataSource, PayloadSource};
use crate::api::types::*;
use crate::config::{validation::validate_base_url, ApiConfig};
use crate::error::{Error, Result};

/// Longest response excerpt included in parse errors.
const BODY_EXCERPT_LEN: usize = 500;

/// Client for both remote services.
pub struct YankApi {
    client: Client,
    metadata_base: Url,
    delivery_base: Url,
}

impl YankApi {
    /// Create a new client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_str(&config.referer)
                .map_err(|e| Error::Config(format!("Invalid referer header: {}", e)))?,
        );
        headers.insert(
            header::ORIGIN,
            header::HeaderValue::from_str(&config.origin)
                .map_err(|e| Error::Config(format!("Invalid origin header: {}", e)))?,
        );

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            metadata_base: validate_base_url("api.metadata_base", &config.metadata_base)?,
            delivery_base: validate_base_url("api.delivery_base", &config.delivery_base)?,
        })
    }

    /// Build an endpoint URL from a base and path segments.
    ///
    /// Segments are percent-encoded, so an ID containing `/` or `?` cannot
    /// escape its path position.
    fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Base URL cannot have a path: {}", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and fail on any non-success status.
    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// GET a metadata endpoint and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        let response = self.get(url).await?;
        let text = response.text().await?;
        tracing::debug!("{} response length: {} bytes", what, text.len());

        serde_json::from_str(&text).map_err(|e| {
            let end = text
                .char_indices()
                .map(|(i, _)| i)
                .nth(BODY_EXCERPT_LEN)
                .unwrap_or(text.len());
            Error::MalformedResponse(format!(
                "Failed to parse {}: {} - Response: {}",
                what,
                e,
                &text[..end]
            ))
        })
    }
}

#[async_trait]
impl MetadataSource for YankApi {
    async fn track(&self, track_id: &str) -> Result<TrackResponse> {
        let url = Self::endpoint(&self.metadata_base, &["download", track_id])?;
        self.get_json(url, "track").await
    }

    async fn album_metadata(&self, album_id: &str) -> Result<CollectionMetadata> {
        let url = Self::endpoint(&self.metadata_base, &["metadata", "album", album_id])?;
        self.get_json(url, "album metadata").await
    }

    async fn album_tracks(&self, album_id: &str) -> Result<AlbumTrackList> {
        let url = Self::endpoint(&self.metadata_base, &["tracklist", "album", album_id])?;
        self.get_json(url, "album track list").await
    }

    async fn playlist_metadata(&self, playlist_id: &str) -> Result<CollectionMetadata> {
        let url = Self::endpoint(&self.metadata_base, &["metadata", "playlist", playlist_id])?;
        self.get_json(url, "playlist metadata").await
    }

    async fn playlist_page(&self, playlist_id: &str, offset: u64) -> Result<PlaylistPage> {
        let mut url = Self::endpoint(&self.metadata_base, &["tracklist", "playlist", playlist_id])?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string());
        self.get_json(url, "playlist page").await
    }
}

#[async_trait]
impl PayloadSource for YankApi {
    async fn fetch_payload(&self, track_id: &str) -> Result<Vec<u8>> {
        let url = Self::endpoint(&self.delivery_base, &["track", track_id])?;
        let response = self.get(url).await?;
        let bytes = response.bytes().await?;
        tracing::debug!("Fetched {} bytes for track {}", bytes.len(), track_id);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> YankApi {
        let config = ApiConfig {
            metadata_base: server.uri(),
            delivery_base: format!("{}/cdn", server.uri()),
            ..ApiConfig::default()
        };
        YankApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_track_metadata_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download/abc123"))
            .and(header("referer", "https://spotifydown.com/"))
            .and(header("origin", "https://spotifydown.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "metadata": { "id": "abc123", "title": "Song", "artists": "Band" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = api_for(&server).track("abc123").await.unwrap();
        assert!(response.success);
        assert_eq!(response.metadata.unwrap().title, "Song");
    }

    #[tokio::test]
    async fn test_playlist_page_sends_offset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tracklist/playlist/pl1"))
            .and(query_param("offset", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "trackList": [{ "id": "t1", "title": "One", "artists": "A", "album": "X" }],
                "nextOffset": 0
            })))
            .mount(&server)
            .await;

        let page = api_for(&server).playlist_page("pl1", 100).await.unwrap();
        assert_eq!(page.track_list.len(), 1);
        assert_eq!(page.next_offset(), None);
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metadata/album/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = api_for(&server).album_metadata("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tracklist/album/al1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tracks":[]}"#))
            .mount(&server)
            .await;

        let err = api_for(&server).album_tracks("al1").await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_payload_uses_delivery_base() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cdn/track/t9"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3audio".to_vec()))
            .mount(&server)
            .await;

        let bytes = api_for(&server).fetch_payload("t9").await.unwrap();
        assert_eq!(bytes, b"ID3audio");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("https://api.example.com/").unwrap();
        let url = YankApi::endpoint(&base, &["download", "a/b?c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/download/a%2Fb%3Fc");
    }
}
