//! Astronomy Picture of the Day client.
//!
//! One GET per call, no caching and no retry. The API key travels as the
//! `api_key` query parameter and is kept out of logs and error messages.

use serde::{Deserialize, Deserializer};

use crate::error::ExoError;
use crate::net::HttpClient;

/// The day's featured image and its metadata. Fields the provider omits or
/// sends as `null` are left empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyImage {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub explanation: String,
    /// `"image"` or `"video"`; empty when not reported.
    #[serde(deserialize_with = "null_as_empty")]
    pub media_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub copyright: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DailyImage {
    pub fn is_video(&self) -> bool {
        self.media_type.eq_ignore_ascii_case("video")
    }
}

/// Fetch today's picture from `endpoint`.
pub fn fetch_daily_image(
    client: &dyn HttpClient,
    endpoint: &str,
    api_key: &str,
) -> Result<DailyImage, ExoError> {
    let url = reqwest::Url::parse_with_params(endpoint, &[("api_key", api_key)])
        .map_err(|e| ExoError::ImageFetchFailed(format!("invalid endpoint {endpoint}: {e}")))?;

    log::info!("Fetching Astronomy Picture of the Day from {endpoint}");
    let response = client
        .get(url.as_str())
        .map_err(|e| ExoError::ImageFetchFailed(e.to_string()))?;
    if !response.is_ok() {
        log::error!("APOD request returned HTTP {}", response.status);
        return Err(ExoError::ImageFetchFailed(format!("HTTP {}", response.status)));
    }

    let image: DailyImage = serde_json::from_slice(&response.body)
        .map_err(|e| ExoError::ImageFetchFailed(format!("invalid response body: {e}")))?;
    log::debug!("APOD for {}: {:?}", image.date, image.title);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::fake::FakeClient;

    const ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

    #[test]
    fn parses_the_four_display_fields() {
        let body = br#"{
            "title": "The Horsehead Nebula",
            "date": "2026-10-17",
            "url": "https://apod.nasa.gov/apod/image/horsehead.jpg",
            "explanation": "A dark cloud of dust.",
            "media_type": "image",
            "service_version": "v1"
        }"#;
        let client = FakeClient::status(200, body);

        let image = fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap();
        assert_eq!(image.title, "The Horsehead Nebula");
        assert_eq!(image.date, "2026-10-17");
        assert_eq!(image.url, "https://apod.nasa.gov/apod/image/horsehead.jpg");
        assert_eq!(image.explanation, "A dark cloud of dust.");
        assert!(!image.is_video());
        assert_eq!(image.copyright, "");
    }

    #[test]
    fn key_is_sent_as_query_parameter() {
        let client = FakeClient::status(200, b"{}");
        fetch_daily_image(&client, ENDPOINT, "abc&123").unwrap();
        assert_eq!(
            client.calls.borrow().as_slice(),
            ["https://api.nasa.gov/planetary/apod?api_key=abc%26123"]
        );
    }

    #[test]
    fn absent_fields_are_empty() {
        let client = FakeClient::status(200, br#"{"media_type": "video"}"#);
        let image = fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap();
        assert_eq!(image.title, "");
        assert_eq!(image.url, "");
        assert!(image.is_video());
    }

    #[test]
    fn null_fields_are_empty() {
        let body = br#"{"title": "Comet", "copyright": null, "explanation": null}"#;
        let client = FakeClient::status(200, body);
        let image = fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap();
        assert_eq!(image.title, "Comet");
        assert_eq!(image.copyright, "");
        assert_eq!(image.explanation, "");
    }

    #[test]
    fn server_error_is_a_fetch_failure_without_retry() {
        let client = FakeClient::status(500, b"Internal Server Error");
        let err = fetch_daily_image(&client, ENDPOINT, "secret-key").unwrap_err();
        assert!(matches!(err, ExoError::ImageFetchFailed(ref reason) if reason == "HTTP 500"));
        assert!(!err.to_string().contains("secret-key"));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn rate_limited_and_unreachable_are_failures() {
        let client = FakeClient::status(429, b"{}");
        assert!(fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").is_err());

        let client = FakeClient::unreachable("dns error");
        let err = fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap_err();
        assert!(err.to_string().contains("dns error"));
    }

    #[test]
    fn garbage_body_is_a_fetch_failure() {
        let client = FakeClient::status(200, b"<html>");
        assert!(matches!(
            fetch_daily_image(&client, ENDPOINT, "DEMO_KEY"),
            Err(ExoError::ImageFetchFailed(_))
        ));
    }

    #[test]
    fn every_call_fetches_again() {
        let client = FakeClient::status(200, b"{}");
        fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap();
        fetch_daily_image(&client, ENDPOINT, "DEMO_KEY").unwrap();
        assert_eq!(client.call_count(), 2);
    }
}
