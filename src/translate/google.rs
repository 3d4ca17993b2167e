use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::interface::{TranslateError, TranslatorInterface};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Client for the public Google Translate `translate_a/single` endpoint.
///
/// The base URL is configurable so tests can point it at a local mock
/// server instead of the real service.
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Service(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// The reply is a nested array; index 0 holds the translated segments,
    /// each segment carrying the translated chunk at its own index 0.
    fn extract_translation(payload: &Value) -> Result<String, TranslateError> {
        let segments = payload
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                TranslateError::Service("unexpected response shape from translation service".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(chunk);
            }
        }
        Ok(translated)
    }
}

#[async_trait]
impl TranslatorInterface for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Translation request failed: {}", e);
                TranslateError::Service(format!("could not reach translation service: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Translation service returned {}", status);
            return Err(TranslateError::Service(format!(
                "translation service returned status {}",
                status
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            TranslateError::Service(format!("could not parse translation service reply: {}", e))
        })?;

        let translated = Self::extract_translation(&payload)?;
        debug!(
            "Translated {} chars {} -> {}",
            text.len(),
            source_lang,
            target_lang
        );
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> GoogleTranslateClient {
        GoogleTranslateClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn translates_a_single_segment() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/translate_a/single")
                .query_param("client", "gtx")
                .query_param("sl", "en")
                .query_param("tl", "fr")
                .query_param("q", "hello");
            then.status(200)
                .json_body(json!([[["bonjour", "hello", null, null, 10]], null, "en"]));
        });

        let client = client_for(&server);
        let result = client.translate("hello", "en", "fr").await.unwrap();
        assert_eq!(result, "bonjour");
        mock.assert();
    }

    #[tokio::test]
    async fn joins_multiple_segments() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/translate_a/single");
            then.status(200).json_body(json!([
                [["Bonjour ", "Hello "], ["le monde", "world"]],
                null,
                "en"
            ]));
        });

        let client = client_for(&server);
        let result = client.translate("Hello world", "en", "fr").await.unwrap();
        assert_eq!(result, "Bonjour le monde");
    }

    #[tokio::test]
    async fn non_success_status_is_a_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/translate_a/single");
            then.status(429).body("slow down");
        });

        let client = client_for(&server);
        let result = client.translate("hello", "en", "fr").await;
        match result {
            Err(TranslateError::Service(message)) => assert!(message.contains("429")),
            other => panic!("expected service error, got {:?}", other.map_err(|e| e.to_string())),
        }
    }

    #[tokio::test]
    async fn malformed_reply_is_a_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/translate_a/single");
            then.status(200).json_body(json!({"not": "the shape we expect"}));
        });

        let client = client_for(&server);
        let result = client.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(TranslateError::Service(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_service_error() {
        // Port 1 is reserved and nothing listens on it.
        let client =
            GoogleTranslateClient::new("http://127.0.0.1:1".to_string(), Duration::from_secs(1))
                .unwrap();
        let result = client.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(TranslateError::Service(_))));
    }
}
