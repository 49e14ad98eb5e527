//! Single-flight HTTP client for the generation endpoint.

use reqwest::Client;
use restyle_types::protocol::chat::ChatCompletionRequest;
use restyle_types::protocol::reply::ModelReply;
use restyle_types::TryOnError;

use crate::classify::classify_upstream_status;

const DEFAULT_ENDPOINT: &str = "https://www.needware.dev/v1/chat/completions";

fn resolve_endpoint(explicit: Option<String>) -> String {
    if let Some(url) = explicit {
        return url;
    }
    if let Ok(raw) = std::env::var("RESTYLE_UPSTREAM_URL") {
        let url = raw.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            tracing::warn!("RESTYLE_UPSTREAM_URL is empty, using default endpoint");
            return DEFAULT_ENDPOINT.to_string();
        }
        if url::Url::parse(&url).is_err() {
            tracing::warn!("RESTYLE_UPSTREAM_URL is not a valid URL, using default endpoint");
            return DEFAULT_ENDPOINT.to_string();
        }
        tracing::info!("Using custom upstream endpoint");
        url
    } else {
        DEFAULT_ENDPOINT.to_string()
    }
}

/// Wrapper around one shared `reqwest::Client`.
///
/// Exactly one POST per [`call`](Self::call); no retries, no timeout of its
/// own - the caller owns that policy, and dropping the returned future
/// aborts the in-flight request.
pub struct UpstreamClient {
    http_client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    /// Create a client against an explicit endpoint (tests, overrides).
    ///
    /// Accepts a pre-built `reqwest::Client` to avoid blocking TLS
    /// initialization inside an async runtime.
    pub fn new(http_client: Client, endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self { http_client, endpoint: resolve_endpoint(endpoint), api_key }
    }

    /// Create a client configured from the environment
    /// (`RESTYLE_UPSTREAM_URL`, `RESTYLE_API_KEY`).
    pub fn from_env(http_client: Client) -> Self {
        let api_key = std::env::var("RESTYLE_API_KEY").ok().filter(|k| !k.trim().is_empty());
        Self::new(http_client, None, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the generation request and decode the reply.
    ///
    /// 429 and 402 classify on status alone, before the body is touched.
    /// Other non-2xx statuses are classified from status plus body. A 2xx
    /// body that fails to decode is an internal error.
    pub async fn call(&self, request: &ChatCompletionRequest) -> Result<ModelReply, TryOnError> {
        let mut builder = self.http_client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TryOnError::Internal { message: e.to_string() })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(TryOnError::RateLimited);
        }
        if status.as_u16() == 402 {
            return Err(TryOnError::QuotaExhausted);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("upstream error {}: {:.200}", status, body);
            return Err(classify_upstream_status(status.as_u16(), &body));
        }

        response
            .json::<ModelReply>()
            .await
            .map_err(|e| TryOnError::Internal { message: format!("invalid upstream reply: {}", e) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chat_request() -> ChatCompletionRequest {
        let plan = crate::prompt::PromptPlan {
            instruction: "swap".to_string(),
            images: vec!["data:image/png;base64,QUJD".to_string()],
        };
        crate::assemble::build_chat_request(&plan)
    }

    fn client_for(server: &MockServer) -> UpstreamClient {
        UpstreamClient::new(
            Client::new(),
            Some(format!("{}/v1/chat/completions", server.uri())),
            None,
        )
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let client =
            UpstreamClient::new(Client::new(), Some("http://localhost:1234/v1".to_string()), None);
        assert_eq!(client.endpoint(), "http://localhost:1234/v1");
    }

    #[tokio::test]
    async fn test_success_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "data:image/png;base64,QUJD"}}]
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server).call(&chat_request()).await.unwrap();
        assert!(reply.message().is_some());
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("ignored"))
            .mount(&server)
            .await;

        let err = client_for(&server).call(&chat_request()).await.unwrap_err();
        assert_eq!(err, TryOnError::RateLimited);
    }

    #[tokio::test]
    async fn test_402_is_quota_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(402))
            .mount(&server)
            .await;

        let err = client_for(&server).call(&chat_request()).await.unwrap_err();
        assert_eq!(err, TryOnError::QuotaExhausted);
    }

    #[tokio::test]
    async fn test_500_surfaces_nested_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"message": "model exploded"}
            })))
            .mount(&server)
            .await;

        match client_for(&server).call(&chat_request()).await.unwrap_err() {
            TryOnError::Upstream { message } => assert_eq!(message, "model exploded"),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_internal() {
        // Nothing listens here
        let client = UpstreamClient::new(
            Client::new(),
            Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            None,
        );
        let err = client.call(&chat_request()).await.unwrap_err();
        assert!(matches!(err, TryOnError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_internal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).call(&chat_request()).await.unwrap_err();
        assert!(matches!(err, TryOnError::Internal { .. }));
    }
}
