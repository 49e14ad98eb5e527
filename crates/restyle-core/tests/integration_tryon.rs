#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use restyle_core::{run_try_on, UpstreamClient};
use restyle_types::{TryOnError, TryOnRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn inline_image_body() -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "content_parts": [
                    {"text": "generated"},
                    {"inline_data": {"mime_type": "image/jpeg", "data": "Rk9PQkFS"}}
                ]
            }
        }]
    })
}

fn style_request() -> TryOnRequest {
    TryOnRequest {
        image: "data:image/png;base64,QUJD".to_string(),
        style: Some("elegant".to_string()),
        ..Default::default()
    }
}

fn client_for(server: &MockServer) -> UpstreamClient {
    UpstreamClient::new(
        reqwest::Client::new(),
        Some(format!("{}/v1/chat/completions", server.uri())),
        None,
    )
}

#[tokio::test]
async fn test_try_on_flow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(inline_image_body()))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let result = run_try_on(&client, &style_request()).await;
        let success = result.expect("200 scenario: expected a canonical image");
        assert_eq!(success.image, "data:image/jpeg;base64,Rk9PQkFS");
        assert_eq!(success.style.as_deref(), Some("elegant"));
    }

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"code": 429, "message": "Resource exhausted"}
            })))
            .mount_as_scoped(&server)
            .await;

        let result = run_try_on(&client, &style_request()).await;
        assert_eq!(result.expect_err("429 scenario"), TryOnError::RateLimited);
    }

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(402).set_body_string("payment required"))
            .mount_as_scoped(&server)
            .await;

        let result = run_try_on(&client, &style_request()).await;
        assert_eq!(result.expect_err("402 scenario"), TryOnError::QuotaExhausted);
    }

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(serde_json::json!({"error": {"message": "overloaded"}})),
            )
            .mount_as_scoped(&server)
            .await;

        let result = run_try_on(&client, &style_request()).await;
        match result.expect_err("503 scenario") {
            TryOnError::Upstream { message } => assert_eq!(message, "overloaded"),
            other => panic!("503 scenario: expected Upstream, got {:?}", other),
        }
    }
}
