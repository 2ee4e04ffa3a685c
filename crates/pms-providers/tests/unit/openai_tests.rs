//! OpenAI embedding provider against a local mock server

use mockito::{Matcher, Server};
use pms_domain::error::Error;
use pms_domain::ports::providers::EmbeddingProvider;
use pms_providers::embedding::OpenAIEmbeddingProvider;
use serde_json::json;
use std::time::Duration;

fn provider(url: String, model: &str) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "test-key".to_string(),
        Some(url),
        model.to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

fn assert_provider_error(err: &Error, fragment: &str) {
    assert!(err.is_provider_error(), "expected provider error, got {err:?}");
    assert!(
        err.to_string().contains(fragment),
        "'{err}' should mention '{fragment}'"
    );
}

#[tokio::test]
async fn test_embed_sends_model_and_key() {
    let mut server = Server::new_async().await;
    let body = json!({
        "data": [{ "index": 0, "embedding": vec![0.25_f32; 1536] }]
    });
    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "text-embedding-3-small",
            "input": ["Frontend development projects"]
        })))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let embedding = provider(server.url(), "text-embedding-3-small")
        .embed("Frontend development projects")
        .await
        .expect("embedding should succeed");

    mock.assert_async().await;
    assert_eq!(embedding.dimensions, 1536);
    assert_eq!(embedding.model, "text-embedding-3-small");
    assert!(embedding.vector.iter().all(|v| *v == 0.25));
}

#[tokio::test]
async fn test_requested_dimensions_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_body(Matcher::PartialJson(json!({ "dimensions": 3 })))
        .with_status(200)
        .with_body(json!({ "data": [{ "index": 0, "embedding": [1.0, 2.0, 3.0] }] }).to_string())
        .create_async()
        .await;

    let embedding = provider(server.url(), "text-embedding-3-large")
        .with_dimensions(3)
        .embed("short")
        .await
        .expect("embedding should succeed");

    mock.assert_async().await;
    assert_eq!(embedding.vector, vec![1.0, 2.0, 3.0]);
}

#[tokio::test]
async fn test_batch_is_reordered_by_index() {
    let mut server = Server::new_async().await;
    let body = json!({
        "data": [
            { "index": 1, "embedding": [0.0, 1.0, 0.0] },
            { "index": 0, "embedding": [1.0, 0.0, 0.0] }
        ]
    });
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let embeddings = provider(server.url(), "text-embedding-3-small")
        .with_dimensions(3)
        .embed_batch(&["first".to_string(), "second".to_string()])
        .await
        .expect("batch should succeed");

    assert_eq!(embeddings[0].vector, vec![1.0, 0.0, 0.0]);
    assert_eq!(embeddings[1].vector, vec![0.0, 1.0, 0.0]);
}

#[tokio::test]
async fn test_status_codes_map_to_provider_errors() {
    let cases = [
        (401, "authentication failed"),
        (429, "rate limit exceeded"),
        (503, "server error (503)"),
        (400, "request failed (400)"),
    ];

    for (status, fragment) in cases {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(status)
            .with_body("{\"error\":\"nope\"}")
            .create_async()
            .await;

        let err = provider(server.url(), "text-embedding-3-small")
            .embed("anything")
            .await
            .expect_err("error status must fail");
        assert_provider_error(&err, fragment);
    }
}

#[tokio::test]
async fn test_wrong_vector_length_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(json!({ "data": [{ "index": 0, "embedding": [0.1, 0.2] }] }).to_string())
        .create_async()
        .await;

    let err = provider(server.url(), "text-embedding-3-small")
        .embed("anything")
        .await
        .expect_err("short vector must fail");
    assert_provider_error(&err, "malformed response");
}

#[tokio::test]
async fn test_missing_data_array_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body("{\"object\":\"list\"}")
        .create_async()
        .await;

    let err = provider(server.url(), "text-embedding-3-small")
        .embed("anything")
        .await
        .expect_err("missing data must fail");
    assert_provider_error(&err, "missing data array");
}

#[tokio::test]
async fn test_empty_batch_makes_no_request() {
    // No server: a request would fail to connect
    let embeddings = provider("http://127.0.0.1:9".to_string(), "text-embedding-3-small")
        .embed_batch(&[])
        .await
        .expect("empty batch should succeed");
    assert!(embeddings.is_empty());
}

#[tokio::test]
async fn test_request_timeout_maps_to_timeout_error() {
    // Accepts connections and never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let url = format!("http://{}", listener.local_addr().expect("addr"));
    let silent = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let provider = OpenAIEmbeddingProvider::new(
        "test-key".to_string(),
        Some(url),
        "text-embedding-3-small".to_string(),
        Duration::from_millis(200),
        reqwest::Client::new(),
    );
    let err = provider
        .embed("anything")
        .await
        .expect_err("silent server must time out");
    silent.abort();

    assert!(!err.is_provider_error());
    match err {
        Error::Timeout { operation, timeout } => {
            assert_eq!(operation, "OpenAI embedding request");
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}
