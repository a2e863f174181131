//! In-process API tests over the full router, with the model mocked out.

mod common;

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use common::MockLLMClient;
use quill::AppState;
use quill::config::QuillConfig;
use quill::tools::{KnowledgeBaseTool, ToolRegistry, WebScrapeTool};

// ============= Test Helpers =============

fn create_test_server(llm: MockLLMClient) -> TestServer {
    let state = common::mock_state(llm);
    let app = quill::api::routes::create_router().with_state(state);
    TestServer::new(app).expect("Failed to create test server")
}

// ============= Health Check Tests =============

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server(MockLLMClient::new("unused"));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ============= Predict Tests =============

#[tokio::test]
async fn test_predict_returns_writer_output() {
    let server = create_test_server(MockLLMClient::scripted(&[
        "research summary",
        "the final answer",
    ]));

    let response = server
        .post("/predict")
        .json(&json!({"query": "What is CrewAI?"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["output"], "the final answer");
}

#[tokio::test]
async fn test_predict_missing_query_is_bad_request() {
    let server = create_test_server(MockLLMClient::new("unused"));

    let response = server.post("/predict").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().expect("error should be a string");
    assert!(message.contains("query"));
}

#[tokio::test]
async fn test_predict_blank_query_is_bad_request() {
    let server = create_test_server(MockLLMClient::new("unused"));

    let response = server
        .post("/predict")
        .json(&json!({"query": "   "}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_predict_ignores_unknown_fields() {
    let server = create_test_server(MockLLMClient::scripted(&["findings", "answer"]));

    let response = server
        .post("/predict")
        .json(&json!({"query": "hello", "session_id": "abc", "depth": 3}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["output"], "answer");
}

#[tokio::test]
async fn test_predict_model_failure_is_internal_error() {
    let server = create_test_server(MockLLMClient::failing());

    let response = server
        .post("/predict")
        .json(&json!({"query": "What is CrewAI?"}))
        .await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().expect("error should be a string");
    assert!(message.contains("Mock LLM failure"));
}

// ============= OpenAPI Tests =============

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let server = create_test_server(MockLLMClient::new("unused"));

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/predict"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
    assert!(body["components"]["schemas"]["PredictRequest"].is_object());
}

// ============= End-to-End Tests =============

/// Full request flow with the default tool set: the knowledge base answers,
/// the scrape tool has no credential and reports that into the transcript,
/// and the response is still the writer's answer rather than a tool error.
#[tokio::test]
async fn test_predict_with_default_tools_and_no_scrape_credential() {
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(WebScrapeTool::new(
        None,
        "FIRECRAWL_API_KEY".to_string(),
        "https://api.firecrawl.dev/v0/scrape".to_string(),
        30,
    )));
    tools.register(Arc::new(KnowledgeBaseTool::new()));

    let llm = MockLLMClient::scripted(&[
        "findings drawn from the knowledge base",
        "CrewAI is a framework for orchestrating autonomous agents.",
    ]);
    let state = AppState {
        config: Arc::new(QuillConfig::default()),
        pipeline: Arc::new(common::mock_pipeline_with_tools(llm, tools)),
    };
    let app = quill::api::routes::create_router().with_state(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    let response = server
        .post("/predict")
        .json(&json!({"query": "What is CrewAI?"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let output = body["output"].as_str().expect("output should be a string");
    assert_eq!(
        output,
        "CrewAI is a framework for orchestrating autonomous agents."
    );
    assert!(!output.contains("environment variable not set"));
}
