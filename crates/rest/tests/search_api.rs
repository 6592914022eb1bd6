//! Search API integration tests.
//!
//! Exercises the full HTTP surface against a stub store:
//! - HTTP status codes (200, 400, 500)
//! - Validation reasons for every rejected input
//! - Result shaping (all record fields, empty arrays)
//! - The fixed row cap on every statement shape
//! - Opaque 500 bodies that never leak store detail

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use parking_lot::Mutex;
use serde_json::Value;

use probdex_rest::{AppState, ServerConfig};
use probdex_store::error::{StoreError, StoreResult};
use probdex_store::record::ProblemRecord;
use probdex_store::router::Statement;
use probdex_store::ProblemStore;

/// A stub store that returns canned records and captures every statement
/// it is asked to execute.
struct StubStore {
    records: Vec<ProblemRecord>,
    fail: bool,
    statements: Arc<Mutex<Vec<Statement>>>,
}

impl StubStore {
    fn with_records(records: Vec<ProblemRecord>) -> Self {
        Self {
            records,
            fail: false,
            statements: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
            statements: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn statements_handle(&self) -> Arc<Mutex<Vec<Statement>>> {
        Arc::clone(&self.statements)
    }
}

#[async_trait]
impl ProblemStore for StubStore {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn search(&self, statement: &Statement) -> StoreResult<Vec<ProblemRecord>> {
        self.statements.lock().push(statement.clone());
        if self.fail {
            return Err(StoreError::QueryFailed {
                message: "connection reset by peer (secret internal detail)".to_string(),
            });
        }
        Ok(self.records.clone())
    }

    async fn ping(&self) -> StoreResult<()> {
        if self.fail {
            return Err(StoreError::ConnectionFailed {
                message: "pool exhausted".to_string(),
            });
        }
        Ok(())
    }
}

fn create_test_server(store: StubStore) -> TestServer {
    let state = AppState::new(Arc::new(store), ServerConfig::for_testing());
    let app = probdex_rest::routing::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

fn two_sum() -> ProblemRecord {
    ProblemRecord {
        unified_id: 1,
        lc_id: Some(1),
        lint_id: Some(56),
        lc_title: Some("Two Sum".to_string()),
        lint_title: Some("Two Sum".to_string()),
        lc_url: Some("https://leetcode.com/problems/two-sum/".to_string()),
        lint_url: Some("https://www.lintcode.com/problem/56/".to_string()),
        lc_difficulty: Some("Easy".to_string()),
        lint_difficulty: Some("Easy".to_string()),
        lc_tags: Some("array,hash-table".to_string()),
        grind75: true,
        blind75: true,
        neetcode150: true,
    }
}

/// A record that only exists on one source site.
fn lint_only() -> ProblemRecord {
    ProblemRecord {
        unified_id: 2,
        lc_id: None,
        lint_id: Some(200),
        lc_title: None,
        lint_title: Some("Longest Palindromic Substring".to_string()),
        lc_url: None,
        lint_url: Some("https://www.lintcode.com/problem/200/".to_string()),
        lc_difficulty: None,
        lint_difficulty: Some("Medium".to_string()),
        lc_tags: None,
        grind75: false,
        blind75: false,
        neetcode150: false,
    }
}

// =============================================================================
// Success responses
// =============================================================================

mod success {
    use super::*;

    #[tokio::test]
    async fn test_search_returns_matching_record() {
        let server = create_test_server(StubStore::with_records(vec![two_sum()]));

        let response = server
            .get("/search")
            .add_query_param("query", "Two Sum")
            .add_query_param("source", "lc_title")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let records = body.as_array().expect("body must be a JSON array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["lc_title"], "Two Sum");
    }

    #[tokio::test]
    async fn test_search_returns_all_record_fields() {
        let server =
            create_test_server(StubStore::with_records(vec![two_sum(), lint_only()]));

        let response = server
            .get("/search")
            .add_query_param("query", "sum")
            .add_query_param("source", "all_sources")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);

        let fields = [
            "unified_id",
            "lc_id",
            "lint_id",
            "lc_title",
            "lint_title",
            "lc_url",
            "lint_url",
            "lc_difficulty",
            "lint_difficulty",
            "lc_tags",
            "grind75",
            "blind75",
            "neetcode150",
        ];
        for record in records {
            let object = record.as_object().unwrap();
            for field in fields {
                assert!(object.contains_key(field), "missing field {field}");
            }
        }

        // Absent sides serialize as null, booleans stay booleans.
        assert_eq!(records[1]["lc_id"], Value::Null);
        assert_eq!(records[1]["grind75"], Value::Bool(false));
    }

    #[tokio::test]
    async fn test_id_search_on_empty_store_returns_empty_array() {
        let server = create_test_server(StubStore::empty());

        let response = server
            .get("/search")
            .add_query_param("query", "99999")
            .add_query_param("source", "lc_id")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, serde_json::json!([]));
    }
}

// =============================================================================
// Validation failures (400)
// =============================================================================

mod validation {
    use super::*;

    async fn assert_bad_request(server: &TestServer, url_query: &[(&str, &str)], reason: &str) {
        let mut request = server.get("/search");
        for (key, value) in url_query.iter().copied() {
            request = request.add_query_param(key, value);
        }
        let response = request.await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], *reason);
    }

    #[tokio::test]
    async fn test_missing_query_rejected() {
        let server = create_test_server(StubStore::empty());
        assert_bad_request(
            &server,
            &[("source", "lc_title")],
            "The \"query\" and \"source\" parameters are required.",
        )
        .await;
    }

    #[tokio::test]
    async fn test_whitespace_query_rejected() {
        let server = create_test_server(StubStore::empty());
        assert_bad_request(
            &server,
            &[("query", "   "), ("source", "lc_title")],
            "The \"query\" and \"source\" parameters are required.",
        )
        .await;
    }

    #[tokio::test]
    async fn test_missing_source_rejected() {
        let server = create_test_server(StubStore::empty());
        assert_bad_request(
            &server,
            &[("query", "two sum")],
            "The \"query\" and \"source\" parameters are required.",
        )
        .await;
    }

    #[tokio::test]
    async fn test_invalid_source_rejected() {
        let server = create_test_server(StubStore::empty());
        assert_bad_request(
            &server,
            &[("query", "two sum"), ("source", "bogus")],
            "Invalid source specified.",
        )
        .await;
    }

    #[tokio::test]
    async fn test_non_numeric_id_rejected() {
        let server = create_test_server(StubStore::empty());
        for source in ["lc_id", "lint_id"] {
            assert_bad_request(
                &server,
                &[("query", "abc"), ("source", source)],
                "ID must be a number.",
            )
            .await;
        }
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_store() {
        let store = StubStore::empty();
        let statements = store.statements_handle();
        let server = create_test_server(store);

        server
            .get("/search")
            .add_query_param("query", "abc")
            .add_query_param("source", "lc_id")
            .await;
        server
            .get("/search")
            .add_query_param("query", "x")
            .add_query_param("source", "bogus")
            .await;

        assert!(statements.lock().is_empty());
    }
}

// =============================================================================
// Store failures (500)
// =============================================================================

mod store_failures {
    use super::*;

    #[tokio::test]
    async fn test_store_failure_is_opaque_500() {
        let server = create_test_server(StubStore::failing());

        let response = server
            .get("/search")
            .add_query_param("query", "two sum")
            .add_query_param("source", "lc_title")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(
            body,
            serde_json::json!({"error": "An internal server error occurred."})
        );
    }

    #[tokio::test]
    async fn test_store_failure_never_leaks_detail() {
        let server = create_test_server(StubStore::failing());

        let response = server
            .get("/search")
            .add_query_param("query", "42")
            .add_query_param("source", "lint_id")
            .await;

        let text = response.text();
        assert!(!text.contains("secret"));
        assert!(!text.contains("connection reset"));
    }
}

// =============================================================================
// Statement shaping
// =============================================================================

mod statements {
    use super::*;

    #[tokio::test]
    async fn test_every_mode_caps_rows_at_twenty() {
        let store = StubStore::empty();
        let statements = store.statements_handle();
        let server = create_test_server(store);

        let cases = [
            ("42", "lc_id"),
            ("42", "lint_id"),
            ("sum", "lc_title"),
            ("sum", "lint_title"),
            ("sum", "grind75"),
            ("sum", "blind75"),
            ("sum", "neetcode150"),
            ("sum", "all_sources"),
        ];
        for (query, source) in cases {
            let response = server
                .get("/search")
                .add_query_param("query", query)
                .add_query_param("source", source)
                .await;
            response.assert_status(StatusCode::OK);
        }

        let captured = statements.lock();
        assert_eq!(captured.len(), cases.len());
        for statement in captured.iter() {
            assert!(statement.sql.ends_with("LIMIT 20"), "{}", statement.sql);
        }
    }

    #[tokio::test]
    async fn test_query_text_travels_only_through_parameters() {
        let store = StubStore::empty();
        let statements = store.statements_handle();
        let server = create_test_server(store);

        server
            .get("/search")
            .add_query_param("query", "Two Sum")
            .add_query_param("source", "lc_title")
            .await;

        let captured = statements.lock();
        assert_eq!(captured.len(), 1);
        assert!(!captured[0].sql.contains("Two Sum"));
        assert_eq!(captured[0].params.len(), 1);
    }
}

// =============================================================================
// Operational probes
// =============================================================================

mod probes {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_backend() {
        let server = create_test_server(StubStore::empty());

        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "stub");
    }

    #[tokio::test]
    async fn test_liveness_is_unconditional() {
        let server = create_test_server(StubStore::failing());
        let response = server.get("/_liveness").await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_pings_store() {
        let server = create_test_server(StubStore::empty());
        let response = server.get("/_readiness").await;
        response.assert_status(StatusCode::OK);

        let server = create_test_server(StubStore::failing());
        let response = server.get("/_readiness").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
