//! Sad path tests for error handling and partial failure.
//!
//! Tests unmappable routes, upstream failures, malformed bodies and the
//! content scan's tolerance of individual route failures.

mod common;

use common::{TestEnv, CONTENTS_PREFIX, RAW_PREFIX};
use layerchart_docs_mcp::tools::*;
use layerchart_docs_mcp::types::Relevance;
use layerchart_docs_mcp::{DocsConfig, DocsError, DocsService, SearchStrategy, SourceVariant};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn source_input(route: &str, variant: SourceVariant) -> SourceInput {
    SourceInput {
        route: route.to_string(),
        variant,
    }
}

// ============================================================================
// Unmappable routes
// ============================================================================

#[tokio::test]
async fn test_source_implementation_for_non_component_route() {
    let env = TestEnv::new().await;

    let err = execute_source(
        &env.service(),
        source_input("/docs/examples/Area", SourceVariant::Implementation),
    )
    .await
    .unwrap_err();

    assert_eq!(err.code(), "UNMAPPABLE_ROUTE");
    let payload = err.payload();
    assert_eq!(payload.route.as_deref(), Some("/docs/examples/Area"));
    assert_eq!(payload.variant, Some(SourceVariant::Implementation));

    // No request was issued
    assert!(env.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_doc_for_relative_route_is_unmappable() {
    let env = TestEnv::new().await;

    let err = execute_doc(
        &env.service(),
        DocInput {
            route: "docs/components/BarChart".to_string(),
            include_rendered: false,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, DocsError::UnmappableRoute { .. }));
}

// ============================================================================
// Upstream status handling
// ============================================================================

#[tokio::test]
async fn test_source_not_found() {
    let env = TestEnv::new().await;
    // Nothing mounted: the mock server answers 404

    let err = execute_source(
        &env.service(),
        source_input("/docs/components/Missing", SourceVariant::Implementation),
    )
    .await
    .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.code(), "NOT_FOUND");
    let payload = err.payload();
    assert_eq!(payload.status, Some(404));
    assert_eq!(
        payload.url.as_deref(),
        Some(env.raw_url("src/lib/components/Missing.svelte").as_str())
    );
}

#[tokio::test]
async fn test_source_other_status_is_distinct_from_not_found() {
    let env = TestEnv::new().await;
    env.mount(
        &format!("{RAW_PREFIX}/src/lib/components/BarChart.svelte"),
        500,
        "internal",
    )
    .await;

    let err = execute_source(
        &env.service(),
        source_input("/docs/components/BarChart", SourceVariant::Implementation),
    )
    .await
    .unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(err.code(), "UPSTREAM_STATUS");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_source_network_failure() {
    // Nothing listens on port 1
    let mut config = DocsConfig::with_origin("http://127.0.0.1:1");
    config.timeout = Duration::from_secs(2);
    let service = DocsService::new(config).unwrap();

    let err = execute_source(
        &service,
        source_input("/docs/components/BarChart", SourceVariant::Usage),
    )
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NETWORK_ERROR");
    assert!(err.payload().details.is_some());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_doc_not_found() {
    let env = TestEnv::new().await;

    let err = execute_doc(
        &env.service(),
        DocInput {
            route: "/docs/components/Ghost".to_string(),
            include_rendered: true,
        },
    )
    .await
    .unwrap_err();

    assert!(err.is_not_found());
}

// ============================================================================
// Malformed bodies
// ============================================================================

#[tokio::test]
async fn test_list_rejects_non_array_listing() {
    let env = TestEnv::new().await;
    env.mount(
        &format!("{CONTENTS_PREFIX}/components"),
        200,
        r#"{"message":"This is a file, not a directory"}"#,
    )
    .await;

    let err = execute_list(&env.service()).await.unwrap_err();
    assert_eq!(err.code(), "DECODE_ERROR");
}

#[tokio::test]
async fn test_list_fails_when_one_subtree_fails() {
    let env = TestEnv::new().await;
    env.mount_listing("components", &[("BarChart", "dir")]).await;
    env.mount(&format!("{CONTENTS_PREFIX}/examples"), 502, "bad gateway")
        .await;

    let err = execute_list(&env.service()).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_code_search_malformed_body() {
    let env = TestEnv::new().await;
    env.mount("/search/code", 200, "<html>not json</html>").await;

    let err = code_search(&env.service(), "tooltip").await.unwrap_err();
    assert_eq!(err.code(), "DECODE_ERROR");
}

#[tokio::test]
async fn test_code_search_error_uses_api_message() {
    let env = TestEnv::new().await;
    Mock::given(method("GET"))
        .and(path("/search/code"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "API rate limit exceeded for 127.0.0.1.",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        })))
        .mount(&env.server)
        .await;

    let err = execute_search(
        &env.service(),
        SearchInput {
            query: "tooltip".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.code(), "UPSTREAM_STATUS");
    assert_eq!(err.status(), Some(403));
    assert!(err
        .payload()
        .details
        .unwrap()
        .contains("rate limit exceeded"));
}

#[tokio::test]
async fn test_code_search_error_without_json_uses_reason() {
    let env = TestEnv::new().await;
    env.mount("/search/code", 503, "").await;

    let err = code_search(&env.service(), "tooltip").await.unwrap_err();
    assert_eq!(err.payload().details.as_deref(), Some("Service Unavailable"));
}

// ============================================================================
// Input validation
// ============================================================================

#[tokio::test]
async fn test_search_blank_query_rejected_without_requests() {
    let env = TestEnv::new().await;

    let err = execute_search(
        &env.service(),
        SearchInput {
            query: "   ".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.code(), "INVALID_INPUT");
    assert!(env.server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Content scan partial failure
// ============================================================================

#[tokio::test]
async fn test_content_scan_survives_unreachable_route() {
    let env = TestEnv::new()
        .await
        .with_search_strategy(SearchStrategy::ContentScan);
    env.mount_listing(
        "components",
        &[("Axis", "dir"), ("Legend", "dir"), ("Points", "dir")],
    )
    .await;
    env.mount_listing("examples", &[]).await;
    env.mount_page("/docs/components/Axis", "<p>scale ticks</p>").await;
    env.mount(
        &format!("{RAW_PREFIX}/src/routes/docs/components/Legend/+page.svelte"),
        500,
        "scale",
    )
    .await;
    env.mount_page("/docs/components/Points", "<p>uses a scale</p>")
        .await;

    let out = execute_search(
        &env.service(),
        SearchInput {
            query: "Scale".to_string(),
        },
    )
    .await
    .unwrap();

    let SearchOutput::ContentScan(out) = out else {
        panic!("expected content-scan output");
    };
    let routes: Vec<_> = out.results.iter().map(|h| h.route.as_str()).collect();
    assert_eq!(routes, vec!["/docs/components/Axis", "/docs/components/Points"]);
    assert!(out.results.iter().all(|h| h.relevance == Relevance::Medium));
}

#[tokio::test]
async fn test_content_scan_all_routes_failing_yields_empty_result() {
    let env = TestEnv::new()
        .await
        .with_search_strategy(SearchStrategy::ContentScan);
    env.mount_listing("components", &[("Axis", "dir"), ("Legend", "dir")])
        .await;
    env.mount_listing("examples", &[("Area", "dir")]).await;
    // No page sources mounted: every fetch is a 404

    let out = content_scan(&env.service(), "gradient").await.unwrap();

    assert_eq!(out.routes_scanned, 3);
    assert_eq!(out.total_count, 0);
    assert!(out.results.is_empty());
}

#[tokio::test]
async fn test_content_scan_fails_when_enumeration_fails() {
    let env = TestEnv::new()
        .await
        .with_search_strategy(SearchStrategy::ContentScan);
    // No listings mounted

    let err = content_scan(&env.service(), "gradient").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_content_scan_treats_query_literally() {
    let env = TestEnv::new()
        .await
        .with_search_strategy(SearchStrategy::ContentScan);
    env.mount_listing("components", &[("Axis", "dir")]).await;
    env.mount_listing("examples", &[]).await;
    env.mount_page("/docs/components/Axis", "<p>width={w} (px)</p>")
        .await;

    let out = content_scan(&env.service(), "(px)").await.unwrap();
    assert_eq!(out.results.len(), 1);

    let out = content_scan(&env.service(), ".*").await.unwrap();
    assert!(out.results.is_empty());
}
