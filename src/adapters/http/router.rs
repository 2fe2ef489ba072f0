//! Application router and shared middleware stack.
//!
//! The router is built once at startup and holds no mutable state.
//!
//! ```text
//! Request → SetRequestId → Trace → PropagateRequestId → Cors → Compression
//!         → CatchPanic → Timeout → handler
//! ```

use std::any::Any;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;

use super::error::{ApiError, ErrorResponse};
use super::pages::page_routes;
use super::signal::signal_routes;

/// Builds the full application: pages, signal endpoints, JSON 404 fallback
/// and the middleware stack.
pub fn app_router(config: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(page_routes())
        .merge(signal_routes())
        .fallback(route_not_found);

    with_middleware(routes, config)
}

/// Applies the shared middleware stack to any router.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    let router = router.layer(
        ServiceBuilder::new()
            .layer(CompressionLayer::new())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::new(config.request_timeout())),
    );

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("-");
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

/// CORS policy.
///
/// Explicit origins always win. Without them, development allows any origin
/// and production sends no CORS headers at all.
fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        if config.is_production() {
            return None;
        }
        return Some(CorsLayer::permissive());
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use axum::body::{to_bytes, Body};
    use axum::routing::get;
    use tower::ServiceExt;

    fn get_request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let app = app_router(&ServerConfig::default());
        let response = app.oneshot(get_request("/nowhere")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app_router(&ServerConfig::default());
        let response = app.oneshot(get_request("/test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let app = app_router(&ServerConfig::default());
        let request = Request::builder()
            .uri("/test")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn panicking_handler_becomes_500() {
        async fn explode() -> &'static str {
            panic!("boom")
        }
        let app = with_middleware(
            Router::new().route("/explode", get(explode)),
            &ServerConfig::default(),
        );

        let response = app.oneshot(get_request("/explode")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let app = app_router(&ServerConfig::default());
        let request = Request::builder()
            .uri("/simulate_traffic/2")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn production_without_origins_sends_no_cors_headers() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        let app = app_router(&config);
        let request = Request::builder()
            .uri("/simulate_traffic/2")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = app_router(&config);
        let request = Request::builder()
            .uri("/simulate_traffic/2")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
