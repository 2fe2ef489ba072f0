//! HTTP routes for signal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    adjust_traffic, emergency_vehicle, incident_detected, simulate_emergency, simulate_incident,
    simulate_traffic,
};

/// Creates the signal router.
///
/// Routes:
/// - `GET /simulate_traffic/:length` - Timing for a queue length in km
/// - `GET /simulate_emergency/:vehicle` - Preemption advisory
/// - `GET /simulate_incident/:incident` - Incident advisory
/// - `POST /traffic` - Adjust timing from `{"traffic_length": ...}`
/// - `POST /emergency` - Preempt from `{"vehicle_type": ...}`
/// - `POST /incident` - Handle `{"incident_type"?, "location"?}`
pub fn signal_routes() -> Router {
    Router::new()
        .route("/simulate_traffic/:length", get(simulate_traffic))
        .route("/simulate_emergency/:vehicle", get(simulate_emergency))
        .route("/simulate_incident/:incident", get(simulate_incident))
        .route("/traffic", post(adjust_traffic))
        .route("/emergency", post(emergency_vehicle))
        .route("/incident", post(incident_detected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn simulate_traffic_heavy() {
        let response = signal_routes()
            .oneshot(
                Request::builder()
                    .uri("/simulate_traffic/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"traffic_length_km": 2.0, "red_light_seconds": 30})
        );
    }

    #[tokio::test]
    async fn simulate_incident_returns_fixed_advisory() {
        let response = signal_routes()
            .oneshot(
                Request::builder()
                    .uri("/simulate_incident/Accident")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"incident": "Accident", "action": "Authorities alerted", "severity": "MEDIUM"})
        );
    }

    #[tokio::test]
    async fn emergency_requires_vehicle_type() {
        let response = signal_routes()
            .oneshot(post_json("/emergency", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn incident_accepts_empty_object() {
        let response = signal_routes()
            .oneshot(post_json("/incident", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["incident"], Value::Null);
        assert_eq!(body["location"], Value::Null);
        assert_eq!(body["status"], "HANDLED");
    }

    #[tokio::test]
    async fn traffic_rejects_wrong_method() {
        let response = signal_routes()
            .oneshot(Request::builder().uri("/traffic").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
