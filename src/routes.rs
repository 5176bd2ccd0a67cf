use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Log ingestion
        .route("/log", post(LogController::ingest))
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state;
    use crate::core::client::mongo_client::{COLLECTION_NAME, DATABASE_NAME};
    use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    // Client creation is lazy, so pointing at a closed port gives a
    // state whose inserts fail fast without a running MongoDB.
    async fn unreachable_state() -> AppState {
        let client = mongodb::Client::with_uri_str(
            "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200&directConnection=true",
        )
        .await
        .unwrap();
        let collection = client
            .database(DATABASE_NAME)
            .collection(COLLECTION_NAME);
        build_app_state(LogRepositoryImpl::new(collection))
    }

    fn post_log(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/log")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let app = app_router().with_state(unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = app_router().with_state(unreachable_state().await);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_400_with_error_field() {
        let app = app_router().with_state(unreachable_state().await);

        let response = app.oneshot(post_log("{\"timestamp\": \"tru")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").and_then(|v| v.as_str()).is_some());
    }

    #[tokio::test]
    async fn wrong_field_type_is_400_with_error_field() {
        let app = app_router().with_state(unreachable_state().await);
        let payload = json!({
            "timestamp": 123,
            "issuer": "svc-a",
            "level": "INFO",
            "type": "x",
            "data": {}
        });

        let response = app.oneshot(post_log(&payload.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").and_then(|v| v.as_str()).is_some());
    }

    #[tokio::test]
    async fn store_error_is_500_with_fixed_message() {
        let app = app_router().with_state(unreachable_state().await);
        let payload = json!({
            "timestamp": "2024-01-01T00:00:00Z",
            "issuer": "svc-a",
            "level": "INFO",
            "type": "startup",
            "data": { "pid": 123 }
        });

        let response = app.oneshot(post_log(&payload.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body.get("error").and_then(|v| v.as_str()),
            Some("Failed to insert log entry")
        );
    }
}
