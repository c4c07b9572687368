//! # API REST
//!
//! REST API implementation for the Users service.
//!
//! Handles:
//! - HTTP endpoints with axum (`/api/users` CRUD and `/health`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS, the panic boundary)
//!
//! Uses `users-core` for the record store and `api-shared` for wire types.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod response;
pub mod users;

use axum::{response::Json, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ErrorRes, HealthRes, HealthService, UserReq, UserRes};
use users_core::UserStore;

pub use config::RestConfig;
pub use error::ApiError;

/// Application state shared across REST API handlers.
///
/// Holds the one `UserStore` every request reads and mutates.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(HealthRes, UserReq, UserRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the full application router.
///
/// Routes:
/// - `GET /health`
/// - `POST /api/users`, `GET /api/users` (also with a trailing slash)
/// - `GET /api/users/{id}`, `PUT /api/users/{id}`, `DELETE /api/users/{id}`
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
///
/// Any other path answers 404 and an unsupported method on a user path answers 405, both with a
/// JSON error body.
pub fn router(state: AppState) -> Router {
    let collection = get(users::list_users)
        .post(users::create_user)
        .fallback(method_not_allowed);
    let item = get(users::get_user)
        .put(users::update_user)
        .delete(users::delete_user)
        .fallback(method_not_allowed);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/users", collection.clone())
        .route("/api/users/", collection)
        .route("/api/users/:id", item)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .with_state(state);

    with_fault_boundary(app)
}

/// Wraps every route currently on `router` so that a panic inside a handler becomes a 500
/// response with the generic JSON error body, and adds the permissive CORS layer.
///
/// Layers only apply to routes added before this call.
pub fn with_fault_boundary(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(response::handle_panic))
        .layer(CorsLayer::permissive())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_alive() {
        let (status, body) = send(router(AppState::default()), "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"ok": true, "message": "Users API is alive"})
        );
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (status, body) = send(router(AppState::default()), "GET", "/api/nothing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_user_routes() {
        let (status, body) = send(
            router(AppState::default()),
            "GET",
            "/api-docs/openapi.json",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let paths = body.get("paths").and_then(|p| p.as_object()).unwrap();
        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/{id}"));
        assert!(paths.contains_key("/health"));
    }

    async fn boom() -> &'static str {
        panic!("handler blew up")
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_generic_500() {
        let app = with_fault_boundary(Router::new().route("/boom", get(boom)));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Internal server error"}"#);

        // The router keeps serving after a panic.
        let (status, _) = send(app, "GET", "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
