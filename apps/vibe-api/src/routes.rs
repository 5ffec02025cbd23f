use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use vibe_service::{ServiceError, TextResponse};

use crate::state::{AppState, CorsOrigins};

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs))
        .route("/api/health", get(health))
        .route("/api/random", get(random))
        .route("/api/list/next", get(next))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allow_origin = match &state.cors_origins {
        CorsOrigins::Any => AllowOrigin::mirror_request(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
    docs: &'static str,
    health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: Option<&'static str>,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Vibe Code API",
        docs: "/docs",
        health: "/api/health",
    })
}

async fn docs() -> Json<Value> {
    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Vibe Code API",
            "description": "Backend API for automation testing demo",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/": { "get": operation("Root", "Service entry points.", "RootResponse") },
            "/api/health": { "get": operation("Health", "Service liveness.", "HealthResponse") },
            "/api/random": {
                "get": operation("Responses", "A randomly selected response.", "TextResponse"),
            },
            "/api/list/next": {
                "get": operation("Responses", "The next response in rotation.", "TextResponse"),
            },
        },
        "components": {
            "schemas": {
                "RootResponse": object_schema(&["message", "docs", "health"], &[]),
                "HealthResponse": object_schema(&["status"], &["message"]),
                "TextResponse": object_schema(&["text"], &[]),
                "ErrorResponse": object_schema(&["detail"], &[]),
            },
        },
    }))
}

fn operation(tag: &str, summary: &str, schema: &str) -> Value {
    json!({
        "tags": [tag],
        "summary": summary,
        "responses": {
            "200": {
                "description": "OK",
                "content": {
                    "application/json": {
                        "schema": { "$ref": format!("#/components/schemas/{schema}") },
                    },
                },
            },
            "500": {
                "description": "Storage failure",
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" },
                    },
                },
            },
        },
    })
}

fn object_schema(required: &[&str], optional: &[&str]) -> Value {
    let properties = required
        .iter()
        .chain(optional)
        .map(|name| (name.to_string(), json!({ "type": "string" })))
        .collect::<serde_json::Map<_, _>>();

    json!({ "type": "object", "required": required, "properties": properties })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", message: Some("API is running") })
}

async fn random(State(state): State<AppState>) -> Result<Json<TextResponse>, ApiError> {
    let response = state
        .service
        .random()
        .await
        .map_err(|err| ApiError::from_service("Failed to fetch random response", err))?;
    Ok(Json(response))
}

async fn next(State(state): State<AppState>) -> Result<Json<TextResponse>, ApiError> {
    let response = state
        .service
        .next()
        .await
        .map_err(|err| ApiError::from_service("Failed to fetch next response", err))?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    fn from_service(context: &str, err: ServiceError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, detail = %self.detail, "Request failed.");
        let body = ErrorBody { detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}
