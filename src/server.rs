//! HTTP surface used by the site's front end.
//!
//! - `POST /api/render` renders a catalog message, substituting the caller's
//!   params. Param values are arbitrary JSON and come back untouched in the
//!   segment list, so the client can turn them into links or styled spans.
//! - `GET /api/command?q=...` resolves a command-palette entry.
//! - `GET /health` is a liveness probe.

use crate::config::Config;
use crate::error::ApiError;
use crate::i18n::{interpolate, Catalog, Language, Segment};
use crate::palette::CommandPalette;
use crate::preferences::{parse_cookie_header, Preferences};
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared, read-only state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/render", post(render_message))
        .route("/api/command", get(run_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub key: String,

    /// Explicit language; overrides cookies and `Accept-Language`.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub params: HashMap<String, Value>,
}

#[derive(Debug, Serialize)]
struct RenderResponse<'a> {
    language: Language,
    key: &'a str,
    segments: Vec<Segment<'a, Value>>,
}

/// Preferences from the request's `Cookie` and `Accept-Language` headers.
pub fn request_preferences(headers: &HeaderMap, fallback: Preferences) -> Preferences {
    let stored = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(parse_cookie_header)
        .unwrap_or_default();

    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    Preferences::resolve(&stored, accept_language, fallback)
}

pub async fn render_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<RenderRequest>,
) -> Result<Response, ApiError> {
    let language = match request.language.as_deref() {
        Some(code) => {
            Language::from_code(code).map_err(|_| ApiError::UnknownLanguage(code.to_string()))?
        }
        None => request_preferences(&headers, state.config.default_preferences()).language,
    };

    let template = Catalog::for_language(language)
        .lookup(&request.key)
        .ok_or_else(|| ApiError::UnknownKey(request.key.clone()))?;

    debug!(
        language = %language,
        key = %request.key,
        params = request.params.len(),
        "Rendering message"
    );

    let response = RenderResponse {
        language,
        key: &request.key,
        segments: interpolate(template, &request.params),
    };

    Ok(Json(response).into_response())
}

#[derive(Debug, Deserialize)]
pub struct CommandQuery {
    pub q: String,
}

pub async fn run_command(Query(query): Query<CommandQuery>) -> Result<Json<Value>, ApiError> {
    let action =
        CommandPalette::dispatch(&query.q).ok_or_else(|| ApiError::UnknownCommand(query.q.clone()))?;

    debug!(command = %query.q, ?action, "Dispatched palette command");

    Ok(Json(json!({ "command": query.q, "action": action })))
}
