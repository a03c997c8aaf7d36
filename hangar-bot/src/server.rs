use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tracing::{error, warn};

use hangar_commands::{event::InteractionEvent, handle_interaction};
use hangar_core::{BotError, Context};
use hangar_utils::signature::{RequestVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Path Discord posts interactions to.
pub const INTERACTIONS_PATH: &str = "/interactions";

/// Axum state for the interactions endpoint.
#[derive(Clone)]
pub struct AppState {
    ctx: Context,
    verifier: Arc<RequestVerifier>,
}

impl AppState {
    pub fn new(ctx: Context, verifier: RequestVerifier) -> Self {
        Self {
            ctx,
            verifier: Arc::new(verifier),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(INTERACTIONS_PATH, post(handle_interactions))
        .with_state(state)
}

/// Verify, parse and route one interaction.
///
/// The signature is checked against the raw body before anything else runs.
pub async fn handle_interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(err) = state.verifier.verify(
        header(&headers, SIGNATURE_HEADER),
        header(&headers, TIMESTAMP_HEADER),
        &body,
    ) {
        return error_response(BotError::from(err));
    }

    let event: InteractionEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(err) => {
            warn!(error = %err, "failed to parse interaction body");
            return (StatusCode::BAD_REQUEST, "Malformed interaction body").into_response();
        }
    };

    match handle_interaction(&state.ctx, &event).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(err),
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn error_response(err: BotError) -> Response {
    match err {
        BotError::AuthenticationFailure(source) => {
            warn!(%source, "rejecting interaction with bad signature");
            (StatusCode::UNAUTHORIZED, "Bad request signature").into_response()
        }
        BotError::UnrecognizedCommand(name) => {
            error!("unknown command {name}");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "unknown command" })),
            )
                .into_response()
        }
        other => {
            error!(error = %other, "interaction failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}
