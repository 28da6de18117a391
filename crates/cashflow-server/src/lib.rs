//! Cash Flow Report API server
//!
//! Axum-based REST API fronting the record store and chat backend.
//!
//! The store and chat collaborators are selected once at startup from the
//! deployment mode and injected into the router state; request handlers
//! never branch on environment state. Every handler failure is caught at
//! the route boundary, logged with its request parameters, and returned as
//! a uniform `{"detail": ...}` server error.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use cashflow_core::{ChatBackend, ChatClient, DeploymentMode, RecordProvider, SecretStore};

mod handlers;

/// Shared application state
pub struct AppState {
    pub provider: RecordProvider,
    pub chat: ChatClient,
    pub mode: DeploymentMode,
}

/// Build the store and chat collaborators for a deployment mode
///
/// Local mode needs no secrets; production resolves the store endpoint,
/// store key, and model API key through the secret store. Construction
/// happens once here, not per request.
pub fn build_collaborators(
    mode: DeploymentMode,
    secrets: &SecretStore,
) -> anyhow::Result<(RecordProvider, ChatClient)> {
    match mode {
        DeploymentMode::Local => Ok((RecordProvider::mock(), ChatClient::canned())),
        DeploymentMode::Production => {
            let store_endpoint = secrets.get("COSMOS_ENDPOINT")?;
            let store_key = secrets.get("COSMOS_KEY")?;
            let model_key = secrets.get("OPENAI_API_KEY")?;
            Ok((
                RecordProvider::remote(&store_endpoint, Some(store_key)),
                ChatClient::openai(&model_key),
            ))
        }
    }
}

/// Create the application router
pub fn create_router(provider: RecordProvider, chat: ChatClient, mode: DeploymentMode) -> Router {
    info!(
        mode = %mode,
        store = %cashflow_core::RecordStore::describe(&provider),
        model = %chat.model(),
        "Configuring router"
    );

    let state = Arc::new(AppState {
        provider,
        chat,
        mode,
    });

    // Development posture: any origin may call the API. A production
    // deployment must restrict this to known origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::get_status))
        .route("/api/reports", post(handlers::generate_report))
        .route("/api/chat", post(handlers::chat))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    mode: DeploymentMode,
    secrets: &SecretStore,
) -> anyhow::Result<()> {
    let (provider, chat) = build_collaborators(mode, secrets)?;
    let app = create_router(provider, chat, mode);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
///
/// Serializes as `{"detail": <text>}` on the wire. The text is the
/// failure's description, never a stack trace.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<cashflow_core::Error> for AppError {
    fn from(err: cashflow_core::Error) -> Self {
        error!(error = %err, "Request failed");
        Self::internal(&err.to_string())
    }
}

#[cfg(test)]
mod tests;
