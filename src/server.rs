//! Axum HTTP endpoint for webhook fulfillment.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;

use crate::config::{Config, FulfillmentConfig};
use crate::error::FulfillmentError;
use crate::webhook::fulfill;

/// HTTP server wrapping the webhook dispatcher.
pub struct NarratorServer {
    config: Config,
}

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub fulfillment: Arc<FulfillmentConfig>,
}

impl NarratorServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the router; exposed so tests and embedders can mount it.
    pub fn router(fulfillment: FulfillmentConfig) -> Router {
        let state = AppState {
            fulfillment: Arc::new(fulfillment),
        };
        Router::new()
            .route("/", post(webhook_handler))
            .route("/webhook", post(webhook_handler))
            .route("/health", get(health_handler))
            .with_state(state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = self.config.bind_address();
        let app = Self::router(self.config.fulfillment);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        log::info!("Narrator webhook listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Webhook endpoint: platform request body in, response envelope out.
pub async fn webhook_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match fulfill(&body, &state.fulfillment) {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: FulfillmentError) -> Response {
    match err {
        FulfillmentError::InvalidRequest { reason } => {
            log::warn!("rejecting webhook request: {}", reason);
            (StatusCode::BAD_REQUEST, reason).into_response()
        }
        err if err.is_client_error() => {
            log::warn!("rejecting webhook request: {}", err);
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        err => {
            log::error!("webhook fulfillment failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
