//! Webhook fulfillment: envelope in, response envelope out
//!
//! Dispatches on the request's action. Only `game.narrate` reaches the
//! narration core; the other actions answer with fixed text.

pub mod envelope;
pub mod response;

pub use envelope::{ApiVersion, Context, WebhookRequest, parse_envelope};
pub use response::{Reply, WebhookResponse};

use serde_json::Value;

use crate::config::FulfillmentConfig;
use crate::error::FulfillmentError;
use crate::render::render;
use crate::script::build;
use crate::types::{NarrationRequest, RenderMode};

pub const ACTION_NARRATE: &str = "game.narrate";
pub const ACTION_UNKNOWN_INPUT: &str = "input.unknown";

pub const FALLBACK_MESSAGE: &str = "I'm having trouble, can you try that again?";
pub const DEFAULT_MESSAGE: &str = "This is the default response";
pub const DEFAULT_VOICE_MESSAGE: &str = "This is the default Google response";

/// Run a raw webhook body through parsing, dispatch and response building
pub fn fulfill(
    body: &Value,
    config: &FulfillmentConfig,
) -> Result<WebhookResponse, FulfillmentError> {
    log::debug!("webhook request body: {}", body);
    let request = parse_envelope(body)?;
    let response = respond(&request, config);
    log::debug!(
        "webhook response: {}",
        serde_json::to_string(&response).unwrap_or_default()
    );
    Ok(response)
}

/// Answer an already parsed request
pub fn respond(request: &WebhookRequest, config: &FulfillmentConfig) -> WebhookResponse {
    log::info!(
        "handling action '{}' ({:?}, source {:?})",
        request.action,
        request.version,
        request.source
    );
    let from_voice = request.source.as_deref() == Some(config.voice_source.as_str());

    let reply = match request.action.as_str() {
        ACTION_UNKNOWN_INPUT => Reply::text(FALLBACK_MESSAGE),
        ACTION_NARRATE => narrate(request, config),
        _ if from_voice => Reply::text(DEFAULT_VOICE_MESSAGE),
        _ => Reply::text(DEFAULT_MESSAGE),
    };
    reply.into_response(request.version)
}

fn narrate(request: &WebhookRequest, config: &FulfillmentConfig) -> Reply {
    let params = request.game_parameters();
    let narration = NarrationRequest::from_parameters(params, config.default_players);
    let mode = RenderMode::for_source(request.source.as_deref(), &config.voice_source);

    let speech = render(&build(&narration), mode);

    let title = params.get("game").and_then(Value::as_str).unwrap_or("");
    Reply::with_display(speech, format!("Narrating a game of {}", title))
}
