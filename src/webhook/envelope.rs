//! Webhook request envelopes
//!
//! The platform posts one of two shapes: the legacy v1 body (`result`) or the
//! current v2 body (`queryResult`). Both are reduced to [`WebhookRequest`].

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{FulfillmentError, INVALID_WEBHOOK_MESSAGE};

/// Which envelope format a request arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

/// An input context attached to the request
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Context {
    #[serde(default)]
    parameters: Option<Map<String, Value>>,
}

impl Context {
    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.parameters.as_ref()
    }
}

/// Version-independent view of a webhook request
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRequest {
    pub version: ApiVersion,
    pub action: String,
    pub parameters: Map<String, Value>,
    pub contexts: Vec<Context>,
    /// Originating channel, e.g. `google`
    pub source: Option<String>,
    pub session: Option<String>,
}

impl WebhookRequest {
    /// Parameters of the first input context, falling back to the top-level
    /// parameters when there is no context
    pub fn game_parameters(&self) -> &Map<String, Value> {
        self.contexts
            .first()
            .and_then(Context::parameters)
            .unwrap_or(&self.parameters)
    }
}

#[derive(Debug, Deserialize)]
struct OriginalRequest {
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct V1Body {
    result: V1Result,
    #[serde(rename = "originalRequest", default)]
    original_request: Option<OriginalRequest>,
}

#[derive(Debug, Deserialize)]
struct V1Result {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    parameters: Option<Map<String, Value>>,
    #[serde(default)]
    contexts: Option<Vec<Context>>,
}

#[derive(Debug, Deserialize)]
struct V2Body {
    #[serde(rename = "queryResult")]
    query_result: V2QueryResult,
    #[serde(rename = "originalDetectIntentRequest", default)]
    original_request: Option<OriginalRequest>,
    #[serde(default)]
    session: Option<String>,
}

#[derive(Debug, Deserialize)]
struct V2QueryResult {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    parameters: Option<Map<String, Value>>,
    #[serde(rename = "outputContexts", default)]
    output_contexts: Option<Vec<Context>>,
}

/// Detect the envelope version and extract the fields the dispatcher needs
pub fn parse_envelope(body: &Value) -> Result<WebhookRequest, FulfillmentError> {
    if has_field(body, "result") {
        let v1 = V1Body::deserialize(body)?;
        Ok(WebhookRequest {
            version: ApiVersion::V1,
            action: non_empty_action(v1.result.action),
            parameters: v1.result.parameters.unwrap_or_default(),
            contexts: v1.result.contexts.unwrap_or_default(),
            source: v1.original_request.and_then(|r| r.source),
            session: None,
        })
    } else if has_field(body, "queryResult") {
        let v2 = V2Body::deserialize(body)?;
        Ok(WebhookRequest {
            version: ApiVersion::V2,
            action: non_empty_action(v2.query_result.action),
            parameters: v2.query_result.parameters.unwrap_or_default(),
            contexts: v2.query_result.output_contexts.unwrap_or_default(),
            source: v2.original_request.and_then(|r| r.source),
            session: v2.session,
        })
    } else {
        Err(FulfillmentError::invalid_request(INVALID_WEBHOOK_MESSAGE))
    }
}

/// A key counts as present only when it holds a non-null value
fn has_field(body: &Value, key: &str) -> bool {
    body.get(key).is_some_and(|v| !v.is_null())
}

fn non_empty_action(action: Option<String>) -> String {
    action
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "default".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_v1_envelope() {
        let body = json!({
            "result": {
                "action": "game.narrate",
                "parameters": {"game": "Secret Hitler"},
                "contexts": [{"name": "game", "parameters": {"players": 7}, "lifespan": 5}]
            },
            "originalRequest": {"source": "google"}
        });
        let request = parse_envelope(&body).unwrap();
        assert_eq!(request.version, ApiVersion::V1);
        assert_eq!(request.action, "game.narrate");
        assert_eq!(request.source.as_deref(), Some("google"));
        assert_eq!(request.contexts.len(), 1);
        assert_eq!(request.game_parameters().get("players"), Some(&json!(7)));
    }

    #[test]
    fn parses_v2_envelope() {
        let body = json!({
            "session": "projects/p/agent/sessions/abc",
            "queryResult": {
                "action": "input.unknown",
                "parameters": {},
                "outputContexts": []
            }
        });
        let request = parse_envelope(&body).unwrap();
        assert_eq!(request.version, ApiVersion::V2);
        assert_eq!(request.action, "input.unknown");
        assert_eq!(request.source, None);
        assert_eq!(request.session.as_deref(), Some("projects/p/agent/sessions/abc"));
    }

    #[test]
    fn missing_action_becomes_default() {
        let request = parse_envelope(&json!({"queryResult": {}})).unwrap();
        assert_eq!(request.action, "default");
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn null_fields_are_tolerated() {
        let body = json!({
            "result": {"action": null, "parameters": null, "contexts": null},
            "originalRequest": null
        });
        let request = parse_envelope(&body).unwrap();
        assert_eq!(request.action, "default");
        assert!(request.contexts.is_empty());
    }

    #[test]
    fn null_result_falls_through_to_v2() {
        let body = json!({"result": null, "queryResult": {"action": "input.unknown"}});
        let request = parse_envelope(&body).unwrap();
        assert_eq!(request.version, ApiVersion::V2);
        assert_eq!(request.action, "input.unknown");
    }

    #[test]
    fn null_keys_alone_are_rejected() {
        let body = json!({"result": null, "queryResult": null});
        let err = parse_envelope(&body).unwrap_err();
        assert!(matches!(err, FulfillmentError::InvalidRequest { .. }));
    }

    #[test]
    fn game_parameters_fall_back_to_top_level() {
        let body = json!({
            "queryResult": {"parameters": {"game": "The Resistance"}}
        });
        let request = parse_envelope(&body).unwrap();
        assert_eq!(
            request.game_parameters().get("game"),
            Some(&json!("The Resistance"))
        );
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let err = parse_envelope(&json!({"hello": "world"})).unwrap_err();
        assert!(err.to_string().contains(INVALID_WEBHOOK_MESSAGE));
    }

    #[test]
    fn wrong_field_types_are_json_errors() {
        let err = parse_envelope(&json!({"result": {"contexts": "nope"}})).unwrap_err();
        assert!(matches!(err, FulfillmentError::Json(_)));
    }
}
