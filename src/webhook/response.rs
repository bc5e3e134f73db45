//! Webhook response envelopes

use serde::Serialize;

use super::envelope::ApiVersion;

/// What a handler wants to say, before it is wrapped for a specific version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Spoken (or rendered narration) text
    pub speech: String,
    /// Text shown on screen; v1 only
    pub display: String,
}

impl Reply {
    /// Same text spoken and displayed
    pub fn text(text: impl Into<String>) -> Self {
        let speech = text.into();
        Self {
            display: speech.clone(),
            speech,
        }
    }

    pub fn with_display(speech: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            display: display.into(),
        }
    }

    pub fn into_response(self, version: ApiVersion) -> WebhookResponse {
        match version {
            ApiVersion::V1 => WebhookResponse::V1 {
                speech: self.speech,
                display_text: self.display,
            },
            ApiVersion::V2 => WebhookResponse::V2 {
                fulfillment_text: self.speech,
            },
        }
    }
}

/// JSON body returned to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WebhookResponse {
    V1 {
        speech: String,
        #[serde(rename = "displayText")]
        display_text: String,
    },
    V2 {
        #[serde(rename = "fulfillmentText")]
        fulfillment_text: String,
    },
}

impl WebhookResponse {
    /// The spoken part regardless of version
    pub fn speech(&self) -> &str {
        match self {
            WebhookResponse::V1 { speech, .. } => speech,
            WebhookResponse::V2 { fulfillment_text } => fulfillment_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn v1_serializes_speech_and_display() {
        let response = Reply::with_display("<speak>hi</speak>", "Narrating a game of X")
            .into_response(ApiVersion::V1);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"speech": "<speak>hi</speak>", "displayText": "Narrating a game of X"})
        );
    }

    #[test]
    fn v2_serializes_fulfillment_text_only() {
        let response = Reply::with_display("spoken", "ignored").into_response(ApiVersion::V2);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"fulfillmentText": "spoken"})
        );
        assert_eq!(response.speech(), "spoken");
    }
}
