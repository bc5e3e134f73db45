//! Webhook tests - recorded platform requests through the fulfillment pipeline
//! Fixtures are real-shaped v1/v2 bodies stored under tests/fixtures

use serde_json::{Value, json};
use table_narrator::{
    FulfillmentError,
    config::FulfillmentConfig,
    webhook::{ApiVersion, WebhookResponse, fulfill, parse_envelope},
};

fn fixture(json: &str) -> Value {
    serde_json::from_str(json).expect("fixture is valid JSON")
}

#[cfg(test)]
mod webhook_tests {
    use super::*;

    /// Unit test: v1 Avalon request from the voice assistant
    /// Metric: v1 envelope with SSML speech and a display line naming the game
    #[test]
    fn test_v1_avalon_from_google() {
        let body = fixture(include_str!("fixtures/v1_avalon_google.json"));
        let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();

        match &response {
            WebhookResponse::V1 {
                speech,
                display_text,
            } => {
                assert!(speech.starts_with("<speak>"));
                assert!(speech.ends_with("</speak>"));
                assert!(speech.contains("Minions who are not Oberon"));
                assert!(speech.contains("You should see 3 thumbs up, including your own."));
                assert!(speech.contains("One is Merlin, one is Morgana."));
                assert_eq!(display_text, "Narrating a game of The Resistance: Avalon");
            }
            _ => panic!("Expected V1 response"),
        }

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("speech").is_some());
        assert!(json.get("displayText").is_some());
        assert!(json.get("fulfillmentText").is_none());
    }

    /// Unit test: v2 Resistance request from a text channel
    /// Metric: plain text fulfillmentText, float player count accepted
    #[test]
    fn test_v2_resistance_from_slack() {
        let body = fixture(include_str!("fixtures/v2_resistance_slack.json"));
        let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        let text = json["fulfillmentText"].as_str().unwrap();
        assert!(text.starts_with("Eyes closed and fists on the table. "));
        assert!(text.contains("You should see 2 other pairs of eyes."));
        assert!(text.ends_with("Everyone, open your eyes."));
        assert!(!text.contains('<'));
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    /// Unit test: v2 Secret Hitler request with the player count as a string
    /// Metric: N-fascist branch rendered as markup
    #[test]
    fn test_v2_secret_hitler_from_google() {
        let body = fixture(include_str!("fixtures/v2_secret_hitler_google.json"));
        let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();

        let speech = response.speech();
        assert!(speech.starts_with("<speak>"));
        assert!(speech.contains(
            "<prosody volume=\"loud\">You should see 3 other pairs of eyes.</prosody>"
        ));
        assert!(speech.contains("Hitler, lower your thumb."));
    }

    /// Unit test: Empty game title
    /// Metric: narration degrades to preamble and closing, not an error
    #[test]
    fn test_unknown_game_degrades() {
        let body = fixture(include_str!("fixtures/v2_unknown_game.json"));
        let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();
        assert_eq!(
            response.speech(),
            "Eyes closed and fists on the table. \
             If there's a problem at any time, tell me to stop. \
             Everyone, open your eyes."
        );
    }

    /// Unit test: Body that is neither v1 nor v2
    /// Metric: InvalidRequest error carrying the platform-facing message
    #[test]
    fn test_not_a_webhook_is_rejected() {
        let body = fixture(include_str!("fixtures/not_a_webhook.json"));
        match fulfill(&body, &FulfillmentConfig::default()) {
            Err(FulfillmentError::InvalidRequest { reason }) => {
                assert_eq!(
                    reason,
                    "Invalid Webhook Request (expecting v1 or v2 webhook request)"
                );
            }
            other => panic!("Expected InvalidRequest, got: {other:?}"),
        }
    }

    /// Unit test: Null v1 key next to a v2 body
    /// Metric: the v2 fallback reply is returned instead of an error
    #[test]
    fn test_null_result_uses_v2_envelope() {
        let body = json!({"result": null, "queryResult": {"action": "input.unknown"}});
        let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({"fulfillmentText": "I'm having trouble, can you try that again?"})
        );
    }

    /// Unit test: Envelope detection
    /// Metric: fixtures are classified by version with their channel source
    #[test]
    fn test_envelope_versions() {
        let v1 = parse_envelope(&fixture(include_str!("fixtures/v1_avalon_google.json"))).unwrap();
        assert_eq!(v1.version, ApiVersion::V1);
        assert_eq!(v1.source.as_deref(), Some("google"));

        let v2 =
            parse_envelope(&fixture(include_str!("fixtures/v2_resistance_slack.json"))).unwrap();
        assert_eq!(v2.version, ApiVersion::V2);
        assert_eq!(v2.source.as_deref(), Some("slack"));
        assert_eq!(
            v2.session.as_deref(),
            Some("projects/table-narrator/agent/sessions/2c9a1f")
        );
    }

    /// Unit test: Role list delivered as one comma-joined string
    /// Metric: same script as the array form
    #[test]
    fn test_role_string_and_array_agree() {
        let with_roles = |roles: Value| {
            json!({
                "queryResult": {
                    "action": "game.narrate",
                    "outputContexts": [{
                        "name": "game-setup",
                        "parameters": {
                            "game": "The Resistance: Avalon",
                            "players": 8,
                            "avalon-set": roles
                        }
                    }]
                }
            })
        };
        let config = FulfillmentConfig::default();
        let from_array = fulfill(&with_roles(json!(["Percival", "Mordred"])), &config).unwrap();
        let from_string = fulfill(&with_roles(json!("Percival,Mordred")), &config).unwrap();
        assert_eq!(from_array, from_string);
        assert!(from_array.speech().contains("Minions who are not Mordred"));
        assert!(from_array.speech().contains("You should see 1 thumb. This is Merlin."));
    }

    /// Unit test: Missing player count
    /// Metric: the configured default player count is used
    #[test]
    fn test_default_player_count_from_config() {
        let body = json!({
            "queryResult": {
                "action": "game.narrate",
                "parameters": {"game": "The Resistance"}
            }
        });
        let config = FulfillmentConfig {
            default_players: 9,
            ..FulfillmentConfig::default()
        };
        let response = fulfill(&body, &config).unwrap();
        assert!(response.speech().contains("You should see 3 other pairs of eyes."));
    }
}
