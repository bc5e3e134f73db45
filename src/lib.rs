//! # table-narrator
//!
//! Webhook fulfillment for a conversational agent that narrates the "night phase"
//! of social deduction games: The Resistance, Secret Hitler and The Resistance: Avalon.
//!
//! The core is a pure narration-script compiler: a request (game, player count,
//! enabled roles) becomes an ordered list of spoken segments, which the renderer
//! turns into SSML-style markup for voice assistants or into plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use table_narrator::{GameId, NarrationRequest, RenderMode, RoleSet, build_script, render};
//!
//! let request = NarrationRequest::new(Some(GameId::Resistance), 7, RoleSet::new());
//! let segments = build_script(&request);
//!
//! let text = render(&segments, RenderMode::PlainText);
//! assert!(text.contains("You should see 2 other pairs of eyes."));
//!
//! let ssml = render(&segments, RenderMode::RichMarkup);
//! assert!(ssml.starts_with("<speak>") && ssml.ends_with("</speak>"));
//! ```
//!
//! ## Webhook Usage
//!
//! ```rust
//! use table_narrator::{config::FulfillmentConfig, webhook::fulfill};
//!
//! let body = serde_json::json!({
//!     "queryResult": {
//!         "action": "game.narrate",
//!         "parameters": {"game": "Secret Hitler", "players": 9}
//!     }
//! });
//! let response = fulfill(&body, &FulfillmentConfig::default()).unwrap();
//! assert!(response.speech().contains("3 other pairs of eyes"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod script;
pub mod server;
pub mod types;
pub mod webhook;

pub use error::FulfillmentError;
pub use render::render;
pub use script::build as build_script;
pub use types::{
    Cadence, Emphasis, GameId, NarrationRequest, NarrationSegment, RenderMode, RoleId, RoleSet,
};

/// Build and render a script in one call
pub fn narrate(request: &NarrationRequest, mode: RenderMode) -> String {
    render(&build_script(request), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrate_matches_build_then_render() {
        let request = NarrationRequest::new(Some(GameId::Avalon), 8, RoleSet::new());
        assert_eq!(
            narrate(&request, RenderMode::RichMarkup),
            render(&build_script(&request), RenderMode::RichMarkup)
        );
    }

    #[test]
    fn unknown_game_plain_text_is_boilerplate_only() {
        let request = NarrationRequest::new(None, 5, RoleSet::new());
        assert_eq!(
            narrate(&request, RenderMode::PlainText),
            "Eyes closed and fists on the table. \
             If there's a problem at any time, tell me to stop. \
             Everyone, open your eyes."
        );
    }
}
