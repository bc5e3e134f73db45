//! Output mode for rendered narration

use serde::{Deserialize, Serialize};

/// How a segment list is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// SSML-style markup with explicit pauses, for voice assistants
    RichMarkup,
    /// Space-joined phrase text
    PlainText,
}

impl RenderMode {
    /// Rich markup only for requests coming from the voice-assistant channel
    pub fn for_source(source: Option<&str>, voice_source: &str) -> Self {
        match source {
            Some(source) if source == voice_source => RenderMode::RichMarkup,
            _ => RenderMode::PlainText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_source_gets_markup() {
        assert_eq!(
            RenderMode::for_source(Some("google"), "google"),
            RenderMode::RichMarkup
        );
        assert_eq!(
            RenderMode::for_source(Some("slack"), "google"),
            RenderMode::PlainText
        );
        assert_eq!(RenderMode::for_source(None, "google"), RenderMode::PlainText);
    }
}
