//! Narration segments: one spoken phrase plus the pause that follows it

use serde::{Deserialize, Serialize};

/// Strength of the pause after a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Emphasis {
    #[default]
    None,
    XWeak,
    Weak,
    Normal,
    Strong,
}

impl Emphasis {
    /// SSML `strength` name; empty for `None`
    pub fn strength_name(self) -> &'static str {
        match self {
            Emphasis::None => "",
            Emphasis::XWeak => "x-weak",
            Emphasis::Weak => "weak",
            Emphasis::Normal => "normal",
            Emphasis::Strong => "strong",
        }
    }
}

/// Canonical pause/emphasis presets used by the script builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Short, weak
    Phrase,
    /// Short-medium, normal
    Fast,
    /// Medium, normal
    Long,
    /// Long, strong; ends a block of the script
    Paragraph,
}

impl Cadence {
    pub fn pause_ms(self) -> u32 {
        match self {
            Cadence::Phrase => 200,
            Cadence::Fast => 500,
            Cadence::Long => 1500,
            Cadence::Paragraph => 3000,
        }
    }

    pub fn emphasis(self) -> Emphasis {
        match self {
            Cadence::Phrase => Emphasis::Weak,
            Cadence::Fast | Cadence::Long => Emphasis::Normal,
            Cadence::Paragraph => Emphasis::Strong,
        }
    }
}

/// One spoken phrase and the pause after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationSegment {
    pub text: String,
    pub pause_ms: u32,
    pub emphasis: Emphasis,
}

impl NarrationSegment {
    pub fn new(text: impl Into<String>, pause_ms: u32, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            pause_ms,
            emphasis,
        }
    }

    /// Segment using one of the canonical presets
    pub fn spoken(text: impl Into<String>, cadence: Cadence) -> Self {
        Self::new(text, cadence.pause_ms(), cadence.emphasis())
    }
}
