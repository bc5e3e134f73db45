//! Script builder for game narration
//!
//! Turns a [`NarrationRequest`] into the ordered list of segments to speak.
//! Every script has three phases: a fixed preamble, a game-specific body and
//! a fixed closing. The builder is pure; the same request always yields the
//! same segments.

mod avalon;
mod resistance;
mod secret_hitler;


use crate::types::{Cadence, GameId, NarrationRequest, NarrationSegment};

pub const EYES_CLOSED: &str = "Eyes closed and fists on the table.";
pub const SAFETY_NOTICE: &str = "If there's a problem at any time, tell me to stop.";
pub const EVERYONE_OPEN: &str = "Everyone, open your eyes.";

/// Build the narration script for a request
pub fn build(request: &NarrationRequest) -> Vec<NarrationSegment> {
    let mut script = Script::new();

    script.say(EYES_CLOSED, Cadence::Phrase);
    script.say(SAFETY_NOTICE, Cadence::Long);

    let players = request.player_count();
    match request.game {
        Some(GameId::Resistance) => resistance::narrate(&mut script, players),
        Some(GameId::SecretHitler) => secret_hitler::narrate(&mut script, players),
        Some(GameId::Avalon) => avalon::narrate(&mut script, players, &request.roles),
        None => {}
    }

    script.say(EVERYONE_OPEN, Cadence::Paragraph);

    log::debug!(
        "built {} segments for {:?} with {} players",
        script.segments.len(),
        request.game,
        players
    );
    script.finish()
}

/// Number of spies (Resistance) or fascists including Hitler (Secret Hitler)
pub fn spy_count(players: u32) -> u32 {
    2 + u32::from(players > 6) + u32::from(players > 8)
}

/// Number of Mordred's minions in Avalon
pub fn minion_count(players: u32) -> u32 {
    2 + u32::from(players > 6) + u32::from(players > 9)
}

/// Append-only segment list handed to the per-game narrators
pub(crate) struct Script {
    segments: Vec<NarrationSegment>,
}

impl Script {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub(crate) fn say(&mut self, text: impl Into<String>, cadence: Cadence) {
        self.segments.push(NarrationSegment::spoken(text, cadence));
    }

    fn finish(self) -> Vec<NarrationSegment> {
        self.segments
    }
}

/// "1 thumb", "3 thumbs"
pub(crate) fn counted(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
