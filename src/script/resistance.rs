//! The Resistance: spies reveal themselves to each other

use super::{Script, counted, spy_count};
use crate::types::Cadence;

pub(super) fn narrate(script: &mut Script, players: u32) {
    let others = spy_count(players) - 1;

    script.say("Spies, open your eyes.", Cadence::Phrase);
    script.say(
        format!(
            "You should see {} of eyes.",
            counted(others, "other pair", "other pairs")
        ),
        Cadence::Fast,
    );
    script.say(
        "Collaborate with your buddies, and fail 3 missions to win.",
        Cadence::Phrase,
    );
    script.say("Spies, close your eyes.", Cadence::Paragraph);
}
