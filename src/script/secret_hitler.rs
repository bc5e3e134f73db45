//! Secret Hitler: fascists and Hitler learn who is on their team
//!
//! With two fascists (Hitler included) both open their eyes together. With
//! more, Hitler also raises a thumb so the rest of the team can tell which of
//! them is Hitler.

use super::{Script, spy_count};
use crate::types::Cadence;

pub(super) fn narrate(script: &mut Script, players: u32) {
    let fascists = spy_count(players);
    if fascists < 3 {
        two_fascists(script);
    } else {
        many_fascists(script, fascists);
    }
}

fn two_fascists(script: &mut Script) {
    script.say("Fascist and Hitler, open your eyes.", Cadence::Phrase);
    script.say("You should see one other pair of eyes.", Cadence::Fast);
    script.say(
        "Fascist, play Fascist cards and protect Hitler.",
        Cadence::Phrase,
    );
    script.say(
        "Hitler, play safe and become Chancellor when the time is right.",
        Cadence::Phrase,
    );
    script.say("Fascist and Hitler, close your eyes.", Cadence::Paragraph);
}

fn many_fascists(script: &mut Script, fascists: u32) {
    script.say("Fascists, open your eyes.", Cadence::Phrase);
    script.say(
        format!("You should see {} other pairs of eyes.", fascists - 1),
        Cadence::Fast,
    );
    script.say(
        "Hitler, stick your thumb up so that your Fascists can see you.",
        Cadence::Long,
    );
    script.say(
        "Fascists, play Fascist cards and protect Hitler.",
        Cadence::Phrase,
    );
    script.say(
        "Hitler, stay hidden and become Chancellor when the time is right.",
        Cadence::Phrase,
    );
    script.say("Fascists, close your eyes.", Cadence::Fast);
    script.say("Hitler, lower your thumb.", Cadence::Paragraph);
}
