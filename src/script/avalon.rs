//! The Resistance: Avalon
//!
//! Three reveals in order: minions see each other, Merlin sees the minions,
//! and (when enabled) Percival sees Merlin. Oberon hides from the other
//! minions, Mordred hides from Merlin, Morgana poses as Merlin for Percival.

use super::{Script, counted, minion_count};
use crate::types::{Cadence, RoleId, RoleSet};

pub(super) fn narrate(script: &mut Script, players: u32, roles: &RoleSet) {
    let has_percival = roles.contains(RoleId::Percival);
    let has_morgana = roles.contains(RoleId::Morgana);
    let has_oberon = roles.contains(RoleId::Oberon);
    let has_mordred = roles.contains(RoleId::Mordred);

    let minions = minion_count(players);
    // thumbs the minions see among themselves
    let k_bads = minions - u32::from(has_oberon);
    // thumbs Merlin sees
    let v_bads = minions - u32::from(has_mordred);

    if has_oberon {
        script.say(
            "Minions who are not Oberon, raise your thumbs and open your eyes.",
            Cadence::Long,
        );
    } else {
        script.say(
            "Minions, raise your thumbs and open your eyes.",
            Cadence::Long,
        );
    }
    script.say(
        format!(
            "You should see {} up, including your own.",
            counted(k_bads, "thumb", "thumbs")
        ),
        Cadence::Long,
    );
    script.say(
        "Minions, lower your thumbs and close your eyes.",
        Cadence::Paragraph,
    );

    if has_mordred {
        script.say(
            "Minions who are not Mordred, raise your thumbs for Merlin.",
            Cadence::Long,
        );
    } else {
        script.say("Minions, raise your thumbs for Merlin.", Cadence::Long);
    }
    script.say("Merlin, open your eyes.", Cadence::Fast);
    script.say(
        format!(
            "You should see {}. These can fail missions.",
            counted(v_bads, "thumb", "thumbs")
        ),
        Cadence::Long,
    );
    script.say("Merlin, close your eyes.", Cadence::Fast);
    script.say("Minions, lower your thumbs.", Cadence::Paragraph);

    if has_percival {
        percival(script, has_morgana);
    }
}

fn percival(script: &mut Script, has_morgana: bool) {
    if has_morgana {
        script.say("Merlin and Morgana, raise your thumbs.", Cadence::Long);
        script.say("Percival, open your eyes.", Cadence::Fast);
        script.say(
            "You should see 2 thumbs. One is Merlin, one is Morgana.",
            Cadence::Fast,
        );
        script.say("Figure out who's who.", Cadence::Long);
    } else {
        script.say("Merlin, raise your thumb.", Cadence::Long);
        script.say("Percival, open your eyes.", Cadence::Fast);
        script.say("You should see 1 thumb. This is Merlin.", Cadence::Long);
    }
    script.say(
        "Lower your thumbs and close your eyes.",
        Cadence::Paragraph,
    );
}
