//! Narration request: what the script builder is asked to narrate

use serde::Serialize;
use serde_json::{Map, Value};

use super::game::{GameId, RoleSet};

/// Fewest players any supported game is narrated for
pub const MIN_PLAYERS: u32 = 5;
/// Most players any supported game is narrated for
pub const MAX_PLAYERS: u32 = 10;
/// Player count used when the request does not carry one
pub const DEFAULT_PLAYERS: u32 = MIN_PLAYERS;

/// Input to the script builder.
///
/// `player_count` is always inside `MIN_PLAYERS..=MAX_PLAYERS`; the constructor clamps
/// anything outside that range instead of rejecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationRequest {
    /// `None` when the platform sent a title we do not narrate
    pub game: Option<GameId>,
    player_count: u32,
    pub roles: RoleSet,
}

impl NarrationRequest {
    pub fn new(game: Option<GameId>, player_count: u32, roles: RoleSet) -> Self {
        Self {
            game,
            player_count: clamp_players(player_count),
            roles,
        }
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Extract a request from the platform's context parameters.
    ///
    /// Reads `game` (title string), `players` (number or numeric string) and
    /// `avalon-set` (array of names or one comma/space separated string).
    /// Missing or malformed fields fall back to "unknown game", `default_players`
    /// and no roles respectively.
    pub fn from_parameters(params: &Map<String, Value>, default_players: u32) -> Self {
        let title = params.get("game").and_then(Value::as_str).unwrap_or("");
        let game = GameId::from_title(title);
        if game.is_none() {
            log::info!("unrecognized game title {:?}, narrating boilerplate only", title);
        }

        let players = params
            .get("players")
            .and_then(player_count_value)
            .unwrap_or(default_players);

        let roles = match params.get("avalon-set") {
            Some(Value::Array(items)) => {
                RoleSet::from_tokens(items.iter().filter_map(Value::as_str))
            }
            Some(Value::String(joined)) => RoleSet::from_tokens([joined.as_str()]),
            _ => RoleSet::new(),
        };

        Self::new(game, players, roles)
    }
}

/// Numeric `players` value saturated into `u32`; negatives become 0 so the
/// clamp lifts them to `MIN_PLAYERS`. `None` only for non-numeric values.
fn player_count_value(value: &Value) -> Option<u32> {
    let count = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    count
        .is_finite()
        .then(|| count.round().clamp(0.0, u32::MAX as f64) as u32)
}

fn clamp_players(requested: u32) -> u32 {
    let clamped = requested.clamp(MIN_PLAYERS, MAX_PLAYERS);
    if clamped != requested {
        log::warn!(
            "player count {} outside {}..={}, using {}",
            requested,
            MIN_PLAYERS,
            MAX_PLAYERS,
            clamped
        );
    }
    clamped
}
