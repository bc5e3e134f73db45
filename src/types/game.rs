//! Games and optional roles the narrator knows about

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A supported social deduction game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    Resistance,
    SecretHitler,
    Avalon,
}

impl GameId {
    /// All supported games in a stable order
    pub const ALL: [GameId; 3] = [GameId::Resistance, GameId::SecretHitler, GameId::Avalon];

    /// The title the conversational platform sends for this game
    pub fn title(self) -> &'static str {
        match self {
            GameId::Resistance => "The Resistance",
            GameId::SecretHitler => "Secret Hitler",
            GameId::Avalon => "The Resistance: Avalon",
        }
    }

    /// Look up a game by its exact platform title
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|game| game.title() == title)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Optional special characters of Avalon
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleId {
    Percival,
    Morgana,
    Oberon,
    Mordred,
}

impl RoleId {
    pub const ALL: [RoleId; 4] = [
        RoleId::Percival,
        RoleId::Morgana,
        RoleId::Oberon,
        RoleId::Mordred,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoleId::Percival => "Percival",
            RoleId::Morgana => "Morgana",
            RoleId::Oberon => "Oberon",
            RoleId::Mordred => "Mordred",
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoleId {
    type Err = UnknownRole;

    /// Exact, case-insensitive match against the role name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        RoleId::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownRole(token.to_string()))
    }
}

/// A role token that does not name any known role
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

/// The set of optional roles enabled for a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(BTreeSet<RoleId>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: RoleId) -> bool {
        self.0.insert(role)
    }

    pub fn contains(&self, role: RoleId) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Build a set from free-form tokens, skipping anything that is not a role.
    ///
    /// Each token may itself hold several names separated by commas or whitespace,
    /// which is how the platform delivers a single-string role list.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            for part in token
                .as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
            {
                match part.parse::<RoleId>() {
                    Ok(role) => {
                        set.insert(role);
                    }
                    Err(err) => log::debug!("ignoring role token: {}", err),
                }
            }
        }
        set
    }
}

impl FromIterator<RoleId> for RoleSet {
    fn from_iter<T: IntoIterator<Item = RoleId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
