//! Core types for the narrator
//!
//! This module contains the data model shared by the script builder and renderer:
//! - Game / role identifiers and the enabled-role set
//! - NarrationRequest: what to narrate, with the player count already clamped
//! - NarrationSegment: one phrase plus its pause
//! - RenderMode: markup or plain text output

pub mod game;
pub mod mode;
pub mod request;
pub mod segment;

pub use game::{GameId, RoleId, RoleSet};
pub use mode::RenderMode;
pub use request::{DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS, NarrationRequest};
pub use segment::{Cadence, Emphasis, NarrationSegment};
