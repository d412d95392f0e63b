//! Domain types for the game catalog.
//!
//! This module provides:
//! - Lossless numeric handling for launch prices via the Decimal wrapper
//! - The Game record, its identifier, and the editable attribute set

pub mod decimal;
pub mod game;

pub use decimal::Decimal;
pub use game::{Game, GameFields, GameId};
