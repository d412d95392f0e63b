//! Game catalog record and its identifier.

use crate::domain::Decimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Storage-assigned identifier for a game (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        GameId(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(GameId)
    }
}

/// A stored game.
///
/// Attributes are optional: a submission that omits a field stores the game without it,
/// and the JSON listing leaves the key out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id")]
    pub id: GameId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_made: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The user-editable attributes of a game.
///
/// Used both for inserts (absent means "store without it") and for updates
/// (absent means "leave unchanged").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFields {
    pub title: Option<String>,
    pub year_made: Option<i64>,
    pub genre: Option<String>,
    pub studio: Option<String>,
    pub country: Option<String>,
    pub launch_price: Option<Decimal>,
}

impl GameFields {
    /// The hardcoded record inserted by the seed endpoint.
    pub fn sample() -> Self {
        GameFields {
            title: Some("Minecraft".to_string()),
            year_made: Some(2011),
            genre: Some("Sandbox survival".to_string()),
            studio: Some("Mojang".to_string()),
            country: Some("Sweden".to_string()),
            launch_price: Some(Decimal::new(rust_decimal::Decimal::new(2999, 2))),
        }
    }
}
