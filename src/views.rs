//! Server-rendered pages.
//!
//! Templates live in `templates/` and are compiled into the binary by askama.
//! Handlers never pass domain types straight to a template; they go through
//! [`GameView`], which flattens optional attributes into display strings.

use crate::domain::Game;
use crate::error::AppError;
use askama::Template;
use axum::response::Html;

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// Display strings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub id: String,
    pub title: String,
    pub year_made: String,
    pub genre: String,
    pub studio: String,
    pub country: String,
    /// Canonical decimal, used as the edit form's input value.
    pub launch_price: String,
    /// Two fractional digits, used for display.
    pub launch_price_display: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        GameView {
            id: game.id.to_string(),
            title: game.title.clone().unwrap_or_default(),
            year_made: game.year_made.map(|y| y.to_string()).unwrap_or_default(),
            genre: game.genre.clone().unwrap_or_default(),
            studio: game.studio.clone().unwrap_or_default(),
            country: game.country.clone().unwrap_or_default(),
            launch_price: game
                .launch_price
                .map(|p| p.to_canonical_string())
                .unwrap_or_default(),
            launch_price_display: game
                .launch_price
                .map(|p| p.to_price_string())
                .unwrap_or_default(),
            created_at: game.created_at.format("%Y-%m-%d %H:%M").to_string(),
            updated_at: game.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub games: Vec<GameView>,
}

impl IndexTemplate {
    pub fn new(games: &[Game]) -> Self {
        IndexTemplate {
            title: "Game Library",
            games: games.iter().map(GameView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddTemplate {
    pub title: &'static str,
}

impl AddTemplate {
    pub fn new() -> Self {
        AddTemplate {
            title: "Add a new game!",
        }
    }
}

impl Default for AddTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "game.html")]
pub struct GameTemplate {
    pub title: &'static str,
    pub game: GameView,
}

impl GameTemplate {
    /// Detail page as reached by navigation.
    pub fn details(game: &Game) -> Self {
        GameTemplate {
            title: "Game details",
            game: GameView::from(game),
        }
    }

    /// Detail page re-rendered after an update.
    pub fn updated(game: &Game) -> Self {
        GameTemplate {
            title: "Game Details",
            game: GameView::from(game),
        }
    }
}

/// The chart pages. Aggregation happens in the browser from `GET /games`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    YearMade,
    Genre,
    Studio,
    Country,
    LaunchPrice,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::YearMade => "Sort by Year Made",
            ChartKind::Genre => "Sort by Genre",
            ChartKind::Studio => "Sort by Studio",
            ChartKind::Country => "Sort by country",
            ChartKind::LaunchPrice => "Sort by Launch Price",
        }
    }

    /// JSON key of the attribute being charted.
    pub fn field(&self) -> &'static str {
        match self {
            ChartKind::YearMade => "yearMade",
            ChartKind::Genre => "genre",
            ChartKind::Studio => "studio",
            ChartKind::Country => "country",
            ChartKind::LaunchPrice => "launchPrice",
        }
    }

    /// `count` plots how many games share each value; `value` plots the value per title.
    pub fn mode(&self) -> &'static str {
        match self {
            ChartKind::LaunchPrice => "value",
            _ => "count",
        }
    }
}

#[derive(Template)]
#[template(path = "chart.html")]
pub struct ChartTemplate {
    pub title: &'static str,
    pub field: &'static str,
    pub mode: &'static str,
}

impl ChartTemplate {
    pub fn new(kind: ChartKind) -> Self {
        ChartTemplate {
            title: kind.title(),
            field: kind.field(),
            mode: kind.mode(),
        }
    }
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub title: &'static str,
}

impl NotFoundTemplate {
    pub fn new() -> Self {
        NotFoundTemplate { title: "404" }
    }
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> ErrorTemplate<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        ErrorTemplate { title, message }
    }
}
