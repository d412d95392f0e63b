use axum::async_trait;
use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use serde::Deserialize;
use std::str::FromStr;
use tracing::info;

use super::AppState;
use crate::domain::{Decimal, Game, GameFields, GameId};
use crate::error::AppError;
use crate::views::{render, GameTemplate, IndexTemplate};

/// Form body shared by the create and update endpoints.
///
/// Every key is optional; a missing key means the attribute was not submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameForm {
    pub title: Option<String>,
    pub year_made: Option<String>,
    pub genre: Option<String>,
    pub studio: Option<String>,
    pub country: Option<String>,
    pub launch_price: Option<String>,
}

/// `Form<GameForm>` whose rejections render through [`AppError`].
///
/// A body without a form content type is treated as an empty submission;
/// a body that fails to decode (e.g. a repeated key) is a 400.
#[derive(Debug)]
pub struct GameFormBody(pub GameForm);

#[async_trait]
impl<S> FromRequest<S> for GameFormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<GameForm>::from_request(req, state).await {
            Ok(Form(form)) => Ok(GameFormBody(form)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(GameFormBody(GameForm::default())),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

impl TryFrom<GameForm> for GameFields {
    type Error = AppError;

    fn try_from(form: GameForm) -> Result<Self, Self::Error> {
        let year_made = non_blank(form.year_made)
            .map(|s| s.trim().parse::<i64>())
            .transpose()
            .map_err(|_| AppError::BadRequest("yearMade must be a whole number".into()))?;

        let launch_price = non_blank(form.launch_price)
            .map(|s| Decimal::from_str_canonical(&s))
            .transpose()
            .map_err(|_| AppError::BadRequest("launchPrice must be a number".into()))?;

        Ok(GameFields {
            title: form.title,
            year_made,
            genre: form.genre,
            studio: form.studio,
            country: form.country,
            launch_price,
        })
    }
}

/// Blank numeric inputs count as "not submitted".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_game_id(raw: &str) -> Result<GameId, AppError> {
    GameId::from_str(raw).map_err(|_| AppError::NotFound(format!("No game with id {}", raw)))
}

/// GET / — every game, newest first.
pub async fn list_games(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let games = state.repo.list_games().await?;
    render(&IndexTemplate::new(&games))
}

/// GET /games — every game as a JSON array, for the chart pages.
pub async fn list_games_json(State(state): State<AppState>) -> Result<Json<Vec<Game>>, AppError> {
    let games = state.repo.list_games().await?;
    Ok(Json(games))
}

/// GET /new-game — store the hardcoded sample record.
pub async fn insert_sample_game(State(state): State<AppState>) -> Result<Json<Game>, AppError> {
    let game = state.repo.insert_game(&GameFields::sample()).await?;
    info!(game_id = %game.id, "Inserted sample game");
    Ok(Json(game))
}

/// POST / — create from the add form.
pub async fn create_game(
    State(state): State<AppState>,
    GameFormBody(form): GameFormBody,
) -> Result<Redirect, AppError> {
    let fields = GameFields::try_from(form)?;
    let game = state.repo.insert_game(&fields).await?;
    info!(game_id = %game.id, "Game created");
    Ok(Redirect::to("/"))
}

/// GET /:id and GET /game/:id
pub async fn show_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_game_id(&id)?;
    let game = state
        .repo
        .get_game(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No game with id {}", id)))?;
    render(&GameTemplate::details(&game))
}

/// POST /:id — apply the edit form, then re-read and render the detail page.
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    GameFormBody(form): GameFormBody,
) -> Result<Html<String>, AppError> {
    let id = parse_game_id(&id)?;
    let changes = GameFields::try_from(form)?;

    if !state.repo.update_game(&id, &changes).await? {
        return Err(AppError::NotFound(format!("No game with id {}", id)));
    }
    info!(game_id = %id, "Game updated");

    let game = state
        .repo
        .get_game(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {} vanished after update", id)))?;
    render(&GameTemplate::updated(&game))
}

/// DELETE /:id — the detail page script follows the returned redirect.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_game_id(&id)?;

    if !state.repo.delete_game(&id).await? {
        return Err(AppError::NotFound(format!("No game with id {}", id)));
    }
    info!(game_id = %id, "Game deleted");

    Ok(Json(serde_json::json!({ "redirect": "/" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_parses_all_fields() {
        let form = GameForm {
            title: Some("Celeste".into()),
            year_made: Some("2018".into()),
            genre: Some("Platformer".into()),
            studio: Some("Maddy Makes Games".into()),
            country: Some("Canada".into()),
            launch_price: Some("19.99".into()),
        };

        let fields = GameFields::try_from(form).unwrap();
        assert_eq!(fields.title.as_deref(), Some("Celeste"));
        assert_eq!(fields.year_made, Some(2018));
        assert_eq!(fields.launch_price.unwrap().to_canonical_string(), "19.99");
    }

    #[test]
    fn test_blank_numbers_are_not_submitted() {
        let form = GameForm {
            year_made: Some("".into()),
            launch_price: Some("   ".into()),
            ..GameForm::default()
        };

        let fields = GameFields::try_from(form).unwrap();
        assert_eq!(fields, GameFields::default());
    }

    #[test]
    fn test_empty_text_is_kept() {
        let form = GameForm {
            genre: Some("".into()),
            ..GameForm::default()
        };

        let fields = GameFields::try_from(form).unwrap();
        assert_eq!(fields.genre.as_deref(), Some(""));
    }

    #[test]
    fn test_bad_year_is_rejected() {
        let form = GameForm {
            year_made: Some("last year".into()),
            ..GameForm::default()
        };

        match GameFields::try_from(form) {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("yearMade")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let form = GameForm {
            launch_price: Some("free".into()),
            ..GameForm::default()
        };

        match GameFields::try_from(form) {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("launchPrice")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_game_id_rejects_garbage() {
        assert!(matches!(
            parse_game_id("styles.css"),
            Err(AppError::NotFound(_))
        ));
    }
}
