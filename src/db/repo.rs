//! Repository layer for database operations.

use crate::domain::{Decimal, Game, GameFields, GameId};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use tracing::debug;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a new game and return it as stored.
    ///
    /// The identifier and both timestamps are assigned here.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_game(&self, fields: &GameFields) -> Result<Game, sqlx::Error> {
        let id = GameId::generate();
        let now_ms = Utc::now().timestamp_millis();
        let now = datetime_from_ms(now_ms)?;

        sqlx::query(
            r#"
            INSERT INTO games (
                id, title, year_made, genre, studio, country, launch_price,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(fields.title.as_deref())
        .bind(fields.year_made)
        .bind(fields.genre.as_deref())
        .bind(fields.studio.as_deref())
        .bind(fields.country.as_deref())
        .bind(fields.launch_price.map(|p| p.to_canonical_string()))
        .bind(now_ms)
        .bind(now_ms)
        .execute(&self.pool)
        .await?;

        debug!(game_id = %id, "Inserted game");

        Ok(Game {
            id,
            title: fields.title.clone(),
            year_made: fields.year_made,
            genre: fields.genre.clone(),
            studio: fields.studio.clone(),
            country: fields.country.clone(),
            launch_price: fields.launch_price,
            created_at: now,
            updated_at: now,
        })
    }

    /// List every game, most recently created first.
    ///
    /// Games created within the same millisecond keep insertion order (newest first).
    ///
    /// # Errors
    /// Returns an error if the query fails or a row cannot be decoded.
    pub async fn list_games(&self) -> Result<Vec<Game>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, year_made, genre, studio, country, launch_price,
                   created_at, updated_at
            FROM games
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(game_from_row).collect()
    }

    /// Fetch a single game by identifier.
    ///
    /// # Errors
    /// Returns an error if the query fails or the row cannot be decoded.
    pub async fn get_game(&self, id: &GameId) -> Result<Option<Game>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, title, year_made, genre, studio, country, launch_price,
                   created_at, updated_at
            FROM games
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(game_from_row).transpose()
    }

    /// Apply the submitted attributes to a stored game in one statement.
    ///
    /// Only attributes present in `changes` are written; the identifier and
    /// `created_at` are never touched. Returns false if no game has this identifier.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_game(
        &self,
        id: &GameId,
        changes: &GameFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE games
            SET title = COALESCE(?, title),
                year_made = COALESCE(?, year_made),
                genre = COALESCE(?, genre),
                studio = COALESCE(?, studio),
                country = COALESCE(?, country),
                launch_price = COALESCE(?, launch_price),
                updated_at = MAX(?, created_at)
            WHERE id = ?
            "#,
        )
        .bind(changes.title.as_deref())
        .bind(changes.year_made)
        .bind(changes.genre.as_deref())
        .bind(changes.studio.as_deref())
        .bind(changes.country.as_deref())
        .bind(changes.launch_price.map(|p| p.to_canonical_string()))
        .bind(Utc::now().timestamp_millis())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            debug!(game_id = %id, "Updated game");
        }
        Ok(updated)
    }

    /// Delete a game by identifier. Returns false if nothing was deleted.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_game(&self, id: &GameId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count stored games.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_games(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get::<i64, _>(0))
    }
}

fn game_from_row(row: &SqliteRow) -> Result<Game, sqlx::Error> {
    let id_str: String = row.try_get("id")?;
    let id = GameId::from_str(&id_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    let launch_price = row
        .try_get::<Option<String>, _>("launch_price")?
        .map(|s| Decimal::from_str_canonical(&s))
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Game {
        id,
        title: row.try_get("title")?,
        year_made: row.try_get("year_made")?,
        genre: row.try_get("genre")?,
        studio: row.try_get("studio")?,
        country: row.try_get("country")?,
        launch_price,
        created_at: datetime_from_ms(row.try_get("created_at")?)?,
        updated_at: datetime_from_ms(row.try_get("updated_at")?)?,
    })
}

fn datetime_from_ms(ms: i64) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| sqlx::Error::Decode(format!("timestamp out of range: {}", ms).into()))
}
