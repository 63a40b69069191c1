//! Genre domain methods on Repository

use chrono::Utc;

use super::{unique_violation, Repository};
use crate::{
    error::{AppError, AppResult},
    models::genre::{CreateGenre, Genre, UpdateGenre},
};

const GENRE_TAKEN: &str = "Genre must be unique.";

impl Repository {
    /// List all genres
    pub async fn genres_list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get genre by ID
    pub async fn genres_get_by_id(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("genre"))
    }

    /// Create genre
    pub async fn genres_create(&self, data: &CreateGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (genre) VALUES ($1) RETURNING *")
            .bind(&data.genre)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unique_violation(e, GENRE_TAKEN))
    }

    /// Update the provided genre fields
    pub async fn genres_update(&self, id: i32, data: &UpdateGenre) -> AppResult<Genre> {
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.genre, "genre");

        let query = format!(
            "UPDATE genres SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Genre>(&query).bind(Utc::now());

        if let Some(ref val) = data.genre {
            builder = builder.bind(val);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| unique_violation(e, GENRE_TAKEN))?
            .ok_or_else(|| AppError::not_found("genre"))
    }

    /// Delete genre
    pub async fn genres_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("genre"));
        }
        Ok(())
    }
}
