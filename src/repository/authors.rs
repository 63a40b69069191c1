//! Author domain methods on Repository

use chrono::Utc;

use super::{unique_violation, Repository};
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

const AUTHOR_TAKEN: &str = "Author must be unique.";

impl Repository {
    /// List all authors
    pub async fn authors_list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get author by ID
    pub async fn authors_get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("author"))
    }

    /// Create author
    pub async fn authors_create(&self, data: &CreateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("INSERT INTO authors (author) VALUES ($1) RETURNING *")
            .bind(&data.author)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| unique_violation(e, AUTHOR_TAKEN))
    }

    /// Update the provided author fields
    pub async fn authors_update(&self, id: i32, data: &UpdateAuthor) -> AppResult<Author> {
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

        add_field!(data.author, "author");

        let query = format!(
            "UPDATE authors SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Author>(&query).bind(Utc::now());

        if let Some(ref val) = data.author {
            builder = builder.bind(val);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| unique_violation(e, AUTHOR_TAKEN))?
            .ok_or_else(|| AppError::not_found("author"))
    }

    /// Delete author
    pub async fn authors_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("author"));
        }
        Ok(())
    }
}
