//! Book domain methods on Repository

use chrono::Utc;

use super::{unique_violation, Repository};
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

const ISBN_TAKEN: &str = "ISBN must be unique.";

impl Repository {
    /// List all books
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("book"))
    }

    /// Create book
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(&data.isbn)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation(e, ISBN_TAKEN))
    }

    /// Update the provided book fields
    pub async fn books_update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
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

        add_field!(data.title, "title");
        add_field!(data.author, "author");
        add_field!(data.genre, "genre");
        add_field!(data.isbn, "isbn");

        let query = format!(
            "UPDATE books SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Book>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.author);
        bind_field!(data.genre);
        bind_field!(data.isbn);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| unique_violation(e, ISBN_TAKEN))?
            .ok_or_else(|| AppError::not_found("book"))
    }

    /// Delete book
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("book"));
        }
        Ok(())
    }
}
