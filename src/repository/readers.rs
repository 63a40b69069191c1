//! Reader domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader, UpdateReader},
};

impl Repository {
    /// List all readers
    pub async fn readers_list(&self) -> AppResult<Vec<Reader>> {
        let rows = sqlx::query_as::<_, Reader>("SELECT * FROM readers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get reader by ID
    pub async fn readers_get_by_id(&self, id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("reader"))
    }

    /// Create reader; `password_hash` replaces the plaintext password from the request
    pub async fn readers_create(&self, data: &CreateReader, password_hash: &str) -> AppResult<Reader> {
        let row = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (email, name, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the provided reader fields
    pub async fn readers_update(
        &self,
        id: i32,
        data: &UpdateReader,
        password_hash: Option<String>,
    ) -> AppResult<Reader> {
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

        add_field!(data.email, "email");
        add_field!(data.name, "name");
        add_field!(password_hash, "password");

        let query = format!(
            "UPDATE readers SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Reader>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.email);
        bind_field!(data.name);
        bind_field!(password_hash);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("reader"))
    }

    /// Delete reader
    pub async fn readers_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM readers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("reader"));
        }
        Ok(())
    }
}
