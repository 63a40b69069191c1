//! Author service

use crate::{
    error::AppResult,
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        Validated,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        self.repository.authors_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        data.check()?;
        let author = self.repository.authors_create(data).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    pub async fn update(&self, id: i32, data: &UpdateAuthor) -> AppResult<Author> {
        data.check()?;
        self.repository.authors_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.authors_delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
