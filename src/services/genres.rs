//! Genre service

use crate::{
    error::AppResult,
    models::{
        genre::{CreateGenre, Genre, UpdateGenre},
        Validated,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateGenre) -> AppResult<Genre> {
        data.check()?;
        let genre = self.repository.genres_create(data).await?;
        tracing::info!(genre_id = genre.id, "Genre created");
        Ok(genre)
    }

    pub async fn update(&self, id: i32, data: &UpdateGenre) -> AppResult<Genre> {
        data.check()?;
        self.repository.genres_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.genres_delete(id).await?;
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(())
    }
}
