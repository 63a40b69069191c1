//! Business logic services

pub mod authors;
pub mod books;
pub mod genres;
pub mod readers;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub readers: readers::ReadersService,
    pub books: books::BooksService,
    pub genres: genres::GenresService,
    pub authors: authors::AuthorsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            readers: readers::ReadersService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            repository,
        }
    }

    /// Whether the database answers
    pub async fn is_ready(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Readiness check failed: {}", e);
                false
            }
        }
    }
}
