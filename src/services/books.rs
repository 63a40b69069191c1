//! Book catalog service

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        Validated,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.check()?;
        let book = self.repository.books_create(data).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        data.check()?;
        self.repository.books_update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
