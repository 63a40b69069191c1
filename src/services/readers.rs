//! Reader management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        reader::{CreateReader, Reader, UpdateReader},
        Validated,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers_list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        self.repository.readers_get_by_id(id).await
    }

    /// Validate and create a reader, storing only the password hash
    pub async fn create(&self, data: &CreateReader) -> AppResult<Reader> {
        data.check()?;

        let password = data.password.as_deref().unwrap_or_default();
        let hash = hash_password(password)?;

        let reader = self.repository.readers_create(data, &hash).await?;
        tracing::info!(reader_id = reader.id, "Reader created");
        Ok(reader)
    }

    pub async fn update(&self, id: i32, data: &UpdateReader) -> AppResult<Reader> {
        data.check()?;

        let hash = data.password.as_deref().map(hash_password).transpose()?;
        self.repository.readers_update(id, data, hash).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.readers_delete(id).await?;
        tracing::info!(reader_id = id, "Reader deleted");
        Ok(())
    }
}

/// Hash a password with Argon2 (PHC string format)
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
