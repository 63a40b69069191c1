//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Resource, Validated};

/// Book record. Author and genre are free text, not references.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Book {
    const NAME: &'static str = "book";
}

/// Create book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(required(message = "Title is required."))]
    pub title: Option<String>,
    #[validate(
        required(message = "Author is required."),
        length(min = 1, message = "Author is required.")
    )]
    pub author: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
}

impl Validated for CreateBook {
    const FIELDS: &'static [&'static str] = &["title", "author", "genre", "isbn"];
}

/// Update book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author is required."))]
    pub author: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
}

impl Validated for UpdateBook {
    const FIELDS: &'static [&'static str] = &["title", "author", "genre", "isbn"];
}
