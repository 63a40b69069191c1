//! Author model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Resource, Validated};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    /// Author's name
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Author {
    const NAME: &'static str = "author";
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(
        required(message = "Author is required."),
        length(min = 1, message = "Author is required.")
    )]
    pub author: Option<String>,
}

impl Validated for CreateAuthor {
    const FIELDS: &'static [&'static str] = &["author"];
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 1, message = "Author is required."))]
    pub author: Option<String>,
}

impl Validated for UpdateAuthor {
    const FIELDS: &'static [&'static str] = &["author"];
}
