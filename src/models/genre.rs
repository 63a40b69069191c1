//! Genre model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Resource, Validated};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub genre: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Genre {
    const NAME: &'static str = "genre";
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateGenre {
    #[validate(
        required(message = "Genre is required."),
        length(min = 1, message = "Genre is required.")
    )]
    pub genre: Option<String>,
}

impl Validated for CreateGenre {
    const FIELDS: &'static [&'static str] = &["genre"];
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGenre {
    #[validate(length(min = 1, message = "Genre is required."))]
    pub genre: Option<String>,
}

impl Validated for UpdateGenre {
    const FIELDS: &'static [&'static str] = &["genre"];
}
