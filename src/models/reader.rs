//! Reader model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Resource, Validated};

/// Reader record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Reader {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Reader {
    const NAME: &'static str = "reader";
}

/// Create reader request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateReader {
    #[validate(
        required(message = "Email address is required."),
        email(message = "Email address must be valid.")
    )]
    pub email: Option<String>,
    #[validate(required(message = "Name is required."))]
    pub name: Option<String>,
    #[validate(
        required(message = "Password is required."),
        length(min = 8, message = "Password must be a minimum of 8 characters.")
    )]
    pub password: Option<String>,
}

impl Validated for CreateReader {
    const FIELDS: &'static [&'static str] = &["email", "name", "password"];
}

/// Update reader request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReader {
    #[validate(email(message = "Email address must be valid."))]
    pub email: Option<String>,
    pub name: Option<String>,
    #[validate(length(min = 8, message = "Password must be a minimum of 8 characters."))]
    pub password: Option<String>,
}

impl Validated for UpdateReader {
    const FIELDS: &'static [&'static str] = &["email", "name", "password"];
}
