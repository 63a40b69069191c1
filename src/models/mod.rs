//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod genre;
pub mod reader;

pub use author::Author;
pub use book::Book;
pub use genre::Genre;
pub use reader::Reader;

use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

/// A catalog resource, named by its singular noun in error messages
pub trait Resource {
    const NAME: &'static str;
}

/// Request bodies whose `validator` failures are reported in field declaration order.
pub trait Validated: Validate {
    /// Field names, in declaration order
    const FIELDS: &'static [&'static str];

    fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::Validation(ordered_messages(&errors, Self::FIELDS)))
    }
}

/// Flatten validation errors into their messages, ordered by `fields`
pub fn ordered_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|list| list.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}
