//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    pub publisher_id: Option<i32>,
    /// Number of copies currently available for borrowing. Kept in sync
    /// with open borrowings by the borrowings service, not by a constraint.
    pub quantity: i32,
}

/// Book with the publisher name attached for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    pub publisher_id: Option<i32>,
    pub quantity: i32,
    pub publisher_name: Option<String>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub isbn: String,
    pub genre: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "must be a four digit year"))]
    pub published_year: Option<i32>,
    pub publisher_id: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i32,
}

/// Update book request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub isbn: String,
    pub genre: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "must be a four digit year"))]
    pub published_year: Option<i32>,
    pub publisher_id: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i32,
}

/// A group of catalog entries sharing the same title and author
#[derive(Debug, Serialize, ToSchema)]
pub struct DuplicateGroup {
    pub title: String,
    pub author: String,
    pub count: i64,
    pub books: Vec<BookDetails>,
}
