//! Staff model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Staff member record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub hire_date: Option<NaiveDate>,
}

/// Create staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "must be 1-15 characters"))]
    pub phone: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub role: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub hire_date: Option<NaiveDate>,
}

/// Update staff request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "must be 1-15 characters"))]
    pub phone: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub role: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub hire_date: Option<NaiveDate>,
}
