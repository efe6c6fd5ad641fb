//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member with the membership type name attached for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MemberDetails {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub membership_type_id: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    pub membership_date: Option<NaiveDate>,
    pub membership_type_name: Option<String>,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "must be 1-15 characters"))]
    pub phone: String,
    pub address: Option<String>,
    pub membership_type_id: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    pub membership_date: Option<NaiveDate>,
}

/// Update member request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 15, message = "must be 1-15 characters"))]
    pub phone: String,
    pub address: Option<String>,
    pub membership_type_id: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    pub membership_date: Option<NaiveDate>,
}
