//! Membership type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Membership type record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MembershipType {
    pub id: i32,
    pub type_name: String,
    pub duration_months: i32,
    pub fee: f64,
}

/// Create membership type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMembershipType {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub type_name: String,
    #[validate(range(min = 1, message = "must be at least one month"))]
    pub duration_months: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub fee: f64,
}

/// Update membership type request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMembershipType {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub type_name: String,
    #[validate(range(min = 1, message = "must be at least one month"))]
    pub duration_months: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub fee: f64,
}
