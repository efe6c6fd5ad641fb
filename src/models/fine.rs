//! Fine model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Fine with details of the owning borrowing attached for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FineDetails {
    pub id: i32,
    pub borrowing_id: Option<i32>,
    pub amount: f64,
    pub paid: bool,
    pub member_name: Option<String>,
    pub book_title: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub borrow_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
}

/// Create fine request (amounts are entered manually, never computed)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFine {
    pub borrowing_id: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

/// Update fine request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFine {
    pub borrowing_id: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}
