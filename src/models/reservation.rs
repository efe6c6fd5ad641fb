//! Reservation model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Reservation with member and book names attached for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReservationDetails {
    pub id: i32,
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    pub reservation_date: Option<NaiveDate>,
    pub status: String,
    pub member_name: Option<String>,
    pub book_title: Option<String>,
}

/// Create reservation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservation {
    pub member_id: i32,
    pub book_id: i32,
    /// Defaults to today when omitted
    #[schema(value_type = Option<String>, format = Date)]
    pub reservation_date: Option<NaiveDate>,
    /// Free-text status, defaults to "Pending"
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub status: Option<String>,
}

/// Update reservation request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReservation {
    pub member_id: i32,
    pub book_id: i32,
    #[schema(value_type = Option<String>, format = Date)]
    pub reservation_date: Option<NaiveDate>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub status: Option<String>,
}
