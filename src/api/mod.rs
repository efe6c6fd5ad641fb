//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrowings;
pub mod dashboard;
pub mod fines;
pub mod health;
pub mod members;
pub mod membership_types;
pub mod openapi;
pub mod publishers;
pub mod reservations;
pub mod staff;

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for successful updates and deletes
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body for successful creates, carrying the new row id
#[derive(Serialize, ToSchema)]
pub struct CreateResponse {
    pub message: String,
    pub id: i32,
}
