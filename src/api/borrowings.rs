//! Borrowing API endpoints
//!
//! These routes go through the borrowings service so every mutation keeps
//! the owning book's quantity in step with the record's return state.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::borrowing::{BorrowingDetails, CreateBorrowing, UpdateBorrowing},
};

use super::{CreateResponse, MessageResponse};

/// List all borrowing records with member, book and staff names
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "Borrowing list", body = Vec<BorrowingDetails>)
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BorrowingDetails>>> {
    let borrowings = state.services.borrowings.list().await?;
    Ok(Json(borrowings))
}

/// Get borrowing record by ID
#[utoipa::path(
    get,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Borrowing details", body = BorrowingDetails),
        (status = 404, description = "Borrowing record not found")
    )
)]
pub async fn get_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowingDetails>> {
    let borrowing = state.services.borrowings.get_by_id(id).await?;
    Ok(Json(borrowing))
}

/// Open a borrowing (borrow a book)
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    request_body = CreateBorrowing,
    responses(
        (status = 200, description = "Borrowing created", body = CreateResponse),
        (status = 400, description = "Book has no available copies"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBorrowing>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let id = state.services.borrowings.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Borrowing record added successfully".to_string(),
        id,
    }))
}

/// Update a borrowing record (including returning or re-opening it)
#[utoipa::path(
    put,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing ID")),
    request_body = UpdateBorrowing,
    responses(
        (status = 200, description = "Borrowing updated", body = MessageResponse),
        (status = 404, description = "Borrowing record not found")
    )
)]
pub async fn update_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBorrowing>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.services.borrowings.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Borrowing record updated successfully".to_string(),
    }))
}

/// Delete a borrowing record
#[utoipa::path(
    delete,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i32, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Borrowing deleted", body = MessageResponse),
        (status = 404, description = "Borrowing record not found")
    )
)]
pub async fn delete_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowings.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Borrowing record deleted successfully".to_string(),
    }))
}
