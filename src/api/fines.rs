//! Fine API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::fine::{CreateFine, FineDetails, UpdateFine},
};

use super::{CreateResponse, MessageResponse};

/// List all fines with borrowing details
#[utoipa::path(
    get,
    path = "/fines",
    tag = "fines",
    responses(
        (status = 200, description = "Fine list", body = Vec<FineDetails>)
    )
)]
pub async fn list_fines(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<FineDetails>>> {
    let fines = state.repository.fines.list().await?;
    Ok(Json(fines))
}

/// Get fine by ID
#[utoipa::path(
    get,
    path = "/fines/{id}",
    tag = "fines",
    params(("id" = i32, Path, description = "Fine ID")),
    responses(
        (status = 200, description = "Fine details", body = FineDetails),
        (status = 404, description = "Fine record not found")
    )
)]
pub async fn get_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<FineDetails>> {
    let fine = state.repository.fines.get_by_id(id).await?;
    Ok(Json(fine))
}

/// Create a fine
#[utoipa::path(
    post,
    path = "/fines",
    tag = "fines",
    request_body = CreateFine,
    responses(
        (status = 200, description = "Fine created", body = CreateResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_fine(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateFine>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let fine = state.repository.fines.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Fine added successfully".to_string(),
        id: fine.id,
    }))
}

/// Update a fine
#[utoipa::path(
    put,
    path = "/fines/{id}",
    tag = "fines",
    params(("id" = i32, Path, description = "Fine ID")),
    request_body = UpdateFine,
    responses(
        (status = 200, description = "Fine updated", body = MessageResponse),
        (status = 404, description = "Fine record not found")
    )
)]
pub async fn update_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateFine>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.fines.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Fine updated successfully".to_string(),
    }))
}

/// Delete a fine
#[utoipa::path(
    delete,
    path = "/fines/{id}",
    tag = "fines",
    params(("id" = i32, Path, description = "Fine ID")),
    responses(
        (status = 200, description = "Fine deleted", body = MessageResponse),
        (status = 404, description = "Fine record not found")
    )
)]
pub async fn delete_fine(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.fines.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Fine deleted successfully".to_string(),
    }))
}
