//! Publisher API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher, UpdatePublisher},
};

use super::{CreateResponse, MessageResponse};

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "Publisher list", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state.repository.publishers.list().await?;
    Ok(Json(publishers))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.repository.publishers.get_by_id(id).await?;
    Ok(Json(publisher))
}

/// Create a publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = CreatePublisher,
    responses(
        (status = 200, description = "Publisher created", body = CreateResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePublisher>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let publisher = state.repository.publishers.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Publisher added successfully".to_string(),
        id: publisher.id,
    }))
}

/// Update a publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = UpdatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = MessageResponse),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePublisher>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.publishers.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Publisher updated successfully".to_string(),
    }))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher deleted", body = MessageResponse),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.publishers.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Publisher deleted successfully".to_string(),
    }))
}
