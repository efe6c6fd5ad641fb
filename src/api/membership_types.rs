//! Membership type API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::membership_type::{CreateMembershipType, MembershipType, UpdateMembershipType},
};

use super::{CreateResponse, MessageResponse};

/// List all membership types
#[utoipa::path(
    get,
    path = "/membershiptypes",
    tag = "membership_types",
    responses(
        (status = 200, description = "Membership type list", body = Vec<MembershipType>)
    )
)]
pub async fn list_membership_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MembershipType>>> {
    let types = state.repository.membership_types.list().await?;
    Ok(Json(types))
}

/// Get membership type by ID
#[utoipa::path(
    get,
    path = "/membershiptypes/{id}",
    tag = "membership_types",
    params(("id" = i32, Path, description = "Membership type ID")),
    responses(
        (status = 200, description = "Membership type details", body = MembershipType),
        (status = 404, description = "Membership type not found")
    )
)]
pub async fn get_membership_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MembershipType>> {
    let membership_type = state.repository.membership_types.get_by_id(id).await?;
    Ok(Json(membership_type))
}

/// Create a membership type
#[utoipa::path(
    post,
    path = "/membershiptypes",
    tag = "membership_types",
    request_body = CreateMembershipType,
    responses(
        (status = 200, description = "Membership type created", body = CreateResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_membership_type(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMembershipType>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let membership_type = state.repository.membership_types.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Membership type added successfully".to_string(),
        id: membership_type.id,
    }))
}

/// Update a membership type
#[utoipa::path(
    put,
    path = "/membershiptypes/{id}",
    tag = "membership_types",
    params(("id" = i32, Path, description = "Membership type ID")),
    request_body = UpdateMembershipType,
    responses(
        (status = 200, description = "Membership type updated", body = MessageResponse),
        (status = 404, description = "Membership type not found")
    )
)]
pub async fn update_membership_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMembershipType>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.membership_types.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Membership type updated successfully".to_string(),
    }))
}

/// Delete a membership type
#[utoipa::path(
    delete,
    path = "/membershiptypes/{id}",
    tag = "membership_types",
    params(("id" = i32, Path, description = "Membership type ID")),
    responses(
        (status = 200, description = "Membership type deleted", body = MessageResponse),
        (status = 404, description = "Membership type not found")
    )
)]
pub async fn delete_membership_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.membership_types.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Membership type deleted successfully".to_string(),
    }))
}
