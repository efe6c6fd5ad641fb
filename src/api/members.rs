//! Member API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::member::{CreateMember, MemberDetails, UpdateMember},
};

use super::{CreateResponse, MessageResponse};

/// List all members with membership type names
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "Member list", body = Vec<MemberDetails>)
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MemberDetails>>> {
    let members = state.repository.members.list().await?;
    Ok(Json(members))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = MemberDetails),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MemberDetails>> {
    let member = state.repository.members.get_by_id(id).await?;
    Ok(Json(member))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 200, description = "Member created", body = CreateResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email or phone already registered")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMember>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let member = state.repository.members.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Member added successfully".to_string(),
        id: member.id,
    }))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MessageResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMember>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.members.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Member updated successfully".to_string(),
    }))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.members.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Member deleted successfully".to_string(),
    }))
}
