//! Staff API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

use super::{CreateResponse, MessageResponse};

/// List all staff members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    responses(
        (status = 200, description = "Staff list", body = Vec<Staff>)
    )
)]
pub async fn list_staff(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Staff>>> {
    let staff = state.repository.staff.list().await?;
    Ok(Json(staff))
}

/// Get staff member by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member details", body = Staff),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn get_staff_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Staff>> {
    let staff_member = state.repository.staff.get_by_id(id).await?;
    Ok(Json(staff_member))
}

/// Create a staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = CreateStaff,
    responses(
        (status = 200, description = "Staff member created", body = CreateResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email or phone already registered")
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStaff>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let staff_member = state.repository.staff.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Staff member added successfully".to_string(),
        id: staff_member.id,
    }))
}

/// Update a staff member
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = MessageResponse),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateStaff>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.staff.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Staff member updated successfully".to_string(),
    }))
}

/// Delete a staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageResponse),
        (status = 404, description = "Staff member not found")
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.staff.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Staff member deleted successfully".to_string(),
    }))
}
