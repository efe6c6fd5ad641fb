//! Reservation API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::reservation::{CreateReservation, ReservationDetails, UpdateReservation},
};

use super::{CreateResponse, MessageResponse};

/// List all reservations with member and book names
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    responses(
        (status = 200, description = "Reservation list", body = Vec<ReservationDetails>)
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let reservations = state.repository.reservations.list().await?;
    Ok(Json(reservations))
}

/// Get reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ReservationDetails),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationDetails>> {
    let reservation = state.repository.reservations.get_by_id(id).await?;
    Ok(Json(reservation))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 200, description = "Reservation created", body = CreateResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateReservation>,
) -> AppResult<Json<CreateResponse>> {
    data.validate()?;
    let reservation = state.repository.reservations.create(&data).await?;
    Ok(Json(CreateResponse {
        message: "Reservation added successfully".to_string(),
        id: reservation.id,
    }))
}

/// Update a reservation
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservation,
    responses(
        (status = 200, description = "Reservation updated", body = MessageResponse),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateReservation>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()?;
    state.repository.reservations.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Reservation updated successfully".to_string(),
    }))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.reservations.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Reservation deleted successfully".to_string(),
    }))
}
