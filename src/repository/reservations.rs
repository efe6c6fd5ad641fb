//! Reservations repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, ReservationDetails, UpdateReservation},
};

const RESERVATION_DETAILS_SELECT: &str = r#"
    SELECT r.id, r.member_id, r.book_id, r.reservation_date, r.status,
           m.name AS member_name, b.title AS book_title
    FROM reservations r
    LEFT JOIN members m ON r.member_id = m.id
    LEFT JOIN books b ON r.book_id = b.id
"#;

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all reservations with related names, most recent first
    pub async fn list(&self) -> AppResult<Vec<ReservationDetails>> {
        let query = format!(
            "{} ORDER BY r.reservation_date DESC",
            RESERVATION_DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, ReservationDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get reservation by ID with related names
    pub async fn get_by_id(&self, id: i32) -> AppResult<ReservationDetails> {
        let query = format!("{} WHERE r.id = $1", RESERVATION_DETAILS_SELECT);
        sqlx::query_as::<_, ReservationDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Create a reservation and return the new row
    pub async fn create(&self, data: &CreateReservation) -> AppResult<ReservationDetails> {
        let reservation_date = data
            .reservation_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let status = data.status.as_deref().unwrap_or("Pending");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reservations (member_id, book_id, reservation_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(reservation_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a reservation
    pub async fn update(&self, id: i32, data: &UpdateReservation) -> AppResult<ReservationDetails> {
        let status = data.status.as_deref().unwrap_or("Pending");

        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET member_id = $1, book_id = $2, reservation_date = $3, status = $4
            WHERE id = $5
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(data.reservation_date)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reservation {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a reservation
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reservation {} not found", id)));
        }
        Ok(())
    }
}
