//! Fines repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::fine::{CreateFine, FineDetails, UpdateFine},
};

const FINE_DETAILS_SELECT: &str = r#"
    SELECT f.id, f.borrowing_id, f.amount, f.paid,
           m.name AS member_name, bk.title AS book_title,
           b.borrow_date, b.due_date
    FROM fines f
    LEFT JOIN borrowings b ON f.borrowing_id = b.id
    LEFT JOIN members m ON b.member_id = m.id
    LEFT JOIN books bk ON b.book_id = bk.id
"#;

#[derive(Clone)]
pub struct FinesRepository {
    pool: Pool<Postgres>,
}

impl FinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all fines with borrowing details, unpaid first then by due date
    pub async fn list(&self) -> AppResult<Vec<FineDetails>> {
        let query = format!("{} ORDER BY f.paid, b.due_date", FINE_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, FineDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get fine by ID with borrowing details
    pub async fn get_by_id(&self, id: i32) -> AppResult<FineDetails> {
        let query = format!("{} WHERE f.id = $1", FINE_DETAILS_SELECT);
        sqlx::query_as::<_, FineDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fine record {} not found", id)))
    }

    /// Create a fine and return the new row
    pub async fn create(&self, data: &CreateFine) -> AppResult<FineDetails> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO fines (borrowing_id, amount, paid)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(data.borrowing_id)
        .bind(data.amount)
        .bind(data.paid)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a fine
    pub async fn update(&self, id: i32, data: &UpdateFine) -> AppResult<FineDetails> {
        let result = sqlx::query(
            "UPDATE fines SET borrowing_id = $1, amount = $2, paid = $3 WHERE id = $4",
        )
        .bind(data.borrowing_id)
        .bind(data.amount)
        .bind(data.paid)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Fine record {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a fine
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM fines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Fine record {} not found", id)));
        }
        Ok(())
    }
}
