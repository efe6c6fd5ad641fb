//! Borrowings repository: the inventory ledger
//!
//! Every mutating operation here pairs the borrowing write with the book
//! quantity adjustment in a single transaction, so the invariant
//! `quantity == copies owned - open borrowings` survives any interleaving
//! of borrow, return, un-return and delete.

use chrono::Utc;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        borrowing::{
            Borrowing, BorrowingDetails, CreateBorrowing, ReturnTransition, UpdateBorrowing,
        },
    },
};

const BORROWING_DETAILS_SELECT: &str = r#"
    SELECT b.id, b.member_id, b.book_id, b.borrow_date, b.due_date,
           b.return_date, b.staff_id,
           m.name AS member_name, bk.title AS book_title, s.name AS staff_name
    FROM borrowings b
    LEFT JOIN members m ON b.member_id = m.id
    LEFT JOIN books bk ON b.book_id = bk.id
    LEFT JOIN staff s ON b.staff_id = s.id
"#;

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all borrowings with related names, most recent first
    pub async fn list(&self) -> AppResult<Vec<BorrowingDetails>> {
        let query = format!("{} ORDER BY b.borrow_date DESC", BORROWING_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BorrowingDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get borrowing by ID with related names
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowingDetails> {
        let query = format!("{} WHERE b.id = $1", BORROWING_DETAILS_SELECT);
        sqlx::query_as::<_, BorrowingDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", id)))
    }

    /// Open a borrowing: insert the record and take one copy off the shelf.
    ///
    /// The decrement happens even when the record arrives already returned
    /// (a non-null `return_date` on create). That matches the historical
    /// behaviour this system replaces; the update path never reconciles it.
    pub async fn create(&self, data: &CreateBorrowing) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(data.book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", data.book_id)))?;

        if book.quantity <= 0 {
            return Err(AppError::Unavailable(
                "Book is not available for borrowing".to_string(),
            ));
        }

        sqlx::query("UPDATE books SET quantity = quantity - 1 WHERE id = $1")
            .bind(data.book_id)
            .execute(&mut *tx)
            .await?;

        let borrow_date = data
            .borrow_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO borrowings (member_id, book_id, borrow_date, due_date, return_date, staff_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(borrow_date)
        .bind(data.due_date)
        .bind(data.return_date)
        .bind(data.staff_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(borrowing_id = id, book_id = data.book_id, "borrowing opened");
        Ok(id)
    }

    /// Update a borrowing, adjusting the book quantity when the return
    /// state flips. The adjustment targets the book the record pointed at
    /// before the update, and re-opening skips the availability check.
    pub async fn update(&self, id: i32, data: &UpdateBorrowing) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", id)))?;

        let transition = ReturnTransition::from_dates(current.return_date, data.return_date);
        let delta = transition.quantity_delta();

        if delta != 0 {
            if let Some(book_id) = current.book_id {
                sqlx::query("UPDATE books SET quantity = quantity + $1 WHERE id = $2")
                    .bind(delta)
                    .bind(book_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        sqlx::query(
            r#"
            UPDATE borrowings
            SET member_id = $1, book_id = $2, borrow_date = $3,
                due_date = $4, return_date = $5, staff_id = $6
            WHERE id = $7
            "#,
        )
        .bind(data.member_id)
        .bind(data.book_id)
        .bind(data.borrow_date)
        .bind(data.due_date)
        .bind(data.return_date)
        .bind(data.staff_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(borrowing_id = id, ?transition, "borrowing updated");
        Ok(())
    }

    /// Delete a borrowing. An open record puts its copy back on the shelf
    /// before the row goes; a closed one already did.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", id)))?;

        if current.return_date.is_none() {
            if let Some(book_id) = current.book_id {
                sqlx::query("UPDATE books SET quantity = quantity + 1 WHERE id = $1")
                    .bind(book_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        sqlx::query("DELETE FROM borrowings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(borrowing_id = id, "borrowing deleted");
        Ok(())
    }

    /// Count all borrowings, open or closed (for the dashboard)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count open borrowings past their due date (for the dashboard)
    pub async fn count_overdue(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM borrowings WHERE return_date IS NULL AND due_date < CURRENT_DATE",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Most borrowed books (for the dashboard). Grouped by title so
    /// duplicate catalog entries of the same book pool their counts.
    pub async fn top_books(&self, limit: i64) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT bk.title, COUNT(b.id) AS borrow_count
            FROM books bk
            JOIN borrowings b ON bk.id = b.book_id
            GROUP BY bk.title
            ORDER BY borrow_count DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("title"), row.get("borrow_count")))
            .collect())
    }

    /// Most recently opened borrowings with related names (for the dashboard)
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<BorrowingDetails>> {
        let query = format!(
            "{} ORDER BY b.borrow_date DESC LIMIT $1",
            BORROWING_DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, BorrowingDetails>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
