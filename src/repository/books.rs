//! Books repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDetails, CreateBook, DuplicateGroup, UpdateBook},
};

const BOOK_DETAILS_SELECT: &str = r#"
    SELECT b.id, b.title, b.author, b.isbn, b.genre, b.published_year,
           b.publisher_id, b.quantity, p.name AS publisher_name
    FROM books b
    LEFT JOIN publishers p ON b.publisher_id = p.id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with publisher name, ordered by title
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        let query = format!("{} ORDER BY b.title", BOOK_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BookDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID with publisher name
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookDetails> {
        let query = format!("{} WHERE b.id = $1", BOOK_DETAILS_SELECT);
        sqlx::query_as::<_, BookDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book and return the new row
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookDetails> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author, isbn, genre, published_year, publisher_id, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.isbn)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.publisher_id)
        .bind(data.quantity)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a book
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<BookDetails> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author = $2, isbn = $3, genre = $4,
                published_year = $5, publisher_id = $6, quantity = $7
            WHERE id = $8
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.isbn)
        .bind(&data.genre)
        .bind(data.published_year)
        .bind(data.publisher_id)
        .bind(data.quantity)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a book; borrowings and reservations on it cascade away
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    /// Find groups of books sharing the same title and author
    pub async fn find_duplicates(&self) -> AppResult<Vec<DuplicateGroup>> {
        let groups = sqlx::query(
            r#"
            SELECT title, author, COUNT(id) AS count
            FROM books
            GROUP BY title, author
            HAVING COUNT(id) > 1
            ORDER BY title, author
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for group in groups {
            let title: String = group.get("title");
            let author: String = group.get("author");
            let count: i64 = group.get("count");

            let query = format!(
                "{} WHERE b.title = $1 AND b.author = $2 ORDER BY b.id",
                BOOK_DETAILS_SELECT
            );
            let books = sqlx::query_as::<_, BookDetails>(&query)
                .bind(&title)
                .bind(&author)
                .fetch_all(&self.pool)
                .await?;

            result.push(DuplicateGroup {
                title,
                author,
                count,
                books,
            });
        }

        Ok(result)
    }

    /// Sum of available copies across the catalog (for the dashboard)
    pub async fn total_quantity(&self) -> AppResult<i64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(quantity), 0)::bigint FROM books")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Number of catalog entries per genre, uncategorized excluded
    pub async fn count_by_genre(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT genre, COUNT(id) AS count
            FROM books
            WHERE genre IS NOT NULL
            GROUP BY genre
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("genre"), row.get("count")))
            .collect())
    }
}
