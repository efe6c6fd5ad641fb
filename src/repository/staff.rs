//! Staff repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, Staff, UpdateStaff},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all staff members ordered by name
    pub async fn list(&self) -> AppResult<Vec<Staff>> {
        let rows = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get staff member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Create a staff member and return the new row
    pub async fn create(&self, data: &CreateStaff) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (name, email, phone, role, hire_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.role)
        .bind(data.hire_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a staff member
    pub async fn update(&self, id: i32, data: &UpdateStaff) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff
            SET name = $1, email = $2, phone = $3, role = $4, hire_date = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.role)
        .bind(data.hire_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Delete a staff member; borrowings they handled keep a null staff id
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff member {} not found", id)));
        }
        Ok(())
    }
}
