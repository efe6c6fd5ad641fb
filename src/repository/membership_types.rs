//! Membership types repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::membership_type::{CreateMembershipType, MembershipType, UpdateMembershipType},
};

#[derive(Clone)]
pub struct MembershipTypesRepository {
    pool: Pool<Postgres>,
}

impl MembershipTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all membership types ordered by name
    pub async fn list(&self) -> AppResult<Vec<MembershipType>> {
        let rows =
            sqlx::query_as::<_, MembershipType>("SELECT * FROM membership_types ORDER BY type_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get membership type by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MembershipType> {
        sqlx::query_as::<_, MembershipType>("SELECT * FROM membership_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Membership type {} not found", id)))
    }

    /// Create a membership type and return the new row
    pub async fn create(&self, data: &CreateMembershipType) -> AppResult<MembershipType> {
        let row = sqlx::query_as::<_, MembershipType>(
            r#"
            INSERT INTO membership_types (type_name, duration_months, fee)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.type_name)
        .bind(data.duration_months)
        .bind(data.fee)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a membership type
    pub async fn update(&self, id: i32, data: &UpdateMembershipType) -> AppResult<MembershipType> {
        sqlx::query_as::<_, MembershipType>(
            r#"
            UPDATE membership_types
            SET type_name = $1, duration_months = $2, fee = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.type_name)
        .bind(data.duration_months)
        .bind(data.fee)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Membership type {} not found", id)))
    }

    /// Delete a membership type; members keep their rows with a null type
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM membership_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Membership type {} not found", id)));
        }
        Ok(())
    }
}
