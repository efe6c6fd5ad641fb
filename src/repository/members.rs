//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, MemberDetails, UpdateMember},
};

const MEMBER_DETAILS_SELECT: &str = r#"
    SELECT m.id, m.name, m.email, m.phone, m.address, m.membership_type_id,
           m.membership_date, mt.type_name AS membership_type_name
    FROM members m
    LEFT JOIN membership_types mt ON m.membership_type_id = mt.id
"#;

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members with membership type name, ordered by name
    pub async fn list(&self) -> AppResult<Vec<MemberDetails>> {
        let query = format!("{} ORDER BY m.name", MEMBER_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, MemberDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get member by ID with membership type name
    pub async fn get_by_id(&self, id: i32) -> AppResult<MemberDetails> {
        let query = format!("{} WHERE m.id = $1", MEMBER_DETAILS_SELECT);
        sqlx::query_as::<_, MemberDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Create a member and return the new row
    pub async fn create(&self, data: &CreateMember) -> AppResult<MemberDetails> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO members (name, email, phone, address, membership_type_id, membership_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(data.membership_type_id)
        .bind(data.membership_date)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a member
    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<MemberDetails> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = $1, email = $2, phone = $3, address = $4,
                membership_type_id = $5, membership_date = $6
            WHERE id = $7
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(data.membership_type_id)
        .bind(data.membership_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a member; their borrowings and reservations cascade away
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }

    /// Count all members (for the dashboard)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
