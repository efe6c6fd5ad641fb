//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::borrowing::BorrowingDetails};

/// Aggregate counts and top-lists for the dashboard
#[derive(Serialize, ToSchema)]
pub struct DashboardStats {
    /// Sum of available copies across the catalog
    pub total_books: i64,
    /// Total registered members
    pub total_members: i64,
    /// All borrowing records, open or closed
    pub total_borrowings: i64,
    /// Open borrowings past their due date
    pub overdue_borrowings: i64,
    /// Catalog entries per genre
    pub books_by_genre: Vec<GenreCount>,
    /// Five most borrowed books
    pub top_books: Vec<TopBook>,
    /// Five most recently opened borrowings
    pub recent_borrowings: Vec<BorrowingDetails>,
}

#[derive(Serialize, ToSchema)]
pub struct GenreCount {
    pub genre: String,
    pub count: i64,
}

#[derive(Serialize, ToSchema)]
pub struct TopBook {
    pub title: String,
    pub count: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.dashboard.get_stats().await?;
    Ok(Json(stats))
}
