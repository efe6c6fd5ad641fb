//! Dashboard aggregation service

use crate::{
    api::dashboard::{DashboardStats, GenreCount, TopBook},
    error::AppResult,
    repository::Repository,
};

/// How many entries the top/recent dashboard lists carry
const DASHBOARD_LIST_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collect all dashboard aggregates in one response
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let total_books = self.repository.books.total_quantity().await?;
        let total_members = self.repository.members.count().await?;
        let total_borrowings = self.repository.borrowings.count().await?;
        let overdue_borrowings = self.repository.borrowings.count_overdue().await?;

        let books_by_genre = self
            .repository
            .books
            .count_by_genre()
            .await?
            .into_iter()
            .map(|(genre, count)| GenreCount { genre, count })
            .collect();

        let top_books = self
            .repository
            .borrowings
            .top_books(DASHBOARD_LIST_LIMIT)
            .await?
            .into_iter()
            .map(|(title, count)| TopBook { title, count })
            .collect();

        let recent_borrowings = self
            .repository
            .borrowings
            .recent(DASHBOARD_LIST_LIMIT)
            .await?;

        Ok(DashboardStats {
            total_books,
            total_members,
            total_borrowings,
            overdue_borrowings,
            books_by_genre,
            top_books,
            recent_borrowings,
        })
    }
}
