//! Business logic services

pub mod borrowings;
pub mod dashboard;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub borrowings: borrowings::BorrowingsService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            borrowings: borrowings::BorrowingsService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
