//! Borrowing lifecycle service
//!
//! Thin coordination layer over the borrowings repository, which owns the
//! transactional coupling of borrowing rows to book quantity.

use crate::{
    error::AppResult,
    models::borrowing::{BorrowingDetails, CreateBorrowing, UpdateBorrowing},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
}

impl BorrowingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all borrowing records with related names
    pub async fn list(&self) -> AppResult<Vec<BorrowingDetails>> {
        self.repository.borrowings.list().await
    }

    /// Get a borrowing record with related names
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowingDetails> {
        self.repository.borrowings.get_by_id(id).await
    }

    /// Open a borrowing (availability-checked, decrements the book quantity)
    pub async fn create(&self, data: &CreateBorrowing) -> AppResult<i32> {
        self.repository.borrowings.create(data).await
    }

    /// Update a borrowing, reconciling the book quantity on return-state flips
    pub async fn update(&self, id: i32, data: &UpdateBorrowing) -> AppResult<()> {
        self.repository.borrowings.update(id, data).await
    }

    /// Delete a borrowing, restoring the copy if the record was still open
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.borrowings.delete(id).await
    }
}
