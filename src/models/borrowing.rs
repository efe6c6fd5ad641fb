//! Borrowing model and the return-state transition logic
//!
//! A borrowing with a null `return_date` is open: the physical copy is out
//! and counted against `books.quantity`. Every mutation of a borrowing row
//! goes through [`ReturnTransition`] so the book quantity and the set of
//! open borrowings never drift apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Borrowing record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Borrowing {
    pub id: i32,
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    pub borrow_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub staff_id: Option<i32>,
}

/// Borrowing with member, book and staff names attached for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowingDetails {
    pub id: i32,
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    #[schema(value_type = Option<String>, format = Date)]
    pub borrow_date: Option<NaiveDate>,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<NaiveDate>,
    pub staff_id: Option<i32>,
    pub member_name: Option<String>,
    pub book_title: Option<String>,
    pub staff_name: Option<String>,
}

/// Create borrowing request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrowing {
    pub member_id: i32,
    pub book_id: i32,
    /// Defaults to today when omitted
    #[schema(value_type = Option<String>, format = Date)]
    pub borrow_date: Option<NaiveDate>,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<NaiveDate>,
    pub staff_id: Option<i32>,
}

/// Update borrowing request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBorrowing {
    pub member_id: i32,
    pub book_id: i32,
    #[schema(value_type = Option<String>, format = Date)]
    pub borrow_date: Option<NaiveDate>,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub return_date: Option<NaiveDate>,
    pub staff_id: Option<i32>,
}

/// How a change to `return_date` affects the book's available quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTransition {
    /// Open borrowing is being closed: the copy goes back on the shelf
    Returned,
    /// Closed borrowing is being reopened: the copy goes back out.
    /// Availability is deliberately not re-checked on this branch.
    Unreturned,
    /// Both states open or both closed: quantity is untouched
    Unchanged,
}

impl ReturnTransition {
    /// Classify the stored return date against the requested one
    pub fn from_dates(before: Option<NaiveDate>, after: Option<NaiveDate>) -> Self {
        match (before, after) {
            (None, Some(_)) => ReturnTransition::Returned,
            (Some(_), None) => ReturnTransition::Unreturned,
            _ => ReturnTransition::Unchanged,
        }
    }

    /// Signed adjustment to apply to `books.quantity`
    pub fn quantity_delta(self) -> i32 {
        match self {
            ReturnTransition::Returned => 1,
            ReturnTransition::Unreturned => -1,
            ReturnTransition::Unchanged => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    #[test]
    fn returning_increments() {
        let t = ReturnTransition::from_dates(None, Some(day(10)));
        assert_eq!(t, ReturnTransition::Returned);
        assert_eq!(t.quantity_delta(), 1);
    }

    #[test]
    fn unreturning_decrements() {
        let t = ReturnTransition::from_dates(Some(day(10)), None);
        assert_eq!(t, ReturnTransition::Unreturned);
        assert_eq!(t.quantity_delta(), -1);
    }

    #[test]
    fn both_null_is_noop() {
        let t = ReturnTransition::from_dates(None, None);
        assert_eq!(t, ReturnTransition::Unchanged);
        assert_eq!(t.quantity_delta(), 0);
    }

    #[test]
    fn changing_return_date_is_noop() {
        // Correcting an already-recorded return date must not touch quantity
        let t = ReturnTransition::from_dates(Some(day(10)), Some(day(12)));
        assert_eq!(t, ReturnTransition::Unchanged);
        assert_eq!(t.quantity_delta(), 0);
    }

    #[test]
    fn double_flip_nets_zero() {
        let returned = ReturnTransition::from_dates(None, Some(day(10)));
        let unreturned = ReturnTransition::from_dates(Some(day(10)), None);
        assert_eq!(returned.quantity_delta() + unreturned.quantity_delta(), 0);
    }
}
