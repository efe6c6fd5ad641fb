//! Repository layer for database operations

pub mod books;
pub mod borrowings;
pub mod fines;
pub mod members;
pub mod membership_types;
pub mod publishers;
pub mod reservations;
pub mod staff;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub publishers: publishers::PublishersRepository,
    pub books: books::BooksRepository,
    pub membership_types: membership_types::MembershipTypesRepository,
    pub members: members::MembersRepository,
    pub staff: staff::StaffRepository,
    pub borrowings: borrowings::BorrowingsRepository,
    pub fines: fines::FinesRepository,
    pub reservations: reservations::ReservationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            publishers: publishers::PublishersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            membership_types: membership_types::MembershipTypesRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            fines: fines::FinesRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            pool,
        }
    }
}
