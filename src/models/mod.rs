//! Data models for Libris

pub mod book;
pub mod borrowing;
pub mod fine;
pub mod member;
pub mod membership_type;
pub mod publisher;
pub mod reservation;
pub mod staff;

// Re-export commonly used types
pub use book::{Book, BookDetails};
pub use borrowing::{Borrowing, BorrowingDetails, ReturnTransition};
pub use fine::FineDetails;
pub use member::MemberDetails;
pub use membership_type::MembershipType;
pub use publisher::Publisher;
pub use reservation::ReservationDetails;
pub use staff::Staff;
