//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    books, borrowings, dashboard, fines, health, members, membership_types, publishers,
    reservations, staff,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library Management Backend REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::get_duplicate_books,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        // Membership types
        membership_types::list_membership_types,
        membership_types::get_membership_type,
        membership_types::create_membership_type,
        membership_types::update_membership_type,
        membership_types::delete_membership_type,
        // Staff
        staff::list_staff,
        staff::get_staff_member,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        // Borrowings
        borrowings::list_borrowings,
        borrowings::get_borrowing,
        borrowings::create_borrowing,
        borrowings::update_borrowing,
        borrowings::delete_borrowing,
        // Fines
        fines::list_fines,
        fines::get_fine,
        fines::create_fine,
        fines::update_fine,
        fines::delete_fine,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
        // Dashboard
        dashboard::get_stats,
    ),
    components(
        schemas(
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::CreatePublisher,
            crate::models::publisher::UpdatePublisher,
            // Books
            crate::models::book::BookDetails,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::DuplicateGroup,
            // Members
            crate::models::member::MemberDetails,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            // Membership types
            crate::models::membership_type::MembershipType,
            crate::models::membership_type::CreateMembershipType,
            crate::models::membership_type::UpdateMembershipType,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaff,
            // Borrowings
            crate::models::borrowing::BorrowingDetails,
            crate::models::borrowing::CreateBorrowing,
            crate::models::borrowing::UpdateBorrowing,
            // Fines
            crate::models::fine::FineDetails,
            crate::models::fine::CreateFine,
            crate::models::fine::UpdateFine,
            // Reservations
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservation,
            // Dashboard
            dashboard::DashboardStats,
            dashboard::GenreCount,
            dashboard::TopBook,
            // Shared
            crate::api::MessageResponse,
            crate::api::CreateResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "publishers", description = "Publisher management"),
        (name = "books", description = "Book catalog management"),
        (name = "members", description = "Member management"),
        (name = "membership_types", description = "Membership type management"),
        (name = "staff", description = "Staff management"),
        (name = "borrowings", description = "Borrowing lifecycle"),
        (name = "fines", description = "Fine management"),
        (name = "reservations", description = "Reservation management"),
        (name = "dashboard", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
