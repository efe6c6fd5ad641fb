//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique suffix so repeated runs don't trip unique constraints
fn unique() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

async fn create_book(client: &Client, quantity: i32) -> i64 {
    create_titled_book(client, "Test Book", quantity).await
}

async fn create_titled_book(client: &Client, title: &str, quantity: i32) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": "Test Author",
            "isbn": format!("T-{}", unique() % 100_000_000_000_000),
            "quantity": quantity
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

async fn create_member(client: &Client) -> i64 {
    let n = unique();
    let response = client
        .post(format!("{}/members", BASE_URL))
        .json(&json!({
            "name": "Test Member",
            "email": format!("member{}@example.com", n),
            "phone": format!("{}", n % 1_000_000_000_000_000)
        }))
        .send()
        .await
        .expect("Failed to create member");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No member ID")
}

async fn book_quantity(client: &Client, book_id: i64) -> i64 {
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch book");
    let body: Value = response.json().await.expect("Failed to parse response");
    body["quantity"].as_i64().expect("No quantity")
}

async fn cleanup(client: &Client, entity: &str, id: i64) {
    let _ = client
        .delete(format!("{}/{}/{}", BASE_URL, entity, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_publisher_crud() {
    let client = Client::new();
    let n = unique();

    // Create
    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&json!({
            "name": "Test Publisher",
            "email": format!("publisher{}@example.com", n)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No publisher ID");

    // Update
    let response = client
        .put(format!("{}/publishers/{}", BASE_URL, id))
        .json(&json!({
            "name": "Renamed Publisher",
            "email": format!("publisher{}@example.com", n)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Read back
    let response = client
        .get(format!("{}/publishers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Renamed Publisher");

    // Delete, then the row is gone
    let response = client
        .delete(format!("{}/publishers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/publishers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_member_invalid_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/members", BASE_URL))
        .json(&json!({
            "name": "Bad Email",
            "email": "not-an-email",
            "phone": format!("{}", unique() % 1_000_000_000_000_000)
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
#[ignore]
async fn test_borrow_nonexistent_book() {
    let client = Client::new();
    let member_id = create_member(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": 999_999_999,
            "due_date": "2030-01-15"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    cleanup(&client, "members", member_id).await;
}

#[tokio::test]
#[ignore]
async fn test_due_date_roundtrip() {
    let client = Client::new();
    let book_id = create_book(&client, 3).await;
    let member_id = create_member(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "due_date": "2030-06-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrowing_id = body["id"].as_i64().expect("No borrowing ID");

    let response = client
        .get(format!("{}/borrowings/{}", BASE_URL, borrowing_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["due_date"], "2030-06-15");
    assert!(body["return_date"].is_null());

    cleanup(&client, "borrowings", borrowing_id).await;
    cleanup(&client, "members", member_id).await;
    cleanup(&client, "books", book_id).await;
}

/// The single-copy scenario: borrow exhausts the stock, a second borrow is
/// rejected without side effects, and returning restores the copy.
#[tokio::test]
#[ignore]
async fn test_single_copy_lifecycle() {
    let client = Client::new();
    let book_id = create_book(&client, 1).await;
    let member_id = create_member(&client).await;

    // Borrow the only copy
    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "borrow_date": "2030-01-01",
            "due_date": "2030-01-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrowing_id = body["id"].as_i64().expect("No borrowing ID");

    assert_eq!(book_quantity(&client, book_id).await, 0);

    // A second borrow must fail and leave the quantity untouched
    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "due_date": "2030-01-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());

    assert_eq!(book_quantity(&client, book_id).await, 0);

    // Return the copy
    let response = client
        .put(format!("{}/borrowings/{}", BASE_URL, borrowing_id))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "borrow_date": "2030-01-01",
            "due_date": "2030-01-15",
            "return_date": "2030-01-10"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    assert_eq!(book_quantity(&client, book_id).await, 1);

    cleanup(&client, "borrowings", borrowing_id).await;
    cleanup(&client, "members", member_id).await;
    cleanup(&client, "books", book_id).await;
}

/// Flipping return_date on and off must net to zero quantity change
#[tokio::test]
#[ignore]
async fn test_return_unreturn_roundtrip() {
    let client = Client::new();
    let book_id = create_book(&client, 2).await;
    let member_id = create_member(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "borrow_date": "2030-02-01",
            "due_date": "2030-02-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrowing_id = body["id"].as_i64().expect("No borrowing ID");

    assert_eq!(book_quantity(&client, book_id).await, 1);

    let update = |return_date: Value| {
        json!({
            "member_id": member_id,
            "book_id": book_id,
            "borrow_date": "2030-02-01",
            "due_date": "2030-02-15",
            "return_date": return_date
        })
    };

    // Return: +1
    client
        .put(format!("{}/borrowings/{}", BASE_URL, borrowing_id))
        .json(&update(json!("2030-02-10")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 2);

    // Un-return: -1, no availability re-check
    client
        .put(format!("{}/borrowings/{}", BASE_URL, borrowing_id))
        .json(&update(Value::Null))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 1);

    cleanup(&client, "borrowings", borrowing_id).await;
    cleanup(&client, "members", member_id).await;
    cleanup(&client, "books", book_id).await;
}

/// Deleting an open borrowing restores the copy; deleting a closed one doesn't
#[tokio::test]
#[ignore]
async fn test_delete_borrowing_quantity() {
    let client = Client::new();
    let book_id = create_book(&client, 2).await;
    let member_id = create_member(&client).await;

    // Open borrowing: delete puts the copy back
    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "due_date": "2030-03-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let open_id = body["id"].as_i64().expect("No borrowing ID");
    assert_eq!(book_quantity(&client, book_id).await, 1);

    client
        .delete(format!("{}/borrowings/{}", BASE_URL, open_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 2);

    // Closed borrowing: delete leaves the quantity alone
    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "due_date": "2030-03-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let closed_id = body["id"].as_i64().expect("No borrowing ID");

    client
        .put(format!("{}/borrowings/{}", BASE_URL, closed_id))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "due_date": "2030-03-15",
            "return_date": "2030-03-10"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 2);

    client
        .delete(format!("{}/borrowings/{}", BASE_URL, closed_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 2);

    cleanup(&client, "members", member_id).await;
    cleanup(&client, "books", book_id).await;
}

/// A borrowing created already closed (non-null return_date) still takes a
/// copy off the shelf, and deleting the closed record does not put it back
#[tokio::test]
#[ignore]
async fn test_create_returned_borrowing_still_decrements() {
    let client = Client::new();
    let book_id = create_book(&client, 2).await;
    let member_id = create_member(&client).await;

    let response = client
        .post(format!("{}/borrowings", BASE_URL))
        .json(&json!({
            "member_id": member_id,
            "book_id": book_id,
            "borrow_date": "2030-04-01",
            "due_date": "2030-04-15",
            "return_date": "2030-04-10"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrowing_id = body["id"].as_i64().expect("No borrowing ID");

    assert_eq!(book_quantity(&client, book_id).await, 1);

    // Closed on arrival, so deletion restores nothing
    client
        .delete(format!("{}/borrowings/{}", BASE_URL, borrowing_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book_quantity(&client, book_id).await, 1);

    cleanup(&client, "members", member_id).await;
    cleanup(&client, "books", book_id).await;
}

/// Duplicate catalog entries of one title pool their borrow counts in the
/// top-books list instead of ranking per entry
#[tokio::test]
#[ignore]
async fn test_top_books_pool_duplicate_titles() {
    let client = Client::new();
    let title = format!("Shared Title {}", unique());
    let first = create_titled_book(&client, &title, 5).await;
    let second = create_titled_book(&client, &title, 5).await;
    let member_id = create_member(&client).await;

    for book_id in [first, second] {
        for _ in 0..3 {
            let response = client
                .post(format!("{}/borrowings", BASE_URL))
                .json(&json!({
                    "member_id": member_id,
                    "book_id": book_id,
                    "due_date": "2030-05-15"
                }))
                .send()
                .await
                .expect("Failed to send request");
            assert!(response.status().is_success());
        }
    }

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let top_books = body["top_books"].as_array().expect("No top_books array");

    let entries: Vec<&Value> = top_books
        .iter()
        .filter(|entry| entry["title"] == title.as_str())
        .collect();
    assert!(entries.len() <= 1, "one title must occupy at most one slot");
    if let Some(entry) = entries.first() {
        assert_eq!(entry["count"].as_i64(), Some(6));
    }

    // Deleting the books cascades their borrowings away
    cleanup(&client, "books", first).await;
    cleanup(&client, "books", second).await;
    cleanup(&client, "members", member_id).await;
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_books"].is_number());
    assert!(body["total_members"].is_number());
    assert!(body["total_borrowings"].is_number());
    assert!(body["overdue_borrowings"].is_number());
    assert!(body["books_by_genre"].is_array());
    assert!(body["top_books"].is_array());
    assert!(body["recent_borrowings"].is_array());
}
