//! Tests for the shell's blocking API client against a live server.
//!
//! The server runs on its own thread with its own runtime so the client side
//! stays synchronous, like the shell binary.

use simple_shop::models::product::NewProduct;
use simple_shop::shell::api::{ApiClient, ApiError};
use simple_shop::shell::format_product;
use simple_shop::{build_server, create_pool, run_migrations};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind a probe socket")
        .local_addr()
        .expect("Failed to read the probe socket address")
        .port()
}

/// Start the API on a background thread and block until it accepts
/// connections.
fn spawn_app() -> (String, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    let database_url = dir.path().join("shop.db").to_string_lossy().into_owned();

    let pool = create_pool(&database_url);
    run_migrations(&pool);

    let port = free_port();
    let server = build_server(pool, "127.0.0.1", port).expect("Failed to bind the shop service");
    thread::spawn(move || {
        actix_web::rt::System::new()
            .block_on(server)
            .expect("server stopped with an error");
    });

    let deadline = Instant::now() + Duration::from_secs(5);
    while TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(
            Instant::now() < deadline,
            "server did not become ready within 5 s"
        );
        thread::sleep(Duration::from_millis(50));
    }

    (format!("http://127.0.0.1:{}", port), dir)
}

#[test]
fn create_then_list_round_trips_through_the_client() {
    let (base, _db) = spawn_app();
    let client = ApiClient::new(base);

    let created = client
        .create_product(&NewProduct {
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 10,
        })
        .expect("create failed");
    assert_eq!(created.id, 1);

    let products = client.list_products().expect("list failed");
    assert_eq!(products.len(), 1);
    assert_eq!(
        format_product(&products[0]),
        "Name: Widget, Price: 9.99, Quantity: 10"
    );
}

#[test]
fn create_reports_non_ok_statuses() {
    let (base, _db) = spawn_app();
    // Aim the client below a path that does not exist.
    let client = ApiClient::new(format!("{}/nope", base));

    let result = client.create_product(&NewProduct {
        name: "Widget".to_string(),
        price: 9.99,
        quantity: 10,
    });
    match result {
        Err(ApiError::UnexpectedStatus(status)) => assert_eq!(status, 404),
        other => panic!("expected UnexpectedStatus, got {:?}", other.map(|p| p.id)),
    }
}

#[test]
fn listing_fails_cleanly_when_the_server_is_down() {
    let port = free_port();
    let client = ApiClient::new(format!("http://127.0.0.1:{}", port));
    assert!(client.list_products().is_err());
}
