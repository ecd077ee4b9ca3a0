pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod schema;
pub mod shell;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// Collection endpoints keep their trailing slash (`POST /products/`), item
/// endpoints take the numeric id as the last segment. The caller is
/// responsible for `.await`-ing (or `tokio::spawn`-ing) the returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .service(
                web::scope("/products")
                    .route("/", web::post().to(handlers::products::create_product))
                    .route("/", web::get().to(handlers::products::list_products))
                    .route("/{id}", web::get().to(handlers::products::get_product))
                    .route("/{id}", web::put().to(handlers::products::update_product))
                    .route("/{id}", web::delete().to(handlers::products::delete_product)),
            )
            .service(
                web::scope("/customers")
                    .route("/", web::post().to(handlers::customers::create_customer))
                    .route("/", web::get().to(handlers::customers::list_customers))
                    .route("/{id}", web::get().to(handlers::customers::get_customer))
                    .route("/{id}", web::put().to(handlers::customers::update_customer))
                    .route("/{id}", web::delete().to(handlers::customers::delete_customer)),
            )
            .service(
                web::scope("/orders")
                    .route("/", web::post().to(handlers::orders::create_order))
                    .route("/", web::get().to(handlers::orders::list_orders))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route("/{id}", web::put().to(handlers::orders::update_order))
                    .route("/{id}", web::delete().to(handlers::orders::delete_order)),
            )
            .service(
                web::scope("/order-items")
                    .route("/", web::post().to(handlers::order_items::create_order_item))
                    .route("/", web::get().to(handlers::order_items::list_order_items))
                    .route(
                        "/order/{order_id}",
                        web::get().to(handlers::order_items::list_order_items_by_order),
                    )
                    .route(
                        "/product/{product_id}",
                        web::get().to(handlers::order_items::list_order_items_by_product),
                    )
                    .route("/{id}", web::get().to(handlers::order_items::get_order_item))
                    .route("/{id}", web::put().to(handlers::order_items::update_order_item))
                    .route("/{id}", web::delete().to(handlers::order_items::delete_order_item)),
            )
            .service(
                web::scope("/sales").route("/total", web::get().to(handlers::sales::total_sales)),
            )
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
