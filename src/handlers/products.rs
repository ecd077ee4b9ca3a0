use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::db::{last_insert_rowid, DbPool};
use crate::errors::AppError;
use crate::handlers::MessageResponse;
use crate::models::product::{NewProduct, Product};
use crate::schema::products;

/// POST /products/
///
/// Creates a product and returns the stored row. The insert and the
/// confirming read run as two separate statements on the same pooled
/// connection; no transaction wraps them.
#[utoipa::path(
    post,
    path = "/products/",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
    let new_product = body.into_inner();

    let product = web::block(move || {
        let mut conn = pool.get()?;

        diesel::insert_into(products::table)
            .values(&new_product)
            .execute(&mut conn)?;

        let id: i64 = diesel::select(last_insert_rowid()).get_result(&mut conn)?;
        let product = products::table
            .filter(products::id.eq(id as i32))
            .select(Product::as_select())
            .first(&mut conn)?;
        Ok::<_, AppError>(product)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(product))
}

/// GET /products/
///
/// Returns every product in storage order.
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = products::table
            .select(Product::as_select())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn get_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let product = web::block(move || {
        let mut conn = pool.get()?;
        let product = products::table
            .filter(products::id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(product)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match product {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(AppError::NotFound("Product not found")),
    }
}

/// PUT /products/{id}
///
/// Replaces name, price and quantity unconditionally. The UPDATE itself is a
/// no-op for a missing id; absence is only detected by the re-read after it.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn update_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let changes = body.into_inner();

    let product = web::block(move || {
        let mut conn = pool.get()?;

        diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&changes)
            .execute(&mut conn)?;

        let product = products::table
            .filter(products::id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(product)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match product {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(AppError::NotFound("Product not found")),
    }
}

/// DELETE /products/{id}
///
/// Idempotent: responds 200 whether or not a row matched.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;
        diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}
