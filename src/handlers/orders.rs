use actix_web::{web, HttpResponse};
use chrono::Utc;
use diesel::prelude::*;

use crate::db::{last_insert_rowid, DbPool};
use crate::errors::AppError;
use crate::handlers::MessageResponse;
use crate::models::order::{NewOrder, NewOrderRow, Order};
use crate::schema::orders;

/// Format used for the order_date column.
const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// POST /orders/
///
/// The order date is assigned here (UTC now); the request carries only the
/// customer reference and the status string. Whether the customer exists is
/// not checked.
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order created", body = Order),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    pool: web::Data<DbPool>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, AppError> {
    let new_order = body.into_inner();

    let order = web::block(move || {
        let mut conn = pool.get()?;

        diesel::insert_into(orders::table)
            .values(&NewOrderRow {
                customer_id: new_order.customer_id,
                order_date: Utc::now().format(ORDER_DATE_FORMAT).to_string(),
                status: new_order.status,
            })
            .execute(&mut conn)?;

        let id: i64 = diesel::select(last_insert_rowid()).get_result(&mut conn)?;
        let order = orders::table
            .filter(orders::id.eq(id as i32))
            .select(Order::as_select())
            .first(&mut conn)?;
        Ok::<_, AppError>(order)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(order))
}

/// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "All orders", body = [Order]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = orders::table.select(Order::as_select()).load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || {
        let mut conn = pool.get()?;
        let order = orders::table
            .filter(orders::id.eq(order_id))
            .select(Order::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(order)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(AppError::NotFound("Order not found")),
    }
}

/// PUT /orders/{id}
///
/// Replaces the customer reference and status; the order date keeps the
/// value assigned at creation.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let changes = body.into_inner();

    let order = web::block(move || {
        let mut conn = pool.get()?;

        diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set((
                orders::customer_id.eq(changes.customer_id),
                orders::status.eq(changes.status),
            ))
            .execute(&mut conn)?;

        let order = orders::table
            .filter(orders::id.eq(order_id))
            .select(Order::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(order)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(AppError::NotFound("Order not found")),
    }
}

/// DELETE /orders/{id}
///
/// Idempotent; order items referencing the order are left in place (no
/// cascades anywhere in the schema).
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;
        diesel::delete(orders::table.filter(orders::id.eq(order_id))).execute(&mut conn)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order deleted".to_string(),
    }))
}
