use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::db::{last_insert_rowid, DbPool};
use crate::errors::AppError;
use crate::handlers::MessageResponse;
use crate::models::order_item::{NewOrderItem, NewOrderItemRow, OrderItem};
use crate::schema::{order_items, products};

/// POST /order-items/
///
/// Stores the product's current price alongside the line so the row keeps
/// the price at order time. Resolving that price is the one existence check
/// in the service: an unknown product id means there is nothing to snapshot,
/// so the request fails with 404 and no row is written. The order id is not
/// checked, like every other cross-entity reference.
#[utoipa::path(
    post,
    path = "/order-items/",
    request_body = NewOrderItem,
    responses(
        (status = 200, description = "Order item created", body = OrderItem),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn create_order_item(
    pool: web::Data<DbPool>,
    body: web::Json<NewOrderItem>,
) -> Result<HttpResponse, AppError> {
    let new_item = body.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;

        let price = products::table
            .filter(products::id.eq(new_item.product_id))
            .select(products::price)
            .first::<f64>(&mut conn)
            .optional()?;
        let Some(price) = price else {
            return Err(AppError::NotFound("Product not found"));
        };

        diesel::insert_into(order_items::table)
            .values(&NewOrderItemRow {
                order_id: new_item.order_id,
                product_id: new_item.product_id,
                quantity: new_item.quantity,
                price,
            })
            .execute(&mut conn)?;

        let id: i64 = diesel::select(last_insert_rowid()).get_result(&mut conn)?;
        let item = order_items::table
            .filter(order_items::id.eq(id as i32))
            .select(OrderItem::as_select())
            .first(&mut conn)?;
        Ok::<_, AppError>(item)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(item))
}

/// GET /order-items/
#[utoipa::path(
    get,
    path = "/order-items/",
    responses(
        (status = 200, description = "All order items", body = [OrderItem]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = order_items::table
            .select(OrderItem::as_select())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /order-items/{id}
#[utoipa::path(
    get,
    path = "/order-items/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item found", body = OrderItem),
        (status = 404, description = "Order item not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn get_order_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;
        let item = order_items::table
            .filter(order_items::id.eq(item_id))
            .select(OrderItem::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(item)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match item {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound("Order item not found")),
    }
}

/// PUT /order-items/{id}
///
/// Replaces the order/product references and the quantity. The price column
/// is left untouched: it records the price at order time, and re-resolving
/// it here would erase exactly that.
#[utoipa::path(
    put,
    path = "/order-items/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    request_body = NewOrderItem,
    responses(
        (status = 200, description = "Order item updated", body = OrderItem),
        (status = 404, description = "Order item not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn update_order_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NewOrderItem>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let changes = body.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;

        diesel::update(order_items::table.filter(order_items::id.eq(item_id)))
            .set((
                order_items::order_id.eq(changes.order_id),
                order_items::product_id.eq(changes.product_id),
                order_items::quantity.eq(changes.quantity),
            ))
            .execute(&mut conn)?;

        let item = order_items::table
            .filter(order_items::id.eq(item_id))
            .select(OrderItem::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(item)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match item {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(AppError::NotFound("Order item not found")),
    }
}

/// DELETE /order-items/{id}
#[utoipa::path(
    delete,
    path = "/order-items/{id}",
    params(("id" = i32, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item deleted", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn delete_order_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;
        diesel::delete(order_items::table.filter(order_items::id.eq(item_id)))
            .execute(&mut conn)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order item deleted".to_string(),
    }))
}

/// GET /order-items/order/{order_id}
///
/// Lines belonging to one order; an empty array when the order has none.
/// A missing order reads the same way, since nothing checks it exists.
#[utoipa::path(
    get,
    path = "/order-items/order/{order_id}",
    params(("order_id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order items for the order", body = [OrderItem]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items_by_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .select(OrderItem::as_select())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /order-items/product/{product_id}
#[utoipa::path(
    get,
    path = "/order-items/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Order items referencing the product", body = [OrderItem]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items_by_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = order_items::table
            .filter(order_items::product_id.eq(product_id))
            .select(OrderItem::as_select())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}
