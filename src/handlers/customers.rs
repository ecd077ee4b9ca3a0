use actix_web::{web, HttpResponse};
use diesel::prelude::*;

use crate::db::{last_insert_rowid, DbPool};
use crate::errors::AppError;
use crate::handlers::MessageResponse;
use crate::models::customer::{Customer, NewCustomer};
use crate::schema::customers;

/// POST /customers/
///
/// The email column is UNIQUE; a duplicate surfaces as the store's
/// constraint failure, i.e. an untranslated 500.
#[utoipa::path(
    post,
    path = "/customers/",
    request_body = NewCustomer,
    responses(
        (status = 200, description = "Customer created", body = Customer),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<NewCustomer>,
) -> Result<HttpResponse, AppError> {
    let new_customer = body.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;

        diesel::insert_into(customers::table)
            .values(&new_customer)
            .execute(&mut conn)?;

        let id: i64 = diesel::select(last_insert_rowid()).get_result(&mut conn)?;
        let customer = customers::table
            .filter(customers::id.eq(id as i32))
            .select(Customer::as_select())
            .first(&mut conn)?;
        Ok::<_, AppError>(customer)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customer))
}

/// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows = customers::table
            .select(Customer::as_select())
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;
        let customer = customers::table
            .filter(customers::id.eq(customer_id))
            .select(Customer::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(customer)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match customer {
        Some(customer) => Ok(HttpResponse::Ok().json(customer)),
        None => Err(AppError::NotFound("Customer not found")),
    }
}

/// PUT /customers/{id}
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = NewCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NewCustomer>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();
    let changes = body.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;

        diesel::update(customers::table.filter(customers::id.eq(customer_id)))
            .set(&changes)
            .execute(&mut conn)?;

        let customer = customers::table
            .filter(customers::id.eq(customer_id))
            .select(Customer::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, AppError>(customer)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match customer {
        Some(customer) => Ok(HttpResponse::Ok().json(customer)),
        None => Err(AppError::NotFound("Customer not found")),
    }
}

/// DELETE /customers/{id}
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;
        diesel::delete(customers::table.filter(customers::id.eq(customer_id)))
            .execute(&mut conn)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Customer deleted".to_string(),
    }))
}
