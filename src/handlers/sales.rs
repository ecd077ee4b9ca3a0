use actix_web::{web, HttpResponse};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::schema::order_items;

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalSalesResponse {
    /// SUM(quantity * price) over every order item; null when there are no
    /// rows to sum (SQL SUM semantics, passed through as-is).
    pub total_sales: Option<f64>,
}

/// GET /sales/total
#[utoipa::path(
    get,
    path = "/sales/total",
    responses(
        (status = 200, description = "Aggregate revenue across all order items", body = TotalSalesResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sales"
)]
pub async fn total_sales(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let total = web::block(move || {
        let mut conn = pool.get()?;
        let total = order_items::table
            .select(sql::<Nullable<Double>>("SUM(quantity * price)"))
            .get_result::<Option<f64>>(&mut conn)?;
        Ok::<_, AppError>(total)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(TotalSalesResponse { total_sales: total }))
}
