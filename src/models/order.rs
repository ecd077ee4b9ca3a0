use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::orders;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: String,
    pub status: String,
}

/// Body of create and update requests. The order date is not part of it:
/// the service assigns it at creation and never rewrites it on update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewOrder {
    pub customer_id: i32,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub customer_id: i32,
    pub order_date: String,
    pub status: String,
}
