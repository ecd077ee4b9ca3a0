use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::products;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// Body of create and update requests; doubles as the insert and changeset
/// shape since updates replace every mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Insertable, AsChangeset, ToSchema)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_the_wire_field_names() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 10,
        };
        let json = serde_json::to_value(&product).expect("serialize failed");
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Widget", "price": 9.99, "quantity": 10})
        );
    }
}
