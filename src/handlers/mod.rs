pub mod customers;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sales;

use serde::Serialize;
use utoipa::ToSchema;

/// Body of the unconditional-success delete responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
