use utoipa::OpenApi;

use crate::handlers;
use crate::models::customer::{Customer, NewCustomer};
use crate::models::order::{NewOrder, Order};
use crate::models::order_item::{NewOrderItem, OrderItem};
use crate::models::product::{NewProduct, Product};

/// OpenAPI document served at /api-docs/openapi.json and browsable at /docs.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::customers::create_customer,
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::order_items::create_order_item,
        handlers::order_items::list_order_items,
        handlers::order_items::get_order_item,
        handlers::order_items::update_order_item,
        handlers::order_items::delete_order_item,
        handlers::order_items::list_order_items_by_order,
        handlers::order_items::list_order_items_by_product,
        handlers::sales::total_sales,
    ),
    components(schemas(
        Product,
        NewProduct,
        Customer,
        NewCustomer,
        Order,
        NewOrder,
        OrderItem,
        NewOrderItem,
        handlers::MessageResponse,
        handlers::sales::TotalSalesResponse,
    )),
    tags(
        (name = "products", description = "Product catalog CRUD"),
        (name = "customers", description = "Customer CRUD"),
        (name = "orders", description = "Order CRUD"),
        (name = "order-items", description = "Order line CRUD and lookups"),
        (name = "sales", description = "Aggregates over order items"),
    )
)]
pub struct ApiDoc;
