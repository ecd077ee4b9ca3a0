//! Interactive management shell for the shop API.
//!
//! Mirrors the screen layout of the desktop client: a home menu fanning out
//! to product, customer and order screens, with product entry and listing
//! wired to the HTTP API. Navigation and form parsing are kept free of I/O
//! so they can be tested directly; `bin/shell.rs` owns the terminal loop.

pub mod api;
pub mod form;
pub mod screen;

use crate::models::product::Product;

/// One line of the product listing.
pub fn format_product(product: &Product) -> String {
    format!(
        "Name: {}, Price: {}, Quantity: {}",
        product.name, product.price, product.quantity
    )
}

/// The numbered menu for a screen, one entry per line.
pub fn render_menu(screen: screen::Screen) -> String {
    let mut out = format!("--- {} ---\n", screen.title());
    for (i, button) in screen::buttons(screen).iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, button.label));
    }
    out
}
