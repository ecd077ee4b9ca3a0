use std::io::{self, BufRead, Write};

use simple_shop::shell::api::ApiClient;
use simple_shop::shell::form::ProductForm;
use simple_shop::shell::screen::{select, Action, Screen};
use simple_shop::shell::{format_product, render_menu};

const API_BASE_URL: &str = "http://localhost:8080";

fn main() {
    let client = ApiClient::new(API_BASE_URL);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Shop Management");
    let mut current = Screen::Home;

    loop {
        print!("{}", render_menu(current));
        let Some(line) = prompt(&mut lines, "Choice") else {
            break;
        };
        let Some(action) = line.trim().parse().ok().and_then(|n| select(current, n)) else {
            println!("Invalid choice.");
            continue;
        };
        match action {
            Action::Goto(next) => {
                current = next;
                if current == Screen::ViewProducts {
                    show_products(&client);
                }
            }
            Action::SubmitProduct => {
                let Some(form) = read_form(&mut lines) else {
                    break;
                };
                current = submit_product(&client, &form, current);
            }
            Action::Unavailable => println!("This option is not available yet."),
        }
    }
}

/// Collect the three add-product inputs; `None` means stdin closed.
fn read_form(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<ProductForm> {
    Some(ProductForm {
        name: prompt(lines, "Product Name")?,
        price: prompt(lines, "Product Price")?,
        quantity: prompt(lines, "Product Quantity")?,
    })
}

/// Validate and submit the form, returning the screen to land on.
fn submit_product(client: &ApiClient, form: &ProductForm, current: Screen) -> Screen {
    let new_product = match form.parse() {
        Ok(new_product) => new_product,
        Err(err) => {
            println!("{err}");
            return current;
        }
    };
    match client.create_product(&new_product) {
        Ok(_) => {
            println!("Product added successfully");
            Screen::Products
        }
        Err(_) => {
            println!("Failed to add product");
            current
        }
    }
}

fn show_products(client: &ApiClient) {
    match client.list_products() {
        Ok(products) if products.is_empty() => println!("No products available."),
        Ok(products) => {
            for product in &products {
                println!("{}", format_product(product));
            }
        }
        Err(err) => {
            eprintln!("Error fetching products: {err}");
            println!("Failed to load products. Please try again later.");
        }
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{label}: ");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}
