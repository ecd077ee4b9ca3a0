use thiserror::Error;

use crate::models::product::NewProduct;

/// Raw text captured from the add-product inputs.
#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid price or quantity format.")]
    InvalidNumber,
}

impl ProductForm {
    /// Validate the raw inputs and build the create request.
    ///
    /// Emptiness is checked on the text as typed; price and quantity
    /// tolerate surrounding whitespace.
    pub fn parse(&self) -> Result<NewProduct, FormError> {
        if self.name.is_empty() || self.price.is_empty() || self.quantity.is_empty() {
            return Err(FormError::MissingFields);
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber)?;
        let quantity: i32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber)?;
        Ok(NewProduct {
            name: self.name.clone(),
            price,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn parses_a_complete_form() {
        let new_product = form("Widget", "9.99", "10").parse().unwrap();
        assert_eq!(new_product.name, "Widget");
        assert_eq!(new_product.price, 9.99);
        assert_eq!(new_product.quantity, 10);
    }

    #[test]
    fn any_empty_field_is_rejected() {
        assert_eq!(form("", "9.99", "10").parse(), Err(FormError::MissingFields));
        assert_eq!(form("Widget", "", "10").parse(), Err(FormError::MissingFields));
        assert_eq!(form("Widget", "9.99", "").parse(), Err(FormError::MissingFields));
    }

    #[test]
    fn non_numeric_price_or_quantity_is_rejected() {
        assert_eq!(
            form("Widget", "cheap", "10").parse(),
            Err(FormError::InvalidNumber)
        );
        assert_eq!(
            form("Widget", "9.99", "lots").parse(),
            Err(FormError::InvalidNumber)
        );
        // Quantity is a whole number.
        assert_eq!(
            form("Widget", "9.99", "10.5").parse(),
            Err(FormError::InvalidNumber)
        );
    }

    #[test]
    fn numbers_tolerate_surrounding_whitespace() {
        let new_product = form("Widget", " 9.99 ", " 10 ").parse().unwrap();
        assert_eq!(new_product.price, 9.99);
        assert_eq!(new_product.quantity, 10);
    }

    #[test]
    fn error_messages_match_the_prompts() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "All fields are required."
        );
        assert_eq!(
            FormError::InvalidNumber.to_string(),
            "Invalid price or quantity format."
        );
    }
}
