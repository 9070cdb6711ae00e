use std::fmt;
use std::sync::Arc;
use validator::{Validate, ValidationError};

use crate::models::money::{Money, MoneyError};

/// Anything that can sit in the cart: a plain catalog product or a
/// decoration wrapped around one.
pub trait Product: fmt::Debug + Send + Sync {
    fn name(&self) -> String;
    fn price(&self) -> Money;
    fn color(&self) -> String;
}

/// Products are shared by reference so that wrapping never touches the
/// wrapped value.
pub type SharedProduct = Arc<dyn Product>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Phone,
    Thermos,
    Bracelet,
}

// request dto
#[derive(Debug, Clone, Validate)]
pub struct NewProduct {
    pub kind: ProductKind,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Color must be 1-50 characters"))]
    #[validate(custom = "validate_not_blank")]
    pub color: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub base_price: f64,
}

impl NewProduct {
    pub fn new(kind: ProductKind, name: &str, color: &str, base_price: f64) -> Self {
        Self {
            kind,
            name: name.to_string(),
            color: color.to_string(),
            base_price,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("Value must not be blank"));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] MoneyError),
}

/// A catalog product. Its fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseProduct {
    kind: ProductKind,
    name: String,
    color: String,
    base_price: Money,
}

impl BaseProduct {
    pub fn new(request: NewProduct) -> Result<Self, ProductError> {
        request.validate()?;
        let base_price = Money::from_dollars(request.base_price)?;

        Ok(Self {
            kind: request.kind,
            name: request.name.trim().to_string(),
            color: request.color.trim().to_string(),
            base_price,
        })
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }
}

impl Product for BaseProduct {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> Money {
        self.base_price
    }

    fn color(&self) -> String {
        self.color.clone()
    }
}
