use serde::Serialize;

use crate::models::money::Money;
use crate::models::product::SharedProduct;

pub const EMPTY_CART_MESSAGE: &str = "You haven't added anything to your shopping cart yet.";

/// Snapshot of one cart item, as displayed and as printed on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub position: usize,
    pub name: String,
    pub color: String,
    pub price: Money,
}

/// The customer's selection. Items are only ever appended.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<SharedProduct>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: SharedProduct) {
        self.items.push(item);
    }

    /// Live sum of every item's current price.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SharedProduct] {
        &self.items
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| CartLine {
                position: i + 1,
                name: item.name(),
                color: item.color(),
                price: item.price(),
            })
            .collect()
    }
}
