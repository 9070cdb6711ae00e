use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    models::{Cart, Catalog, Decoration, Receipt, SharedProduct},
    services::delivery::estimate_delivery_days,
};

pub const CHECKOUT_CHOICE: i64 = 0;
pub const VIEW_CART_CHOICE: i64 = 9;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShopError {
    #[error("{selection} is not on the menu: pick 1-{available}, 0 to finish or 9 to see your cart")]
    UnknownSelection { selection: i64, available: usize },

    #[error("Product {position} not found")]
    ProductNotFound { position: usize },
}

/// What a number typed at the main menu asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Checkout,
    ViewCart,
    Product(usize),
}

#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Nothing was bought.
    Farewell,
    Completed(Receipt),
}

/// One customer's visit: the catalog on offer, their cart and whether
/// they bought anything.
pub struct ShopSession {
    catalog: Catalog,
    cart: Cart,
    made_purchase: bool,
}

impl ShopSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            made_purchase: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn has_purchases(&self) -> bool {
        self.made_purchase
    }

    /// Classifies a main menu number. 0 and 9 are reserved for checkout
    /// and viewing the cart.
    pub fn select(&self, selection: i64) -> Result<MenuSelection, ShopError> {
        match selection {
            CHECKOUT_CHOICE => Ok(MenuSelection::Checkout),
            VIEW_CART_CHOICE => Ok(MenuSelection::ViewCart),
            n if n >= 1 && (n as u64) <= self.catalog.len() as u64 => {
                Ok(MenuSelection::Product(n as usize))
            }
            _ => Err(ShopError::UnknownSelection {
                selection,
                available: self.catalog.len(),
            }),
        }
    }

    pub fn product(&self, position: usize) -> Result<SharedProduct, ShopError> {
        self.catalog
            .get(position)
            .ok_or(ShopError::ProductNotFound { position })
    }

    /// Wraps `product` in `decoration` when one is chosen and appends the
    /// result to the cart. Returns what went into the cart.
    pub fn purchase(
        &mut self,
        product: SharedProduct,
        decoration: Option<Decoration>,
    ) -> SharedProduct {
        let item = match decoration {
            Some(decoration) => decoration.wrap(product),
            None => product,
        };

        self.cart.add(item.clone());
        self.made_purchase = true;

        info!(
            "Added '{}' at {} (cart total {})",
            item.name(),
            item.price(),
            self.cart.total()
        );
        item
    }

    pub fn checkout<R: Rng>(&self, rng: &mut R) -> CheckoutOutcome {
        if !self.made_purchase {
            debug!("Checkout without purchases");
            return CheckoutOutcome::Farewell;
        }

        let delivery_days = estimate_delivery_days(rng);
        let receipt = Receipt::new(&self.cart, delivery_days, Utc::now());

        info!(
            "Order {} placed: {} items, total {}, arriving in {} days",
            receipt.order_id,
            receipt.item_count(),
            receipt.total,
            receipt.delivery_days
        );
        CheckoutOutcome::Completed(receipt)
    }
}
