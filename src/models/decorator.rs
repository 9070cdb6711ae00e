use std::sync::Arc;

use crate::models::money::Money;
use crate::models::product::{Product, SharedProduct};

pub const FAST_DELIVERY_FEE: Money = Money::from_cents(500);
pub const GIFT_BOX_FEE: Money = Money::from_cents(700);
pub const INSURANCE_PERCENT: u64 = 110;

/// Extras a customer can put on a product before it goes in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    FastDelivery,
    GiftBox,
    Insurance,
}

impl Decoration {
    /// Menu order, numbered from 1.
    pub const ALL: [Decoration; 3] = [
        Decoration::FastDelivery,
        Decoration::GiftBox,
        Decoration::Insurance,
    ];

    /// Maps a decoration menu number to a decoration. Any number outside
    /// 1-3 means the product goes in undecorated.
    pub fn from_menu_choice(choice: i64) -> Option<Decoration> {
        match choice {
            1 => Some(Decoration::FastDelivery),
            2 => Some(Decoration::GiftBox),
            3 => Some(Decoration::Insurance),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decoration::FastDelivery => "Fast Delivery",
            Decoration::GiftBox => "Gift Box",
            Decoration::Insurance => "Insurance",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Decoration::FastDelivery => "Fast Delivery",
            Decoration::GiftBox => "Add Gift Box",
            Decoration::Insurance => "Make Insurance",
        }
    }

    fn name_suffix(self) -> &'static str {
        match self {
            Decoration::FastDelivery => " with fast delivery",
            Decoration::GiftBox => " with gift box",
            Decoration::Insurance => " with insurance",
        }
    }

    pub fn apply_price(self, price: Money) -> Money {
        match self {
            Decoration::FastDelivery => price + FAST_DELIVERY_FEE,
            Decoration::GiftBox => price + GIFT_BOX_FEE,
            Decoration::Insurance => price.scale_percent(INSURANCE_PERCENT),
        }
    }

    pub fn apply_name(self, name: &str) -> String {
        format!("{}{}", name, self.name_suffix())
    }

    /// Wraps `product` in a new decorated product; `product` itself is
    /// left as it was.
    pub fn wrap(self, product: SharedProduct) -> SharedProduct {
        Arc::new(Decorated::new(product, self))
    }
}

/// A product seen through one decoration. Name and price are recomputed
/// from the wrapped product on every call.
#[derive(Debug, Clone)]
pub struct Decorated {
    inner: SharedProduct,
    decoration: Decoration,
}

impl Decorated {
    pub fn new(inner: SharedProduct, decoration: Decoration) -> Self {
        Self { inner, decoration }
    }
}

impl Product for Decorated {
    fn name(&self) -> String {
        self.decoration.apply_name(&self.inner.name())
    }

    fn price(&self) -> Money {
        self.decoration.apply_price(self.inner.price())
    }

    fn color(&self) -> String {
        self.inner.color()
    }
}
