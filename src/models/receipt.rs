use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::cart::{Cart, CartLine};
use crate::models::money::Money;

/// Summary of a completed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub delivery_days: u32,
    pub estimated_arrival: NaiveDate,
}

impl Receipt {
    pub fn new(cart: &Cart, delivery_days: u32, placed_at: DateTime<Utc>) -> Self {
        let estimated_arrival =
            placed_at.date_naive() + Duration::days(i64::from(delivery_days));

        Self {
            order_id: Uuid::new_v4(),
            placed_at,
            lines: cart.lines(),
            total: cart.total(),
            delivery_days,
            estimated_arrival,
        }
    }

    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Catalog;
    use crate::models::decorator::Decoration;
    use chrono::TimeZone;

    #[test]
    fn test_receipt_captures_cart_and_arrival_date() {
        let catalog = Catalog::standard().unwrap();
        let mut cart = Cart::new();
        cart.add(Decoration::FastDelivery.wrap(catalog.get(1).unwrap()));
        cart.add(catalog.get(3).unwrap());

        let placed_at = Utc.with_ymd_and_hms(2024, 12, 28, 15, 30, 0).unwrap();
        let receipt = Receipt::new(&cart, 7, placed_at);

        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.total, Money::from_cents(92_500));
        assert_eq!(receipt.delivery_days, 7);
        assert_eq!(
            receipt.estimated_arrival,
            NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
        );
        assert_eq!(receipt.lines[0].name, "iPhone 16 with fast delivery");
    }

    #[test]
    fn test_receipt_serializes_prices_in_dollars() {
        let catalog = Catalog::standard().unwrap();
        let mut cart = Cart::new();
        cart.add(Decoration::Insurance.wrap(catalog.get(2).unwrap()));

        let placed_at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let receipt = Receipt::new(&cart, 3, placed_at);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["total"], serde_json::json!(33.0));
        assert_eq!(json["delivery_days"], 3);
        assert_eq!(json["estimated_arrival"], "2024-06-04");
        assert_eq!(json["lines"][0]["name"], "Stanley 500ml Thermos with insurance");
    }
}
