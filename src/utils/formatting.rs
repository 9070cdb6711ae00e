use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::{Cart, CartLine, Catalog, Money, Product, Receipt, EMPTY_CART_MESSAGE};

pub const SEPARATOR_WIDTH: usize = 100;

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn format_banner(title: &str) -> String {
    format!(
        "{}\n{:^width$}\n{}",
        separator(),
        style(title).bold().cyan(),
        separator(),
        width = SEPARATOR_WIDTH
    )
}

pub fn format_price(price: Money) -> String {
    style(price).green().to_string()
}

pub fn format_catalog_table(catalog: &Catalog) -> String {
    let rows: Vec<CatalogRow> = catalog
        .iter()
        .enumerate()
        .map(|(i, product)| CatalogRow {
            position: i + 1,
            color: product.color(),
            name: product.name(),
            price: product.price().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    format!("Available Products:\n{}", table)
}

fn format_line_table(lines: Vec<CartLine>) -> String {
    let rows: Vec<CartRow> = lines
        .into_iter()
        .map(|line| CartRow {
            position: line.position,
            name: line.name,
            price: line.price.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

/// Lists the cart, or says it is empty.
pub fn format_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return style(EMPTY_CART_MESSAGE).yellow().to_string();
    }

    format!(
        "Here are the products in your shopping cart:\n{}\nTotal: {}",
        format_line_table(cart.lines()),
        format_price(cart.total())
    )
}

/// The delivery sentence followed by the estimated arrival date.
pub fn format_arrival(receipt: &Receipt) -> String {
    format!(
        "Your order will arrive within {} days.\n{}: {}",
        style(receipt.delivery_days).yellow(),
        style("Estimated arrival").bold(),
        receipt.estimated_arrival.format("%Y-%m-%d")
    )
}

/// Checkout lines printed for every receipt format.
pub fn format_checkout_summary(receipt: &Receipt) -> String {
    format!(
        "Final total price of your cart: {}\n\
         Your purchase has been completed successfully, thank you!\n{}",
        format_price(receipt.total),
        format_arrival(receipt)
    )
}

pub fn format_receipt(receipt: &Receipt) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Final total price of your cart: {}\n\n",
        format_price(receipt.total)
    ));
    output.push_str(&format_line_table(receipt.lines.clone()));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}\n",
        style("Order").bold(),
        style(receipt.order_id.simple()).cyan()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Placed").bold(),
        style(format_date(&receipt.placed_at)).dim()
    ));
    output.push_str("Your purchase has been completed successfully, thank you!\n");
    output.push_str(&format_arrival(receipt));

    output
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Decoration;
    use chrono::TimeZone;

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn test_catalog_table_lists_every_product() {
        plain();
        let catalog = Catalog::standard().unwrap();
        let output = format_catalog_table(&catalog);

        assert!(output.starts_with("Available Products:"));
        for product in catalog.iter() {
            assert!(output.contains(&product.name()));
            assert!(output.contains(&product.color()));
        }
        assert!(output.contains("900.00$"));
        assert!(output.contains("30.00$"));
    }

    #[test]
    fn test_empty_cart_shows_message_not_table() {
        plain();
        let output = format_cart(&Cart::new());
        assert_eq!(output, EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_cart_lists_items_and_total() {
        plain();
        let catalog = Catalog::standard().unwrap();
        let mut cart = Cart::new();
        cart.add(Decoration::FastDelivery.wrap(catalog.get(1).unwrap()));
        cart.add(Decoration::Insurance.wrap(catalog.get(2).unwrap()));

        let output = format_cart(&cart);
        assert!(output.starts_with("Here are the products in your shopping cart:"));
        assert!(output.contains("iPhone 16 with fast delivery"));
        assert!(output.contains("905.00$"));
        assert!(output.contains("Stanley 500ml Thermos with insurance"));
        assert!(output.contains("33.00$"));
        assert!(output.contains("Total: 938.00$"));
        assert!(!output.contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_receipt_text() {
        plain();
        let catalog = Catalog::standard().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.get(5).unwrap());

        let placed_at = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let receipt = Receipt::new(&cart, 4, placed_at);
        let output = format_receipt(&receipt);

        assert!(output.contains("Final total price of your cart: 50.00$"));
        assert!(output.contains("Sunset Bracelet"));
        assert!(output.contains(&receipt.order_id.simple().to_string()));
        assert!(output.contains("Your order will arrive within 4 days.\n"));
        assert!(output.contains("Estimated arrival: 2024-03-14"));
    }

    #[test]
    fn test_checkout_summary_lines() {
        plain();
        let catalog = Catalog::standard().unwrap();
        let mut cart = Cart::new();
        cart.add(Decoration::GiftBox.wrap(catalog.get(3).unwrap()));

        let placed_at = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let receipt = Receipt::new(&cart, 10, placed_at);
        let lines: Vec<String> = format_checkout_summary(&receipt)
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "Final total price of your cart: 27.00$",
                "Your purchase has been completed successfully, thank you!",
                "Your order will arrive within 10 days.",
                "Estimated arrival: 2024-03-20",
            ]
        );
    }

    #[test]
    fn test_banner_centers_title() {
        plain();
        let banner = format_banner("Welcome");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], separator());
        assert_eq!(lines[1].trim(), "Welcome");
    }
}
