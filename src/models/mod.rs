pub mod cart;
pub mod catalog;
pub mod decorator;
pub mod money;
pub mod product;
pub mod receipt;

// Re-exports
pub use cart::{Cart, CartLine, EMPTY_CART_MESSAGE};
pub use catalog::{Catalog, CatalogError, MAX_PRODUCTS};
pub use decorator::{Decorated, Decoration};
pub use money::{Money, MoneyError};
pub use product::{BaseProduct, NewProduct, Product, ProductError, ProductKind, SharedProduct};
pub use receipt::Receipt;
