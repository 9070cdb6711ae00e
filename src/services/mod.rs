pub mod delivery;
pub mod shop_service;

pub use delivery::*;
pub use shop_service::*;
