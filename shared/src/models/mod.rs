//! Domain models

mod delivery;
mod product;
mod request_item;

pub use delivery::DeliveryOption;
pub use product::{Product, ProductType};
pub use request_item::{AddItemOptions, RequestItem};
