mod catalog;
mod order;

pub use catalog::{COOKIE, CatalogItem, ItemKind, SANDWICH, WATER};
pub use order::{OrderQuantities, RawQuantities, parse_quantity};
