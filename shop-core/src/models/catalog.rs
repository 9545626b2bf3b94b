use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::common::format_currency;

/// A purchasable good with a fixed unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub unit_price: Decimal,
}

pub const COOKIE: CatalogItem = CatalogItem {
    name: "Cookie",
    unit_price: Decimal::from_parts(150, 0, 0, false, 2),
};

pub const SANDWICH: CatalogItem = CatalogItem {
    name: "Sandwich",
    unit_price: Decimal::from_parts(400, 0, 0, false, 2),
};

pub const WATER: CatalogItem = CatalogItem {
    name: "Water",
    unit_price: Decimal::from_parts(100, 0, 0, false, 2),
};

/// Renders the label shown next to the quantity field, e.g. `"Cookie - $1.50"`.
impl fmt::Display for CatalogItem {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_currency(self.unit_price))
    }
}

/// Identifies one of the three catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Cookie,
    Sandwich,
    Water,
}

impl ItemKind {
    /// All items in the order they appear on the shop form.
    pub const ALL: [ItemKind; 3] = [ItemKind::Cookie, ItemKind::Sandwich, ItemKind::Water];

    pub fn item(&self) -> &'static CatalogItem {
        match self {
            Self::Cookie => &COOKIE,
            Self::Sandwich => &SANDWICH,
            Self::Water => &WATER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cookie => "cookie",
            Self::Sandwich => "sandwich",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unit_prices_match_the_menu() {
        assert_eq!(COOKIE.unit_price, dec!(1.50));
        assert_eq!(SANDWICH.unit_price, dec!(4.00));
        assert_eq!(WATER.unit_price, dec!(1.00));
    }

    #[test]
    fn labels_show_name_and_price() {
        assert_eq!(COOKIE.to_string(), "Cookie - $1.50");
        assert_eq!(SANDWICH.to_string(), "Sandwich - $4.00");
        assert_eq!(WATER.to_string(), "Water - $1.00");
    }

    #[test]
    fn item_kinds_are_listed_in_form_order() {
        let names: Vec<&str> = ItemKind::ALL.iter().map(|k| k.item().name).collect();

        assert_eq!(names, vec!["Cookie", "Sandwich", "Water"]);
    }
}
