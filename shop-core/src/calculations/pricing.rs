//! Order pricing and total display.
//!
//! # Formula
//!
//! | Item     | Unit price |
//! |----------|------------|
//! | Cookie   | $1.50      |
//! | Sandwich | $4.00      |
//! | Water    | $1.00      |
//!
//! `total = cookie × 1.50 + sandwich × 4.00 + water × 1.00`
//!
//! Every quantity must parse as a non-negative integer. If any field fails,
//! no partial total is produced and the display reads `Invalid input`.
//!
//! # Example
//!
//! ```
//! use shop_core::calculate_total;
//!
//! assert_eq!(calculate_total("2", "1", "3"), "Total: $10.00");
//! assert_eq!(calculate_total("2", "1.5", "3"), "Invalid input");
//! assert_eq!(calculate_total("-1", "0", "0"), "Invalid input");
//! ```

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use crate::calculations::common::{format_currency, round_half_up};
use crate::models::{CatalogItem, ItemKind, OrderQuantities, RawQuantities};

/// Why a quantity field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("not an integer")]
    NotAnInteger,

    #[error("quantity cannot be negative")]
    Negative,

    /// More digits than a [`Decimal`] can hold.
    #[error("quantity is too large")]
    OutOfRange,
}

/// Errors produced while pricing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A quantity field was not a non-negative integer.
    #[error("invalid {item} quantity {input:?}: {reason}")]
    InvalidInput {
        item: ItemKind,
        input: String,
        reason: InvalidReason,
    },

    /// The priced total cannot be held to the cent.
    #[error("order total exceeds {max}")]
    TotalOutOfRange { max: Decimal },
}

/// Text shown in the total label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalDisplay {
    /// Nothing calculated yet.
    #[default]
    Initial,
    Total(Decimal),
    InvalidInput,
}

impl TotalDisplay {
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TotalDisplay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "Final Total: {}", format_currency(Decimal::ZERO)),
            Self::Total(total) => write!(f, "Total: {}", format_currency(*total)),
            Self::InvalidInput => f.write_str("Invalid input"),
        }
    }
}

impl From<Result<Decimal, PricingError>> for TotalDisplay {
    fn from(result: Result<Decimal, PricingError>) -> Self {
        match result {
            Ok(total) => Self::Total(total),
            Err(_) => Self::InvalidInput,
        }
    }
}

/// Prices orders against a fixed set of catalog items.
///
/// The calculator keeps no state between calls; the same input always yields
/// the same output.
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    cookie: CatalogItem,
    sandwich: CatalogItem,
    water: CatalogItem,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(
            *ItemKind::Cookie.item(),
            *ItemKind::Sandwich.item(),
            *ItemKind::Water.item(),
        )
    }
}

impl PricingCalculator {
    pub fn new(
        cookie: CatalogItem,
        sandwich: CatalogItem,
        water: CatalogItem,
    ) -> Self {
        Self {
            cookie,
            sandwich,
            water,
        }
    }

    fn item(
        &self,
        kind: ItemKind,
    ) -> &CatalogItem {
        match kind {
            ItemKind::Cookie => &self.cookie,
            ItemKind::Sandwich => &self.sandwich,
            ItemKind::Water => &self.water,
        }
    }

    /// Largest total that still fits a [`Decimal`] with two decimal places.
    pub fn max_total() -> Decimal {
        Decimal::MAX / Decimal::ONE_HUNDRED
    }

    /// Sums quantity × unit price over every item, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::TotalOutOfRange`] when the sum is larger than
    /// [`Self::max_total`].
    pub fn total(
        &self,
        order: &OrderQuantities,
    ) -> Result<Decimal, PricingError> {
        let max = Self::max_total();

        let total = ItemKind::ALL
            .iter()
            .try_fold(Decimal::ZERO, |acc, &kind| {
                let line = order.get(kind).checked_mul(self.item(kind).unit_price)?;
                acc.checked_add(line)
            })
            .filter(|total| *total <= max)
            .ok_or(PricingError::TotalOutOfRange { max })?;

        Ok(round_half_up(total))
    }

    /// Parses the raw field text and prices the order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if any field is not a
    /// non-negative integer, or [`PricingError::TotalOutOfRange`] if the
    /// total is too large to show in cents.
    pub fn try_calculate(
        &self,
        raw: &RawQuantities,
    ) -> Result<Decimal, PricingError> {
        let order = OrderQuantities::parse(raw)?;
        self.total(&order)
    }

    /// Prices the order and converts the outcome into display text.
    ///
    /// Rejected input is logged and shown as [`TotalDisplay::InvalidInput`];
    /// the error goes no further.
    pub fn display(
        &self,
        raw: &RawQuantities,
    ) -> TotalDisplay {
        let result = self.try_calculate(raw);
        match &result {
            Ok(total) => info!(%raw, %total, "order priced"),
            Err(error) => warn!(%raw, %error, "order rejected"),
        }
        result.into()
    }
}

/// Computes the total for three raw quantity strings and returns the text to
/// display: `"Total: $X.XX"` or `"Invalid input"`.
pub fn calculate_total(
    cookie_qty_raw: &str,
    sandwich_qty_raw: &str,
    water_qty_raw: &str,
) -> String {
    let raw = RawQuantities::new(cookie_qty_raw, sandwich_qty_raw, water_qty_raw);
    PricingCalculator::default().display(&raw).text()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn order(
        cookie: u64,
        sandwich: u64,
        water: u64,
    ) -> OrderQuantities {
        OrderQuantities {
            cookie: Decimal::from(cookie),
            sandwich: Decimal::from(sandwich),
            water: Decimal::from(water),
        }
    }

    // =========================================================================
    // total tests
    // =========================================================================

    #[test]
    fn total_is_zero_for_empty_order() {
        let calc = PricingCalculator::default();

        assert_eq!(calc.total(&order(0, 0, 0)), Ok(dec!(0)));
    }

    #[test]
    fn total_weights_each_item_by_unit_price() {
        let calc = PricingCalculator::default();

        assert_eq!(calc.total(&order(1, 0, 0)), Ok(dec!(1.50)));
        assert_eq!(calc.total(&order(0, 1, 0)), Ok(dec!(4.00)));
        assert_eq!(calc.total(&order(0, 0, 1)), Ok(dec!(1.00)));
    }

    #[test]
    fn total_for_mixed_order() {
        let calc = PricingCalculator::default();

        assert_eq!(calc.total(&order(2, 1, 3)), Ok(dec!(10.00)));
        assert_eq!(calc.total(&order(3, 2, 5)), Ok(dec!(17.50)));
    }

    #[test]
    fn total_handles_largest_quantities() {
        let calc = PricingCalculator::default();

        let total = calc.total(&order(u64::MAX, u64::MAX, u64::MAX));

        assert_eq!(total, Ok(Decimal::from(u64::MAX) * dec!(6.5)));
    }

    #[test]
    fn total_rejects_sums_too_large_for_cents() {
        let calc = PricingCalculator::default();
        let huge = OrderQuantities {
            cookie: Decimal::MAX,
            sandwich: Decimal::ZERO,
            water: Decimal::ZERO,
        };

        assert_eq!(
            calc.total(&huge),
            Err(PricingError::TotalOutOfRange {
                max: PricingCalculator::max_total(),
            })
        );
    }

    #[test]
    fn total_accepts_the_largest_representable_sum() {
        let calc = PricingCalculator::default();
        let max_water = PricingCalculator::max_total().trunc();
        let order = OrderQuantities {
            cookie: Decimal::ZERO,
            sandwich: Decimal::ZERO,
            water: max_water,
        };

        assert_eq!(calc.total(&order), Ok(max_water));
        assert!(
            calc.total(&OrderQuantities {
                water: max_water + Decimal::ONE,
                ..order
            })
            .is_err()
        );
    }

    #[test]
    fn total_uses_custom_prices() {
        let calc = PricingCalculator::new(
            CatalogItem {
                name: "Cookie",
                unit_price: dec!(0.99),
            },
            CatalogItem {
                name: "Sandwich",
                unit_price: dec!(5.25),
            },
            CatalogItem {
                name: "Water",
                unit_price: dec!(0.10),
            },
        );

        assert_eq!(calc.total(&order(3, 1, 4)), Ok(dec!(8.62)));
    }

    // =========================================================================
    // try_calculate / display tests
    // =========================================================================

    #[test]
    fn try_calculate_propagates_invalid_input() {
        let calc = PricingCalculator::default();

        let err = calc
            .try_calculate(&RawQuantities::new("1", "2", "-3"))
            .unwrap_err();

        assert_eq!(
            err,
            PricingError::InvalidInput {
                item: ItemKind::Water,
                input: "-3".to_string(),
                reason: InvalidReason::Negative,
            }
        );
    }

    #[test]
    fn display_shows_total_for_valid_input() {
        let _guard = init_test_tracing();
        let calc = PricingCalculator::default();

        let shown = calc.display(&RawQuantities::new("2", "1", "3"));

        assert_eq!(shown, TotalDisplay::Total(dec!(10.00)));
        assert_eq!(shown.text(), "Total: $10.00");
    }

    #[test]
    fn display_shows_invalid_input_without_partial_total() {
        let _guard = init_test_tracing();
        let calc = PricingCalculator::default();

        let shown = calc.display(&RawQuantities::new("2", "abc", "3"));

        assert_eq!(shown, TotalDisplay::InvalidInput);
        assert_eq!(shown.text(), "Invalid input");
    }

    #[test]
    fn initial_display_matches_startup_label() {
        assert_eq!(TotalDisplay::default().text(), "Final Total: $0.00");
    }

    // =========================================================================
    // calculate_total tests
    // =========================================================================

    #[test]
    fn calculate_total_all_zero() {
        assert_eq!(calculate_total("0", "0", "0"), "Total: $0.00");
    }

    #[test]
    fn calculate_total_odd_cookie_count_keeps_cents() {
        assert_eq!(calculate_total("1", "0", "0"), "Total: $1.50");
        assert_eq!(calculate_total("3", "0", "0"), "Total: $4.50");
    }

    #[test]
    fn calculate_total_prices_quantities_beyond_u64() {
        assert_eq!(
            calculate_total("18446744073709551616", "0", "0"),
            "Total: $27670116110564327424.00"
        );
    }

    #[test]
    fn calculate_total_reads_digits_from_other_scripts() {
        assert_eq!(calculate_total("\u{663}", "0", "0"), "Total: $4.50");
        assert_eq!(calculate_total("\u{ff13}", "0", "0"), "Total: $4.50");
        assert_eq!(calculate_total("0", "\u{ff12}", "\u{663}"), "Total: $11.00");
    }

    #[test]
    fn calculate_total_shows_invalid_input_when_total_overflows() {
        assert_eq!(
            calculate_total("1000000000000000000000000000", "0", "0"),
            "Invalid input"
        );
    }

    #[test]
    fn calculate_total_rejects_each_kind_of_bad_field() {
        for (c, s, w) in [
            ("", "0", "0"),
            ("0", "abc", "0"),
            ("0", "0", "1.5"),
            ("-1", "0", "0"),
            ("0", "-2", "0"),
            ("0", "0", "-3"),
        ] {
            assert_eq!(
                calculate_total(c, s, w),
                "Invalid input",
                "inputs ({c:?}, {s:?}, {w:?})"
            );
        }
    }

    #[test]
    fn calculate_total_is_idempotent() {
        let first = calculate_total("4", "2", "7");
        let second = calculate_total("4", "2", "7");

        assert_eq!(first, "Total: $21.00");
        assert_eq!(first, second);
    }
}
