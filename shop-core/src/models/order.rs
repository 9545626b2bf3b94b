use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::{InvalidReason, PricingError};
use crate::models::ItemKind;

/// The untouched text of the three quantity fields.
///
/// Nothing is validated here; parsing happens on demand in
/// [`OrderQuantities::parse`] every time a total is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuantities {
    pub cookie: String,
    pub sandwich: String,
    pub water: String,
}

impl RawQuantities {
    pub fn new(
        cookie: impl Into<String>,
        sandwich: impl Into<String>,
        water: impl Into<String>,
    ) -> Self {
        Self {
            cookie: cookie.into(),
            sandwich: sandwich.into(),
            water: water.into(),
        }
    }

    pub fn get(
        &self,
        kind: ItemKind,
    ) -> &str {
        match kind {
            ItemKind::Cookie => &self.cookie,
            ItemKind::Sandwich => &self.sandwich,
            ItemKind::Water => &self.water,
        }
    }
}

impl fmt::Display for RawQuantities {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "cookie={:?} sandwich={:?} water={:?}",
            self.cookie, self.sandwich, self.water
        )
    }
}

/// Validated, non-negative whole quantities for each catalog item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuantities {
    pub cookie: Decimal,
    pub sandwich: Decimal,
    pub water: Decimal,
}

impl OrderQuantities {
    /// Parses all three fields, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] for the first field that is not
    /// a non-negative integer.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shop_core::{OrderQuantities, RawQuantities};
    ///
    /// let order = OrderQuantities::parse(&RawQuantities::new("2", " 1 ", "3")).unwrap();
    /// assert_eq!(
    ///     (order.cookie, order.sandwich, order.water),
    ///     (Decimal::from(2), Decimal::ONE, Decimal::from(3))
    /// );
    ///
    /// assert!(OrderQuantities::parse(&RawQuantities::new("2", "", "3")).is_err());
    /// ```
    pub fn parse(raw: &RawQuantities) -> Result<Self, PricingError> {
        let parse_field = |kind: ItemKind| {
            parse_quantity(raw.get(kind)).map_err(|reason| PricingError::InvalidInput {
                item: kind,
                input: raw.get(kind).to_string(),
                reason,
            })
        };

        Ok(Self {
            cookie: parse_field(ItemKind::Cookie)?,
            sandwich: parse_field(ItemKind::Sandwich)?,
            water: parse_field(ItemKind::Water)?,
        })
    }

    pub fn get(
        &self,
        kind: ItemKind,
    ) -> Decimal {
        match kind {
            ItemKind::Cookie => self.cookie,
            ItemKind::Sandwich => self.sandwich,
            ItemKind::Water => self.water,
        }
    }
}

/// Parses one quantity field as a non-negative integer.
///
/// Accepts surrounding whitespace, an optional sign, decimal digits from any
/// script (`"٣"` and `"３"` are both 3), and single underscores between digits
/// (`"1_000"`). Empty text, fractions and anything else that is not an integer
/// are rejected, as are negative values. `"-0"` is zero.
///
/// The only size limit is what a [`Decimal`] can hold.
pub fn parse_quantity(input: &str) -> Result<Decimal, InvalidReason> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = digit_values(body).ok_or(InvalidReason::NotAnInteger)?;
    let value = digits
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, d| {
            acc.checked_mul(Decimal::TEN)?.checked_add(Decimal::from(d))
        })
        .ok_or(InvalidReason::OutOfRange)?;

    if negative && !value.is_zero() {
        return Err(InvalidReason::Negative);
    }
    Ok(value)
}

/// Returns the value of every digit, or `None` when the text is not a
/// well-formed run of decimal digits with optional `_` separators.
fn digit_values(s: &str) -> Option<Vec<u32>> {
    let mut out = Vec::with_capacity(s.len());
    let mut prev_was_digit = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(d) = decimal_digit_value(c) {
            out.push(d);
            prev_was_digit = true;
        } else if c == '_'
            && prev_was_digit
            && chars.peek().is_some_and(|&next| decimal_digit_value(next).is_some())
        {
            prev_was_digit = false;
        } else {
            return None;
        }
    }

    if out.is_empty() { None } else { Some(out) }
}

/// Code points of the digit zero of every Unicode `Nd` (decimal number) run.
/// Each run holds the ten digits 0..=9 consecutively.
const DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `c` if it is a decimal digit in any script.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let code = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= code).checked_sub(1)?;
    let offset = code - DIGIT_ZEROS[run];
    (offset < 10).then_some(offset)
}
