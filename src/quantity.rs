//! Resource quantity parsing ("250m", "128Mi", "1.5G", "3e6").
//!
//! Quantities follow the Kubernetes resource grammar:
//!
//! ```text
//! quantity        ::= signedNumber suffix
//! signedNumber    ::= [ "+" | "-" ] number
//! number          ::= digits | digits "." digits | digits "." | "." digits
//! suffix          ::= binarySI | decimalSI | decimalExponent
//! binarySI        ::= Ki | Mi | Gi | Ti | Pi | Ei
//! decimalSI       ::= n | u | m | "" | k | M | G | T | P | E
//! decimalExponent ::= ("e" | "E") signedNumber
//! ```
//!
//! The number may be empty (`"-"`, `"m"`, `"Mi"`), in which case it reads as
//! zero; only the empty string fails outright.
//!
//! Values are kept as exact rationals so that suffix choice never affects
//! ordering: `1024Mi == 1Gi` and `1000m == 1`. After suffix expansion the
//! magnitude is rounded up to a whole number of nano units and capped at
//! `i64::MAX`, so `0.5n == 1n` and `1e30 == 1e40`.

use std::cmp::Ordering;

use num::{BigInt, BigRational, Signed, Zero};

use crate::error::{CellsortError, Result};

/// Largest decimal exponent accepted in the `e`/`E` form.
const MAX_EXPONENT: i64 = 1024;

/// Nano units per unit: the finest representable step.
const NANOS_PER_UNIT: u64 = 1_000_000_000;

/// Notation the quantity was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityFormat {
    /// Plain number or SI suffix (`m`, `k`, `M`, ...)
    DecimalSi,
    /// Binary byte prefix (`Ki`, `Mi`, `Gi`, ...)
    BinarySi,
    /// Scientific form (`1e3`, `5E-2`)
    DecimalExponent,
}

/// A parsed resource quantity.
///
/// Equality and ordering compare the exact numeric value only.
#[derive(Debug, Clone)]
pub struct Quantity {
    value: BigRational,
    format: QuantityFormat,
}

impl Quantity {
    /// Parse a quantity string.
    ///
    /// # Errors
    /// Returns [`CellsortError::Quantity`] if the string is empty, has an
    /// unknown suffix, trailing characters, or an out-of-range exponent.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CellsortError::Quantity("empty string".to_string()));
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let int_len = leading_digits(unsigned);
        let (int_part, rest) = unsigned.split_at(int_len);
        let (frac_part, suffix) = match rest.strip_prefix('.') {
            Some(after) => after.split_at(leading_digits(after)),
            None => ("", rest),
        };

        let (format, exp10, exp2) = parse_suffix(suffix)
            .ok_or_else(|| CellsortError::Quantity(format!("{s:?} has bad suffix {suffix:?}")))?;

        let frac_len = i64::try_from(frac_part.len())
            .map_err(|_| CellsortError::Quantity(format!("{s:?} is too long")))?;
        let scale = exp10 - frac_len;
        let scale_pow = u32::try_from(scale.unsigned_abs())
            .map_err(|_| CellsortError::Quantity(format!("{s:?} is out of range")))?;

        let digits = format!("{int_part}{frac_part}");
        let mantissa: BigInt = if digits.is_empty() {
            BigInt::zero()
        } else {
            digits
                .parse()
                .map_err(|_| CellsortError::Quantity(format!("{s:?} has a bad mantissa")))?
        };
        let mut numer = if negative { -mantissa } else { mantissa };
        numer <<= exp2;

        let power = BigInt::from(10u8).pow(scale_pow);
        let value = if scale >= 0 {
            BigRational::from_integer(numer * power)
        } else {
            BigRational::new(numer, power)
        };

        Ok(Self {
            value: normalize(&value),
            format,
        })
    }

    /// Notation the quantity was written in.
    pub fn format(&self) -> QuantityFormat {
        self.format
    }

    /// Exact value of the quantity.
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Quantity {}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Round the magnitude up to a whole nano unit and cap it at `i64::MAX`,
/// keeping the sign.
fn normalize(value: &BigRational) -> BigRational {
    let nano = BigInt::from(NANOS_PER_UNIT);
    let negative = value.is_negative();
    let scaled = value.abs() * BigRational::from_integer(nano.clone());
    let rounded = BigRational::new(scaled.ceil().to_integer(), nano);
    let max = BigRational::from_integer(BigInt::from(i64::MAX));
    let capped = if rounded > max { max } else { rounded };
    if negative {
        -capped
    } else {
        capped
    }
}

/// Number of leading ASCII digits (a byte count, so always a char boundary).
fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Resolve a suffix into (format, power of ten, power of two).
fn parse_suffix(suffix: &str) -> Option<(QuantityFormat, i64, usize)> {
    let decimal = |exp: i64| Some((QuantityFormat::DecimalSi, exp, 0_usize));
    let binary = |exp: usize| Some((QuantityFormat::BinarySi, 0_i64, exp));

    match suffix {
        "n" => decimal(-9),
        "u" => decimal(-6),
        "m" => decimal(-3),
        "" => decimal(0),
        "k" => decimal(3),
        "M" => decimal(6),
        "G" => decimal(9),
        "T" => decimal(12),
        "P" => decimal(15),
        "E" => decimal(18),
        "Ki" => binary(10),
        "Mi" => binary(20),
        "Gi" => binary(30),
        "Ti" => binary(40),
        "Pi" => binary(50),
        "Ei" => binary(60),
        _ => {
            let exp = suffix.strip_prefix(|c: char| c == 'e' || c == 'E')?;
            let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
            if digits.is_empty() || leading_digits(digits) != digits.len() {
                return None;
            }
            let exp: i64 = exp.parse().ok()?;
            (-MAX_EXPONENT..=MAX_EXPONENT)
                .contains(&exp)
                .then_some((QuantityFormat::DecimalExponent, exp, 0))
        }
    }
}

/// Match the `<digits>m` / `<digits>Mi` shape and return the digit run.
///
/// Reserved helper; the comparison dispatcher does not consult it.
pub fn metric_shape(s: &str) -> Option<&str> {
    let digits = s.strip_suffix("Mi").or_else(|| s.strip_suffix('m'))?;
    (!digits.is_empty() && leading_digits(digits) == digits.len()).then_some(digits)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        Quantity::parse(s).unwrap()
    }

    #[test]
    fn test_suffix_equivalence() {
        assert_eq!(q("1024Mi"), q("1Gi"));
        assert_eq!(q("1000m"), q("1"));
        assert_eq!(q("1k"), q("1e3"));
        assert_eq!(q("0.5"), q("500m"));
        assert_eq!(q(".5"), q("5e-1"));
    }

    #[test]
    fn test_ordering_ignores_string_length() {
        assert!(q("250m") < q("1"));
        assert!(q("999Mi") < q("1Gi"));
        assert!(q("1G") < q("1Gi"));
        assert!(q("-1") < q("0"));
        assert!(q("128Mi") > q("128M"));
    }

    #[test]
    fn test_formats() {
        assert_eq!(q("42").format(), QuantityFormat::DecimalSi);
        assert_eq!(q("4Ki").format(), QuantityFormat::BinarySi);
        assert_eq!(q("4E+2").format(), QuantityFormat::DecimalExponent);
    }

    #[test]
    fn test_rejects() {
        for bad in [
            "", " 1", "1 ", "node-5", "3h12m", "500ms", "1s", "5x", "5ki", "1e", "1e+", "1e5000",
            "1.2.3", "K", "-x",
        ] {
            assert!(Quantity::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_signs_and_zero() {
        assert!(q("-0").is_zero());
        assert!(q("+000").is_zero());
        assert_eq!(q("+5"), q("5"));
        assert!(q("-2Ki") < q("-1Ki"));
    }

    #[test]
    fn test_missing_number_is_zero() {
        for empty in ["-", "+", ".", "-.", "m", "Mi", "k", "E", "e3"] {
            assert!(q(empty).is_zero(), "{empty:?} should read as zero");
        }
        assert!(q("-") < q("250m"));
        assert!(q("Mi") < q("1"));
    }

    #[test]
    fn test_rounds_up_to_nano() {
        assert_eq!(q("0.5n"), q("1n"));
        assert_eq!(q("1.1n"), q("2n"));
        assert_eq!(q("-0.5n"), q("-1n"));
        assert!(q("1n") < q("1.0000000011"));
        assert!(q("0n").is_zero());
    }

    #[test]
    fn test_caps_at_i64_max() {
        assert_eq!(q("1e30"), q("1e40"));
        assert_eq!(q("16Ei"), q("9223372036854775807"));
        assert_eq!(q("-1e30"), q("-9223372036854775807"));
        assert!(q("7Ei") < q("1e30"));
        assert_eq!(q("8Ei"), q("1e30"));
    }

    #[test]
    fn test_metric_shape() {
        assert_eq!(metric_shape("250m"), Some("250"));
        assert_eq!(metric_shape("128Mi"), Some("128"));
        assert_eq!(metric_shape("128Gi"), None);
        assert_eq!(metric_shape("1.5m"), None);
        assert_eq!(metric_shape("m"), None);
        assert_eq!(metric_shape("Mi"), None);
    }
}
