//! Compound duration parsing ("3h12m5s", "500ms", "-1.5h").
//!
//! A duration is an optional sign followed by the literal `0` or by one or
//! more `<number><unit>` tokens. Numbers may carry a fraction (`1.5h`, `.5s`).
//! Units: `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m`, `h`.

use crate::error::{CellsortError, Result};

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN`, the largest representable span.
const MAX_MAGNITUDE: u64 = 1 << 63;

/// A parsed duration in signed nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedDuration {
    nanos: i64,
}

impl ParsedDuration {
    pub fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub fn nanos(self) -> i64 {
        self.nanos
    }

    /// Parse a duration string.
    ///
    /// # Errors
    /// Returns [`CellsortError::Duration`] for empty input, a missing or
    /// unknown unit, or a value that overflows 64-bit nanoseconds.
    pub fn parse(s: &str) -> Result<Self> {
        let err = |why: &str| CellsortError::Duration(format!("{s:?}: {why}"));

        let (negative, mut rest) = match s.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        if rest == "0" {
            return Ok(Self::from_nanos(0));
        }
        if rest.is_empty() {
            return Err(err("empty"));
        }

        let mut total: u64 = 0;
        while !rest.is_empty() {
            if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
                return Err(err("expected a number"));
            }

            let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            let (int_digits, after_int) = rest.split_at(int_len);
            let whole = leading_int(int_digits).ok_or_else(|| err("overflow"))?;

            let (frac_digits, after_num) = match after_int.strip_prefix('.') {
                Some(after) => after.split_at(after.bytes().take_while(u8::is_ascii_digit).count()),
                None => ("", after_int),
            };
            if int_digits.is_empty() && frac_digits.is_empty() {
                return Err(err("number has no digits"));
            }

            let unit_len = after_num
                .bytes()
                .take_while(|&b| b != b'.' && !b.is_ascii_digit())
                .count();
            if unit_len == 0 {
                return Err(err("missing unit"));
            }
            let (unit_name, next) = after_num.split_at(unit_len);
            let unit = unit_nanos(unit_name).ok_or_else(|| err("unknown unit"))?;

            let mut value = whole
                .checked_mul(unit)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or_else(|| err("overflow"))?;
            value = value
                .checked_add(scale_fraction(frac_digits, unit))
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or_else(|| err("overflow"))?;
            total = total
                .checked_add(value)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or_else(|| err("overflow"))?;

            rest = next;
        }

        let nanos = if negative {
            0i64.checked_sub_unsigned(total)
        } else {
            i64::try_from(total).ok()
        };
        nanos.map(Self::from_nanos).ok_or_else(|| err("overflow"))
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Integer value of a digit run; `None` on overflow.
fn leading_int(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Nanoseconds contributed by the fractional digits of one token.
///
/// Digits past the precision of a `u64` accumulator are dropped.
fn scale_fraction(digits: &str, unit: u64) -> u64 {
    let mut frac: u64 = 0;
    let mut scale: f64 = 1.0;
    for b in digits.bytes() {
        let Some(next) = frac
            .checked_mul(10)
            .and_then(|f| f.checked_add(u64::from(b - b'0')))
        else {
            break;
        };
        frac = next;
        scale *= 10.0;
    }
    if frac == 0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let nanos = (frac as f64 * (unit as f64 / scale)) as u64;
    nanos
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

    fn nanos(s: &str) -> i64 {
        ParsedDuration::parse(s).unwrap().nanos()
    }

    #[test]
    fn test_single_units() {
        assert_eq!(nanos("1ns"), 1);
        assert_eq!(nanos("1us"), 1_000);
        assert_eq!(nanos("1µs"), 1_000);
        assert_eq!(nanos("1μs"), 1_000);
        assert_eq!(nanos("500ms"), 500_000_000);
        assert_eq!(nanos("2s"), 2_000_000_000);
        assert_eq!(nanos("1m"), 60_000_000_000);
        assert_eq!(nanos("1h"), 3_600_000_000_000);
    }

    #[test]
    fn test_compound() {
        assert_eq!(nanos("3h12m5s"), nanos("11525s"));
        assert_eq!(nanos("1m30s"), nanos("90s"));
        assert_eq!(nanos("1h0m0s"), nanos("60m"));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(nanos("1.5h"), nanos("90m"));
        assert_eq!(nanos(".5s"), 500_000_000);
        assert_eq!(nanos("1.s"), 1_000_000_000);
        assert_eq!(nanos("0.000000001s"), 1);
    }

    #[test]
    fn test_signs_and_zero() {
        assert_eq!(nanos("0"), 0);
        assert_eq!(nanos("-0"), 0);
        assert_eq!(nanos("+5s"), 5_000_000_000);
        assert_eq!(nanos("-1m"), -60_000_000_000);
    }

    #[test]
    fn test_rejects() {
        for bad in [
            "", "-", "+", "42", "5", ".s", "1hr", "1d", "s", "1s ", " 1s", "1.5", "node-7",
            "128Mi", "1s-2s",
        ] {
            assert!(ParsedDuration::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_overflow_bounds() {
        assert_eq!(nanos("2562047h47m16.854775807s"), i64::MAX);
        assert_eq!(nanos("-2562047h47m16.854775808s"), i64::MIN);
        assert!(ParsedDuration::parse("2562048h").is_err());
        assert!(ParsedDuration::parse("2562047h47m16.854775808s").is_err());
    }
}
