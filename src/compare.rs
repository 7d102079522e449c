//! Type-sniffing comparison of two display strings.
//!
//! Each pair is interpreted independently. The first interpretation under
//! which both cells parse decides the order:
//!
//! 1. metric quantity (`250m`, `128Mi`, `42`, and `-` as zero)
//! 2. duration (`3h12m`, `500ms`)
//! 3. integer (left cell gates; an unparseable right cell counts as `0`)
//! 4. natural string order (always applies)
//!
//! Typed paths answer `a <= b` when ascending and `a > b` when descending.
//! The natural path answers `natural_less(a, b)` and its negation.
//!
//! Ordering is only consistent when every value in a column resolves to the
//! same interpretation. Mixed columns get a best-effort order.

use crate::duration::ParsedDuration;
use crate::natural::natural_less;
use crate::quantity::Quantity;

/// Which comparator decided a pair of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    Metric,
    Duration,
    Integer,
    Natural,
}

/// True when cell `a` sorts before cell `b` in the given direction.
pub fn less(ascending: bool, a: &str, b: &str) -> bool {
    if let Some(order) = metric_less(ascending, a, b) {
        log::trace!("{a:?} vs {b:?}: metric");
        return order;
    }
    if let Some(order) = duration_less(ascending, a, b) {
        log::trace!("{a:?} vs {b:?}: duration");
        return order;
    }
    if let Some(order) = integer_less(ascending, a, b) {
        log::trace!("{a:?} vs {b:?}: integer");
        return order;
    }

    log::trace!("{a:?} vs {b:?}: natural");
    let order = natural_less(a, b);
    if ascending {
        order
    } else {
        !order
    }
}

/// Report the interpretation [`less`] would use for a pair.
pub fn interpretation(a: &str, b: &str) -> Interpretation {
    if metric_less(true, a, b).is_some() {
        Interpretation::Metric
    } else if duration_less(true, a, b).is_some() {
        Interpretation::Duration
    } else if integer_less(true, a, b).is_some() {
        Interpretation::Integer
    } else {
        Interpretation::Natural
    }
}

/// Compare as resource quantities; `None` unless both cells parse.
pub fn metric_less(ascending: bool, a: &str, b: &str) -> Option<bool> {
    let lhs = Quantity::parse(a).ok()?;
    let rhs = Quantity::parse(b).ok()?;
    Some(directed(ascending, &lhs, &rhs))
}

/// Compare as durations; `None` unless both cells parse.
pub fn duration_less(ascending: bool, a: &str, b: &str) -> Option<bool> {
    let lhs = ParsedDuration::parse(a).ok()?;
    let rhs = ParsedDuration::parse(b).ok()?;
    Some(directed(ascending, &lhs, &rhs))
}

/// Compare as integers; `None` unless the left cell parses.
///
/// A right cell that is not an integer compares as `0`.
pub fn integer_less(ascending: bool, a: &str, b: &str) -> Option<bool> {
    let lhs: i64 = a.parse().ok()?;
    let rhs: i64 = b.parse().unwrap_or(0);
    Some(directed(ascending, &lhs, &rhs))
}

fn directed<T: Ord>(ascending: bool, lhs: &T, rhs: &T) -> bool {
    if ascending {
        lhs <= rhs
    } else {
        lhs > rhs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_path() {
        assert!(less(true, "250m", "1"));
        assert!(!less(true, "1Gi", "1000Mi"));
        assert!(less(false, "1Gi", "1000Mi"));
        assert_eq!(interpretation("128Mi", "64Ki"), Interpretation::Metric);
    }

    #[test]
    fn test_duration_path() {
        assert_eq!(duration_less(true, "500ms", "1s"), Some(true));
        assert!(!less(true, "2m", "90s"));
        assert!(less(false, "2m", "90s"));
        assert_eq!(interpretation("3h12m", "59s"), Interpretation::Duration);
    }

    #[test]
    fn test_integer_path_tolerates_bad_right_cell() {
        assert_eq!(integer_less(true, "5", "abc"), Some(false));
        assert_eq!(integer_less(false, "5", "abc"), Some(true));
        assert_eq!(integer_less(true, "abc", "5"), None);
        assert_eq!(interpretation("5", "abc"), Interpretation::Integer);
    }

    #[test]
    fn test_natural_fallback() {
        assert!(less(true, "item2", "item10"));
        assert!(!less(false, "item2", "item10"));
        assert_eq!(interpretation("item2", "item10"), Interpretation::Natural);
    }

    #[test]
    fn test_equal_cells() {
        assert!(less(true, "5", "5"));
        assert!(!less(false, "5", "5"));
        assert!(!less(true, "pod", "pod"));
        assert!(less(false, "pod", "pod"));
    }
}
