//! Comparison dispatcher tests
//!
//! Covers interpretation precedence (metric, duration, integer, natural),
//! direction handling, and the right-hand integer fallback.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use cellsort::compare::{
    duration_less, integer_less, interpretation, less, metric_less, Interpretation,
};
use cellsort::natural::natural_less;
use test_case::test_case;

// ============================================================================
// Interpretation precedence
// ============================================================================

#[test_case("250m", "1", Interpretation::Metric ; "millicores vs plain")]
#[test_case("128Mi", "1Gi", Interpretation::Metric ; "binary prefixes")]
#[test_case("42", "7", Interpretation::Metric ; "integers are quantities first")]
#[test_case("2m", "2m", Interpretation::Metric ; "minutes read as milli")]
#[test_case("-", "250m", Interpretation::Metric ; "dash placeholder reads as zero")]
#[test_case("m", "1", Interpretation::Metric ; "bare suffix reads as zero")]
#[test_case("500ms", "1s", Interpretation::Duration ; "sub second")]
#[test_case("3h12m5s", "0", Interpretation::Duration ; "compound vs zero")]
#[test_case("2m", "90s", Interpretation::Duration ; "quantity lhs duration rhs")]
#[test_case("5", "abc", Interpretation::Integer ; "integer lhs text rhs")]
#[test_case("-3", "n/a", Interpretation::Integer ; "negative integer lhs")]
#[test_case("abc", "5", Interpretation::Natural ; "text lhs integer rhs")]
#[test_case("128Mi", "node-5", Interpretation::Natural ; "mixed column")]
#[test_case("item2", "item10", Interpretation::Natural ; "labels")]
#[test_case("", "", Interpretation::Natural ; "blank cells")]
fn test_interpretation(a: &str, b: &str, expected: Interpretation) {
    common::init_logging();
    assert_eq!(interpretation(a, b), expected);
}

// ============================================================================
// Concrete orderings
// ============================================================================

#[test_case("250m", "1", true ; "quarter core before one core")]
#[test_case("1024Mi", "1Gi", true ; "equal quantities are not out of order")]
#[test_case("1Gi", "1023Mi", false ; "gibibyte after smaller mebibytes")]
#[test_case("999", "1k", true ; "decimal kilo")]
#[test_case("2m", "90s", false ; "two minutes after ninety seconds")]
#[test_case("59s", "1m", true ; "seconds before minute")]
#[test_case("9", "10", true ; "numeric not lexicographic")]
#[test_case("09", "7", false ; "leading zero is still nine")]
#[test_case("-", "250m", true ; "placeholder before quarter core")]
#[test_case("250m", "-", false ; "quarter core after placeholder")]
#[test_case("m", "1", true ; "bare suffix before one")]
#[test_case("1n", "0.5n", true ; "sub nano rounds up to one nano")]
#[test_case("item2", "item10", true ; "natural digit runs")]
#[test_case("a1", "a-", true ; "natural digit before punctuation")]
#[test_case("item 2", "item10", false ; "natural digit before space")]
#[test_case("item10", "item2", false ; "natural digit runs reversed")]
fn test_ascending_order(a: &str, b: &str, expected: bool) {
    assert_eq!(less(true, a, b), expected);
}

#[test]
fn test_duration_sort_concrete() {
    assert_eq!(duration_less(true, "500ms", "1s"), Some(true));
    assert_eq!(duration_less(true, "1s", "500ms"), Some(false));
    assert_eq!(duration_less(true, "1s", "node"), None);
}

#[test]
fn test_metric_sort_requires_both_cells() {
    assert_eq!(metric_less(true, "128Mi", "node-5"), None);
    assert_eq!(metric_less(true, "node-5", "128Mi"), None);
    assert_eq!(metric_less(true, "128Mi", "64Mi"), Some(false));
}

#[test]
fn test_mixed_pair_uses_literal_strings() {
    for ascending in [true, false] {
        let natural = natural_less("128Mi", "node-5");
        let expected = if ascending { natural } else { !natural };
        assert_eq!(less(ascending, "128Mi", "node-5"), expected);
    }
}

// ============================================================================
// Direction flip
// ============================================================================

#[test_case("250m", "1" ; "metric less")]
#[test_case("1", "250m" ; "metric greater")]
#[test_case("1Gi", "1024Mi" ; "metric equal")]
#[test_case("500ms", "1s" ; "duration less")]
#[test_case("1h", "59m59s" ; "duration greater")]
#[test_case("1m30s", "90s" ; "duration equal")]
fn test_typed_direction_is_complement(a: &str, b: &str) {
    assert_ne!(interpretation(a, b), Interpretation::Natural);
    assert_eq!(less(false, a, b), !less(true, a, b));
}

#[test_case("item2", "item10" ; "different labels")]
#[test_case("pod", "pod" ; "identical labels")]
fn test_natural_direction_is_negation(a: &str, b: &str) {
    assert_eq!(less(false, a, b), !less(true, a, b));
}

#[test]
fn test_ties_favor_left_only_when_ascending() {
    assert!(less(true, "1Gi", "1024Mi"));
    assert!(!less(false, "1Gi", "1024Mi"));
    assert!(less(true, "90s", "1m30s"));
    assert!(!less(false, "90s", "1m30s"));
}

// ============================================================================
// Integer fallback quirk
// ============================================================================

#[test]
fn test_integer_right_cell_defaults_to_zero() {
    // "abc" is not a quantity, duration, or integer; it compares as 0.
    assert!(!less(true, "5", "abc"));
    assert!(less(false, "5", "abc"));
    assert!(less(true, "-5", "abc"));
    assert!(less(true, "0", "abc"));
}

#[test]
fn test_integer_path_is_asymmetric() {
    assert_eq!(integer_less(true, "5", "abc"), Some(false));
    assert_eq!(integer_less(true, "abc", "5"), None);
    // Swapped operands fall through to natural order instead.
    assert_eq!(less(true, "abc", "5"), natural_less("abc", "5"));
}
