//! Natural ("human") string ordering.
//!
//! Strings are scanned byte by byte. Digit runs compare by numeric value and
//! everything else compares bytewise, so `item2` sorts before `item10`.
//!
//! Rules, in order of precedence at each position:
//!
//! - a digit sorts before any non-digit byte;
//! - two non-digit bytes compare by byte value (UTF-8 order, no decoding);
//! - two digit runs compare by value (leading zeros ignored), and equal values
//!   put the run with fewer leading zeros first;
//! - when one string is a prefix of the other, the shorter one sorts first.

use std::cmp::Ordering;

/// Natural-order comparison of two strings.
///
/// A total order: only identical strings compare `Equal`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    // Both cursors stay in step: a run only advances them unequally when it
    // decides the comparison.
    let mut i = 0;
    while let (Some(&ca), Some(&cb)) = (a.get(i), b.get(i)) {
        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {
                if ca != cb {
                    return ca.cmp(&cb);
                }
                i += 1;
            }
            (true, true) => {
                let (run_a, zeros_a) = digit_run(a, i);
                let (run_b, zeros_b) = digit_run(b, i);
                let order = run_a
                    .len()
                    .cmp(&run_b.len())
                    .then_with(|| run_a.cmp(run_b))
                    .then_with(|| zeros_a.cmp(&zeros_b));
                if order != Ordering::Equal {
                    return order;
                }
                i += zeros_a + run_a.len();
            }
        }
    }
    a.len().cmp(&b.len())
}

/// True when `a` sorts strictly before `b` in natural order.
pub fn natural_less(a: &str, b: &str) -> bool {
    natural_cmp(a, b) == Ordering::Less
}

/// Split the digit run starting at `start` into its significant digits and
/// the count of leading zeros before them.
fn digit_run(s: &[u8], start: usize) -> (&[u8], usize) {
    let run = s.get(start..).unwrap_or_default();
    let zeros = run.iter().take_while(|&&c| c == b'0').count();
    let digits = run
        .get(zeros..)
        .unwrap_or_default()
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    (run.get(zeros..zeros + digits).unwrap_or_default(), zeros)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs_are_numeric() {
        assert!(natural_less("item2", "item10"));
        assert!(!natural_less("item10", "item2"));
        assert!(natural_less("node-7", "node-12"));
        assert!(natural_less("a1b2", "a1b10"));
        assert!(natural_less("v99999999999999999999", "v100000000000000000000"));
    }

    #[test]
    fn test_digits_sort_before_other_bytes() {
        assert!(natural_less("a1", "a-"));
        assert!(!natural_less("-", "5"));
        assert!(natural_less("5", "-"));
        assert!(natural_less("9", "a"));
        // The digit in "item10" beats the space in "item 2".
        assert!(!natural_less("item 2", "item10"));
        assert!(natural_less("item10", "item 2"));
    }

    #[test]
    fn test_non_digits_compare_bytewise() {
        assert!(natural_less("B", "a"));
        assert!(natural_less("pod-a", "pod-b"));
        assert!(natural_less("z", "é"));
    }

    #[test]
    fn test_fewer_leading_zeros_first() {
        assert!(natural_less("1", "01"));
        assert!(natural_less("x01", "x001"));
        assert!(!natural_less("007", "7"));
        // Value decides before zero count.
        assert!(natural_less("002", "3"));
        // Zero count decides before the rest of the string.
        assert!(natural_less("1b", "01a"));
    }

    #[test]
    fn test_equal_strings_are_not_less() {
        assert!(!natural_less("pod", "pod"));
        assert_eq!(natural_cmp("pod-3", "pod-3"), Ordering::Equal);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert!(natural_less("pod", "pod-1"));
        assert!(natural_less("", "a"));
        assert!(natural_less("item1", "item1a"));
    }

    #[test]
    fn test_antisymmetric() {
        let words = ["", "a", "a1", "a01", "a-", "item 2", "item10", "1", "01", "-", "Z", "é"];
        for a in words {
            for b in words {
                assert_eq!(natural_cmp(a, b), natural_cmp(b, a).reverse(), "{a:?} vs {b:?}");
            }
        }
    }
}
