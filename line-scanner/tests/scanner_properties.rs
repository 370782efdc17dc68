//! Property-based tests for the line scanner
//!
//! **Feature: line-scanner**

use line_scanner::{LineScanner, ScanError};
use proptest::prelude::*;

/// Run one of the fallible operations by index, discarding its value.
fn run_op(scanner: &mut LineScanner<'_>, op: usize) -> Result<(), ScanError> {
    match op {
        0 => scanner.peek().map(drop),
        1 => scanner.read_exact().map(drop),
        2 => scanner.read().map(drop),
        3 => scanner.skip().map(drop),
        4 => scanner.read_int().map(drop),
        5 => scanner.read_long().map(drop),
        6 => scanner.read_signed_long().map(drop),
        _ => scanner.move_past("->").map(drop),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// **Feature: line-scanner, Property 1: Literal match advances exactly**
    /// *For any* literal L and line starting with L, `move_past(L)` succeeds and
    /// advances the cursor by `len(L)`.
    #[test]
    fn prop_move_past_matching_literal(literal in "[a-zA-Z :-]{0,8}", rest in "[ -~]{0,8}") {
        let line = format!("{literal}{rest}");
        let mut scanner = LineScanner::new(&line);

        prop_assert!(scanner.move_past(&literal).is_ok());
        prop_assert_eq!(scanner.position(), literal.len());
        prop_assert_eq!(scanner.remaining(), rest.as_str());
    }

    /// **Feature: line-scanner, Property 2: Literal mismatch leaves the cursor**
    /// *For any* line that does not start with L, `move_past(L)` fails with
    /// `FormatMismatch` and the cursor does not move.
    #[test]
    fn prop_move_past_mismatch(literal in "[a-z]{1,6}", line in "[a-z ]{0,10}") {
        prop_assume!(!line.starts_with(&literal));
        let mut scanner = LineScanner::new(&line);

        let result = scanner.move_past(&literal);
        prop_assert!(
            matches!(result, Err(ScanError::FormatMismatch { .. })),
            "Expected FormatMismatch, got {:?}",
            result
        );
        prop_assert_eq!(scanner.position(), 0);
    }

    /// **Feature: line-scanner, Property 3: Unsigned integers round-trip**
    /// *For any* non-negative i32 n, `read_int` on its decimal text yields n and
    /// advances past the skipped whitespace plus the digits.
    #[test]
    fn prop_read_int_round_trip(n in 0i32..=i32::MAX, ws in "[ \t]{0,4}", tail in "( [a-z]{0,3})?") {
        let digits = n.to_string();
        let line = format!("{ws}{digits}{tail}");
        let mut scanner = LineScanner::new(&line);

        prop_assert_eq!(scanner.read_int(), Ok(n));
        prop_assert_eq!(scanner.position(), ws.len() + digits.len());
    }

    /// **Feature: line-scanner, Property 4: Long integers round-trip**
    #[test]
    fn prop_read_long_round_trip(n in 0i64..=i64::MAX) {
        let line = n.to_string();
        let mut scanner = LineScanner::new(&line);

        prop_assert_eq!(scanner.read_long(), Ok(n));
        prop_assert!(!scanner.has_data_remaining());
    }

    /// **Feature: line-scanner, Property 5: Signed integers round-trip**
    /// *For any* i64 n, including negatives and `i64::MIN`,
    /// `read_signed_long(n.to_string()) == n`.
    #[test]
    fn prop_read_signed_long_round_trip(n in any::<i64>()) {
        let line = n.to_string();
        let mut scanner = LineScanner::new(&line);

        prop_assert_eq!(scanner.read_signed_long(), Ok(n));
        prop_assert!(!scanner.has_data_remaining());
    }

    /// **Feature: line-scanner, Property 6: Empty scan does not move**
    #[test]
    fn prop_scan_without_match(line in "[a-z ]{0,12}") {
        let mut scanner = LineScanner::new(&line);

        prop_assert_eq!(scanner.scan(|ch| ch.is_ascii_digit()), "");
        prop_assert_eq!(scanner.position(), 0);
    }

    /// **Feature: line-scanner, Property 7: Full scan consumes the line**
    #[test]
    fn prop_scan_all_match(line in "[0-9]{0,12}") {
        let mut scanner = LineScanner::new(&line);

        prop_assert_eq!(scanner.scan(|ch| ch.is_ascii_digit()), line.as_str());
        prop_assert_eq!(scanner.position(), line.len());
        prop_assert!(!scanner.has_data_remaining());
    }

    /// **Feature: line-scanner, Property 8: Failures never consume**
    /// *For any* line and any sequence of operations, every failed operation
    /// leaves the cursor exactly where it was, and the cursor never passes the
    /// end of the line.
    #[test]
    fn prop_failed_operations_do_not_move(
        line in "[ -~]{0,12}",
        ops in prop::collection::vec(0usize..8, 1..12)
    ) {
        let mut scanner = LineScanner::new(&line);

        for op in ops {
            let before = scanner.position();
            if run_op(&mut scanner, op).is_err() {
                prop_assert_eq!(scanner.position(), before);
            }
            prop_assert!(scanner.position() <= line.len());
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_line_exhausted_immediately() {
        let scanner = LineScanner::new("");
        assert!(!scanner.has_data_remaining());
    }

    #[test]
    fn test_exhausted_after_reaching_length() {
        let mut scanner = LineScanner::new("ab");
        scanner.read_exact().unwrap();
        assert!(scanner.has_data_remaining());
        scanner.read_exact().unwrap();
        assert!(!scanner.has_data_remaining());
    }
}
