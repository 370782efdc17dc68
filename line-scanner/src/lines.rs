//! Helpers for driving a [`LineScanner`] over multi-line input

use tracing::{debug, trace};

use crate::error::{LineError, ScanError};
use crate::scanner::LineScanner;

/// Yield a fresh scanner for each line of `input`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line and are never visible to the
/// scanner. A final trailing terminator does not produce an extra empty line.
pub fn scan_lines(input: &str) -> impl Iterator<Item = LineScanner<'_>> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], &rest[end + terminator..])
            }
            None => (rest, ""),
        };
        rest = tail;
        Some(LineScanner::new(line))
    })
}

/// Parse every line of `input` with `parse`, stopping at the first failure.
///
/// The error carries the 1-based number of the line that failed.
///
/// # Example
///
/// ```
/// use line_scanner::parse_lines;
///
/// let ranges = parse_lines("2-4,6-8\n2-3,4-5", |scanner| {
///     let a = scanner.read_int()?;
///     let b = scanner.move_past("-")?.read_int()?;
///     let c = scanner.move_past(",")?.read_int()?;
///     let d = scanner.move_past("-")?.read_int()?;
///     Ok(((a, b), (c, d)))
/// })
/// .unwrap();
/// assert_eq!(ranges, [((2, 4), (6, 8)), ((2, 3), (4, 5))]);
/// ```
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse: F) -> Result<Vec<T>, LineError>
where
    F: FnMut(&mut LineScanner<'a>) -> Result<T, ScanError>,
{
    let parsed = scan_lines(input)
        .enumerate()
        .map(|(line_idx, mut scanner)| {
            parse(&mut scanner).map_err(|source| LineError {
                line: line_idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>();

    match &parsed {
        Ok(records) => trace!(records = records.len(), "parsed all lines"),
        Err(e) => debug!(line = e.line, error = %e.source, "line failed to parse"),
    }
    parsed
}
