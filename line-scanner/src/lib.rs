//! Line Scanner Library
//!
//! A small, allocation-free cursor for tokenizing puzzle input one line at a time.
//! Each line gets its own [`LineScanner`], which borrows the text, walks it left to
//! right with exact or whitespace-skipping reads, and is dropped when the line is done.
//!
//! # Overview
//!
//! This library provides:
//! - Character primitives: [`peek`](LineScanner::peek), [`read_exact`](LineScanner::read_exact),
//!   [`read`](LineScanner::read), [`skip`](LineScanner::skip)
//! - Predicate scanning with [`scan`](LineScanner::scan), returning borrowed slices
//! - Exact literal matching with [`move_past`](LineScanner::move_past)
//! - Number and word reads that skip leading whitespace
//! - [`scan_lines`] and [`parse_lines`] for driving a scanner over multi-line input
//!
//! # Quick Example
//!
//! ```
//! use line_scanner::{LineScanner, ScanError};
//!
//! # fn main() -> Result<(), ScanError> {
//! let mut scanner = LineScanner::new("seeds: 79 14 55 13");
//! scanner.move_past("seeds: ")?;
//!
//! let mut seeds = Vec::new();
//! while scanner.has_data_remaining() {
//!     seeds.push(scanner.read_long()?);
//! }
//! assert_eq!(seeds, [79, 14, 55, 13]);
//! # Ok(())
//! # }
//! ```
//!
//! # Failure
//!
//! Every fallible operation returns a [`ScanError`] naming the operation, the
//! position, and what was found instead. A failed operation never moves the cursor,
//! so a caller can copy the scanner, try one shape, and fall back to the copy.
//! [`parse_lines`] stops at the first failing line and reports it as a [`LineError`].

mod error;
mod lines;
mod scanner;

// Re-export public API
pub use error::{LineError, ScanError};
pub use lines::{parse_lines, scan_lines};
pub use scanner::LineScanner;
