//! Error types for the scanner

use thiserror::Error;

/// Error returned when a line does not have the shape a scan operation required
///
/// Every variant records the operation that failed and the byte offset at which
/// the mismatch was detected. The scanner's cursor is left where it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The operation needed at least one more character but the line was exhausted
    #[error("{op}: unexpected end of line at position {position}")]
    EndOfInput {
        /// Name of the operation that failed
        op: &'static str,
        /// Byte offset into the line
        position: usize,
    },

    /// An expected literal was not found at the cursor
    #[error("{op}: expected {expected:?} at position {position}, found {found:?}")]
    FormatMismatch {
        /// Name of the operation that failed
        op: &'static str,
        /// The literal that was expected
        expected: String,
        /// The unconsumed remainder of the line
        found: String,
        /// Byte offset into the line
        position: usize,
    },

    /// A numeric read found no digits
    #[error("{op}: expected digits at position {position}, found {remaining:?}")]
    NoDigitsFound {
        /// Name of the operation that failed
        op: &'static str,
        /// Byte offset into the line
        position: usize,
        /// The unconsumed remainder of the line
        remaining: String,
    },

    /// A digit run was found but does not fit the target integer type
    #[error("{op}: {digits} at position {position} is out of range")]
    NumericOverflow {
        /// Name of the operation that failed
        op: &'static str,
        /// The scanned token, including any sign
        digits: String,
        /// Byte offset into the line
        position: usize,
    },
}

impl ScanError {
    /// Name of the scanner operation that produced this error
    pub fn op(&self) -> &'static str {
        match self {
            ScanError::EndOfInput { op, .. }
            | ScanError::FormatMismatch { op, .. }
            | ScanError::NoDigitsFound { op, .. }
            | ScanError::NumericOverflow { op, .. } => *op,
        }
    }

    /// Byte offset into the line where the failure was detected
    pub fn position(&self) -> usize {
        match self {
            ScanError::EndOfInput { position, .. }
            | ScanError::FormatMismatch { position, .. }
            | ScanError::NoDigitsFound { position, .. }
            | ScanError::NumericOverflow { position, .. } => *position,
        }
    }
}

/// A [`ScanError`] annotated with the 1-based number of the line it occurred on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number within the input
    pub line: usize,
    /// The failure on that line
    pub source: ScanError,
}
