//! Cursor-based scanner over a single line of text

use std::str::FromStr;

use crate::error::ScanError;

/// A borrowed view over one line of text plus a forward-only cursor.
///
/// A scanner is created per line, driven through a sequence of reads, and
/// dropped. Nothing is copied on construction and tokens handed back by
/// [`scan`](Self::scan) and [`read_word`](Self::read_word) borrow from the
/// line itself, so they remain valid after the scanner is gone.
///
/// The cursor is a byte offset that always sits on a character boundary.
/// Every operation either advances it past exactly what was consumed, or
/// fails with a [`ScanError`] and leaves it untouched.
///
/// `LineScanner` is [`Copy`]: copying it is how a caller snapshots the cursor
/// before trying one shape of input and falling back to another.
///
/// # Example
///
/// ```
/// use line_scanner::{LineScanner, ScanError};
///
/// # fn main() -> Result<(), ScanError> {
/// let mut scanner = LineScanner::new("Card 1: 41 48 83 | 83 86  6");
/// let card_id = scanner.move_past("Card")?.read_int()?;
/// scanner.move_past(":")?;
///
/// let mut winning = Vec::new();
/// while !scanner.skip_whitespace().is_next("|") {
///     winning.push(scanner.read_int()?);
/// }
/// scanner.move_past("|")?;
///
/// let mut have = Vec::new();
/// while scanner.has_non_whitespace_remaining() {
///     have.push(scanner.read_int()?);
/// }
///
/// assert_eq!(card_id, 1);
/// assert_eq!(winning, [41, 48, 83]);
/// assert_eq!(have, [83, 86, 6]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a scanner positioned at the start of `line`.
    pub const fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte offset of the cursor.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The whole line, regardless of the cursor.
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// The unconsumed tail of the line.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Returns true if the cursor has not reached the end of the line.
    pub fn has_data_remaining(&self) -> bool {
        self.pos < self.line.len()
    }

    /// Returns true if any non-whitespace character is left on the line.
    ///
    /// Walks the whole tail when it is all whitespace.
    pub fn has_non_whitespace_remaining(&self) -> bool {
        self.remaining().chars().any(|ch| !ch.is_whitespace())
    }

    /// Returns true if the line continues with `literal` at the cursor.
    /// Never moves the cursor.
    pub fn is_next(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Character at the cursor, without moving.
    pub fn peek(&self) -> Result<char, ScanError> {
        self.remaining()
            .chars()
            .next()
            .ok_or(ScanError::EndOfInput {
                op: "peek",
                position: self.pos,
            })
    }

    /// Character at the cursor, then advance past it. Whitespace is not skipped.
    pub fn read_exact(&mut self) -> Result<char, ScanError> {
        self.next_char("read_exact")
    }

    /// Skip any whitespace, then read one character.
    ///
    /// Fails with [`ScanError::EndOfInput`] when only whitespace is left; the
    /// whitespace is not consumed in that case.
    pub fn read(&mut self) -> Result<char, ScanError> {
        self.restoring(|scanner| {
            scanner.skip_whitespace();
            scanner.next_char("read")
        })
    }

    /// Advance past one character, whatever it is.
    pub fn skip(&mut self) -> Result<&mut Self, ScanError> {
        self.next_char("skip")?;
        Ok(self)
    }

    /// Consume a (possibly empty) run of whitespace.
    pub fn skip_whitespace(&mut self) -> &mut Self {
        self.scan(char::is_whitespace);
        self
    }

    /// Consume the longest run of characters matching `predicate`.
    ///
    /// Returns the consumed text, which is empty if the character at the
    /// cursor does not match (or the line is exhausted). Never fails.
    pub fn scan(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !predicate(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += len;
        &rest[..len]
    }

    /// Consume `literal`, which must appear at the cursor exactly.
    ///
    /// The comparison is ordinal and no whitespace is skipped on either side.
    /// On mismatch the cursor does not move.
    pub fn move_past(&mut self, literal: &str) -> Result<&mut Self, ScanError> {
        if !self.is_next(literal) {
            return Err(ScanError::FormatMismatch {
                op: "move_past",
                expected: literal.to_owned(),
                found: self.remaining().to_owned(),
                position: self.pos,
            });
        }
        self.pos += literal.len();
        Ok(self)
    }

    /// Skip whitespace and read an unsigned run of ASCII digits as an `i32`.
    ///
    /// A leading sign is not accepted; use
    /// [`read_signed_long`](Self::read_signed_long) for that.
    pub fn read_int(&mut self) -> Result<i32, ScanError> {
        self.read_number("read_int", false)
    }

    /// Like [`read_int`](Self::read_int), for values up to `i64::MAX`.
    pub fn read_long(&mut self) -> Result<i64, ScanError> {
        self.read_number("read_long", false)
    }

    /// Skip whitespace and read an `i64` with an optional leading `-`.
    pub fn read_signed_long(&mut self) -> Result<i64, ScanError> {
        self.read_number("read_signed_long", true)
    }

    /// Skip whitespace and read a run of ASCII letters. May return an empty word.
    pub fn read_word(&mut self) -> &'a str {
        self.skip_whitespace();
        self.scan(|ch| ch.is_ascii_alphabetic())
    }

    fn next_char(&mut self, op: &'static str) -> Result<char, ScanError> {
        let ch = self.remaining().chars().next().ok_or(ScanError::EndOfInput {
            op,
            position: self.pos,
        })?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }

    fn read_number<T: FromStr>(&mut self, op: &'static str, signed: bool) -> Result<T, ScanError> {
        self.restoring(|scanner| {
            scanner.skip_whitespace();
            let start = scanner.pos;
            if signed && scanner.is_next("-") {
                scanner.pos += 1;
            }
            if scanner.scan(|ch| ch.is_ascii_digit()).is_empty() {
                return Err(ScanError::NoDigitsFound {
                    op,
                    position: start,
                    remaining: scanner.line[start..].to_owned(),
                });
            }

            // Sign and digits are parsed together so the most negative value fits.
            let token = &scanner.line[start..scanner.pos];
            token.parse().map_err(|_| ScanError::NumericOverflow {
                op,
                digits: token.to_owned(),
                position: start,
            })
        })
    }

    /// Run `read`, putting the cursor back where it started if it fails.
    fn restoring<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, ScanError>,
    ) -> Result<T, ScanError> {
        let start = self.pos;
        let result = read(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }
}

impl<'a> From<&'a str> for LineScanner<'a> {
    fn from(line: &'a str) -> Self {
        Self::new(line)
    }
}
