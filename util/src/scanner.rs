//! Text scanning with the `Scanner` type.

use std::fmt;

use crate::text::is_space;

type Result<T> = std::result::Result<T, Error>;

/// Line and column of the scanner cursor, both starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    line: usize,
    col: usize,
}

/// Reading a string slice byte by byte while keep the line and column.
///
/// Every slice returned borrows from the original input, so the
/// scanner never allocates.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The input to be read.
    src: &'a str,
    /// Current position
    pos: Position,
    /// Current index.
    idx: usize,
}

impl<'a> Scanner<'a> {
    /// Create a `Scanner` from a string slice.
    ///
    /// The `line` and `col` will always start from 1.
    pub const fn new(src: &'a str) -> Self {
        Scanner {
            src,
            pos: Position { line: 1, col: 1 },
            idx: 0,
        }
    }

    /// Returns `true` if all bytes where read
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.idx >= self.src.len()
    }

    /// Get next byte without advance
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.idx).copied()
    }

    /// Returns `true` if the remaining input starts with `pat`, ignoring
    /// ASCII case.
    pub fn starts_with_ignore_case(&self, pat: &str) -> bool {
        self.remaining()
            .as_bytes()
            .get(..pat.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pat.as_bytes()))
    }

    /// Moves to the next character n times, stopping at the end of the
    /// input.
    pub fn bump_n(&mut self, n: usize) {
        self.advance(n);
    }

    /// `read_while()` will call the `func` closure for
    /// each byte in the input and advance
    /// while the closure returns `true`.
    ///
    /// # Returns
    ///
    /// A slice from the starting position to the position
    /// where the closure `func` returns `false` or the end of the input
    /// is reached. The end is moved forward to the next char boundary
    /// when `func` stops inside a multi-byte character.
    #[inline]
    pub fn read_while<F>(&mut self, func: F) -> &'a str
    where
        F: Fn(u8) -> bool,
    {
        let start = self.idx;
        let bytes = self.src.as_bytes();

        while let Some(&b) = bytes.get(self.idx) {
            if !func(b) {
                break;
            }
            self.bump(b);
        }
        while !self.src.is_char_boundary(self.idx) {
            self.idx += 1;
            self.pos.col += 1;
        }

        &self.src[start..self.idx]
    }

    /// Read next byte if equals to `b`.
    ///
    /// # Errors
    ///
    /// This method will return an error if the byte is not
    /// equal to `b`.
    ///
    /// If the input reached the end, then an error will
    /// also be returned.
    pub fn must_read(&mut self, b: u8) -> Result<()> {
        let Some(n) = self.peek() else {
            return self.error(ErrorKind::Eof);
        };
        if b != n {
            return self.error(ErrorKind::Char { expected: b, found: n });
        }
        self.bump(n);
        Ok(())
    }

    /// Read until `byte` is found. The `byte` itself is not read.
    pub fn take_until(&mut self, byte: u8) -> &'a str {
        self.read_while(|b| b != byte)
    }

    /// Read until any of the `delims` is found or the input ends.
    ///
    /// # Returns
    ///
    /// The slice read and the delimiter that stopped the scan, if any.
    /// The delimiter is not read.
    pub fn read_until_any(&mut self, delims: &[u8]) -> (&'a str, Option<u8>) {
        let slice = self.read_while(|b| !delims.contains(&b));

        (slice, self.peek())
    }

    /// Read until the literal `lit` is found or the input ends.
    ///
    /// The literal is not read.
    pub fn read_until_literal(&mut self, lit: &str) -> &'a str {
        let rem = self.remaining();
        let n = rem.find(lit).unwrap_or(rem.len());

        self.advance(n)
    }

    /// Skip spaces and horizontal tabs.
    #[inline]
    pub fn skip_ws(&mut self) {
        self.read_while(is_space);
    }

    /// Read the next whitespace-delimited token, skipping leading
    /// whitespace. Returns `None` at the end of the input.
    pub fn read_token(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let token = self.read_while(|b| !is_space(b));

        (!token.is_empty()).then_some(token)
    }

    /// Read number in the input.
    ///
    /// This method read until an invalid digit is found.
    pub fn read_num<N>(&mut self) -> Result<N>
    where
        N: lexical_core::FromLexical,
    {
        match lexical_core::parse_partial::<N>(self.remaining().as_bytes()) {
            Ok((value, readed)) if readed > 0 => {
                self.advance(readed);
                Ok(value)
            }
            _ => self.error(ErrorKind::Num),
        }
    }

    /// Call the `func` closure for next byte and read it if
    /// the closure returns `true`.
    ///
    /// # Returns
    ///
    /// The byte readed.
    #[inline(always)]
    pub fn consume_if<F>(&mut self, func: F) -> Option<u8>
    where
        F: FnOnce(u8) -> bool,
    {
        match self.peek() {
            Some(matched) if func(matched) => {
                self.bump(matched);
                Some(matched)
            }
            _ => None,
        }
    }

    /// The input not yet read.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.src.get(self.idx..).unwrap_or_default()
    }

    /// Read `n` bytes, or up to the end of the input.
    fn advance(&mut self, n: usize) -> &'a str {
        let start = self.idx;
        let end = (start + n).min(self.src.len());
        let bytes = self.src.as_bytes();
        while self.idx < end {
            self.bump(bytes[self.idx]);
        }
        while !self.src.is_char_boundary(self.idx) {
            self.idx += 1;
            self.pos.col += 1;
        }

        &self.src[start..self.idx]
    }

    #[inline(always)]
    fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.pos.col = 1;
            self.pos.line += 1;
        } else {
            self.pos.col += 1;
        }
        self.idx += 1;
    }

    fn error<T>(&self, kind: ErrorKind) -> Result<T> {
        Err(Error {
            kind,
            line: self.pos.line,
            col: self.pos.col,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.peek()?;
        self.advance(1);
        Some(byte)
    }
}

/// Errors that can occur while reading the src.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// End of file reached.
    Eof,
    /// A specific byte was expected.
    Char {
        /// The byte required.
        expected: u8,
        /// The byte found instead.
        found: u8,
    },
    /// No digits where found.
    Num,
}

/// A scanner error with the position where it happened.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Line of the cursor.
    pub line: usize,
    /// Column of the cursor.
    pub col: usize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Eof => f.write_str("unexpected end of input")?,
            ErrorKind::Char { expected, found } => write!(
                f,
                "expected '{}', found '{}'",
                expected.escape_ascii(),
                found.escape_ascii()
            )?,
            ErrorKind::Num => f.write_str("expected a number")?,
        }
        write!(f, " at line {} column {}", self.line, self.col)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::is_digit;

    #[test]
    fn test_read_num() {
        let mut reader = Scanner::new("12345");
        assert_eq!(reader.read_num(), Ok(12345));

        let mut reader = Scanner::new("NaN");
        assert!(reader.read_num::<u32>().is_err());
        assert_eq!(reader.remaining(), "NaN");

        let mut reader = Scanner::new("9123Test");
        assert_eq!(reader.read_num(), Ok(9123));
        assert_eq!(reader.remaining(), "Test");
    }

    #[test]
    fn test_read_while_stops_on_char_boundary() {
        let mut reader = Scanner::new("ação;x");

        // The lead byte of "ç" is accepted but its continuation byte is not.
        let read = reader.read_while(|b| b.is_ascii_alphabetic() || b == 0xC3);
        assert_eq!(read, "aç");
        assert!(reader.remaining().starts_with("ão"));
    }

    #[test]
    fn test_read_until_any() {
        let mut reader = Scanner::new("host:5060;branch=z9");

        assert_eq!(reader.read_until_any(b":;"), ("host", Some(b':')));
        reader.must_read(b':').unwrap();
        assert_eq!(reader.read_while(is_digit), "5060");
        assert_eq!(reader.read_until_any(b","), (";branch=z9", None));
        assert!(reader.is_eof());
    }

    #[test]
    fn test_read_until_literal() {
        let mut reader = Scanner::new("b\"ob\", realm=\"x\"");
        assert_eq!(reader.read_until_literal("\","), "b\"ob");
        assert!(reader.starts_with_ignore_case("\","));
        reader.bump_n(2);
        assert_eq!(reader.remaining(), " realm=\"x\"");

        let mut reader = Scanner::new("no literal");
        assert_eq!(reader.read_until_literal("\","), "no literal");
        assert!(reader.is_eof());
    }

    #[test]
    fn test_must_read() {
        let mut reader = Scanner::new("ab");

        assert_eq!(
            reader.must_read(b'x'),
            Err(Error {
                kind: ErrorKind::Char {
                    expected: b'x',
                    found: b'a'
                },
                line: 1,
                col: 1
            })
        );
        assert!(reader.must_read(b'a').is_ok());
        assert_eq!(reader.must_read(b'c').unwrap_err().col, 2);
    }

    #[test]
    fn test_read_token() {
        let mut reader = Scanner::new("  INVITE   sip:a@b  SIP/2.0 ");

        assert_eq!(reader.read_token(), Some("INVITE"));
        assert_eq!(reader.read_token(), Some("sip:a@b"));
        assert_eq!(reader.read_token(), Some("SIP/2.0"));
        assert_eq!(reader.read_token(), None);
    }

    #[test]
    fn test_position_tracks_lines() {
        let mut reader = Scanner::new("a\r\nbc");
        reader.read_while(|b| b != b'c');

        let err = reader.must_read(b'x').unwrap_err();
        assert_eq!((err.line, err.col), (2, 2));
    }
}
