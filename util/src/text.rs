//! Byte classes and small string helpers shared by the field parsers.

/// Space or horizontal tab.
#[inline(always)]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

/// ASCII digit.
#[inline(always)]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `s` is non-empty and made only of ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_digit)
}

/// Trims whitespace and then one pair of surrounding double quotes.
///
/// A lone quote on either side is removed as well.
pub fn unquote(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);

    s.strip_suffix('"').unwrap_or(s)
}

/// Splits `s` on every `sep` that is outside double quotes and outside
/// angle brackets.
///
/// Items are returned untrimmed; empty items are kept.
pub fn split_outside_quotes(s: &str, sep: u8) -> SplitOutsideQuotes<'_> {
    SplitOutsideQuotes {
        rest: Some(s),
        sep,
    }
}

/// Iterator returned by [`split_outside_quotes`].
#[derive(Debug, Clone)]
pub struct SplitOutsideQuotes<'a> {
    rest: Option<&'a str>,
    sep: u8,
}

impl<'a> Iterator for SplitOutsideQuotes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let mut quoted = false;
        let mut depth = 0usize;

        for (i, b) in rest.bytes().enumerate() {
            match b {
                b'"' => quoted = !quoted,
                b'<' if !quoted => depth += 1,
                b'>' if !quoted => depth = depth.saturating_sub(1),
                b if b == self.sep && !quoted && depth == 0 => {
                    self.rest = rest.get(i + 1..);
                    return rest.get(..i);
                }
                _ => (),
            }
        }
        self.rest = None;

        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(" \"bob\" "), "bob");
        assert_eq!(unquote("bob"), "bob");
        assert_eq!(unquote("\"bob"), "bob");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn test_split_outside_quotes() {
        let items: Vec<_> =
            split_outside_quotes(r#"Digest realm="a,b", nonce="n", qop=auth"#, b',').collect();

        assert_eq!(items, [r#"Digest realm="a,b""#, r#" nonce="n""#, " qop=auth"]);
    }

    #[test]
    fn test_split_ignores_bracketed_separator() {
        let items: Vec<_> = split_outside_quotes("<sip:a@b;x=1,2>;q=1, <sip:c@d>", b',').collect();

        assert_eq!(items, ["<sip:a@b;x=1,2>;q=1", " <sip:c@d>"]);
    }

    #[test]
    fn test_split_keeps_empty_items() {
        let items: Vec<_> = split_outside_quotes("a,,b,", b',').collect();

        assert_eq!(items, ["a", "", "b", ""]);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("200"));
        assert!(!is_digits(""));
        assert!(!is_digits("20a"));
    }
}
