use std::fmt;

use itertools::Itertools;
use util::Scanner;

use crate::config::DecodeOptions;
use crate::message::non_empty;

/// An SDP `m=` line: `media port proto fmt ...`.
///
/// [`fmt`](MediaDescription::fmt) holds the whole format list as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDescription<'a> {
    pub media_type: Option<&'a str>,
    pub port: Option<&'a str>,
    pub proto: Option<&'a str>,
    pub fmt: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl<'a> MediaDescription<'a> {
    /// Parses the text after `m=`.
    pub fn parse(value: &'a str, options: &DecodeOptions) -> Self {
        let mut scanner = Scanner::new(value);

        MediaDescription {
            media_type: scanner.read_token(),
            port: scanner.read_token(),
            proto: scanner.read_token(),
            fmt: non_empty(scanner.remaining().trim()),
            src: options.src(value),
        }
    }

    /// The format list, split on whitespace.
    pub fn formats(&self) -> impl Iterator<Item = &'a str> {
        self.fmt.unwrap_or_default().split_ascii_whitespace()
    }
}

impl fmt::Display for MediaDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [self.media_type, self.port, self.proto, self.fmt];

        write!(f, "{}", fields.into_iter().flatten().format(" "))
    }
}
