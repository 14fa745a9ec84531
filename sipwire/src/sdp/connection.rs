use std::fmt;

use itertools::Itertools;
use util::Scanner;

use crate::config::DecodeOptions;

/// An SDP `c=` line: `nettype addrtype connection-address`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionData<'a> {
    pub net_type: Option<&'a str>,
    pub addr_type: Option<&'a str>,
    pub address: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl<'a> ConnectionData<'a> {
    /// Parses the text after `c=`.
    pub fn parse(value: &'a str, options: &DecodeOptions) -> Self {
        let mut scanner = Scanner::new(value);

        ConnectionData {
            net_type: scanner.read_token(),
            addr_type: scanner.read_token(),
            address: scanner.read_token(),
            src: options.src(value),
        }
    }
}

impl fmt::Display for ConnectionData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [self.net_type, self.addr_type, self.address];

        write!(f, "{}", fields.into_iter().flatten().format(" "))
    }
}
