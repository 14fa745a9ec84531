use std::fmt;

use itertools::Itertools;
use util::Scanner;

/// The fields of an SDP `o=` line.
///
/// `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
///
/// The decoder keeps the origin line whole; this type splits it on demand.
///
/// # Examples
///
/// ```
/// use sipwire::sdp::Origin;
///
/// let origin = Origin::parse("- 20518 0 IN IP4 203.0.113.1");
///
/// assert_eq!(origin.username, Some("-"));
/// assert_eq!(origin.session_id, Some("20518"));
/// assert_eq!(origin.unicast_address, Some("203.0.113.1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin<'a> {
    pub username: Option<&'a str>,
    pub session_id: Option<&'a str>,
    pub session_version: Option<&'a str>,
    pub net_type: Option<&'a str>,
    pub addr_type: Option<&'a str>,
    pub unicast_address: Option<&'a str>,
}

impl<'a> Origin<'a> {
    /// Splits an origin line value into its whitespace delimited fields.
    pub fn parse(value: &'a str) -> Self {
        let mut scanner = Scanner::new(value);

        Origin {
            username: scanner.read_token(),
            session_id: scanner.read_token(),
            session_version: scanner.read_token(),
            net_type: scanner.read_token(),
            addr_type: scanner.read_token(),
            unicast_address: scanner.read_token(),
        }
    }
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            self.username,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.unicast_address,
        ];

        write!(f, "{}", fields.into_iter().flatten().format(" "))
    }
}
