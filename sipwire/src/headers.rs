//! SIP Headers types
//!
//! The typed headers understood by the decoder and the [`HeaderKind`] table
//! that maps header names (full and compact forms) to them.

mod address;
mod allow;
mod auth;
mod authorization;
mod contact;
mod cseq;
mod from;
mod to;
mod via;
mod www_authenticate;

pub use address::Address;
pub use allow::Allow;
pub use authorization::Authorization;
pub use contact::Contact;
pub use cseq::CSeq;
pub use from::From;
pub use to::To;
pub use via::{Transport, Via};
pub use www_authenticate::WwwAuthenticate;

use crate::config::DecodeOptions;
use crate::error::Result;
use crate::parser::ParseCtx;

/// Trait to parse SIP headers.
///
/// This trait defines how a specific SIP header type is parsed from the
/// value of a header line (the text after the colon, trimmed).
pub trait SipHeaderParse<'a>: Sized {
    /// The full name of the SIP header (e.g., `"Contact"`).
    const NAME: &'static str;

    /// Parses this header's value from the given `ParseCtx`.
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self>;

    /// Parses this header from a header value with the default options.
    ///
    /// This is a convenience method that creates a [`ParseCtx`] and delegates to
    /// [`parse`](SipHeaderParse::parse).
    fn from_value(value: &'a str) -> Result<Self> {
        Self::parse(&mut ParseCtx::new(value, DecodeOptions::new()))
    }
}

/// The name of the `Call-ID` header.
pub const CALL_ID: &str = "Call-ID";
/// The name of the `Max-Forwards` header.
pub const MAX_FORWARDS: &str = "Max-Forwards";
/// The name of the `User-Agent` header.
pub const USER_AGENT: &str = "User-Agent";
/// The name of the `Expires` header.
pub const EXPIRES: &str = "Expires";
/// The name of the `Content-Type` header.
pub const CONTENT_TYPE: &str = "Content-Type";
/// The name of the `Content-Length` header.
pub const CONTENT_LENGTH: &str = "Content-Length";
/// The name of the vendor public IP header, as written by the encoder.
pub const GAMMA_IP: &str = "X-Gamma-IP";

/// Every header the decoder keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Via,
    From,
    To,
    Contact,
    CallId,
    CSeq,
    MaxForwards,
    UserAgent,
    Expires,
    Authorization,
    WwwAuthenticate,
    Allow,
    ContentType,
    ContentLength,
    GammaIp,
}

/// Header names, full and compact, matched ignoring ASCII case.
const HEADER_TABLE: &[(&str, HeaderKind)] = &[
    (Via::NAME, HeaderKind::Via),
    ("v", HeaderKind::Via),
    (From::NAME, HeaderKind::From),
    ("f", HeaderKind::From),
    (To::NAME, HeaderKind::To),
    ("t", HeaderKind::To),
    (Contact::NAME, HeaderKind::Contact),
    ("m", HeaderKind::Contact),
    (CALL_ID, HeaderKind::CallId),
    ("i", HeaderKind::CallId),
    (CSeq::NAME, HeaderKind::CSeq),
    (MAX_FORWARDS, HeaderKind::MaxForwards),
    (USER_AGENT, HeaderKind::UserAgent),
    (EXPIRES, HeaderKind::Expires),
    (Authorization::NAME, HeaderKind::Authorization),
    (WwwAuthenticate::NAME, HeaderKind::WwwAuthenticate),
    (Allow::NAME, HeaderKind::Allow),
    (CONTENT_TYPE, HeaderKind::ContentType),
    ("c", HeaderKind::ContentType),
    (CONTENT_LENGTH, HeaderKind::ContentLength),
    ("l", HeaderKind::ContentLength),
    ("X-Gamma-Public-IP", HeaderKind::GammaIp),
    (GAMMA_IP, HeaderKind::GammaIp),
];

impl HeaderKind {
    /// Looks up a header name, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sipwire::headers::HeaderKind;
    ///
    /// assert_eq!(HeaderKind::lookup("call-id"), Some(HeaderKind::CallId));
    /// assert_eq!(HeaderKind::lookup("m"), Some(HeaderKind::Contact));
    /// assert_eq!(HeaderKind::lookup("Route"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        HEADER_TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, kind)| kind)
    }
}
