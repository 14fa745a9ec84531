use std::fmt;
use std::ops::{Deref, DerefMut};

use super::address::{Address, AddressKind};
use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::parser::ParseCtx;

/// The `From` SIP header.
///
/// Indicates the initiator of the request.
///
/// # Examples
///
/// ```
/// # use sipwire::headers::{From, SipHeaderParse};
/// let from = From::from_value("\"Bob\" <sip:bob@biloxi.com>;tag=a73kszlfl").unwrap();
///
/// assert_eq!(from.display, Some("Bob"));
/// assert_eq!(from.tag, Some("a73kszlfl"));
/// assert_eq!(from.to_string(), "From: \"Bob\" <sip:bob@biloxi.com>;tag=a73kszlfl");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct From<'a>(pub Address<'a>);

impl<'a> Deref for From<'a> {
    type Target = Address<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for From<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> SipHeaderParse<'a> for From<'a> {
    const NAME: &'static str = "From";
    /*
     * From        =  ( "From" / "f" ) HCOLON from-spec
     * from-spec   =  ( name-addr / addr-spec )
     *                *( SEMI from-param )
     * from-param  =  tag-param / generic-param
     * tag-param   =  "tag" EQUAL token
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        Address::parse(ctx, AddressKind::NameAddr).map(From)
    }
}

impl fmt::Display for From<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", From::NAME)?;
        self.0.fmt_name_addr(f)
    }
}
