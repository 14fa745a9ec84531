use std::fmt;
use std::ops::{Deref, DerefMut};

use util::split_outside_quotes;

use super::address::{Address, AddressKind};
use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::parser::ParseCtx;

/// The `Contact` SIP header.
///
/// Only the first contact of a comma separated list is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact<'a>(pub Address<'a>);

impl<'a> Deref for Contact<'a> {
    type Target = Address<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Contact<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> SipHeaderParse<'a> for Contact<'a> {
    const NAME: &'static str = "Contact";
    /*
     * Contact        =  ("Contact" / "m" ) HCOLON
     *                   ( STAR / (contact-param *(COMMA contact-param)))
     * contact-param  =  (name-addr / addr-spec) *(SEMI contact-params)
     * contact-params     =  c-p-q / c-p-expires
     *                       / contact-extension
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let first = split_outside_quotes(ctx.value(), b',').next().unwrap_or_default();
        let ctx = ParseCtx::new(first.trim(), *ctx.options());

        Address::parse(&ctx, AddressKind::Contact).map(Contact)
    }
}

impl fmt::Display for Contact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", Contact::NAME)?;
        self.0.fmt_contact(f)
    }
}
