use std::fmt;
use std::ops::{Deref, DerefMut};

use super::address::{Address, AddressKind};
use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::parser::ParseCtx;

/// The `To` SIP header.
///
/// Specifies the logical recipient of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct To<'a>(pub Address<'a>);

impl<'a> Deref for To<'a> {
    type Target = Address<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for To<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> SipHeaderParse<'a> for To<'a> {
    const NAME: &'static str = "To";
    /*
     * To        =  ( "To" / "t" ) HCOLON ( name-addr
     *              / addr-spec ) *( SEMI to-param )
     * to-param  =  tag-param / generic-param
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        Address::parse(ctx, AddressKind::NameAddr).map(To)
    }
}

impl fmt::Display for To<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", To::NAME)?;
        self.0.fmt_name_addr(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse() {
        let to = To::from_value("<sip:8660000101304799968;phone-context=+44@10.120.38.17;user=phone>").unwrap();

        assert_eq!(to.user, Some("8660000101304799968"));
        assert_eq!(to.host, Some("10.120.38.17"));
        assert_eq!(to.tag, None);
        assert_eq!(to.params.len(), 2);
    }

    #[test]
    fn test_missing_scheme() {
        assert_eq!(To::from_value("<bob@biloxi.com>"), Err(Error::UnsupportedScheme));
    }

    #[test]
    fn test_encode() {
        let to = To::from_value("Bob <sips:bob@biloxi.com:5061>;tag=287447").unwrap();

        assert_eq!(to.to_string(), "To: \"Bob\" <sips:bob@biloxi.com:5061>;tag=287447");
    }
}
