use std::fmt;

use super::auth::{fmt_auth, scan_auth, AuthFields};
use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::field_slots;
use crate::message::{FieldTable, Param, Params};
use crate::parser::ParseCtx;

const REALM: &str = "realm";
const DOMAIN: &str = "domain";
const QOP: &str = "qop";
const NONCE: &str = "nonce";
const OPAQUE: &str = "opaque";
const STALE: &str = "stale";
const ALGORITHM: &str = "algorithm";

/// The `WWW-Authenticate` SIP header.
///
/// Consists of at least one challenge.
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct WwwAuthenticate<'a> {
    pub scheme: Option<&'a str>,
    pub realm: Option<&'a str>,
    pub domain: Option<&'a str>,
    pub qop: Option<&'a str>,
    pub nonce: Option<&'a str>,
    pub opaque: Option<&'a str>,
    pub stale: Option<&'a str>,
    pub algorithm: Option<&'a str>,
    pub params: Params<'a>,
    pub src: Option<&'a str>,
}

impl<'a> FieldTable<'a> for WwwAuthenticate<'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(
            name,
            self,
            REALM => realm,
            DOMAIN => domain,
            QOP => qop,
            NONCE => nonce,
            OPAQUE => opaque,
            STALE => stale,
            ALGORITHM => algorithm,
        )
    }

    fn extension(&mut self, param: Param<'a>) {
        self.params.push(param);
    }
}

impl<'a> AuthFields<'a> for WwwAuthenticate<'a> {
    const CANONICAL_ORDER: &'static [&'static str] = &[REALM, DOMAIN, QOP, NONCE, OPAQUE, STALE, ALGORITHM];
}

impl<'a> SipHeaderParse<'a> for WwwAuthenticate<'a> {
    const NAME: &'static str = "WWW-Authenticate";
    /*
     * WWW-Authenticate  =  "WWW-Authenticate" HCOLON challenge
     * challenge         =  ("Digest" LWS digest-cln *(COMMA digest-cln))
     *                      / other-challenge
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let mut challenge = WwwAuthenticate {
            src: ctx.src(),
            ..Default::default()
        };
        let scheme = scan_auth(ctx, &mut challenge);
        challenge.scheme = scheme;

        Ok(challenge)
    }
}

impl fmt::Display for WwwAuthenticate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", WwwAuthenticate::NAME)?;
        fmt_auth(
            f,
            self.scheme,
            &[
                (REALM, self.realm, true),
                (DOMAIN, self.domain, true),
                (QOP, self.qop, true),
                (NONCE, self.nonce, true),
                (OPAQUE, self.opaque, true),
                (STALE, self.stale, false),
                (ALGORITHM, self.algorithm, false),
            ],
        )
    }
}
