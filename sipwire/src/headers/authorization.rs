use std::fmt;

use super::auth::{fmt_auth, scan_auth, AuthFields};
use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::field_slots;
use crate::message::{FieldTable, Param, Params};
use crate::parser::ParseCtx;

const USERNAME: &str = "username";
const REALM: &str = "realm";
const NONCE: &str = "nonce";
const URI: &str = "uri";
const RESPONSE: &str = "response";
const ALGORITHM: &str = "algorithm";
const OPAQUE: &str = "opaque";
const QOP: &str = "qop";
const NC: &str = "nc";
const CNONCE: &str = "cnonce";

/// The `Authorization` SIP header.
///
/// Contains authentication credentials of a `UA`. The header is present
/// when [`scheme`](Authorization::scheme) is set.
///
/// # Examples
///
/// ```
/// # use sipwire::headers::{Authorization, SipHeaderParse};
/// let auth = Authorization::from_value(
///     "Digest username=\"Alice\", realm=\"atlanta.com\", \
///      nonce=\"84a4cc6f3082121f32b42a2187831a9e\", \
///      response=\"7587245234b3434cc3412213e5f113a5432\"",
/// )
/// .unwrap();
///
/// assert_eq!(auth.scheme, Some("Digest"));
/// assert_eq!(auth.username, Some("Alice"));
/// assert_eq!(auth.realm, Some("atlanta.com"));
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Authorization<'a> {
    pub scheme: Option<&'a str>,
    pub username: Option<&'a str>,
    pub realm: Option<&'a str>,
    pub nonce: Option<&'a str>,
    pub uri: Option<&'a str>,
    pub response: Option<&'a str>,
    pub algorithm: Option<&'a str>,
    pub opaque: Option<&'a str>,
    pub qop: Option<&'a str>,
    pub nc: Option<&'a str>,
    pub cnonce: Option<&'a str>,
    /// Other auth params.
    pub params: Params<'a>,
    pub src: Option<&'a str>,
}

impl<'a> FieldTable<'a> for Authorization<'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(
            name,
            self,
            USERNAME => username,
            REALM => realm,
            NONCE => nonce,
            URI => uri,
            RESPONSE => response,
            ALGORITHM => algorithm,
            OPAQUE => opaque,
            QOP => qop,
            NC => nc,
            CNONCE => cnonce,
        )
    }

    fn extension(&mut self, param: Param<'a>) {
        self.params.push(param);
    }
}

impl<'a> AuthFields<'a> for Authorization<'a> {
    const CANONICAL_ORDER: &'static [&'static str] =
        &[USERNAME, REALM, NONCE, URI, RESPONSE, ALGORITHM, OPAQUE, QOP, NC, CNONCE];
}

impl<'a> SipHeaderParse<'a> for Authorization<'a> {
    const NAME: &'static str = "Authorization";
    /*
     * Authorization     =  "Authorization" HCOLON credentials
     * credentials       =  ("Digest" LWS digest-response)
     *                      / other-response
     * digest-response   =  dig-resp *(COMMA dig-resp)
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let mut auth = Authorization {
            src: ctx.src(),
            ..Default::default()
        };
        let scheme = scan_auth(ctx, &mut auth);
        auth.scheme = scheme;

        Ok(auth)
    }
}

impl fmt::Display for Authorization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", Authorization::NAME)?;
        fmt_auth(
            f,
            self.scheme,
            &[
                (USERNAME, self.username, true),
                (REALM, self.realm, true),
                (NONCE, self.nonce, true),
                (URI, self.uri, true),
                (RESPONSE, self.response, true),
                (ALGORITHM, self.algorithm, false),
                (OPAQUE, self.opaque, true),
                (QOP, self.qop, false),
                (NC, self.nc, false),
                (CNONCE, self.cnonce, true),
            ],
        )
    }
}
