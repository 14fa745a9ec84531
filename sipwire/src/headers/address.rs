use std::fmt;

use util::unquote;

use crate::error::{Error, Result};
use crate::macros::{field_slots, write_param};
use crate::message::{non_empty, scan_params, split_host_port, FieldTable, Param, Params, Scheme, UriParts};
use crate::parser::ParseCtx;

const TAG_PARAM: &str = "tag";
const Q_PARAM: &str = "q";
const EXPIRES_PARAM: &str = "expires";
const TRANSPORT_PARAM: &str = "transport";
const MADDR_PARAM: &str = "maddr";
const TGRP_PARAM: &str = "tgrp";
const TRUNK_CONTEXT_PARAM: &str = "trunk-context";

/// Which header an [`Address`] is decoded for.
///
/// `From` and `To` require a scheme and extract `tag`; `Contact` tolerates
/// a missing scheme and extracts its own set of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressKind {
    NameAddr,
    Contact,
}

/// The value of an address header (`From`, `To`, `Contact`).
///
/// Named parameters are pulled out of [`params`](Address::params) into
/// their own field; which ones depends on the header. `From` and `To` only
/// extract `tag`, `Contact` extracts `q`, `expires`, `transport`, `maddr`,
/// `tgrp` and `trunk-context`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address<'a> {
    pub scheme: Option<Scheme>,
    /// The display name, without quotes.
    pub display: Option<&'a str>,
    pub user: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    /// Every parameter without a dedicated field, in encounter order.
    pub params: Params<'a>,
    pub tag: Option<&'a str>,
    pub transport: Option<&'a str>,
    pub q: Option<&'a str>,
    pub expires: Option<&'a str>,
    pub maddr: Option<&'a str>,
    pub tgrp: Option<&'a str>,
    pub trunk_context: Option<&'a str>,
    pub src: Option<&'a str>,
}

struct NameAddrParams<'r, 'a>(&'r mut Address<'a>);

impl<'a> FieldTable<'a> for NameAddrParams<'_, 'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(name, self.0, TAG_PARAM => tag)
    }

    fn extension(&mut self, param: Param<'a>) {
        self.0.params.push(param);
    }
}

struct ContactParams<'r, 'a>(&'r mut Address<'a>);

impl<'a> FieldTable<'a> for ContactParams<'_, 'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(
            name,
            self.0,
            Q_PARAM => q,
            EXPIRES_PARAM => expires,
            TRANSPORT_PARAM => transport,
            MADDR_PARAM => maddr,
            TGRP_PARAM => tgrp,
            TRUNK_CONTEXT_PARAM => trunk_context,
        )
    }

    fn extension(&mut self, param: Param<'a>) {
        self.0.params.push(param);
    }
}

impl<'a> Address<'a> {
    /*
     * name-addr      =  [ display-name ] LAQUOT addr-spec RAQUOT
     * addr-spec      =  SIP-URI / SIPS-URI / absoluteURI
     * display-name   =  *(token LWS)/ quoted-string
     * SIP-URI        =  "sip:" [ userinfo ] hostport
     *                   uri-parameters [ headers ]
     * userinfo       =  ( user / telephone-subscriber ) [ ":" password ] "@"
     */
    pub(crate) fn parse(ctx: &ParseCtx<'a>, kind: AddressKind) -> Result<Self> {
        let value = ctx.value();
        let mut addr = Address {
            src: ctx.src(),
            ..Default::default()
        };

        let (uri, outside) = match find_laquot(value) {
            Some(lt) => {
                addr.display = non_empty(unquote(&value[..lt]));
                let inner = &value[lt + 1..];
                let gt = inner.find('>').ok_or(Error::UnclosedBracket)?;
                (&inner[..gt], &inner[gt + 1..])
            }
            None if value.contains('>') => return Err(Error::UnopenedBracket),
            None => (value, ""),
        };

        match Scheme::find(uri) {
            Some((scheme, body)) => {
                let parts = UriParts::parse(body);

                addr.scheme = Some(scheme);
                addr.user = parts.user;
                addr.host = parts.host;
                addr.port = parts.port;
                addr.scan_params(kind, parts.user_params, b";");
                addr.scan_params(kind, parts.params, b";?");
            }
            None if kind == AddressKind::Contact => (),
            None => return Err(Error::UnsupportedScheme),
        }
        addr.scan_params(kind, outside, b";");

        // trunk-context=user@host:port points at the real gateway.
        if let Some((_, host_port)) = addr.trunk_context.and_then(|tc| tc.split_once('@')) {
            if let (Some(host), Some(port)) = split_host_port(host_port) {
                addr.host = Some(host);
                addr.port = Some(port);
            }
        }
        if addr.host.is_none() {
            addr.user = None;
        }

        Ok(addr)
    }

    fn scan_params(&mut self, kind: AddressKind, src: &'a str, delims: &[u8]) {
        match kind {
            AddressKind::NameAddr => scan_params(src, delims, &mut NameAddrParams(self)),
            AddressKind::Contact => scan_params(src, delims, &mut ContactParams(self)),
        }
    }

    /// Writes `"display" ` when there is a display name.
    pub(crate) fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display {
            Some(display) => write!(f, "\"{display}\" "),
            None => Ok(()),
        }
    }

    /// Writes `scheme:[user@]host[:port]`.
    pub(crate) fn fmt_uri(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme.unwrap_or_default())?;
        if let Some(user) = self.user {
            write!(f, "{user}@")?;
        }
        self.fmt_host_port(f)
    }

    pub(crate) fn fmt_host_port(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host.unwrap_or_default())?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }

    /// Writes the `From`/`To` value: `["display" ]<uri>[;tag=T]`.
    pub(crate) fn fmt_name_addr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_display(f)?;
        f.write_str("<")?;
        self.fmt_uri(f)?;
        f.write_str(">")?;
        write_param!(f, TAG_PARAM, self.tag);

        Ok(())
    }

    /// Writes the `Contact` value.
    ///
    /// `tgrp` and `trunk-context` go before the `@` as user parameters.
    /// Without a user they follow the host as URI parameters, and so does
    /// a `trunk-context` that holds an `@` of its own. `q` and `expires`
    /// follow the closing bracket.
    pub(crate) fn fmt_contact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_display(f)?;
        write!(f, "<{}:", self.scheme.unwrap_or_default())?;

        let mut uri_tgrp = self.tgrp;
        let mut uri_trunk_context = self.trunk_context;
        if let Some(user) = self.user {
            f.write_str(user)?;
            write_param!(f, TGRP_PARAM, uri_tgrp.take());
            write_param!(f, TRUNK_CONTEXT_PARAM, uri_trunk_context.take_if(|tc| !tc.contains('@')));
            f.write_str("@")?;
        } else if let Some(tc) = uri_trunk_context {
            // The first `@` of the URI would be read as the user separator.
            uri_trunk_context = tc.split('@').next();
        }
        self.fmt_host_port(f)?;
        write_param!(f, TGRP_PARAM, uri_tgrp);
        write_param!(f, TRUNK_CONTEXT_PARAM, uri_trunk_context);
        write_param!(f, TRANSPORT_PARAM, self.transport);
        write_param!(f, MADDR_PARAM, self.maddr);
        f.write_str(">")?;
        write_param!(f, Q_PARAM, self.q);
        write_param!(f, EXPIRES_PARAM, self.expires);

        Ok(())
    }
}

/// Position of the `<` opening the URI, skipping a quoted display name.
fn find_laquot(value: &str) -> Option<usize> {
    let start = match value.strip_prefix('"') {
        Some(rest) => rest.find('"').map_or(0, |end| end + 2),
        None => 0,
    };

    value[start..].find('<').map(|lt| lt + start)
}
