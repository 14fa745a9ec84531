use std::fmt;

use util::{is_space, space, until, Scanner};

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::macros::{field_slots, write_param};
use crate::message::{non_empty, scan_params, FieldTable, Param, Params, SIPV2};
use crate::parser::ParseCtx;

const MADDR_PARAM: &str = "maddr";
const BRANCH_PARAM: &str = "branch";
const TTL_PARAM: &str = "ttl";
const RPORT_PARAM: &str = "rport";
const RECEIVED_PARAM: &str = "received";

/// The transport of a `Via` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Udp,
    Tcp,
    Tls,
    Sctp,
    Ws,
    Wss,
}

impl Transport {
    const ALL: [Transport; 6] = [
        Transport::Udp,
        Transport::Tcp,
        Transport::Tls,
        Transport::Sctp,
        Transport::Ws,
        Transport::Wss,
    ];

    /// Matches a transport token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|transport| transport.as_str().eq_ignore_ascii_case(token))
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
            Transport::Tls => "tls",
            Transport::Sctp => "sctp",
            Transport::Ws => "ws",
            Transport::Wss => "wss",
        }
    }

    /// The name as written on the wire.
    pub fn as_upper(&self) -> &'static str {
        match self {
            Transport::Udp => "UDP",
            Transport::Tcp => "TCP",
            Transport::Tls => "TLS",
            Transport::Sctp => "SCTP",
            Transport::Ws => "WS",
            Transport::Wss => "WSS",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `Via` SIP header.
///
/// Indicates the path taken by the request so far and the
/// path that should be followed in routing responses.
///
/// # Examples
/// ```
/// # use sipwire::headers::{SipHeaderParse, Transport, Via};
/// let via = Via::from_value("SIP/2.0/UDP server10.biloxi.com;branch=z9hG4bKnashds8;rport").unwrap();
///
/// assert_eq!(via.transport, Some(Transport::Udp));
/// assert_eq!(via.host, Some("server10.biloxi.com"));
/// assert_eq!(via.branch, Some("z9hG4bKnashds8"));
/// assert_eq!(via.rport, Some(""));
/// assert_eq!(
///     via.to_string(),
///     "Via: SIP/2.0/UDP server10.biloxi.com;rport;branch=z9hG4bKnashds8"
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Via<'a> {
    pub transport: Option<Transport>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    pub branch: Option<&'a str>,
    /// `Some("")` when `rport` is present without a value.
    pub rport: Option<&'a str>,
    pub maddr: Option<&'a str>,
    pub ttl: Option<&'a str>,
    pub received: Option<&'a str>,
    /// Extension parameters.
    pub params: Params<'a>,
    pub src: Option<&'a str>,
}

impl<'a> FieldTable<'a> for Via<'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(
            name,
            self,
            BRANCH_PARAM => branch,
            RPORT_PARAM => rport,
            MADDR_PARAM => maddr,
            TTL_PARAM => ttl,
            RECEIVED_PARAM => received,
        )
    }

    fn extension(&mut self, param: Param<'a>) {
        self.params.push(param);
    }
}

impl<'a> Via<'a> {
    /// Reads `host[:port]`, stopping at `;`.
    fn read_sent_by(&mut self, scanner: &mut Scanner<'a>) {
        space!(scanner);
        let rest = scanner.remaining();
        let host = if rest.starts_with('[') {
            let len = rest.find(']').map_or(rest.len(), |end| end + 1);
            scanner.bump_n(len);
            &rest[..len]
        } else {
            scanner.read_until_any(b":; \t").0
        };
        self.host = non_empty(host);

        space!(scanner);
        if scanner.consume_if(|b| b == b':').is_some() {
            let (port, _) = scanner.read_until_any(b"; \t");
            self.port = non_empty(port);
        }
    }
}

impl<'a> SipHeaderParse<'a> for Via<'a> {
    const NAME: &'static str = "Via";
    /*
     * Via               =  ( "Via" / "v" ) HCOLON via-parm *(COMMA via-parm)
     * via-parm          =  sent-protocol LWS sent-by *( SEMI via-params )
     * via-params        =  via-ttl / via-maddr
     *                      / via-received / via-branch
     *                      / via-extension
     * sent-protocol     =  protocol-name SLASH protocol-version
     *                      SLASH transport
     * transport         =  "UDP" / "TCP" / "TLS" / "SCTP"
     *                      / other-transport
     * sent-by           =  host [ COLON port ]
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let mut via = Via {
            src: ctx.src(),
            ..Default::default()
        };

        space!(ctx);
        if ctx.starts_with_ignore_case(SIPV2) {
            ctx.bump_n(SIPV2.len());
            ctx.must_read(b'/')?;
            let token = ctx.read_while(|b| !is_space(b) && b != b';');
            via.transport = Transport::from_token(token);
            if via.transport.is_none() {
                log::trace!("Unknown Via transport: {token}");
            }
            via.read_sent_by(ctx);
        }

        until!(ctx, b';');
        scan_params(ctx.remaining(), b";", &mut via);

        Ok(via)
    }
}

impl fmt::Display for Via<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transport = self.transport.map_or("", |transport| transport.as_upper());

        write!(f, "{}: {}/{} {}", Via::NAME, SIPV2, transport, self.host.unwrap_or_default())?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        match self.rport {
            Some("") => write!(f, ";{RPORT_PARAM}")?,
            rport => write_param!(f, RPORT_PARAM, rport),
        }
        write_param!(f, BRANCH_PARAM, self.branch);
        write_param!(f, MADDR_PARAM, self.maddr);
        write_param!(f, TTL_PARAM, self.ttl);
        write_param!(f, RECEIVED_PARAM, self.received);

        write!(f, "{}", self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse() {
        let via = Via::from_value("SIP/2.0/UDP bobspc.biloxi.com:5060;received=192.0.2.4").unwrap();

        assert_eq!(via.transport, Some(Transport::Udp));
        assert_eq!(via.host, Some("bobspc.biloxi.com"));
        assert_eq!(via.port, Some("5060"));
        assert_eq!(via.received, Some("192.0.2.4"));

        let via = Via::from_value("SIP/2.0/UDP 192.0.2.1:5060 ;received=192.0.2.207 ;branch=z9hG4bK77asjd").unwrap();

        assert_eq!(via.host, Some("192.0.2.1"));
        assert_eq!(via.port, Some("5060"));
        assert_eq!(via.received, Some("192.0.2.207"));
        assert_eq!(via.branch, Some("z9hG4bK77asjd"));
    }

    #[test]
    fn test_lowercase_transport_and_empty_rport() {
        let via = Via::from_value("SIP/2.0/udp 127.0.0.1:65223;branch=z9hG4bK-524287-1---5e8f2c2b;rport=").unwrap();

        assert_eq!(via.transport, Some(Transport::Udp));
        assert_eq!(via.transport.map(|t| t.as_str()), Some("udp"));
        assert_eq!(via.host, Some("127.0.0.1"));
        assert_eq!(via.port, Some("65223"));
        assert_eq!(via.branch, Some("z9hG4bK-524287-1---5e8f2c2b"));
        assert_eq!(via.rport, Some(""));
    }

    #[test]
    fn test_every_transport() {
        for (token, transport) in [
            ("TCP", Transport::Tcp),
            ("tls", Transport::Tls),
            ("Sctp", Transport::Sctp),
            ("WS", Transport::Ws),
            ("wss", Transport::Wss),
        ] {
            let value = format!("SIP/2.0/{token} host");
            let via = Via::from_value(&value).unwrap();
            assert_eq!(via.transport, Some(transport));
            assert_eq!(via.host, Some("host"));
        }
    }

    #[test]
    fn test_unknown_transport_is_skipped() {
        let via = Via::from_value("SIP/2.0/QUIC host.example:5062;branch=z9hG4bK1").unwrap();

        assert_eq!(via.transport, None);
        assert_eq!(via.host, Some("host.example"));
        assert_eq!(via.port, Some("5062"));
        assert_eq!(via.branch, Some("z9hG4bK1"));
    }

    #[test]
    fn test_without_sent_protocol() {
        let via = Via::from_value("host.example;branch=z9hG4bK9").unwrap();

        assert_eq!(via.transport, None);
        assert_eq!(via.host, None);
        assert_eq!(via.branch, Some("z9hG4bK9"));
    }

    #[test]
    fn test_missing_transport_slash() {
        assert_matches!(Via::from_value("SIP/2.0 host.example"), Err(Error::Scan(_)));
    }

    #[test]
    fn test_ipv6_and_extension_params() {
        let via = Via::from_value("SIP/2.0/TCP [2001:db8::9]:5060;ttl=16;maddr=224.2.0.1;x-id=7;lr").unwrap();

        assert_eq!(via.host, Some("[2001:db8::9]"));
        assert_eq!(via.port, Some("5060"));
        assert_eq!(via.ttl, Some("16"));
        assert_eq!(via.maddr, Some("224.2.0.1"));
        assert_eq!(via.params.get("x-id"), Some(Some("7")));
        assert_eq!(via.params.get("lr"), Some(None));
    }

    #[test]
    fn test_encode() {
        let via = Via::from_value("SIP/2.0/tcp pc33.atlanta.com;received=10.0.0.1;rport=5060;branch=z9hG4bK776").unwrap();

        assert_eq!(
            via.to_string(),
            "Via: SIP/2.0/TCP pc33.atlanta.com;rport=5060;branch=z9hG4bK776;received=10.0.0.1"
        );
    }
}
