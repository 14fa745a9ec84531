use std::fmt;

use enum_as_inner::EnumAsInner;
use util::{is_digits, Scanner};

use super::uri::{non_empty, UriParts};
use super::{scan_params, FieldTable, Param, Scheme};
use crate::config::DecodeOptions;
use crate::macros::field_slots;

/// The SIP version used in the start line.
pub const SIPV2: &str = "SIP/2.0";

/// The user param used in SIP URIs.
const USER_PARAM: &str = "user";

/// The first line of a SIP message.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum StartLine<'a> {
    /// `METHOD uri SIP/2.0`
    Request(RequestLine<'a>),
    /// `SIP/2.0 code reason`
    Status(StatusLine<'a>),
}

impl<'a> StartLine<'a> {
    /// Parses the first line of a message.
    ///
    /// A line whose second token is all digits is a status line. Any other
    /// line with at least two tokens is a request line. A line with a single
    /// token (or none) is an empty request line.
    pub fn parse(line: &'a str, options: &DecodeOptions) -> Self {
        let mut scanner = Scanner::new(line);
        let first = scanner.read_token();
        let second = scanner.read_token();

        match (first, second) {
            (Some(version), Some(code)) if is_digits(code) => StartLine::Status(StatusLine {
                version: Some(version),
                code: Some(code),
                reason: non_empty(scanner.remaining()),
                src: options.src(line),
            }),
            (Some(method), Some(uri)) => {
                let mut request = RequestLine::parse_uri(uri);
                request.method = Some(method);
                request.src = options.src(line);
                StartLine::Request(request)
            }
            _ => StartLine::Request(RequestLine {
                src: options.src(line),
                ..Default::default()
            }),
        }
    }

    /// The source line, if it was kept.
    pub fn src(&self) -> Option<&'a str> {
        match self {
            StartLine::Request(request) => request.src,
            StartLine::Status(status) => status.src,
        }
    }
}

impl Default for StartLine<'_> {
    fn default() -> Self {
        StartLine::Request(RequestLine::default())
    }
}

impl fmt::Display for StartLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartLine::Request(request) => write!(f, "{request}"),
            StartLine::Status(status) => write!(f, "{status}"),
        }
    }
}

/// A request line: `METHOD scheme:user@host:port;user=type SIP/2.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: Option<&'a str>,
    pub scheme: Option<Scheme>,
    pub user: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    /// The `user=` URI parameter, e.g. `phone`.
    pub user_type: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl<'a> FieldTable<'a> for RequestLine<'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        field_slots!(name, self, USER_PARAM => user_type)
    }

    fn extension(&mut self, _param: Param<'a>) {}
}

impl<'a> RequestLine<'a> {
    fn parse_uri(uri: &'a str) -> Self {
        let mut request = RequestLine::default();
        let Some((scheme, body)) = Scheme::find(uri) else {
            return request;
        };
        let parts = UriParts::parse(body);

        request.scheme = Some(scheme);
        request.user = parts.user;
        request.host = parts.host;
        request.port = parts.port;
        scan_params(parts.user_params, b";", &mut request);
        scan_params(parts.params, b";?", &mut request);

        request
    }
}

impl fmt::Display for RequestLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme.unwrap_or_default();

        write!(f, "{} {}:", self.method.unwrap_or_default(), scheme)?;
        if let Some(user) = self.user {
            write!(f, "{user}@")?;
        }
        f.write_str(self.host.unwrap_or_default())?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        if let Some(user_type) = self.user_type {
            write!(f, ";{USER_PARAM}={user_type}")?;
        }

        write!(f, " {SIPV2}")
    }
}

/// A status line: `SIP/2.0 200 OK`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub version: Option<&'a str>,
    pub code: Option<&'a str>,
    /// The reason phrase, spaces included.
    pub reason: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl StatusLine<'_> {
    /// The status code as a number.
    pub fn code(&self) -> Option<u16> {
        self.code.and_then(|code| Scanner::new(code).read_num().ok())
    }
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.version.unwrap_or(SIPV2),
            self.code.unwrap_or_default()
        )?;
        if let Some(reason) = self.reason {
            write!(f, " {reason}")?;
        }
        Ok(())
    }
}
