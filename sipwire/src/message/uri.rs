use std::fmt;

/// The "sip" schema used in SIP URIs.
const SIP: &str = "sip";
/// The "sips" schema used in SIP URIs.
const SIPS: &str = "sips";

/// The URI scheme of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `sip:`
    #[default]
    Sip,
    /// `sips:`
    Sips,
}

impl Scheme {
    /// The scheme name, without the colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => SIP,
            Scheme::Sips => SIPS,
        }
    }

    /// Finds the first `sip:` or `sips:` prefix in `s`, ignoring ASCII case.
    ///
    /// Returns the scheme and the rest of `s` after the colon.
    pub(crate) fn find(s: &str) -> Option<(Scheme, &str)> {
        let bytes = s.as_bytes();

        (0..bytes.len()).find_map(|start| {
            let head = bytes.get(start..start + SIP.len())?;
            if !head.eq_ignore_ascii_case(SIP.as_bytes()) {
                return None;
            }
            let after = start + SIP.len();
            match bytes.get(after) {
                Some(b':') => Some((Scheme::Sip, s.get(after + 1..)?)),
                Some(b's' | b'S') if bytes.get(after + 1) == Some(&b':') => {
                    Some((Scheme::Sips, s.get(after + 2..)?))
                }
                _ => None,
            }
        })
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits `host[:port]`, keeping IPv6 references (`[::1]`) whole.
///
/// Empty parts are returned as `None`.
pub(crate) fn split_host_port(s: &str) -> (Option<&str>, Option<&str>) {
    let s = s.trim();
    let (host, port) = match s.strip_prefix('[').and_then(|rest| rest.find(']')) {
        // `]` is at `end + 1` in `s`.
        Some(end) => {
            let (host, rest) = s.split_at(end + 2);
            (host, rest.strip_prefix(':'))
        }
        None => match s.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (s, None),
        },
    };

    (non_empty(host), port.and_then(non_empty))
}

/// Trims `s`, returning `None` when nothing is left.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// The components of a SIP URI body, that is the text after `sip:`.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub user: Option<&'a str>,
    /// Parameters some user agents place inside the user part.
    pub user_params: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    /// Everything after the host and port, starting with `;` or `?`.
    pub params: &'a str,
}

impl<'a> UriParts<'a> {
    /// Splits `user[:password][;params]@host[:port][;params][?headers]`.
    ///
    /// The password is dropped. Without an `@` there is no user and the
    /// whole body is the host part.
    pub(crate) fn parse(body: &'a str) -> Self {
        let (user_info, host_part) = match body.split_once('@') {
            Some((user_info, host_part)) => (Some(user_info), host_part),
            None => (None, body),
        };

        let mut parts = UriParts::default();
        if let Some(user_info) = user_info {
            let (token, user_params) = user_info.split_once(';').unwrap_or((user_info, ""));
            let user = token.split(':').next().unwrap_or_default().trim();

            parts.user = (!user.is_empty()).then_some(user);
            parts.user_params = user_params;
        }

        let end = host_part.find([';', '?']).unwrap_or(host_part.len());
        let (host_port, params) = host_part.split_at(end);
        (parts.host, parts.port) = split_host_port(host_port);
        parts.params = params;

        parts
    }
}
