//! SIP Parser
//!
//! The module provides the [`Parser`] struct, which turns the text of a SIP
//! request or response into a [`Message`], and [`ParseCtx`], the cursor
//! every header decoder reads its value from.
//!
//! Decoding is line oriented and lenient: a line is a header when a `:`
//! comes before any `=`, an SDP line when `=` is its second character, and
//! is ignored otherwise.

use std::ops::{Deref, DerefMut};
use std::str;

use util::{split_outside_quotes, Scanner};

use crate::config::DecodeOptions;
use crate::headers::{HeaderKind, SipHeaderParse};
use crate::message::{non_empty, Message, StartLine};
use crate::sdp::{Attribute, ConnectionData, MediaDescription, SessionDescription};

/// The value of a header being decoded.
///
/// Derefs to a [`Scanner`] over the value, which has already been trimmed.
#[derive(Debug, Clone)]
pub struct ParseCtx<'a> {
    scanner: Scanner<'a>,
    value: &'a str,
    options: DecodeOptions,
}

impl<'a> ParseCtx<'a> {
    /// Creates a context positioned at the start of `value`.
    pub fn new(value: &'a str, options: DecodeOptions) -> Self {
        Self {
            scanner: Scanner::new(value),
            value,
            options,
        }
    }

    /// The whole header value.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// The options of the current decode call.
    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// The header value, if source text is kept.
    #[inline]
    pub fn src(&self) -> Option<&'a str> {
        self.options.src(self.value)
    }
}

impl<'a> Deref for ParseCtx<'a> {
    type Target = Scanner<'a>;

    fn deref(&self) -> &Self::Target {
        &self.scanner
    }
}

impl DerefMut for ParseCtx<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.scanner
    }
}

/// A SIP message parser.
///
/// `Parser` holds nothing but the [`DecodeOptions`] it was built with, so
/// one value can decode any number of buffers, from any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser {
    options: DecodeOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Parses `buf` into a [`Message`].
    ///
    /// This never fails: unknown lines are skipped and a header that cannot
    /// be decoded keeps its default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sipwire::Parser;
    ///
    /// let buf = b"SIP/2.0 200 OK\r\nCSeq: 1 REGISTER\r\nContent-Length: 0\r\n\r\n";
    /// let msg = Parser::default().parse(buf);
    /// let status = msg.status().unwrap();
    ///
    /// assert_eq!(status.code(), Some(200));
    /// assert_eq!(status.reason, Some("OK"));
    /// assert_eq!(msg.cseq.method, Some("REGISTER"));
    /// ```
    pub fn parse<'a>(&self, buf: &'a [u8]) -> Message<'a> {
        let mut msg = Message::default();
        let mut lines = split_lines(buf).into_iter();

        if let Some(line) = lines.next().and_then(to_str) {
            msg.start_line = StartLine::parse(line.trim(), &self.options);
        }

        for line in lines.filter_map(to_str) {
            self.parse_line(line.trim(), &mut msg);
        }

        msg
    }

    fn parse_line<'a>(&self, line: &'a str, msg: &mut Message<'a>) {
        match line.find([':', '=']) {
            Some(colon) if colon > 0 && line.as_bytes()[colon] == b':' => {
                let name = line[..colon].trim();
                let value = line[colon + 1..].trim();
                self.parse_header(name, value, msg);
            }
            // `=` is the second byte, so the first one is ASCII.
            Some(1) => self.parse_sdp_line(line.as_bytes()[0], line[2..].trim(), msg),
            _ => (),
        }
    }

    fn parse_header<'a>(&self, name: &'a str, value: &'a str, msg: &mut Message<'a>) {
        let Some(kind) = HeaderKind::lookup(name) else {
            log::trace!("Skipping unknown header: {name}");
            return;
        };

        match kind {
            HeaderKind::Via => {
                for item in split_outside_quotes(value, b',') {
                    let item = item.trim();
                    if !item.is_empty() {
                        msg.via.push(self.header(item));
                    }
                }
            }
            HeaderKind::From => msg.from = self.header(value),
            HeaderKind::To => msg.to = self.header(value),
            HeaderKind::Contact => msg.contact = self.header(value),
            HeaderKind::CSeq => msg.cseq = self.header(value),
            HeaderKind::Authorization => msg.authorization = self.header(value),
            HeaderKind::WwwAuthenticate => msg.www_authenticate = self.header(value),
            HeaderKind::Allow => msg.allow = self.header(value),
            HeaderKind::CallId => msg.call_id = non_empty(value),
            HeaderKind::MaxForwards => msg.max_forwards = non_empty(value),
            HeaderKind::UserAgent => msg.user_agent = non_empty(value),
            HeaderKind::Expires => msg.expires = non_empty(value),
            HeaderKind::ContentType => msg.content_type = non_empty(value),
            HeaderKind::ContentLength => msg.content_length = non_empty(value),
            HeaderKind::GammaIp => msg.gamma_ip = non_empty(value),
        }
    }

    /// Decodes one header, falling back to its default on error.
    fn header<'a, H>(&self, value: &'a str) -> H
    where
        H: SipHeaderParse<'a> + Default,
    {
        let mut ctx = ParseCtx::new(value, self.options);

        H::parse(&mut ctx).unwrap_or_else(|err| {
            log::debug!("Failed to parse {} header '{value}': {err}", H::NAME);
            H::default()
        })
    }

    fn parse_sdp_line<'a>(&self, tag: u8, value: &'a str, msg: &mut Message<'a>) {
        let tag = tag.to_ascii_lowercase();
        if !b"vostmca".contains(&tag) {
            log::trace!("Skipping unknown SDP line: {}={value}", tag as char);
            return;
        }
        let options = &self.options;
        let sdp = msg.sdp.get_or_insert_with(SessionDescription::default);

        match tag {
            b'v' => sdp.version = non_empty(value),
            b'o' => sdp.origin = non_empty(value),
            b's' => sdp.session_name = non_empty(value),
            b't' => sdp.timing = non_empty(value),
            b'm' => sdp.media = Some(MediaDescription::parse(value, options)),
            b'c' => sdp.connection = Some(ConnectionData::parse(value, options)),
            _ => sdp.attributes.push(Attribute::parse(value, options)),
        }
    }
}

/// Splits on `\r\n`, or on `\n` when there is no `\r\n` in `buf`.
fn split_lines(buf: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx + 1 < buf.len() {
        if buf[idx] == b'\r' && buf[idx + 1] == b'\n' {
            lines.push(&buf[start..idx]);
            idx += 2;
            start = idx;
        } else {
            idx += 1;
        }
    }
    lines.push(&buf[start..]);

    if lines.len() < 2 {
        return buf.split(|&b| b == b'\n').collect();
    }

    lines
}

fn to_str(line: &[u8]) -> Option<&str> {
    match str::from_utf8(line) {
        Ok(line) => Some(line),
        Err(err) => {
            log::trace!("Skipping line that is not UTF-8: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{RequestLine, Scheme};

    const REGISTER: &[u8] = b"REGISTER sip:127.0.0.1 SIP/2.0\r\n\
        Via: SIP/2.0/UDP 10.0.0.2:5060;branch=z9hG4bK1;rport\r\n\
        From: \"bob\" <sip:bob@127.0.0.1>;tag=abc\r\n\
        To: <sip:bob@127.0.0.1>\r\n\
        Call-ID: 843817637684230@998sdasdh09\r\n\
        CSeq: 1826 REGISTER\r\n\
        Contact: <sip:bob@10.0.0.2:5060>;expires=3600\r\n\
        Max-Forwards: 70\r\n\
        Content-Length: 0\r\n\r\n";

    #[test_log::test]
    fn test_parse_register() {
        let msg = Parser::default().parse(REGISTER);
        let request = msg.request().unwrap();

        assert_eq!(request.method, Some("REGISTER"));
        assert_eq!(request.scheme, Some(Scheme::Sip));
        assert_eq!(request.host, Some("127.0.0.1"));
        assert_eq!(msg.via.len(), 1);
        assert_eq!(msg.via[0].branch, Some("z9hG4bK1"));
        assert_eq!(msg.from.display, Some("bob"));
        assert_eq!(msg.from.tag, Some("abc"));
        assert_eq!(msg.to.user, Some("bob"));
        assert_eq!(msg.call_id, Some("843817637684230@998sdasdh09"));
        assert_eq!(msg.cseq.number(), Some(1826));
        assert_eq!(msg.contact.expires, Some("3600"));
        assert_eq!(msg.max_forwards, Some("70"));
        assert_eq!(msg.content_length, Some("0"));
        assert_eq!(msg.sdp, None);
    }

    #[test]
    fn test_compact_names() {
        let msg = Parser::default().parse(
            b"INVITE sip:alice@atlanta.com SIP/2.0\r\n\
              v: SIP/2.0/TCP pc33.atlanta.com\r\n\
              f: <sip:bob@biloxi.com>;tag=1\r\n\
              t: <sip:alice@atlanta.com>\r\n\
              m: <sip:bob@192.0.2.4>\r\n\
              i: a84b4c76e66710\r\n\
              c: application/sdp\r\n\
              l: 0\r\n",
        );

        assert_eq!(msg.via[0].host, Some("pc33.atlanta.com"));
        assert_eq!(msg.from.tag, Some("1"));
        assert_eq!(msg.to.user, Some("alice"));
        assert_eq!(msg.contact.host, Some("192.0.2.4"));
        assert_eq!(msg.call_id, Some("a84b4c76e66710"));
        assert_eq!(msg.content_type, Some("application/sdp"));
        assert_eq!(msg.content_length, Some("0"));
    }

    #[test]
    fn test_via_list_in_one_line() {
        let msg = Parser::default().parse(
            b"SIP/2.0 200 OK\r\n\
              Via: SIP/2.0/UDP a.example.com;branch=z9hG4bK1, SIP/2.0/UDP b.example.com;branch=z9hG4bK2\r\n\
              Via: SIP/2.0/UDP c.example.com;branch=z9hG4bK3\r\n",
        );
        let hosts: Vec<_> = msg.via.iter().map(|via| via.host).collect();

        assert_eq!(hosts, [Some("a.example.com"), Some("b.example.com"), Some("c.example.com")]);
    }

    #[test]
    fn test_newline_only() {
        let msg = Parser::default().parse(b"OPTIONS sip:carol@chicago.com SIP/2.0\nCSeq: 63104 OPTIONS\nv=0\n");

        assert_eq!(msg.request().and_then(|r| r.user), Some("carol"));
        assert_eq!(msg.cseq.seq, Some("63104"));
        assert_eq!(msg.sdp.and_then(|sdp| sdp.version), Some("0"));
    }

    #[test]
    fn test_m_is_positional() {
        let msg = Parser::default().parse(
            b"INVITE sip:a@b SIP/2.0\r\n\
              m: <sip:bob@192.0.2.4>\r\n\
              m=audio 49170 RTP/AVP 0\r\n",
        );

        assert_eq!(msg.contact.user, Some("bob"));
        let media = msg.sdp.and_then(|sdp| sdp.media).unwrap();
        assert_eq!(media.media_type, Some("audio"));
    }

    #[test_log::test]
    fn test_bad_header_keeps_default() {
        let msg = Parser::default().parse(
            b"INVITE sip:a@b SIP/2.0\r\n\
              From: <sip:alice@atlanta.com;tag=1\r\n\
              To: Bob <sip:bob@biloxi.com>\r\n",
        );

        assert_eq!(msg.from, Default::default());
        assert_eq!(msg.to.display, Some("Bob"));
    }

    #[test]
    fn test_ignored_lines() {
        let msg = Parser::default().parse(
            b"INVITE sip:a@b SIP/2.0\r\n\
              : no name\r\n\
              just some text\r\n\
              X-Unknown: value\r\n\
              xy=not sdp\r\n\
              z=unknown sdp\r\n",
        );

        assert_eq!(msg.sdp, None);
        assert_eq!(
            Message {
                start_line: msg.start_line.clone(),
                ..Default::default()
            },
            msg
        );
    }

    #[test]
    fn test_last_value_wins() {
        let msg = Parser::default().parse(b"SIP/2.0 200 OK\r\nCall-ID: first\r\nCall-ID: second\r\n");

        assert_eq!(msg.call_id, Some("second"));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let msg = Parser::default().parse(b"SIP/2.0 200 OK\r\nUser-Agent: \xff\xfe\r\nExpires: 60\r\n");

        assert_eq!(msg.user_agent, None);
        assert_eq!(msg.expires, Some("60"));
    }

    #[test]
    fn test_single_token() {
        let msg = Parser::default().parse(b"asdf");

        assert_eq!(
            msg.start_line,
            StartLine::Request(RequestLine {
                src: Some("asdf"),
                ..Default::default()
            })
        );
        assert!(msg.via.is_empty());
    }

    #[test]
    fn test_keep_src_false() {
        let options = DecodeOptions::new().keep_src(false);
        let with_src = Parser::default().parse(REGISTER);
        let msg = Parser::new(options).parse(REGISTER);

        assert_eq!(msg.start_line.src(), None);
        assert_eq!(msg.from.src, None);
        assert_eq!(msg.via[0].src, None);
        assert_eq!(msg.from.user, with_src.from.user);
        assert_eq!(msg.via[0].branch, with_src.via[0].branch);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(b"a\r\nb\nc"), [&b"a"[..], b"b\nc"]);
        assert_eq!(split_lines(b"a\nb"), [&b"a"[..], b"b"]);
        assert_eq!(split_lines(b""), [&b""[..]]);
    }
}
