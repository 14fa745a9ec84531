//! Canonical encoding of a [`Message`].
//!
//! Headers are written in a fixed order, whatever order they were decoded
//! in, and address headers always take the `"display" <uri>;params` shape.
//! Encoding then decoding keeps the extracted values, not the original
//! text.

use std::fmt::{self, Write};

use bytes::{Bytes, BytesMut};

use crate::headers::{CALL_ID, CONTENT_LENGTH, CONTENT_TYPE, EXPIRES, GAMMA_IP, MAX_FORWARDS, USER_AGENT};
use crate::macros::write_header;
use crate::message::Message;

/// A trait for converting a type into a byte buffer.
pub trait Encode {
    /// The buffer type that holds the encoded data.
    type Buffer: AsRef<[u8]>;
    /// Converts the type into a byte buffer.
    fn encode(&self) -> Self::Buffer;
}

impl Encode for Message<'_> {
    type Buffer = Bytes;

    fn encode(&self) -> Self::Buffer {
        let mut buf = BytesMut::with_capacity(512);

        // Writing to a `BytesMut` does not fail and neither does
        // `Message::fmt`.
        let _ = write!(buf, "{self}");

        buf.freeze()
    }
}

/// Writes the message in canonical wire form.
///
/// `Content-Length` is always written and always holds the length of the
/// encoded SDP body, whatever the decoded `content_length` was.
impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.start_line)?;
        for via in &self.via {
            write!(f, "{via}\r\n")?;
        }
        write!(f, "{}\r\n", self.from)?;
        write!(f, "{}\r\n", self.to)?;
        write!(f, "{}\r\n", self.contact)?;
        write!(f, "{CALL_ID}: {}\r\n", self.call_id.unwrap_or_default())?;
        write!(f, "{}\r\n", self.cseq)?;

        write_header!(f, MAX_FORWARDS, self.max_forwards);
        write_header!(f, USER_AGENT, self.user_agent);
        write_header!(f, EXPIRES, self.expires);
        if self.authorization.scheme.is_some() {
            write!(f, "{}\r\n", self.authorization)?;
        }
        if self.www_authenticate.scheme.is_some() {
            write!(f, "{}\r\n", self.www_authenticate)?;
        }
        if !self.allow.is_empty() {
            write!(f, "{}\r\n", self.allow)?;
        }
        write_header!(f, CONTENT_TYPE, self.content_type);
        write_header!(f, GAMMA_IP, self.gamma_ip);

        let body = self.sdp.as_ref().map(|sdp| sdp.to_string()).unwrap_or_default();
        write!(f, "{CONTENT_LENGTH}: {}\r\n", body.len())?;
        write!(f, "\r\n{body}")
    }
}
