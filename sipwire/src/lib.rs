//! # sipwire
//!
//! A lenient SIP message decoder and encoder.
//!
//! [`decode`] turns the text of a SIP request or response (including an
//! embedded SDP body) into a [`Message`] whose fields borrow from the
//! input buffer. [`encode`] writes a [`Message`] back in a fixed canonical
//! header order.
//!
//! Decoding never fails: headers that cannot be understood are left at
//! their default value.
//!
//! ```
//! let buf = b"REGISTER sip:127.0.0.1 SIP/2.0\r\n\
//!             From: \"bob\" <sip:bob@127.0.0.1>;tag=abc\r\n";
//! let msg = sipwire::decode(buf);
//!
//! assert_eq!(msg.from.user, Some("bob"));
//! assert_eq!(msg.from.tag, Some("abc"));
//! ```

pub mod config;
pub mod encoder;
pub mod headers;
pub mod message;
pub mod parser;
pub mod sdp;

pub(crate) mod error;
pub(crate) mod macros;

pub use config::{AuthFieldOrder, DecodeOptions};
pub use encoder::Encode;
pub use error::{Error, Result};
pub use message::Message;
pub use parser::Parser;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use bytes::Bytes;

/// Decodes `buf` with the default [`DecodeOptions`].
///
/// This is equivalent to `Parser::default().parse(buf)`.
pub fn decode(buf: &[u8]) -> Message<'_> {
    Parser::default().parse(buf)
}

/// Decodes `buf` with the given options.
pub fn decode_with<'a>(buf: &'a [u8], options: &DecodeOptions) -> Message<'a> {
    Parser::new(*options).parse(buf)
}

/// Encodes `msg` in canonical wire form.
pub fn encode(msg: &Message) -> Bytes {
    msg.encode()
}
