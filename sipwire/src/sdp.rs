//! SDP body types.
//!
//! The session description carried in the body of a SIP message, as a
//! flat record: one media description, one connection data line and any
//! number of attributes.

mod attribute;
mod connection;
mod media;
mod origin;

pub use attribute::Attribute;
pub use connection::ConnectionData;
pub use media::MediaDescription;
pub use origin::Origin;

use std::fmt;

/// A decoded SDP body.
///
/// # Examples
///
/// ```
/// let msg = sipwire::decode(b"INVITE sip:bob@biloxi.com SIP/2.0\r\nv=0\r\na=sendrecv\r\n");
/// let sdp = msg.sdp.unwrap();
///
/// assert_eq!(sdp.version, Some("0"));
/// assert_eq!(sdp.to_string(), "v=0\r\na=sendrecv\r\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDescription<'a> {
    /// `v=`
    pub version: Option<&'a str>,
    /// `o=`, kept as written. See [`Origin::parse`].
    pub origin: Option<&'a str>,
    /// `s=`
    pub session_name: Option<&'a str>,
    /// `t=`
    pub timing: Option<&'a str>,
    /// `m=`
    pub media: Option<MediaDescription<'a>>,
    /// `c=`
    pub connection: Option<ConnectionData<'a>>,
    /// Every `a=` line, in order.
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> SessionDescription<'a> {
    /// Splits the origin line into its fields.
    pub fn origin_fields(&self) -> Option<Origin<'a>> {
        self.origin.map(Origin::parse)
    }

    /// Returns the first attribute named `category`.
    pub fn attribute(&self, category: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|attr| attr.category == Some(category))
    }
}

/// Writes every present line, each ending with `\r\n`.
impl fmt::Display for SessionDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(version) = self.version {
            write!(f, "v={version}\r\n")?;
        }
        if let Some(origin) = self.origin {
            write!(f, "o={origin}\r\n")?;
        }
        if let Some(session_name) = self.session_name {
            write!(f, "s={session_name}\r\n")?;
        }
        if let Some(timing) = self.timing {
            write!(f, "t={timing}\r\n")?;
        }
        if let Some(media) = &self.media {
            write!(f, "m={media}\r\n")?;
        }
        if let Some(connection) = &self.connection {
            write!(f, "c={connection}\r\n")?;
        }
        for attr in &self.attributes {
            write!(f, "a={attr}\r\n")?;
        }

        Ok(())
    }
}
