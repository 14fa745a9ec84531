//! SIP message types.
//!
//! [`Message`] is the decoded form of one SIP request or response. All of
//! its text fields borrow from the buffer given to
//! [`decode`](crate::decode).

mod line;
mod params;
mod uri;

pub use line::*;
pub use params::*;
pub use uri::Scheme;

pub(crate) use uri::{non_empty, split_host_port, UriParts};

use crate::headers::{Allow, Authorization, CSeq, Contact, From, To, Via, WwwAuthenticate};
use crate::sdp::SessionDescription;

/// A decoded SIP message.
///
/// Every field starts empty; decoding fills only what the message carries.
/// Single-valued headers keep their last occurrence, `Via` entries and SDP
/// attributes keep every occurrence in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message<'a> {
    pub start_line: StartLine<'a>,
    pub from: From<'a>,
    pub to: To<'a>,
    pub contact: Contact<'a>,
    /// In header order, which is the path the request took.
    pub via: Vec<Via<'a>>,
    pub cseq: CSeq<'a>,
    pub user_agent: Option<&'a str>,
    pub expires: Option<&'a str>,
    pub max_forwards: Option<&'a str>,
    pub call_id: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub content_length: Option<&'a str>,
    /// The vendor `X-Gamma-Public-IP` header.
    pub gamma_ip: Option<&'a str>,
    pub authorization: Authorization<'a>,
    pub www_authenticate: WwwAuthenticate<'a>,
    pub allow: Allow<'a>,
    /// Present once any SDP line was seen.
    pub sdp: Option<SessionDescription<'a>>,
}

impl<'a> Message<'a> {
    /// Returns the request line, if this message is a request.
    pub fn request(&self) -> Option<&RequestLine<'a>> {
        self.start_line.as_request()
    }

    /// Returns the status line, if this message is a response.
    pub fn status(&self) -> Option<&StatusLine<'a>> {
        self.start_line.as_status()
    }

    /// Returns the topmost `Via` header.
    pub fn top_via(&self) -> Option<&Via<'a>> {
        self.via.first()
    }
}
