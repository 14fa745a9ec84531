use std::fmt;

use util::{is_digits, Scanner};

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::parser::ParseCtx;

/// The `CSeq` SIP header.
///
/// Ensures order and tracking of SIP transactions within a
/// session.
///
/// # Examples
///
/// ```
/// # use sipwire::headers::{CSeq, SipHeaderParse};
/// let cseq = CSeq::from_value("4711 INVITE").unwrap();
///
/// assert_eq!(cseq.number(), Some(4711));
/// assert_eq!("CSeq: 4711 INVITE", cseq.to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CSeq<'a> {
    /// The CSeq number, as digits.
    pub seq: Option<&'a str>,
    /// The CSeq method.
    pub method: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl CSeq<'_> {
    /// Returns the cseq number.
    pub fn number(&self) -> Option<u32> {
        self.seq.and_then(|seq| Scanner::new(seq).read_num().ok())
    }
}

impl fmt::Display for CSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            CSeq::NAME,
            self.seq.unwrap_or_default(),
            self.method.unwrap_or_default()
        )
    }
}

impl<'a> SipHeaderParse<'a> for CSeq<'a> {
    const NAME: &'static str = "CSeq";
    /*
     * CSeq  =  "CSeq" HCOLON 1*DIGIT LWS Method
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let mut cseq = CSeq {
            src: ctx.src(),
            ..Default::default()
        };

        match ctx.read_token() {
            Some(seq) if is_digits(seq) => {
                cseq.seq = Some(seq);
                cseq.method = ctx.read_token();
            }
            method => cseq.method = method,
        }

        Ok(cseq)
    }
}
