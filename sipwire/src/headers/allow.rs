use std::fmt;

use itertools::Itertools;

use crate::error::Result;
use crate::headers::SipHeaderParse;
use crate::parser::ParseCtx;

/// The `Allow` SIP header.
///
/// Indicates what methods is supported by the `UA`. Methods keep their
/// order and spelling, duplicates included.
///
/// # Examples
///
/// ```
/// # use sipwire::headers::{Allow, SipHeaderParse};
/// let allow = Allow::from_value("INVITE,ACK ,  BYE").unwrap();
///
/// assert_eq!(allow.get(1), Some("ACK"));
/// assert_eq!("Allow: INVITE, ACK, BYE", allow.to_string());
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Allow<'a> {
    pub methods: Vec<&'a str>,
    pub src: Option<&'a str>,
}

impl<'a> Allow<'a> {
    /// Appends a method.
    pub fn push(&mut self, method: &'a str) {
        self.methods.push(method);
    }

    /// Gets the method at the specified index.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.methods.get(index).copied()
    }

    /// Returns the number of methods in the header.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if there are no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<'a> SipHeaderParse<'a> for Allow<'a> {
    const NAME: &'static str = "Allow";
    /*
     * Allow  =  "Allow" HCOLON [Method *(COMMA Method)]
     */
    fn parse(ctx: &mut ParseCtx<'a>) -> Result<Self> {
        let mut allow = Allow {
            src: ctx.src(),
            ..Default::default()
        };

        while !ctx.is_eof() {
            let method = ctx.take_until(b',');
            ctx.next();

            let method = method.trim();
            if !method.is_empty() {
                allow.push(method);
            }
        }

        Ok(allow)
    }
}

impl fmt::Display for Allow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", Allow::NAME, self.methods.iter().format(", "))
    }
}
