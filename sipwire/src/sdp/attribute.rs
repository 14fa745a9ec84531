use std::fmt;

use crate::config::DecodeOptions;
use crate::message::non_empty;

/// An SDP `a=` line: `category[:value]`.
///
/// An attribute without a value is a flag, like `sendrecv`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub category: Option<&'a str>,
    pub value: Option<&'a str>,
    pub src: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    /// Parses the text after `a=`.
    pub fn parse(value: &'a str, options: &DecodeOptions) -> Self {
        let (category, attr_value) = match value.split_once(':') {
            Some((category, attr_value)) => (category, Some(attr_value.trim())),
            None => (value, None),
        };

        Attribute {
            category: non_empty(category.trim()),
            value: attr_value,
            src: options.src(value),
        }
    }

    /// Returns `true` for an attribute without a value.
    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category.unwrap_or_default())?;
        if let Some(value) = self.value {
            write!(f, ":{value}")?;
        }
        Ok(())
    }
}
