//! Per-call decoding options.

/// How the `Authorization` and `WWW-Authenticate` parameter lists are
/// scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFieldOrder {
    /// Parameters are `key=value` pairs in any order.
    #[default]
    Any,
    /// Parameters must follow the canonical order
    /// (`username`, `realm`, `nonce`, `uri`, `response`, ...).
    ///
    /// Scanning stops at the first parameter that is not expected at its
    /// position, so out of order input loses the remaining fields.
    Canonical,
}

/// Options for a single decode call.
///
/// # Examples
///
/// ```
/// use sipwire::{AuthFieldOrder, DecodeOptions};
///
/// let options = DecodeOptions::new()
///     .keep_src(false)
///     .auth_field_order(AuthFieldOrder::Canonical);
///
/// let msg = sipwire::decode_with(b"SIP/2.0 200 OK\r\n", &options);
/// assert_eq!(msg.start_line.src(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub(crate) keep_src: bool,
    pub(crate) auth_field_order: AuthFieldOrder,
}

impl DecodeOptions {
    /// Default options: source text is kept and credential parameters
    /// may come in any order.
    pub const fn new() -> Self {
        Self {
            keep_src: true,
            auth_field_order: AuthFieldOrder::Any,
        }
    }

    /// Keep a reference to the source text of every decoded field.
    ///
    /// This never changes the extracted values.
    pub const fn keep_src(mut self, keep: bool) -> Self {
        self.keep_src = keep;
        self
    }

    /// Set the credential scanning mode.
    pub const fn auth_field_order(mut self, order: AuthFieldOrder) -> Self {
        self.auth_field_order = order;
        self
    }

    /// Returns `src` when the source text must be kept.
    #[inline]
    pub(crate) fn src<'a>(&self, src: &'a str) -> Option<&'a str> {
        self.keep_src.then_some(src)
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
