use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by a single field decoder.
///
/// They never escape [`decode`](crate::decode): the parser logs them and
/// leaves the field at its default value.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Error {
    #[error("missing '>' after '<' in address")]
    UnclosedBracket,

    #[error("'>' found without a matching '<' in address")]
    UnopenedBracket,

    #[error("missing 'sip:' or 'sips:' scheme")]
    UnsupportedScheme,

    #[error(transparent)]
    Scan(#[from] util::Error),
}
