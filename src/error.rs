use thiserror::Error;

/// Result type for fallible label operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a label sequence.
///
/// Positions never fail: out-of-range positions are normalized or create
/// sparse gaps. The only rejected input is a malformed options payload.
#[derive(Error, Debug)]
pub enum Error {
    /// Options were neither a delimiter string nor an options record.
    #[error("label options must be a delimiter string or an options record, found {found}")]
    UnexpectedShape { found: &'static str },

    /// An options record had unknown keys or wrongly typed values.
    #[error("malformed label options record: {source}")]
    InvalidOptions {
        #[source]
        source: serde_json::Error,
    },
}
