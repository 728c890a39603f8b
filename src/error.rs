//! Error and Result types shared by the decoder and encoder.

use thiserror::Error;

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while decoding or encoding NBT data.
///
/// Decode failures are terminal: no partial tree is ever returned. Encoding
/// only fails when a length cannot be represented on the wire or when a tree
/// violates the kind invariants of the model.
#[derive(Debug, Error)]
pub enum Error {
    /// Input ended part way through a value, or a length field claimed more
    /// data than the input holds.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// A tag id outside 0..=12. Fatal for the whole decode.
    #[error("unknown tag id: {0}")]
    UnknownTagId(u8),

    /// The outermost tag of the document was not a compound or a list.
    #[error("not an NBT document: root tag id {0}")]
    InvalidRoot(u8),

    /// A string payload held bytes that are not valid unicode.
    #[error("invalid string: not unicode")]
    InvalidUtf8,

    /// A var-int continuation sequence ran past the width of the target
    /// integer. Network flavor only.
    #[error("malformed var-int: continuation exceeds integer range")]
    MalformedVarInt,

    /// Nesting deeper than the decoder's recursion cap.
    #[error("nesting exceeds maximum depth of {0}")]
    DepthLimit(usize),

    /// A name, string or element count too large for its wire field.
    #[error("length does not fit the wire format: {0}")]
    LengthOverflow(usize),

    /// A container child whose kind contradicts its parent, e.g. a short
    /// inside a byte array. Encode only.
    #[error("malformed tree: {0}")]
    MalformedTree(&'static str),

    /// Underlying I/O failure, in practice only from the gzip layer.
    #[error("io error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io(e),
        }
    }
}
