//! mcnbt decodes and encodes Minecraft's Named Binary Tag (NBT) format.
//!
//! NBT is a compact, self-describing binary tree used by the game to persist
//! typed, nested data. The same document structure travels in several wire
//! variants, all of which this crate speaks:
//!
//! * **Java Edition** — big-endian fields, gzip-compressed on disk. Decoding
//!   auto-detects the gzip header and falls back to raw bytes.
//! * **Bedrock little-endian** — the same layout with little-endian fields,
//!   uncompressed.
//! * **Network** — little-endian, with int/long payloads, string lengths and
//!   element counts packed as protocol var-ints. Used for in-memory protocol
//!   payloads, never compressed.
//! * **level.dat** — a little-endian document wrapped in an 8-byte header
//!   carrying a format version and the payload length.
//!
//! The decoder produces a [`Node`] tree that an editor can mutate freely and
//! hand back to [`encode`]; the codec is stateless across calls.
//!
//! # Quick example
//!
//! ```
//! use mcnbt::{decode, encode, Document, Format, Node, Value};
//!
//! # fn main() -> mcnbt::Result<()> {
//! let root = Node::new(
//!     "",
//!     Value::Compound(vec![Node::new("Health", Value::Float(20.0))]),
//! );
//!
//! // Java Edition flavor: big-endian, gzip-wrapped.
//! let format = Format::from_flags(false, false, false);
//! let bytes = encode(&Document::new(root.clone()), format)?;
//! let doc = decode(&bytes, format)?;
//! assert_eq!(doc.root, root);
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

pub mod error;

mod de;
mod input;
mod output;
mod ser;
mod value;
mod varint;

pub use error::{Error, Result};
pub use value::{Document, Node, Value};

#[cfg(test)]
mod test;

use input::Input;
use output::Output;

/// An NBT tag id. This does not carry the value or the name of the data.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound; never materializes as a node.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A length-prefixed unicode string.
    String = 8,
    /// A homogeneous sequence of unnamed elements.
    List = 9,
    /// A struct-like sequence of named children.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// Written out by hand rather than pulling in a conversion-derive crate; the
// tag set has been stable for a decade.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// Byte-level flavor of a document's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Java Edition: big-endian fields, modified UTF-8 strings, gzip framing.
    BigEndian,
    /// Bedrock disk format: little-endian fields, plain UTF-8, no framing.
    LittleEndian,
    /// Bedrock protocol format: little-endian base with var-int int/long,
    /// string-length and count fields.
    Network,
}

/// Full wire selection: a field flavor plus whether the document is wrapped
/// in a level.dat envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub flavor: Flavor,
    pub level_dat: bool,
}

impl Format {
    /// Resolves the three editor-facing switches into a concrete format.
    ///
    /// Precedence: level.dat forces little-endian and clears network;
    /// otherwise network wins over plain little-endian; otherwise the
    /// gzip-wrapped big-endian default applies.
    pub fn from_flags(little_endian: bool, network: bool, level_dat: bool) -> Self {
        if level_dat {
            Format {
                flavor: Flavor::LittleEndian,
                level_dat: true,
            }
        } else if network {
            Format {
                flavor: Flavor::Network,
                level_dat: false,
            }
        } else if little_endian {
            Format {
                flavor: Flavor::LittleEndian,
                level_dat: false,
            }
        } else {
            Format {
                flavor: Flavor::BigEndian,
                level_dat: false,
            }
        }
    }

    /// Re-applies the precedence rule so a hand-built format cannot pair a
    /// level.dat envelope with the wrong field flavor.
    fn normalized(self) -> Self {
        if self.level_dat {
            Format {
                flavor: Flavor::LittleEndian,
                level_dat: true,
            }
        } else {
            self
        }
    }
}

impl From<Flavor> for Format {
    fn from(flavor: Flavor) -> Self {
        Format {
            flavor,
            level_dat: false,
        }
    }
}

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decodes one NBT document from `data`.
///
/// All-or-nothing: on any failure no partial tree is returned. Safe to call
/// concurrently on independent buffers.
pub fn decode(data: &[u8], format: Format) -> Result<Document> {
    let format = format.normalized();
    if format.level_dat {
        let mut input = Input::new(data, Flavor::LittleEndian);
        let version = input.read_u32_le()?;
        // Informational only; the payload is framed by the NBT structure
        // itself and the stored length is recomputed on every encode.
        let _payload_len = input.read_u32_le()?;
        let root = de::read_document(&mut input)?;
        return Ok(Document {
            root,
            version: Some(version),
        });
    }
    let data = match format.flavor {
        Flavor::BigEndian => gunzip_if_compressed(data)?,
        Flavor::LittleEndian | Flavor::Network => Cow::Borrowed(data),
    };
    let mut input = Input::new(&data, format.flavor);
    Ok(Document {
        root: de::read_document(&mut input)?,
        version: None,
    })
}

/// Encodes one NBT document to bytes in the given format.
///
/// Only fails on trees that violate the model invariants or carry lengths
/// the wire format cannot represent; I/O never happens here.
pub fn encode(doc: &Document, format: Format) -> Result<Vec<u8>> {
    let format = format.normalized();
    if format.level_dat {
        let mut payload = Output::new(Flavor::LittleEndian);
        ser::write_document(&mut payload, &doc.root)?;
        let payload = payload.into_bytes();
        let len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| Error::LengthOverflow(payload.len()))?;
        let mut out = Vec::with_capacity(payload.len() + 8);
        out.extend_from_slice(&doc.version.unwrap_or(0).to_le_bytes());
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&payload);
        return Ok(out);
    }
    let mut out = Output::new(format.flavor);
    ser::write_document(&mut out, &doc.root)?;
    let bytes = out.into_bytes();
    match format.flavor {
        Flavor::BigEndian => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&bytes)?;
            Ok(encoder.finish()?)
        }
        Flavor::LittleEndian | Flavor::Network => Ok(bytes),
    }
}

/// Java Edition files are normally gzip-wrapped, but raw documents exist in
/// the wild; sniff the magic bytes and pass raw input straight through.
fn gunzip_if_compressed(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    if data.starts_with(&GZIP_MAGIC) {
        let mut decompressed = Vec::new();
        GzDecoder::new(data).read_to_end(&mut decompressed)?;
        Ok(Cow::Owned(decompressed))
    } else {
        Ok(Cow::Borrowed(data))
    }
}
