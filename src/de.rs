//! Recursive-descent decoder from flavored bytes to a [`Node`] tree.
//!
//! The decoder is all-or-nothing: any failure aborts the call and no
//! partial tree escapes. Counts are checked against the remaining input
//! before anything is allocated, and recursion is capped so adversarial
//! nesting fails cleanly instead of exhausting the stack.

use crate::error::{Error, Result};
use crate::input::Input;
use crate::value::{Node, Value};
use crate::{Flavor, Tag};

/// Trees deeper than this fail with [`Error::DepthLimit`].
pub(crate) const MAX_DEPTH: usize = 512;

/// Reads one whole document: outer tag id, root name, payload. The root
/// must be a compound or a list; anything else is not an NBT document.
pub(crate) fn read_document(input: &mut Input) -> Result<Node> {
    let id = input.read_u8()?;
    let tag = Tag::try_from(id).map_err(|_| Error::InvalidRoot(id))?;
    let name = input.read_string()?;
    match tag {
        Tag::Compound | Tag::List => Ok(Node {
            name,
            value: read_payload(input, tag, 1)?,
        }),
        _ => Err(Error::InvalidRoot(id)),
    }
}

fn read_payload(input: &mut Input, tag: Tag, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimit(MAX_DEPTH));
    }
    match tag {
        // End never materializes as a node; reaching here means a list
        // declared End elements with a nonzero count.
        Tag::End => Err(Error::UnknownTagId(0)),
        Tag::Byte => Ok(Value::Byte(input.read_i8()?)),
        Tag::Short => Ok(Value::Short(input.read_i16()?)),
        Tag::Int => Ok(Value::Int(input.read_i32()?)),
        Tag::Long => Ok(Value::Long(input.read_i64()?)),
        Tag::Float => Ok(Value::Float(input.read_f32()?)),
        Tag::Double => Ok(Value::Double(input.read_f64()?)),
        Tag::ByteArray => {
            let count = read_count(input, 1)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(Node::unnamed(Value::Byte(input.read_i8()?)));
            }
            Ok(Value::ByteArray(items))
        }
        Tag::String => Ok(Value::String(input.read_string()?)),
        Tag::List => {
            let element_id = input.read_u8()?;
            let count = input.read_i32()?;
            if count == 0 {
                // The element kind byte is unspecified for empty lists, so
                // an out-of-range id is not an error here.
                let element = Tag::try_from(element_id).unwrap_or(Tag::End);
                return Ok(Value::List(element, Vec::new()));
            }
            let element =
                Tag::try_from(element_id).map_err(|_| Error::UnknownTagId(element_id))?;
            let min_size = min_payload_size(element, input.flavor());
            let count = check_count(input, count, min_size)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(Node::unnamed(read_payload(input, element, depth + 1)?));
            }
            Ok(Value::List(element, items))
        }
        Tag::Compound => {
            let mut children = Vec::new();
            loop {
                let child_tag = input.read_tag()?;
                if child_tag == Tag::End {
                    return Ok(Value::Compound(children));
                }
                let name = input.read_string()?;
                children.push(Node {
                    name,
                    value: read_payload(input, child_tag, depth + 1)?,
                });
            }
        }
        Tag::IntArray => {
            let min_size = min_payload_size(Tag::Int, input.flavor());
            let count = read_count(input, min_size)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(Node::unnamed(Value::Int(input.read_i32()?)));
            }
            Ok(Value::IntArray(items))
        }
        Tag::LongArray => {
            let min_size = min_payload_size(Tag::Long, input.flavor());
            let count = read_count(input, min_size)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(Node::unnamed(Value::Long(input.read_i64()?)));
            }
            Ok(Value::LongArray(items))
        }
    }
}

/// Reads an element count and bounds it against the remaining input.
fn read_count(input: &mut Input, min_element_size: usize) -> Result<usize> {
    let count = input.read_i32()?;
    check_count(input, count, min_element_size)
}

/// A negative count, or one that cannot possibly fit in the bytes left,
/// surfaces as truncated input before any allocation happens.
fn check_count(input: &Input, count: i32, min_element_size: usize) -> Result<usize> {
    let count: usize = count.try_into().map_err(|_| Error::UnexpectedEof)?;
    match count.checked_mul(min_element_size) {
        Some(total) if total <= input.remaining() => Ok(count),
        _ => Err(Error::UnexpectedEof),
    }
}

/// Smallest possible wire footprint of one payload of the given kind, used
/// only to reject counts early. Var-int fields shrink to a single byte in
/// the network flavor.
fn min_payload_size(tag: Tag, flavor: Flavor) -> usize {
    let int_size = if flavor == Flavor::Network { 1 } else { 4 };
    let long_size = if flavor == Flavor::Network { 1 } else { 8 };
    match tag {
        Tag::End => 1,
        Tag::Byte => 1,
        Tag::Short => 2,
        Tag::Int => int_size,
        Tag::Long => long_size,
        Tag::Float => 4,
        Tag::Double => 8,
        // length/count prefix only; the payload itself may be empty.
        Tag::ByteArray | Tag::IntArray | Tag::LongArray => int_size,
        Tag::String => {
            if flavor == Flavor::Network {
                1
            } else {
                2
            }
        }
        // element kind byte + count.
        Tag::List => 1 + int_size,
        // at least the closing End byte.
        Tag::Compound => 1,
    }
}
