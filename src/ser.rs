//! Recursive encoder from a [`Node`] tree to flavored bytes.
//!
//! Mirrors the decoder's dispatch exactly. The tree is trusted to respect
//! the model invariants; the one thing the encoder still checks is that
//! array children actually hold the scalar kind their parent implies, since
//! silently writing a wrong-width value would corrupt the framing of
//! everything after it.

use crate::error::{Error, Result};
use crate::output::Output;
use crate::value::{Node, Value};
use crate::Tag;

/// Writes one whole document: outer tag id, root name, payload.
pub(crate) fn write_document(out: &mut Output, root: &Node) -> Result<()> {
    write_node(out, root, true)
}

fn write_node(out: &mut Output, node: &Node, named: bool) -> Result<()> {
    if named {
        out.write_tag(node.tag())?;
        out.write_string(&node.name)?;
    }
    match &node.value {
        Value::Byte(v) => out.write_i8(*v),
        Value::Short(v) => out.write_i16(*v),
        Value::Int(v) => out.write_i32(*v),
        Value::Long(v) => out.write_i64(*v),
        Value::Float(v) => out.write_f32(*v),
        Value::Double(v) => out.write_f64(*v),
        Value::String(v) => out.write_string(v),
        Value::ByteArray(items) => {
            out.write_count(items.len())?;
            for item in items {
                match item.value {
                    Value::Byte(v) => out.write_i8(v)?,
                    _ => return Err(Error::MalformedTree("byte array child must be a byte")),
                }
            }
            Ok(())
        }
        Value::List(_, items) => {
            // The header records the shared element kind, taken from the
            // first child so an editor retype wins over the decoded kind.
            // An empty list always writes End.
            let element = items.first().map(Node::tag).unwrap_or(Tag::End);
            out.write_tag(element)?;
            out.write_count(items.len())?;
            for item in items {
                write_node(out, item, false)?;
            }
            Ok(())
        }
        Value::Compound(children) => {
            for child in children {
                write_node(out, child, true)?;
            }
            out.write_tag(Tag::End)
        }
        Value::IntArray(items) => {
            out.write_count(items.len())?;
            for item in items {
                match item.value {
                    Value::Int(v) => out.write_i32(v)?,
                    _ => return Err(Error::MalformedTree("int array child must be an int")),
                }
            }
            Ok(())
        }
        Value::LongArray(items) => {
            out.write_count(items.len())?;
            for item in items {
                match item.value {
                    Value::Long(v) => out.write_i64(v)?,
                    _ => return Err(Error::MalformedTree("long array child must be a long")),
                }
            }
            Ok(())
        }
    }
}
