//! The in-memory NBT tree model.
//!
//! A document is one [`Node`] tree. The decoder builds it, an editor may
//! mutate it arbitrarily, and the encoder walks it back out to bytes. The
//! codec keeps no state between those calls.

use serde::{Deserialize, Serialize};

use crate::Tag;

/// One decoded NBT document.
///
/// `version` is `Some` exactly when the bytes carried a level.dat envelope;
/// the value is opaque to the codec and round-trips verbatim. Encoding with
/// a level.dat format writes the stored version, defaulting to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub root: Node,
    pub version: Option<u32>,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Document {
            root,
            version: None,
        }
    }
}

/// One node of the tree: a name plus a typed value.
///
/// Every node carries a name, possibly empty. The synthetic elements of a
/// list and the scalar elements of the array kinds are unnamed on the wire;
/// they decode with an empty name and any name they hold is ignored on
/// encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub value: Value,
}

impl Node {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Node {
            name: name.into(),
            value,
        }
    }

    pub(crate) fn unnamed(value: Value) -> Self {
        Node {
            name: String::new(),
            value,
        }
    }

    /// The wire tag id of this node's value.
    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    /// Children of a container node, `None` for scalars and strings.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.value {
            Value::ByteArray(items)
            | Value::List(_, items)
            | Value::Compound(items)
            | Value::IntArray(items)
            | Value::LongArray(items) => Some(items),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.value {
            Value::ByteArray(items)
            | Value::List(_, items)
            | Value::Compound(items)
            | Value::IntArray(items)
            | Value::LongArray(items) => Some(items),
            _ => None,
        }
    }

    /// Renames the children of a list or array node to their zero-based
    /// position as a decimal string.
    ///
    /// This is the editor-facing normalization pass run after a child is
    /// removed, so displayed indices stay contiguous. Compounds keep their
    /// children's real names and are left alone. The codec itself never
    /// calls this; element names of lists and arrays do not exist on the
    /// wire.
    pub fn renumber_children(&mut self) {
        match &mut self.value {
            Value::ByteArray(items)
            | Value::List(_, items)
            | Value::IntArray(items)
            | Value::LongArray(items) => {
                for (index, child) in items.iter_mut().enumerate() {
                    child.name = index.to_string();
                }
            }
            _ => {}
        }
    }
}

/// A typed NBT value: a closed sum over the twelve value-bearing tag kinds.
///
/// The array kinds hold scalar child [`Node`]s rather than raw vectors so a
/// tree editor can address, rename and retype individual elements; the wire
/// format stores only the bare scalars. A list records its element kind so
/// the header byte survives a decode; for empty lists it defaults to
/// [`Tag::End`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<Node>),
    String(String),
    List(Tag, Vec<Node>),
    Compound(Vec<Node>),
    IntArray(Vec<Node>),
    LongArray(Vec<Node>),
}

impl Value {
    /// The wire tag id for this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_, _) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }
}
