use super::{decode_payload, encode_payload};
use crate::error::Error;
use crate::{Flavor, Node, Tag, Value};

fn fixture_tree() -> Node {
    Node::new(
        "",
        Value::Compound(vec![
            Node::new("a", Value::Byte(1)),
            Node::new("b", Value::String("x".to_owned())),
        ]),
    )
}

#[test]
fn fixture_encodes_to_exact_bytes() {
    let bytes = encode_payload(&fixture_tree(), Flavor::BigEndian).unwrap();
    assert_eq!(
        bytes,
        [
            0x0a, 0x00, 0x00, 0x01, 0x00, 0x01, 0x61, 0x01, 0x08, 0x00, 0x01, 0x62, 0x00, 0x01,
            0x78, 0x00,
        ]
    );
}

#[test]
fn empty_list_writes_end_kind() {
    // Even a list that decoded with a declared kind writes 0 when empty.
    let root = Node::new(
        "",
        Value::Compound(vec![Node::new("xs", Value::List(Tag::Int, vec![]))]),
    );
    let bytes = encode_payload(&root, Flavor::BigEndian).unwrap();
    assert_eq!(
        bytes,
        [
            0x0a, 0x00, 0x00, // root compound
            0x09, 0x00, 0x02, 0x78, 0x73, // list "xs"
            0x00, // element kind: End
            0x00, 0x00, 0x00, 0x00, // count 0
            0x00, // end of compound
        ]
    );
}

#[test]
fn list_kind_comes_from_first_element() {
    let root = Node::new(
        "",
        Value::List(
            Tag::End, // stale declared kind; elements win
            vec![Node::new("", Value::Short(9))],
        ),
    );
    let bytes = encode_payload(&root, Flavor::BigEndian).unwrap();
    assert_eq!(
        bytes,
        [0x09, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x09]
    );
}

#[test]
fn compound_children_write_id_name_payload_triplets() {
    let root = Node::new(
        "",
        Value::Compound(vec![Node::new(
            "inner",
            Value::Compound(vec![Node::new("n", Value::Int(-1))]),
        )]),
    );
    let bytes = encode_payload(&root, Flavor::BigEndian).unwrap();
    let decoded = decode_payload(&bytes, Flavor::BigEndian).unwrap();
    assert_eq!(decoded, root);
    // One End byte per compound.
    assert_eq!(bytes.iter().rev().take(2).filter(|&&b| b == 0).count(), 2);
}

#[test]
fn arrays_write_bare_scalars() {
    let root = Node::new(
        "",
        Value::Compound(vec![Node::new(
            "ints",
            Value::IntArray(vec![
                Node::new("0", Value::Int(1)),
                Node::new("1", Value::Int(2)),
            ]),
        )]),
    );
    let bytes = encode_payload(&root, Flavor::BigEndian).unwrap();
    assert_eq!(
        bytes,
        [
            0x0a, 0x00, 0x00, // root
            0x0b, 0x00, 0x04, 0x69, 0x6e, 0x74, 0x73, // int array "ints"
            0x00, 0x00, 0x00, 0x02, // count
            0x00, 0x00, 0x00, 0x01, // element 1: no id, no name
            0x00, 0x00, 0x00, 0x02, // element 2
            0x00, // end
        ]
    );
}

#[test]
fn network_flavor_packs_varints() {
    let root = Node::new(
        "",
        Value::Compound(vec![
            Node::new("n", Value::Int(300)),
            Node::new("s", Value::String("hi".to_owned())),
        ]),
    );
    let bytes = encode_payload(&root, Flavor::Network).unwrap();
    assert_eq!(
        bytes,
        [
            0x0a, 0x00, // compound, var-int name length 0
            0x03, 0x01, b'n', 0xac, 0x02, // int 300 as var-int
            0x08, 0x01, b's', 0x02, b'h', b'i', // var-int string length
            0x00,
        ]
    );
}

#[test]
fn mismatched_array_child_is_rejected() {
    let root = Node::new(
        "",
        Value::Compound(vec![Node::new(
            "bytes",
            Value::ByteArray(vec![Node::new("", Value::Short(1))]),
        )]),
    );
    assert!(matches!(
        encode_payload(&root, Flavor::BigEndian),
        Err(Error::MalformedTree(_))
    ));
}

#[test]
fn oversized_name_is_length_overflow() {
    let root = Node::new(
        "x".repeat(usize::from(u16::MAX) + 1),
        Value::Compound(vec![]),
    );
    assert!(matches!(
        encode_payload(&root, Flavor::BigEndian),
        Err(Error::LengthOverflow(_))
    ));
}
