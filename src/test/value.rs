use crate::{Node, Tag, Value};

#[test]
fn tag_mapping_is_exhaustive() {
    let cases: Vec<(Value, Tag)> = vec![
        (Value::Byte(0), Tag::Byte),
        (Value::Short(0), Tag::Short),
        (Value::Int(0), Tag::Int),
        (Value::Long(0), Tag::Long),
        (Value::Float(0.0), Tag::Float),
        (Value::Double(0.0), Tag::Double),
        (Value::ByteArray(vec![]), Tag::ByteArray),
        (Value::String(String::new()), Tag::String),
        (Value::List(Tag::End, vec![]), Tag::List),
        (Value::Compound(vec![]), Tag::Compound),
        (Value::IntArray(vec![]), Tag::IntArray),
        (Value::LongArray(vec![]), Tag::LongArray),
    ];
    for (value, tag) in cases {
        assert_eq!(value.tag(), tag);
    }
}

#[test]
fn renumber_after_removal() {
    let mut list = Node::new(
        "xs",
        Value::List(
            Tag::Int,
            vec![
                Node::new("0", Value::Int(10)),
                Node::new("1", Value::Int(11)),
                Node::new("2", Value::Int(12)),
            ],
        ),
    );

    // An editor removes the middle element, then normalizes.
    list.children_mut().unwrap().remove(1);
    list.renumber_children();

    let names: Vec<&str> = list
        .children()
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["0", "1"]);
}

#[test]
fn renumber_leaves_compounds_alone() {
    let mut compound = Node::new(
        "",
        Value::Compound(vec![
            Node::new("keep", Value::Byte(1)),
            Node::new("me", Value::Byte(2)),
        ]),
    );
    compound.renumber_children();
    assert_eq!(compound.children().unwrap()[0].name, "keep");
    assert_eq!(compound.children().unwrap()[1].name, "me");
}

#[test]
fn scalars_have_no_children() {
    let node = Node::new("n", Value::Int(1));
    assert!(node.children().is_none());
}

#[test]
fn tree_serializes_with_serde() {
    let node = Node::new("n", Value::Int(5));
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
