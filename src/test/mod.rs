use crate::error::Result;
use crate::input::Input;
use crate::output::Output;
use crate::{de, ser, Flavor, Node, Tag};


mod ser_tests;
mod value;

/// Decode an unframed NBT payload, skipping the gzip/level.dat layers.
pub fn decode_payload(data: &[u8], flavor: Flavor) -> Result<Node> {
    let mut input = Input::new(data, flavor);
    de::read_document(&mut input)
}

/// Encode to an unframed NBT payload, skipping the gzip/level.dat layers.
pub fn encode_payload(node: &Node, flavor: Flavor) -> Result<Vec<u8>> {
    let mut out = Output::new(flavor);
    ser::write_document(&mut out, node)?;
    Ok(out.into_bytes())
}

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}
