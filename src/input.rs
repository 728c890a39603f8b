//! Flavored primitive reads over a byte slice.
//!
//! One `Input` wraps the raw document bytes and hands out typed values in
//! the byte order the selected flavor dictates. The network flavor swaps the
//! fixed-width int/long/string-length reads for var-ints and leaves every
//! other field little-endian.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::varint;
use crate::{Flavor, Tag};

pub(crate) struct Input<'a> {
    data: &'a [u8],
    flavor: Flavor,
}

impl<'a> Input<'a> {
    pub fn new(data: &'a [u8], flavor: Flavor) -> Self {
        Input { data, flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Bytes not yet consumed. Used to sanity-check count fields before
    /// allocating.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.data.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.data.read_i8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.data.read_i16::<BigEndian>()?,
            Flavor::LittleEndian | Flavor::Network => self.data.read_i16::<LittleEndian>()?,
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        match self.flavor {
            Flavor::BigEndian => Ok(self.data.read_i32::<BigEndian>()?),
            Flavor::LittleEndian => Ok(self.data.read_i32::<LittleEndian>()?),
            Flavor::Network => varint::read_var_int(&mut self.data),
        }
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        match self.flavor {
            Flavor::BigEndian => Ok(self.data.read_i64::<BigEndian>()?),
            Flavor::LittleEndian => Ok(self.data.read_i64::<LittleEndian>()?),
            Flavor::Network => varint::read_var_long(&mut self.data),
        }
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.data.read_f32::<BigEndian>()?,
            Flavor::LittleEndian | Flavor::Network => self.data.read_f32::<LittleEndian>()?,
        })
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.data.read_f64::<BigEndian>()?,
            Flavor::LittleEndian | Flavor::Network => self.data.read_f64::<LittleEndian>()?,
        })
    }

    /// Fixed little-endian u32, used only by the level.dat envelope.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(self.data.read_u32::<LittleEndian>()?)
    }

    /// Length-prefixed string. The Java Edition flavor stores modified
    /// UTF-8 behind a big-endian u16 length; the Bedrock flavors store plain
    /// UTF-8 behind a little-endian u16 or an unsigned var-int.
    pub fn read_string(&mut self) -> Result<String> {
        let len = match self.flavor {
            Flavor::BigEndian => usize::from(self.data.read_u16::<BigEndian>()?),
            Flavor::LittleEndian => usize::from(self.data.read_u16::<LittleEndian>()?),
            Flavor::Network => varint::read_unsigned_var_int(&mut self.data)? as usize,
        };
        let bytes = self.take(len)?;
        match self.flavor {
            Flavor::BigEndian => Ok(cesu8::from_java_cesu8(bytes)
                .map_err(|_| Error::InvalidUtf8)?
                .into_owned()),
            Flavor::LittleEndian | Flavor::Network => Ok(std::str::from_utf8(bytes)
                .map_err(|_| Error::InvalidUtf8)?
                .to_owned()),
        }
    }

    pub fn read_tag(&mut self) -> Result<Tag> {
        let id = self.read_u8()?;
        Tag::try_from(id).map_err(|_| Error::UnknownTagId(id))
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.data.len() {
            return Err(Error::UnexpectedEof);
        }
        let (head, rest) = self.data.split_at(n);
        self.data = rest;
        Ok(head)
    }
}
