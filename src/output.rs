//! Flavored primitive writes, mirroring [`crate::input`].

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::varint;
use crate::{Flavor, Tag};

pub(crate) struct Output {
    buf: Vec<u8>,
    flavor: Flavor,
}

impl Output {
    pub fn new(flavor: Flavor) -> Self {
        Output {
            buf: Vec::new(),
            flavor,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        Ok(self.buf.write_u8(value)?)
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        Ok(self.buf.write_i8(value)?)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.buf.write_i16::<BigEndian>(value)?,
            Flavor::LittleEndian | Flavor::Network => self.buf.write_i16::<LittleEndian>(value)?,
        })
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        match self.flavor {
            Flavor::BigEndian => Ok(self.buf.write_i32::<BigEndian>(value)?),
            Flavor::LittleEndian => Ok(self.buf.write_i32::<LittleEndian>(value)?),
            Flavor::Network => varint::write_var_int(&mut self.buf, value),
        }
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        match self.flavor {
            Flavor::BigEndian => Ok(self.buf.write_i64::<BigEndian>(value)?),
            Flavor::LittleEndian => Ok(self.buf.write_i64::<LittleEndian>(value)?),
            Flavor::Network => varint::write_var_long(&mut self.buf, value),
        }
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.buf.write_f32::<BigEndian>(value)?,
            Flavor::LittleEndian | Flavor::Network => self.buf.write_f32::<LittleEndian>(value)?,
        })
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        Ok(match self.flavor {
            Flavor::BigEndian => self.buf.write_f64::<BigEndian>(value)?,
            Flavor::LittleEndian | Flavor::Network => self.buf.write_f64::<LittleEndian>(value)?,
        })
    }

    pub fn write_string(&mut self, value: &str) -> Result<()> {
        match self.flavor {
            Flavor::BigEndian => {
                let encoded = cesu8::to_java_cesu8(value);
                let len: u16 = encoded
                    .len()
                    .try_into()
                    .map_err(|_| Error::LengthOverflow(encoded.len()))?;
                self.buf.write_u16::<BigEndian>(len)?;
                self.buf.extend_from_slice(&encoded);
            }
            Flavor::LittleEndian => {
                let len: u16 = value
                    .len()
                    .try_into()
                    .map_err(|_| Error::LengthOverflow(value.len()))?;
                self.buf.write_u16::<LittleEndian>(len)?;
                self.buf.extend_from_slice(value.as_bytes());
            }
            Flavor::Network => {
                let len: u32 = value
                    .len()
                    .try_into()
                    .map_err(|_| Error::LengthOverflow(value.len()))?;
                varint::write_unsigned_var_int(&mut self.buf, len)?;
                self.buf.extend_from_slice(value.as_bytes());
            }
        }
        Ok(())
    }

    pub fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(u8::from(tag))
    }

    /// Element count of an array or list, written as a flavored i32.
    pub fn write_count(&mut self, len: usize) -> Result<()> {
        let count: i32 = len.try_into().map_err(|_| Error::LengthOverflow(len))?;
        self.write_i32(count)
    }
}
