//! Protocol-style variable-length integers used by the network flavor.
//!
//! Seven data bits per byte, least significant group first, with the top bit
//! of each byte flagging a continuation. Signed values reinterpret the
//! unsigned bit pattern as two's complement, not zig-zag.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};

pub fn read_unsigned_var_int<R: Read>(reader: &mut R) -> Result<u32> {
    let mut value = 0u32;
    for shift in (0..35).step_by(7) {
        let byte = reader.read_u8()?;
        value |= u32::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::MalformedVarInt)
}

pub fn read_unsigned_var_long<R: Read>(reader: &mut R) -> Result<u64> {
    let mut value = 0u64;
    for shift in (0..70).step_by(7) {
        let byte = reader.read_u8()?;
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(Error::MalformedVarInt)
}

pub fn read_var_int<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(read_unsigned_var_int(reader)? as i32)
}

pub fn read_var_long<R: Read>(reader: &mut R) -> Result<i64> {
    Ok(read_unsigned_var_long(reader)? as i64)
}

pub fn write_unsigned_var_int<W: Write>(writer: &mut W, mut value: u32) -> Result<()> {
    while value & !0x7f != 0 {
        writer.write_u8((value as u8 & 0x7f) | 0x80)?;
        value >>= 7;
    }
    writer.write_u8(value as u8)?;
    Ok(())
}

pub fn write_unsigned_var_long<W: Write>(writer: &mut W, mut value: u64) -> Result<()> {
    while value & !0x7f != 0 {
        writer.write_u8((value as u8 & 0x7f) | 0x80)?;
        value >>= 7;
    }
    writer.write_u8(value as u8)?;
    Ok(())
}

pub fn write_var_int<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    write_unsigned_var_int(writer, value as u32)
}

pub fn write_var_long<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    write_unsigned_var_long(writer, value as u64)
}
