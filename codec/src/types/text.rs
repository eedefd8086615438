//! Codec implementations for strings.
//!
//! A string travels as a `u32` code-unit count followed by that many 2-byte
//! UTF-16 code units; the unit values are copied verbatim. Decoding
//! validates the units: ill-formed UTF-16 (a lone surrogate) is rejected
//! rather than materialized as a string value.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, FixedSize, Read, Write},
    cursor::ReadCursor,
    error::Error,
};

fn write_str(value: &str, buf: &mut WriteBuffer) {
    let units = value.encode_utf16().count();
    let count = u32::try_from(units).expect("write: string code units exceed u32");
    buf.ensure_available(u32::SIZE + 2 * units);
    buf.write_u32(count);
    for unit in value.encode_utf16() {
        buf.write_u16(unit);
    }
}

fn str_encode_size(value: &str) -> usize {
    u32::SIZE + 2 * value.encode_utf16().count()
}

impl Write for &str {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        write_str(self, buf);
    }
}

impl EncodeSize for &str {
    #[inline]
    fn encode_size(&self) -> usize {
        str_encode_size(self)
    }
}

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        write_str(self, buf);
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        str_encode_size(self)
    }
}

impl Read for String {
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        let byte_len = count.checked_mul(2).ok_or(Error::InvalidLength(count))?;
        // Every unit must be present before any are consumed.
        let raw = cur.take(byte_len)?;
        let mut units = Vec::with_capacity(count);
        for pair in raw.chunks_exact(2) {
            units.push(u16::from_le_bytes([pair[0], pair[1]]));
        }
        String::from_utf16(&units).map_err(|_| Error::InvalidUtf16)
    }
}
