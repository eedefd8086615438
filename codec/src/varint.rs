//! Variable-length integer encoding and decoding
//!
//! Each byte carries 7 data bits plus a continuation bit (0x80); groups are
//! emitted least-significant first. Values are 32-bit, so an encoding is 1-5
//! bytes: small magnitudes take a single byte, the full range takes five.
//!
//! Signed values are encoded from their raw `u32` bit pattern rather than
//! zig-zag, so a negative input always occupies all 5 bytes. This is the
//! established wire format and is preserved as-is; see DESIGN.md.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, Read, Write},
    cursor::ReadCursor,
    error::Error,
};

const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Maximum encoded length of a 32-bit varint.
pub const MAX_LEN: usize = 5;

/// Encodes `value` as a varint.
pub fn write(value: u32, buf: &mut WriteBuffer) {
    buf.ensure_available(MAX_LEN);
    let mut rest = value;
    loop {
        let mut byte = (rest as u8) & DATA_BITS_MASK;
        rest >>= 7;
        if rest != 0 {
            byte |= CONTINUATION_BIT_MASK;
        }
        buf.write_u8(byte);
        if rest == 0 {
            return;
        }
    }
}

/// Decodes a varint, restoring the cursor position if the input is truncated
/// or malformed.
pub fn read(cur: &mut ReadCursor<'_>) -> Result<u32, Error> {
    let start = cur.position();
    let mut result: u32 = 0;
    let mut shift = 0;
    loop {
        let byte = match cur.read_u8() {
            Ok(byte) => byte,
            Err(err) => {
                cur.rewind(start);
                return Err(err);
            }
        };
        if shift == 28 && (byte & CONTINUATION_BIT_MASK != 0 || byte & DATA_BITS_MASK > 0x0F) {
            // The fifth byte can only carry the top four value bits.
            cur.rewind(start);
            return Err(Error::InvalidVarint);
        }
        result |= u32::from(byte & DATA_BITS_MASK) << shift;
        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}

/// Number of bytes [`write`] emits for `value`.
pub fn size(value: u32) -> usize {
    let data_bits = (32 - value.leading_zeros()) as usize;
    usize::max(1, data_bits.div_ceil(7))
}

/// Encodes a signed value from its raw bit pattern.
pub fn write_signed(value: i32, buf: &mut WriteBuffer) {
    write(value as u32, buf);
}

/// Decodes a signed value written by [`write_signed`].
pub fn read_signed(cur: &mut ReadCursor<'_>) -> Result<i32, Error> {
    read(cur).map(|value| value as i32)
}

/// Number of bytes [`write_signed`] emits for `value`.
pub fn size_signed(value: i32) -> usize {
    size(value as u32)
}

/// Wrapper encoding a `u32` as a varint rather than the fixed-width default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UVarint(pub u32);

impl Write for UVarint {
    fn write(&self, buf: &mut WriteBuffer) {
        write(self.0, buf);
    }
}

impl Read for UVarint {
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        read(cur).map(UVarint)
    }
}

impl EncodeSize for UVarint {
    fn encode_size(&self) -> usize {
        size(self.0)
    }
}

/// Wrapper encoding an `i32` as a bit-pattern varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Varint(pub i32);

impl Write for Varint {
    fn write(&self, buf: &mut WriteBuffer) {
        write_signed(self.0, buf);
    }
}

impl Read for Varint {
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        read_signed(cur).map(Varint)
    }
}

impl EncodeSize for Varint {
    fn encode_size(&self) -> usize {
        size_signed(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodeExt, Encode};

    #[test]
    fn test_boundary_lengths() {
        let cases: [(u32, usize); 7] = [
            (0, 1),
            (127, 1),
            (128, 2),
            (16_383, 2),
            (16_384, 3),
            (0x0FFF_FFFF, 4),
            (u32::MAX, 5),
        ];
        for (value, expected) in cases {
            let mut buf = WriteBuffer::new();
            write(value, &mut buf);
            assert_eq!(buf.len(), expected, "value {value}");
            assert_eq!(size(value), expected, "value {value}");
        }
    }

    #[test]
    fn test_negative_takes_five_bytes() {
        // Bit-pattern reinterpretation: the sign bit is set, so every
        // negative value uses the maximum length.
        for value in [-1i32, -2, i32::MIN, -1_000_000] {
            let mut buf = WriteBuffer::new();
            write_signed(value, &mut buf);
            assert_eq!(buf.len(), MAX_LEN, "value {value}");
            assert_eq!(size_signed(value), MAX_LEN, "value {value}");

            let bytes = buf.freeze();
            let mut cur = ReadCursor::new(&bytes);
            assert_eq!(read_signed(&mut cur).unwrap(), value);
            assert_eq!(cur.remaining(), 0);
        }
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            0u32, 1, 127, 128, 129, 0xFF, 0x100, 0x3FFF, 0x4000, 0x1F_FFFF, 0xFF_FFFF,
            0x1FFF_FFFF, u32::MAX,
        ];
        for value in cases {
            let mut buf = WriteBuffer::new();
            write(value, &mut buf);
            assert_eq!(buf.len(), size(value));

            let bytes = buf.freeze();
            let mut cur = ReadCursor::new(&bytes);
            assert_eq!(read(&mut cur).unwrap(), value);
            assert_eq!(cur.remaining(), 0);
        }
    }

    #[test]
    fn test_truncated_rolls_back() {
        let data = [0x80];
        let mut cur = ReadCursor::new(&data);
        assert!(matches!(read(&mut cur), Err(Error::InsufficientData)));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_overlong_rejected() {
        // Continuation bit set on the fifth byte.
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let mut cur = ReadCursor::new(&data);
        assert!(matches!(read(&mut cur), Err(Error::InvalidVarint)));
        assert_eq!(cur.position(), 0);

        // Fifth byte carries more than the top four value bits.
        let data = [0x80, 0x80, 0x80, 0x80, 0x10];
        let mut cur = ReadCursor::new(&data);
        assert!(matches!(read(&mut cur), Err(Error::InvalidVarint)));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_wrappers() {
        let encoded = UVarint(300).encode();
        assert_eq!(encoded.len(), 2);
        assert_eq!(UVarint::decode(encoded).unwrap(), UVarint(300));

        let encoded = Varint(-1).encode();
        assert_eq!(encoded.len(), MAX_LEN);
        assert_eq!(Varint::decode(encoded).unwrap(), Varint(-1));
    }
}
