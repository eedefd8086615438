//! Codec implementations for arrays and byte buffers.
//!
//! An array travels as a `u32` element count followed by the elements
//! back-to-back. Byte, int, and float slices additionally have bulk paths
//! that reserve once and copy in a tight monomorphic loop instead of
//! dispatching through the element codec; their wire bytes are identical to
//! the generic path.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, FixedSize, Read, Write},
    config::RangeCfg,
    cursor::ReadCursor,
    error::Error,
};
use bytes::Bytes;
use paste::paste;

/// Appends a count-prefixed byte array in a single reservation.
pub fn write_bytes(buf: &mut WriteBuffer, data: &[u8]) {
    let count = u32::try_from(data.len()).expect("write: array length exceeds u32");
    buf.ensure_available(u32::SIZE + data.len());
    buf.write_u32(count);
    buf.put_slice(data);
}

/// Reads a count-prefixed byte array, restoring the cursor position on
/// failure.
pub fn read_bytes(cur: &mut ReadCursor<'_>) -> Result<Vec<u8>, Error> {
    let start = cur.position();
    let count = cur.read_u32()? as usize;
    match cur.take(count) {
        Ok(raw) => Ok(raw.to_vec()),
        Err(err) => {
            cur.rewind(start);
            Err(err)
        }
    }
}

// Bulk paths for the numeric element types the engine ships in volume.
macro_rules! impl_bulk {
    ($write_name:ident, $read_name:ident, $type:ty) => {
        paste! {
            /// Appends a count-prefixed array in a single reservation.
            pub fn $write_name(buf: &mut WriteBuffer, data: &[$type]) {
                let count = u32::try_from(data.len()).expect("write: array length exceeds u32");
                buf.ensure_available(u32::SIZE + data.len() * std::mem::size_of::<$type>());
                buf.write_u32(count);
                for &value in data {
                    buf.[<write_ $type>](value);
                }
            }

            /// Reads a count-prefixed array, restoring the cursor position on
            /// failure.
            pub fn $read_name(cur: &mut ReadCursor<'_>) -> Result<Vec<$type>, Error> {
                const WIDTH: usize = std::mem::size_of::<$type>();
                let start = cur.position();
                let count = cur.read_u32()? as usize;
                let Some(byte_len) = count.checked_mul(WIDTH) else {
                    cur.rewind(start);
                    return Err(Error::InvalidLength(count));
                };
                let raw = match cur.take(byte_len) {
                    Ok(raw) => raw,
                    Err(err) => {
                        cur.rewind(start);
                        return Err(err);
                    }
                };
                let mut out = Vec::with_capacity(count);
                for chunk in raw.chunks_exact(WIDTH) {
                    let mut word = [0u8; WIDTH];
                    word.copy_from_slice(chunk);
                    out.push(<$type>::from_le_bytes(word));
                }
                Ok(out)
            }
        }
    };
}

impl_bulk!(write_ints, read_ints, i32);
impl_bulk!(write_floats, read_floats, f32);

// Bytes rides the byte bulk path.
impl Write for Bytes {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        write_bytes(buf, self);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.len()
    }
}

impl Read for Bytes {
    #[inline]
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        read_bytes(cur).map(Bytes::from)
    }
}

// Generic per-element path.
impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        let count = u32::try_from(self.len()).expect("write: array length exceeds u32");
        buf.write_u32(count);
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        u32::SIZE + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

// Fixed-size elements: the payload length is knowable from the count alone,
// so it is validated against the remaining bytes before anything is
// allocated and no length bound is required.
impl<T: Read + FixedSize> Read for Vec<T> {
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        let byte_len = count
            .checked_mul(T::SIZE)
            .ok_or(Error::InvalidLength(count))?;
        if cur.remaining() < byte_len {
            return Err(Error::InsufficientData);
        }
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(cur.read()?);
        }
        Ok(vec)
    }
}

// Variable-size elements: the count prefix alone cannot bound the payload,
// so the caller supplies the lengths it will accept.
impl<Cfg, T: Read<Cfg>> Read<(RangeCfg, Cfg)> for Vec<T> {
    fn read_cfg(cur: &mut ReadCursor<'_>, (range, cfg): &(RangeCfg, Cfg)) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        if !range.contains(count) {
            return Err(Error::InvalidLength(count));
        }
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(cur.read_cfg(cfg)?);
        }
        Ok(vec)
    }
}
