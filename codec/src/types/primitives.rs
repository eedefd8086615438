//! Codec implementations for primitive types.
//!
//! All fixed-width values are written little-endian regardless of host
//! architecture, so peers on different platforms agree on the wire bytes.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, FixedSize, Read, Write},
    cursor::ReadCursor,
    error::Error,
};
use paste::paste;

// One instantiation per width; the buffer and cursor own the single
// little-endian path each of these delegates to.
macro_rules! impl_numeric {
    ($type:ty) => {
        paste! {
            impl Write for $type {
                #[inline]
                fn write(&self, buf: &mut WriteBuffer) {
                    buf.[<write_ $type>](*self);
                }
            }

            impl Read for $type {
                #[inline]
                fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
                    cur.[<read_ $type>]()
                }
            }

            impl FixedSize for $type {
                const SIZE: usize = std::mem::size_of::<$type>();
            }
        }
    };
}

impl_numeric!(u8);
impl_numeric!(u16);
impl_numeric!(u32);
impl_numeric!(u64);
impl_numeric!(i8);
impl_numeric!(i16);
impl_numeric!(i32);
impl_numeric!(i64);
impl_numeric!(f32);
impl_numeric!(f64);

// Bool occupies a full 32-bit word on the wire (0 or 1). The wide layout is
// the format's defined encoding for bool; any other word is rejected.
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        buf.write_bool(*self);
    }
}

impl Read for bool {
    #[inline]
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        cur.read_bool()
    }
}

impl FixedSize for bool {
    const SIZE: usize = 4;
}

// Char is a single 2-byte UTF-16 code unit. A char outside the basic
// multilingual plane does not fit in one unit and panics on write; a
// surrogate code unit is rejected on read.
impl Write for char {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        let unit = u16::try_from(u32::from(*self))
            .expect("write: char outside the basic multilingual plane");
        buf.write_u16(unit);
    }
}

impl Read for char {
    #[inline]
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let unit = cur.read_u16()?;
        char::from_u32(u32::from(unit)).ok_or(Error::InvalidChar(unit))
    }
}

impl FixedSize for char {
    const SIZE: usize = 2;
}

// Constant-size byte array: raw bytes, no prefix.
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        buf.put_slice(self);
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let mut dst = [0u8; N];
        cur.copy_to_slice(&mut dst)?;
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

// Option: bool presence flag, then the payload.
impl<T: Write> Write for Option<T> {
    #[inline]
    fn write(&self, buf: &mut WriteBuffer) {
        self.is_some().write(buf);
        if let Some(inner) = self {
            inner.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        match self {
            Some(inner) => bool::SIZE + inner.encode_size(),
            None => bool::SIZE,
        }
    }
}

impl<Cfg, T: Read<Cfg>> Read<Cfg> for Option<T> {
    #[inline]
    fn read_cfg(cur: &mut ReadCursor<'_>, cfg: &Cfg) -> Result<Self, Error> {
        if cur.read_bool()? {
            Ok(Some(cur.read_cfg(cfg)?))
        } else {
            Ok(None)
        }
    }
}
