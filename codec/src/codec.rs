//! Core codec traits and implementations

use crate::{buffer::WriteBuffer, cursor::ReadCursor, error::Error};
use bytes::Bytes;

/// Trait for types that can be written (encoded) into a [`WriteBuffer`].
pub trait Write {
    /// Appends this value's encoding to the buffer.
    ///
    /// Capacity is ensured internally; once ensured, writing cannot fail, so
    /// a partially written value is never observable.
    fn write(&self, buf: &mut WriteBuffer);
}

/// Trait for types that can be decoded from a [`ReadCursor`].
///
/// The `Cfg` type parameter carries decode-time policy. Collections with
/// variable-size elements take a [`RangeCfg`](crate::RangeCfg) bounding the
/// lengths the caller will accept from untrusted input; types that need no
/// configuration use `()`.
///
/// Enter implementations through [`ReadCursor::read`] /
/// [`ReadCursor::read_cfg`] (or [`Decode`]), which restore the cursor
/// position when decoding fails. A bare `Read::read_cfg` call may leave the
/// cursor mid-record on failure.
pub trait Read<Cfg = ()>: Sized {
    /// Reads a value from the cursor using the provided configuration,
    /// consuming the necessary bytes.
    fn read_cfg(cur: &mut ReadCursor<'_>, cfg: &Cfg) -> Result<Self, Error>;
}

/// Extension trait providing an ergonomic read method for types requiring no
/// configuration.
pub trait ReadExt: Read {
    /// Reads a value using the default `()` config, restoring the cursor
    /// position on failure.
    fn read(cur: &mut ReadCursor<'_>) -> Result<Self, Error> {
        cur.read_cfg(&())
    }
}

impl<T: Read> ReadExt for T {}

/// Trait for types whose exact encoded length can be computed up front.
pub trait EncodeSize {
    /// Returns the exact number of bytes [`Write::write`] will append.
    fn encode_size(&self) -> usize;
}

/// Trait for types with a compile-time constant encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

// Fixed-size types know their encoded length without inspecting the value.
impl<T: FixedSize> EncodeSize for T {
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

/// Trait for types that can be encoded to a frozen byte buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes this value into a [`Bytes`] buffer sized exactly by
    /// [`EncodeSize::encode_size`].
    ///
    /// Panics if the `write` implementation appends a different number of
    /// bytes than `encode_size` reported.
    ///
    /// (Provided method).
    fn encode(&self) -> Bytes {
        let expected = self.encode_size();
        let mut buf = WriteBuffer::with_capacity(expected);
        self.write(&mut buf);
        assert_eq!(
            buf.len(),
            expected,
            "write() did not write expected bytes"
        );
        buf.freeze()
    }
}

// Automatically implement `Encode` for types that can be written and sized.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types decodable from a complete record, ensuring the record is
/// fully consumed.
pub trait Decode<Cfg = ()>: Read<Cfg> {
    /// Decodes a value from `data`, rejecting trailing bytes.
    ///
    /// (Provided method).
    fn decode_cfg(data: impl AsRef<[u8]>, cfg: &Cfg) -> Result<Self, Error> {
        let data = data.as_ref();
        let mut cur = ReadCursor::new(data);
        let value = cur.read_cfg(cfg)?;
        let remaining = cur.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(value)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<Cfg, T: Read<Cfg>> Decode<Cfg> for T {}

/// Extension trait providing an ergonomic decode method for types requiring
/// no configuration.
pub trait DecodeExt: Decode {
    /// Decodes a value using the default `()` config.
    fn decode(data: impl AsRef<[u8]>) -> Result<Self, Error> {
        Self::decode_cfg(data, &())
    }
}

impl<T: Decode> DecodeExt for T {}

/// Trait for types with paired encode/decode capability.
///
/// Containers obtain the codec for an arbitrary element type through this
/// bound, resolved per concrete type at compile time; an element type
/// without an implementation is rejected at the call site by the compiler.
pub trait Codec<Cfg = ()>: Encode + Decode<Cfg> {}

// Automatically implement `Codec` for types that implement both halves.
impl<Cfg, T: Encode + Decode<Cfg>> Codec<Cfg> for T {}
