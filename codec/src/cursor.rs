//! Bounds-checked read cursor sourcing all decode operations.

use crate::{codec::Read, error::Error};

/// A borrowed view over a byte region with a read position and a fixed end
/// bound.
///
/// Every read checks the remaining bytes before touching data: a failed
/// scalar read returns [`Error::InsufficientData`] with the position
/// unchanged, and [`ReadCursor::read`] / [`ReadCursor::read_cfg`] restore
/// the entry position when any multi-part decode fails. Callers rely on
/// this to buffer more input and retry a record from its original start.
///
/// Reads never cross `end`, even when the underlying region extends further
/// (see [`ReadCursor::bounded`]). The region is borrowed immutably for the
/// cursor's lifetime, so no concurrent writer can exist while it is parsed.
#[derive(Debug)]
pub struct ReadCursor<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

// Generates one read method per numeric width; `from_le_bytes` is the single
// width-parameterized decode path all of them share.
macro_rules! impl_read {
    ($name:ident, $type:ty) => {
        /// Reads a little-endian value, advancing only on success.
        #[inline]
        pub fn $name(&mut self) -> Result<$type, Error> {
            self.take_array().map(<$type>::from_le_bytes)
        }
    };
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor over the whole region.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Creates a cursor over `data[start..end]` without re-slicing the
    /// region, so reported positions stay meaningful as offsets into the
    /// full receive buffer.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > data.len()`. Bad bounds are
    /// programmer misuse, not a decode error.
    pub fn bounded(data: &'a [u8], start: usize, end: usize) -> Self {
        assert!(
            start <= end && end <= data.len(),
            "cursor bounds out of range"
        );
        Self {
            data,
            pos: start,
            end,
        }
    }

    /// Current read position, as an offset into the underlying region.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of readable bytes before the end bound.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Returns true if at least one readable byte remains.
    pub fn has_remaining(&self) -> bool {
        self.pos < self.end
    }

    /// Moves the position back to an earlier offset, typically one captured
    /// with [`ReadCursor::position`] before a multi-part decode.
    ///
    /// # Panics
    ///
    /// Panics if `position` exceeds the end bound.
    pub fn rewind(&mut self, position: usize) {
        assert!(position <= self.end, "rewind past end bound");
        self.pos = position;
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < len {
            return Err(Error::InsufficientData);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    impl_read!(read_u8, u8);
    impl_read!(read_u16, u16);
    impl_read!(read_u32, u32);
    impl_read!(read_u64, u64);
    impl_read!(read_i8, i8);
    impl_read!(read_i16, i16);
    impl_read!(read_i32, i32);
    impl_read!(read_i64, i64);
    impl_read!(read_f32, f32);
    impl_read!(read_f64, f64);

    /// Reads a bool encoded as a full 32-bit word. A word other than 0 or 1
    /// is rejected and the position is restored.
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        let start = self.pos;
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => {
                self.pos = start;
                Err(Error::InvalidBool(other))
            }
        }
    }

    /// Copies the next `dst.len()` bytes into `dst` and advances.
    pub fn copy_to_slice(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let src = self.take(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    /// Decodes one `T`, restoring the entry position on any failure.
    pub fn read<T: Read>(&mut self) -> Result<T, Error> {
        self.read_cfg(&())
    }

    /// Decodes one `T` with a decode configuration, restoring the entry
    /// position on any failure.
    pub fn read_cfg<Cfg, T: Read<Cfg>>(&mut self, cfg: &Cfg) -> Result<T, Error> {
        let start = self.pos;
        match T::read_cfg(self, cfg) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.pos = start;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reads() {
        let data = [0x04, 0x03, 0x02, 0x01, 0xFF];
        let mut cur = ReadCursor::new(&data);
        assert_eq!(cur.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(cur.read_i8().unwrap(), -1);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_insufficient_leaves_position() {
        let data = [0x01, 0x02];
        let mut cur = ReadCursor::new(&data);
        assert!(matches!(cur.read_u32(), Err(Error::InsufficientData)));
        assert_eq!(cur.position(), 0);

        // A partial record before the failure is also untouched.
        assert_eq!(cur.read_u8().unwrap(), 0x01);
        assert!(matches!(cur.read_u32(), Err(Error::InsufficientData)));
        assert_eq!(cur.position(), 1);
    }

    #[test]
    fn test_bounded_subrecord() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0];
        let mut cur = ReadCursor::bounded(&data, 0, 4);
        assert_eq!(cur.read_u32().unwrap(), 1);
        // More bytes exist in the region but not before the end bound.
        assert!(matches!(cur.read_u32(), Err(Error::InsufficientData)));
        assert_eq!(cur.position(), 4);

        let mut cur = ReadCursor::bounded(&data, 4, 8);
        assert_eq!(cur.position(), 4);
        assert_eq!(cur.read_u32().unwrap(), 2);
    }

    #[test]
    #[should_panic(expected = "cursor bounds out of range")]
    fn test_bounded_bad_bounds() {
        let data = [0u8; 4];
        let _ = ReadCursor::bounded(&data, 2, 8);
    }

    #[test]
    fn test_read_bool() {
        let data = [1, 0, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0];
        let mut cur = ReadCursor::new(&data);
        assert!(cur.read_bool().unwrap());
        assert!(!cur.read_bool().unwrap());
        assert!(matches!(cur.read_bool(), Err(Error::InvalidBool(7))));
        assert_eq!(cur.position(), 8);
    }

    #[test]
    fn test_take_and_rewind() {
        let data = [1, 2, 3, 4];
        let mut cur = ReadCursor::new(&data);
        assert_eq!(cur.take(3).unwrap(), &[1, 2, 3]);
        cur.rewind(1);
        assert_eq!(cur.take(3).unwrap(), &[2, 3, 4]);
        assert!(matches!(cur.take(1), Err(Error::InsufficientData)));
    }

    #[test]
    fn test_copy_to_slice() {
        let data = [9, 8, 7];
        let mut cur = ReadCursor::new(&data);
        let mut dst = [0u8; 2];
        cur.copy_to_slice(&mut dst).unwrap();
        assert_eq!(dst, [9, 8]);
        let mut dst = [0u8; 2];
        assert!(matches!(
            cur.copy_to_slice(&mut dst),
            Err(Error::InsufficientData)
        ));
        assert_eq!(cur.position(), 2);
    }
}
