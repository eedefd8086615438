//! Growable write buffer targeted by all encode operations.

use bytes::{BufMut, Bytes, BytesMut};

/// Smallest capacity allocated when an empty buffer first grows.
const MIN_GROWTH: usize = 64;

/// An owned, growable byte buffer with a write cursor.
///
/// Every scalar write ensures capacity before touching storage, so a write
/// either fully succeeds or (on allocation failure) aborts the process;
/// a partially written value is never observable. Growth is geometric, which
/// keeps a long run of small appends amortized O(1) per byte.
///
/// Exclusive ownership is enforced by the type system: `&mut` methods
/// serialize access, and [`WriteBuffer::freeze`] moves the finished bytes
/// out for hand-off to the transport. Encoding from multiple threads
/// requires independent buffers.
#[derive(Debug, Default)]
pub struct WriteBuffer {
    inner: BytesMut,
}

// Generates one write method per numeric width; `to_le_bytes` is the single
// width-parameterized encode path all of them share.
macro_rules! impl_write {
    ($name:ident, $type:ty) => {
        /// Appends the value's little-endian bytes, growing if needed.
        #[inline]
        pub fn $name(&mut self, value: $type) {
            self.ensure_available(std::mem::size_of::<$type>());
            self.inner.put_slice(&value.to_le_bytes());
        }
    };
}

impl WriteBuffer {
    /// Creates an empty buffer. No storage is allocated until the first
    /// write.
    pub fn new() -> Self {
        Self {
            inner: BytesMut::new(),
        }
    }

    /// Creates an empty buffer with at least `capacity` bytes pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far (the write cursor).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Current capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Spare capacity between the write cursor and the end of storage.
    pub fn available(&self) -> usize {
        self.inner.capacity() - self.inner.len()
    }

    /// Guarantees at least `needed` bytes of spare capacity, reallocating if
    /// necessary. Never shrinks.
    ///
    /// Growth is geometric (`max(2 * capacity, needed)` with a small floor),
    /// not by exactly the requested amount, so `N` single-byte appends from
    /// an empty buffer cause `O(log N)` reallocations. Reallocation may move
    /// the backing storage; failure to allocate aborts the process rather
    /// than surfacing as a codec error.
    pub fn ensure_available(&mut self, needed: usize) {
        if self.available() >= needed {
            return;
        }
        let required = self
            .inner
            .len()
            .checked_add(needed)
            .expect("ensure_available: capacity overflow");
        let target = self
            .inner
            .capacity()
            .saturating_mul(2)
            .max(MIN_GROWTH)
            .max(required);
        self.inner.reserve(target - self.inner.len());
    }

    impl_write!(write_u8, u8);
    impl_write!(write_u16, u16);
    impl_write!(write_u32, u32);
    impl_write!(write_u64, u64);
    impl_write!(write_i8, i8);
    impl_write!(write_i16, i16);
    impl_write!(write_i32, i32);
    impl_write!(write_i64, i64);
    impl_write!(write_f32, f32);
    impl_write!(write_f64, f64);

    /// Appends a bool as a full 32-bit word (1 or 0). The wide layout is the
    /// wire format's defined encoding for bool; it is not collapsed to a
    /// single byte.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(value as u32);
    }

    /// Appends raw bytes, growing if needed.
    pub fn put_slice(&mut self, src: &[u8]) {
        self.ensure_available(src.len());
        self.inner.put_slice(src);
    }

    /// Converts the buffer into immutable [`Bytes`] for hand-off to the
    /// transport. Consumes the buffer, so no stale handle can alias the
    /// finished record.
    pub fn freeze(self) -> Bytes {
        self.inner.freeze()
    }

    /// Borrows the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}
