//! Binary wire codec for dataflow messages.
//!
//! # Overview
//!
//! Every message, checkpoint record, and control frame the engine sends
//! crosses a process boundary as a flat byte sequence produced and consumed
//! by this crate. A producer appends typed values to a [`WriteBuffer`] and
//! hands the frozen bytes to the transport; a consumer wraps received bytes
//! in a [`ReadCursor`] and decodes values back out. A decode that runs out
//! of bytes fails without moving the cursor, so a partially received record
//! can be retried once more input arrives.
//!
//! # Wire format
//!
//! All fixed-width values are little-endian. `bool` occupies a full 32-bit
//! word and strings travel as length-prefixed UTF-16 code units; both are
//! the format's defined layout, kept for compatibility with existing peers.
//! Collections carry a `u32` element count, and maps are encoded as their
//! entry sequence. The [`varint`] module provides a variable-length integer
//! encoding for fields where small magnitudes dominate.
//!
//! # Supported types
//!
//! Natively supports:
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`,
//!   `f32`, `f64`, `bool`, `char`
//! - Collections: `Vec<T>`, `Option<T>`, tuples, `HashMap<K, V>`,
//!   `BTreeMap<K, V>`, `Bytes`, and fixed-size arrays like `[u8; N]`
//! - Recursive serialization of nested structs via trait implementations
//!
//! User-defined types participate by implementing [`Write`], [`Read`], and
//! [`EncodeSize`]; containers pick those implementations up through their
//! generic bounds.
//!
//! # Example
//!
//! ```
//! use freshet_codec::{
//!     DecodeExt, Encode, EncodeSize, Error, Read, ReadCursor, Write, WriteBuffer,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct Update {
//!     key: u64,
//!     delta: i64,
//!     tag: String,
//! }
//!
//! impl Write for Update {
//!     fn write(&self, buf: &mut WriteBuffer) {
//!         self.key.write(buf);
//!         self.delta.write(buf);
//!         self.tag.write(buf);
//!     }
//! }
//!
//! impl Read for Update {
//!     fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
//!         let key = cur.read()?;
//!         let delta = cur.read()?;
//!         let tag = cur.read()?;
//!         Ok(Self { key, delta, tag })
//!     }
//! }
//!
//! impl EncodeSize for Update {
//!     fn encode_size(&self) -> usize {
//!         self.key.encode_size() + self.delta.encode_size() + self.tag.encode_size()
//!     }
//! }
//!
//! let update = Update { key: 7, delta: -1, tag: "count".into() };
//! let bytes = update.encode();
//! let decoded = Update::decode(&bytes).unwrap();
//! assert_eq!(update, decoded);
//! ```
//!
//! # Example (streaming)
//!
//! ```
//! use freshet_codec::{Error, ReadCursor, Write, WriteBuffer};
//!
//! let mut buf = WriteBuffer::new();
//! "checkpoint".write(&mut buf);
//! let bytes = buf.freeze();
//!
//! // Only part of the record has arrived: the decode fails and the cursor
//! // does not move, so the same bytes can be re-parsed later.
//! let mut cur = ReadCursor::new(&bytes[..6]);
//! assert!(matches!(cur.read::<String>(), Err(Error::InsufficientData)));
//! assert_eq!(cur.position(), 0);
//!
//! // Once the full record is present, the decode consumes it exactly.
//! let mut cur = ReadCursor::new(&bytes);
//! assert_eq!(cur.read::<String>().unwrap(), "checkpoint");
//! assert_eq!(cur.position(), bytes.len());
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod cursor;
pub mod error;
pub mod types;
pub mod varint;

// Re-export main types and traits
pub use buffer::WriteBuffer;
pub use codec::{Codec, Decode, DecodeExt, Encode, EncodeSize, FixedSize, Read, ReadExt, Write};
pub use config::RangeCfg;
pub use cursor::ReadCursor;
pub use error::Error;
pub use varint::{UVarint, Varint};
