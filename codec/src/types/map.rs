//! Codec implementations for associative maps.
//!
//! A map has no native layout of its own: it travels as its entry sequence,
//! byte-identical to `Vec<(K, V)>`. Decoding inserts entries in wire order,
//! so a duplicate key keeps the last value seen.

use crate::{
    buffer::WriteBuffer,
    codec::{EncodeSize, FixedSize, Read, Write},
    config::RangeCfg,
    cursor::ReadCursor,
    error::Error,
};
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

impl<K: Write, V: Write> Write for HashMap<K, V> {
    fn write(&self, buf: &mut WriteBuffer) {
        let count = u32::try_from(self.len()).expect("write: map length exceeds u32");
        buf.write_u32(count);
        for (key, value) in self {
            key.write(buf);
            value.write(buf);
        }
    }
}

impl<K: EncodeSize, V: EncodeSize> EncodeSize for HashMap<K, V> {
    fn encode_size(&self) -> usize {
        u32::SIZE
            + self
                .iter()
                .map(|(key, value)| key.encode_size() + value.encode_size())
                .sum::<usize>()
    }
}

// Fixed-size entries: the payload length is validated against the remaining
// bytes before anything is allocated.
impl<K, V> Read for HashMap<K, V>
where
    K: Read + FixedSize + Eq + Hash,
    V: Read + FixedSize,
{
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        let byte_len = count
            .checked_mul(K::SIZE + V::SIZE)
            .ok_or(Error::InvalidLength(count))?;
        if cur.remaining() < byte_len {
            return Err(Error::InsufficientData);
        }
        let mut map = HashMap::with_capacity(count);
        for _ in 0..count {
            let key = cur.read()?;
            let value = cur.read()?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

// Variable-size entries: the caller bounds the entry count.
impl<KCfg, VCfg, K, V> Read<(RangeCfg, (KCfg, VCfg))> for HashMap<K, V>
where
    K: Read<KCfg> + Eq + Hash,
    V: Read<VCfg>,
{
    fn read_cfg(
        cur: &mut ReadCursor<'_>,
        (range, (k_cfg, v_cfg)): &(RangeCfg, (KCfg, VCfg)),
    ) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        if !range.contains(count) {
            return Err(Error::InvalidLength(count));
        }
        let mut map = HashMap::with_capacity(count);
        for _ in 0..count {
            let key = cur.read_cfg(k_cfg)?;
            let value = cur.read_cfg(v_cfg)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

// BTreeMap writes its entries in key order, which makes the encoded bytes
// deterministic; checkpoint records depend on that.
impl<K: Write, V: Write> Write for BTreeMap<K, V> {
    fn write(&self, buf: &mut WriteBuffer) {
        let count = u32::try_from(self.len()).expect("write: map length exceeds u32");
        buf.write_u32(count);
        for (key, value) in self {
            key.write(buf);
            value.write(buf);
        }
    }
}

impl<K: EncodeSize, V: EncodeSize> EncodeSize for BTreeMap<K, V> {
    fn encode_size(&self) -> usize {
        u32::SIZE
            + self
                .iter()
                .map(|(key, value)| key.encode_size() + value.encode_size())
                .sum::<usize>()
    }
}

impl<K, V> Read for BTreeMap<K, V>
where
    K: Read + FixedSize + Ord,
    V: Read + FixedSize,
{
    fn read_cfg(cur: &mut ReadCursor<'_>, _: &()) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        let byte_len = count
            .checked_mul(K::SIZE + V::SIZE)
            .ok_or(Error::InvalidLength(count))?;
        if cur.remaining() < byte_len {
            return Err(Error::InsufficientData);
        }
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = cur.read()?;
            let value = cur.read()?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<KCfg, VCfg, K, V> Read<(RangeCfg, (KCfg, VCfg))> for BTreeMap<K, V>
where
    K: Read<KCfg> + Ord,
    V: Read<VCfg>,
{
    fn read_cfg(
        cur: &mut ReadCursor<'_>,
        (range, (k_cfg, v_cfg)): &(RangeCfg, (KCfg, VCfg)),
    ) -> Result<Self, Error> {
        let count = cur.read_u32()? as usize;
        if !range.contains(count) {
            return Err(Error::InvalidLength(count));
        }
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = cur.read_cfg(k_cfg)?;
            let value = cur.read_cfg(v_cfg)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
