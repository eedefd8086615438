#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use freshet_codec::{
    types::arrays, Decode, DecodeExt, Encode, EncodeSize, RangeCfg, ReadCursor, UVarint, Varint,
};
use libfuzzer_sys::fuzz_target;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

fn roundtrip<T>(value: T)
where
    T: Encode + EncodeSize + DecodeExt + PartialEq + Debug,
{
    let encoded = value.encode();
    assert_eq!(value.encode_size(), encoded.len());
    let decoded = T::decode(encoded).expect("failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
}

fn roundtrip_string(value: String) {
    let encoded = value.encode();
    assert_eq!(value.encode_size(), encoded.len());
    let decoded = String::decode(encoded).expect("failed to decode an encoded string!");
    assert_eq!(value, decoded);
}

fn roundtrip_map(map: HashMap<i32, String>) {
    let encoded = map.encode();
    assert_eq!(map.encode_size(), encoded.len());
    let cfg: (RangeCfg, ((), ())) = ((..).into(), ((), ()));
    let decoded =
        HashMap::<i32, String>::decode_cfg(encoded, &cfg).expect("failed to decode map!");
    assert_eq!(map, decoded);
}

fn roundtrip_pairs(pairs: Vec<(u64, u64)>) {
    let encoded = pairs.encode();
    assert_eq!(pairs.encode_size(), encoded.len());
    let cfg: (RangeCfg, ()) = ((..).into(), ());
    let decoded = Vec::<(u64, u64)>::decode_cfg(encoded, &cfg).expect("failed to decode pairs!");
    assert_eq!(pairs, decoded);
}

fn roundtrip_ints(values: Vec<i32>) {
    let mut buf = freshet_codec::WriteBuffer::new();
    arrays::write_ints(&mut buf, &values);
    let bytes = buf.freeze();
    let mut cur = ReadCursor::new(&bytes);
    let decoded = arrays::read_ints(&mut cur).expect("failed to decode int array!");
    assert_eq!(values, decoded);
    assert_eq!(cur.remaining(), 0);
}

// Decoding attempts against raw attacker-controlled bytes must never panic,
// and a failed decode must leave the cursor where it started.
fn decode_garbage(data: &[u8]) {
    let mut cur = ReadCursor::new(data);
    if cur.read::<String>().is_err() {
        assert_eq!(cur.position(), 0);
    }

    let mut cur = ReadCursor::new(data);
    if cur.read::<Vec<i32>>().is_err() {
        assert_eq!(cur.position(), 0);
    }

    let mut cur = ReadCursor::new(data);
    if cur.read::<BTreeMap<u32, u64>>().is_err() {
        assert_eq!(cur.position(), 0);
    }

    let mut cur = ReadCursor::new(data);
    let _ = freshet_codec::varint::read(&mut cur);

    let _ = Bytes::decode(data);
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Garbage(&'a [u8]),
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Char(char),
    Text(String),
    Ints(Vec<i32>),
    Pairs(Vec<(u64, u64)>),
    Map(HashMap<i32, String>),
    Optional(Option<u32>),
    UVarInt(u32),
    SVarInt(i32),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Garbage(data) => decode_garbage(data),
        FuzzInput::Bool(v) => roundtrip(v),
        FuzzInput::U8(v) => roundtrip(v),
        FuzzInput::U16(v) => roundtrip(v),
        FuzzInput::U32(v) => roundtrip(v),
        FuzzInput::U64(v) => roundtrip(v),
        FuzzInput::I8(v) => roundtrip(v),
        FuzzInput::I16(v) => roundtrip(v),
        FuzzInput::I32(v) => roundtrip(v),
        FuzzInput::I64(v) => roundtrip(v),
        FuzzInput::Char(v) => {
            // Only single-code-unit chars are encodable.
            if u32::from(v) <= 0xFFFF {
                roundtrip(v);
            }
        }
        FuzzInput::Text(v) => roundtrip_string(v),
        FuzzInput::Ints(v) => {
            roundtrip(v.clone());
            roundtrip_ints(v);
        }
        FuzzInput::Pairs(v) => roundtrip_pairs(v),
        FuzzInput::Map(v) => roundtrip_map(v),
        FuzzInput::Optional(v) => roundtrip(v),
        FuzzInput::UVarInt(v) => roundtrip(UVarint(v)),
        FuzzInput::SVarInt(v) => roundtrip(Varint(v)),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
