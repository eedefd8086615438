//! Property-based tests for codec round-trips and truncation safety.

use std::collections::HashMap;

use freshet_codec::{
    types::arrays, Decode, DecodeExt, Encode, EncodeSize, Error, RangeCfg, ReadCursor, Varint,
    Write, WriteBuffer,
};
use proptest::prelude::*;

/// Strategy for chars that fit in a single UTF-16 code unit.
fn arb_bmp_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("single code unit", |c| u32::from(*c) <= 0xFFFF)
}

proptest! {
    #[test]
    fn scalar_roundtrip(a in any::<u64>(), b in any::<i32>(), c in any::<u16>(), d in any::<bool>()) {
        let record = (a, b, c, d);
        let encoded = record.encode();
        prop_assert_eq!(encoded.len(), record.encode_size());
        let decoded = <(u64, i32, u16, bool)>::decode(&encoded).unwrap();
        prop_assert_eq!(record, decoded);
    }

    #[test]
    fn float_roundtrip(value in any::<f64>().prop_filter("not NaN", |f| !f.is_nan())) {
        let encoded = value.encode();
        prop_assert_eq!(f64::decode(encoded).unwrap(), value);
    }

    #[test]
    fn char_roundtrip(value in arb_bmp_char()) {
        let encoded = value.encode();
        prop_assert_eq!(encoded.len(), 2);
        prop_assert_eq!(char::decode(encoded).unwrap(), value);
    }

    #[test]
    fn string_roundtrip(value in ".*") {
        let owned = value.to_string();
        let encoded = owned.encode();
        prop_assert_eq!(encoded.len(), owned.encode_size());
        prop_assert_eq!(String::decode(&encoded).unwrap(), owned);
    }

    #[test]
    fn string_cursor_consumes_exactly(value in ".*") {
        let mut buf = WriteBuffer::new();
        value.as_str().write(&mut buf);
        0xA5A5u16.write(&mut buf);
        let bytes = buf.freeze();

        let mut cur = ReadCursor::new(&bytes);
        prop_assert_eq!(cur.read::<String>().unwrap(), value.clone());
        // The trailing sentinel is untouched by the string decode.
        prop_assert_eq!(cur.read::<u16>().unwrap(), 0xA5A5);
        prop_assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn int_array_roundtrip(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let encoded = values.encode();
        prop_assert_eq!(encoded.len(), 4 + 4 * values.len());
        prop_assert_eq!(Vec::<i32>::decode(&encoded).unwrap(), values.clone());

        // The bulk path produces and consumes the same bytes.
        let mut buf = WriteBuffer::new();
        arrays::write_ints(&mut buf, &values);
        prop_assert_eq!(buf.as_slice(), &encoded[..]);
        let mut cur = ReadCursor::new(&encoded);
        prop_assert_eq!(arrays::read_ints(&mut cur).unwrap(), values);
    }

    #[test]
    fn byte_array_roundtrip(values in proptest::collection::vec(any::<u8>(), 0..400)) {
        let mut buf = WriteBuffer::new();
        arrays::write_bytes(&mut buf, &values);
        let bytes = buf.freeze();
        let mut cur = ReadCursor::new(&bytes);
        prop_assert_eq!(arrays::read_bytes(&mut cur).unwrap(), values);
        prop_assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn fixed_map_roundtrip(map in proptest::collection::hash_map(any::<u64>(), any::<u64>(), 0..50)) {
        let encoded = map.encode();
        prop_assert_eq!(encoded.len(), map.encode_size());
        prop_assert_eq!(HashMap::<u64, u64>::decode(&encoded).unwrap(), map);
    }

    #[test]
    fn string_map_roundtrip(map in proptest::collection::hash_map(any::<i32>(), ".*", 0..20)) {
        let encoded = map.encode();
        let cfg: (RangeCfg, ((), ())) = ((..).into(), ((), ()));
        let decoded = HashMap::<i32, String>::decode_cfg(&encoded, &cfg).unwrap();
        prop_assert_eq!(decoded, map);
    }

    #[test]
    fn varint_roundtrip(value in any::<u32>()) {
        let mut buf = WriteBuffer::new();
        freshet_codec::varint::write(value, &mut buf);
        prop_assert_eq!(buf.len(), freshet_codec::varint::size(value));
        let bytes = buf.freeze();
        let mut cur = ReadCursor::new(&bytes);
        prop_assert_eq!(freshet_codec::varint::read(&mut cur).unwrap(), value);
        prop_assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn signed_varint_roundtrip(value in any::<i32>()) {
        let encoded = Varint(value).encode();
        prop_assert_eq!(Varint::decode(encoded).unwrap(), Varint(value));
    }

    #[test]
    fn truncation_never_moves_cursor(
        tag in ".*",
        deltas in proptest::collection::vec(any::<i32>(), 0..20),
        stamp in any::<u64>(),
        cut_seed in any::<prop::sample::Index>(),
    ) {
        let record = (tag, deltas, stamp);
        let encoded = record.encode();

        // Any strict prefix of the record must fail to decode and leave the
        // cursor exactly where it started.
        let cut = cut_seed.index(encoded.len());
        let mut cur = ReadCursor::new(&encoded[..cut]);
        prop_assert!(matches!(
            cur.read::<(String, Vec<i32>, u64)>(),
            Err(Error::InsufficientData)
        ));
        prop_assert_eq!(cur.position(), 0);

        // The untruncated record decodes and is consumed exactly.
        let mut cur = ReadCursor::new(&encoded);
        let decoded: (String, Vec<i32>, u64) = cur.read().unwrap();
        prop_assert_eq!(decoded, record);
        prop_assert_eq!(cur.position(), encoded.len());
    }
}

#[test]
fn decode_rejects_trailing_bytes() {
    let mut buf = WriteBuffer::new();
    buf.write_u32(1);
    buf.write_u8(0xFF);
    let bytes = buf.freeze();
    assert!(matches!(u32::decode(bytes), Err(Error::ExtraData(1))));
}
