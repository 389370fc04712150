use proptest::prelude::*;
use zip301::{CompressedData, FrequencyTable, HuffmanCodec};

fn text() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // Small alphabets force deep trees and lots of ties.
        prop::collection::vec(prop::sample::select(b"ab \n\t\rz".to_vec()), 0..200),
        prop::collection::vec(any::<u8>(), 0..400),
    ]
}

proptest! {
    #[test]
    fn codes_are_prefix_free(data in text()) {
        let compressed = HuffmanCodec::compress(&data).unwrap();
        let codes: Vec<_> = compressed.code_table.iter().map(|(_, c)| c.clone()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} prefixes {}", a, b);
                }
            }
        }
    }

    #[test]
    fn table_covers_exactly_the_input_symbols(data in text()) {
        let compressed = HuffmanCodec::compress(&data).unwrap();
        let freq = FrequencyTable::from_bytes(&data);
        let table_keys: Vec<u8> = compressed.code_table.iter().map(|(b, _)| b).collect();
        let input_keys: Vec<u8> = freq.iter().map(|(b, _)| b).collect();
        prop_assert_eq!(table_keys, input_keys);
        prop_assert!(compressed.code_table.iter().all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn bit_count_matches_code_lengths(data in text()) {
        let compressed = HuffmanCodec::compress(&data).unwrap();
        let expected: u64 = data
            .iter()
            .map(|&b| compressed.code_table.get(b).unwrap().len() as u64)
            .sum();
        prop_assert_eq!(compressed.total_bits, expected);
    }

    #[test]
    fn payload_is_padded_with_zeros(data in text()) {
        let compressed = HuffmanCodec::compress(&data).unwrap();
        prop_assert_eq!(compressed.payload.len() as u64, compressed.total_bits.div_ceil(8));
        let used = compressed.total_bits % 8;
        if used != 0 {
            let last = *compressed.payload.last().unwrap();
            prop_assert_eq!(last & (0xffu8 >> used), 0);
        }
    }

    #[test]
    fn artifact_round_trips(data in text()) {
        let bytes = HuffmanCodec::compress(&data).unwrap().serialize().unwrap();
        let parsed = CompressedData::deserialize(&mut bytes.as_slice()).unwrap();
        prop_assert_eq!(HuffmanCodec::decode(&parsed).unwrap(), data);
    }

    #[test]
    fn encoding_is_deterministic(data in text()) {
        let first = HuffmanCodec::compress(&data).unwrap().serialize().unwrap();
        let second = HuffmanCodec::compress(&data).unwrap().serialize().unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn aaab_artifact_bytes() {
    let bytes = HuffmanCodec::compress(b"aaab").unwrap().serialize().unwrap();
    let mut expected = b"1 a\n0 b\n*****\n4\n".to_vec();
    expected.push(0b1110_0000);
    assert_eq!(bytes, expected);
}

#[test]
fn zzzz_artifact_bytes() {
    let bytes = HuffmanCodec::compress(b"zzzz").unwrap().serialize().unwrap();
    let mut expected = b"0 z\n*****\n4\n".to_vec();
    expected.push(0);
    assert_eq!(bytes, expected);
}

#[test]
fn empty_artifact_bytes() {
    let bytes = HuffmanCodec::compress(b"").unwrap().serialize().unwrap();
    assert_eq!(bytes, b"*****\n0\n");
}
