//! Property-based tests for the Base58Check codec.
//!
//! Round-trips, checksum sensitivity, alphabet closure and leading-zero
//! preservation over randomly generated payloads.

use btc_cryptography::base58::{self, ALPHABET};
use btc_cryptography::{decode_check, decode_versioned, encode, encode_versioned, Base58Error};
use proptest::prelude::*;

fn is_base58(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

proptest! {
    /// Property: versioned payloads of up to 75 bytes survive encode then decode
    #[test]
    fn prop_versioned_round_trip(
        payload in prop::collection::vec(any::<u8>(), 0..=75),
        version in prop::sample::select(vec![0x00u8, 0x05]),
    ) {
        let encoded = encode_versioned(&payload, version);
        let (decoded, decoded_version) = decode_versioned(&encoded).unwrap();
        prop_assert_eq!(decoded, payload);
        prop_assert_eq!(decoded_version, version);
    }

    /// Property: raw base58 keeps every leading zero byte
    #[test]
    fn prop_raw_round_trip(
        zeros in 0usize..8,
        tail in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let mut data = vec![0u8; zeros];
        data.extend(tail);
        let encoded = encode(&data);
        prop_assert!(encoded.chars().all(is_base58));
        prop_assert_eq!(base58::decode(&encoded).unwrap(), data);
    }

    /// Property: a single flipped bit in the versioned payload breaks the checksum
    #[test]
    fn prop_bit_flip_fails_checksum(
        payload in prop::collection::vec(any::<u8>(), 20..=20),
        version in prop::sample::select(vec![0x00u8, 0x05]),
        bit in 0usize..(21 * 8),
    ) {
        let encoded = encode_versioned(&payload, version);
        let mut extended = base58::decode(&encoded).unwrap();
        extended[bit / 8] ^= 1 << (bit % 8);

        let err = decode_check(&encode(&extended)).unwrap_err();
        prop_assert!(err.is_checksum_error(), "unexpected error: {}", err);
    }

    /// Property: any character outside the alphabet is a format error, never a checksum error
    #[test]
    fn prop_invalid_character_is_format_error(
        payload in prop::collection::vec(any::<u8>(), 0..=32),
        bad in any::<char>().prop_filter("outside the alphabet", |c| !is_base58(*c)),
        at in any::<prop::sample::Index>(),
    ) {
        let encoded = encode_versioned(&payload, 0x00);
        let chars: Vec<char> = encoded.chars().collect();
        let split = at.index(chars.len() + 1);

        let mut tampered: String = chars[..split].iter().collect();
        tampered.push(bad);
        tampered.extend(&chars[split..]);

        match decode_versioned(&tampered) {
            Err(Base58Error::InvalidCharacter { character, .. }) => {
                prop_assert_eq!(character, bad);
            }
            other => {
                prop_assert!(false, "expected invalid character, got {:?}", other);
            }
        }
    }
}

#[test]
fn test_leading_zero_payload_preserved() {
    for version in [0x00u8, 0x05] {
        let encoded = encode_versioned(&[0x00, 0x00, 0xAB], version);
        let (payload, decoded_version) = decode_versioned(&encoded).unwrap();
        assert_eq!(payload, vec![0x00, 0x00, 0xAB]);
        assert_ne!(payload, vec![0xAB]);
        assert_eq!(decoded_version, version);
    }
}

#[test]
fn test_invalid_characters_rejected() {
    for invalid in ["0", "O", "I", "l", "+", "/", "1111111111111111111114oLvT0"] {
        let err = decode_versioned(invalid).unwrap_err();
        assert!(err.is_format_error(), "{invalid} should be a format error");
    }
}

#[test]
fn test_too_short_inputs() {
    for input in ["", "1", "11", "111", "1111"] {
        assert!(matches!(
            decode_versioned(input),
            Err(Base58Error::TooShort { .. })
        ));
    }
}

#[test]
fn test_all_zero_p2pkh_vector() {
    let (payload, version) = decode_versioned("1111111111111111111114oLvT2").unwrap();
    assert_eq!(version, 0x00);
    assert_eq!(payload, [0u8; 20]);
}
