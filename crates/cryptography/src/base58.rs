//! Base58 and Base58Check encoding.
//!
//! Base58 treats the input as one big-endian unsigned integer and writes it
//! in radix 58 over an alphabet without the visually ambiguous `0`, `O`, `I`
//! and `l`. Leading zero bytes carry no numeric weight, so each one is kept
//! as a leading `'1'` (the zero digit) and restored on decode.
//!
//! Base58Check appends the first four bytes of Hash256 over the data before
//! encoding; the versioned form puts a single version byte in front of the
//! payload.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::{Base58Error, Base58Result};
use crate::hash::{self, CHECKSUM_SIZE};

/// The Base58 alphabet, in digit order.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Smallest decoded Base58Check buffer: one version byte plus the checksum.
pub const MIN_CHECKED_LEN: usize = 1 + CHECKSUM_SIZE;

const BASE: u32 = 58;
const ZERO_DIGIT: char = '1';
const INVALID_DIGIT: u8 = 0xFF;

static DIGITS: [u8; 128] = digit_table();

const fn digit_table() -> [u8; 128] {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

#[inline]
fn digit_value(character: char) -> Option<u32> {
    match DIGITS.get(character as usize) {
        Some(&digit) if digit != INVALID_DIGIT => Some(u32::from(digit)),
        _ => None,
    }
}

/// Returns the length to reserve when encoding `len` bytes.
const fn encoded_reserve_len(len: usize) -> usize {
    // log(256) / log(58) ~ 1.37
    len * 137 / 100 + 1
}

/// Encodes `data` as a Base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&byte| byte == 0).count();

    let radix = BigUint::from(BASE);
    let mut value = BigUint::from_bytes_be(data);
    let mut digits = Vec::with_capacity(encoded_reserve_len(data.len()));
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&radix);
        // remainder < 58, so it is at most one u32 digit (none when zero)
        let index = remainder.to_u32_digits().first().copied().unwrap_or(0);
        digits.push(ALPHABET[index as usize]);
        value = quotient;
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat(ZERO_DIGIT).take(zeros));
    encoded.extend(digits.iter().rev().map(|&digit| char::from(digit)));
    encoded
}

/// Decodes a Base58 string into bytes.
///
/// Fails with [`Base58Error::InvalidCharacter`] on the first character outside
/// [`ALPHABET`].
pub fn decode(text: &str) -> Base58Result<Vec<u8>> {
    let mut value = BigUint::zero();
    for (position, character) in text.char_indices() {
        let digit = digit_value(character)
            .ok_or(Base58Error::InvalidCharacter { character, position })?;
        value = value * BASE + digit;
    }

    let zeros = text.chars().take_while(|&c| c == ZERO_DIGIT).count();
    let mut decoded = vec![0u8; zeros];
    if !value.is_zero() {
        decoded.extend(value.to_bytes_be());
    }
    Ok(decoded)
}

/// Encodes `data` followed by its four byte checksum.
pub fn encode_check(data: &[u8]) -> String {
    let mut extended = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    extended.extend_from_slice(data);
    extended.extend_from_slice(&hash::checksum(data));
    encode(&extended)
}

/// Decodes Base58Check text and verifies its checksum, returning the data
/// without the checksum.
///
/// The decoded buffer must be at least [`MIN_CHECKED_LEN`] bytes long.
pub fn decode_check(text: &str) -> Base58Result<Vec<u8>> {
    let mut decoded = decode(text).map_err(|err| {
        debug!("base58check decode failed: {err}");
        err
    })?;
    if decoded.len() < MIN_CHECKED_LEN {
        debug!(length = decoded.len(), "base58check input too short");
        return Err(Base58Error::TooShort {
            length: decoded.len(),
            min: MIN_CHECKED_LEN,
        });
    }

    let check_start = decoded.len() - CHECKSUM_SIZE;
    let expected = hash::checksum(&decoded[..check_start]);
    let mut actual = [0u8; CHECKSUM_SIZE];
    actual.copy_from_slice(&decoded[check_start..]);
    if expected != actual {
        let err = Base58Error::IncorrectChecksum {
            expected: u32::from_be_bytes(expected),
            actual: u32::from_be_bytes(actual),
        };
        debug!("base58check decode failed: {err}");
        return Err(err);
    }

    decoded.truncate(check_start);
    Ok(decoded)
}

/// Encodes `payload` behind a `version` byte, with checksum.
pub fn encode_versioned(payload: &[u8], version: u8) -> String {
    let mut versioned = Vec::with_capacity(1 + payload.len());
    versioned.push(version);
    versioned.extend_from_slice(payload);
    trace!(version, len = payload.len(), "base58check encode");
    encode_check(&versioned)
}

/// Decodes versioned Base58Check text into `(payload, version)`.
pub fn decode_versioned(text: &str) -> Base58Result<(Vec<u8>, u8)> {
    let versioned = decode_check(text)?;
    let (&version, payload) = versioned.split_first().ok_or(Base58Error::TooShort {
        length: 0,
        min: MIN_CHECKED_LEN,
    })?;
    trace!(version, len = payload.len(), "base58check decode");
    Ok((payload.to_vec(), version))
}

/// Conversion of byte sequences into Base58Check text.
pub trait ToBase58Check {
    /// Encodes `self` as Base58Check, behind `version` when one is given.
    fn to_base58_check(&self, version: Option<u8>) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self, version: Option<u8>) -> String {
        match version {
            Some(version) => encode_versioned(self.as_ref(), version),
            None => encode_check(self.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_base58_encode() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[13, 36]), "211");

        // Leading zeroes
        assert_eq!(encode(&[0, 13, 36]), "1211");
        assert_eq!(encode(&[0, 0, 0, 0, 13, 36]), "1111211");
    }

    #[test]
    fn test_base58_decode() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("1").unwrap(), vec![0]);
        assert_eq!(decode("2").unwrap(), vec![1]);
        assert_eq!(decode("21").unwrap(), vec![58]);
        assert_eq!(decode("211").unwrap(), vec![13, 36]);

        // Leading zeroes
        assert_eq!(decode("1211").unwrap(), vec![0, 13, 36]);
        assert_eq!(decode("111211").unwrap(), vec![0, 0, 0, 13, 36]);
    }

    #[test]
    fn test_base58_invalid_character() {
        assert_eq!(
            decode("12O3").unwrap_err(),
            Base58Error::InvalidCharacter { character: 'O', position: 2 }
        );
        assert_eq!(
            decode("¢").unwrap_err(),
            Base58Error::InvalidCharacter { character: '¢', position: 0 }
        );
        assert!(decode("0").unwrap_err().is_format_error());
    }

    #[test]
    fn test_digit_table_matches_alphabet() {
        for (index, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(char::from(symbol)), Some(index as u32));
        }
        for symbol in ['0', 'O', 'I', 'l', '+', '/', ' '] {
            assert_eq!(digit_value(symbol), None);
        }
    }

    #[test]
    fn test_encode_check_address() {
        let addr = hex!("00f8917303bfa8ef24f292e8fa1419b20460ba064d");
        assert_eq!(encode_check(&addr), "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH");
        assert_eq!(decode_check("1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH").unwrap(), addr.to_vec());
    }

    #[test]
    fn test_decode_check_too_short() {
        // four bytes decode fine as base58 but cannot hold version and checksum
        let short = encode(&[1, 2, 3, 4]);
        assert_eq!(
            decode_check(&short).unwrap_err(),
            Base58Error::TooShort { length: 4, min: MIN_CHECKED_LEN }
        );
        assert!(decode_check("").unwrap_err().is_format_error());
    }

    #[test]
    fn test_decode_check_bad_checksum() {
        let mut extended = hex!("00f8917303bfa8ef24f292e8fa1419b20460ba064d").to_vec();
        extended.extend_from_slice(&[0, 0, 0, 0]);
        let err = decode_check(&encode(&extended)).unwrap_err();
        assert!(err.is_checksum_error());
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_versioned_all_zero_vector() {
        let encoded = encode_versioned(&[0u8; 20], 0x00);
        assert_eq!(encoded, "1111111111111111111114oLvT2");

        let (payload, version) = decode_versioned(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(payload, vec![0u8; 20]);
    }

    #[test]
    fn test_versioned_script_hash() {
        let hash = hex!("162c5ea71c0b23f5b9022ef047c4a86470a5b070");
        assert_eq!(encode_versioned(&hash, 0x00), "132F25rTsvBdp9JzLLBHP5mvGY66i1xdiM");
        assert_eq!(encode_versioned(&hash, 0x05), "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k");
        assert_eq!(
            decode_versioned("33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k").unwrap(),
            (hash.to_vec(), 0x05)
        );
    }

    #[test]
    fn test_versioned_leading_zero_payload() {
        let encoded = encode_versioned(&[0x00, 0x00, 0xAB], 0x05);
        assert_eq!(decode_versioned(&encoded).unwrap(), (vec![0x00, 0x00, 0xAB], 0x05));

        let encoded = encode_versioned(&[0x00, 0x00, 0xAB], 0x00);
        assert!(encoded.starts_with("111"));
        assert_eq!(decode_versioned(&encoded).unwrap(), (vec![0x00, 0x00, 0xAB], 0x00));
    }

    #[test]
    fn test_versioned_empty_payload() {
        let encoded = encode_versioned(&[], 0x05);
        assert_eq!(decode_versioned(&encoded).unwrap(), (Vec::new(), 0x05));
    }

    #[test]
    fn test_to_base58_check_trait() {
        let hash = hex!("162c5ea71c0b23f5b9022ef047c4a86470a5b070");
        assert_eq!(hash.to_base58_check(Some(0x05)), "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k");

        let versioned = hex!("00f8917303bfa8ef24f292e8fa1419b20460ba064d");
        assert_eq!(versioned.to_base58_check(None), "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH");
    }
}
