//! Two's-complement encoding of signed decimal values.
//!
//! A negative value `v` encoded at width `w` is the unsigned value `2^w - |v|`,
//! computed here as the one's complement of `|v|` plus one. Its binary
//! rendering is the bit string.

use crate::big_int::BigInt;
use crate::decimal;
use crate::error::Result;
use crate::radix;

fn flip(bit: char) -> char {
    if bit == '1' { '0' } else { '1' }
}

/// Number of binary digits in `|value|`; zero has none.
pub fn bit_length(value: &BigInt) -> Result<usize> {
    if value.is_zero() {
        return Ok(0);
    }
    Ok(radix::decimal_to_radix(decimal::abs(value.as_decimal()), 2)?.len())
}

/// Two's complement of `value` at a width of at least `min_bit_length`.
///
/// Non-negative values are their own encoding. A negative value is encoded
/// at `max(min_bit_length, bit_length(|value|) + 1)` bits, so the leading bit
/// is always the sign. `min_bit_length <= 0` means no constraint.
pub fn twos_complement(value: &BigInt, min_bit_length: i64) -> Result<BigInt> {
    if !value.is_negative() {
        return Ok(value.clone());
    }

    let bits = radix::decimal_to_radix(decimal::abs(value.as_decimal()), 2)?;
    let required = bits.len() + 1;
    let width = usize::try_from(min_bit_length).map_or(required, |min| min.max(required));

    let ones_complement: String = std::iter::repeat('1')
        .take(width - bits.len())
        .chain(bits.chars().map(flip))
        .collect();
    let ones_complement = radix::radix_to_decimal(&ones_complement, 2)?;

    Ok(BigInt::from_canonical(decimal::add(&ones_complement, "1")))
}

/// The two's-complement bit string of `value`, most significant bit first.
pub fn encode(value: &BigInt, min_bit_length: i64) -> Result<String> {
    let encoded = twos_complement(value, min_bit_length)?;
    let bits = radix::decimal_to_radix(encoded.as_decimal(), 2)?;
    log::trace!("{} encodes as {}", value, bits);
    Ok(bits)
}

/// Reads a signed two's-complement bit string; a leading `1` is the sign.
pub fn from_twos_complement(bits: &str) -> Result<BigInt> {
    let unsigned = radix::radix_to_decimal(bits, 2)?;
    if !bits.starts_with('1') {
        return Ok(BigInt::from_canonical(unsigned));
    }
    let modulus = decimal::pow("2", &bits.len().to_string())?;
    Ok(BigInt::from_canonical(decimal::sub(&unsigned, &modulus)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_is_unchanged() {
        assert_eq!(twos_complement(&BigInt::from(20), 0).unwrap().to_string(), "20");
        assert_eq!(twos_complement(&BigInt::from(84), 16).unwrap().to_string(), "84");
        assert_eq!(twos_complement(&BigInt::from(0), 8).unwrap().to_string(), "0");
    }

    #[test]
    fn test_negative_flips_and_adds_one() {
        assert_eq!(twos_complement(&BigInt::from(-20), 0).unwrap().to_string(), "44");
        assert_eq!(twos_complement(&BigInt::from(-84), 0).unwrap().to_string(), "172");
        assert_eq!(twos_complement(&BigInt::from(-68), 0).unwrap().to_string(), "188");
    }

    #[test]
    fn test_min_bit_length() {
        let value = BigInt::from(-20);
        assert_eq!(encode(&value, 0).unwrap(), "101100");
        assert_eq!(encode(&value, -100).unwrap(), "101100");
        assert_eq!(encode(&value, 2).unwrap(), "101100");
        assert_eq!(encode(&value, 8).unwrap(), "11101100");
        assert_eq!(encode(&value, 16).unwrap(), "1111111111101100");
        assert_eq!(encode(&value, 30).unwrap(), "111111111111111111111111101100");
    }

    #[test]
    fn test_involution() {
        for n in [-1i64, -2, -16, -20, -255, -256, -341, -4096, -1234567890] {
            for width in [0, 8, 16, 64] {
                let value = BigInt::from(n);
                let bits = encode(&value, width).unwrap();
                assert_eq!(from_twos_complement(&bits).unwrap(), value, "{} at {}", n, width);
            }
        }
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(&BigInt::from(0)).unwrap(), 0);
        assert_eq!(bit_length(&BigInt::from(1)).unwrap(), 1);
        assert_eq!(bit_length(&BigInt::from(-341)).unwrap(), 9);
        assert_eq!(bit_length(&BigInt::from(256)).unwrap(), 9);
    }
}
