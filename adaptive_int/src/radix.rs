//! Digit alphabets and radix conversion built only on decimal arithmetic.
//!
//! Radices run from 2 to 62. Up to base 36 the alphabet is lower-cased and
//! input is matched case-insensitively; above it `A` and `a` are different
//! digits.

use crate::big_num_cache::{ALPHABETS, BASE_PATTERNS};
use crate::big_num_constants::*;
use crate::decimal;
use crate::error::{Error, Result};

/// The first `radix` characters of `0-9A-Za-z`, lower-cased when `radix <= 36`.
pub fn alphabet_for(radix: u32) -> Result<&'static str> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::OutOfRange(format!(
            "radix {} is outside [{}, {}]",
            radix, MIN_RADIX, MAX_RADIX
        )));
    }
    Ok(ALPHABETS[radix as usize].as_str())
}

/// Renders a decimal string in `to_radix`, keeping a leading `-`.
pub fn decimal_to_radix(decimal: &str, to_radix: u32) -> Result<String> {
    let alphabet = alphabet_for(to_radix)?.as_bytes();
    let canonical = decimal::normalize(decimal)
        .ok_or_else(|| Error::InvalidNumber(format!("{:?} is not a decimal integer", decimal)))?;

    let mut n = decimal::abs(&canonical).to_string();
    // the loop below never runs for zero
    if n == "0" {
        return Ok(n);
    }

    let radix = to_radix.to_string();
    let mut digits: Vec<u8> = Vec::with_capacity(n.len() * 4);
    while n != "0" {
        let (quotient, remainder) = decimal::div_rem(&n, &radix)?;
        let index: usize = remainder
            .parse()
            .map_err(|_| Error::InvalidNumber(format!("remainder {} is not a digit index", remainder)))?;
        digits.push(alphabet[index]);
        n = quotient;
    }
    if decimal::is_negative(&canonical) {
        digits.push(b'-');
    }
    digits.reverse();

    let converted = String::from_utf8(digits)
        .map_err(|e| Error::InvalidNumber(e.to_string()))?;
    log::trace!("{} in radix {} is {}", canonical, to_radix, converted);
    Ok(converted)
}

/// Splits one leading `-` or `+` off `digits`; the flag is set for `-`.
pub fn split_sign(digits: &str) -> (bool, &str) {
    match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    }
}

/// Reads a string of `from_radix` digits back into a decimal string.
///
/// Each digit is weighted by `from_radix^exponent`, the exponent being its
/// distance from the least significant position. One leading sign is allowed.
pub fn radix_to_decimal(digits: &str, from_radix: u32) -> Result<String> {
    let alphabet = alphabet_for(from_radix)?;
    let (negative, body) = split_sign(digits);
    if body.is_empty() {
        return Err(Error::InvalidNumber(format!("{:?} has no digits", digits)));
    }
    let body = if from_radix <= MAX_CASE_INSENSITIVE_RADIX {
        body.to_lowercase()
    } else {
        body.to_string()
    };

    let radix = from_radix.to_string();
    let len = body.chars().count();
    let mut total = String::from("0");
    for (position, c) in body.chars().enumerate() {
        let index = alphabet.find(c).ok_or_else(|| {
            Error::UnsupportedNumericFormat(format!("digit {:?} in {:?} for radix {}", c, digits, from_radix))
        })?;
        if index == 0 {
            continue;
        }
        let place = decimal::pow(&radix, &(len - 1 - position).to_string())?;
        total = decimal::add(&total, &decimal::mul(&index.to_string(), &place));
    }

    let total = if negative { decimal::neg(&total) } else { total };
    log::trace!("{} in radix {} is {}", digits, from_radix, total);
    Ok(total)
}

/// Detects the radix of a possibly prefixed numeric string.
///
/// Tries decimal, `0x` hexadecimal, `0` octal and `0b` binary in that order.
/// Returns `0` when nothing matches.
pub fn detect_base(val: &str) -> u32 {
    BASE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(val))
        .map_or(0, |(radix, _)| *radix)
}

/// Removes the prefix `detect_base` matched for `radix`, keeping any sign.
pub fn strip_base_prefix(val: &str, radix: u32) -> String {
    let (sign, body) = match val.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", val),
    };
    let body = match radix {
        16 => body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")).unwrap_or(body),
        2 => body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")).unwrap_or(body),
        8 => body.strip_prefix('0').unwrap_or(body),
        _ => body,
    };
    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSIONS: [(u32, &str); 9] = [
        (2, "1001001100101100000001011010010"),
        (3, "10012001001112202200"),
        (8, "11145401322"),
        (16, "499602d2"),
        (32, "14pc0mi"),
        (36, "kf12oi"),
        (37, "HTR1PR"),
        (48, "4eRCaI"),
        (62, "1LY7VK"),
    ];

    #[test]
    fn test_alphabet_for() {
        assert_eq!(alphabet_for(2).unwrap(), "01");
        assert_eq!(alphabet_for(16).unwrap(), "0123456789abcdef");
        assert_eq!(alphabet_for(37).unwrap(), "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZa");
        assert_eq!(alphabet_for(62).unwrap().len(), 62);
        assert!(matches!(alphabet_for(1), Err(Error::OutOfRange(_))));
        assert!(matches!(alphabet_for(63), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_decimal_to_radix() {
        for (radix, expected) in CONVERSIONS {
            assert_eq!(decimal_to_radix("1234567890", radix).unwrap(), expected, "radix {}", radix);
        }
        assert_eq!(decimal_to_radix("-255", 16).unwrap(), "-ff");
        assert!(matches!(decimal_to_radix("12", 0), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_zero_in_every_radix() {
        for radix in MIN_RADIX..=MAX_RADIX {
            assert_eq!(decimal_to_radix("0", radix).unwrap(), "0");
        }
    }

    #[test]
    fn test_radix_to_decimal() {
        for (radix, digits) in CONVERSIONS {
            assert_eq!(radix_to_decimal(digits, radix).unwrap(), "1234567890", "radix {}", radix);
        }
        assert_eq!(radix_to_decimal("499602D2", 16).unwrap(), "1234567890");
        assert_eq!(radix_to_decimal("-ff", 16).unwrap(), "-255");
        assert_eq!(radix_to_decimal("+ff", 16).unwrap(), "255");
        assert!(matches!(radix_to_decimal("1_000", 10), Err(Error::UnsupportedNumericFormat(_))));
        assert!(matches!(radix_to_decimal("+-1", 10), Err(Error::UnsupportedNumericFormat(_))));
        assert_eq!(radix_to_decimal("-0", 2).unwrap(), "0");
        assert_eq!(radix_to_decimal("0001", 2).unwrap(), "1");
        assert!(matches!(radix_to_decimal("12", 2), Err(Error::UnsupportedNumericFormat(_))));
        assert!(matches!(radix_to_decimal("htr1pr", 37), Err(Error::UnsupportedNumericFormat(_))));
        assert!(matches!(radix_to_decimal("-", 10), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn test_round_trip() {
        let values = ["1", "-1", "61", "62", "-3844", "18446744073709551616", "-98765432109876543210"];
        for radix in MIN_RADIX..=MAX_RADIX {
            for value in values {
                let converted = decimal_to_radix(value, radix).unwrap();
                assert_eq!(radix_to_decimal(&converted, radix).unwrap(), value, "radix {}", radix);
            }
        }
    }

    #[test]
    fn test_detect_base() {
        assert_eq!(detect_base("12345"), 10);
        assert_eq!(detect_base("-12345"), 10);
        assert_eq!(detect_base("0"), 10);
        assert_eq!(detect_base("0x3039"), 16);
        assert_eq!(detect_base("0X3039"), 16);
        assert_eq!(detect_base("030071"), 8);
        assert_eq!(detect_base("0b11000000111001"), 2);
        assert_eq!(detect_base("-0b101010101"), 2);
        assert_eq!(detect_base("089"), 0);
        assert_eq!(detect_base("1.5"), 0);
        assert_eq!(detect_base("doge"), 0);
        assert_eq!(detect_base(""), 0);
    }

    #[test]
    fn test_strip_base_prefix() {
        assert_eq!(strip_base_prefix("0x3039", 16), "3039");
        assert_eq!(strip_base_prefix("-0B101", 2), "-101");
        assert_eq!(strip_base_prefix("030071", 8), "30071");
        assert_eq!(strip_base_prefix("-42", 10), "-42");
    }
}
