use lazy_static::*;
use regex::Regex;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|n| BigInt::from_canonical(n.to_string()))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|n| if n == 0 {
            BigInt::from_canonical(String::from("0"))
        } else {
            BigInt::from_canonical(format!("-{}", n))
        })
        .collect();
    /// Indexed by radix; entries below `MIN_RADIX` are empty.
    pub static ref ALPHABETS: Vec<String> = (0..=MAX_RADIX)
        .map(|radix| {
            if radix < MIN_RADIX {
                return String::new();
            }
            let alphabet: String = DIGITS[..radix as usize].iter().collect();
            if radix <= MAX_CASE_INSENSITIVE_RADIX {
                alphabet.to_lowercase()
            } else {
                alphabet
            }
        })
        .collect();
    /// Base detection patterns in priority order.
    pub static ref BASE_PATTERNS: [(u32, Regex); 4] = [
        (10, Regex::new(r"^-?(0|[1-9][0-9]*)$").expect("decimal pattern")),
        (16, Regex::new(r"^-?0[xX][0-9a-fA-F]+$").expect("hexadecimal pattern")),
        (8, Regex::new(r"^-?0[0-7]+$").expect("octal pattern")),
        (2, Regex::new(r"^-?0[bB][01]+$").expect("binary pattern")),
    ];
}
