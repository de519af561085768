//! Bitwise operations emulated over decimal values.
//!
//! Binary operations encode both operands in two's complement, sign-extend
//! them to a common width and apply the boolean table bit by bit. The sign of
//! the result follows from the operand signs (the bits above the common
//! width), and a negative result is decoded as `!f` where `f` is the value of
//! the flipped raw bits.

use crate::big_int::BigInt;
use crate::decimal;
use crate::error::{Error, Result};
use crate::radix;
use crate::twos_complement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BitOp::And => a && b,
            BitOp::Or => a || b,
            BitOp::Xor => a != b,
        }
    }
}

/// Left-pads `bits` to `width` with the sign bit.
fn sign_extend(bits: &str, width: usize, negative: bool) -> String {
    let fill = if negative { '1' } else { '0' };
    let mut extended = String::with_capacity(width);
    extended.extend(std::iter::repeat(fill).take(width.saturating_sub(bits.len())));
    extended.push_str(bits);
    extended
}

fn bitwise(a: &BigInt, b: &BigInt, op: BitOp) -> Result<BigInt> {
    let a_negative = a.is_negative();
    let b_negative = b.is_negative();
    let a_bits = twos_complement::encode(a, 0)?;
    let b_bits = twos_complement::encode(b, 0)?;

    let width = a_bits.len().max(b_bits.len());
    let a_bits = sign_extend(&a_bits, width, a_negative);
    let b_bits = sign_extend(&b_bits, width, b_negative);

    let raw: String = a_bits
        .chars()
        .zip(b_bits.chars())
        .map(|(x, y)| if op.apply(x == '1', y == '1') { '1' } else { '0' })
        .collect();
    log::trace!("{:?} of {} and {} is {} at width {}", op, a_bits, b_bits, raw, width);

    if !op.apply(a_negative, b_negative) {
        return Ok(BigInt::from_canonical(radix::radix_to_decimal(&raw, 2)?));
    }

    let flipped: String = raw.chars().map(|bit| if bit == '1' { '0' } else { '1' }).collect();
    let magnitude = BigInt::from_canonical(radix::radix_to_decimal(&flipped, 2)?);
    Ok(bit_not(&magnitude))
}

pub fn bit_and(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    bitwise(a, b, BitOp::And)
}

pub fn bit_or(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    bitwise(a, b, BitOp::Or)
}

pub fn bit_xor(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    bitwise(a, b, BitOp::Xor)
}

/// `!x == -x - 1`
pub fn bit_not(value: &BigInt) -> BigInt {
    BigInt::from_canonical(decimal::neg(&decimal::add(value.as_decimal(), "1")))
}

fn power_of_two(bits: &BigInt) -> Result<String> {
    if bits.is_negative() {
        return Err(Error::OutOfRange(format!("negative shift count {}", bits)));
    }
    decimal::pow("2", bits.as_decimal())
}

/// `value * 2^bits`
pub fn shift_left(value: &BigInt, bits: &BigInt) -> Result<BigInt> {
    let factor = power_of_two(bits)?;
    Ok(BigInt::from_canonical(decimal::mul(value.as_decimal(), &factor)))
}

/// `value / 2^bits`, truncated toward zero.
pub fn shift_right(value: &BigInt, bits: &BigInt) -> Result<BigInt> {
    let divisor = power_of_two(bits)?;
    Ok(BigInt::from_canonical(decimal::div(value.as_decimal(), &divisor)?))
}
