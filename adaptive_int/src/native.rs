//! Native backend over `num-bigint`.
//!
//! Operations forward to `num-bigint`, normalized where its conventions
//! differ from the decimal backend: shifting right truncates toward zero,
//! modular exponentiation keeps the sign of `base^power`, and radices above
//! 36 go through the shared alphabet.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use num_bigint::BigInt as Native;
use num_integer::Integer as _;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::adapter::{Backend, IntegerAdapter};
use crate::big_num_constants::*;
use crate::error::{Error, Result};
use crate::radix;
use crate::upgrade::Operand;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeInt {
    value: Native,
}

impl NativeInt {
    pub fn into_inner(self) -> Native {
        self.value
    }

    pub fn as_native(&self) -> &Native {
        &self.value
    }

    fn parse_radix(val: &str, radix: u32) -> Result<Native> {
        let (radix, digits) = if radix == 0 {
            let detected = radix::detect_base(val);
            if detected == 0 {
                return Err(Error::UnsupportedNumericFormat(val.to_string()));
            }
            (detected, radix::strip_base_prefix(val, detected))
        } else {
            radix::alphabet_for(radix)?;
            (radix, val.to_string())
        };

        let invalid = || Error::InvalidNumber(format!("{:?} is not a base {} integer", val, radix));
        if radix > MAX_CASE_INSENSITIVE_RADIX {
            let decimal = radix::radix_to_decimal(&digits, radix).map_err(|_| invalid())?;
            return decimal.parse::<Native>().map_err(|_| invalid());
        }

        // parse_bytes also takes `_` separators and a second sign
        let (negative, body) = radix::split_sign(&digits);
        let alphabet = radix::alphabet_for(radix)?;
        if body.is_empty() || !body.chars().all(|c| alphabet.contains(c.to_ascii_lowercase())) {
            return Err(invalid());
        }
        let magnitude = Native::parse_bytes(body.as_bytes(), radix).ok_or_else(invalid)?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn operand(number: impl Into<Operand>) -> Result<Native> {
        NativeInt::upgrade(number.into(), 0).map(NativeInt::into_inner)
    }

    fn non_zero(number: impl Into<Operand>) -> Result<Native> {
        let value = NativeInt::operand(number)?;
        if value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(value)
    }

    fn shift_count(bits: impl Into<Operand>) -> Result<usize> {
        let bits = NativeInt::operand(bits)?;
        bits.to_usize()
            .ok_or_else(|| Error::OutOfRange(format!("shift count {} is not a non-negative usize", bits)))
    }
}

impl From<Native> for NativeInt {
    fn from(value: Native) -> Self {
        NativeInt { value }
    }
}

impl From<NativeInt> for Operand {
    fn from(val: NativeInt) -> Self {
        Operand::Native(val.value)
    }
}

impl From<&NativeInt> for Operand {
    fn from(val: &NativeInt) -> Self {
        Operand::Native(val.value.clone())
    }
}

impl Display for NativeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl IntegerAdapter for NativeInt {
    fn backend(&self) -> Backend {
        Backend::Native
    }

    fn upgrade(number: Operand, radix: u32) -> Result<Self> {
        if radix != 0 {
            radix::alphabet_for(radix)?;
        }
        let value = match number {
            Operand::Integer(val) => Native::from(val),
            Operand::Float(val) => {
                return Err(Error::InvalidType(format!(
                    "the native backend does not support float values, got {}",
                    val
                )))
            }
            Operand::Text(val) => NativeInt::parse_radix(&val, radix)?,
            Operand::Big(val) => NativeInt::parse_radix(&val.to_string(), DECIMAL_RADIX)?,
            Operand::Native(val) => val,
        };
        Ok(NativeInt { value })
    }

    fn compare_to(&self, number: impl Into<Operand>) -> Result<Ordering> {
        Ok(self.value.cmp(&NativeInt::operand(number)?))
    }

    fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    fn abs(&self) -> Self {
        NativeInt::from(self.value.abs())
    }

    fn add(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value + NativeInt::operand(number)?))
    }

    fn sub(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value - NativeInt::operand(number)?))
    }

    fn mul(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value * NativeInt::operand(number)?))
    }

    fn div(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value / NativeInt::non_zero(number)?))
    }

    fn modulo(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value % NativeInt::non_zero(number)?))
    }

    fn pow(&self, power: impl Into<Operand>) -> Result<Self> {
        let power = NativeInt::operand(power)?;
        if power.is_negative() {
            if self.value.is_zero() {
                return Err(Error::DivisionByZero);
            }
            if !self.value.abs().is_one() {
                return Ok(NativeInt::from(Native::zero()));
            }
            let negative = self.value.is_negative() && power.is_odd();
            let unit = if negative { -Native::one() } else { Native::one() };
            return Ok(NativeInt::from(unit));
        }
        let exponent = power
            .to_u32()
            .ok_or_else(|| Error::OutOfRange(format!("exponent {} does not fit in u32", power)))?;
        Ok(NativeInt::from(self.value.pow(exponent)))
    }

    fn pow_mod(&self, power: impl Into<Operand>, modulus: impl Into<Operand>) -> Result<Self> {
        let power = NativeInt::operand(power)?;
        let modulus = NativeInt::non_zero(modulus)?.abs();
        if power.is_negative() {
            return Err(Error::OutOfRange(format!(
                "negative exponent {} in modular exponentiation",
                power
            )));
        }
        // modpow lands in [0, modulus); move it to the sign of base^power
        let residue = self.value.modpow(&power, &modulus);
        let negative = self.value.is_negative() && power.is_odd();
        if negative && !residue.is_zero() {
            return Ok(NativeInt::from(residue - modulus));
        }
        Ok(NativeInt::from(residue))
    }

    fn sqrt(&self) -> Result<Self> {
        if self.value.is_negative() {
            return Err(Error::InvalidNumber(format!("square root of negative value {}", self.value)));
        }
        Ok(NativeInt::from(self.value.sqrt()))
    }

    fn twos_complement(&self, min_bit_length: i64) -> Result<Self> {
        if !self.value.is_negative() {
            return Ok(self.clone());
        }
        let required = self.value.bits() + 1;
        let width = u64::try_from(min_bit_length).map_or(required, |min| min.max(required));
        let width = usize::try_from(width)
            .map_err(|_| Error::OutOfRange(format!("bit width {} is too large", width)))?;
        Ok(NativeInt::from((Native::one() << width) + &self.value))
    }

    fn bit_and(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value & NativeInt::operand(number)?))
    }

    fn bit_or(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value | NativeInt::operand(number)?))
    }

    fn bit_xor(&self, number: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value ^ NativeInt::operand(number)?))
    }

    fn bit_not(&self) -> Self {
        NativeInt::from(!&self.value)
    }

    fn shift_left(&self, bits: impl Into<Operand>) -> Result<Self> {
        Ok(NativeInt::from(&self.value << NativeInt::shift_count(bits)?))
    }

    fn shift_right(&self, bits: impl Into<Operand>) -> Result<Self> {
        let divisor = Native::one() << NativeInt::shift_count(bits)?;
        Ok(NativeInt::from(&self.value / divisor))
    }

    fn to_string_radix(&self, radix: u32) -> Result<String> {
        radix::alphabet_for(radix)?;
        if radix > MAX_CASE_INSENSITIVE_RADIX {
            return radix::decimal_to_radix(&self.value.to_string(), radix);
        }
        Ok(self.value.to_str_radix(radix))
    }

    fn to_integer(&self, strict: bool) -> Result<i64> {
        if let Some(val) = self.value.to_i64() {
            return Ok(val);
        }
        if strict {
            return Err(Error::OutOfRange(format!("{} does not fit in i64", self.value)));
        }
        let wrapped = self.value.mod_floor(&(Native::one() << 64usize));
        wrapped
            .to_u64()
            .map(|bits| bits as i64)
            .ok_or_else(|| Error::OutOfRange(format!("{} does not wrap into u64", wrapped)))
    }
}
