//! Backend selection.
//!
//! [`IntegerAdapter`] is the contract both backends implement. [`Integer`]
//! wraps whichever backend [`Backend::detect`] picks, so callers get one type
//! regardless of what was compiled in.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use crate::big_int::BigInt;
use crate::error::{Error, Result};
#[cfg(feature = "native")]
use crate::native::NativeInt;
use crate::upgrade::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `num-bigint`, available with the `native` feature.
    Native,
    /// Decimal strings with emulated bitwise operations; always available.
    Decimal,
}

impl Backend {
    /// Backends in order of preference.
    pub const PREFERENCE: [Backend; 2] = [Backend::Native, Backend::Decimal];

    pub fn is_available(self) -> bool {
        match self {
            Backend::Native => cfg!(feature = "native"),
            Backend::Decimal => true,
        }
    }

    pub fn available() -> Vec<Backend> {
        Backend::PREFERENCE.into_iter().filter(|b| b.is_available()).collect()
    }

    /// The fastest backend compiled in.
    pub fn detect() -> Result<Backend> {
        let backend = Backend::PREFERENCE
            .into_iter()
            .find(|b| b.is_available())
            .ok_or_else(|| Error::AdapterUnavailable(String::from("no integer backend is compiled in")))?;
        log::debug!("Selected {:?} integer backend", backend);
        Ok(backend)
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => f.write_str("native"),
            Backend::Decimal => f.write_str("decimal"),
        }
    }
}

/// Operations every integer backend provides.
///
/// Arguments are upgraded from any [`Operand`]; results are new values.
pub trait IntegerAdapter: Sized + Clone + Debug + Display {
    fn backend(&self) -> Backend;

    /// Converts a loose operand into this backend. `radix` applies to strings
    /// and `0` autodetects.
    fn upgrade(number: Operand, radix: u32) -> Result<Self>;

    fn factory(number: impl Into<Operand>, radix: u32) -> Result<Self> {
        Self::upgrade(number.into(), radix)
    }

    fn compare_to(&self, number: impl Into<Operand>) -> Result<Ordering>;
    fn is_negative(&self) -> bool;
    fn abs(&self) -> Self;

    fn add(&self, number: impl Into<Operand>) -> Result<Self>;
    fn sub(&self, number: impl Into<Operand>) -> Result<Self>;
    fn mul(&self, number: impl Into<Operand>) -> Result<Self>;
    fn div(&self, number: impl Into<Operand>) -> Result<Self>;
    fn modulo(&self, number: impl Into<Operand>) -> Result<Self>;
    fn pow(&self, power: impl Into<Operand>) -> Result<Self>;
    fn pow_mod(&self, power: impl Into<Operand>, modulus: impl Into<Operand>) -> Result<Self>;
    fn sqrt(&self) -> Result<Self>;

    fn twos_complement(&self, min_bit_length: i64) -> Result<Self>;
    fn bit_and(&self, number: impl Into<Operand>) -> Result<Self>;
    fn bit_or(&self, number: impl Into<Operand>) -> Result<Self>;
    fn bit_xor(&self, number: impl Into<Operand>) -> Result<Self>;
    fn bit_not(&self) -> Self;
    fn shift_left(&self, bits: impl Into<Operand>) -> Result<Self>;
    fn shift_right(&self, bits: impl Into<Operand>) -> Result<Self>;

    fn to_string_radix(&self, radix: u32) -> Result<String>;
    fn to_integer(&self, strict: bool) -> Result<i64>;
}

impl IntegerAdapter for BigInt {
    fn backend(&self) -> Backend {
        Backend::Decimal
    }

    fn upgrade(number: Operand, radix: u32) -> Result<Self> {
        BigInt::upgrade(number, radix)
    }

    fn compare_to(&self, number: impl Into<Operand>) -> Result<Ordering> {
        BigInt::compare_to(self, number)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }

    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn add(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::add(self, number)
    }

    fn sub(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::sub(self, number)
    }

    fn mul(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::mul(self, number)
    }

    fn div(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::div(self, number)
    }

    fn modulo(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::modulo(self, number)
    }

    fn pow(&self, power: impl Into<Operand>) -> Result<Self> {
        BigInt::pow(self, power)
    }

    fn pow_mod(&self, power: impl Into<Operand>, modulus: impl Into<Operand>) -> Result<Self> {
        BigInt::pow_mod(self, power, modulus)
    }

    fn sqrt(&self) -> Result<Self> {
        BigInt::sqrt(self)
    }

    fn twos_complement(&self, min_bit_length: i64) -> Result<Self> {
        BigInt::twos_complement(self, min_bit_length)
    }

    fn bit_and(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::bit_and(self, number)
    }

    fn bit_or(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::bit_or(self, number)
    }

    fn bit_xor(&self, number: impl Into<Operand>) -> Result<Self> {
        BigInt::bit_xor(self, number)
    }

    fn bit_not(&self) -> Self {
        BigInt::bit_not(self)
    }

    fn shift_left(&self, bits: impl Into<Operand>) -> Result<Self> {
        BigInt::shift_left(self, bits)
    }

    fn shift_right(&self, bits: impl Into<Operand>) -> Result<Self> {
        BigInt::shift_right(self, bits)
    }

    fn to_string_radix(&self, radix: u32) -> Result<String> {
        BigInt::to_string_radix(self, radix)
    }

    fn to_integer(&self, strict: bool) -> Result<i64> {
        BigInt::to_integer(self, strict)
    }
}

/// An integer on whichever backend built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Integer {
    Decimal(BigInt),
    #[cfg(feature = "native")]
    Native(NativeInt),
}

macro_rules! dispatch {
    ($self: expr, $val: ident => $body: expr) => {
        match $self {
            Integer::Decimal($val) => $body,
            #[cfg(feature = "native")]
            Integer::Native($val) => $body,
        }
    };
}

macro_rules! dispatch_wrap {
    ($self: expr, $val: ident => $body: expr) => {
        match $self {
            Integer::Decimal($val) => $body.map(Integer::Decimal),
            #[cfg(feature = "native")]
            Integer::Native($val) => $body.map(Integer::Native),
        }
    };
}

impl Integer {
    /// Builds `number` on an explicit backend.
    pub fn with_backend(backend: Backend, number: impl Into<Operand>, radix: u32) -> Result<Integer> {
        if !backend.is_available() {
            return Err(Error::AdapterUnavailable(format!(
                "the {} backend is not compiled in",
                backend
            )));
        }
        let number = number.into();
        match backend {
            Backend::Decimal => BigInt::upgrade(number, radix).map(Integer::Decimal),
            #[cfg(feature = "native")]
            Backend::Native => NativeInt::upgrade(number, radix).map(Integer::Native),
            #[cfg(not(feature = "native"))]
            Backend::Native => unreachable!("availability checked above"),
        }
    }
}

impl From<Integer> for Operand {
    fn from(val: Integer) -> Self {
        match val {
            Integer::Decimal(big) => Operand::Big(big),
            #[cfg(feature = "native")]
            Integer::Native(native) => Operand::from(native),
        }
    }
}

impl From<&Integer> for Operand {
    fn from(val: &Integer) -> Self {
        Operand::from(val.clone())
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, val => Display::fmt(val, f))
    }
}

impl IntegerAdapter for Integer {
    fn backend(&self) -> Backend {
        dispatch!(self, val => val.backend())
    }

    /// Lands on the detected backend whatever `number` was built on.
    fn upgrade(number: Operand, radix: u32) -> Result<Self> {
        Integer::with_backend(Backend::detect()?, number, radix)
    }

    fn compare_to(&self, number: impl Into<Operand>) -> Result<Ordering> {
        let number = number.into();
        dispatch!(self, val => IntegerAdapter::compare_to(val, number))
    }

    fn is_negative(&self) -> bool {
        dispatch!(self, val => IntegerAdapter::is_negative(val))
    }

    fn abs(&self) -> Self {
        match self {
            Integer::Decimal(val) => Integer::Decimal(IntegerAdapter::abs(val)),
            #[cfg(feature = "native")]
            Integer::Native(val) => Integer::Native(IntegerAdapter::abs(val)),
        }
    }

    fn add(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::add(val, number))
    }

    fn sub(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::sub(val, number))
    }

    fn mul(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::mul(val, number))
    }

    fn div(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::div(val, number))
    }

    fn modulo(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::modulo(val, number))
    }

    fn pow(&self, power: impl Into<Operand>) -> Result<Self> {
        let power = power.into();
        dispatch_wrap!(self, val => IntegerAdapter::pow(val, power))
    }

    fn pow_mod(&self, power: impl Into<Operand>, modulus: impl Into<Operand>) -> Result<Self> {
        let power = power.into();
        let modulus = modulus.into();
        dispatch_wrap!(self, val => IntegerAdapter::pow_mod(val, power, modulus))
    }

    fn sqrt(&self) -> Result<Self> {
        dispatch_wrap!(self, val => IntegerAdapter::sqrt(val))
    }

    fn twos_complement(&self, min_bit_length: i64) -> Result<Self> {
        dispatch_wrap!(self, val => IntegerAdapter::twos_complement(val, min_bit_length))
    }

    fn bit_and(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::bit_and(val, number))
    }

    fn bit_or(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::bit_or(val, number))
    }

    fn bit_xor(&self, number: impl Into<Operand>) -> Result<Self> {
        let number = number.into();
        dispatch_wrap!(self, val => IntegerAdapter::bit_xor(val, number))
    }

    fn bit_not(&self) -> Self {
        match self {
            Integer::Decimal(val) => Integer::Decimal(IntegerAdapter::bit_not(val)),
            #[cfg(feature = "native")]
            Integer::Native(val) => Integer::Native(IntegerAdapter::bit_not(val)),
        }
    }

    fn shift_left(&self, bits: impl Into<Operand>) -> Result<Self> {
        let bits = bits.into();
        dispatch_wrap!(self, val => IntegerAdapter::shift_left(val, bits))
    }

    fn shift_right(&self, bits: impl Into<Operand>) -> Result<Self> {
        let bits = bits.into();
        dispatch_wrap!(self, val => IntegerAdapter::shift_right(val, bits))
    }

    fn to_string_radix(&self, radix: u32) -> Result<String> {
        dispatch!(self, val => IntegerAdapter::to_string_radix(val, radix))
    }

    fn to_integer(&self, strict: bool) -> Result<i64> {
        dispatch!(self, val => IntegerAdapter::to_integer(val, strict))
    }
}

/// Builds an [`Integer`] on the detected backend, autodetecting string radices.
pub fn factory(number: impl Into<Operand>) -> Result<Integer> {
    Integer::with_backend(Backend::detect()?, number, 0)
}

/// Like [`factory`], but for callers that carry a decimal scale.
///
/// Only scale 0 is supported; fixed-scale decimals are not implemented.
pub fn factory_with_scale(number: impl Into<Operand>, scale: u32) -> Result<Integer> {
    if scale != 0 {
        return Err(Error::InvalidPrecision(scale));
    }
    factory(number)
}
