//! Loose numeric arguments.
//!
//! Every method that takes a number accepts `impl Into<Operand>`, so callers
//! can pass integers, floats, numeric strings or existing values. Each backend
//! then upgrades the operand into its own representation, rejecting the
//! shapes it cannot hold with a typed error.

use crate::big_int::BigInt;

/// A number in whatever shape the caller had it.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i128),
    Float(f64),
    /// A numeric string, parsed against the radix given to the upgrade
    /// (`0` autodetects).
    Text(String),
    Big(BigInt),
    #[cfg(feature = "native")]
    Native(num_bigint::BigInt),
}

macro_rules! impl_int_to_operand {
    ($($i: ty),*) => {
    $(
    impl From<$i> for Operand {
        fn from(val: $i) -> Self {
            Operand::Integer(val as i128)
        }
    }
    )*
    };
}
impl_int_to_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Operand {
    fn from(val: u128) -> Self {
        Operand::Big(BigInt::from(val))
    }
}

impl From<f64> for Operand {
    fn from(val: f64) -> Self {
        Operand::Float(val)
    }
}

impl From<f32> for Operand {
    fn from(val: f32) -> Self {
        Operand::Float(val as f64)
    }
}

impl From<&str> for Operand {
    fn from(val: &str) -> Self {
        Operand::Text(val.to_string())
    }
}

impl From<String> for Operand {
    fn from(val: String) -> Self {
        Operand::Text(val)
    }
}

impl From<&String> for Operand {
    fn from(val: &String) -> Self {
        Operand::Text(val.clone())
    }
}

impl From<BigInt> for Operand {
    fn from(val: BigInt) -> Self {
        Operand::Big(val)
    }
}

impl From<&BigInt> for Operand {
    fn from(val: &BigInt) -> Self {
        Operand::Big(val.clone())
    }
}

#[cfg(feature = "native")]
impl From<num_bigint::BigInt> for Operand {
    fn from(val: num_bigint::BigInt) -> Self {
        Operand::Native(val)
    }
}

#[cfg(feature = "native")]
impl From<&num_bigint::BigInt> for Operand {
    fn from(val: &num_bigint::BigInt) -> Self {
        Operand::Native(val.clone())
    }
}
