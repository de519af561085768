//! Adaptive Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision integers over decimal strings. Bitwise operations behave as if BigInt were represented in two's-complement notation.
//! - [`Integer`]: An integer on whichever backend is compiled in, `num-bigint` with the `native` feature and [`BigInt`] otherwise.
//! - [`radix`] and [`twos_complement`]: the conversions the decimal backend is built from.

mod adapter;
mod big_int;
mod big_num_cache;
mod big_num_constants;
mod bitwise;
mod decimal;
mod error;
#[cfg(feature = "native")]
mod native;
pub mod radix;
pub mod twos_complement;
mod upgrade;

pub use adapter::{factory, factory_with_scale, Backend, Integer, IntegerAdapter};
pub use big_int::BigInt;
pub use error::{Error, Result};
#[cfg(feature = "native")]
pub use native::NativeInt;
pub use upgrade::Operand;
