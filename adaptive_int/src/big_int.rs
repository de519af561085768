//! # BigInt
//! Immutable arbitrary-precision integers backed by a canonical decimal string.
//! Bitwise operations behave as if BigInt were represented in two's-complement
//! notation; they are emulated on top of decimal arithmetic.
//! # Example
//! ```
//! use adaptive_int::BigInt;
//!
//! let a = BigInt::factory("10000000000000", 0).unwrap();
//! let b = BigInt::factory("0x3039", 0).unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.div(&b).unwrap());
//! println!("a % b = {}", a.modulo(&b).unwrap());
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! println!("a in base 62 = {}", a.to_string_radix(62).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, Sub, Mul, Div, Rem, Neg,
    Not, BitAnd, BitOr, BitXor,
    Shl, Shr,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::bitwise;
use crate::decimal;
use crate::error::{Error, Result};
use crate::radix;
use crate::twos_complement;
use crate::upgrade::Operand;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Canonical: optional `-`, no leading zeros, `"0"` for zero.
    value: String,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_canonical(value: String) -> Self {
        debug_assert!(decimal::normalize(&value).as_deref() == Some(value.as_str()));
        BigInt { value }
    }

    pub(crate) fn as_decimal(&self) -> &str {
        &self.value
    }

    fn value_of(val: i128) -> BigInt {
        let magnitude = val.unsigned_abs();
        if magnitude <= MAX_CONSTANT as u128 {
            if val < 0 {
                NEG_CACHE[magnitude as usize].clone()
            } else {
                POS_CACHE[magnitude as usize].clone()
            }
        } else {
            BigInt::from_canonical(val.to_string())
        }
    }

    /// Builds a value from anything numeric.
    ///
    /// `radix` applies to strings only; `0` autodetects decimal, `0x`, `0`
    /// and `0b` prefixed forms. Floats are truncated toward zero.
    pub fn factory(number: impl Into<Operand>, radix: u32) -> Result<BigInt> {
        BigInt::upgrade(number.into(), radix)
    }

    pub(crate) fn upgrade(number: Operand, radix: u32) -> Result<BigInt> {
        if radix != 0 {
            radix::alphabet_for(radix)?;
        }
        match number {
            Operand::Integer(val) => Ok(BigInt::value_of(val)),
            Operand::Float(val) => BigInt::try_from(val),
            Operand::Text(val) => BigInt::from_str_radix(&val, radix),
            Operand::Big(val) => Ok(val),
            #[cfg(feature = "native")]
            Operand::Native(val) => Ok(BigInt::from_canonical(val.to_string())),
        }
    }

    /// Parses `val` as digits of `radix`, or autodetects the radix when it is `0`.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigInt> {
        if radix == 0 {
            let detected = radix::detect_base(val);
            if detected == 0 {
                return Err(Error::UnsupportedNumericFormat(val.to_string()));
            }
            let digits = radix::strip_base_prefix(val, detected);
            return BigInt::from_str_radix(&digits, detected);
        }

        if radix == DECIMAL_RADIX {
            return decimal::normalize(val)
                .map(BigInt::from_canonical)
                .ok_or_else(|| Error::InvalidNumber(format!("{:?} is not a base 10 integer", val)));
        }

        match radix::radix_to_decimal(val, radix) {
            Ok(decimal) => Ok(BigInt::from_canonical(decimal)),
            Err(Error::UnsupportedNumericFormat(reason)) => Err(Error::InvalidNumber(reason)),
            Err(e) => Err(e),
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self> {
        BigInt::from_str_radix(val, 0)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::from_str_radix(val, 0)
    }
}

impl TryFrom<f64> for BigInt {
    type Error = Error;

    fn try_from(val: f64) -> Result<Self> {
        if !val.is_finite() {
            return Err(Error::InvalidType(format!("{} has no integer part", val)));
        }
        let truncated = format!("{:.0}", val.trunc());
        decimal::normalize(&truncated)
            .map(BigInt::from_canonical)
            .ok_or_else(|| Error::InvalidNumber(truncated))
    }
}

macro_rules! impl_int_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val as i128)
        }
    }
    )*
    };
}
impl_int_to_big_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for BigInt {
    fn from(val: u128) -> Self {
        BigInt::from_canonical(val.to_string())
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl BigInt {
    /// Renders the value in `radix`; bases above 36 are case-sensitive.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        if radix == DECIMAL_RADIX {
            return Ok(self.value.clone());
        }
        radix::decimal_to_radix(&self.value, radix)
    }

    /// Converts to `i64`.
    ///
    /// When `strict`, values outside `i64` fail; otherwise they wrap modulo
    /// 2^64 like an `as` cast.
    pub fn to_integer(&self, strict: bool) -> Result<i64> {
        if let Ok(val) = self.value.parse::<i64>() {
            return Ok(val);
        }
        if strict {
            return Err(Error::OutOfRange(format!("{} does not fit in i64", self.value)));
        }

        let modulus = decimal::pow("2", "64")?;
        let mut wrapped = decimal::rem(&self.value, &modulus)?;
        if decimal::is_negative(&wrapped) {
            wrapped = decimal::add(&wrapped, &modulus);
        }
        wrapped
            .parse::<u64>()
            .map(|bits| bits as i64)
            .map_err(|e| Error::OutOfRange(e.to_string()))
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        decimal::compare(&self.value, &other.value)
    }
}

impl BigInt {
    pub fn compare_to(&self, number: impl Into<Operand>) -> Result<Ordering> {
        let other = BigInt::upgrade(number.into(), 0)?;
        Ok(self.cmp(&other))
    }

    pub fn is_negative(&self) -> bool {
        decimal::is_negative(&self.value)
    }

    pub fn is_zero(&self) -> bool {
        self.value == "0"
    }

    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_canonical(decimal::abs(&self.value).to_string())
    }
}

// 实现算术运算
impl BigInt {
    pub fn add(&self, number: impl Into<Operand>) -> Result<BigInt> {
        let other = BigInt::upgrade(number.into(), 0)?;
        Ok(self + &other)
    }

    pub fn sub(&self, number: impl Into<Operand>) -> Result<BigInt> {
        let other = BigInt::upgrade(number.into(), 0)?;
        Ok(self - &other)
    }

    pub fn mul(&self, number: impl Into<Operand>) -> Result<BigInt> {
        let other = BigInt::upgrade(number.into(), 0)?;
        Ok(self * &other)
    }

    /// Quotient truncated toward zero.
    pub fn div(&self, number: impl Into<Operand>) -> Result<BigInt> {
        let other = BigInt::upgrade(number.into(), 0)?;
        decimal::div(&self.value, &other.value).map(BigInt::from_canonical)
    }

    /// Remainder of the truncated division; it takes the dividend's sign.
    pub fn modulo(&self, number: impl Into<Operand>) -> Result<BigInt> {
        let other = BigInt::upgrade(number.into(), 0)?;
        decimal::rem(&self.value, &other.value).map(BigInt::from_canonical)
    }

    /// Raises to `power`; negative powers truncate toward zero.
    pub fn pow(&self, power: impl Into<Operand>) -> Result<BigInt> {
        let power = BigInt::upgrade(power.into(), 0)?;
        decimal::pow(&self.value, &power.value).map(BigInt::from_canonical)
    }

    pub fn pow_mod(&self, power: impl Into<Operand>, modulus: impl Into<Operand>) -> Result<BigInt> {
        let power = BigInt::upgrade(power.into(), 0)?;
        let modulus = BigInt::upgrade(modulus.into(), 0)?;
        decimal::pow_mod(&self.value, &power.value, &modulus.value).map(BigInt::from_canonical)
    }

    /// Integer square root, truncated.
    pub fn sqrt(&self) -> Result<BigInt> {
        decimal::sqrt(&self.value).map(BigInt::from_canonical)
    }
}

// 实现位运算
impl BigInt {
    pub fn twos_complement(&self, min_bit_length: i64) -> Result<BigInt> {
        twos_complement::twos_complement(self, min_bit_length)
    }

    pub fn bit_and(&self, number: impl Into<Operand>) -> Result<BigInt> {
        bitwise::bit_and(self, &BigInt::upgrade(number.into(), 0)?)
    }

    pub fn bit_or(&self, number: impl Into<Operand>) -> Result<BigInt> {
        bitwise::bit_or(self, &BigInt::upgrade(number.into(), 0)?)
    }

    pub fn bit_xor(&self, number: impl Into<Operand>) -> Result<BigInt> {
        bitwise::bit_xor(self, &BigInt::upgrade(number.into(), 0)?)
    }

    pub fn bit_not(&self) -> BigInt {
        bitwise::bit_not(self)
    }

    pub fn shift_left(&self, bits: impl Into<Operand>) -> Result<BigInt> {
        bitwise::shift_left(self, &BigInt::upgrade(bits.into(), 0)?)
    }

    /// Divides by `2^bits`, truncating toward zero.
    pub fn shift_right(&self, bits: impl Into<Operand>) -> Result<BigInt> {
        bitwise::shift_right(self, &BigInt::upgrade(bits.into(), 0)?)
    }
}

// 运算符
impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        BigInt::from_canonical(decimal::add(&self.value, &rhs.value))
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        BigInt::from_canonical(decimal::sub(&self.value, &rhs.value))
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        BigInt::from_canonical(decimal::mul(&self.value, &rhs.value))
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        match decimal::div(&self.value, &rhs.value) {
            Ok(q) => BigInt::from_canonical(q),
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        match decimal::rem(&self.value, &rhs.value) {
            Ok(r) => BigInt::from_canonical(r),
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::from_canonical(decimal::neg(&self.value))
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        bitwise::bit_not(self)
    }
}

macro_rules! impl_bit_op {
    ($($t: ident, $method: ident, $engine: path);*) => {
    $(
    impl $t for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: Self) -> Self::Output {
            $engine(self, rhs).expect("binary encodings are always valid radix 2 digits")
        }
    }
    )*
    };
}
impl_bit_op!(
    BitAnd, bitand, bitwise::bit_and;
    BitOr, bitor, bitwise::bit_or;
    BitXor, bitxor, bitwise::bit_xor
);

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        bitwise::shift_left(self, &BigInt::from(n)).expect("shift count is non-negative")
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        bitwise::shift_right(self, &BigInt::from(n)).expect("shift count is non-negative")
    }
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(12i8).to_string(), "12");
    assert_eq!(BigInt::from(-100i16).to_string(), "-100");
    assert_eq!(BigInt::from(0u32).to_string(), "0");
    assert_eq!(BigInt::from(-16isize).to_string(), "-16");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
}

#[test]
fn test_factory() {
    assert_eq!(BigInt::factory(i64::MAX, 10).unwrap().to_string(), "9223372036854775807");
    assert_eq!(BigInt::factory("0x3039", 0).unwrap().to_string(), "12345");
    assert_eq!(BigInt::factory("030071", 0).unwrap().to_string(), "12345");
    assert_eq!(BigInt::factory("0b11000000111001", 0).unwrap().to_string(), "12345");
    assert_eq!(BigInt::factory("-12345", 0).unwrap().to_string(), "-12345");
    assert_eq!(BigInt::factory(10.5, 10).unwrap().to_string(), "10");
    assert_eq!(BigInt::factory(-10.9, 0).unwrap().to_string(), "-10");
    assert_eq!(BigInt::factory(-0.5, 0).unwrap().to_string(), "0");
    assert!(matches!(BigInt::factory(f64::NAN, 0), Err(Error::InvalidType(_))));
    assert!(matches!(BigInt::factory("doge", 0), Err(Error::UnsupportedNumericFormat(_))));
    assert!(matches!(BigInt::factory("doge", 10), Err(Error::InvalidNumber(_))));
    assert!(matches!(BigInt::factory("zz", 16), Err(Error::InvalidNumber(_))));
    assert!(matches!(BigInt::factory("12", 63), Err(Error::OutOfRange(_))));
    assert!(matches!(BigInt::factory(12, 1), Err(Error::OutOfRange(_))));
}

#[test]
fn test_factory_with_radix() {
    let cases = [
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
    for (radix, digits) in cases {
        let big = BigInt::factory(digits, radix).unwrap();
        assert_eq!(big.to_string(), "1234567890");
        assert_eq!(big.to_string_radix(radix).unwrap(), digits);
    }
}

#[test]
fn test_compare() {
    let a = BigInt::from(256);
    assert_eq!(a.compare_to(256).unwrap(), Ordering::Equal);
    assert_eq!(a.compare_to(300).unwrap(), Ordering::Less);
    assert_eq!(a.compare_to("100").unwrap(), Ordering::Greater);
    assert!(BigInt::from(-5) < BigInt::from(3));
    assert!(BigInt::from(-50) < BigInt::from(-6));
    assert!(!BigInt::from(0).is_negative());
    assert!(BigInt::from(-1).is_negative());
    assert_eq!(BigInt::from(-123213).abs().to_string(), "123213");
}

#[test]
fn test_arithmetic() {
    let a = BigInt::from(100);
    assert_eq!(a.add(2).unwrap().to_string(), "102");
    assert_eq!(a.add(-150).unwrap().to_string(), "-50");
    assert_eq!(a.sub(-2).unwrap().to_string(), "102");
    assert_eq!(BigInt::from(2).mul(-10).unwrap().to_string(), "-20");
    assert_eq!(BigInt::from(20).div(-2).unwrap().to_string(), "-10");
    assert_eq!(BigInt::from(256).modulo(10).unwrap().to_string(), "6");
    assert_eq!(BigInt::from(256).modulo(-2).unwrap().to_string(), "0");
    assert_eq!(BigInt::from(2).pow(8).unwrap().to_string(), "256");
    assert_eq!(BigInt::from(2).pow(-2).unwrap().to_string(), "0");
    assert_eq!(BigInt::from(2).pow_mod(8, 10).unwrap().to_string(), "6");
    assert_eq!(BigInt::from(256).sqrt().unwrap().to_string(), "16");
    assert_eq!(BigInt::from(5).div(0), Err(Error::DivisionByZero));
    assert!(BigInt::from(5).add(1.2).is_ok());
    assert!(BigInt::from(5).add("1.2").is_err());
}

#[test]
fn test_operators() {
    let a = BigInt::from(341);
    let b = BigInt::from(-409);
    assert_eq!((&a + &b).to_string(), "-68");
    assert_eq!((&a - &b).to_string(), "750");
    assert_eq!((&a * &b).to_string(), "-139469");
    assert_eq!((&b / &a).to_string(), "-1");
    assert_eq!((&b % &a).to_string(), "-68");
    assert_eq!((-&a).to_string(), "-341");
    assert_eq!((!&a).to_string(), "-342");
    assert_eq!((&a & &b).to_string(), "69");
    assert_eq!((&a | &b).to_string(), "-137");
    assert_eq!((&a ^ &b).to_string(), "-206");
    assert_eq!((&a << 4).to_string(), "5456");
    assert_eq!((&a >> 4).to_string(), "21");
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_div_operator_by_zero() {
    let _ = &BigInt::from(1) / &BigInt::from(0);
}

#[test]
fn test_to_string_radix() {
    let a = BigInt::from(-255);
    assert_eq!(a.to_string_radix(10).unwrap(), "-255");
    assert_eq!(a.to_string_radix(16).unwrap(), "-ff");
    assert_eq!(BigInt::from(-20).twos_complement(8).unwrap().to_string_radix(2).unwrap(), "11101100");
    assert!(matches!(a.to_string_radix(1), Err(Error::OutOfRange(_))));
    assert!(matches!(a.to_string_radix(63), Err(Error::OutOfRange(_))));
}

#[test]
fn test_to_integer() {
    assert_eq!(BigInt::from(i64::MAX).to_integer(true).unwrap(), i64::MAX);
    assert_eq!(BigInt::from(i64::MIN).to_integer(true).unwrap(), i64::MIN);
    let too_big = BigInt::from(i64::MAX as i128 + 1);
    assert!(matches!(too_big.to_integer(true), Err(Error::OutOfRange(_))));
    assert_eq!(too_big.to_integer(false).unwrap(), i64::MIN);
    assert_eq!(BigInt::from(u64::MAX).to_integer(false).unwrap(), -1);
    assert_eq!(BigInt::from(-(1i128 << 64) - 5).to_integer(false).unwrap(), -5);
}
