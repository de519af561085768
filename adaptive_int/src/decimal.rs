//! Base-10 arithmetic over canonical decimal strings.
//!
//! This is the primitive set the decimal backend is built on. Every function
//! takes and returns canonical strings: an optional leading `-`, no leading
//! zeros, `"0"` for zero and never `"-0"`.
//!
//! Division truncates toward zero and remainders carry the dividend's sign.

use std::cmp::Ordering;

use crate::error::{Error, Result};

macro_rules! skip_leading_zero {
    ($vec: expr) => {
        {
            let v: Vec<u8> = $vec
                .into_iter()
                .skip_while(|x| *x == 0)
                .collect();
            v
        }
    };
}

/// Sign plus most-significant-first digit magnitude. An empty magnitude is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    signum: i8,
    mag: Vec<u8>,
}

const ZERO: Decimal = Decimal { signum: 0, mag: Vec::new() };

impl Decimal {
    fn new(mag: Vec<u8>, signum: i8) -> Decimal {
        if mag.is_empty() || signum == 0 {
            ZERO
        } else {
            Decimal { signum, mag }
        }
    }

    fn one() -> Decimal {
        Decimal { signum: 1, mag: vec![1] }
    }

    fn parse(val: &str) -> Decimal {
        let (signum, digits) = match val.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, val),
        };
        let mag = skip_leading_zero!(digits.bytes().map(|b| b.wrapping_sub(b'0')));
        Decimal::new(mag, signum)
    }

    fn into_string(self) -> String {
        if self.signum == 0 {
            return String::from("0");
        }
        let mut s = String::with_capacity(self.mag.len() + 1);
        if self.signum < 0 {
            s.push('-');
        }
        s.extend(self.mag.iter().map(|d| (b'0' + d) as char));
        s
    }

    fn is_odd(&self) -> bool {
        self.mag.last().map_or(false, |d| d % 2 == 1)
    }

    fn is_unit(&self) -> bool {
        self.mag == [1]
    }
}

// 大小比较
fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn compare_decimal(x: &Decimal, y: &Decimal) -> Ordering {
    match x.signum.cmp(&y.signum) {
        Ordering::Equal => {}
        ord => return ord,
    }
    if x.signum >= 0 {
        compare_mag(&x.mag, &y.mag)
    } else {
        compare_mag(&x.mag, &y.mag).reverse()
    }
}

// 加法
fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
    let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

    let mut result = vec![0u8; x.len() + 1];
    let mut y_index = y.len();
    let mut carry = 0u8;
    for x_index in (0..x.len()).rev() {
        let y_digit = if y_index > 0 {
            y_index -= 1;
            y[y_index]
        } else {
            0
        };
        let sum = x[x_index] + y_digit + carry;
        result[x_index + 1] = sum % 10;
        carry = sum / 10;
    }
    result[0] = carry;

    skip_leading_zero!(result)
}

// 减法, big >= little
fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; big.len()];
    let mut little_index = little.len();
    let mut borrow = 0i8;
    for big_index in (0..big.len()).rev() {
        let little_digit = if little_index > 0 {
            little_index -= 1;
            little[little_index] as i8
        } else {
            0
        };
        let mut difference = big[big_index] as i8 - little_digit - borrow;
        borrow = if difference < 0 {
            difference += 10;
            1
        } else {
            0
        };
        result[big_index] = difference as u8;
    }

    skip_leading_zero!(result)
}

fn add_decimal(x: &Decimal, y: &Decimal) -> Decimal {
    if y.signum == 0 {
        return x.clone();
    }
    if x.signum == 0 {
        return y.clone();
    }
    if x.signum == y.signum {
        return Decimal::new(add_mag(&x.mag, &y.mag), x.signum);
    }

    match compare_mag(&x.mag, &y.mag) {
        Ordering::Less => Decimal::new(sub_mag(&y.mag, &x.mag), y.signum),
        Ordering::Equal => ZERO,
        Ordering::Greater => Decimal::new(sub_mag(&x.mag, &y.mag), x.signum),
    }
}

fn negate(x: &Decimal) -> Decimal {
    Decimal::new(x.mag.clone(), -x.signum)
}

// 乘法, grade-school
fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
    if x.is_empty() || y.is_empty() {
        return vec![];
    }

    let mut z = vec![0u8; x.len() + y.len()];
    for x_index in (0..x.len()).rev() {
        let mut carry = 0u16;
        for y_index in (0..y.len()).rev() {
            let z_index = x_index + y_index + 1;
            let product = x[x_index] as u16 * y[y_index] as u16 + z[z_index] as u16 + carry;
            z[z_index] = (product % 10) as u8;
            carry = product / 10;
        }
        // this row's leading position has not been written by earlier rows
        z[x_index] = carry as u8;
    }

    skip_leading_zero!(z)
}

fn mul_decimal(x: &Decimal, y: &Decimal) -> Decimal {
    Decimal::new(mul_mag(&x.mag, &y.mag), x.signum * y.signum)
}

// 除法
/// Short division by a single non-zero digit.
fn divide_one_digit(u: &[u8], v: u8) -> (Vec<u8>, u8) {
    let v = v as u16;
    let mut r = 0u16;
    let mut w = vec![0u8; u.len()];
    for (j, digit) in u.iter().enumerate() {
        let sum = r * 10 + *digit as u16;
        w[j] = (sum / v) as u8;
        r = sum % v;
    }
    (skip_leading_zero!(w), r as u8)
}

/// Long division; each quotient digit is found by repeated subtraction.
fn divide_long(u: &[u8], v: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut q = vec![0u8; u.len()];
    let mut r: Vec<u8> = Vec::with_capacity(v.len() + 1);
    for (j, digit) in u.iter().enumerate() {
        if !(r.is_empty() && *digit == 0) {
            r.push(*digit);
        }
        let mut count = 0u8;
        while compare_mag(&r, v) != Ordering::Less {
            r = sub_mag(&r, v);
            count += 1;
        }
        q[j] = count;
    }
    (skip_leading_zero!(q), r)
}

fn div_rem_decimal(u: &Decimal, v: &Decimal) -> Result<(Decimal, Decimal)> {
    if v.signum == 0 {
        return Err(Error::DivisionByZero);
    }
    if u.signum == 0 {
        return Ok((ZERO, ZERO));
    }
    if compare_mag(&u.mag, &v.mag) == Ordering::Less {
        return Ok((ZERO, u.clone()));
    }

    let (q, r) = if v.mag.len() == 1 {
        let (q, r) = divide_one_digit(&u.mag, v.mag[0]);
        (q, if r == 0 { vec![] } else { vec![r] })
    } else {
        divide_long(&u.mag, &v.mag)
    };
    Ok((Decimal::new(q, u.signum * v.signum), Decimal::new(r, u.signum)))
}

fn halve(x: &Decimal) -> Decimal {
    Decimal::new(divide_one_digit(&x.mag, 2).0, x.signum)
}

/// Parses `[+-]?[0-9]+` into canonical form; `None` for anything else.
pub(crate) fn normalize(val: &str) -> Option<String> {
    let (negative, digits) = match val.as_bytes().first() {
        Some(b'-') => (true, &val[1..]),
        Some(b'+') => (false, &val[1..]),
        _ => (false, val),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let parsed = Decimal::parse(digits);
    let signed = if negative { negate(&parsed) } else { parsed };
    Some(signed.into_string())
}

pub(crate) fn compare(a: &str, b: &str) -> Ordering {
    compare_decimal(&Decimal::parse(a), &Decimal::parse(b))
}

pub(crate) fn is_negative(a: &str) -> bool {
    a.starts_with('-')
}

pub(crate) fn neg(a: &str) -> String {
    negate(&Decimal::parse(a)).into_string()
}

pub(crate) fn abs(a: &str) -> &str {
    a.strip_prefix('-').unwrap_or(a)
}

pub(crate) fn add(a: &str, b: &str) -> String {
    add_decimal(&Decimal::parse(a), &Decimal::parse(b)).into_string()
}

pub(crate) fn sub(a: &str, b: &str) -> String {
    add_decimal(&Decimal::parse(a), &negate(&Decimal::parse(b))).into_string()
}

pub(crate) fn mul(a: &str, b: &str) -> String {
    mul_decimal(&Decimal::parse(a), &Decimal::parse(b)).into_string()
}

pub(crate) fn div_rem(a: &str, b: &str) -> Result<(String, String)> {
    let (q, r) = div_rem_decimal(&Decimal::parse(a), &Decimal::parse(b))?;
    Ok((q.into_string(), r.into_string()))
}

pub(crate) fn div(a: &str, b: &str) -> Result<String> {
    div_rem(a, b).map(|(q, _)| q)
}

pub(crate) fn rem(a: &str, b: &str) -> Result<String> {
    div_rem(a, b).map(|(_, r)| r)
}

/// `base^exp` truncated to an integer.
///
/// A negative exponent yields a fraction, which truncates to zero unless
/// `|base| == 1`. Zero raised to a negative power divides by zero.
pub(crate) fn pow(base: &str, exp: &str) -> Result<String> {
    let base = Decimal::parse(base);
    let exp = Decimal::parse(exp);

    if exp.signum < 0 {
        if base.signum == 0 {
            return Err(Error::DivisionByZero);
        }
        if !base.is_unit() {
            return Ok(String::from("0"));
        }
        let signum = if base.signum < 0 && exp.is_odd() { -1 } else { 1 };
        return Ok(Decimal::new(vec![1], signum).into_string());
    }

    let mut result = Decimal::one();
    let mut square = base;
    let mut e = exp;
    while e.signum != 0 {
        if e.is_odd() {
            result = mul_decimal(&result, &square);
        }
        e = halve(&e);
        if e.signum != 0 {
            square = mul_decimal(&square, &square);
        }
    }
    Ok(result.into_string())
}

/// `base^exp rem modulus`, reducing after every multiplication.
pub(crate) fn pow_mod(base: &str, exp: &str, modulus: &str) -> Result<String> {
    let modulus = Decimal::parse(modulus);
    let exp = Decimal::parse(exp);
    if modulus.signum == 0 {
        return Err(Error::DivisionByZero);
    }
    if exp.signum < 0 {
        return Err(Error::OutOfRange(format!(
            "negative exponent {} in modular exponentiation",
            exp.into_string()
        )));
    }

    let mut result = div_rem_decimal(&Decimal::one(), &modulus)?.1;
    let mut square = div_rem_decimal(&Decimal::parse(base), &modulus)?.1;
    let mut e = exp;
    while e.signum != 0 {
        if e.is_odd() {
            result = div_rem_decimal(&mul_decimal(&result, &square), &modulus)?.1;
        }
        e = halve(&e);
        if e.signum != 0 {
            square = div_rem_decimal(&mul_decimal(&square, &square), &modulus)?.1;
        }
    }
    Ok(result.into_string())
}

/// Integer square root, truncated.
pub(crate) fn sqrt(a: &str) -> Result<String> {
    let n = Decimal::parse(a);
    if n.signum < 0 {
        return Err(Error::InvalidNumber(format!("square root of negative value {}", a)));
    }
    if n.signum == 0 {
        return Ok(String::from("0"));
    }

    // Newton's iteration from 10^ceil(len / 2), which is never below the root
    let mut x = vec![0u8; (n.mag.len() + 1) / 2 + 1];
    x[0] = 1;
    let mut x = Decimal::new(x, 1);
    loop {
        let (q, _) = div_rem_decimal(&n, &x)?;
        let y = halve(&add_decimal(&x, &q));
        if compare_decimal(&y, &x) != Ordering::Less {
            return Ok(x.into_string());
        }
        x = y;
    }
}
