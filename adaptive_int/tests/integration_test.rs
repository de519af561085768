//! Integration tests for adaptive_int
//!
//! The same behaviour tables run against every backend compiled in, and
//! against the backend-agnostic `Integer`.

use std::cmp::Ordering;

use adaptive_int::*;

const RHS: [&str; 12] = [
    "0b111000111",
    "0b000111000",
    "0b100111001",
    "-0b110011001",
    "0b1001",
    "-0b1001",
    "0b0110",
    "-0b0110",
    "0b111111000000111111",
    "-0b111111000000111111",
    "0b000000111111000000",
    "-0b000000111111000000",
];

const AND_POS: [i64; 12] = [325, 16, 273, 69, 1, 341, 4, 336, 21, 321, 320, 64];
const AND_NEG: [i64; 12] = [131, 40, 41, -477, 9, -349, 2, -342, 258091, -258431, 3712, -4096];
const OR_POS: [i64; 12] = [471, 381, 381, -137, 349, -9, 343, -1, 258431, -258091, 4053, -3755];
const OR_NEG: [i64; 12] = [-17, -325, -69, -273, -341, -1, -337, -5, -321, -21, -21, -277];
const XOR_POS: [i64; 12] = [146, 365, 108, -206, 348, -350, 339, -337, 258410, -258412, 3733, -3819];
const XOR_NEG: [i64; 12] = [-148, -365, -110, 204, -350, 348, -339, 337, -258412, 258410, -3733, 3819];

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

fn check_construction<T: IntegerAdapter>() {
    for (radix, digits) in CONVERSIONS {
        assert_eq!(T::factory(digits, radix).unwrap().to_string(), "1234567890", "radix {}", radix);
    }
    for repr in ["12345", "0x3039", "030071", "0b11000000111001"] {
        assert_eq!(T::factory(repr, 0).unwrap().to_string(), "12345", "{}", repr);
    }
    for repr in ["18446744073709551616", "-1", "4564564"] {
        assert_eq!(T::factory(repr, 0).unwrap().to_string(), repr);
    }
    assert_eq!(T::factory("+ff", 16).unwrap().to_string(), "255");
    assert_eq!(T::factory("+42", 10).unwrap().to_string(), "42");
    assert_eq!(T::factory("-ff", 16).unwrap().to_string(), "-255");
    for (repr, radix) in [("1_000", 10), ("1_0", 2), ("+-ff", 16), ("", 16), ("+", 10)] {
        assert!(matches!(T::factory(repr, radix), Err(Error::InvalidNumber(_))), "{:?} radix {}", repr, radix);
    }
    assert!(matches!(T::factory("doge", 10), Err(Error::InvalidNumber(_))));
    assert!(matches!(T::factory("1.2", 0), Err(Error::UnsupportedNumericFormat(_))));
    assert!(matches!(T::factory("1", 99), Err(Error::OutOfRange(_))));
}

fn check_loose_arguments<T: IntegerAdapter>() {
    let five = T::factory(5, 0).unwrap();
    let loose: Vec<Operand> = vec![
        5.into(),
        (-5).into(),
        "18446744073709551618".into(),
        BigInt::from(5).into(),
    ];
    for number in loose {
        assert!(five.add(number.clone()).is_ok());
        assert!(five.sub(number.clone()).is_ok());
        assert!(five.mul(number.clone()).is_ok());
        assert!(five.div(number).is_ok());
    }
    for bad in ["1.2", "-1.2", "doge"] {
        assert!(five.add(bad).is_err());
        assert!(five.sub(bad).is_err());
        assert!(five.mul(bad).is_err());
        assert!(five.div(bad).is_err());
    }
}

fn check_arithmetic<T: IntegerAdapter>() {
    let n = |v: i64| T::factory(v, 0).unwrap();

    assert_eq!(n(256).compare_to(256).unwrap(), Ordering::Equal);
    assert_eq!(n(256).compare_to(300).unwrap(), Ordering::Less);
    assert_eq!(n(256).compare_to(100).unwrap(), Ordering::Greater);

    assert!(!n(0).is_negative());
    assert!(!n(i64::MAX).is_negative());
    assert!(n(-1).is_negative());
    assert!(n(-i64::MAX).is_negative());
    assert_eq!(n(-i64::MAX).abs().to_string(), i64::MAX.to_string());

    assert_eq!(n(100).add(2).unwrap().to_string(), "102");
    assert_eq!(n(100).add(-2).unwrap().to_string(), "98");
    assert_eq!(n(100).add(-150).unwrap().to_string(), "-50");
    assert_eq!(n(100).sub(-2).unwrap().to_string(), "102");
    assert_eq!(n(2).mul(-10).unwrap().to_string(), "-20");
    assert_eq!(n(2).mul(0).unwrap().to_string(), "0");
    assert_eq!(n(20).div(-2).unwrap().to_string(), "-10");
    assert_eq!(n(-7).div(2).unwrap().to_string(), "-3");
    assert!(matches!(n(20).div(0), Err(Error::DivisionByZero)));
    assert_eq!(n(256).modulo(10).unwrap().to_string(), "6");
    assert_eq!(n(256).modulo(-2).unwrap().to_string(), "0");
    assert_eq!(n(-7).modulo(2).unwrap().to_string(), "-1");

    assert_eq!(n(2).pow(8).unwrap().to_string(), "256");
    assert_eq!(n(2).pow(0).unwrap().to_string(), "1");
    assert_eq!(n(2).pow(-2).unwrap().to_string(), "0");
    assert_eq!(n(2).pow_mod(8, 10).unwrap().to_string(), "6");
    assert_eq!(n(-2).pow_mod(3, 5).unwrap().to_string(), "-3");
    assert!(matches!(n(2).pow_mod(8, 0), Err(Error::DivisionByZero)));
    assert_eq!(n(256).sqrt().unwrap().to_string(), "16");
    assert_eq!(n(1000).sqrt().unwrap().to_string(), "31");
    assert!(matches!(n(-4).sqrt(), Err(Error::InvalidNumber(_))));

    assert_eq!(n(i64::MIN).to_integer(true).unwrap(), i64::MIN);
    let big = T::factory("9223372036854775808", 0).unwrap();
    assert!(matches!(big.to_integer(true), Err(Error::OutOfRange(_))));
    assert_eq!(big.to_integer(false).unwrap(), i64::MIN);
}

fn check_twos_complement<T: IntegerAdapter>() {
    let n = |v: i64| T::factory(v, 0).unwrap();

    assert_eq!(n(20).twos_complement(0).unwrap().to_string(), "20");
    assert_eq!(n(84).twos_complement(0).unwrap().to_string(), "84");
    assert_eq!(n(-20).twos_complement(0).unwrap().to_string(), "44");
    assert_eq!(n(-84).twos_complement(0).unwrap().to_string(), "172");
    assert_eq!(n(-68).twos_complement(0).unwrap().to_string(), "188");

    let bits = |width: i64| n(-20).twos_complement(width).unwrap().to_string_radix(2).unwrap();
    assert_eq!(bits(0), "101100");
    assert_eq!(bits(-100), "101100");
    assert_eq!(bits(2), "101100");
    assert_eq!(bits(8), "11101100");
    assert_eq!(bits(16), "1111111111101100");
    assert_eq!(bits(30), "111111111111111111111111101100");
}

fn check_bitwise<T: IntegerAdapter>() {
    let a = T::factory("0b101010101", 0).unwrap();
    let b = T::factory("-0b101010101", 0).unwrap();

    for (i, rhs) in RHS.iter().enumerate() {
        assert_eq!(a.bit_and(*rhs).unwrap().to_string(), AND_POS[i].to_string(), "a & {}", rhs);
        assert_eq!(b.bit_and(*rhs).unwrap().to_string(), AND_NEG[i].to_string(), "b & {}", rhs);
        assert_eq!(a.bit_or(*rhs).unwrap().to_string(), OR_POS[i].to_string(), "a | {}", rhs);
        assert_eq!(b.bit_or(*rhs).unwrap().to_string(), OR_NEG[i].to_string(), "b | {}", rhs);
        assert_eq!(a.bit_xor(*rhs).unwrap().to_string(), XOR_POS[i].to_string(), "a ^ {}", rhs);
        assert_eq!(b.bit_xor(*rhs).unwrap().to_string(), XOR_NEG[i].to_string(), "b ^ {}", rhs);
    }

    let not = |repr: &str| T::factory(repr, 0).unwrap().bit_not().to_string();
    assert_eq!(not("0b101010101"), "-342");
    assert_eq!(not("0b111000111"), "-456");
    assert_eq!(not("0b000111000"), "-57");
    assert_eq!(not("0b100111001"), "-314");
    assert_eq!(not("-0b110011001"), "408");

    for (bits, left, right) in [(1, "682", "170"), (2, "1364", "85"), (3, "2728", "42"), (4, "5456", "21")] {
        assert_eq!(a.shift_left(bits).unwrap().to_string(), left);
        assert_eq!(a.shift_right(bits).unwrap().to_string(), right);
    }
    assert!(matches!(a.shift_left(-1), Err(Error::OutOfRange(_))));

    let wide = T::factory("1361129467683753853853498429727072833479", 0).unwrap();
    let negative = "-158456325028528675187087900679";
    assert_eq!(wide.bit_and(negative).unwrap().to_string(), "1361129467525297528824969754539984932801");
    assert_eq!(wide.bit_or(negative).unwrap().to_string(), "-1");
    assert_eq!(wide.bit_xor(negative).unwrap().to_string(), "-1361129467525297528824969754539984932802");
}

fn check_to_string<T: IntegerAdapter>() {
    let value = T::factory("1234567890", 0).unwrap();
    for (radix, digits) in CONVERSIONS {
        assert_eq!(value.to_string_radix(radix).unwrap(), digits, "radix {}", radix);
    }
    assert_eq!(T::factory(-255, 0).unwrap().to_string_radix(16).unwrap(), "-ff");
    for radix in 2..=62 {
        assert_eq!(T::factory(0, 0).unwrap().to_string_radix(radix).unwrap(), "0");
    }
    assert!(matches!(value.to_string_radix(1), Err(Error::OutOfRange(_))));
    assert!(matches!(value.to_string_radix(63), Err(Error::OutOfRange(_))));
}

macro_rules! backend_tests {
    ($($name: ident: $t: ty),*) => {
    $(
    mod $name {
        use super::*;

        #[test]
        fn construction() { check_construction::<$t>(); }

        #[test]
        fn loose_arguments() { check_loose_arguments::<$t>(); }

        #[test]
        fn arithmetic() { check_arithmetic::<$t>(); }

        #[test]
        fn twos_complement() { check_twos_complement::<$t>(); }

        #[test]
        fn bitwise() { check_bitwise::<$t>(); }

        #[test]
        fn to_string() { check_to_string::<$t>(); }
    }
    )*
    };
}

backend_tests!(decimal_backend: BigInt, detected_backend: Integer);

#[cfg(feature = "native")]
backend_tests!(native_backend: NativeInt);

#[test]
fn test_float_handling_differs_by_backend() {
    assert_eq!(BigInt::factory(10.5, 10).unwrap().to_string(), "10");
    assert_eq!(
        Integer::with_backend(Backend::Decimal, 10.5, 0).unwrap().to_string(),
        "10"
    );
    #[cfg(feature = "native")]
    assert!(matches!(
        Integer::with_backend(Backend::Native, 1.337, 0),
        Err(Error::InvalidType(_))
    ));
}

#[cfg(feature = "native")]
#[test]
fn test_mixed_backends() {
    let decimal = Integer::with_backend(Backend::Decimal, 341, 0).unwrap();
    let native = Integer::with_backend(Backend::Native, -409, 0).unwrap();
    assert_eq!(decimal.bit_and(&native).unwrap().to_string(), "69");
    assert_eq!(native.bit_or(&decimal).unwrap().to_string(), "-137");
    assert_eq!(decimal.backend(), Backend::Decimal);
    assert_eq!(native.backend(), Backend::Native);
}

#[test]
fn test_properties() {
    let values = ["0", "1", "-1", "255", "-256", "18446744073709551617", "-340282366920938463463374607431768211456"];
    for value in values {
        let n = BigInt::factory(value, 0).unwrap();
        for radix in 2..=62 {
            let converted = n.to_string_radix(radix).unwrap();
            assert_eq!(BigInt::factory(converted.as_str(), radix).unwrap(), n);
        }
        assert_eq!(n.bit_not().bit_not(), n);
        assert_eq!(n.shift_left(7).unwrap().shift_right(7).unwrap(), n);
        if n.is_negative() {
            let bits = twos_complement::encode(&n, 128).unwrap();
            assert_eq!(twos_complement::from_twos_complement(&bits).unwrap(), n);
        }
    }
}
