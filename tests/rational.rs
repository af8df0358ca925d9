use exact_num::*;
use num_integer::Integer;
use rand::Rng;

fn q(n: i64, d: i64) -> RationalNumber {
    RationalNumber::new(n, d).unwrap()
}

#[test]
fn construction() {
    let r = q(4, 8);
    assert_eq!(r.numerator(), 1, "construction failed (numerator): {}", r);
    assert_eq!(r.denominator(), 2, "construction failed (denominator): {}", r);

    let r = q(3, -4);
    assert_eq!((r.numerator(), r.denominator()), (-3, 4), "sign not normalized: {}", r);

    assert_eq!(RationalNumber::new(1, 0), Err(NumError::ZeroDenominator));
    assert_eq!(RationalNumber::from_values(1, 0), Err(NumError::ZeroDenominator));
    assert_eq!(
        RationalNumber::from_values(1, RationalNumber::default()),
        Err(NumError::ZeroDenominator)
    );
}

#[test]
fn from_float() {
    assert_eq!(RationalNumber::from_f64(2.5).unwrap(), q(5, 2));
    assert_eq!(RationalNumber::from_f64(-0.75).unwrap(), q(-3, 4));
    assert_eq!(RationalNumber::from_f64(2.3333).unwrap(), q(52541, 22517));
    assert_eq!(RationalNumber::from_f64(-2.3333).unwrap(), q(-5254, 22517));
    assert_eq!(RationalNumber::try_from(0.0).unwrap(), RationalNumber::default());

    // 0.1 is 3602879701896397/36028797018963968 in binary,
    // and both parts truncate to 36028
    assert_eq!(RationalNumber::from_f64(0.1).unwrap(), 1);

    assert!(matches!(RationalNumber::from_f64(f64::NAN), Err(NumError::NonFinite(_))));
    assert!(matches!(RationalNumber::from_f64(f64::NEG_INFINITY), Err(NumError::NonFinite(_))));
}

#[test]
fn operators() {
    assert_eq!(q(1, 2) + q(1, 3), q(5, 6));
    assert_eq!(q(1, 2) + 2, q(5, 2));
    assert_eq!(q(3, 4) - q(1, 4), q(1, 2));
    assert_eq!(q(2, 3) * q(3, 4), q(1, 2));
    assert_eq!(q(3, 4) / q(1, 2), q(3, 2));
    assert_eq!(q(3, 4) / 2, q(3, 8));
    assert_eq!(q(-3, 4) + q(2, -5), q(-23, 20));
    assert_eq!(q(-3, 4) * q(2, -5), q(3, 10));
    assert_eq!(-q(3, 4), q(-3, 4));
}

#[test]
fn compound_assignment() {
    let mut r = q(1, 2);
    r += q(1, 3);
    assert_eq!(r, q(5, 6));
    r += 1;
    assert_eq!(r, q(11, 6));

    let mut r = q(2, 3);
    r *= q(3, 4);
    assert_eq!(r, q(1, 2));
    r *= 4;
    assert_eq!(r, 2);

    let mut r = q(1, 2);
    r.try_add_assign(0.25).unwrap();
    assert_eq!(r, q(3, 4));
    r.try_div_assign(q(3, 2)).unwrap();
    assert_eq!(r, q(1, 2));
    r.try_sub_assign(1).unwrap();
    assert_eq!(r, q(-1, 2));
    r.try_mul_assign(-1.5).unwrap();
    assert_eq!(r, q(3, 4));
}

#[test]
fn division_by_zero() {
    assert_eq!(q(3, 4).try_div(q(0, 1)), Err(NumError::DivisionByZero));
    assert_eq!(q(3, 4).try_div(0), Err(NumError::DivisionByZero));

    let mut r = q(3, 4);
    assert_eq!(r.try_div_assign(0.0), Err(NumError::DivisionByZero));
    assert_eq!(r, q(3, 4), "failed division modified the receiver");
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics() {
    let _ = q(3, 4) / 0;
}

#[test]
fn type_mismatch() {
    let c = ComplexNumber::new(1, 1).unwrap();
    assert_eq!(
        q(3, 4).try_add(c),
        Err(NumError::TypeMismatch {
            op: Op::Add,
            lhs: "RationalNumber",
            rhs: "ComplexNumber",
        })
    );
    assert!(matches!(q(3, 4).try_div(3.4), Err(NumError::TypeMismatch { op: Op::Div, .. })));
    assert!(matches!(q(3, 4).try_mul_assign(c), Err(NumError::TypeMismatch { op: Op::MulAssign, .. })));

    let err = q(3, 4).try_sub(0.5).unwrap_err();
    assert_eq!(err.to_string(), "unsupported operand type(s) for -: `RationalNumber` and `float`");
}

#[test]
fn equality() {
    assert_eq!(q(2, 1), 2);
    assert_eq!(q(4, 2), q(2, 1));
    assert_ne!(q(3, 4), 1);
    assert_eq!(q(1, 2), 0.5);
    assert_eq!(q(3, 2), 1.5);
    assert_ne!(q(3, 2), f64::NAN);
    assert!(q(3, 2).try_eq(f64::NAN).is_err());
    assert_eq!(q(123456, 789012), q(10288, 65751));
}

#[test]
fn lowest_terms_invariant() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let n: i64 = rng.gen_range(-100000..100000);
        let d: i64 = rng.gen_range(1..100000) * if rng.gen_bool(0.5) { 1 } else { -1 };
        let r = q(n, d);
        assert!(r.denominator() > 0, "denominator not positive: {:?}", r);
        assert_eq!(r.numerator().gcd(&r.denominator()), 1, "not in lowest terms: {:?}", r);

        let s = q(rng.gen_range(-999..999), rng.gen_range(1..999));
        for t in [r + s, r - s, r * s] {
            assert!(t.denominator() > 0, "denominator not positive: {:?}", t);
            assert_eq!(t.numerator().gcd(&t.denominator()), 1, "not in lowest terms: {:?}", t);
        }
    }
}

#[test]
fn commutativity() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a = q(rng.gen_range(-99999..99999), rng.gen_range(1..99999));
        let b = q(rng.gen_range(-99999..99999), rng.gen_range(1..99999));
        assert_eq!(a + b, b + a, "addition is not commutative: {:?} {:?}", a, b);
        assert_eq!(a * b, b * a, "multiplication is not commutative: {:?} {:?}", a, b);
    }
}

#[test]
fn text_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let r = q(rng.gen_range(-9999..9999), rng.gen_range(1..9999));
        assert_eq!(r.to_string().parse::<RationalNumber>().unwrap(), r);
        assert_eq!(format!("{:?}", r).parse::<RationalNumber>().unwrap(), r);
    }
}
