use crate::money::Money;

#[test]
fn arithmetic_is_exact_minor_units() {
    let a = Money::from_minor(1_050);
    let b = Money::from_minor(275);
    assert_eq!(a + b, Money::from_minor(1_325));
    assert_eq!(a - b, Money::from_minor(775));
    assert_eq!(-b, Money::from_minor(-275));
    assert!(b < a);
    assert!(Money::ZERO.is_zero());
}

#[test]
fn div_floor_floors_toward_negative_infinity() {
    assert_eq!(Money::from_minor(10_000).div_floor(3), Money::from_minor(3_333));
    assert_eq!(Money::from_minor(-100).div_floor(3), Money::from_minor(-34));
}

#[test]
fn mul_ratio_floor_handles_large_amounts() {
    // 21 million units of currency at 33/100 must not overflow i64 math.
    let big = Money::from_minor(2_100_000_000_000);
    assert_eq!(
        big.mul_ratio_floor(33, 100),
        Money::from_minor(693_000_000_000)
    );
    assert_eq!(Money::from_minor(1_001).mul_ratio_floor(1, 3), Money::from_minor(333));
}

#[test]
fn display_renders_two_decimals() {
    assert_eq!(Money::from_minor(3_334).to_string(), "33.34");
    assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
    assert_eq!(Money::ZERO.to_string(), "0.00");
}

#[test]
fn serializes_as_bare_integer() {
    let json = serde_json::to_string(&Money::from_minor(1_234)).unwrap();
    assert_eq!(json, "1234");
    let back: Money = serde_json::from_str("-77").unwrap();
    assert_eq!(back, Money::from_minor(-77));
}
