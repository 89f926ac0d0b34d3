#![no_main]

use libfuzzer_sys::fuzz_target;
use moxlog::{
    LogClass, LogError, classify_log1p, classify_log2, f_log, f_log1p, f_log2, log, log1p, log2,
    try_log1p, try_log2,
};

fn ulp_distance(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i64 {
        let b = x.to_bits() as i64;
        if b < 0 { i64::MIN - b } else { b }
    }
    if (a.is_nan() && b.is_nan()) || a == b {
        return 0;
    }
    ordered(a).abs_diff(ordered(b))
}

fn check_class(class: LogClass, value: f64) {
    match class {
        LogClass::Zero => assert_eq!(value, f64::NEG_INFINITY),
        LogClass::NegativeOrNaN => assert!(value.is_nan()),
        LogClass::Infinite => assert_eq!(value, f64::INFINITY),
        LogClass::Normal | LogClass::Subnormal => assert!(!value.is_nan()),
    }
}

fuzz_target!(|data: u64| {
    let x = f64::from_bits(data);

    let v = log1p(x);
    check_class(classify_log1p(x), v);
    assert!(ulp_distance(v, libm::log1p(x)) <= 1, "log1p({x})");
    assert!(ulp_distance(f_log1p(x), libm::log1p(x)) <= 1, "f_log1p({x})");
    match try_log1p(x) {
        Ok(r) => assert_eq!(r.to_bits(), v.to_bits()),
        Err(LogError::Pole) => assert_eq!(x, -1.),
        Err(LogError::Domain) => assert!(v.is_nan()),
    }

    let v = log2(x);
    check_class(classify_log2(x), v);
    assert!(ulp_distance(v, libm::log2(x)) <= 1, "log2({x})");
    assert!(ulp_distance(f_log2(x), libm::log2(x)) <= 1, "f_log2({x})");
    if x > 0. && x.is_finite() && data & ((1u64 << 52) - 1) == 0 {
        assert_eq!(v, v.trunc(), "log2({x}) is not integral");
    }
    match try_log2(x) {
        Ok(r) => assert_eq!(r.to_bits(), v.to_bits()),
        Err(LogError::Pole) => assert_eq!(x, 0.),
        Err(LogError::Domain) => assert!(v.is_nan()),
    }

    let v = log(x);
    check_class(classify_log2(x), v);
    assert!(ulp_distance(v, libm::log(x)) <= 1, "log({x})");
    assert!(ulp_distance(f_log(x), libm::log(x)) <= 1, "f_log({x})");
});
