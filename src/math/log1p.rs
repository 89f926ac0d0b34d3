/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::LogError;
use crate::math::dekker::LN2;
use crate::math::poly::{PolynomialResult, approximate, f_approximate};
use crate::math::reduce::{LogClass, ReducedArgument, reduce_log1p};

/// Sums `k*ln2 + log(1+f) + c` keeping the summation order,
/// cancellation happens between neighbours of equal magnitude.
#[inline(always)]
pub(crate) const fn combine_ln(k: i32, f: f64, c: f64, p: PolynomialResult) -> f64 {
    let dk = k as f64;
    p.s * (p.hfsq + p.r) + (dk * LN2.lo + c) - p.hfsq + f + dk * LN2.hi
}

/// Result for special inputs of `log1p`, `None` for regular ones
#[inline(always)]
const fn log1p_special(x: f64, special: LogClass) -> Option<f64> {
    match special {
        LogClass::Normal => None,
        LogClass::Zero => Some(f64::NEG_INFINITY),
        LogClass::NegativeOrNaN => {
            if x.is_nan() {
                Some(x + x)
            } else {
                Some(f64::NAN)
            }
        }
        LogClass::Subnormal => Some(x),
        LogClass::Infinite => Some(f64::INFINITY),
    }
}

#[inline(always)]
const fn log1p_reduced(x: f64, reduced: ReducedArgument) -> f64 {
    match log1p_special(x, reduced.special) {
        Some(v) => v,
        None => combine_ln(reduced.k, reduced.f, reduced.c, approximate(reduced.f)),
    }
}

/// Computes natural logarithm of 1 + x
///
/// ULP 1.0
#[inline]
pub const fn log1p(x: f64) -> f64 {
    log1p_reduced(x, reduce_log1p(x))
}

/// Computes natural logarithm of 1 + x using FMA
///
/// ULP 1.0
#[inline]
pub fn f_log1p(x: f64) -> f64 {
    let reduced = reduce_log1p(x);
    if reduced.special == LogClass::Subnormal && x != 0. && x.abs() < f64::MIN_POSITIVE {
        // raise underflow as a real computation would
        _ = std::hint::black_box(x as f32);
    }
    match log1p_special(x, reduced.special) {
        Some(v) => v,
        None => combine_ln(reduced.k, reduced.f, reduced.c, f_approximate(reduced.f)),
    }
}

/// Natural logarithm of 1 + x, failing for `x <= -1` and NaN
#[inline]
pub fn try_log1p(x: f64) -> Result<f64, LogError> {
    let reduced = reduce_log1p(x);
    match reduced.special {
        LogClass::Zero => Err(LogError::Pole),
        LogClass::NegativeOrNaN => Err(LogError::Domain),
        _ => Ok(log1p_reduced(x, reduced)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ulp::ulp_distance;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_log1p_special() {
        assert!(log1p(-2.).is_nan());
        assert!(log1p(f64::NEG_INFINITY).is_nan());
        assert_eq!(log1p(-1.), f64::NEG_INFINITY);
        assert!(log1p(f64::NAN).is_nan());
        assert!(log1p(-f64::NAN).is_nan());
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
        assert_eq!(log1p(0.).to_bits(), 0f64.to_bits());
        assert_eq!(log1p(-0.).to_bits(), (-0f64).to_bits());
        let sub = f64::MIN_POSITIVE / 2.;
        assert_eq!(log1p(sub), sub);
        assert_eq!(log1p(-sub), -sub);
        assert_eq!(log1p(1e-18), 1e-18);
        assert_eq!(f_log1p(sub), sub);
        assert_eq!(f_log1p(-1.), f64::NEG_INFINITY);
        assert!(f_log1p(-1.5).is_nan());
    }

    #[test]
    fn test_log1p_values() {
        println!("{}", log1p(-0.5));
        assert!(ulp_distance(log1p(-0.5), -std::f64::consts::LN_2) <= 1);
        assert!(ulp_distance(log1p(1.), std::f64::consts::LN_2) <= 1);
        assert!(ulp_distance(log1p(std::f64::consts::E - 1.), 1.) <= 1);
        assert!(ulp_distance(log1p(f64::MAX), 709.782712893384) <= 1);
        assert_eq!(log1p(0.), 0.);
    }

    #[test]
    fn test_log1p_taylor() {
        let mut x: f64 = -1e-3;
        while x < 1e-3 {
            let series = x - x * x / 2. + x * x * x / 3.;
            let bound = x.powi(4) / 3. + 4. * f64::EPSILON * x.abs();
            assert!(
                (log1p(x) - series).abs() <= bound,
                "x = {x}, log1p {}, series {series}",
                log1p(x)
            );
            x += 1.7e-5;
        }
    }

    #[test]
    fn test_log1p_reference() {
        let samples = [
            -0.9999999999,
            -0.75,
            -0.3,
            -0.29289,
            1e-300,
            1e-16,
            3e-9,
            0.01,
            0.414,
            0.5,
            1.,
            2.5,
            1e3,
            1e15,
            9.007199254740991e15,
            1.8014398509481984e16,
            1e100,
            1e308,
        ];
        for x in samples {
            let v = log1p(x);
            let r = pxfm::f_log1p(x);
            assert!(ulp_distance(v, r) <= 1, "x = {x}, got {v}, expected {r}");
            let v = f_log1p(x);
            assert!(ulp_distance(v, r) <= 1, "x = {x}, got FMA {v}, expected {r}");
        }
    }

    #[test]
    fn test_log1p_random_bits() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x1091);
        let mut max_away = 0;
        let mut checked = 0;
        while checked < 200_000 {
            let x = f64::from_bits(rng.random::<u64>());
            if x.is_nan() || x <= -1. {
                continue;
            }
            checked += 1;
            let reference = pxfm::f_log1p(x);
            let away = ulp_distance(log1p(x), reference);
            assert!(away <= 1, "x = {x}, got {}, expected {reference}", log1p(x));
            assert!(ulp_distance(f_log1p(x), reference) <= 1, "x = {x}");
            max_away = max_away.max(away);
        }
        println!("max away {max_away}");
    }

    #[test]
    fn test_log1p_random_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200_000 {
            let x: f64 = rng.random_range(-1.0..4.0);
            if x == -1. {
                continue;
            }
            let reference = pxfm::f_log1p(x);
            assert!(ulp_distance(log1p(x), reference) <= 1, "x = {x}");
        }
    }

    #[test]
    fn test_log1p_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        let mut x = -0.999;
        while x < 64. {
            let v = log1p(x);
            assert!(v > prev, "log1p is not monotonic at {x}");
            prev = v;
            x += 1e-3;
        }
    }

    #[test]
    fn test_log1p_is_pure() {
        for x in [-0.5, 0., -0., 1e-320, 3.7, f64::NAN, f64::INFINITY, -7.] {
            let a = log1p(x);
            let b = log1p(x);
            assert_eq!(a.to_bits(), b.to_bits());
            assert_eq!(f_log1p(x).to_bits(), f_log1p(x).to_bits());
        }
    }

    #[test]
    fn test_log1p_const() {
        const ZERO: f64 = log1p(0.);
        const HALF: f64 = log1p(-0.5);
        assert_eq!(ZERO, 0.);
        assert_eq!(HALF, log1p(-0.5));
    }

    #[test]
    fn test_try_log1p() {
        assert_eq!(try_log1p(-1.), Err(LogError::Pole));
        assert_eq!(try_log1p(-1.5), Err(LogError::Domain));
        assert_eq!(try_log1p(f64::NAN), Err(LogError::Domain));
        assert_eq!(try_log1p(f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(try_log1p(1.), Ok(log1p(1.)));
        assert_eq!(try_log1p(1e-310), Ok(1e-310));
    }
}
