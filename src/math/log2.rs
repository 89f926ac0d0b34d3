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
use crate::math::bits::trunc_lo_word;
use crate::math::dekker::{Dekker, INV_LN2};
use crate::math::poly::{PolynomialResult, approximate, f_approximate};
use crate::math::reduce::{LogClass, ReducedArgument, reduce_log2};

/// Result for special inputs of `log2` and `log`, `None` when the polynomial path has to run
#[inline(always)]
pub(crate) const fn log_special(x: f64, special: LogClass) -> Option<f64> {
    match special {
        LogClass::Normal | LogClass::Subnormal => None,
        LogClass::Zero => Some(f64::NEG_INFINITY),
        LogClass::NegativeOrNaN => {
            if x.is_nan() {
                Some(x + x)
            } else {
                Some(f64::NAN)
            }
        }
        LogClass::Infinite => Some(f64::INFINITY),
    }
}

/// Scales `log(1+f)` by 1/ln(2) in extra precision and adds `k`.
///
/// The final two-sum keeps `log2(2^k) == k` exact.
#[inline(always)]
const fn combine_log2(k: i32, f: f64, p: PolynomialResult) -> f64 {
    // hi + lo = f - hfsq + s*(hfsq+R) ~ log(1+f)
    let hi = trunc_lo_word(f - p.hfsq);
    let lo = f - hi - p.hfsq + p.s * (p.hfsq + p.r);

    let val_hi = hi * INV_LN2.hi;
    let val_lo = (lo + hi) * INV_LN2.lo + lo * INV_LN2.hi;

    // |val_hi| < 1 <= |k| unless k is zero, so the sum is exact
    let sum = Dekker::from_exact_add(k as f64, val_hi);
    Dekker::new(val_lo + sum.lo, sum.hi).to_f64()
}

#[inline(always)]
const fn log2_reduced(x: f64, reduced: ReducedArgument) -> f64 {
    match log_special(x, reduced.special) {
        Some(v) => v,
        None => combine_log2(reduced.k, reduced.f, approximate(reduced.f)),
    }
}

/// Computes binary logarithm
///
/// ULP 1.0, exact for powers of two
#[inline]
pub const fn log2(x: f64) -> f64 {
    log2_reduced(x, reduce_log2(x))
}

/// Computes binary logarithm using FMA
#[inline]
pub fn f_log2(x: f64) -> f64 {
    let reduced = reduce_log2(x);
    match log_special(x, reduced.special) {
        Some(v) => v,
        None => combine_log2(reduced.k, reduced.f, f_approximate(reduced.f)),
    }
}

/// Binary logarithm failing for zero, negative values and NaN
#[inline]
pub fn try_log2(x: f64) -> Result<f64, LogError> {
    let reduced = reduce_log2(x);
    match reduced.special {
        LogClass::Zero => Err(LogError::Pole),
        LogClass::NegativeOrNaN => Err(LogError::Domain),
        _ => Ok(log2_reduced(x, reduced)),
    }
}
