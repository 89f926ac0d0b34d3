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
use crate::math::bits::Float64Bits;

/// What argument reduction found out about an input
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogClass {
    /// Regular input, the polynomial path computes the result
    Normal,
    /// Argument of the logarithm is zero: `x == -1` for `log1p`, `x == ±0` for `log2`,
    /// result is `-inf`
    Zero,
    /// Argument of the logarithm is negative or `x` is NaN, result is NaN
    NegativeOrNaN,
    /// For `log1p` input is so small that `1 + x` rounds to one, result is `x` itself.
    /// For `log2` input is subnormal, it is scaled by 2^54 and the regular path continues.
    Subnormal,
    /// Input is `+inf`, result is `+inf`
    Infinite,
}

/// Argument reduced to `2^k * (1 + f)` with `1 + f` in `[sqrt(2)/2, sqrt(2)]`.
///
/// `c` carries the rounding error made while forming `1 + x` in `log1p`,
/// `f` and `k` are meaningful only for [LogClass::Normal]
/// and the subnormal rescaling of `log2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ReducedArgument {
    pub(crate) k: i32,
    pub(crate) f: f64,
    pub(crate) c: f64,
    pub(crate) special: LogClass,
}

impl ReducedArgument {
    #[inline(always)]
    const fn special(special: LogClass) -> ReducedArgument {
        ReducedArgument {
            k: 0,
            f: 0.,
            c: 0.,
            special,
        }
    }
}

// High word of sqrt(2)/2, the bias moves [sqrt(2)/2;sqrt(2)] onto a single binade
const SQRT2_HALF_HI: u32 = 0x3fe6a09e;
const EXP_BIAS_HI: u32 = 0x3ff00000;

/// Moves the mantissa of `u` into `[sqrt(2)/2;sqrt(2)]`, returning `(k, u * 2^-k)`
#[inline(always)]
const fn normalize_mantissa(u: Float64Bits) -> (i32, f64) {
    let hu = u.hi().wrapping_add(EXP_BIAS_HI - SQRT2_HALF_HI);
    let k = (hu >> 20) as i32 - 0x3ff;
    let hu = (hu & 0x000fffff).wrapping_add(SQRT2_HALF_HI);
    (k, u.with_hi(hu).to_f64())
}

/// Reduces `1 + x` for `log1p`
#[inline]
pub(crate) const fn reduce_log1p(x: f64) -> ReducedArgument {
    let hx = Float64Bits::new(x).hi();

    if hx < 0x3fda827a || (hx >> 31) != 0 {
        // 1 + x < sqrt(2)
        if hx >= 0xbff00000 {
            // x <= -1, -inf, or NaN with sign bit
            return if x == -1. {
                ReducedArgument::special(LogClass::Zero)
            } else {
                ReducedArgument::special(LogClass::NegativeOrNaN)
            };
        }
        if (hx << 1) < (0x3ca00000 << 1) {
            // |x| < 2^-53
            return ReducedArgument::special(LogClass::Subnormal);
        }
        if hx <= 0xbfd2bec4 {
            // sqrt(2)/2 <= 1 + x < sqrt(2), x is exact
            return ReducedArgument {
                k: 0,
                f: x,
                c: 0.,
                special: LogClass::Normal,
            };
        }
    } else if hx >= 0x7ff00000 {
        return if x.is_nan() {
            ReducedArgument::special(LogClass::NegativeOrNaN)
        } else {
            ReducedArgument::special(LogClass::Infinite)
        };
    }

    let u = 1. + x;
    let (k, m) = normalize_mantissa(Float64Bits::new(u));
    // c / u ~ log(1+x) - log(u), beyond 2^54 it vanishes
    let c = if k < 54 {
        let c = if k >= 2 { 1. - (u - x) } else { x - (u - 1.) };
        c / u
    } else {
        0.
    };
    ReducedArgument {
        k,
        f: m - 1.,
        c,
        special: LogClass::Normal,
    }
}

/// Reduces `x` for `log2` and `log`
#[inline]
pub(crate) const fn reduce_log2(x: f64) -> ReducedArgument {
    let bits = Float64Bits::new(x);
    let hx = bits.hi();

    if hx < 0x00100000 || (hx >> 31) != 0 {
        if bits.bits() << 1 == 0 {
            return ReducedArgument::special(LogClass::Zero);
        }
        if (hx >> 31) != 0 {
            return ReducedArgument::special(LogClass::NegativeOrNaN);
        }
        // subnormal, scale up by 2^54
        let scaled = x * f64::from_bits(0x4350000000000000);
        let (k, m) = normalize_mantissa(Float64Bits::new(scaled));
        return ReducedArgument {
            k: k - 54,
            f: m - 1.,
            c: 0.,
            special: LogClass::Subnormal,
        };
    } else if hx >= 0x7ff00000 {
        return if x.is_nan() {
            ReducedArgument::special(LogClass::NegativeOrNaN)
        } else {
            ReducedArgument::special(LogClass::Infinite)
        };
    }

    let (k, m) = normalize_mantissa(bits);
    ReducedArgument {
        k,
        f: m - 1.,
        c: 0.,
        special: LogClass::Normal,
    }
}

/// Classifies `x` the way `log1p` resolves its special cases
#[inline]
pub const fn classify_log1p(x: f64) -> LogClass {
    reduce_log1p(x).special
}

/// Classifies `x` the way `log2` and `log` resolve their special cases
#[inline]
pub const fn classify_log2(x: f64) -> LogClass {
    reduce_log2(x).special
}
