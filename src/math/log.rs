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
use crate::math::log1p::combine_ln;
use crate::math::log2::log_special;
use crate::math::poly::{approximate, f_approximate};
use crate::math::reduce::{LogClass, ReducedArgument, reduce_log2};

#[inline(always)]
const fn log_reduced(x: f64, reduced: ReducedArgument) -> f64 {
    match log_special(x, reduced.special) {
        Some(v) => v,
        None => combine_ln(reduced.k, reduced.f, 0., approximate(reduced.f)),
    }
}

/// Natural logarithm
///
/// ULP 1.0
#[inline]
pub const fn log(d: f64) -> f64 {
    log_reduced(d, reduce_log2(d))
}

/// Natural logarithm using FMA
#[inline]
pub fn f_log(d: f64) -> f64 {
    let reduced = reduce_log2(d);
    match log_special(d, reduced.special) {
        Some(v) => v,
        None => combine_ln(reduced.k, reduced.f, 0., f_approximate(reduced.f)),
    }
}

/// Natural logarithm failing for zero, negative values and NaN
#[inline]
pub fn try_log(d: f64) -> Result<f64, LogError> {
    let reduced = reduce_log2(d);
    match reduced.special {
        LogClass::Zero => Err(LogError::Pole),
        LogClass::NegativeOrNaN => Err(LogError::Domain),
        _ => Ok(log_reduced(d, reduced)),
    }
}
