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
use crate::math::common::f_fmla;

// Minimax fit of R(z) = Lg1*z + Lg2*z^2 + ... + Lg7*z^7 over f in [sqrt(2)/2-1;sqrt(2)-1]
// such that log(1+f) = f - f^2/2 + s*(f^2/2 + R(z)), error of R is below 2^-58.
const LG1: f64 = f64::from_bits(0x3fe5555555555593);
const LG2: f64 = f64::from_bits(0x3fd999999997fa04);
const LG3: f64 = f64::from_bits(0x3fd2492494229359);
const LG4: f64 = f64::from_bits(0x3fcc71c51d8e78af);
const LG5: f64 = f64::from_bits(0x3fc7466496cb03de);
const LG6: f64 = f64::from_bits(0x3fc39a09d078c69f);
const LG7: f64 = f64::from_bits(0x3fc2f112df3e5244);

/// `s = f/(2+f)`, `z = s^2`, polynomial remainder `r` and `hfsq = f^2/2`
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PolynomialResult {
    pub(crate) s: f64,
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) z: f64,
    pub(crate) r: f64,
    pub(crate) hfsq: f64,
}

/// Evaluates remainder of log(1+f) after `f - f^2/2` was taken out.
///
/// Even and odd powers of `z` are accumulated separately to keep the
/// dependency chains short.
#[inline]
pub(crate) const fn approximate(f: f64) -> PolynomialResult {
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    PolynomialResult {
        s,
        z,
        r: t2 + t1,
        hfsq,
    }
}

/// Same as [approximate] with FMA in Horner steps where it is available
#[inline]
pub(crate) fn f_approximate(f: f64) -> PolynomialResult {
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * f_fmla(w, f_fmla(w, LG6, LG4), LG2);
    let t2 = z * f_fmla(w, f_fmla(w, f_fmla(w, LG7, LG5), LG3), LG1);
    PolynomialResult {
        s,
        z,
        r: t2 + t1,
        hfsq,
    }
}
