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
/// Unevaluated sum `hi + lo` of two binary64 values.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct Dekker {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
}

/// ln(2) split so that `k * hi` is exact for every binary exponent `k`.
pub(crate) const LN2: Dekker = Dekker::new(
    f64::from_bits(0x3dea39ef35793c76),
    f64::from_bits(0x3fe62e42fee00000),
);

/// 1/ln(2) with 21 trailing zero bits in `hi`, 32 significant bits.
pub(crate) const INV_LN2: Dekker = Dekker::new(
    f64::from_bits(0x3de705fc2eefa200),
    f64::from_bits(0x3ff7154765200000),
);

impl Dekker {
    #[inline]
    pub(crate) const fn new(lo: f64, hi: f64) -> Self {
        Dekker { lo, hi }
    }

    /// Fast two-sum, exact when `|a| >= |b|` or `a == 0`.
    #[inline]
    pub(crate) const fn from_exact_add(a: f64, b: f64) -> Dekker {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        Dekker::new(r_lo, r_hi)
    }

    #[inline]
    pub(crate) const fn to_f64(self) -> f64 {
        self.lo + self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_constants() {
        assert_eq!(LN2.to_f64(), std::f64::consts::LN_2);
        assert_eq!(INV_LN2.to_f64(), std::f64::consts::LOG2_E);
        assert_eq!(LN2.hi.to_bits() & 0x1fffff, 0);
        assert_eq!(INV_LN2.hi.to_bits() & 0x1f_ffff, 0);
        // k * ln2_hi has to stay exact over whole exponent range
        for k in -1074i32..=1024 {
            let p = k as f64 * LN2.hi;
            let q = (k as f64).mul_add(LN2.hi, -p);
            assert_eq!(q, 0., "k * ln2_hi is inexact for k = {k}");
        }
    }

    #[test]
    fn test_inv_ln2_product_is_exact() {
        for x in [
            0.3465735902799726,
            -0.2876820724517809,
            std::f64::consts::PI - 3.,
            1e-200,
            -f64::EPSILON,
        ] {
            let hi = crate::math::bits::trunc_lo_word(x);
            let p = hi * INV_LN2.hi;
            assert_eq!(
                hi.mul_add(INV_LN2.hi, -p),
                0.,
                "hi * inv_ln2_hi is inexact for x = {x}"
            );
        }
    }

    #[test]
    fn test_exact_add() {
        let r = Dekker::from_exact_add(1.0, 1e-20);
        assert_eq!(r.hi, 1.0);
        assert_eq!(r.lo, 1e-20);

        let r = Dekker::from_exact_add(-3.0, 0.4);
        assert_eq!(r.hi, -3.0 + 0.4);
        assert_eq!(r.hi + r.lo, r.to_f64());
        assert_eq!(r.lo, 0.4 - (r.hi - -3.0));
    }
}
