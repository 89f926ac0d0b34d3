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
/// Bit view of a binary64 value.
///
/// The logarithm kernels only look at the representation through this type,
/// everything else works on values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Float64Bits(u64);

impl Float64Bits {
    #[inline(always)]
    pub(crate) const fn new(x: f64) -> Self {
        Float64Bits(x.to_bits())
    }

    #[inline(always)]
    pub(crate) const fn bits(self) -> u64 {
        self.0
    }

    /// Sign, exponent and the upper 20 bits of the mantissa.
    #[inline(always)]
    pub(crate) const fn hi(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Replaces the high word keeping the low 32 mantissa bits.
    #[inline(always)]
    pub(crate) const fn with_hi(self, hi: u32) -> Self {
        Float64Bits(((hi as u64) << 32) | (self.0 & 0xffff_ffff))
    }

    #[inline(always)]
    pub(crate) const fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Clears low 32 bits of the mantissa.
///
/// Result has at most 21 significant bits, so its product with another
/// value of at most 32 significant bits is exact.
#[inline(always)]
pub(crate) const fn trunc_lo_word(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000)
}
