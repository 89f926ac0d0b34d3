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
use moxlog::{f_log, f_log1p, f_log2, log, log1p, log2};
use rand::{Rng, SeedableRng};

fn ordered(x: f64) -> i64 {
    let b = x.to_bits() as i64;
    if b < 0 { i64::MIN - b } else { b }
}

fn ulp_distance(a: f64, b: f64) -> u64 {
    if (a.is_nan() && b.is_nan()) || a == b {
        return 0;
    }
    ordered(a).abs_diff(ordered(b))
}

struct Sweep {
    name: &'static str,
    max_away: u64,
    worst: f64,
    mismatches: usize,
}

impl Sweep {
    fn new(name: &'static str) -> Sweep {
        Sweep {
            name,
            max_away: 0,
            worst: 0.,
            mismatches: 0,
        }
    }

    fn check(&mut self, x: f64, value: f64, reference: f64) {
        let away = ulp_distance(value, reference);
        if away != 0 {
            self.mismatches += 1;
        }
        if away > self.max_away {
            self.max_away = away;
            self.worst = x;
        }
    }

    fn report(&self, total: usize) {
        println!(
            "{:<16} max away {} ULP at {:e}, not correctly rounded {:.4}%",
            self.name,
            self.max_away,
            self.worst,
            self.mismatches as f64 * 100. / total as f64
        );
    }
}

type Candidate = (&'static str, fn(f64) -> f64);

fn sweep(title: &str, samples: &[f64], reference: fn(f64) -> f64, candidates: &[Candidate]) {
    println!("{title}: {} samples", samples.len());
    for &(name, func) in candidates {
        let mut s = Sweep::new(name);
        for &x in samples {
            s.check(x, func(x), reference(x));
        }
        s.report(samples.len());
    }
}

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    const COUNT: usize = 1_000_000;

    let near_zero: Vec<f64> = (0..COUNT).map(|_| rng.random_range(-0.5..0.5)).collect();
    let wide: Vec<f64> = (0..COUNT)
        .map(|_| f64::from_bits(rng.random::<u64>() >> 1))
        .filter(|x| !x.is_nan())
        .collect();

    let log1p_near_zero: [Candidate; 4] = [
        ("moxlog::log1p", log1p),
        ("moxlog::f_log1p", f_log1p),
        ("libm::log1p", libm::log1p),
        ("std::ln_1p", f64::ln_1p),
    ];
    sweep("log1p on (-0.5; 0.5)", &near_zero, pxfm::f_log1p, &log1p_near_zero);

    let log1p_wide: [Candidate; 3] = [
        ("moxlog::log1p", log1p),
        ("moxlog::f_log1p", f_log1p),
        ("libm::log1p", libm::log1p),
    ];
    sweep("log1p on positive range", &wide, pxfm::f_log1p, &log1p_wide);

    let log2_wide: [Candidate; 4] = [
        ("moxlog::log2", log2),
        ("moxlog::f_log2", f_log2),
        ("libm::log2", libm::log2),
        ("std::log2", f64::log2),
    ];
    sweep("log2 on positive range", &wide, pxfm::f_log2, &log2_wide);

    let log_wide: [Candidate; 4] = [
        ("moxlog::log", log),
        ("moxlog::f_log", f_log),
        ("libm::log", libm::log),
        ("std::ln", f64::ln),
    ];
    sweep("log on positive range", &wide, pxfm::f_log, &log_wide);
}
