//! Escape-time evaluation of `z <- z^2 + c`.

use num::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeEvaluator {
    pub max_iterations: u32,
    /// Bound on `|z|^2`, not `|z|`.
    pub threshold: f64,
}

impl EscapeEvaluator {
    pub fn new(max_iterations: u32, threshold: f64) -> Self {
        EscapeEvaluator { max_iterations, threshold }
    }

    /// Number of iterations the orbit of `real + imaginary*i` survives
    /// before leaving the threshold, capped at `max_iterations`.
    ///
    /// The orbit starts at `z = c`, so a point already outside the disc
    /// escapes on the first step and yields 0.
    pub fn escape_iterations(&self, real: f64, imaginary: f64) -> u32 {
        let c = Complex { re: real, im: imaginary };
        let mut z = c;

        let mut i = 0;
        while i < self.max_iterations {
            z = z * z + c;
            if z.norm_sqr() > self.threshold {
                break;
            }
            i += 1;
        }
        i
    }
}
