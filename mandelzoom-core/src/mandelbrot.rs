use crate::complex::Complex;
use crate::error::CoreError;
use crate::fractal::Fractal;

/// Square of the escape radius 2. Orbits are compared against this so the
/// loop never takes a square root.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Count the steps of `z_{n+1} = z_n² + c` from `z₀ = 0` until `|z|² > 4`
/// or the counter passes `max_iteration`.
///
/// Returns `max_iteration + 1` for points that never escape and `0` when the
/// budget is zero. The squared components are carried between steps so each
/// iteration costs three multiplications.
#[inline]
pub fn evaluate(c: Complex, max_iteration: u32) -> u32 {
    if max_iteration == 0 {
        return 0;
    }

    let mut re = 0.0_f64;
    let mut im = 0.0_f64;
    let mut re_sq = 0.0_f64;
    let mut im_sq = 0.0_f64;
    let mut iteration: u32 = 0;

    while re_sq + im_sq <= ESCAPE_RADIUS_SQ && iteration <= max_iteration {
        im = re * im;
        im += im;
        im += c.im;
        re = re_sq - im_sq + c.re;
        re_sq = re * re;
        im_sq = im * im;
        iteration += 1;
    }

    iteration
}

/// The Mandelbrot set evaluator with a fixed iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mandelbrot {
    max_iteration: u32,
}

impl Mandelbrot {
    pub const DEFAULT_MAX_ITERATION: u32 = 500;

    pub fn new(max_iteration: u32) -> crate::Result<Self> {
        if max_iteration == 0 {
            return Err(CoreError::InvalidMaxIterations(max_iteration));
        }
        Ok(Self { max_iteration })
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self {
            max_iteration: Self::DEFAULT_MAX_ITERATION,
        }
    }
}

impl Fractal for Mandelbrot {
    #[inline]
    fn iterate(&self, c: Complex) -> u32 {
        evaluate(c, self.max_iteration)
    }

    fn max_iteration(&self) -> u32 {
        self.max_iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::IterationResult;

    #[test]
    fn origin_never_escapes() {
        for max in [1, 2, 50, 100, 500] {
            assert_eq!(evaluate(Complex::ZERO, max), max + 1);
        }
    }

    #[test]
    fn zero_budget_skips_the_loop() {
        assert_eq!(evaluate(Complex::ZERO, 0), 0);
        assert_eq!(evaluate(Complex::new(10.0, 10.0), 0), 0);
    }

    #[test]
    fn outside_radius_escapes_after_one_step() {
        for c in [
            Complex::new(2.01, 0.0),
            Complex::new(0.0, -2.5),
            Complex::new(1.5, 1.5),
            Complex::new(-100.0, 3.0),
        ] {
            assert!(c.norm_sq() > ESCAPE_RADIUS_SQ);
            assert_eq!(evaluate(c, 100), 1, "c = {c}");
        }
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z = 1, 2, 5. |2|² = 4 is still inside, |5|² is not.
        assert_eq!(evaluate(Complex::new(1.0, 0.0), 100), 3);
    }

    #[test]
    fn boundary_of_radius_is_inclusive() {
        // c = -2 cycles 0 → -2 → 2 → 2 …, always exactly on the radius.
        assert_eq!(evaluate(Complex::new(-2.0, 0.0), 64), 65);
    }

    #[test]
    fn period_two_bulb_is_interior() {
        let mb = Mandelbrot::new(200).unwrap();
        let count = mb.iterate(Complex::new(-1.0, 0.0));
        assert_eq!(mb.classify(count), IterationResult::Interior);
    }

    #[test]
    fn classify_escaped() {
        let mb = Mandelbrot::new(100).unwrap();
        let count = mb.iterate(Complex::new(0.5, 0.0));
        assert_eq!(
            mb.classify(count),
            IterationResult::Escaped { iterations: count }
        );
        assert!(count >= 1 && count <= 100);
    }

    #[test]
    fn deterministic_results() {
        let points = [
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.5),
            Complex::new(-0.7436, 0.1318),
            Complex::new(0.26, 0.0),
        ];
        let run1: Vec<_> = points.iter().map(|&c| evaluate(c, 500)).collect();
        let run2: Vec<_> = points.iter().map(|&c| evaluate(c, 500)).collect();
        assert_eq!(run1, run2);
    }

    #[test]
    fn rejects_zero_budget() {
        assert!(Mandelbrot::new(0).is_err());
    }

    #[test]
    fn default_budget() {
        assert_eq!(Mandelbrot::default().max_iteration(), 500);
    }
}
