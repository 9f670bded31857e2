use crate::complex::Complex;

/// Classification of a raw escape count.
///
/// The hot loop only produces a `u32`; this enum is for callers that need to
/// tell escaped points from interior ones without repeating the cap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit left the escape radius after `iterations` steps.
    Escaped { iterations: u32 },

    /// The orbit stayed bounded for the whole iteration budget.
    Interior,
}

/// Trait implemented by escape-time evaluators.
///
/// Designed for **static dispatch**: the renderer is generic over
/// `F: Fractal` so the iteration loop can be inlined into the pixel loop.
pub trait Fractal {
    /// Iterate a single point and return the raw step count.
    ///
    /// A count greater than [`max_iteration`](Self::max_iteration) means the
    /// point never escaped.
    fn iterate(&self, c: Complex) -> u32;

    /// The iteration cap this evaluator was built with.
    fn max_iteration(&self) -> u32;

    /// Interpret a count returned by [`iterate`](Self::iterate).
    #[inline]
    fn classify(&self, count: u32) -> IterationResult {
        if count > self.max_iteration() {
            IterationResult::Interior
        } else {
            IterationResult::Escaped { iterations: count }
        }
    }
}
