//! Bounded fixed-point iteration shared by the stable-swap solvers.
//!
//! Both the invariant `D` and the post-trade reserve `y` are found by
//! repeatedly applying a Newton update until the estimate moves by less
//! than one base unit. The ceiling is fixed: downstream quote comparisons
//! depend on the exact number of steps taken in pathological pools.

/// Maximum number of updates applied before giving up.
pub const MAX_ITERATIONS: u32 = 256;

/// An update smaller than this (in base units) counts as converged.
pub const CONVERGENCE_THRESHOLD: f64 = 1.0;

/// Result of a bounded Newton solve.
///
/// When `converged` is `false` the solve ran all [`MAX_ITERATIONS`]
/// updates and `value` is the last estimate reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final estimate.
    pub value: f64,
    /// Number of updates applied.
    pub iterations: u32,
    /// Whether the last update moved by less than [`CONVERGENCE_THRESHOLD`].
    pub converged: bool,
}

impl Solution {
    /// A solution known without iterating.
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self {
            value,
            iterations: 0,
            converged: true,
        }
    }
}

/// Applies `step` starting from `initial` until an update moves the
/// estimate by less than [`CONVERGENCE_THRESHOLD`], or [`MAX_ITERATIONS`]
/// updates have been applied.
///
/// The returned value is always the estimate produced by the last update.
/// A `NaN` estimate never satisfies the threshold, so it runs to the
/// ceiling and is returned unconverged.
///
/// # Examples
///
/// ```
/// use amm_quote::math::newton;
///
/// // Babylonian square root of 1e12.
/// let n = 1.0e12;
/// let root = newton::solve(n, |x| (x + n / x) / 2.0);
/// assert!(root.converged);
/// assert!((root.value - 1.0e6).abs() < 1.0);
/// ```
pub fn solve<F>(initial: f64, mut step: F) -> Solution
where
    F: FnMut(f64) -> f64,
{
    let mut current = initial;
    for iteration in 1..=MAX_ITERATIONS {
        let previous = current;
        current = step(previous);

        if (current - previous).abs() < CONVERGENCE_THRESHOLD {
            return Solution {
                value: current,
                iterations: iteration,
                converged: true,
            };
        }
    }

    Solution {
        value: current,
        iterations: MAX_ITERATIONS,
        converged: false,
    }
}
