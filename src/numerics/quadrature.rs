//! Integration of sampled profiles over a sub-interval of their axis.
//!
//! Only intervals `[x_i, x_{i+1}]` lying entirely inside `[a, b]` contribute,
//! so `a` and `b` should be grid points for an exact result.

use crate::discretization::SpatialProfile;

fn intervals_within(
    profile: &SpatialProfile,
    a: f64,
    b: f64,
) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
    let samples: Vec<(f64, f64)> = profile.samples().collect();
    (1..samples.len())
        .map(move |i| (samples[i - 1], samples[i]))
        .filter(move |&((x0, _), (x1, _))| x0 >= a && x1 <= b)
}

/// Left-point rule. Exact for piecewise-constant profiles that are closed on
/// the left of each region, given the region boundaries are grid points.
pub fn step_integral(profile: &SpatialProfile, a: f64, b: f64) -> f64 {
    intervals_within(profile, a, b)
        .map(|((x0, v0), (x1, _))| v0 * (x1 - x0))
        .sum()
}

/// Trapezoid rule. Exact for piecewise-linear profiles whose breakpoints are
/// grid points.
pub fn trapezoid(profile: &SpatialProfile, a: f64, b: f64) -> f64 {
    intervals_within(profile, a, b)
        .map(|((x0, v0), (x1, v1))| 0.5 * (v0 + v1) * (x1 - x0))
        .sum()
}
