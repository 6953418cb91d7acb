pub mod quadrature;

/// How close two floating-point results must be to count as equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    Absolute(f64),
    Relative(f64),
    Combined(f64, f64),
}

impl Tolerance {
    /// Relative tolerance used for the model's own invariant checks.
    pub const INVARIANT: Tolerance = Tolerance::Combined(1e-30, 1e-9);

    pub fn check(&self, actual: f64, expected: f64) -> bool {
        let diff = (actual - expected).abs();
        let scale = actual.abs().max(expected.abs());
        match *self {
            Tolerance::Absolute(tol) => diff <= tol,
            Tolerance::Relative(tol) => diff <= tol * scale,
            Tolerance::Combined(abs_tol, rel_tol) => diff <= abs_tol || diff <= rel_tol * scale,
        }
    }
}
