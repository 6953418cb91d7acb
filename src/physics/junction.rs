use super::error::{JunctionError, Result};
use super::units::cm_to_um;

/// Largest accepted |V_applied|. Anything beyond is far past breakdown for
/// any realistic junction and almost certainly a unit mistake.
pub const MAX_BIAS_MAGNITUDE: f64 = 1.0e3; // [V]

/// Doping of an abrupt junction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionSpec {
    pub na: f64, // Acceptor concentration, p-side [cm^-3]
    pub nd: f64, // Donor concentration, n-side [cm^-3]
}

impl JunctionSpec {
    pub fn new(na: f64, nd: f64) -> Result<Self> {
        for (side, value) in [("N_a", na), ("N_d", nd)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(JunctionError::InvalidDoping {
                    na,
                    nd,
                    reason: format!("{side} must be finite and strictly positive"),
                });
            }
        }
        Ok(Self { na, nd })
    }

    /// N_a = 2e15 cm^-3, N_d = 1e16 cm^-3.
    pub const fn reference() -> Self {
        Self { na: 2.0e15, nd: 1.0e16 }
    }
}

/// Signed applied voltage: forward > 0, reverse < 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCondition {
    v_applied: f64,
}

impl BiasCondition {
    pub fn new(v_applied: f64) -> Result<Self> {
        if !v_applied.is_finite() {
            return Err(JunctionError::InvalidBias(format!(
                "applied voltage must be finite, got {v_applied}"
            )));
        }
        if v_applied.abs() > MAX_BIAS_MAGNITUDE {
            return Err(JunctionError::InvalidBias(format!(
                "|V_applied| = {} V exceeds {MAX_BIAS_MAGNITUDE} V",
                v_applied.abs()
            )));
        }
        Ok(Self { v_applied })
    }

    pub const fn equilibrium() -> Self {
        Self { v_applied: 0.0 }
    }

    pub fn forward(v_forward: f64) -> Result<Self> {
        Self::new(v_forward)
    }

    /// Reverse bias given as a magnitude; stored as `-v_reverse`.
    pub fn reverse(v_reverse: f64) -> Result<Self> {
        Self::new(-v_reverse)
    }

    pub fn v_applied(&self) -> f64 {
        self.v_applied
    }

    pub fn is_equilibrium(&self) -> bool {
        self.v_applied == 0.0
    }

    pub fn describe(&self) -> String {
        if self.v_applied > 0.0 {
            format!("forward {:.3} V", self.v_applied)
        } else if self.v_applied < 0.0 {
            format!("reverse {:.3} V", -self.v_applied)
        } else {
            "zero bias".to_string()
        }
    }
}

impl Default for BiasCondition {
    fn default() -> Self {
        Self::equilibrium()
    }
}

/// Extent of the space-charge region for one bias. All lengths in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepletionGeometry {
    pub width: f64,
    pub x_p: f64,
    pub x_n: f64,
    pub built_in_potential: f64,
    pub bias: BiasCondition,
}

impl DepletionGeometry {
    /// Total potential supported by the depletion region, `V_bi - V_applied`.
    pub fn potential_drop(&self) -> f64 {
        self.built_in_potential - self.bias.v_applied()
    }

    /// `[-x_p, 0, x_n]` in cm.
    pub fn boundaries(&self) -> [f64; 3] {
        [-self.x_p, 0.0, self.x_n]
    }

    /// True strictly inside `(-x_p, x_n)`.
    pub fn contains(&self, x: f64) -> bool {
        x > -self.x_p && x < self.x_n
    }

    pub fn width_um(&self) -> f64 {
        cm_to_um(self.width)
    }

    pub fn x_p_um(&self) -> f64 {
        cm_to_um(self.x_p)
    }

    pub fn x_n_um(&self) -> f64 {
        cm_to_um(self.x_n)
    }
}
