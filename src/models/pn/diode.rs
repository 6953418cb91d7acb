//! Piecewise diode I-V approximation.
//!
//! Below the knee voltage the forward current follows the ideal Shockley
//! exponential. At and above the knee, and for any non-positive voltage, the
//! current is clamped to a fixed plateau of `+I_max` / `-I_max`. This is a
//! deliberately crude teaching model: it is discontinuous at the knee and at
//! zero bias, and it does not model high injection, series resistance, or the
//! real (tiny) reverse saturation current.

use crate::physics::constants::THERMAL_VOLTAGE_300K;
use crate::physics::{JunctionError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeModel {
    pub saturation_current: f64, // I0 [A]
    pub knee_voltage: f64,       // [V]
    pub thermal_voltage: f64,    // V_T [V]
    pub ideality: f64,           // n
    pub clamp_current: f64,      // I_max [A]
}

impl DiodeModel {
    pub fn new(saturation_current: f64, knee_voltage: f64) -> Self {
        Self {
            saturation_current,
            knee_voltage,
            thermal_voltage: THERMAL_VOLTAGE_300K,
            ideality: 1.0,
            clamp_current: 1.0e-3,
        }
    }

    pub fn silicon() -> Self {
        Self::new(1.0e-12, 0.7)
    }

    pub fn germanium() -> Self {
        Self::new(1.0e-6, 0.3)
    }

    /// Current [A] at voltage `v` [V].
    pub fn current(&self, v: f64) -> Result<f64> {
        if !v.is_finite() {
            return Err(JunctionError::InvalidBias(format!(
                "diode voltage must be finite, got {v}"
            )));
        }
        Ok(if v >= self.knee_voltage {
            self.clamp_current
        } else if v > 0.0 {
            self.saturation_current * ((v / (self.ideality * self.thermal_voltage)).exp() - 1.0)
        } else {
            -self.clamp_current
        })
    }

    /// (voltage [V], current [A]) for each voltage.
    pub fn iv_curve(&self, voltages: &[f64]) -> Result<Vec<(f64, f64)>> {
        voltages
            .iter()
            .map(|&v| self.current(v).map(|i| (v, i)))
            .collect()
    }
}

/// Free-function form of [`DiodeModel::current`].
pub fn diode_current(v: f64, diode: &DiodeModel) -> Result<f64> {
    diode.current(v)
}
