//! Closed-form equilibrium and biased electrostatics of an abrupt junction
//! under the depletion approximation.
//!
//! Units: lengths in cm, fields in V/cm, capacitance in F/cm^2.

use crate::numerics::Tolerance;
use crate::physics::units::cm_to_um;
use crate::physics::{
    BiasCondition, DepletionGeometry, JunctionError, JunctionSpec, MaterialParameters, Result,
};

/// `V_bi = V_T * ln(N_a * N_d / n_i^2)` [V].
///
/// Fails with [`JunctionError::InvalidDoping`] unless `N_a * N_d > n_i^2`,
/// since the potential would otherwise be zero or negative.
pub fn built_in_potential(material: &MaterialParameters, junction: &JunctionSpec) -> Result<f64> {
    material.validate()?;
    let JunctionSpec { na, nd } = *junction;
    if !(na > 0.0 && nd > 0.0 && na.is_finite() && nd.is_finite()) {
        return Err(JunctionError::InvalidDoping {
            na,
            nd,
            reason: "doping must be finite and strictly positive".into(),
        });
    }

    // Ratio form avoids overflowing N_a * N_d for degenerate doping
    let ratio = (na / material.ni) * (nd / material.ni);
    if ratio <= 1.0 {
        return Err(JunctionError::InvalidDoping {
            na,
            nd,
            reason: format!(
                "N_a * N_d must exceed n_i^2 = {:e} cm^-6 for a positive built-in potential",
                material.ni * material.ni
            ),
        });
    }

    Ok(material.vt * ratio.ln())
}

/// Depletion width and its split for the given bias.
///
/// `dV = V_bi - V_applied` must be positive, otherwise the width would be
/// imaginary and [`JunctionError::DepletionCollapse`] is returned.
pub fn depletion_geometry(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    bias: &BiasCondition,
) -> Result<DepletionGeometry> {
    let v_bi = built_in_potential(material, junction)?;
    let v_applied = bias.v_applied();
    if !v_applied.is_finite() {
        return Err(JunctionError::InvalidBias(format!(
            "applied voltage must be finite, got {v_applied}"
        )));
    }

    let delta_v = v_bi - v_applied;
    if delta_v <= 0.0 {
        return Err(JunctionError::DepletionCollapse {
            applied: v_applied,
            built_in: v_bi,
        });
    }

    let JunctionSpec { na, nd } = *junction;
    let width = ((2.0 * material.eps_s() / material.q) * (1.0 / na + 1.0 / nd) * delta_v).sqrt();
    let x_p = width * nd / (na + nd);
    let x_n = width * na / (na + nd);

    tracing::debug!(
        v_applied,
        v_bi,
        width_um = cm_to_um(width),
        x_p_um = cm_to_um(x_p),
        x_n_um = cm_to_um(x_n),
        "depletion geometry"
    );

    Ok(DepletionGeometry {
        width,
        x_p,
        x_n,
        built_in_potential: v_bi,
        bias: *bias,
    })
}

/// `x_p * N_a == x_n * N_d` within the invariant tolerance.
pub fn is_charge_neutral(junction: &JunctionSpec, geometry: &DepletionGeometry) -> bool {
    Tolerance::INVARIANT.check(geometry.x_p * junction.na, geometry.x_n * junction.nd)
}

/// Field at the metallurgical junction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakField {
    /// Signed field at x = 0 [V/cm]; negative, pointing from n to p.
    pub at_junction: f64,
    /// `|E(0)|` [V/cm].
    pub magnitude: f64,
}

/// `E(0) = -q * N_a * x_p / eps_s`, equal to `-q * N_d * x_n / eps_s`.
pub fn peak_field(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    geometry: &DepletionGeometry,
) -> PeakField {
    let at_junction = -material.q * junction.na * geometry.x_p / material.eps_s();
    PeakField {
        at_junction,
        magnitude: at_junction.abs(),
    }
}

/// Small-signal capacitance per unit area, `eps_s / W(-V_reverse)` [F/cm^2].
pub fn junction_capacitance(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    v_reverse: f64,
) -> Result<f64> {
    let bias = BiasCondition::reverse(v_reverse)?;
    let geometry = depletion_geometry(material, junction, &bias)?;
    Ok(material.eps_s() / geometry.width)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitancePoint {
    pub v_reverse: f64,   // [V]
    pub capacitance: f64, // [F/cm^2]
    pub width: f64,       // [cm]
}

/// Capacitance at each reverse voltage. The first voltage the model
/// rejects aborts the whole sweep with its error.
pub fn capacitance_sweep(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    reverse_voltages: &[f64],
) -> Result<Vec<CapacitancePoint>> {
    reverse_voltages
        .iter()
        .map(|&v_reverse| {
            let bias = BiasCondition::reverse(v_reverse)?;
            let geometry = depletion_geometry(material, junction, &bias)?;
            Ok(CapacitancePoint {
                v_reverse,
                capacitance: material.eps_s() / geometry.width,
                width: geometry.width,
            })
        })
        .collect()
}
