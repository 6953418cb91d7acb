//! Position-dependent profiles of the depletion-approximation solution.
//!
//! Every profile is evaluated pointwise and masked against the exact region
//! boundaries `-x_p`, `0` and `x_n`; grid resolution never moves a
//! transition. Positions are in cm.

use crate::discretization::{PositionGrid, SpatialProfile};
use crate::physics::units::ValueUnit;
use crate::physics::{
    BiasCondition, DepletionGeometry, JunctionError, JunctionSpec, MaterialParameters, Result,
};

/// Which side of the junction a position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NeutralP,
    DepletedP,
    DepletedN,
    NeutralN,
}

impl Region {
    /// `[-x_p, 0)` is depleted p, `[0, x_n]` is depleted n.
    pub fn locate(geometry: &DepletionGeometry, x: f64) -> Region {
        if x < -geometry.x_p {
            Region::NeutralP
        } else if x < 0.0 {
            Region::DepletedP
        } else if x <= geometry.x_n {
            Region::DepletedN
        } else {
            Region::NeutralN
        }
    }
}

/// Space-charge density rho(x) [C/cm^3].
pub fn charge_density_profile(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    geometry: &DepletionGeometry,
    grid: &PositionGrid,
) -> SpatialProfile {
    let (q, na, nd) = (material.q, junction.na, junction.nd);
    SpatialProfile::sample("charge", ValueUnit::CoulombPerCm3, grid, |x| {
        match Region::locate(geometry, x) {
            Region::DepletedP => -q * na,
            Region::DepletedN => q * nd,
            Region::NeutralP | Region::NeutralN => 0.0,
        }
    })
}

/// Electric field E(x) [V/cm]: linear on each depleted side, zero at both
/// edges and extremal at the junction.
pub fn electric_field_profile(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    geometry: &DepletionGeometry,
    grid: &PositionGrid,
) -> SpatialProfile {
    let eps_s = material.eps_s();
    let (q, na, nd) = (material.q, junction.na, junction.nd);
    let (x_p, x_n) = (geometry.x_p, geometry.x_n);
    SpatialProfile::sample("field", ValueUnit::VoltPerCm, grid, |x| {
        match Region::locate(geometry, x) {
            Region::DepletedP => -q * na * (x + x_p) / eps_s,
            Region::DepletedN => -q * nd * (x_n - x) / eps_s,
            Region::NeutralP | Region::NeutralN => 0.0,
        }
    })
}

/// Electrostatic potential V(x) [V], referenced to 0 in the neutral p region
/// and reaching `V_bi - V_applied` in the neutral n region.
///
/// `bias` must be the bias `geometry` was derived for.
pub fn potential_profile(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    geometry: &DepletionGeometry,
    bias: &BiasCondition,
    grid: &PositionGrid,
) -> Result<SpatialProfile> {
    if geometry.bias != *bias {
        return Err(JunctionError::InvalidBias(format!(
            "geometry was derived at {} but potential requested at {}",
            geometry.bias.describe(),
            bias.describe()
        )));
    }

    let delta_v = geometry.built_in_potential - bias.v_applied();
    let two_eps_s = 2.0 * material.eps_s();
    let (q, na, nd) = (material.q, junction.na, junction.nd);
    let (x_p, x_n) = (geometry.x_p, geometry.x_n);

    Ok(SpatialProfile::sample("potential", ValueUnit::Volt, grid, |x| {
        match Region::locate(geometry, x) {
            Region::NeutralP => 0.0,
            Region::DepletedP => q * na * (x + x_p).powi(2) / two_eps_s,
            Region::DepletedN => delta_v - q * nd * (x_n - x).powi(2) / two_eps_s,
            Region::NeutralN => delta_v,
        }
    }))
}

/// Conduction and valence band edges derived from a potential profile.
#[derive(Debug, Clone, PartialEq)]
pub struct BandDiagram {
    pub conduction: SpatialProfile, // [eV]
    pub valence: SpatialProfile,    // [eV]
    /// Total band bending across the junction [eV].
    pub bending: f64,
}

/// `E_c(x) = -V(x)`, `E_v(x) = E_c(x) - E_g`, on the potential's grid.
///
/// The bending is `V_bi - V_applied` of `geometry`, whatever part of the
/// junction the grid covers.
pub fn band_profile(
    potential: &SpatialProfile,
    geometry: &DepletionGeometry,
    eg: f64,
) -> BandDiagram {
    let conduction = potential.map_values("conduction_band", ValueUnit::ElectronVolt, |v| -v);
    let valence = conduction.map_values("valence_band", ValueUnit::ElectronVolt, |ec| ec - eg);
    BandDiagram {
        conduction,
        valence,
        bending: geometry.potential_drop(),
    }
}

/// Equilibrium minority-carrier concentrations [cm^-3].
#[derive(Debug, Clone, PartialEq)]
pub struct MinorityCarriers {
    /// `n_p0 = n_i^2 / N_a` in the neutral p region, zero elsewhere.
    pub electrons_in_p: SpatialProfile,
    /// `p_n0 = n_i^2 / N_d` in the neutral n region, zero elsewhere.
    pub holes_in_n: SpatialProfile,
}

pub fn minority_concentrations(material: &MaterialParameters, junction: &JunctionSpec) -> (f64, f64) {
    let ni2 = material.ni * material.ni;
    (ni2 / junction.na, ni2 / junction.nd)
}

/// Minority carriers under the depletion approximation: flat outside the
/// space-charge region and exactly zero inside it.
pub fn minority_carrier_profile(
    material: &MaterialParameters,
    junction: &JunctionSpec,
    geometry: &DepletionGeometry,
    grid: &PositionGrid,
) -> MinorityCarriers {
    let (n_p0, p_n0) = minority_concentrations(material, junction);
    let electrons_in_p = SpatialProfile::sample("electrons_p", ValueUnit::PerCm3, grid, |x| {
        if x < -geometry.x_p { n_p0 } else { 0.0 }
    });
    let holes_in_n = SpatialProfile::sample("holes_n", ValueUnit::PerCm3, grid, |x| {
        if x > geometry.x_n { p_n0 } else { 0.0 }
    });
    MinorityCarriers {
        electrons_in_p,
        holes_in_n,
    }
}
