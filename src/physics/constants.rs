//! Physical constants in the cm-based unit system used throughout the crate.
//!
//! Values match the rounded figures used for silicon at 300 K in the
//! reference junction calculations, not CODATA.

pub const ELEMENTARY_CHARGE: f64 = 1.602e-19; // [C]
pub const VACUUM_PERMITTIVITY: f64 = 8.85e-14; // [F/cm]

pub const SILICON_RELATIVE_PERMITTIVITY: f64 = 11.7;
pub const SILICON_INTRINSIC_CONCENTRATION: f64 = 1.5e10; // [cm^-3]
pub const SILICON_BANDGAP: f64 = 1.12; // [eV]

/// Thermal voltage k_B*T/q at 300 K, rounded as in textbook tables.
pub const THERMAL_VOLTAGE_300K: f64 = 0.0259; // [V]
