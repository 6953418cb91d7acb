//! Analytic electrostatics of an abrupt PN junction under the depletion
//! approximation: built-in potential, depletion geometry, charge, field,
//! potential and band profiles, minority carriers, junction capacitance and
//! a piecewise diode I-V model.
//!
//! Model quantities are in cm, V/cm, C/cm^3 and F/cm^2. Display units are
//! produced only through [`physics::units`] and
//! [`discretization::SpatialProfile::to_micrometers`].

pub mod discretization;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod processing;
