//! Unit conversions between the model's internal units and display units.
//!
//! Model quantities are always in cm, V/cm, C/cm^3 and F/cm^2. Conversions
//! to micrometers and friends happen here and nowhere else.

/// Centimeters per micrometer.
pub const CM_PER_UM: f64 = 1.0e-4;
/// Micrometers per centimeter.
pub const UM_PER_CM: f64 = 1.0e4;

pub fn cm_to_um(x_cm: f64) -> f64 {
    x_cm * UM_PER_CM
}

pub fn um_to_cm(x_um: f64) -> f64 {
    x_um * CM_PER_UM
}

/// A field in V/cm expressed in V/um.
pub fn v_per_cm_to_v_per_um(field: f64) -> f64 {
    field * CM_PER_UM
}

/// Capacitance per area, F/cm^2 to nF/cm^2.
pub fn f_to_nf(capacitance: f64) -> f64 {
    capacitance * 1.0e9
}

pub fn amp_to_milliamp(current: f64) -> f64 {
    current * 1.0e3
}

/// Unit of a position axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Centimeter,
    Micrometer,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Micrometer => "um",
        }
    }
}

/// Unit of the sampled quantity in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    CoulombPerCm3,
    VoltPerCm,
    VoltPerUm,
    Volt,
    ElectronVolt,
    PerCm3,
}

impl ValueUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            ValueUnit::CoulombPerCm3 => "C/cm^3",
            ValueUnit::VoltPerCm => "V/cm",
            ValueUnit::VoltPerUm => "V/um",
            ValueUnit::Volt => "V",
            ValueUnit::ElectronVolt => "eV",
            ValueUnit::PerCm3 => "cm^-3",
        }
    }

    /// Suffix usable in a CSV header.
    pub fn header_suffix(&self) -> &'static str {
        match self {
            ValueUnit::CoulombPerCm3 => "C_per_cm3",
            ValueUnit::VoltPerCm => "V_per_cm",
            ValueUnit::VoltPerUm => "V_per_um",
            ValueUnit::Volt => "V",
            ValueUnit::ElectronVolt => "eV",
            ValueUnit::PerCm3 => "per_cm3",
        }
    }

    /// Unit and scale factor after switching the length axis to micrometers.
    ///
    /// Only per-length quantities change. Volume densities stay per cm^3,
    /// which is how doping and charge are conventionally quoted.
    pub fn per_micrometer(self) -> (ValueUnit, f64) {
        match self {
            ValueUnit::VoltPerCm => (ValueUnit::VoltPerUm, CM_PER_UM),
            other => (other, 1.0),
        }
    }
}
