use super::constants::{
    ELEMENTARY_CHARGE, SILICON_BANDGAP, SILICON_INTRINSIC_CONCENTRATION,
    SILICON_RELATIVE_PERMITTIVITY, THERMAL_VOLTAGE_300K, VACUUM_PERMITTIVITY,
};
use super::error::{JunctionError, Result};

/// Constants describing one semiconductor at a fixed temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParameters {
    pub q: f64,     // Elementary charge [C]
    pub eps_0: f64, // Vacuum permittivity [F/cm]
    pub eps_r: f64, // Relative permittivity
    pub ni: f64,    // Intrinsic carrier concentration [cm^-3]
    pub eg: f64,    // Bandgap [eV]
    pub vt: f64,    // Thermal voltage [V]
}

impl MaterialParameters {
    pub fn new(q: f64, eps_0: f64, eps_r: f64, ni: f64, eg: f64, vt: f64) -> Result<Self> {
        let material = Self {
            q,
            eps_0,
            eps_r,
            ni,
            eg,
            vt,
        };
        material.validate()?;
        Ok(material)
    }

    /// Silicon at 300 K.
    pub const fn silicon_300k() -> Self {
        Self {
            q: ELEMENTARY_CHARGE,
            eps_0: VACUUM_PERMITTIVITY,
            eps_r: SILICON_RELATIVE_PERMITTIVITY,
            ni: SILICON_INTRINSIC_CONCENTRATION,
            eg: SILICON_BANDGAP,
            vt: THERMAL_VOLTAGE_300K,
        }
    }

    /// Semiconductor permittivity `eps_r * eps_0` [F/cm].
    pub fn eps_s(&self) -> f64 {
        self.eps_r * self.eps_0
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("q", self.q),
            ("eps_0", self.eps_0),
            ("eps_r", self.eps_r),
            ("n_i", self.ni),
            ("E_g", self.eg),
            ("V_T", self.vt),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(JunctionError::InvalidMaterial(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MaterialParameters {
    fn default() -> Self {
        Self::silicon_300k()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silicon_permittivity() {
        let si = MaterialParameters::silicon_300k();
        assert!((si.eps_s() - 11.7 * 8.85e-14).abs() < 1e-20);
        assert!(si.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_constants() {
        let err = MaterialParameters::new(1.602e-19, 8.85e-14, 11.7, 0.0, 1.12, 0.0259);
        assert!(matches!(err, Err(JunctionError::InvalidMaterial(_))));

        let err = MaterialParameters::new(1.602e-19, f64::NAN, 11.7, 1.5e10, 1.12, 0.0259);
        assert!(matches!(err, Err(JunctionError::InvalidMaterial(_))));
    }
}
