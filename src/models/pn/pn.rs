use super::electrostatics::{
    PeakField, built_in_potential, depletion_geometry, junction_capacitance, peak_field,
};
use super::profiles::{
    BandDiagram, MinorityCarriers, band_profile, charge_density_profile, electric_field_profile,
    minority_carrier_profile, potential_profile,
};
use crate::discretization::{PositionGrid, SpatialProfile};
use crate::physics::{
    BiasCondition, DepletionGeometry, JunctionError, JunctionSpec, MaterialParameters, Result,
};

/// Sampling of the position axis for each family of profiles.
///
/// Charge density and field are sampled exactly over `[-x_p, x_n]`; the
/// other profiles extend into the neutral regions by a padding in um.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub samples: usize,
    pub potential_padding_um: f64,
    pub band_padding_um: f64,
    pub carrier_padding_um: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            potential_padding_um: 1.0,
            band_padding_um: 0.5,
            carrier_padding_um: 0.5,
        }
    }
}

impl GridConfig {
    /// Every profile needs at least its two end points, and paddings must be
    /// finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(JunctionError::InvalidGrid(format!(
                "at least 2 samples per profile are required, got {}",
                self.samples
            )));
        }
        let paddings = [
            ("potential", self.potential_padding_um),
            ("band", self.band_padding_um),
            ("carrier", self.carrier_padding_um),
        ];
        for (name, padding) in paddings {
            if !padding.is_finite() || padding < 0.0 {
                return Err(JunctionError::InvalidGrid(format!(
                    "{name} padding must be finite and non-negative, got {padding} um"
                )));
            }
        }
        Ok(())
    }

    fn grid(&self, geometry: &DepletionGeometry, padding_um: f64) -> PositionGrid {
        PositionGrid::spanning(geometry, padding_um, self.samples).with_boundaries(geometry)
    }
}

/// Everything the model produces for one bias. Lengths in cm.
#[derive(Debug, Clone)]
pub struct JunctionSolution {
    pub bias: BiasCondition,
    pub geometry: DepletionGeometry,
    pub peak_field: PeakField,
    /// Only defined at zero or reverse bias [F/cm^2].
    pub capacitance: Option<f64>,
    pub charge: SpatialProfile,
    pub field: SpatialProfile,
    pub potential: SpatialProfile,
    pub bands: BandDiagram,
    pub minority: MinorityCarriers,
}

impl JunctionSolution {
    pub fn built_in_potential(&self) -> f64 {
        self.geometry.built_in_potential
    }
}

/// A validated junction (material plus doping) ready to be solved at any bias.
#[derive(Debug, Clone)]
pub struct PnJunctionModel {
    pub material: MaterialParameters,
    pub junction: JunctionSpec,
    pub grid: GridConfig,
    v_bi: f64,
}

impl PnJunctionModel {
    /// Fails if the doping cannot produce a positive built-in potential.
    pub fn new(material: MaterialParameters, junction: JunctionSpec) -> Result<Self> {
        let v_bi = built_in_potential(&material, &junction)?;
        tracing::info!(
            na = junction.na,
            nd = junction.nd,
            ni = material.ni,
            v_bi,
            "junction configured"
        );
        Ok(Self {
            material,
            junction,
            grid: GridConfig::default(),
            v_bi,
        })
    }

    /// Silicon at 300 K with N_a = 2e15 cm^-3 and N_d = 1e16 cm^-3.
    pub fn reference() -> Result<Self> {
        Self::new(MaterialParameters::silicon_300k(), JunctionSpec::reference())
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn built_in_potential(&self) -> f64 {
        self.v_bi
    }

    pub fn geometry(&self, bias: &BiasCondition) -> Result<DepletionGeometry> {
        depletion_geometry(&self.material, &self.junction, bias)
    }

    pub fn capacitance(&self, v_reverse: f64) -> Result<f64> {
        junction_capacitance(&self.material, &self.junction, v_reverse)
    }

    /// Geometry, scalars and every profile at `bias`.
    pub fn solve(&self, bias: &BiasCondition) -> Result<JunctionSolution> {
        self.grid.validate()?;
        let (material, junction) = (&self.material, &self.junction);
        let geometry = self.geometry(bias)?;

        let core = PositionGrid::uniform(-geometry.x_p, geometry.x_n, self.grid.samples)
            .with_boundaries(&geometry);
        let charge = charge_density_profile(material, junction, &geometry, &core);
        let field = electric_field_profile(material, junction, &geometry, &core);

        let potential_grid = self.grid.grid(&geometry, self.grid.potential_padding_um);
        let potential = potential_profile(material, junction, &geometry, bias, &potential_grid)?;

        let band_grid = self.grid.grid(&geometry, self.grid.band_padding_um);
        let band_potential = potential_profile(material, junction, &geometry, bias, &band_grid)?;
        let bands = band_profile(&band_potential, &geometry, material.eg);

        let carrier_grid = self.grid.grid(&geometry, self.grid.carrier_padding_um);
        let minority = minority_carrier_profile(material, junction, &geometry, &carrier_grid);

        let capacitance = if bias.v_applied() <= 0.0 {
            Some(material.eps_s() / geometry.width)
        } else {
            None
        };

        tracing::info!(
            bias = %bias.describe(),
            width_um = geometry.width_um(),
            "solved junction"
        );

        Ok(JunctionSolution {
            bias: *bias,
            geometry,
            peak_field: peak_field(material, junction, &geometry),
            capacitance,
            charge,
            field,
            potential,
            bands,
            minority,
        })
    }
}
