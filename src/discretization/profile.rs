use super::grid::PositionGrid;
use crate::physics::units::{LengthUnit, UM_PER_CM, ValueUnit};
use nalgebra::DVector;

/// A quantity sampled along the junction axis.
///
/// Positions and values carry their units explicitly so conversions happen
/// once, through [`SpatialProfile::to_micrometers`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialProfile {
    pub label: &'static str,
    pub position_unit: LengthUnit,
    pub value_unit: ValueUnit,
    pub positions: DVector<f64>,
    pub values: DVector<f64>,
}

impl SpatialProfile {
    /// Evaluates `f` at every grid position. Positions are in cm.
    pub fn sample<F>(label: &'static str, unit: ValueUnit, grid: &PositionGrid, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let n = grid.len();
        Self {
            label,
            position_unit: LengthUnit::Centimeter,
            value_unit: unit,
            positions: DVector::from_iterator(n, grid.iter()),
            values: DVector::from_iterator(n, grid.iter().map(f)),
        }
    }

    /// Same positions, values mapped through `f`.
    pub fn map_values<F>(&self, label: &'static str, unit: ValueUnit, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            label,
            position_unit: self.position_unit,
            value_unit: unit,
            positions: self.positions.clone(),
            values: self.values.map(f),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// (position, value) pairs in order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at the sample whose position equals `x` exactly.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        self.samples().find(|&(p, _)| p == x).map(|(_, v)| v)
    }

    pub fn max_abs(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.amax()
        }
    }

    /// Column header for this profile's values, e.g. `field_V_per_um`.
    pub fn header(&self) -> String {
        format!("{}_{}", self.label, self.value_unit.header_suffix())
    }

    /// Positions in um, per-length values rescaled to match.
    pub fn to_micrometers(&self) -> Self {
        if self.position_unit == LengthUnit::Micrometer {
            return self.clone();
        }
        let (value_unit, scale) = self.value_unit.per_micrometer();
        Self {
            label: self.label,
            position_unit: LengthUnit::Micrometer,
            value_unit,
            positions: &self.positions * UM_PER_CM,
            values: &self.values * scale,
        }
    }
}
