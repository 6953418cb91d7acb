use crate::physics::DepletionGeometry;
use crate::physics::units::um_to_cm;

/// Ordered sample positions along the junction axis [cm].
///
/// The metallurgical junction sits at 0, the p-side at negative positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGrid {
    positions: Vec<f64>,
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last sample so rounding never moves the far edge
            values[n - 1] = end;
            values
        }
    }
}

impl PositionGrid {
    /// Uniform grid over `[start, end]` in cm.
    pub fn uniform(start: f64, end: f64, samples: usize) -> Self {
        Self {
            positions: linspace(start, end, samples),
        }
    }

    /// Uniform grid over `[-x_p - padding, x_n + padding]`, padding in um.
    pub fn spanning(geometry: &DepletionGeometry, padding_um: f64, samples: usize) -> Self {
        let pad = um_to_cm(padding_um);
        Self::uniform(-geometry.x_p - pad, geometry.x_n + pad, samples)
    }

    /// Grid containing the exact region boundaries `-x_p`, `0` and `x_n`
    /// in addition to its own samples (those inside the span).
    pub fn with_boundaries(mut self, geometry: &DepletionGeometry) -> Self {
        let (lo, hi) = match (self.positions.first(), self.positions.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => return self,
        };
        for b in geometry.boundaries() {
            if b >= lo && b <= hi {
                self.positions.push(b);
            }
        }
        self.positions.sort_by(f64::total_cmp);
        self.positions.dedup();
        self
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().copied()
    }
}

impl From<Vec<f64>> for PositionGrid {
    fn from(mut positions: Vec<f64>) -> Self {
        positions.sort_by(f64::total_cmp);
        Self { positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::BiasCondition;

    // Unit-free lengths keep the sample positions exactly representable
    fn geometry() -> DepletionGeometry {
        DepletionGeometry {
            width: 3.0,
            x_p: 2.0,
            x_n: 1.0,
            built_in_potential: 0.7,
            bias: BiasCondition::equilibrium(),
        }
    }

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(-1.0, 1.0, 5);
        assert_eq!(v, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
    }

    #[test]
    fn spanning_grid_pads_in_micrometers() {
        let grid = PositionGrid::spanning(&geometry(), 1.0e4, 11);
        assert_eq!(grid.len(), 11);
        assert!((grid.positions()[0] + 3.0).abs() < 1e-12);
        assert!((grid.positions()[10] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn boundaries_are_inserted_once() {
        let grid = PositionGrid::uniform(-2.0, 1.0, 4).with_boundaries(&geometry());
        assert_eq!(grid.positions(), &[-2.0, -1.0, 0.0, 1.0]);

        let grid = PositionGrid::uniform(-3.0, 3.0, 4).with_boundaries(&geometry());
        assert_eq!(grid.positions(), &[-3.0, -2.0, -1.0, 0.0, 1.0, 3.0]);
    }

    #[test]
    fn boundaries_outside_the_span_are_skipped() {
        let grid = PositionGrid::uniform(0.25, 0.75, 3).with_boundaries(&geometry());
        assert_eq!(grid.positions(), &[0.25, 0.5, 0.75]);
    }
}
