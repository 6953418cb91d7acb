use approx::{assert_abs_diff_eq, assert_relative_eq};

use depletion_rs::discretization::PositionGrid;
use depletion_rs::models::pn::electrostatics::depletion_geometry;
use depletion_rs::models::pn::pn::PnJunctionModel;
use depletion_rs::models::pn::profiles::{
    band_profile, charge_density_profile, electric_field_profile, minority_carrier_profile,
    minority_concentrations, potential_profile,
};
use depletion_rs::numerics::quadrature::{step_integral, trapezoid};
use depletion_rs::physics::units::{LengthUnit, ValueUnit};
use depletion_rs::physics::{BiasCondition, DepletionGeometry, JunctionSpec, MaterialParameters};

fn setup(v_applied: f64) -> (MaterialParameters, JunctionSpec, BiasCondition, DepletionGeometry) {
    let si = MaterialParameters::silicon_300k();
    let junction = JunctionSpec::reference();
    let bias = BiasCondition::new(v_applied).unwrap();
    let geometry = depletion_geometry(&si, &junction, &bias).unwrap();
    (si, junction, bias, geometry)
}

fn biases() -> [f64; 4] {
    [-5.0, 0.0, 0.3, 0.5]
}

#[test]
fn charge_balances_over_depletion_region() {
    for v in biases() {
        let (si, junction, _, g) = setup(v);
        let grid = PositionGrid::spanning(&g, 0.5, 777).with_boundaries(&g);
        let rho = charge_density_profile(&si, &junction, &g, &grid);

        let negative = step_integral(&rho, -g.x_p, 0.0);
        let positive = step_integral(&rho, 0.0, g.x_n);
        let net = step_integral(&rho, -g.x_p, g.x_n);

        assert!(negative < 0.0 && positive > 0.0);
        assert_abs_diff_eq!(net, 0.0, epsilon = 1e-9 * positive);
        assert_relative_eq!(-negative, si.q * junction.na * g.x_p, max_relative = 1e-9);
    }
}

#[test]
fn charge_is_zero_outside_and_masked_by_exact_boundaries() {
    let (si, junction, _, g) = setup(0.0);
    // A coarse grid must still switch exactly at -x_p, 0 and x_n
    let grid = PositionGrid::spanning(&g, 0.5, 7).with_boundaries(&g);
    let rho = charge_density_profile(&si, &junction, &g, &grid);

    for (x, value) in rho.samples() {
        let expected = if x < -g.x_p || x > g.x_n {
            0.0
        } else if x < 0.0 {
            -si.q * junction.na
        } else {
            si.q * junction.nd
        };
        assert_eq!(value, expected, "at x = {x:e} cm");
    }
    assert_eq!(rho.value_at(-g.x_p), Some(-si.q * junction.na));
    assert_eq!(rho.value_at(g.x_n), Some(si.q * junction.nd));
}

#[test]
fn field_vanishes_at_edges_and_is_continuous_at_junction() {
    for v in biases() {
        let (si, junction, _, g) = setup(v);
        let grid = PositionGrid::spanning(&g, 0.2, 500).with_boundaries(&g);
        let field = electric_field_profile(&si, &junction, &g, &grid);

        let e_max = si.q * junction.na * g.x_p / si.eps_s();
        assert_abs_diff_eq!(field.value_at(-g.x_p).unwrap(), 0.0, epsilon = 1e-9 * e_max);
        assert_abs_diff_eq!(field.value_at(g.x_n).unwrap(), 0.0, epsilon = 1e-9 * e_max);

        // Left limit from the p-side formula, value at 0 from the n-side one
        let left_limit = -si.q * junction.na * g.x_p / si.eps_s();
        let at_zero = field.value_at(0.0).unwrap();
        assert_relative_eq!(at_zero, left_limit, max_relative = 1e-9);

        // Single extremum at the junction: falling on the p-side, rising on the n-side
        let most_negative = field.values.iter().copied().fold(f64::INFINITY, f64::min);
        assert_relative_eq!(most_negative, at_zero, max_relative = 1e-9);
        assert!(field.values.iter().all(|&e| e <= 0.0));
        let samples: Vec<(f64, f64)> = field.samples().collect();
        for pair in samples.windows(2) {
            let ((x0, e0), (x1, e1)) = (pair[0], pair[1]);
            if x0 >= -g.x_p && x1 < 0.0 {
                assert!(e1 < e0);
            } else if x0 >= 0.0 && x1 <= g.x_n {
                assert!(e1 > e0);
            }
        }
    }
}

#[test]
fn potential_is_anchored_continuous_and_monotone() {
    for v in biases() {
        let (si, junction, bias, g) = setup(v);
        let grid = PositionGrid::spanning(&g, 1.0, 1000).with_boundaries(&g);
        let potential = potential_profile(&si, &junction, &g, &bias, &grid).unwrap();
        let delta_v = g.built_in_potential - v;

        assert_eq!(potential.value_at(-g.x_p), Some(0.0));
        assert_abs_diff_eq!(potential.value_at(g.x_n).unwrap(), delta_v, epsilon = 1e-12);
        assert_eq!(potential.values[0], 0.0);
        assert_eq!(potential.values[potential.len() - 1], delta_v);

        for pair in potential.values.as_slice().windows(2) {
            assert!(pair[1] >= pair[0], "potential decreased at bias {v} V");
        }

        // Continuity at 0: p-side quadratic evaluated at 0 equals the n-side value
        let p_side_at_zero = si.q * junction.na * g.x_p.powi(2) / (2.0 * si.eps_s());
        assert_relative_eq!(potential.value_at(0.0).unwrap(), p_side_at_zero, max_relative = 1e-9);

        // Largest step between neighbours shrinks with spacing: no jump anywhere
        let spacing = (g.width + 2.0e-4) / 999.0;
        let e_max = si.q * junction.na * g.x_p / si.eps_s();
        for pair in potential.values.as_slice().windows(2) {
            assert!(pair[1] - pair[0] <= e_max * spacing * (1.0 + 1e-9));
        }
    }
}

#[test]
fn potential_drop_equals_field_integral() {
    for v in biases() {
        let (si, junction, bias, g) = setup(v);
        let grid = PositionGrid::uniform(-g.x_p, g.x_n, 400).with_boundaries(&g);
        let field = electric_field_profile(&si, &junction, &g, &grid);
        let potential = potential_profile(&si, &junction, &g, &bias, &grid).unwrap();

        // E = -dV/dx, so V(x_n) - V(-x_p) = -integral of E
        let drop = -trapezoid(&field, -g.x_p, g.x_n);
        assert_relative_eq!(drop, g.potential_drop(), max_relative = 1e-9);
        assert_relative_eq!(
            drop,
            potential.value_at(g.x_n).unwrap() - potential.value_at(-g.x_p).unwrap(),
            max_relative = 1e-9
        );
    }
}

#[test]
fn bands_follow_potential() {
    let (si, junction, bias, g) = setup(0.5);
    let grid = PositionGrid::spanning(&g, 0.5, 300);
    let potential = potential_profile(&si, &junction, &g, &bias, &grid).unwrap();
    let bands = band_profile(&potential, &g, si.eg);

    for ((v, ec), ev) in potential
        .values
        .iter()
        .zip(bands.conduction.values.iter())
        .zip(bands.valence.values.iter())
    {
        assert_eq!(*ec, -v);
        assert_abs_diff_eq!(*ev, -v - 1.12, epsilon = 1e-12);
    }
    assert_relative_eq!(bands.bending, g.built_in_potential - 0.5, max_relative = 1e-12);
    assert_eq!(bands.conduction.value_unit, ValueUnit::ElectronVolt);
}

#[test]
fn minority_carriers_at_equilibrium() {
    let (si, junction, _, g) = setup(0.0);
    let (n_p0, p_n0) = minority_concentrations(&si, &junction);
    assert_relative_eq!(n_p0, 1.125e5, max_relative = 1e-12);
    assert_relative_eq!(p_n0, 2.25e4, max_relative = 1e-12);

    let grid = PositionGrid::spanning(&g, 0.5, 1000).with_boundaries(&g);
    let carriers = minority_carrier_profile(&si, &junction, &g, &grid);

    for ((x, n), (_, p)) in carriers
        .electrons_in_p
        .samples()
        .zip(carriers.holes_in_n.samples())
    {
        if g.contains(x) {
            assert_eq!(n, 0.0, "electrons inside depletion at {x:e}");
            assert_eq!(p, 0.0, "holes inside depletion at {x:e}");
        } else if x < -g.x_p {
            assert_eq!(n, n_p0);
            assert_eq!(p, 0.0);
        } else if x > g.x_n {
            assert_eq!(n, 0.0);
            assert_eq!(p, p_n0);
        }
    }
}

#[test]
fn solution_converts_to_micrometers_consistently() {
    let model = PnJunctionModel::reference().unwrap();
    let sol = model.solve(&BiasCondition::equilibrium()).unwrap();

    let field_um = sol.field.to_micrometers();
    assert_eq!(field_um.position_unit, LengthUnit::Micrometer);
    assert_eq!(field_um.value_unit, ValueUnit::VoltPerUm);
    assert_relative_eq!(field_um.positions[0], -0.593, max_relative = 1e-2);
    assert_relative_eq!(field_um.max_abs(), 1.835, max_relative = 1e-3);

    // Charge stays per cm^3 regardless of the position axis
    let charge_um = sol.charge.to_micrometers();
    assert_eq!(charge_um.values, sol.charge.values);
    assert_eq!(charge_um.value_unit, ValueUnit::CoulombPerCm3);
}
