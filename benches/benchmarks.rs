use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use depletion_rs::discretization::{PositionGrid, linspace};
use depletion_rs::models::pn::diode::DiodeModel;
use depletion_rs::models::pn::electrostatics::{capacitance_sweep, depletion_geometry};
use depletion_rs::models::pn::pn::{GridConfig, PnJunctionModel};
use depletion_rs::models::pn::profiles::{electric_field_profile, potential_profile};
use depletion_rs::physics::{BiasCondition, JunctionSpec, MaterialParameters};

fn grid_sizes() -> Vec<usize> {
    vec![1_000, 10_000, 100_000]
}

fn bench_geometry(c: &mut Criterion) {
    let si = MaterialParameters::silicon_300k();
    let junction = JunctionSpec::reference();
    let bias = BiasCondition::reverse(5.0).unwrap();
    c.bench_function("depletion_geometry", |b| {
        b.iter(|| {
            let g = depletion_geometry(&si, &junction, std::hint::black_box(&bias)).unwrap();
            std::hint::black_box(g);
        });
    });
}

fn bench_profiles(c: &mut Criterion) {
    let si = MaterialParameters::silicon_300k();
    let junction = JunctionSpec::reference();
    let bias = BiasCondition::equilibrium();
    let g = depletion_geometry(&si, &junction, &bias).unwrap();

    let mut group = c.benchmark_group("profiles");
    for &size in &grid_sizes() {
        let grid = PositionGrid::spanning(&g, 1.0, size).with_boundaries(&g);
        group.bench_with_input(BenchmarkId::new("field", size), &size, |b, &_| {
            b.iter(|| {
                let field = electric_field_profile(&si, &junction, &g, &grid);
                std::hint::black_box(field);
            });
        });
        group.bench_with_input(BenchmarkId::new("potential", size), &size, |b, &_| {
            b.iter(|| {
                let v = potential_profile(&si, &junction, &g, &bias, &grid).unwrap();
                std::hint::black_box(v);
            });
        });
    }
    group.finish();
}

fn bench_full_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &size in &grid_sizes() {
        let model = PnJunctionModel::reference().unwrap().with_grid(GridConfig {
            samples: size,
            ..GridConfig::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &_| {
            b.iter(|| {
                let sol = model.solve(&BiasCondition::equilibrium()).unwrap();
                std::hint::black_box(sol);
            });
        });
    }
    group.finish();
}

fn bench_sweeps(c: &mut Criterion) {
    let si = MaterialParameters::silicon_300k();
    let junction = JunctionSpec::reference();
    let voltages = linspace(0.0, 10.0, 100);
    c.bench_function("capacitance_sweep_100", |b| {
        b.iter(|| {
            let sweep = capacitance_sweep(&si, &junction, &voltages).unwrap();
            std::hint::black_box(sweep);
        });
    });

    let diode = DiodeModel::silicon();
    let diode_voltages = linspace(-1.0, 1.0, 1000);
    c.bench_function("diode_iv_1000", |b| {
        b.iter(|| {
            let curve = diode.iv_curve(&diode_voltages).unwrap();
            std::hint::black_box(curve);
        });
    });
}

criterion_group!(
    benches,
    bench_geometry,
    bench_profiles,
    bench_full_solution,
    bench_sweeps
);
criterion_main!(benches);
