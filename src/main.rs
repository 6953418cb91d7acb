use clap::{Parser, Subcommand};
use depletion_rs::discretization::linspace;
use depletion_rs::models::pn::diode::DiodeModel;
use depletion_rs::models::pn::electrostatics::{CapacitancePoint, capacitance_sweep};
use depletion_rs::models::pn::pn::{GridConfig, JunctionSolution, PnJunctionModel};
use depletion_rs::physics::units::{amp_to_milliamp, cm_to_um, f_to_nf, v_per_cm_to_v_per_um};
use depletion_rs::physics::{BiasCondition, JunctionSpec, MaterialParameters};
use depletion_rs::processing::csv_writer;
use depletion_rs::processing::summary::JunctionSummary;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

type CliResult = Result<(), Box<dyn Error>>;

/// Depletion-approximation electrostatics of an abrupt silicon PN junction.
///
/// Writes CSV data for plotting; positions are in um.
#[derive(Parser)]
#[command(name = "depletion", version)]
struct Cli {
    /// Acceptor concentration on the p-side [cm^-3]
    #[arg(long, global = true, default_value_t = 2.0e15)]
    na: f64,

    /// Donor concentration on the n-side [cm^-3]
    #[arg(long, global = true, default_value_t = 1.0e16)]
    nd: f64,

    /// Samples per profile
    #[arg(long, global = true, default_value_t = 1000)]
    samples: usize,

    /// Directory for CSV and summary output
    #[arg(long, global = true, default_value = "output")]
    output_dir: PathBuf,

    /// Only write files: no progress lines and no console summary
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Space-charge density at zero bias
    Charge,
    /// Electric field at zero bias
    Field,
    /// Electrostatic potential at zero bias
    Potential,
    /// Conduction and valence band edges
    Bands {
        /// Applied voltage, forward positive [V]
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        bias: f64,
    },
    /// Equilibrium minority-carrier concentrations
    Minority,
    /// Junction capacitance versus reverse bias
    Capacitance {
        /// Largest reverse voltage [V]
        #[arg(long, default_value_t = 10.0)]
        max_reverse: f64,
        #[arg(long, default_value_t = 100)]
        points: usize,
    },
    /// Clamped diode I-V curves for silicon and germanium
    Diode {
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0)]
        max: f64,
        #[arg(long, default_value_t = 1000)]
        points: usize,
    },
    /// Every profile, bands at 0 / +0.5 / -5 V, capacitance, diode curves and a summary
    All,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Where results go and whether progress lines are printed.
struct Output<'a> {
    dir: &'a Path,
    quiet: bool,
}

impl Output<'_> {
    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn note(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

fn run(cli: &Cli) -> CliResult {
    fs::create_dir_all(&cli.output_dir)?;

    let junction = JunctionSpec::new(cli.na, cli.nd)?;
    let grid = GridConfig {
        samples: cli.samples,
        ..GridConfig::default()
    };
    let model = PnJunctionModel::new(MaterialParameters::silicon_300k(), junction)?.with_grid(grid);
    let out = Output {
        dir: cli.output_dir.as_path(),
        quiet: cli.quiet,
    };

    out.note(format_args!(
        "Built-in Potential (V_bi): {:.3} V",
        model.built_in_potential()
    ));

    match &cli.command {
        Command::Charge => save_charge(&out, &equilibrium(&model)?),
        Command::Field => save_field(&out, &equilibrium(&model)?),
        Command::Potential => save_potential(&out, &equilibrium(&model)?),
        Command::Bands { bias } => {
            let solution = model.solve(&BiasCondition::new(*bias)?)?;
            save_bands(&out, &solution)
        }
        Command::Minority => save_minority(&out, &equilibrium(&model)?),
        Command::Capacitance {
            max_reverse,
            points,
        } => {
            let sweep = capacitance_sweep(
                &model.material,
                &model.junction,
                &linspace(0.0, *max_reverse, *points),
            )?;
            save_capacitance(&out, &sweep)
        }
        Command::Diode { min, max, points } => {
            save_diode_curves(&out, &linspace(*min, *max, *points))
        }
        Command::All => run_all(&out, &model),
    }
}

fn equilibrium(model: &PnJunctionModel) -> Result<JunctionSolution, Box<dyn Error>> {
    Ok(model.solve(&BiasCondition::equilibrium())?)
}

fn run_all(out: &Output, model: &PnJunctionModel) -> CliResult {
    let mut summary = JunctionSummary::from_model(model);

    let eq = equilibrium(model)?;
    save_charge(out, &eq)?;
    save_field(out, &eq)?;
    save_potential(out, &eq)?;
    save_minority(out, &eq)?;
    save_bands(out, &eq)?;
    summary.add_solution(&eq);

    for bias in [BiasCondition::forward(0.5)?, BiasCondition::reverse(5.0)?] {
        match model.solve(&bias) {
            Ok(solution) => {
                save_bands(out, &solution)?;
                summary.add_solution(&solution);
            }
            // A lightly doped junction can have V_bi below 0.5 V
            Err(e) => eprintln!("Skipping {}: {e}", bias.describe()),
        }
    }

    let sweep = capacitance_sweep(&model.material, &model.junction, &linspace(0.0, 10.0, 100))?;
    save_capacitance(out, &sweep)?;
    summary.add_capacitance_sweep(&sweep);

    save_diode_curves(out, &linspace(-1.0, 1.0, 1000))?;

    let summary_path = out.path("junction_summary.txt");
    summary.write_to_file(&summary_path)?;
    if !out.quiet {
        summary.print_to_console();
    }
    out.note(format_args!("Summary saved to {}", summary_path.display()));
    Ok(())
}

fn save_charge(out: &Output, solution: &JunctionSolution) -> CliResult {
    let path = out.path("charge_density.csv");
    csv_writer::write_profiles(&path, &[&solution.charge.to_micrometers()])?;
    out.note(format_args!(
        "Charge density saved to {} (W = {:.3} um)",
        path.display(),
        solution.geometry.width_um()
    ));
    Ok(())
}

fn save_field(out: &Output, solution: &JunctionSolution) -> CliResult {
    let path = out.path("electric_field.csv");
    csv_writer::write_profiles(&path, &[&solution.field.to_micrometers()])?;
    out.note(format_args!(
        "Electric field saved to {} (|E_max| = {:.2} V/um)",
        path.display(),
        v_per_cm_to_v_per_um(solution.peak_field.magnitude)
    ));
    Ok(())
}

fn save_potential(out: &Output, solution: &JunctionSolution) -> CliResult {
    let path = out.path("potential.csv");
    csv_writer::write_profiles(&path, &[&solution.potential.to_micrometers()])?;
    out.note(format_args!(
        "Potential saved to {} (dV = {:.3} V)",
        path.display(),
        solution.geometry.potential_drop()
    ));
    Ok(())
}

fn save_bands(out: &Output, solution: &JunctionSolution) -> CliResult {
    let v = solution.bias.v_applied();
    let name = if v > 0.0 {
        format!("band_diagram_forward_{v:.2}V.csv")
    } else if v < 0.0 {
        format!("band_diagram_reverse_{:.2}V.csv", -v)
    } else {
        "band_diagram_zero_bias.csv".to_string()
    };
    let path = out.path(&name);
    let conduction = solution.bands.conduction.to_micrometers();
    let valence = solution.bands.valence.to_micrometers();
    csv_writer::write_profiles(&path, &[&conduction, &valence])?;
    out.note(format_args!(
        "Band diagram ({}) saved to {} (bending = {:.3} eV)",
        solution.bias.describe(),
        path.display(),
        solution.bands.bending
    ));
    Ok(())
}

fn save_minority(out: &Output, solution: &JunctionSolution) -> CliResult {
    let path = out.path("minority_carriers.csv");
    let electrons = solution.minority.electrons_in_p.to_micrometers();
    let holes = solution.minority.holes_in_n.to_micrometers();
    csv_writer::write_profiles(&path, &[&electrons, &holes])?;
    out.note(format_args!("Minority carriers saved to {}", path.display()));
    Ok(())
}

fn save_capacitance(out: &Output, sweep: &[CapacitancePoint]) -> CliResult {
    let v_reverse: Vec<f64> = sweep.iter().map(|p| p.v_reverse).collect();

    let path = out.path("capacitance_reverse_bias.csv");
    let capacitance: Vec<f64> = sweep.iter().map(|p| f_to_nf(p.capacitance)).collect();
    csv_writer::write_xy(
        &path,
        "v_reverse_V",
        "capacitance_nF_per_cm2",
        &v_reverse,
        &capacitance,
    )?;
    out.note(format_args!("Capacitance sweep saved to {}", path.display()));

    let path = out.path("depletion_width_reverse_bias.csv");
    let width: Vec<f64> = sweep.iter().map(|p| cm_to_um(p.width)).collect();
    csv_writer::write_xy(&path, "v_reverse_V", "width_um", &v_reverse, &width)?;
    out.note(format_args!("Depletion width sweep saved to {}", path.display()));
    Ok(())
}

fn save_diode_curves(out: &Output, voltages: &[f64]) -> CliResult {
    let si = DiodeModel::silicon().iv_curve(voltages)?;
    let ge = DiodeModel::germanium().iv_curve(voltages)?;
    let path = out.path("diode_iv.csv");
    csv_writer::write_csv(
        &path,
        &["v_V", "silicon_current_mA", "germanium_current_mA"],
        &[
            voltages.to_vec(),
            si.iter().map(|&(_, i)| amp_to_milliamp(i)).collect(),
            ge.iter().map(|&(_, i)| amp_to_milliamp(i)).collect(),
        ],
    )?;
    out.note(format_args!("Diode I-V curves saved to {}", path.display()));
    Ok(())
}
