use crate::models::pn::electrostatics::CapacitancePoint;
use crate::models::pn::pn::{JunctionSolution, PnJunctionModel};
use crate::models::pn::profiles::minority_concentrations;
use crate::physics::units::{cm_to_um, f_to_nf, v_per_cm_to_v_per_um};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub struct JunctionSummary {
    // Material and doping
    pub na: f64,
    pub nd: f64,
    pub ni: f64,
    pub eps_s: f64,
    pub vt: f64,
    pub eg: f64,

    // Equilibrium results
    pub builtin_voltage: f64,
    pub n_p0: f64,
    pub p_n0: f64,

    // One row per solved bias
    pub biases: Vec<BiasRow>,

    // Capacitance sweep endpoints
    pub capacitance_range: Option<(CapacitancePoint, CapacitancePoint)>,
}

pub struct BiasRow {
    pub description: String,
    pub v_applied: f64,            // [V]
    pub width: f64,                // [cm]
    pub x_p: f64,                  // [cm]
    pub x_n: f64,                  // [cm]
    pub peak_field: f64,           // |E(0)| [V/cm]
    pub capacitance: Option<f64>, // [F/cm^2]
}

impl From<&JunctionSolution> for BiasRow {
    fn from(solution: &JunctionSolution) -> Self {
        Self {
            description: solution.bias.describe(),
            v_applied: solution.bias.v_applied(),
            width: solution.geometry.width,
            x_p: solution.geometry.x_p,
            x_n: solution.geometry.x_n,
            peak_field: solution.peak_field.magnitude,
            capacitance: solution.capacitance,
        }
    }
}

impl JunctionSummary {
    pub fn from_model(model: &PnJunctionModel) -> Self {
        let (n_p0, p_n0) = minority_concentrations(&model.material, &model.junction);
        Self {
            na: model.junction.na,
            nd: model.junction.nd,
            ni: model.material.ni,
            eps_s: model.material.eps_s(),
            vt: model.material.vt,
            eg: model.material.eg,
            builtin_voltage: model.built_in_potential(),
            n_p0,
            p_n0,
            biases: Vec::new(),
            capacitance_range: None,
        }
    }

    pub fn add_solution(&mut self, solution: &JunctionSolution) {
        self.biases.push(BiasRow::from(solution));
    }

    pub fn add_capacitance_sweep(&mut self, sweep: &[CapacitancePoint]) {
        if let (Some(first), Some(last)) = (sweep.first(), sweep.last()) {
            self.capacitance_range = Some((*first, *last));
        }
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        self.write_report(&mut file)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "PN JUNCTION DEPLETION SUMMARY")?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out)?;

        writeln!(out, "MATERIAL AND DOPING")?;
        writeln!(out, "{}", "-".repeat(60))?;
        writeln!(out, "N_a (p-side):        {:.3e} cm⁻³", self.na)?;
        writeln!(out, "N_d (n-side):        {:.3e} cm⁻³", self.nd)?;
        writeln!(out, "n_i:                 {:.3e} cm⁻³", self.ni)?;
        writeln!(out, "eps_s:               {:.4e} F/cm", self.eps_s)?;
        writeln!(out, "V_T:                 {:.4} V", self.vt)?;
        writeln!(out, "E_g:                 {:.3} eV", self.eg)?;
        writeln!(out)?;

        writeln!(out, "EQUILIBRIUM")?;
        writeln!(out, "{}", "-".repeat(60))?;
        writeln!(out, "Built-in potential:  {:.3} V", self.builtin_voltage)?;
        writeln!(out, "n_p0 (p-side):       {:.3e} cm⁻³", self.n_p0)?;
        writeln!(out, "p_n0 (n-side):       {:.3e} cm⁻³", self.p_n0)?;
        writeln!(out)?;

        for row in &self.biases {
            writeln!(out, "BIAS: {} (V_applied = {:+.3} V)", row.description, row.v_applied)?;
            writeln!(out, "{}", "-".repeat(60))?;
            writeln!(out, "Depletion width W:   {:.3} μm", cm_to_um(row.width))?;
            writeln!(out, "  x_p:               {:.3} μm", cm_to_um(row.x_p))?;
            writeln!(out, "  x_n:               {:.3} μm", cm_to_um(row.x_n))?;
            writeln!(
                out,
                "Max electric field:  {:.2} V/μm",
                v_per_cm_to_v_per_um(row.peak_field)
            )?;
            if let Some(c) = row.capacitance {
                writeln!(out, "Junction cap. C_j:   {:.2} nF/cm²", f_to_nf(c))?;
            }
            writeln!(out)?;
        }

        if let Some((first, last)) = &self.capacitance_range {
            writeln!(out, "CAPACITANCE SWEEP")?;
            writeln!(out, "{}", "-".repeat(60))?;
            writeln!(
                out,
                "C_j({:.1} V) = {:.2} nF/cm²",
                first.v_reverse,
                f_to_nf(first.capacitance)
            )?;
            writeln!(
                out,
                "C_j({:.1} V) = {:.2} nF/cm²",
                last.v_reverse,
                f_to_nf(last.capacitance)
            )?;
            writeln!(out)?;
        }

        writeln!(out, "{}", "=".repeat(60))?;

        Ok(())
    }

    pub fn print_to_console(&self) {
        println!("\n{}", "=".repeat(60));
        println!("JUNCTION SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Built-in V:    {:.3} V", self.builtin_voltage);
        for row in &self.biases {
            println!(
                "{:<14} W = {:.3} μm (x_p = {:.3}, x_n = {:.3}), E_max = {:.2} V/μm",
                format!("{}:", row.description),
                cm_to_um(row.width),
                cm_to_um(row.x_p),
                cm_to_um(row.x_n),
                v_per_cm_to_v_per_um(row.peak_field)
            );
        }
        if let Some((first, _)) = &self.capacitance_range {
            println!(
                "C_j({:.1} V):    {:.2} nF/cm²",
                first.v_reverse,
                f_to_nf(first.capacitance)
            );
        }
        println!("{}\n", "=".repeat(60));
    }
}
