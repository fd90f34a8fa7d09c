use cryomech::base::linear_temperature_profile;
use cryomech::prelude::*;
use cryomech::StrError;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "cryomech_column",
    about = "Runs the material point kernel over a transient soil column"
)]
struct Options {
    /// Site data file (JSON) with parameters and environment tables
    site_file: String,

    /// Output file (JSON)
    #[structopt(long, default_value = "/tmp/cryomech/column.json")]
    out_file: String,

    /// Number of cells in the column (one integration point each)
    #[structopt(long, default_value = "20")]
    n_cells: usize,

    /// Number of time steps
    #[structopt(long, default_value = "120")]
    n_steps: usize,

    /// Time step size
    #[structopt(long, default_value = "86400.0")]
    dt: f64,

    /// Height of the top of the column
    #[structopt(long, default_value = "0.0")]
    z_top: f64,

    /// Height of the bottom of the column
    #[structopt(long, default_value = "-10.0")]
    z_bottom: f64,

    /// Initial surface temperature
    #[structopt(long, default_value = "274.0")]
    temp_top_ini: f64,

    /// Final surface temperature (reached at the end of the run)
    #[structopt(long, default_value = "263.0")]
    temp_top_fin: f64,

    /// Temperature at the bottom of the column (held fixed)
    #[structopt(long, default_value = "272.0")]
    temp_bottom: f64,

    /// Elastic (Young's) modulus
    #[structopt(long, default_value = "9e9")]
    young: f64,

    /// Poisson's ratio
    #[structopt(long, default_value = "0.325")]
    poisson: f64,

    /// Hardening modulus
    #[structopt(long, default_value = "1e8")]
    hardening: f64,

    /// Yield strength of the fully frozen material
    #[structopt(long, default_value = "25e6")]
    yield_strength: f64,
}

/// Holds the time series written to the output file
#[derive(Serialize)]
struct ColumnResults {
    /// Cell-center heights
    heights: Vec<f64>,

    /// Time at each output step
    times: Vec<f64>,

    /// Temperature per step per cell
    temperature: Vec<Vec<f64>>,

    /// Ice saturation per step per cell
    ice_saturation: Vec<Vec<f64>>,

    /// Effective density per step per cell
    density: Vec<Vec<f64>>,

    /// Thermal inertia per step per cell
    thermal_inertia: Vec<Vec<f64>>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load the site data and build the tables
    let data = SiteData::read_json(&options.site_file)?;
    let tables = data.build_tables()?;
    let config = Config::new();
    let updater = StateUpdater::new(&config, &data.param, tables)?;

    // cell-center heights, top first
    let dz = (options.z_top - options.z_bottom) / (options.n_cells as f64);
    let heights: Vec<f64> = (0..options.n_cells)
        .map(|i| options.z_top - dz * (i as f64 + 0.5))
        .collect();

    // initial and final temperature profiles (checked for degenerate input)
    let profile_ini = linear_temperature_profile(
        &heights,
        options.z_bottom,
        options.z_top,
        options.temp_bottom,
        options.temp_top_ini,
    )?;
    let profile_fin = linear_temperature_profile(
        &heights,
        options.z_bottom,
        options.z_top,
        options.temp_bottom,
        options.temp_top_fin,
    )?;

    // workset: one integration point per cell, no mechanical loading
    let mut workset = Workset::<f64>::new(options.n_cells, 1, 3, options.temp_bottom, data.param.ice_saturation_init)?;
    for k in 0..options.n_cells {
        workset.height[k] = heights[k];
        workset.temperature[k] = profile_ini[k];
        workset.elastic_modulus[k] = options.young;
        workset.poissons_ratio[k] = options.poisson;
        workset.hardening_modulus[k] = options.hardening;
        workset.yield_strength[k] = options.yield_strength;
        workset.states[k].temperature = profile_ini[k];
    }
    // the topmost cell sits on the erodible boundary
    workset.boundary_cell[0] = true;

    // time loop: the temperature field ramps between the two profiles
    let mut results = ColumnResults {
        heights: heights.clone(),
        times: Vec::new(),
        temperature: Vec::new(),
        ice_saturation: Vec::new(),
        density: Vec::new(),
        thermal_inertia: Vec::new(),
    };
    let mut n_non_converged = 0;
    for step in 1..=options.n_steps {
        let time = options.dt * (step as f64);
        let ramp = (step as f64) / (options.n_steps as f64);
        for k in 0..options.n_cells {
            workset.temperature[k] = profile_ini[k] + ramp * (profile_fin[k] - profile_ini[k]);
        }
        let report = workset.update(&updater, time, options.dt)?;
        if !report.all_converged() {
            for (cell, point) in &report.non_converged {
                println!("step {}: local solve failed at cell {} point {}", step, cell, point);
            }
            n_non_converged += report.non_converged.len();
        }
        results.times.push(time);
        results.temperature.push(workset.temperature.clone());
        results
            .ice_saturation
            .push(collect(&workset, |out| out.ice_saturation));
        results.density.push(collect(&workset, |out| out.density));
        results
            .thermal_inertia
            .push(collect(&workset, |out| out.thermal_inertia));
    }

    // write the results
    let path = Path::new(&options.out_file).to_path_buf();
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p).map_err(|_| "cannot create output directory")?;
    }
    let file = File::create(&path).map_err(|_| "cannot create output file")?;
    serde_json::to_writer_pretty(file, &results).map_err(|_| "cannot write output file")?;

    // message
    let frozen = results
        .ice_saturation
        .last()
        .map(|row| row.iter().filter(|&&s| s > 0.5).count())
        .unwrap_or(0);
    let thin_line = format!("{:─^1$}", "", options.out_file.len());
    println!("\n{}", thin_line);
    println!("{} steps done; {} of {} cells frozen at the end", options.n_steps, frozen, options.n_cells);
    if n_non_converged > 0 {
        println!("WARNING: {} local solves did not converge", n_non_converged);
    }
    println!("results written to:");
    println!("{}", options.out_file);
    println!("{}\n", thin_line);
    Ok(())
}

/// Extracts one output field over all cells (NaN marks a failed solve)
fn collect(workset: &Workset<f64>, f: impl Fn(&PointOutput<f64>) -> f64) -> Vec<f64> {
    workset
        .outputs
        .iter()
        .map(|slot| match slot {
            Some(out) => f(out),
            None => f64::NAN,
        })
        .collect()
}
