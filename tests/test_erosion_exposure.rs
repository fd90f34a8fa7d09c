use cryomech::prelude::*;
use russell_lab::approx_eq;

// Erosion exposure of a coastal bluff column
//
// A one-cell-wide column sits with its top cell on the erodible boundary.
// The sea level rises over time; once the boundary cell is submerged its
// exposure clock accumulates and rolls over at the critical exposure time.
//
// TEST GOAL
//
// Verifies the time-interpolated sea level, the exposure accumulation and
// rollover, and both rollover policies.
//
// CONFIGURATION AND PARAMETERS
//
// * erosion rate 0.5, element size 1.0 → critical exposure time 2.0
// * sea level rises linearly from -2 to 0 over 10 time units

fn new_workset() -> Workset<f64> {
    let mut workset = Workset::<f64>::new(3, 1, 3, 200.0, 1.0).unwrap();
    for k in 0..3 {
        workset.height[k] = -(k as f64) - 0.5; // -0.5, -1.5, -2.5
        workset.elastic_modulus[k] = 9.0e9;
        workset.poissons_ratio[k] = 0.325;
        workset.hardening_modulus[k] = 1.0e8;
        workset.yield_strength[k] = 25.0e6;
    }
    workset.boundary_cell[0] = true;
    workset
}

fn new_updater(policy: ErosionFailure) -> Result<StateUpdater, StrError> {
    let mut data = SiteData::new(SampleParams::param_permafrost_erodible());
    data.time = vec![0.0, 10.0];
    data.sea_level = vec![-2.0, 0.0];
    let tables = data.build_tables()?;
    let mut config = Config::new();
    config.set_erosion_failure(policy)?;
    StateUpdater::new(&config, &data.param, tables)
}

#[test]
fn test_exposure_waits_for_the_sea_level() -> Result<(), StrError> {
    let updater = new_updater(ErosionFailure::Ignore)?;
    let mut workset = new_workset();
    // t = 0: sea level -2.0, the boundary cell at -0.5 is dry
    workset.update(&updater, 0.0, 1.0)?;
    assert_eq!(workset.cell_failure[0].exposure_time, 0.0);
    // t = 8: sea level -0.4, the boundary cell is submerged
    workset.update(&updater, 8.0, 1.0)?;
    approx_eq(workset.cell_failure[0].exposure_time, 1.0, 1e-15);
    // interior cells never accumulate, submerged or not
    assert_eq!(workset.cell_failure[1].exposure_time, 0.0);
    assert_eq!(workset.cell_failure[2].exposure_time, 0.0);
    Ok(())
}

#[test]
fn test_rollover_policies() -> Result<(), StrError> {
    // default policy: the clock resets, the indicator stays untouched
    let updater = new_updater(ErosionFailure::Ignore)?;
    let mut workset = new_workset();
    workset.update(&updater, 8.0, 1.0)?;
    workset.update(&updater, 9.0, 1.0)?; // reaches 2.0: rollover
    assert_eq!(workset.cell_failure[0].exposure_time, 0.0);
    assert_eq!(workset.cell_failure[0].failed, 0.0);

    // alternative policy: the rollover marks the cell as failed
    let updater = new_updater(ErosionFailure::MarkFailed)?;
    let mut workset = new_workset();
    workset.update(&updater, 8.0, 1.0)?;
    workset.update(&updater, 9.0, 1.0)?;
    assert_eq!(workset.cell_failure[0].exposure_time, 0.0);
    assert_eq!(workset.cell_failure[0].failed, 1.0);
    Ok(())
}

#[test]
fn test_sample_site_file_loads() -> Result<(), StrError> {
    let data = SiteData::read_json("data/sample_site.json")?;
    let tables = data.build_tables()?;
    assert!(tables.sea_level.is_some());
    assert!(tables.salinity.is_some());
    assert!(tables.porosity.is_some());
    assert!(tables.curve_width.is_some());
    assert!(tables.ocean_salinity.is_some());
    let updater = StateUpdater::new(&Config::new(), &data.param, tables)?;
    // the depth tables drive the point properties
    approx_eq(updater.porosity_at(0.0), 0.4, 1e-15);
    approx_eq(updater.porosity_at(-10.0), 0.3, 1e-15);
    assert!(updater.salinity_at(-10.0) > updater.salinity_at(0.0));
    approx_eq(updater.sea_level(0.0), -2.0, 1e-15);
    Ok(())
}
