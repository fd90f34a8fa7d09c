use super::{CellFailure, LocalState, PointInput, PointOutput, StateUpdater};
use crate::base::{Config, Scalar};
use crate::tensor::Tensor2;
use crate::StrError;

/// Holds the field data of a batch of cells processed in one evaluation call
///
/// Storage is struct-of-arrays over the (cell × point) product with flat
/// indices `cell * n_points + p`, resolved at construction; the hot loop
/// never looks anything up by name. Distinct (cell, point) units have
/// disjoint write sets, so the loop is data-parallel by construction.
pub struct Workset<S: Scalar> {
    /// Number of cells
    pub n_cells: usize,

    /// Number of integration points per cell
    pub n_points: usize,

    /// Deformation gradient per (cell, point)
    pub def_grad: Vec<Tensor2<S>>,

    /// Temperature per (cell, point)
    pub temperature: Vec<S>,

    /// Elastic modulus per (cell, point)
    pub elastic_modulus: Vec<S>,

    /// Poisson's ratio per (cell, point)
    pub poissons_ratio: Vec<S>,

    /// Hardening modulus per (cell, point)
    pub hardening_modulus: Vec<S>,

    /// Yield strength per (cell, point)
    pub yield_strength: Vec<S>,

    /// Height above mean sea level per (cell, point)
    pub height: Vec<f64>,

    /// Erodible-boundary indicator per cell
    pub boundary_cell: Vec<bool>,

    /// History state per (cell, point), committed at the end of each step
    pub states: Vec<LocalState>,

    /// Failure state per cell, persisted across steps
    pub cell_failure: Vec<CellFailure>,

    /// Output fields per (cell, point); `None` marks a failed local solve
    pub outputs: Vec<Option<PointOutput<S>>>,
}

/// Holds the report of one workset update
#[derive(Clone, Debug)]
pub struct WorksetReport {
    /// Number of points that yielded in this step
    pub n_yielded: usize,

    /// (cell, point) pairs whose local solve did not converge
    pub non_converged: Vec<(usize, usize)>,
}

impl WorksetReport {
    /// Indicates that every local solve converged
    pub fn all_converged(&self) -> bool {
        self.non_converged.is_empty()
    }
}

impl<S: Scalar> Workset<S> {
    /// Allocates a new instance with uniform initial values
    pub fn new(
        n_cells: usize,
        n_points: usize,
        dim: usize,
        temperature_ini: f64,
        ice_saturation_ini: f64,
    ) -> Result<Self, StrError> {
        if n_cells < 1 || n_points < 1 {
            return Err("workset must have at least one cell and one point");
        }
        let n = n_cells * n_points;
        Ok(Workset {
            n_cells,
            n_points,
            def_grad: vec![Tensor2::identity(dim); n],
            temperature: vec![S::from(temperature_ini); n],
            elastic_modulus: vec![S::from(0.0); n],
            poissons_ratio: vec![S::from(0.0); n],
            hardening_modulus: vec![S::from(0.0); n],
            yield_strength: vec![S::from(0.0); n],
            height: vec![0.0; n],
            boundary_cell: vec![false; n_cells],
            states: vec![LocalState::new(dim, temperature_ini, ice_saturation_ini); n],
            cell_failure: vec![CellFailure::new(); n_cells],
            outputs: (0..n).map(|_| None).collect(),
        })
    }

    /// Returns the flat index of a (cell, point) pair
    pub fn index(&self, cell: usize, point: usize) -> usize {
        cell * self.n_points + point
    }

    /// Sets the point heights from coordinates using the configured depth axis
    pub fn set_heights_from_coords(&mut self, config: &Config, coords: &[[f64; 3]]) -> Result<(), StrError> {
        if coords.len() != self.n_cells * self.n_points {
            return Err("number of coordinates must match the workset size");
        }
        for (k, x) in coords.iter().enumerate() {
            self.height[k] = x[config.depth_axis];
        }
        Ok(())
    }

    /// Updates all points of the workset over one time step
    ///
    /// The erosion exposure clock advances once per cell before the point
    /// loop. A point whose local solve fails is recorded in the report and
    /// its output slot cleared; the remaining points are unaffected. All
    /// successor states are committed before the function returns, so the
    /// next step observes only fully-updated history.
    pub fn update(&mut self, updater: &StateUpdater, time: f64, delta_time: f64) -> Result<WorksetReport, StrError> {
        let mut report = WorksetReport {
            n_yielded: 0,
            non_converged: Vec::new(),
        };
        let sea_level = updater.sea_level(time);
        for cell in 0..self.n_cells {
            // the failure indicator accumulates within one step only
            self.cell_failure[cell].failed = 0.0;

            // the lowest point of the cell is the first to be submerged
            let cell_height = (0..self.n_points)
                .map(|p| self.height[self.index(cell, p)])
                .fold(f64::INFINITY, f64::min);
            let at_boundary = self.boundary_cell[cell];
            updater.erosion().advance_exposure(
                &mut self.cell_failure[cell],
                at_boundary,
                cell_height,
                sea_level,
                delta_time,
            );

            for point in 0..self.n_points {
                let k = self.index(cell, point);
                let input = PointInput {
                    def_grad: self.def_grad[k].clone(),
                    temperature: self.temperature[k],
                    elastic_modulus: self.elastic_modulus[k],
                    poissons_ratio: self.poissons_ratio[k],
                    hardening_modulus: self.hardening_modulus[k],
                    yield_strength: self.yield_strength[k],
                    height: self.height[k],
                    delta_time,
                    current_time: time,
                    boundary_cell: at_boundary,
                };
                match updater.update_point(&self.states[k], &input) {
                    Ok((output, new_state)) => {
                        if output.diagnostics.yielded {
                            report.n_yielded += 1;
                            self.cell_failure[cell].failed += 1.0;
                        }
                        if output.diagnostics.rotation_exceeded {
                            self.cell_failure[cell].failed += 1.0;
                        }
                        self.outputs[k] = Some(output);
                        self.states[k] = new_state;
                    }
                    Err(_) => {
                        report.non_converged.push((cell, point));
                        self.outputs[k] = None;
                    }
                }
            }
        }
        Ok(report)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Workset;
    use crate::base::{Config, SampleParams, SiteTables};
    use crate::material::StateUpdater;
    use crate::tensor::Tensor2;
    use russell_lab::approx_eq;

    fn new_updater() -> StateUpdater {
        let mut param = SampleParams::param_permafrost();
        param.porosity_surface = 0.3;
        StateUpdater::new(&Config::new(), &param, SiteTables::empty()).unwrap()
    }

    fn fill_moduli(workset: &mut Workset<f64>) {
        let n = workset.n_cells * workset.n_points;
        for k in 0..n {
            workset.elastic_modulus[k] = 9.0e9;
            workset.poissons_ratio[k] = 0.325;
            workset.hardening_modulus[k] = 1.0e8;
            workset.yield_strength[k] = 25.0e6;
        }
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            Workset::<f64>::new(0, 4, 3, 265.0, 1.0).err(),
            Some("workset must have at least one cell and one point")
        );
    }

    #[test]
    fn heights_follow_the_configured_depth_axis() {
        let mut workset = Workset::<f64>::new(2, 1, 3, 200.0, 1.0).unwrap();
        let coords = [[1.0, 2.0, -3.0], [4.0, 5.0, -6.0]];
        let mut config = Config::new();
        workset.set_heights_from_coords(&config, &coords).unwrap();
        assert_eq!(workset.height, &[-3.0, -6.0]);
        config.set_depth_axis(1).unwrap();
        workset.set_heights_from_coords(&config, &coords).unwrap();
        assert_eq!(workset.height, &[2.0, 5.0]);
        assert_eq!(
            workset.set_heights_from_coords(&config, &coords[..1]).err(),
            Some("number of coordinates must match the workset size")
        );
    }

    #[test]
    fn update_commits_states_and_outputs() {
        let updater = new_updater();
        let mut workset = Workset::<f64>::new(2, 4, 3, 200.0, 1.0).unwrap();
        fill_moduli(&mut workset);
        let report = workset.update(&updater, 0.0, 1.0).unwrap();
        assert!(report.all_converged());
        assert_eq!(report.n_yielded, 0);
        for cell in 0..2 {
            for point in 0..4 {
                let k = workset.index(cell, point);
                let out = workset.outputs[k].as_ref().unwrap();
                assert_eq!(out.ice_saturation, 1.0);
                approx_eq(out.density, 0.3 * 920.0, 1e-12);
                assert_eq!(workset.states[k].ice_saturation, 1.0);
                assert_eq!(workset.states[k].temperature, 200.0);
            }
        }
    }

    #[test]
    fn yielding_points_increment_the_cell_failure() {
        let updater = new_updater();
        let mut workset = Workset::<f64>::new(1, 2, 3, 200.0, 1.0).unwrap();
        fill_moduli(&mut workset);
        // a strong shear on point 0 only
        workset.def_grad[0] = Tensor2::from_matrix(
            3,
            &[[1.0, 0.05, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        );
        let report = workset.update(&updater, 0.0, 1.0).unwrap();
        assert!(report.all_converged());
        assert_eq!(report.n_yielded, 1);
        assert_eq!(workset.cell_failure[0].failed, 1.0);
        // eqps advanced on the sheared point only
        assert!(workset.states[0].eqps > 0.0);
        assert_eq!(workset.states[1].eqps, 0.0);
        // a second elastic-only step resets the per-step indicator
        workset.def_grad[0] = Tensor2::identity(3);
        let report = workset.update(&updater, 1.0, 1.0).unwrap();
        assert_eq!(report.n_yielded, 0);
        assert_eq!(workset.cell_failure[0].failed, 0.0);
    }

    #[test]
    fn non_convergence_is_recorded_without_corrupting_other_points() {
        let mut param = SampleParams::param_permafrost();
        param.porosity_surface = 0.3;
        param.plasticity.sat_mod = 1.0e9;
        param.plasticity.sat_exp = 500.0;
        let mut config = Config::new();
        config.set_newton(1e-15, 1).unwrap();
        let updater = StateUpdater::new(&config, &param, SiteTables::empty()).unwrap();
        let mut workset = Workset::<f64>::new(1, 2, 3, 200.0, 1.0).unwrap();
        fill_moduli(&mut workset);
        workset.def_grad[0] = Tensor2::from_matrix(
            3,
            &[[1.0, 0.05, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        );
        let report = workset.update(&updater, 0.0, 1.0).unwrap();
        assert_eq!(report.non_converged, vec![(0, 0)]);
        assert!(workset.outputs[0].is_none());
        // the elastic neighbor is untouched by the failure
        assert!(workset.outputs[1].is_some());
        assert_eq!(workset.states[0].eqps, 0.0); // old state preserved
    }

    #[test]
    fn erosion_clock_advances_once_per_cell() {
        let mut param = SampleParams::param_permafrost();
        param.erosion = SampleParams::param_erosion_bluff();
        let updater = StateUpdater::new(&Config::new(), &param, SiteTables::empty()).unwrap();
        let mut workset = Workset::<f64>::new(1, 4, 3, 200.0, 1.0).unwrap();
        fill_moduli(&mut workset);
        workset.boundary_cell[0] = true;
        for k in 0..4 {
            workset.height[k] = -1.0; // below the (default zero) sea level
        }
        workset.update(&updater, 0.0, 0.5).unwrap();
        assert_eq!(workset.cell_failure[0].exposure_time, 0.5);
        workset.update(&updater, 0.5, 0.5).unwrap();
        assert_eq!(workset.cell_failure[0].exposure_time, 1.0);
    }
}
