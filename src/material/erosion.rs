use crate::base::{ErosionFailure, ParamErosion};
use crate::tensor::{polar_rotation, Tensor2};

/// Holds the per-cell failure state, persisted across time steps
#[derive(Clone, Copy, Debug)]
pub struct CellFailure {
    /// Accumulated failure indicator (reset at the start of each step)
    pub failed: f64,

    /// Accumulated exposure time of the cell to open water
    pub exposure_time: f64,
}

impl CellFailure {
    /// Allocates a new instance
    pub fn new() -> Self {
        CellFailure {
            failed: 0.0,
            exposure_time: 0.0,
        }
    }
}

/// Implements the erosion exposure clock and the kinematic failure checks
pub struct ModelErosion {
    /// Erosion rate; zero or negative disables erosion
    rate: f64,

    /// Characteristic element size
    element_size: f64,

    /// Critical rotation angle; zero or negative disables the check
    critical_angle: f64,

    /// Policy applied when the exposure time rolls over
    policy: ErosionFailure,
}

impl ModelErosion {
    /// Allocates a new instance
    pub fn new(param: &ParamErosion, policy: ErosionFailure) -> Self {
        ModelErosion {
            rate: param.rate,
            element_size: param.element_size,
            critical_angle: param.critical_angle,
            policy,
        }
    }

    /// Indicates whether erosion is enabled
    pub fn enabled(&self) -> bool {
        self.rate > 0.0
    }

    /// Returns the exposure time after which an element erodes away
    pub fn critical_exposure_time(&self) -> f64 {
        if self.enabled() {
            self.element_size / self.rate
        } else {
            0.0
        }
    }

    /// Advances the exposure clock of one boundary cell over one time step
    ///
    /// The clock accumulates while the cell sits at or below the sea level
    /// and resets when it reaches the critical exposure time, applying the
    /// configured rollover policy to the failure indicator.
    pub fn advance_exposure(
        &self,
        cell: &mut CellFailure,
        at_boundary: bool,
        height: f64,
        sea_level: f64,
        delta_time: f64,
    ) {
        if !self.enabled() || !at_boundary {
            return;
        }
        if height <= sea_level {
            cell.exposure_time += delta_time;
        }
        if cell.exposure_time >= self.critical_exposure_time() {
            if self.policy == ErosionFailure::MarkFailed {
                cell.failed += 1.0;
            }
            cell.exposure_time = 0.0;
        }
    }

    /// Checks the rotation angle of the deformation gradient
    ///
    /// The angle derives from the trace of the orthogonal polar factor of F,
    /// evaluated on detached values. Returns true when the angle reaches the
    /// critical threshold.
    pub fn rotation_exceeded(&self, def_grad: &Tensor2<f64>) -> bool {
        if self.critical_angle <= 0.0 {
            return false;
        }
        let qq = polar_rotation(def_grad);
        let mut cosine = 0.5 * (qq.trace() - 1.0);
        cosine = f64::min(cosine, 1.0);
        cosine = f64::max(cosine, -1.0);
        let theta = f64::acos(cosine);
        theta.abs() >= self.critical_angle
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
