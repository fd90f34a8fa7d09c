use super::{ErosionFailure, DEFAULT_NEWTON_MAX_IT, DEFAULT_NEWTON_TOLERANCE, DEFAULT_YIELD_TOLERANCE};
use crate::StrError;

/// Holds configuration data for the material point kernel
#[derive(Clone, Debug)]
pub struct Config {
    /// Space dimension (2 or 3)
    pub ndim: usize,

    /// Index of the coordinate used as depth/height (0, 1, or 2)
    pub depth_axis: usize,

    /// Policy applied when the erosion exposure time rolls over
    pub erosion_failure: ErosionFailure,

    /// Enables the GLS stabilization of the thermal residual
    pub use_stabilization: bool,

    /// Tolerance on the trial yield function
    pub yield_tolerance: f64,

    /// Relative tolerance of the local Newton solve
    pub newton_tolerance: f64,

    /// Iteration budget of the local Newton solve
    pub newton_max_it: usize,
}

impl Config {
    /// Allocates a new instance with default values (3D)
    pub fn new() -> Self {
        Config {
            ndim: 3,
            depth_axis: 2,
            erosion_failure: ErosionFailure::Ignore,
            use_stabilization: false,
            yield_tolerance: DEFAULT_YIELD_TOLERANCE,
            newton_tolerance: DEFAULT_NEWTON_TOLERANCE,
            newton_max_it: DEFAULT_NEWTON_MAX_IT,
        }
    }

    /// Sets the space dimension
    pub fn set_ndim(&mut self, ndim: usize) -> Result<&mut Self, StrError> {
        if ndim != 2 && ndim != 3 {
            return Err("ndim must be 2 or 3");
        }
        self.ndim = ndim;
        if self.depth_axis >= ndim {
            self.depth_axis = ndim - 1;
        }
        Ok(self)
    }

    /// Sets the index of the coordinate used as depth/height
    pub fn set_depth_axis(&mut self, axis: usize) -> Result<&mut Self, StrError> {
        if axis > 2 {
            return Err("depth axis must be 0, 1, or 2");
        }
        if axis >= self.ndim {
            return Err("depth axis must be smaller than ndim");
        }
        self.depth_axis = axis;
        Ok(self)
    }

    /// Sets the policy applied when the erosion exposure time rolls over
    pub fn set_erosion_failure(&mut self, policy: ErosionFailure) -> Result<&mut Self, StrError> {
        self.erosion_failure = policy;
        Ok(self)
    }

    /// Enables/disables the GLS stabilization of the thermal residual
    pub fn set_stabilization(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.use_stabilization = flag;
        Ok(self)
    }

    /// Sets the tolerance on the trial yield function
    pub fn set_yield_tolerance(&mut self, tol: f64) -> Result<&mut Self, StrError> {
        if tol <= 0.0 {
            return Err("yield tolerance must be > 0.0");
        }
        self.yield_tolerance = tol;
        Ok(self)
    }

    /// Sets the tolerance and iteration budget of the local Newton solve
    pub fn set_newton(&mut self, tol: f64, max_it: usize) -> Result<&mut Self, StrError> {
        if tol <= 0.0 {
            return Err("Newton tolerance must be > 0.0");
        }
        if max_it < 1 {
            return Err("Newton iteration budget must be ≥ 1");
        }
        self.newton_tolerance = tol;
        self.newton_max_it = max_it;
        Ok(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
