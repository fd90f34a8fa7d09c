use crate::base::Scalar;
use crate::tensor::Tensor2;

/// Holds the history of one material point, persisted across time steps
///
/// History values are plain numbers: the state store owns previous-step
/// results, not derivative information. The point updater reads this state,
/// never mutates it, and returns the successor state alongside the outputs.
#[derive(Clone, Debug)]
pub struct LocalState {
    /// Plastic deformation tensor (det ≈ 1)
    pub fp: Tensor2<f64>,

    /// Equivalent plastic strain (nonnegative, nondecreasing)
    pub eqps: f64,

    /// Temperature of the previous step
    pub temperature: f64,

    /// Ice saturation of the previous step
    pub ice_saturation: f64,
}

impl LocalState {
    /// Allocates a new instance with identity plastic deformation
    pub fn new(dim: usize, temperature: f64, ice_saturation: f64) -> Self {
        LocalState {
            fp: Tensor2::identity(dim),
            eqps: 0.0,
            temperature,
            ice_saturation,
        }
    }
}

/// Holds the input field values of one material point for one step
#[derive(Clone, Debug)]
pub struct PointInput<S: Scalar> {
    /// Deformation gradient F
    pub def_grad: Tensor2<S>,

    /// Current temperature
    pub temperature: S,

    /// Elastic (Young's) modulus
    pub elastic_modulus: S,

    /// Poisson's ratio
    pub poissons_ratio: S,

    /// Hardening modulus K
    pub hardening_modulus: S,

    /// Yield strength of the fully frozen material
    pub yield_strength: S,

    /// Height above mean sea level of the point (detached coordinate)
    pub height: f64,

    /// Time step size
    pub delta_time: f64,

    /// Current time
    pub current_time: f64,

    /// Indicates a cell on the erodible boundary
    pub boundary_cell: bool,
}

/// Holds the per-point diagnostics of one update
#[derive(Clone, Copy, Debug)]
pub struct PointDiagnostics {
    /// Indicates that the point yielded in this step
    pub yielded: bool,

    /// Indicates that the rotation angle reached the critical threshold
    pub rotation_exceeded: bool,

    /// Number of Newton iterations of the local solve (0 if elastic)
    pub newton_iterations: usize,
}

/// Holds the output field values of one material point for one step
#[derive(Clone, Debug)]
pub struct PointOutput<S: Scalar> {
    /// Cauchy stress
    pub stress: Tensor2<S>,

    /// Updated plastic deformation tensor
    pub fp: Tensor2<S>,

    /// Updated equivalent plastic strain
    pub eqps: S,

    /// Updated size of the yield surface
    pub yield_surface: S,

    /// Ice saturation
    pub ice_saturation: S,

    /// Water saturation
    pub water_saturation: S,

    /// Porosity at the point
    pub porosity: S,

    /// Salinity at the point
    pub salinity: S,

    /// Effective density
    pub density: S,

    /// Effective heat capacity
    pub heat_capacity: S,

    /// Effective thermal conductivity
    pub thermal_conductivity: S,

    /// Thermal inertia (apparent heat capacity)
    pub thermal_inertia: S,

    /// Temperature rate (T - T_old)/Δt
    pub temperature_dot: S,

    /// Diagnostics of this update
    pub diagnostics: PointDiagnostics,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LocalState;

    #[test]
    fn new_state_starts_from_identity() {
        let state = LocalState::new(3, 265.0, 0.9);
        assert_eq!(state.fp.get(0, 0), 1.0);
        assert_eq!(state.fp.get(0, 1), 0.0);
        assert_eq!(state.fp.det(), 1.0);
        assert_eq!(state.eqps, 0.0);
        assert_eq!(state.temperature, 265.0);
        assert_eq!(state.ice_saturation, 0.9);
    }
}
