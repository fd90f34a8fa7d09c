//! Cryomech - thermo-mechanical material point kernel for frozen porous media
//!
//! This crate implements the per-quadrature-point constitutive update of an
//! ice/sediment/water mixture: the freezing-curve evaluation yielding phase
//! fractions, the mixture laws for the effective thermal properties, the
//! finite-strain J2 return-mapping solve updating the plastic deformation
//! through the exponential map, and the erosion/failure state tracking
//! layered on top.
//!
//! The kernel is generic over the numeric scalar (see [base::Scalar]) so the
//! same algorithm runs for plain values and for forward-mode differentiable
//! numbers supplied by the caller. Mesh, assembly, and global solvers are
//! external collaborators; this crate only consumes per-point field values
//! and returns per-point outputs and successor states.
//!
//! # Example
//!
//! ```
//! use cryomech::prelude::*;
//!
//! fn main() -> Result<(), StrError> {
//!     let config = Config::new();
//!     let param = SampleParams::param_permafrost();
//!     let updater = StateUpdater::new(&config, &param, SiteTables::empty())?;
//!
//!     // one fully frozen point under no deformation
//!     let state = LocalState::new(3, 263.0, 1.0);
//!     let input = PointInput {
//!         def_grad: Tensor2::identity(3),
//!         temperature: 263.0,
//!         elastic_modulus: 9.0e9,
//!         poissons_ratio: 0.325,
//!         hardening_modulus: 1.0e8,
//!         yield_strength: 25.0e6,
//!         height: 0.0,
//!         delta_time: 1.0,
//!         current_time: 0.0,
//!         boundary_cell: false,
//!     };
//!     let (output, _new_state) = updater.update_point(&state, &input)?;
//!     assert_eq!(output.ice_saturation, 1.0);
//!     assert!(!output.diagnostics.yielded);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod tensor;
