//! Implements the constitutive models and the per-point update kernel

mod erosion;
mod freezing_curve;
mod local_state;
mod mixture;
mod plasticity;
mod stabilization;
mod updater;
mod workset;
pub use crate::material::erosion::*;
pub use crate::material::freezing_curve::*;
pub use crate::material::local_state::*;
pub use crate::material::mixture::*;
pub use crate::material::plasticity::*;
pub use crate::material::stabilization::*;
pub use crate::material::updater::*;
pub use crate::material::workset::*;
