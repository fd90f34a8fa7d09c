//! Makes the most common structures available

pub use crate::base::{
    Config, ErosionFailure, LookupTable, ParamErosion, ParamFreezingCurve, ParamPermafrost, ParamPhases,
    ParamPlasticity, SampleParams, Scalar, SiteData, SiteTables,
};
pub use crate::material::{
    melting_temperature, CellFailure, FiniteStrainJ2, LocalState, ModelErosion, ModelFreezingCurve,
    ModelMixture, ModelStabilization, PhaseFractions, PointDiagnostics, PointInput, PointOutput,
    StateUpdater, StressUpdate, Workset, WorksetReport,
};
pub use crate::tensor::{mat_exp, polar_rotation, Tensor2};
pub use crate::StrError;
