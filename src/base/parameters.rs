use serde::{Deserialize, Serialize};

/// Holds the intrinsic properties of the ice, water, and sediment phases
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamPhases {
    /// Intrinsic density of ice
    pub ice_density: f64,

    /// Intrinsic density of water
    pub water_density: f64,

    /// Intrinsic density of the sediment skeleton
    pub sediment_density: f64,

    /// Heat capacity of ice
    pub ice_heat_capacity: f64,

    /// Heat capacity of water
    pub water_heat_capacity: f64,

    /// Heat capacity of the sediment skeleton
    pub sediment_heat_capacity: f64,

    /// Thermal conductivity of ice
    pub ice_conductivity: f64,

    /// Thermal conductivity of water
    pub water_conductivity: f64,

    /// Thermal conductivity of the sediment skeleton
    pub sediment_conductivity: f64,

    /// Latent heat of fusion
    pub latent_heat: f64,
}

/// Holds the freezing-curve parameters
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamFreezingCurve {
    /// Width of the freezing curve (in temperature units); smaller is steeper
    pub width: f64,

    /// Shift fraction of the curve (positive moves the curve left)
    pub shift: f64,
}

/// Holds the hardening and thermo-elastic coupling parameters
///
/// The per-point elastic modulus, Poisson's ratio, hardening modulus, and
/// yield strength arrive as input fields; only the saturation hardening and
/// the thermal stretch are material constants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamPlasticity {
    /// Saturation modulus of the isotropic hardening law
    pub sat_mod: f64,

    /// Saturation exponent of the isotropic hardening law
    pub sat_exp: f64,

    /// Reference temperature of the thermal stretch
    pub ref_temperature: f64,

    /// Thermal expansion coefficient (zero disables the thermal stretch)
    pub expansion_coeff: f64,
}

/// Holds the erosion and kinematic failure parameters
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamErosion {
    /// Erosion rate; zero or negative disables erosion
    pub rate: f64,

    /// Characteristic element size used for the critical exposure time
    pub element_size: f64,

    /// Critical stress threshold
    pub critical_stress: f64,

    /// Critical rotation angle; zero or negative disables the check
    pub critical_angle: f64,
}

/// Holds all parameters of the frozen porous medium
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamPermafrost {
    /// Intrinsic phase properties
    pub phases: ParamPhases,

    /// Freezing-curve parameters
    pub freezing_curve: ParamFreezingCurve,

    /// Hardening and thermo-elastic coupling parameters
    pub plasticity: ParamPlasticity,

    /// Erosion and kinematic failure parameters
    pub erosion: ParamErosion,

    /// Porosity at the surface, used when no porosity table is configured
    pub porosity_surface: f64,

    /// Base salinity, used when no salinity table is configured
    pub salinity_base: f64,

    /// Salt-enhanced diffusion factor (consumed by the chemical model)
    pub salt_enhanced_d: f64,

    /// Initial ice saturation
    pub ice_saturation_init: f64,

    /// Maximum ice saturation
    pub ice_saturation_max: f64,

    /// Minimum water saturation
    pub water_saturation_min: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
