use super::{ParamErosion, ParamFreezingCurve, ParamPermafrost, ParamPhases, ParamPlasticity, DEFAULT_FREEZE_SHIFT};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample intrinsic phase properties (SI units)
    pub fn param_phases() -> ParamPhases {
        ParamPhases {
            ice_density: 920.0,             // kg/m³
            water_density: 1000.0,          // kg/m³
            sediment_density: 2650.0,       // kg/m³
            ice_heat_capacity: 2090.0,      // J/(kg·K)
            water_heat_capacity: 4186.0,    // J/(kg·K)
            sediment_heat_capacity: 835.0,  // J/(kg·K)
            ice_conductivity: 2.22,         // W/(m·K)
            water_conductivity: 0.57,       // W/(m·K)
            sediment_conductivity: 1.70,    // W/(m·K)
            latent_heat: 334_000.0,         // J/kg
        }
    }

    /// Returns sample freezing-curve parameters
    pub fn param_freezing_curve() -> ParamFreezingCurve {
        ParamFreezingCurve {
            width: 1.0, // K
            shift: DEFAULT_FREEZE_SHIFT,
        }
    }

    /// Returns sample hardening parameters without saturation hardening
    pub fn param_plasticity_linear() -> ParamPlasticity {
        ParamPlasticity {
            sat_mod: 0.0,
            sat_exp: 0.0,
            ref_temperature: 273.15, // K
            expansion_coeff: 0.0,
        }
    }

    /// Returns sample hardening parameters with saturation hardening
    pub fn param_plasticity_saturating() -> ParamPlasticity {
        ParamPlasticity {
            sat_mod: 5.0e5,  // Pa
            sat_exp: 10.0,
            ref_temperature: 273.15, // K
            expansion_coeff: 0.0,
        }
    }

    /// Returns sample erosion parameters with erosion disabled
    pub fn param_erosion_disabled() -> ParamErosion {
        ParamErosion {
            rate: 0.0,
            element_size: 1.0,      // m
            critical_stress: 0.0,
            critical_angle: 0.0,
        }
    }

    /// Returns sample erosion parameters for an erodible bluff
    pub fn param_erosion_bluff() -> ParamErosion {
        ParamErosion {
            rate: 0.5,              // m/day
            element_size: 1.0,      // m
            critical_stress: 5.0e6, // Pa
            critical_angle: 0.5,    // rad
        }
    }

    /// Returns sample parameters for a frozen porous medium
    pub fn param_permafrost() -> ParamPermafrost {
        ParamPermafrost {
            phases: SampleParams::param_phases(),
            freezing_curve: SampleParams::param_freezing_curve(),
            plasticity: SampleParams::param_plasticity_linear(),
            erosion: SampleParams::param_erosion_disabled(),
            porosity_surface: 0.40,
            salinity_base: 0.10,  // ppt
            salt_enhanced_d: 0.0,
            ice_saturation_init: 0.95,
            ice_saturation_max: 1.0,
            water_saturation_min: 0.0,
        }
    }

    /// Returns sample parameters for an erodible frozen bluff
    pub fn param_permafrost_erodible() -> ParamPermafrost {
        let mut param = SampleParams::param_permafrost();
        param.erosion = SampleParams::param_erosion_bluff();
        param
    }
}
