use crate::base::{ParamPhases, Scalar};
use crate::StrError;

/// Implements the mixture laws for the effective point properties
///
/// Density and heat capacity mix arithmetically over the pore phases;
/// the thermal conductivity uses a power-weighted product. The asymmetry
/// between the mixing laws is part of the model.
pub struct ModelMixture {
    /// Intrinsic phase properties
    param: ParamPhases,
}

impl ModelMixture {
    /// Allocates a new instance
    ///
    /// The phase conductivities must be positive for the power-product law.
    pub fn new(param: &ParamPhases) -> Result<Self, StrError> {
        if param.ice_conductivity <= 0.0 || param.water_conductivity <= 0.0 {
            return Err("phase conductivities must be > 0.0");
        }
        if param.sediment_conductivity <= 0.0 {
            return Err("sediment conductivity must be > 0.0");
        }
        Ok(ModelMixture { param: *param })
    }

    /// Calculates the effective density of the pore content
    ///
    /// ```text
    /// ρ = φ (ρ_ice f_ice + ρ_water f_water)
    /// ```
    pub fn density<S: Scalar>(&self, porosity: S, f_ice: S, f_water: S) -> S {
        porosity * (f_ice * self.param.ice_density + f_water * self.param.water_density)
    }

    /// Calculates the effective heat capacity of the pore content
    pub fn heat_capacity<S: Scalar>(&self, porosity: S, f_ice: S, f_water: S) -> S {
        porosity * (f_ice * self.param.ice_heat_capacity + f_water * self.param.water_heat_capacity)
    }

    /// Calculates the effective thermal conductivity (power-product law)
    ///
    /// ```text
    /// κ = κ_ice^(f_ice φ) · κ_water^(f_water φ)
    /// ```
    pub fn thermal_conductivity<S: Scalar>(&self, porosity: S, f_ice: S, f_water: S) -> S {
        let ki = (f_ice * porosity).pow_base(self.param.ice_conductivity);
        let kw = (f_water * porosity).pow_base(self.param.water_conductivity);
        ki * kw
    }

    /// Calculates the thermal inertia (apparent heat capacity)
    ///
    /// The slope term accounts for the latent heat released/absorbed during
    /// phase change; it is negative when freezing, increasing the apparent
    /// inertia.
    pub fn thermal_inertia<S: Scalar>(&self, density: S, heat_capacity: S, slope: S) -> S {
        density * heat_capacity - slope * (self.param.ice_density * self.param.latent_heat)
    }

    /// Calculates the bulk density including the sediment skeleton
    ///
    /// ```text
    /// ρ_bulk = φ (ρ_ice f_ice + ρ_water f_water) + (1 - φ) ρ_sed
    /// ```
    pub fn bulk_density<S: Scalar>(&self, porosity: S, f_ice: S, f_water: S) -> S {
        let one = S::from(1.0);
        self.density(porosity, f_ice, f_water) + (one - porosity) * self.param.sediment_density
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
