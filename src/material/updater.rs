use super::{
    melting_temperature, FiniteStrainJ2, LocalState, ModelErosion, ModelFreezingCurve, ModelMixture,
    ModelStabilization, PointDiagnostics, PointInput, PointOutput,
};
use crate::base::{Config, ParamPermafrost, Scalar, SiteTables};
use crate::StrError;

/// Implements the per-point constitutive update
///
/// Ties the freezing curve, the mixture laws, the return-mapping solver, and
/// the failure checks together for one (cell, point) unit. The update is a
/// pure function of the previous state and the input fields: it reads only
/// its own inputs and the shared read-only tables, and returns the outputs
/// together with the successor state.
pub struct StateUpdater {
    /// Material parameters
    param: ParamPermafrost,

    /// Environment tables shared by all points (read-only)
    tables: SiteTables,

    /// Freezing-curve model
    freezing_curve: ModelFreezingCurve,

    /// Mixture model
    mixture: ModelMixture,

    /// Return-mapping solver
    plasticity: FiniteStrainJ2,

    /// Erosion and kinematic failure model
    erosion: ModelErosion,

    /// GLS stabilization of the thermal residual
    stabilization: ModelStabilization,
}

impl StateUpdater {
    /// Allocates a new instance
    pub fn new(config: &Config, param: &ParamPermafrost, tables: SiteTables) -> Result<Self, StrError> {
        Ok(StateUpdater {
            param: *param,
            tables,
            freezing_curve: ModelFreezingCurve::new(&param.freezing_curve),
            mixture: ModelMixture::new(&param.phases)?,
            plasticity: FiniteStrainJ2::new(&param.plasticity, config),
            erosion: ModelErosion::new(&param.erosion, config.erosion_failure),
            stabilization: ModelStabilization::new(
                config.use_stabilization,
                param.erosion.element_size,
                config.ndim,
            ),
        })
    }

    /// Returns the erosion model
    pub fn erosion(&self) -> &ModelErosion {
        &self.erosion
    }

    /// Returns the stabilization model
    pub fn stabilization(&self) -> &ModelStabilization {
        &self.stabilization
    }

    /// Returns the sea level at the given time (zero if not configured)
    pub fn sea_level(&self, time: f64) -> f64 {
        match &self.tables.sea_level {
            Some(table) => table.interpolate(time),
            None => 0.0,
        }
    }

    /// Returns the porosity at the given height
    ///
    /// A negative porosity is the sentinel marking a boundary cell.
    pub fn porosity_at(&self, height: f64) -> f64 {
        match &self.tables.porosity {
            Some(table) => table.interpolate(height),
            None => self.param.porosity_surface,
        }
    }

    /// Returns the salinity at the given height
    pub fn salinity_at(&self, height: f64) -> f64 {
        match &self.tables.salinity {
            Some(table) => table.interpolate(height),
            None => self.param.salinity_base,
        }
    }

    /// Returns the freezing-curve width at the given height
    pub fn curve_width_at(&self, height: f64) -> f64 {
        match &self.tables.curve_width {
            Some(table) => table.interpolate(height),
            None => self.param.freezing_curve.width,
        }
    }

    /// Updates one material point over one time step
    ///
    /// Returns the output fields and the successor history state. A
    /// non-converging local solve is returned as an error without touching
    /// the previous state.
    pub fn update_point<S: Scalar>(
        &self,
        state: &LocalState,
        input: &PointInput<S>,
    ) -> Result<(PointOutput<S>, LocalState), StrError> {
        let zero = S::from(0.0);

        // geometry-dependent quantities use the detached height
        let porosity = self.porosity_at(input.height);
        let salinity = self.salinity_at(input.height);
        let width = self.curve_width_at(input.height);

        // a boundary cell (this is a hack): porosity < 0 set in the input
        let boundary_sentinel = porosity < 0.0;

        // melting temperature from the salinity at this depth
        let tt_melt = melting_temperature(S::from(salinity));

        // temperature rate
        let temperature_dot = if input.delta_time > 0.0 {
            (input.temperature - state.temperature) / input.delta_time
        } else {
            zero
        };

        // phase fractions from the freezing curve
        let mut fractions =
            self.freezing_curve
                .phase_fractions(input.temperature, tt_melt, S::from(width));
        if boundary_sentinel {
            fractions.ice = zero;
            fractions.water = zero;
        }

        // effective properties of the mixture
        let porosity_s = S::from(porosity);
        let density = self.mixture.density(porosity_s, fractions.ice, fractions.water);
        let heat_capacity = self.mixture.heat_capacity(porosity_s, fractions.ice, fractions.water);
        let thermal_conductivity =
            self.mixture
                .thermal_conductivity(porosity_s, fractions.ice, fractions.water);
        let thermal_inertia = self.mixture.thermal_inertia(density, heat_capacity, fractions.slope);

        // only the ice phase carries strength
        let yield_strength = fractions.ice * input.yield_strength;

        let update = self.plasticity.update_stress(
            &input.def_grad,
            input.temperature,
            &state.fp,
            state.eqps,
            input.elastic_modulus,
            input.poissons_ratio,
            input.hardening_modulus,
            yield_strength,
        )?;

        // kinematic failure check on detached values
        let rotation_exceeded = self.erosion.rotation_exceeded(&input.def_grad.detach());

        let new_state = LocalState {
            fp: update.fp_new.detach(),
            eqps: update.eqps_new.value(),
            temperature: input.temperature.value(),
            ice_saturation: fractions.ice.value(),
        };

        let output = PointOutput {
            stress: update.stress,
            fp: update.fp_new,
            eqps: update.eqps_new,
            yield_surface: update.yield_surface,
            ice_saturation: fractions.ice,
            water_saturation: fractions.water,
            porosity: porosity_s,
            salinity: S::from(salinity),
            density,
            heat_capacity,
            thermal_conductivity,
            thermal_inertia,
            temperature_dot,
            diagnostics: PointDiagnostics {
                yielded: update.yielded,
                rotation_exceeded,
                newton_iterations: update.iterations,
            },
        };
        Ok((output, new_state))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
