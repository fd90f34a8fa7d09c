use crate::base::{Config, ParamPlasticity, Scalar, SQRT_2_BY_3};
use crate::tensor::{mat_exp, Tensor2};
use crate::StrError;

/// Holds the result of a stress update at one material point
pub struct StressUpdate<S: Scalar> {
    /// Cauchy stress σ = p I + s/J
    pub stress: Tensor2<S>,

    /// Updated plastic deformation tensor
    pub fp_new: Tensor2<S>,

    /// Updated equivalent plastic strain
    pub eqps_new: S,

    /// Updated size of the yield surface
    pub yield_surface: S,

    /// Indicates that the point yielded in this step
    pub yielded: bool,

    /// Number of Newton iterations of the local solve (0 if elastic)
    pub iterations: usize,
}

/// Implements finite-strain J2 plasticity with a radial return mapping
///
/// The elastic predictor comes from the isochoric part of the elastic left
/// Cauchy-Green tensor; plastic flow updates the plastic deformation through
/// the exponential map, preserving its determinant. Isotropic hardening
/// combines a linear term with an exponential saturation term:
///
/// ```text
/// Y(α) = Y + K α + sat_mod (1 - exp(-sat_exp α))
/// ```
pub struct FiniteStrainJ2 {
    /// Saturation modulus of the hardening law
    sat_mod: f64,

    /// Saturation exponent of the hardening law
    sat_exp: f64,

    /// Reference temperature of the thermal stretch
    ref_temperature: f64,

    /// Thermal expansion coefficient (zero disables the thermal stretch)
    expansion_coeff: f64,

    /// Tolerance on the trial yield function
    yield_tol: f64,

    /// Relative tolerance of the Newton solve
    newton_tol: f64,

    /// Iteration budget of the Newton solve
    newton_max_it: usize,
}

impl FiniteStrainJ2 {
    /// Allocates a new instance
    pub fn new(param: &ParamPlasticity, config: &Config) -> Self {
        FiniteStrainJ2 {
            sat_mod: param.sat_mod,
            sat_exp: param.sat_exp,
            ref_temperature: param.ref_temperature,
            expansion_coeff: param.expansion_coeff,
            yield_tol: config.yield_tolerance,
            newton_tol: config.newton_tolerance,
            newton_max_it: config.newton_max_it,
        }
    }

    /// Calculates the size of the yield surface at plastic strain α
    fn flow_strength<S: Scalar>(&self, yield_strength: S, hardening_modulus: S, alpha: S) -> S {
        let one = S::from(1.0);
        yield_strength + hardening_modulus * alpha + (one - (-alpha * self.sat_exp).exp()) * self.sat_mod
    }

    /// Solves for the plastic multiplier increment Δγ by Newton iteration
    ///
    /// The residual is the yield condition at the returned state:
    ///
    /// ```text
    /// r(Δγ) = ‖s_trial‖ - 2 μ̄ Δγ - √(2/3) Y(α₀ + √(2/3) Δγ)
    /// ```
    ///
    /// Exhausting the iteration budget is a local-convergence failure,
    /// distinct from "no physical yielding"; it is never silently accepted.
    fn solve_delta_gamma<S: Scalar>(
        &self,
        smag: S,
        mubar: S,
        yield_strength: S,
        hardening_modulus: S,
        eqps_old: f64,
    ) -> Result<(S, usize), StrError> {
        let mut dgam = S::from(0.0);
        let mut r0 = 0.0;
        for it in 0..self.newton_max_it {
            let alpha = dgam * SQRT_2_BY_3 + eqps_old;
            let r = smag
                - mubar * dgam * 2.0
                - self.flow_strength(yield_strength, hardening_modulus, alpha) * SQRT_2_BY_3;
            if it == 0 {
                r0 = r.value().abs();
            }
            if r.value().abs() <= self.newton_tol * (1.0 + r0) {
                return Ok((dgam, it));
            }
            let dr = -(mubar * 2.0)
                - (hardening_modulus + (-alpha * self.sat_exp).exp() * (self.sat_mod * self.sat_exp))
                    * (2.0 / 3.0);
            dgam = dgam - r / dr;
        }
        Err("plastic return mapping did not converge")
    }

    /// Updates the stress and plastic state at one material point
    ///
    /// The yield strength must already carry the temperature reduction
    /// (ice-fraction scaling) applied by the caller. The old plastic
    /// deformation and plastic strain are previous-step history values.
    pub fn update_stress<S: Scalar>(
        &self,
        def_grad: &Tensor2<S>,
        temperature: S,
        fp_old: &Tensor2<f64>,
        eqps_old: f64,
        elastic_modulus: S,
        poissons_ratio: S,
        hardening_modulus: S,
        yield_strength: S,
    ) -> Result<StressUpdate<S>, StrError> {
        let dim = def_grad.dim();
        let one = S::from(1.0);

        // elastic coefficients
        let kappa = elastic_modulus / ((one - poissons_ratio * 2.0) * 3.0);
        let mu = elastic_modulus / ((one + poissons_ratio) * 2.0);

        // volume change of the total deformation
        let jj = def_grad.det();
        let jm23 = one / (jj * jj).cbrt();

        // mechanical deformation gradient (thermal stretch removed)
        let fm = if self.expansion_coeff != 0.0 {
            let stretch = ((temperature - self.ref_temperature) * self.expansion_coeff).exp();
            def_grad.scaled(one / stretch)
        } else {
            def_grad.clone()
        };

        // isochoric elastic predictor: be = J^(-2/3) Fm Cp⁻¹ Fmᵀ
        let fp_inv = fp_old.inverse();
        let cp_inv = Tensor2::<S>::promoted(&fp_inv.dot(&fp_inv.transpose()));
        let be = fm.dot(&cp_inv).dot(&fm.transpose()).scaled(jm23);
        let mut s = be.deviator().scaled(mu);
        let mubar = be.trace() * mu / (dim as f64);

        // check the yield condition at the trial state
        let smag = s.norm();
        let f = smag - self.flow_strength(yield_strength, hardening_modulus, S::from(eqps_old)) * SQRT_2_BY_3;
        let yielded = f.value() > self.yield_tol;

        let (fp_new, eqps_new, iterations) = if yielded {
            let (dgam, iterations) =
                self.solve_delta_gamma(smag, mubar, yield_strength, hardening_modulus, eqps_old)?;
            let alpha = dgam * SQRT_2_BY_3 + eqps_old;

            // return along the plastic flow direction
            let nn = s.scaled(one / smag);
            s = s.sub(&nn.scaled(mubar * dgam * 2.0));

            // exponential map keeps det(Fp) = 1
            let fp_new = mat_exp(&nn.scaled(dgam)).dot(&Tensor2::promoted(fp_old));
            (fp_new, alpha, iterations)
        } else {
            (Tensor2::promoted(fp_old), S::from(eqps_old), 0)
        };

        // pressure is always elastic
        let pressure = kappa * (jj - one / jj) * 0.5;
        let stress = Tensor2::identity(dim).scaled(pressure).add(&s.scaled(one / jj));

        Ok(StressUpdate {
            stress,
            fp_new,
            eqps_new,
            yield_surface: self.flow_strength(yield_strength, hardening_modulus, eqps_new),
            yielded,
            iterations,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
