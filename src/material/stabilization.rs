use crate::base::Scalar;

/// Implements the GLS stabilization of the thermal residual
///
/// The stabilized term at a quadrature point reads
///
/// ```text
/// stab = -(∇κ · ∇w) τ (c Ṫ - ∇κ · ∇T)
/// ```
///
/// with the stabilization parameter
///
/// ```text
/// τ = h^ndim / 2 / ‖∇κ‖
/// ```
///
/// where h is the element size, c the thermal inertia, and κ the effective
/// thermal conductivity. Basis functions and cubature stay with the caller;
/// the inputs arrive as precomputed gradients.
pub struct ModelStabilization {
    /// Enables the stabilized term; disabled yields zero contributions
    enabled: bool,

    /// Characteristic element size h
    element_size: f64,

    /// Space dimension
    ndim: usize,
}

impl ModelStabilization {
    /// Allocates a new instance
    pub fn new(enabled: bool, element_size: f64, ndim: usize) -> Self {
        ModelStabilization {
            enabled,
            element_size,
            ndim,
        }
    }

    /// Calculates the stabilization parameter τ
    ///
    /// Returns zero when stabilization is off or the conductivity gradient
    /// vanishes.
    pub fn tau<S: Scalar>(&self, grad_conductivity: &[S]) -> S {
        let zero = S::from(0.0);
        if !self.enabled {
            return zero;
        }
        let mut sum = zero;
        for g in grad_conductivity {
            sum = sum + *g * *g;
        }
        if sum.value() == 0.0 {
            return zero;
        }
        let norm = sum.sqrt();
        S::from(f64::powi(self.element_size, self.ndim as i32) / 2.0) / norm
    }

    /// Calculates the stabilized residual contribution at one point
    pub fn contribution<S: Scalar>(
        &self,
        grad_conductivity: &[S],
        grad_weight: &[S],
        tau: S,
        thermal_inertia: S,
        temperature_dot: S,
        grad_temperature: &[S],
    ) -> S {
        let zero = S::from(0.0);
        if !self.enabled {
            return zero;
        }
        let mut gk_dot_gw = zero;
        let mut gk_dot_gt = zero;
        for i in 0..self.ndim {
            gk_dot_gw = gk_dot_gw + grad_conductivity[i] * grad_weight[i];
            gk_dot_gt = gk_dot_gt + grad_conductivity[i] * grad_temperature[i];
        }
        -gk_dot_gw * tau * (thermal_inertia * temperature_dot - gk_dot_gt)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelStabilization;
    use russell_lab::approx_eq;

    #[test]
    fn disabled_stabilization_returns_zero() {
        let model = ModelStabilization::new(false, 1.0, 3);
        let gk = [1.0, 2.0, 3.0];
        assert_eq!(model.tau(&gk), 0.0);
        assert_eq!(model.contribution(&gk, &gk, 1.0, 2.0, 3.0, &gk), 0.0);
    }

    #[test]
    fn tau_follows_the_element_size_scaling() {
        let model = ModelStabilization::new(true, 0.5, 3);
        let gk = [3.0, 0.0, 4.0]; // norm 5
        approx_eq(model.tau(&gk), f64::powi(0.5, 3) / 2.0 / 5.0, 1e-15);
        // vanishing gradient yields zero instead of a division by zero
        assert_eq!(model.tau(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn contribution_matches_the_dot_product_form() {
        let model = ModelStabilization::new(true, 1.0, 2);
        let gk = [1.0, 2.0];
        let gw = [0.5, -1.0];
        let gt = [2.0, 0.0];
        let tau = model.tau(&gk);
        let c = 3.0;
        let tdot = 0.25;
        let res = model.contribution(&gk, &gw, tau, c, tdot, &gt);
        let gk_gw = 1.0 * 0.5 + 2.0 * (-1.0);
        let gk_gt = 1.0 * 2.0;
        let correct = -gk_gw * tau * (c * tdot - gk_gt);
        approx_eq(res, correct, 1e-15);
    }
}
