use crate::base::{ParamFreezingCurve, Scalar, FREEZE_ARG_CUTOFF};

/// Holds the ice/water volume fractions and the freezing-curve slope
#[derive(Clone, Copy, Debug)]
pub struct PhaseFractions<S: Scalar> {
    /// Ice volume fraction in [0,1]
    pub ice: S,

    /// Water volume fraction, 1 - ice
    pub water: S,

    /// Derivative of the ice fraction with respect to temperature
    pub slope: S,
}

/// Calculates the melting temperature of saline water (Kelvin)
///
/// ```text
/// Tm = -0.057 S + 0.00170523 S^1.5 - 0.0002154996 S² - 7.53e-8 p + 273.15
/// ```
///
/// with fixed unit pressure p.
pub fn melting_temperature<S: Scalar>(salinity: S) -> S {
    let pressure_fixed = 1.0;
    let sal15 = (salinity * salinity * salinity).sqrt();
    salinity * (-0.057) + sal15 * 0.00170523 - salinity * salinity * 0.0002154996
        - 0.000753 / 10_000.0 * pressure_fixed
        + 273.15
}

/// Implements the freezing curve giving phase fractions versus temperature
///
/// The curve is a logistic in the temperature offset from the melting point:
///
/// ```text
/// f(T) = 1 / (1 + e^(-(8/W)((T-Tm) + b·W)))
/// ```
///
/// where W is the true width of the curve (smaller W means steeper) and b
/// shifts the freezing point (positive moves it left). The ice fraction is
/// 1 - f.
pub struct ModelFreezingCurve {
    /// Shift fraction b
    shift: f64,
}

impl ModelFreezingCurve {
    /// Allocates a new instance
    pub fn new(param: &ParamFreezingCurve) -> Self {
        ModelFreezingCurve { shift: param.shift }
    }

    /// Calculates the ice/water fractions and the freezing-curve slope
    ///
    /// The evaluation saturates to exactly 0 or 1 outside the cutoff band and
    /// guards the interior branches against exp() overflow/underflow; the
    /// three-branch guard is a correctness requirement, not an optimization.
    pub fn phase_fractions<S: Scalar>(&self, tt: S, tt_melt: S, width: S) -> PhaseFractions<S> {
        let zero = S::from(0.0);
        let one = S::from(1.0);
        let arg = -(S::from(8.0) / width) * ((tt - tt_melt) + width * self.shift);
        let mut ice = one;
        let mut slope = zero;
        if arg.value() < -FREEZE_ARG_CUTOFF {
            ice = zero;
        } else if arg.value() > FREEZE_ARG_CUTOFF {
            ice = one;
        } else {
            let et = arg.exp();
            if et.value() < f64::EPSILON {
                // 1 + e^arg ≈ 1
                slope = -(width / 8.0) * et;
                ice = zero;
            } else if (1.0 / et.value()) < f64::EPSILON {
                // 1 + e^arg ≈ e^arg
                slope = -(width / 8.0) / et;
                ice = one - one / et;
            } else {
                let etp1 = et + 1.0;
                slope = -(width / 8.0) * et / etp1 / etp1;
                ice = one - one / etp1;
            }
        }
        PhaseFractions {
            ice,
            water: one - ice,
            slope,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
