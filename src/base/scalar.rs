use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Defines the numeric scalar consumed by the material kernel
///
/// The kernel is written once against this trait and runs unmodified for a
/// plain value (`f64`) or for a forward-mode differentiable number supplied
/// by the caller. Derivative propagation is entirely the implementor's
/// responsibility; the kernel only calls [Scalar::value] where derivative
/// information must be suppressed (geometry lookups and detached kinematic
/// checks).
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + From<f64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
{
    /// Returns the plain value with derivative information suppressed
    fn value(&self) -> f64;

    /// Calculates the exponential function
    fn exp(self) -> Self;

    /// Calculates the natural logarithm
    fn ln(self) -> Self;

    /// Calculates the square root
    fn sqrt(self) -> Self;

    /// Calculates the cubic root
    fn cbrt(self) -> Self;

    /// Calculates the power with a constant exponent
    fn powf(self, n: f64) -> Self;

    /// Calculates the absolute value
    fn abs(self) -> Self;

    /// Calculates bᵃ where a is this scalar and b > 0 is a constant base
    fn pow_base(self, base: f64) -> Self {
        (self * f64::ln(base)).exp()
    }
}

impl Scalar for f64 {
    fn value(&self) -> f64 {
        *self
    }
    fn exp(self) -> Self {
        f64::exp(self)
    }
    fn ln(self) -> Self {
        f64::ln(self)
    }
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    fn cbrt(self) -> Self {
        f64::cbrt(self)
    }
    fn powf(self, n: f64) -> Self {
        f64::powf(self, n)
    }
    fn abs(self) -> Self {
        f64::abs(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scalar;
    use russell_lab::approx_eq;

    fn generic_sum<S: Scalar>(a: S, b: S) -> S {
        (a * b + a.exp()).sqrt() - 1.0
    }

    #[test]
    fn f64_implementation_works() {
        let a = 2.0_f64;
        assert_eq!(a.value(), 2.0);
        approx_eq(Scalar::cbrt(8.0), 2.0, 1e-15);
        approx_eq(Scalar::powf(3.0, 2.0), 9.0, 1e-15);
        approx_eq(Scalar::pow_base(2.0, 3.0), 9.0, 1e-14);
        let res = generic_sum(1.0, 2.0);
        approx_eq(res, f64::sqrt(2.0 + f64::exp(1.0)) - 1.0, 1e-15);
    }
}
