use super::Tensor2;
use crate::base::Scalar;

/// Defines the truncation order of the exponential Taylor series
const EXP_SERIES_ORDER: usize = 16;

/// Defines the maximum number of iterations of the polar decomposition
const POLAR_MAX_IT: usize = 60;

/// Calculates the matrix exponential by scaling-and-squaring
///
/// ```text
/// exp(A) = (exp(A/2ⁿ))^(2ⁿ) ,  exp(B) ≈ Σ_{k=0}^{K} Bᵏ/k!
/// ```
///
/// The scaled argument has norm ≤ ½, for which the truncated series is
/// accurate to machine precision. The number of squarings is decided on the
/// detached norm so the same path is taken by plain and differentiable
/// scalars.
pub fn mat_exp<S: Scalar>(a: &Tensor2<S>) -> Tensor2<S> {
    let dim = a.dim();
    let a_norm = a.detach().norm();
    let n_squarings = if a_norm > 0.5 {
        f64::ceil(f64::log2(a_norm / 0.5)) as usize
    } else {
        0
    };
    let scale = S::from(1.0 / f64::powi(2.0, n_squarings as i32));
    let b = a.scaled(scale);
    let mut res = Tensor2::identity(dim);
    let mut term = Tensor2::identity(dim);
    for k in 1..=EXP_SERIES_ORDER {
        term = term.dot(&b).scaled(S::from(1.0 / (k as f64)));
        res = res.add(&term);
    }
    for _ in 0..n_squarings {
        res = res.dot(&res);
    }
    res
}

/// Calculates the orthogonal factor Q of the polar decomposition F = Q·U
///
/// Uses the Newton iteration for the orthogonal polar factor:
///
/// ```text
/// Q ← ½ (Q + Q⁻ᵀ)
/// ```
///
/// The iteration converges quadratically for any non-singular F; the caller
/// must guarantee a non-singular input.
pub fn polar_rotation(f: &Tensor2<f64>) -> Tensor2<f64> {
    let mut q = f.clone();
    for _ in 0..POLAR_MAX_IT {
        let next = q.add(&q.inverse().transpose()).scaled(0.5);
        let delta = next.sub(&q).norm();
        q = next;
        if delta <= f64::EPSILON * (1.0 + q.norm()) {
            break;
        }
    }
    q
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{mat_exp, polar_rotation};
    use crate::tensor::Tensor2;
    use russell_lab::approx_eq;

    #[test]
    fn mat_exp_of_zero_is_identity() {
        let zero = Tensor2::<f64>::new(3);
        let res = mat_exp(&zero);
        for i in 0..3 {
            for j in 0..3 {
                let correct = if i == j { 1.0 } else { 0.0 };
                approx_eq(res.get(i, j), correct, 1e-15);
            }
        }
    }

    #[test]
    fn mat_exp_of_diagonal_matches_scalar_exp() {
        let aa = Tensor2::<f64>::from_matrix(
            3,
            &[[0.3, 0.0, 0.0], [0.0, -1.2, 0.0], [0.0, 0.0, 2.5]],
        );
        let res = mat_exp(&aa);
        approx_eq(res.get(0, 0), f64::exp(0.3), 1e-14);
        approx_eq(res.get(1, 1), f64::exp(-1.2), 1e-14);
        approx_eq(res.get(2, 2), f64::exp(2.5), 1e-12);
        approx_eq(res.get(0, 1), 0.0, 1e-15);
    }

    #[test]
    fn mat_exp_of_traceless_has_unit_det() {
        // skew/deviatoric argument: det(exp(A)) = exp(tr(A)) = 1
        let aa = Tensor2::<f64>::from_matrix(
            3,
            &[[0.1, 0.4, 0.0], [0.4, -0.3, 0.2], [0.0, 0.2, 0.2]],
        );
        approx_eq(aa.trace(), 0.0, 1e-15);
        let res = mat_exp(&aa);
        approx_eq(res.det(), 1.0, 1e-13);
    }

    #[test]
    fn polar_rotation_recovers_pure_rotation() {
        let (c, s) = (f64::cos(0.4), f64::sin(0.4));
        let rot = Tensor2::<f64>::from_matrix(
            3,
            &[[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        );
        // F = R·U with U = diag(2, 0.5, 1)
        let uu = Tensor2::<f64>::from_matrix(
            3,
            &[[2.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.0]],
        );
        let ff = rot.dot(&uu);
        let qq = polar_rotation(&ff);
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(qq.get(i, j), rot.get(i, j), 1e-12);
            }
        }
        // Q is orthogonal
        let check = qq.dot(&qq.transpose());
        for i in 0..3 {
            for j in 0..3 {
                let correct = if i == j { 1.0 } else { 0.0 };
                approx_eq(check.get(i, j), correct, 1e-12);
            }
        }
    }
}
