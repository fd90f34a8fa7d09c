use crate::StrError;
use russell_lab::Vector;

/// Implements a piecewise-linear lookup table of (x,y) samples
///
/// The table is immutable after construction. Queries below the first sample
/// clamp to the first y; queries above the last sample clamp to the last y.
pub struct LookupTable {
    /// Holds the abscissae (ascending)
    xx: Vector,

    /// Holds the ordinates
    yy: Vector,
}

impl LookupTable {
    /// Allocates a new instance, validating the samples
    ///
    /// The abscissae must be strictly ascending; validation happens here so
    /// that [LookupTable::interpolate] can run unchecked.
    pub fn new(xx: &[f64], yy: &[f64]) -> Result<Self, StrError> {
        if xx.len() != yy.len() {
            return Err("number of x and y samples must match");
        }
        if xx.is_empty() {
            return Err("table must have at least one sample");
        }
        if xx.windows(2).any(|w| w[1] <= w[0]) {
            return Err("x samples must be strictly ascending");
        }
        let n = xx.len();
        let mut table = LookupTable {
            xx: Vector::new(n),
            yy: Vector::new(n),
        };
        for i in 0..n {
            table.xx[i] = xx[i];
            table.yy[i] = yy[i];
        }
        Ok(table)
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.xx.dim()
    }

    /// Interpolates at x with clamping below and above the sampled range
    pub fn interpolate(&self, x: f64) -> f64 {
        let n = self.xx.dim();
        if x <= self.xx[0] {
            return self.yy[0];
        }
        if x >= self.xx[n - 1] {
            return self.yy[n - 1];
        }
        for i in 0..n - 1 {
            if x <= self.xx[i + 1] {
                let t = (x - self.xx[i]) / (self.xx[i + 1] - self.xx[i]);
                return self.yy[i] + t * (self.yy[i + 1] - self.yy[i]);
            }
        }
        self.yy[n - 1]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LookupTable;
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            LookupTable::new(&[1.0, 2.0], &[1.0]).err(),
            Some("number of x and y samples must match")
        );
        assert_eq!(
            LookupTable::new(&[], &[]).err(),
            Some("table must have at least one sample")
        );
        assert_eq!(
            LookupTable::new(&[1.0, 1.0], &[2.0, 3.0]).err(),
            Some("x samples must be strictly ascending")
        );
        assert_eq!(
            LookupTable::new(&[2.0, 1.0], &[2.0, 3.0]).err(),
            Some("x samples must be strictly ascending")
        );
    }

    #[test]
    fn interpolate_clamps_below_and_above() {
        let table = LookupTable::new(&[0.0, 10.0, 20.0], &[1.0, 3.0, -1.0]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.interpolate(-100.0), 1.0);
        assert_eq!(table.interpolate(0.0), 1.0);
        assert_eq!(table.interpolate(100.0), -1.0);
        assert_eq!(table.interpolate(20.0), -1.0);
    }

    #[test]
    fn interpolate_is_exact_at_samples() {
        let table = LookupTable::new(&[-1.0, 0.5, 2.0, 7.0], &[4.0, 2.0, 8.0, -3.0]).unwrap();
        assert_eq!(table.interpolate(-1.0), 4.0);
        assert_eq!(table.interpolate(0.5), 2.0);
        assert_eq!(table.interpolate(2.0), 8.0);
        assert_eq!(table.interpolate(7.0), -3.0);
    }

    #[test]
    fn interpolate_is_linear_between_samples() {
        let table = LookupTable::new(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
        approx_eq(table.interpolate(0.5), 1.0, 1e-15);
        approx_eq(table.interpolate(1.0), 2.0, 1e-15);
        approx_eq(table.interpolate(1.5), 3.0, 1e-15);
    }

    #[test]
    fn single_sample_acts_as_constant() {
        let table = LookupTable::new(&[5.0], &[7.0]).unwrap();
        assert_eq!(table.interpolate(-1.0), 7.0);
        assert_eq!(table.interpolate(5.0), 7.0);
        assert_eq!(table.interpolate(99.0), 7.0);
    }
}
