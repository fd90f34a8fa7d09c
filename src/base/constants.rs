/// Defines the constant √(2/3) appearing in the J2 yield condition
pub const SQRT_2_BY_3: f64 = 0.81649658092772603;

/// Defines the cutoff on the freezing-curve exponent argument
///
/// Beyond ±45 the logistic saturates to exactly 0 or 1 with zero slope,
/// keeping exp() far from overflow/underflow.
pub const FREEZE_ARG_CUTOFF: f64 = 45.0;

/// Defines the default tolerance on the trial yield function
pub const DEFAULT_YIELD_TOLERANCE: f64 = 1e-12;

/// Defines the default relative tolerance of the local Newton solve
pub const DEFAULT_NEWTON_TOLERANCE: f64 = 1e-12;

/// Defines the default iteration budget of the local Newton solve
pub const DEFAULT_NEWTON_MAX_IT: usize = 30;

/// Defines the default freezing-curve shift fraction
pub const DEFAULT_FREEZE_SHIFT: f64 = 0.25;
