use serde::{Deserialize, Serialize};

/// Defines the policy applied when the erosion exposure time rolls over
///
/// The upstream behavior leaves the failure indicator untouched on rollover;
/// `MarkFailed` enables the alternative of incrementing it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ErosionFailure {
    /// Resets the exposure clock without touching the failure indicator
    Ignore,

    /// Resets the exposure clock and increments the failure indicator
    MarkFailed,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
