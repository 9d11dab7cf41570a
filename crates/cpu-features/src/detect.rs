//! Platform feature detection.
//!
//! This module is the single boundary point to the execution environment.
//! It answers: "what capabilities does the machine running this code
//! actually provide?"

use crate::set::FeatureSet;

/// Probe the execution environment for its supported feature flags.
///
/// Detection is not implemented; the result is always [`FeatureSet::NONE`].
/// Callers must treat an empty result as "unknown", not as "no features
/// are needed".
#[inline]
#[must_use]
pub(crate) fn infer_from_os() -> FeatureSet {
  // TODO: Probe HWCAP/HWCAP2 from the auxiliary vector on Linux and sysctl
  // `hw.optional.*` keys on macOS, and map the results onto Feature bits.
  FeatureSet::NONE
}
