//! Typed AArch64 CPU feature flags with set algebra and iteration.
//!
//! This crate answers the question: "does the target support capability X?"
//! It is intended for code generators and runtime dispatchers that compose
//! and restrict instruction-set requirements.
//!
//! # Core Types
//!
//! - [`Feature`]: a named capability flag with a fixed ordinal
//! - [`FeatureSet`]: a packed bitmask over flags, with union, difference,
//!   superset tests, and cardinality
//! - [`Iter`]: a borrowing iterator over the flags present in a set
//!
//! # Usage
//!
//! ```
//! use cpu_features::{Feature, FeatureSet};
//!
//! // Requirements compose with `|`.
//! let required = Feature::Aes | Feature::Pmull;
//!
//! let mut target = FeatureSet::from_features(&[Feature::Fp, Feature::Neon]);
//! target.combine(required);
//! assert!(target.has(required));
//!
//! // Flags enumerate in ascending ordinal order.
//! assert_eq!(target.iter().count(), 4);
//! assert_eq!(format!("{target}"), "fp, asimd, aes, pmull");
//! ```
//!
//! # Detection
//!
//! [`FeatureSet::infer_from_os`] is the hook for runtime detection. It is
//! currently a stub returning the empty set; callers must treat that as
//! "unknown, conservatively empty".
//!
//! # Design Notes
//!
//! All operations are O(1) over a single `u64` mask, allocation-free, and
//! total over valid inputs. The flag count is checked against the mask
//! width at compile time.

#![no_std]

mod detect;
mod features;
mod set;

pub use features::Feature;
pub use set::{FeatureSet, Iter};
