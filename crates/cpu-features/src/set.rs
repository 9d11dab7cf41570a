//! Feature set representation and iteration.
//!
//! [`FeatureSet`] is a packed bitmask over [`Feature`] ordinals. It answers
//! the question: "does the target support capability X?" Code generators
//! build a required set per instruction and check it against the target's
//! set with [`has()`](FeatureSet::has).

use crate::features::Feature;

// ─────────────────────────────────────────────────────────────────────────────
// FeatureSet
// ─────────────────────────────────────────────────────────────────────────────

/// A set of CPU feature flags, stored as a `u64` bitmask.
///
/// Bit `i` set means the flag with ordinal `i` is present. Bits at or above
/// [`Feature::COUNT`] are always zero.
///
/// # Thread Safety
///
/// `FeatureSet` is `Copy`, `Send`, and `Sync`. Copies are independent; no
/// synchronization is needed to pass sets across threads.
///
/// # Example
///
/// ```
/// use cpu_features::{Feature, FeatureSet};
///
/// let target = FeatureSet::from_features(&[Feature::Aes, Feature::Pmull, Feature::Neon]);
/// assert!(target.has(Feature::Aes | Feature::Pmull));
/// assert!(!target.contains(Feature::Sve));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FeatureSet(u64);

impl FeatureSet {
  /// Empty set (no flags).
  pub const NONE: Self = Self(0);

  /// Set containing the single given flag.
  #[inline]
  #[must_use]
  pub const fn of(feature: Feature) -> Self {
    // Feature ordinals are < 64 by construction, so the shift is well-defined.
    Self(1u64 << feature as u8)
  }

  /// Set containing all the given flags.
  ///
  /// Duplicates are harmless and argument order is irrelevant.
  #[inline]
  #[must_use]
  pub const fn from_features(features: &[Feature]) -> Self {
    let mut bits = 0u64;
    let mut i = 0;
    while i < features.len() {
      bits |= 1u64 << features[i] as u8;
      i += 1;
    }
    Self(bits)
  }

  /// Set containing every defined flag.
  #[inline]
  #[must_use]
  pub const fn all() -> Self {
    Self((1u64 << Feature::COUNT) - 1)
  }

  /// Query the execution environment for the flags it actually provides.
  ///
  /// Detection is not implemented yet and the result is always empty.
  /// Treat it as "unknown, conservatively empty", not "no features needed".
  #[inline]
  #[must_use]
  pub fn infer_from_os() -> Self {
    crate::detect::infer_from_os()
  }

  /// Create a set from raw mask bits.
  ///
  /// Bits at or above [`Feature::COUNT`] are discarded. Primarily useful
  /// for fuzzing and tests; normal usage should prefer the typed
  /// constructors.
  ///
  /// # Availability
  ///
  /// Only available in test builds or with the `testing` feature enabled.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u64) -> Self {
    Self(bits & Self::all().0)
  }

  /// Access the raw underlying mask.
  ///
  /// # Availability
  ///
  /// Only available in test builds or with the `testing` feature enabled.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// Add every flag in `other` to this set.
  #[inline]
  pub fn combine(&mut self, other: Self) {
    self.0 |= other.0;
  }

  /// Remove every flag in `other` from this set.
  #[inline]
  pub fn remove(&mut self, other: Self) {
    self.0 &= !other.0;
  }

  /// Add a single flag.
  #[inline]
  pub fn insert(&mut self, feature: Feature) {
    self.combine(Self::of(feature));
  }

  /// Remove a single flag.
  #[inline]
  pub fn clear(&mut self, feature: Feature) {
    self.remove(Self::of(feature));
  }

  /// Union, returning a new set.
  #[inline]
  #[must_use]
  pub const fn with(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Difference, returning a new set.
  #[inline]
  #[must_use]
  pub const fn without(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if every flag in `required` is present.
  ///
  /// This is the dispatch check. An empty `required` set is trivially
  /// satisfied; iteration termination relies on that.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Check if a single flag is present.
  #[inline(always)]
  #[must_use]
  pub const fn contains(self, feature: Feature) -> bool {
    self.0 & (1u64 << feature as u8) != 0
  }

  /// Number of flags present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Check if no flags are present.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Iterate the flags present, in ascending ordinal order.
  #[inline]
  #[must_use]
  pub fn iter(&self) -> Iter<'_> {
    // Start at the lowest set bit; an empty set starts already exhausted.
    let next = if self.0 == 0 {
      Feature::COUNT as u8
    } else {
      self.0.trailing_zeros() as u8
    };
    Iter { set: self, next }
  }
}

impl From<Feature> for FeatureSet {
  #[inline]
  fn from(feature: Feature) -> Self {
    Self::of(feature)
  }
}

impl FromIterator<Feature> for FeatureSet {
  fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
    let mut set = Self::NONE;
    set.extend(iter);
    set
  }
}

impl Extend<Feature> for FeatureSet {
  fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
    for feature in iter {
      self.insert(feature);
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────
//
// `|` builds sets from flags and unions sets, so call sites can express a
// requirement as `Feature::Aes | Feature::Pmull` without naming FeatureSet.

impl core::ops::BitOr for FeatureSet {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.with(rhs)
  }
}

impl core::ops::BitOr<Feature> for FeatureSet {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Feature) -> Self {
    self.with(Self::of(rhs))
  }
}

impl core::ops::BitOr<FeatureSet> for Feature {
  type Output = FeatureSet;

  #[inline]
  fn bitor(self, rhs: FeatureSet) -> FeatureSet {
    FeatureSet::of(self).with(rhs)
  }
}

impl core::ops::BitOr for Feature {
  type Output = FeatureSet;

  #[inline]
  fn bitor(self, rhs: Feature) -> FeatureSet {
    FeatureSet::of(self).with(FeatureSet::of(rhs))
  }
}

impl core::ops::BitOrAssign for FeatureSet {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    self.combine(rhs);
  }
}

impl core::ops::BitOrAssign<Feature> for FeatureSet {
  #[inline]
  fn bitor_assign(&mut self, rhs: Feature) {
    self.insert(rhs);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

impl core::fmt::Display for FeatureSet {
  /// Comma-separated flag labels in ascending ordinal order.
  ///
  /// The empty set renders as `none`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_empty() {
      return f.write_str("none");
    }
    let mut first = true;
    for feature in self {
      if !first {
        f.write_str(", ")?;
      }
      first = false;
      f.write_str(feature.name())?;
    }
    Ok(())
  }
}

impl core::fmt::Debug for FeatureSet {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "FeatureSet({self})")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iteration
// ─────────────────────────────────────────────────────────────────────────────

/// Iterator over the flags present in a [`FeatureSet`].
///
/// Yields flags in ascending ordinal order without allocating. The iterator
/// borrows the set, so the set cannot be mutated or dropped while iteration
/// is in progress.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
  set: &'a FeatureSet,
  /// Next candidate ordinal; `Feature::COUNT` once exhausted.
  next: u8,
}

impl Iterator for Iter<'_> {
  type Item = Feature;

  fn next(&mut self) -> Option<Feature> {
    while (self.next as usize) < Feature::COUNT {
      let ordinal = self.next;
      self.next += 1;
      if self.set.0 & (1u64 << ordinal) != 0 {
        return Some(Feature::from_ordinal(ordinal));
      }
    }
    None
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    // `next` never exceeds Feature::COUNT (< 64), so the shift is in range.
    let remaining = (self.set.0 >> self.next).count_ones() as usize;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl core::iter::FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FeatureSet {
  type Item = Feature;
  type IntoIter = Iter<'a>;

  #[inline]
  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate std;

  use std::format;
  use std::vec::Vec;

  use super::*;

  #[test]
  fn test_empty_and_all() {
    assert!(FeatureSet::NONE.is_empty());
    assert_eq!(FeatureSet::NONE.count(), 0);
    assert_eq!(FeatureSet::default(), FeatureSet::NONE);

    let all = FeatureSet::all();
    assert_eq!(all.count() as usize, Feature::COUNT);
    for f in Feature::ALL {
      assert!(!FeatureSet::NONE.contains(f), "empty set must not contain {f:?}");
      assert!(all.contains(f), "all() must contain {f:?}");
    }
  }

  #[test]
  fn test_of_and_from_features() {
    let aes = FeatureSet::of(Feature::Aes);
    assert_eq!(aes.count(), 1);
    assert!(aes.contains(Feature::Aes));
    assert!(!aes.contains(Feature::Pmull));
    assert_eq!(FeatureSet::from(Feature::Aes), aes);

    // Duplicates are idempotent; order is irrelevant.
    let a = FeatureSet::from_features(&[Feature::Aes, Feature::Sha2, Feature::Aes]);
    let b = FeatureSet::from_features(&[Feature::Sha2, Feature::Aes]);
    assert_eq!(a, b);
    assert_eq!(a.count(), 2);

    assert_eq!(FeatureSet::from_features(&[]), FeatureSet::NONE);
  }

  #[test]
  fn test_combine_remove() {
    let mut set = FeatureSet::NONE;
    set.combine(Feature::Fp | Feature::Neon);
    assert!(set.has(Feature::Fp | Feature::Neon));

    set.insert(Feature::Crc32);
    assert_eq!(set.count(), 3);

    set.remove(FeatureSet::of(Feature::Fp));
    assert!(!set.contains(Feature::Fp));
    assert!(set.contains(Feature::Neon));

    set.clear(Feature::Neon);
    set.clear(Feature::Crc32);
    assert!(set.is_empty());

    // Removing absent flags is a no-op.
    set.remove(FeatureSet::all());
    assert_eq!(set, FeatureSet::NONE);
  }

  #[test]
  fn test_with_without_are_pure() {
    let base = Feature::Sve | Feature::Sve2;
    let extended = base.with(FeatureSet::of(Feature::Bf16));
    assert_eq!(base.count(), 2);
    assert_eq!(extended.count(), 3);

    let reduced = extended.without(FeatureSet::of(Feature::Sve2));
    assert!(extended.contains(Feature::Sve2));
    assert!(!reduced.contains(Feature::Sve2));
  }

  #[test]
  fn test_has_superset_semantics() {
    let target = Feature::Aes | Feature::Pmull | Feature::Sha2;
    assert!(target.has(FeatureSet::of(Feature::Aes)));
    assert!(target.has(Feature::Aes | Feature::Sha2));
    assert!(!target.has(Feature::Aes | Feature::Sve));

    // The empty set is a subset of everything, including itself.
    assert!(target.has(FeatureSet::NONE));
    assert!(FeatureSet::NONE.has(FeatureSet::NONE));
  }

  #[test]
  fn test_operators() {
    let a = FeatureSet::of(Feature::Fp);
    let b = FeatureSet::of(Feature::Neon);
    assert_eq!(a | b, a.with(b));
    assert_eq!(Feature::Fp | Feature::Neon, a.with(b));
    assert_eq!(a | Feature::Neon, a.with(b));
    assert_eq!(Feature::Fp | b, a.with(b));

    let mut c = a;
    c |= b;
    c |= Feature::Crc32;
    assert_eq!(c.count(), 3);
  }

  #[test]
  fn test_from_iterator_and_extend() {
    let set: FeatureSet = [Feature::Rng, Feature::Dcpop].into_iter().collect();
    assert_eq!(set, Feature::Rng | Feature::Dcpop);

    let mut extended = set;
    extended.extend([Feature::Jscvt]);
    assert_eq!(extended.count(), 3);
  }

  #[test]
  fn test_iteration_order_and_count() {
    let set = FeatureSet::from_features(&[Feature::Sve, Feature::Fp, Feature::Aes]);
    let flags: Vec<Feature> = set.iter().collect();
    assert_eq!(flags, [Feature::Fp, Feature::Aes, Feature::Sve]);
    assert_eq!(flags.len(), set.count() as usize);

    assert_eq!(FeatureSet::NONE.iter().next(), None);

    let all: Vec<Feature> = FeatureSet::all().iter().collect();
    assert_eq!(all, Feature::ALL);
  }

  #[test]
  fn test_iterator_len_and_fused() {
    let set = Feature::Fp | Feature::Mops;
    let mut iter = set.iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(Feature::Fp));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(Feature::Mops));
    assert_eq!(iter.len(), 0);

    // Exhausted iterators stay exhausted.
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
  }

  #[test]
  fn test_into_iterator_for_ref() {
    let set = Feature::Sha1 | Feature::Sha2;
    let mut count = 0;
    for f in &set {
      assert!(set.contains(f));
      count += 1;
    }
    assert_eq!(count, 2);
  }

  #[test]
  fn test_display() {
    assert_eq!(format!("{}", FeatureSet::NONE), "none");
    assert_eq!(format!("{}", FeatureSet::of(Feature::Crc32)), "crc32");

    // Rendering order follows ordinals, not construction order.
    let set = FeatureSet::from_features(&[Feature::Aes, Feature::Fp]);
    assert_eq!(format!("{set}"), "fp, aes");
  }

  #[test]
  fn test_debug() {
    let set = Feature::Fp | Feature::Neon;
    assert_eq!(format!("{set:?}"), "FeatureSet(fp, asimd)");
    assert_eq!(format!("{:?}", FeatureSet::NONE), "FeatureSet(none)");
  }

  #[test]
  fn test_infer_from_os_is_conservative() {
    // Detection is a stub; the contract is "unknown, conservatively empty".
    assert_eq!(FeatureSet::infer_from_os(), FeatureSet::NONE);
  }

  #[test]
  fn test_from_bits_masks_undefined_range() {
    let set = FeatureSet::from_bits(u64::MAX);
    assert_eq!(set, FeatureSet::all());
    assert_eq!(set.bits(), FeatureSet::all().bits());
  }

  #[test]
  fn test_scenario_codegen_requirement() {
    // A dispatcher restricting a detected set to what a kernel needs.
    let required = Feature::Aes | Feature::Pmull;
    let target = FeatureSet::all().without(FeatureSet::of(Feature::Pmull));
    assert!(!target.has(required));
    assert!(target.with(FeatureSet::of(Feature::Pmull)).has(required));
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-Based Tests (proptest)
// Note: proptest uses the filesystem for failure persistence, which Miri
// doesn't support.
// ─────────────────────────────────────────────────────────────────────────────
