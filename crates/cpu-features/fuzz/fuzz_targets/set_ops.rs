//! Fuzz target for FeatureSet binary operations (union, difference).
//!
//! Tests algebraic properties:
//! - Commutativity: a.with(b) == b.with(a)
//! - Associativity of union
//! - Subset relationships after operations
//! - Count bounds

#![no_main]

use arbitrary::Arbitrary;
use cpu_features::FeatureSet;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  a: u64,
  b: u64,
  c: u64,
}

fuzz_target!(|input: Input| {
  let a = FeatureSet::from_bits(input.a);
  let b = FeatureSet::from_bits(input.b);
  let c = FeatureSet::from_bits(input.c);

  // ─── Commutativity ───
  assert_eq!(a.with(b), b.with(a), "union must be commutative");

  // ─── Associativity ───
  assert_eq!(a.with(b).with(c), a.with(b.with(c)), "union must be associative");

  // ─── Subset relationships after union ───
  let ab = a.with(b);
  assert!(ab.has(a), "union must contain first operand");
  assert!(ab.has(b), "union must contain second operand");

  // ─── Difference ───
  let diff = a.without(b);
  assert!(a.has(diff), "difference must be a subset of the left operand");
  assert!(diff.without(b) == diff, "difference must be disjoint from the right operand");

  // ─── Mutating forms agree with pure forms ───
  let mut m = a;
  m.combine(b);
  assert_eq!(m, a.with(b), "combine must agree with with");
  m.remove(b);
  assert_eq!(m, a.with(b).without(b), "remove must agree with without");

  // ─── Count bounds ───
  assert!(ab.count() >= a.count().max(b.count()), "union count must be >= operand counts");
  assert!(diff.count() <= a.count(), "difference count must be <= left operand count");

  // ─── Empty-set invariants ───
  assert!(a.has(FeatureSet::NONE), "every set must contain the empty set");
  assert_eq!(a.without(a), FeatureSet::NONE, "self-difference must be empty");
});
