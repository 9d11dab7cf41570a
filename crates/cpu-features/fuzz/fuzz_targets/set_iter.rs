//! Fuzz target for FeatureSet iteration and rendering.
//!
//! Checks that iteration yields exactly the flags present, in ascending
//! ordinal order, and that the rendered form lists the same flags.

#![no_main]

use cpu_features::{Feature, FeatureSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bits: u64| {
  let set = FeatureSet::from_bits(bits);

  let flags: Vec<Feature> = set.iter().collect();
  assert_eq!(flags.len(), set.count() as usize, "iteration must yield count() flags");

  for pair in flags.windows(2) {
    assert!((pair[0] as u8) < (pair[1] as u8), "iteration must ascend by ordinal");
  }
  for f in &flags {
    assert!(set.contains(*f), "yielded flags must be members");
  }

  let rebuilt: FeatureSet = flags.iter().copied().collect();
  assert_eq!(rebuilt, set, "collecting the iteration must reproduce the set");

  let rendered = format!("{set}");
  if set.is_empty() {
    assert_eq!(rendered, "none", "empty set must render as none");
  } else {
    let labels: Vec<&str> = rendered.split(", ").collect();
    let expected: Vec<&str> = flags.iter().map(|f| f.name()).collect();
    assert_eq!(labels, expected, "rendering must list member labels in order");
  }
});
