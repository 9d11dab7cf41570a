//! AArch64 CPU feature flags.
//!
//! Each flag is a named instruction-set capability with a fixed ordinal in
//! `0..Feature::COUNT`. The ordinal determines the flag's bit position in a
//! [`FeatureSet`](crate::FeatureSet) and its place in iteration order.

/// A named AArch64 CPU capability.
///
/// Flags are `Copy` and ordered by ordinal. The display label is the
/// lowercase `/proc/cpuinfo`-style name, e.g. `asimd` for [`Feature::Neon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feature {
  /// Scalar floating-point (FP).
  Fp = 0,
  /// Advanced SIMD (NEON).
  Neon,
  /// CRC32 instructions.
  Crc32,
  /// Large System Extensions (FEAT_LSE atomics).
  Lse,
  /// AES instructions.
  Aes,
  /// Polynomial multiply (PMULL/PMULL2).
  Pmull,
  /// SHA-1 instructions.
  Sha1,
  /// SHA-256 instructions.
  Sha2,
  /// SHA-3 instructions (includes EOR3).
  Sha3,
  /// SHA-512 instructions.
  Sha512,
  /// SM3 instructions.
  Sm3,
  /// SM4 instructions.
  Sm4,
  /// SIMD rounding doubling multiply accumulate (FEAT_RDM).
  Rdm,
  /// SIMD dot product (FEAT_DotProd).
  DotProd,
  /// Half-precision scalar floating-point (FEAT_FP16).
  FpHalf,
  /// Half-precision SIMD arithmetic.
  NeonHalf,
  /// Complex number SIMD (FEAT_FCMA).
  Fcma,
  /// JavaScript-style FP→int conversion (FEAT_JSCVT).
  Jscvt,
  /// Round to 32-bit integer (FEAT_FRINTTS).
  Frintts,
  /// Data cache clean to point of persistence (FEAT_DPB).
  Dcpop,
  /// Int8 matrix multiply (FEAT_I8MM).
  I8mm,
  /// BFloat16 arithmetic (FEAT_BF16).
  Bf16,
  /// Hardware random number generation (FEAT_RNG).
  Rng,
  /// Scalable Vector Extension.
  Sve,
  /// Scalable Vector Extension 2.
  Sve2,
  /// Standardized memory operations (FEAT_MOPS).
  ///
  /// Keep this last: [`Feature::COUNT`] is derived from it.
  Mops,
}

impl Feature {
  /// Number of defined flags. Valid ordinals are `0..COUNT`.
  pub const COUNT: usize = Feature::Mops as usize + 1;

  /// All flags, in ascending ordinal order.
  pub const ALL: [Feature; Feature::COUNT] = [
    Feature::Fp,
    Feature::Neon,
    Feature::Crc32,
    Feature::Lse,
    Feature::Aes,
    Feature::Pmull,
    Feature::Sha1,
    Feature::Sha2,
    Feature::Sha3,
    Feature::Sha512,
    Feature::Sm3,
    Feature::Sm4,
    Feature::Rdm,
    Feature::DotProd,
    Feature::FpHalf,
    Feature::NeonHalf,
    Feature::Fcma,
    Feature::Jscvt,
    Feature::Frintts,
    Feature::Dcpop,
    Feature::I8mm,
    Feature::Bf16,
    Feature::Rng,
    Feature::Sve,
    Feature::Sve2,
    Feature::Mops,
  ];

  /// Returns the human-readable name for this flag.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Feature::Fp => "fp",
      Feature::Neon => "asimd",
      Feature::Crc32 => "crc32",
      Feature::Lse => "atomics",
      Feature::Aes => "aes",
      Feature::Pmull => "pmull",
      Feature::Sha1 => "sha1",
      Feature::Sha2 => "sha2",
      Feature::Sha3 => "sha3",
      Feature::Sha512 => "sha512",
      Feature::Sm3 => "sm3",
      Feature::Sm4 => "sm4",
      Feature::Rdm => "asimdrdm",
      Feature::DotProd => "asimddp",
      Feature::FpHalf => "fphp",
      Feature::NeonHalf => "asimdhp",
      Feature::Fcma => "fcma",
      Feature::Jscvt => "jscvt",
      Feature::Frintts => "frint",
      Feature::Dcpop => "dcpop",
      Feature::I8mm => "i8mm",
      Feature::Bf16 => "bf16",
      Feature::Rng => "rng",
      Feature::Sve => "sve",
      Feature::Sve2 => "sve2",
      Feature::Mops => "mops",
    }
  }

  /// Look up a flag by ordinal.
  ///
  /// The ordinal must be in `0..COUNT`; anything else is a programmer error.
  #[inline]
  pub(crate) const fn from_ordinal(ordinal: u8) -> Feature {
    debug_assert!((ordinal as usize) < Feature::COUNT);
    Feature::ALL[ordinal as usize]
  }
}

impl core::fmt::Display for Feature {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

// Flag ordinals index bits of a u64 mask.
const _: () = assert!(Feature::COUNT < 64);

// ALL must list every flag at its own ordinal.
const _: () = {
  let mut i = 0;
  while i < Feature::COUNT {
    assert!(Feature::ALL[i] as usize == i);
    i += 1;
  }
};
