//! Deterministic RNG construction.
//!
//! All randomness in the generation pass flows through a single PCG32
//! created here, so the same seed always yields the same assets. Playback
//! selection deliberately does not use this module; it draws from the
//! ambient thread RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}
