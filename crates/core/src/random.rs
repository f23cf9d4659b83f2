use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform `f32` in `[low, high)`.
pub fn range_f32(rng: &mut ChaCha8Rng, low: f32, high: f32) -> f32 {
    let unit = (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
    low + (high - low) * unit
}
