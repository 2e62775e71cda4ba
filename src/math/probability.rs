//! Random draws used by subdivision, tagging and hole punching
//!
//! Every function takes the generator explicitly so callers decide whether
//! the sequence is seeded or drawn from the operating system.

use rand::Rng;

/// Standard normal sample using the Box–Muller transform
///
/// Only the cosine branch is used, so each call consumes two uniforms and
/// every sample is independent of the previous one.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Keep u1 away from zero so the logarithm stays finite
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Normal sample with the given mean and standard deviation
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    std_dev.mul_add(standard_normal(rng), mean)
}

/// Normal sample clamped into `[min, max]`
pub fn clamped_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
) -> f64 {
    normal(rng, mean, std_dev).clamp(min, max)
}

/// Uniform integer in `0..=max`
pub fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, max: u8) -> u8 {
    rng.random_range(0..=max)
}
