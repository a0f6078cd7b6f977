//! Random source for the stage.
//!
//! The stage is generic over any `rand::Rng`, so tests inject a seeded
//! `SmallRng` and the page seeds one from the browser clock.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::Vec2;

pub type StageRng = SmallRng;

/// Seeded generator (deterministic for a given seed)
pub fn seeded(seed: u64) -> StageRng {
    SmallRng::seed_from_u64(seed)
}

/// Seed drawn from the host clock
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let a = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let b = js_sys::Date::now() as u64;
        (a << 32) ^ b
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed)
    }
}

/// Bernoulli draw; out-of-range probabilities are clamped
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    let p = p.clamp(0.0, 1.0) as f64;
    rng.gen_bool(p)
}

/// Uniform in [lo, hi); returns `lo` for an empty or non-finite range
#[inline]
pub fn range<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if !(hi > lo && (hi - lo).is_finite()) {
        return lo;
    }
    rng.gen_range(lo..hi)
}

/// Unit vector with uniformly random direction
pub fn direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..16 {
            assert_eq!(range(&mut a, 0.0, 10.0), range(&mut b, 0.0, 10.0));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = seeded(1);
        assert!((0..100).all(|_| !chance(&mut rng, 0.0)));
        assert!((0..100).all(|_| chance(&mut rng, 1.0)));
        assert!(chance(&mut rng, 3.0));
    }

    #[test]
    fn direction_is_unit_length() {
        let mut rng = seeded(2);
        for _ in 0..32 {
            assert!((direction(&mut rng).length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn empty_range_returns_low_bound() {
        let mut rng = seeded(3);
        assert_eq!(range(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(range(&mut rng, 5.0, 1.0), 5.0);
    }

    #[test]
    fn unbounded_range_returns_low_bound() {
        let mut rng = seeded(3);
        assert_eq!(range(&mut rng, 0.0, f32::INFINITY), 0.0);
        assert_eq!(range(&mut rng, -f32::MAX, f32::MAX), -f32::MAX);
        assert_eq!(range(&mut rng, 1.0, f32::NAN), 1.0);
    }
}
