#![allow(dead_code)]

use gridhash::LatLon;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Points uniformly distributed in the square `[0, side)²`.
pub fn uniform_plane(n: usize, side: f64, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.gen_range(0.0..side), rng.gen_range(0.0..side)])
        .collect()
}

/// Points uniformly distributed in the cube `[-side/2, side/2)³`.
pub fn uniform_cube(n: usize, side: f64, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half = side / 2.0;
    (0..n)
        .map(|_| {
            [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ]
        })
        .collect()
}

/// Points uniformly distributed over the unit sphere.
pub fn uniform_sphere(n: usize, seed: u64) -> Vec<LatLon> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let y: f64 = rng.gen_range(0.0..2.0);
            let lat = (1.0 - y).acos() - FRAC_PI_2;
            LatLon::new(lat, rng.gen_range(0.0..TAU))
        })
        .collect()
}

/// Points crowded around both poles, within `cap` radians of them.
pub fn polar_caps(n: usize, cap: f64, seed: u64) -> Vec<LatLon> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let lat = FRAC_PI_2 - rng.gen_range(0.0..cap);
            let lat = if i % 2 == 0 { lat } else { -lat };
            LatLon::new(lat, rng.gen_range(0.0..TAU))
        })
        .collect()
}

/// Points hugging the longitude seam at 0 / 2π and the equator.
pub fn seams(n: usize, width: f64, seed: u64) -> Vec<LatLon> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lon = rng.gen_range(-width..width);
            let lat = rng.gen_range(-width..width).clamp(-PI / 2.0, PI / 2.0);
            LatLon::new(lat, lon)
        })
        .collect()
}
