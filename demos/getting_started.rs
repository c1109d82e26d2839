//! Getting Started with gridhash
//!
//! Builds grid indexes over a handful of planar and spherical points and
//! compares them against the brute-force scan.

use gridhash::{BruteForce, CartesianGrid, GeoGrid, IndexBuilder, LatLon, NeighborSearch};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== gridhash - Getting Started ===\n");

    // ========================================
    // 1. Points in the plane
    // ========================================
    println!("1. Cartesian grid");
    println!("-----------------");

    let points = vec![[0.0, 0.0], [0.99, 0.0], [1.01, 0.0], [3.0, 2.5], [3.4, 2.2]];
    let grid = CartesianGrid::build(points.clone(), 1.0)?;

    for i in 0..grid.len() {
        let result = grid.find_neighbors(i)?;
        println!(
            "   point {} {:?}: neighbors {:?} ({} candidates)",
            i, points[i], result.indices, result.candidates_examined
        );
    }

    // ========================================
    // 2. Cities on the sphere
    // ========================================
    println!("\n2. Geographic grid");
    println!("------------------");

    let cities = [
        ("New York", LatLon::from_degrees(40.7128, -74.0060)),
        ("Newark", LatLon::from_degrees(40.7357, -74.1724)),
        ("Philadelphia", LatLon::from_degrees(39.9526, -75.1652)),
        ("London", LatLon::from_degrees(51.5074, -0.1278)),
        ("Paris", LatLon::from_degrees(48.8566, 2.3522)),
        ("Fiji", LatLon::from_degrees(-17.7134, 178.0650)),
        ("Samoa", LatLon::from_degrees(-13.7590, -172.1046)),
    ];

    // 0.1 rad is roughly 640 km on the Earth
    let grid: GeoGrid = IndexBuilder::new(0.1)
        .exclude_self(true)
        .build(cities.iter().map(|(_, p)| *p).collect())?;

    for (i, (name, _)) in cities.iter().enumerate() {
        let result = grid.find_neighbors(i)?;
        let names: Vec<&str> = result.indices.iter().map(|&j| cities[j].0).collect();
        println!("   {:<13} {:?}", name, names);
    }

    // ========================================
    // 3. Grid vs brute force
    // ========================================
    println!("\n3. Candidates examined");
    println!("----------------------");

    let points: Vec<[f64; 2]> = (0..2_500)
        .map(|i| [(i % 50) as f64 * 0.4, (i / 50) as f64 * 0.4])
        .collect();
    let grid = CartesianGrid::build(points.clone(), 1.0)?;
    let brute = BruteForce::build(points, 1.0)?;

    let grid_stats = grid.stats()?;
    let brute_stats = brute.stats()?;
    println!(
        "   grid:  {} neighbors from {:.1} candidates per query",
        grid_stats.neighbors_found,
        grid_stats.mean_candidates()
    );
    println!(
        "   brute: {} neighbors from {:.1} candidates per query",
        brute_stats.neighbors_found,
        brute_stats.mean_candidates()
    );

    Ok(())
}
