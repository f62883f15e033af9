//! Basic example of checking a GPS track against waypoint sets.
//!
//! Run with: cargo run --example route_check

use waypoint_matcher::{
    all_touched, any_touched, GpsPoint, TargetPoint, DEFAULT_TARGET_RADIUS_METERS,
};

fn main() {
    // GPS samples recorded during a run along the Thames
    let track = vec![
        GpsPoint::new(51.5074, -0.1278), // Start
        GpsPoint::new(51.5080, -0.1290),
        GpsPoint::new(51.5090, -0.1300),
        GpsPoint::new(51.5100, -0.1310),
        GpsPoint::new(51.5110, -0.1320), // End
    ];

    // Checkpoints the route template expects the run to pass through
    let checkpoints = vec![
        TargetPoint::new(GpsPoint::new(51.5074, -0.1278), DEFAULT_TARGET_RADIUS_METERS),
        TargetPoint::new(GpsPoint::new(51.5110, -0.1320), DEFAULT_TARGET_RADIUS_METERS),
    ];

    // A zone the route must stay away from (Paris, comfortably avoided)
    let blacklist = vec![TargetPoint::new(
        GpsPoint::new(48.8566, 2.3522),
        DEFAULT_TARGET_RADIUS_METERS,
    )];

    println!("Waypoint Matching Example\n");

    println!("1. Route template ({} checkpoints):", checkpoints.len());
    println!("   any checkpoint touched: {}", any_touched(&checkpoints, &track));
    println!("   all checkpoints touched: {}", all_touched(&checkpoints, &track));

    println!("\n2. Blacklist ({} zones):", blacklist.len());
    println!("   violated: {}", any_touched(&blacklist, &track));

    // With no blacklist configured, nothing can be violated
    println!("\n3. Empty blacklist:");
    println!("   violated: {}", any_touched(&[], &track));
}
