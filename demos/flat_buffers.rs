//! Example of the flat-buffer entry points used at the FFI boundary.
//!
//! Run with: cargo run --example flat_buffers

use waypoint_matcher::{all_touched_flat, any_touched_flat, evaluator, TouchEvaluator};

fn main() {
    // Targets as [lat, lon, radius_m] triplets
    let targets = [
        51.5074, -0.1278, 25.0, // London checkpoint
        48.8566, 2.3522, 25.0, // Paris checkpoint (never reached)
    ];

    // Track as [lat, lon] pairs
    let track = [
        51.5074, -0.1278, //
        51.5080, -0.1290, //
        51.5090, -0.1300,
    ];

    println!("Flat Buffer Example\n");
    println!("evaluator: {}", evaluator().name());
    println!("{} targets vs {} samples", targets.len() / 3, track.len() / 2);

    println!("any_touched: {}", any_touched_flat(&targets, &track));
    println!("all_touched: {}", all_touched_flat(&targets, &track));
}
