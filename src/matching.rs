//! Waypoint touch evaluation.
//!
//! This module decides whether a GPS track "touches" configured waypoints:
//! a target is touched when at least one track sample lies within its
//! tolerance radius. Two conforming implementations exist behind the
//! [`TouchEvaluator`] trait:
//!
//! - [`ReferenceEvaluator`] - portable scalar path, always compiled.
//! - `ParallelEvaluator` - rayon-accelerated path (`parallel` feature) that
//!   fans the per-sample scan across threads.
//!
//! Both must return the same boolean for the same inputs; only latency may
//! differ. [`evaluator`] picks one at first use and hands it out for the
//! rest of the process.

use crate::geo_utils::haversine_km;
use crate::{GpsPoint, TargetPoint};
use log::info;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use crate::geo_utils::EARTH_RADIUS_KM;

/// Returns true if the target is reached by at least one track sample.
///
/// The tolerance radius is carried in meters and converted to kilometers
/// here to match [`haversine_km`]. The comparison is inclusive: a sample
/// exactly at the radius counts as touching. Scanning stops at the first
/// matching sample; an empty track touches nothing.
pub fn target_touched(target: &TargetPoint, track: &[GpsPoint]) -> bool {
    let radius_km = target.radius_meters / 1000.0;
    track
        .iter()
        .any(|sample| haversine_km(&target.position, sample) <= radius_km)
}

/// The touch-evaluation capability over a whole target set.
///
/// `any_touched` and `all_touched` follow the usual vacuous semantics: with
/// no targets configured there is nothing to touch, so `any` is `false` and
/// `all` is `true`. Callers wanting blacklist semantics ("none of these
/// points may be visited") should invert `any_touched`.
pub trait TouchEvaluator: Send + Sync {
    /// True iff at least one target is touched by the track.
    fn any_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool;

    /// True iff every target is touched by the track.
    fn all_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool;

    /// Short name used when logging which implementation was selected.
    fn name(&self) -> &'static str;
}

/// Portable scalar implementation.
///
/// Straight short-circuiting predicates over the target set; worst case
/// O(|targets| x |track|) distance computations.
pub struct ReferenceEvaluator;

impl TouchEvaluator for ReferenceEvaluator {
    fn any_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
        targets.iter().any(|target| target_touched(target, track))
    }

    fn all_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
        targets.iter().all(|target| target_touched(target, track))
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}

/// Rayon-accelerated implementation.
///
/// Targets are evaluated in order (target sets are small), while the
/// per-sample scan is parallelized across the track. Parallel `any` may
/// compute more distances than the sequential scan before settling; the
/// returned boolean is the same.
#[cfg(feature = "parallel")]
pub struct ParallelEvaluator;

#[cfg(feature = "parallel")]
impl ParallelEvaluator {
    fn target_touched_parallel(target: &TargetPoint, track: &[GpsPoint]) -> bool {
        use rayon::prelude::*;

        let radius_km = target.radius_meters / 1000.0;
        let target_lat = target.position.latitude;
        let target_lon = target.position.longitude;
        // Target-side trigonometry is loop-invariant and hoisted out of the
        // scan. The remaining operation sequence must stay identical to
        // haversine_km so both evaluators agree bit for bit.
        let cos_lat1 = target_lat.to_radians().cos();

        track.par_iter().any(|sample| {
            let dlat = (sample.latitude - target_lat).to_radians();
            let dlon = (sample.longitude - target_lon).to_radians();
            let lat2 = sample.latitude.to_radians();

            let a = (dlat / 2.0).sin().powi(2) + cos_lat1 * lat2.cos() * (dlon / 2.0).sin().powi(2);
            let a = a.clamp(0.0, 1.0);

            2.0 * EARTH_RADIUS_KM * a.sqrt().asin() <= radius_km
        })
    }
}

#[cfg(feature = "parallel")]
impl TouchEvaluator for ParallelEvaluator {
    fn any_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
        targets
            .iter()
            .any(|target| Self::target_touched_parallel(target, track))
    }

    fn all_touched(&self, targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
        targets
            .iter()
            .all(|target| Self::target_touched_parallel(target, track))
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}

static SELECTED: OnceLock<&'static dyn TouchEvaluator> = OnceLock::new();

/// Returns the evaluator behind the crate-level entry points.
///
/// The accelerated implementation is preferred; the reference one is used
/// where it is unavailable (feature not compiled in, or a single-threaded
/// host). Availability is probed once per process and the choice logged.
pub fn evaluator() -> &'static dyn TouchEvaluator {
    *SELECTED.get_or_init(|| {
        let selected = select();
        info!(
            "[WaypointMatcherRust] touch evaluation using {} implementation",
            selected.name()
        );
        selected
    })
}

fn select() -> &'static dyn TouchEvaluator {
    #[cfg(feature = "parallel")]
    {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        if threads > 1 {
            return &ParallelEvaluator;
        }
    }
    &ReferenceEvaluator
}

// =============================================================================
// Unit Tests
// =============================================================================
