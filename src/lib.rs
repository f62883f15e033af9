//! # Waypoint Matcher
//!
//! Geospatial containment matching between waypoint sets and GPS activity
//! tracks.
//!
//! Given a set of target waypoints (each with a tolerance radius in meters)
//! and the lat/long stream recorded during an activity, this library answers
//! whether the track touches any target, touches all targets, or touches
//! none of a blacklist.
//!
//! ## Features
//!
//! - **`parallel`** (default) - rayon-accelerated evaluation
//! - **`ffi`** - FFI bindings for mobile platforms (iOS/Android)
//!
//! ## Quick Start
//!
//! ```rust
//! use waypoint_matcher::{GpsPoint, TargetPoint, any_touched, all_touched};
//!
//! // Two checkpoints along the Thames, 25m tolerance each
//! let targets = vec![
//!     TargetPoint::new(GpsPoint::new(51.5074, -0.1278), 25.0),
//!     TargetPoint::new(GpsPoint::new(51.5080, -0.1290), 25.0),
//! ];
//!
//! // GPS samples recorded during a run
//! let track = vec![
//!     GpsPoint::new(51.5074, -0.1278),
//!     GpsPoint::new(51.5080, -0.1290),
//!     GpsPoint::new(51.5090, -0.1300),
//! ];
//!
//! assert!(any_touched(&targets, &track));
//! assert!(all_touched(&targets, &track));
//! ```
//!
//! The track order never matters: a target is touched when *some* sample
//! lies within its radius. For blacklist semantics ("the route must avoid
//! these points"), invert [`any_touched`].

// Great-circle distance (haversine on a fixed-radius sphere)
pub mod geo_utils;
pub use geo_utils::{haversine_km, EARTH_RADIUS_KM};

// Touch evaluation (matcher, evaluator implementations, selection)
pub mod matching;
#[cfg(feature = "parallel")]
pub use matching::ParallelEvaluator;
pub use matching::{evaluator, target_touched, ReferenceEvaluator, TouchEvaluator};

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("WaypointMatcherRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// Tolerance radius applied by the configuration layer when a target omits
/// one, in meters.
///
/// Published for callers; the matching core itself never applies a default
/// and uses whatever radius each [`TargetPoint`] carries.
pub const DEFAULT_TARGET_RADIUS_METERS: f64 = 25.0;

/// A GPS coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use waypoint_matcher::GpsPoint;
/// let point = GpsPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    ///
    /// The matching core never calls this: out-of-range coordinates still
    /// produce defined (if meaningless) distances. Range checking belongs
    /// to whatever loads the coordinates in.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Decode a track from a flat coordinate buffer.
    ///
    /// The buffer is row-major `[lat1, lon1, lat2, lon2, ...]`, the layout
    /// activity APIs hand over and the FFI boundary uses. A trailing
    /// partial pair is ignored. Decoding happens once here; everything
    /// downstream works on the resulting slice.
    pub fn from_flat(coords: &[f64]) -> Vec<GpsPoint> {
        coords
            .chunks_exact(2)
            .map(|chunk| GpsPoint::new(chunk[0], chunk[1]))
            .collect()
    }
}

/// A target waypoint: a position plus a tolerance radius in meters.
///
/// The same type serves "must touch" lists and blacklists; the role is
/// decided by which evaluation the caller runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TargetPoint {
    pub position: GpsPoint,
    /// Tolerance radius in meters. Expected positive; see
    /// [`DEFAULT_TARGET_RADIUS_METERS`] for the configuration-layer default.
    pub radius_meters: f64,
}

impl TargetPoint {
    /// Create a new target point.
    pub fn new(position: GpsPoint, radius_meters: f64) -> Self {
        Self { position, radius_meters }
    }

    /// Check position validity and radius positivity.
    ///
    /// Offered for configuration loaders; never called internally.
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.radius_meters.is_finite() && self.radius_meters > 0.0
    }

    /// Decode a target set from a flat buffer.
    ///
    /// The buffer is row-major `[lat1, lon1, radius_m1, lat2, lon2,
    /// radius_m2, ...]` - stride 3 per target, radius in meters. A trailing
    /// partial triplet is ignored.
    pub fn from_flat(values: &[f64]) -> Vec<TargetPoint> {
        values
            .chunks_exact(3)
            .map(|chunk| TargetPoint::new(GpsPoint::new(chunk[0], chunk[1]), chunk[2]))
            .collect()
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// True iff at least one target is touched by the track.
///
/// Returns `false` for an empty target set. Dispatches to the evaluator
/// selected at startup (see [`evaluator`]).
///
/// # Example
/// ```
/// use waypoint_matcher::{GpsPoint, TargetPoint, any_touched};
///
/// let targets = vec![TargetPoint::new(GpsPoint::new(0.0, 0.0), 25.0)];
/// let track = vec![GpsPoint::new(0.0, 0.0001)];
/// assert!(any_touched(&targets, &track));
/// ```
pub fn any_touched(targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
    evaluator().any_touched(targets, track)
}

/// True iff every target is touched by the track.
///
/// Returns `true` for an empty target set (there is nothing left
/// untouched). Dispatches to the evaluator selected at startup.
pub fn all_touched(targets: &[TargetPoint], track: &[GpsPoint]) -> bool {
    evaluator().all_touched(targets, track)
}

/// [`any_touched`] over flat buffers.
///
/// `targets` is stride-3 `[lat, lon, radius_m]` per element, `track` is
/// stride-2 `[lat, lon]` per element. Both are decoded exactly once at this
/// boundary; slice lengths carry the element counts.
pub fn any_touched_flat(targets: &[f64], track: &[f64]) -> bool {
    let targets = TargetPoint::from_flat(targets);
    let track = GpsPoint::from_flat(track);
    any_touched(&targets, &track)
}

/// [`all_touched`] over flat buffers. Same layout as [`any_touched_flat`].
pub fn all_touched_flat(targets: &[f64], track: &[f64]) -> bool {
    let targets = TargetPoint::from_flat(targets);
    let track = GpsPoint::from_flat(track);
    all_touched(&targets, &track)
}

// ============================================================================
// FFI Exports (only when feature enabled)
// ============================================================================

#[cfg(feature = "ffi")]
mod ffi {
    use super::*;
    use log::{debug, info};

    /// True iff at least one target is touched by the track.
    #[uniffi::export]
    pub fn ffi_any_touched(targets: Vec<TargetPoint>, track: Vec<GpsPoint>) -> bool {
        init_logging();
        debug!(
            "[WaypointMatcherRust] any_touched: {} targets vs {} samples",
            targets.len(),
            track.len()
        );
        any_touched(&targets, &track)
    }

    /// True iff every target is touched by the track.
    #[uniffi::export]
    pub fn ffi_all_touched(targets: Vec<TargetPoint>, track: Vec<GpsPoint>) -> bool {
        init_logging();
        debug!(
            "[WaypointMatcherRust] all_touched: {} targets vs {} samples",
            targets.len(),
            track.len()
        );
        all_touched(&targets, &track)
    }

    /// True iff at least one target is touched, from flat buffers.
    /// Targets are `[lat, lon, radius_m]` triplets, the track `[lat, lon]`
    /// pairs (zero-copy friendly for TypedArray input).
    #[uniffi::export]
    pub fn ffi_any_touched_flat(targets: Vec<f64>, track: Vec<f64>) -> bool {
        init_logging();
        let result = any_touched_flat(&targets, &track);
        info!(
            "[WaypointMatcherRust] any_touched_flat: {} targets vs {} samples -> {}",
            targets.len() / 3,
            track.len() / 2,
            result
        );
        result
    }

    /// True iff every target is touched, from flat buffers. Same layout as
    /// `ffi_any_touched_flat`.
    #[uniffi::export]
    pub fn ffi_all_touched_flat(targets: Vec<f64>, track: Vec<f64>) -> bool {
        init_logging();
        let result = all_touched_flat(&targets, &track);
        info!(
            "[WaypointMatcherRust] all_touched_flat: {} targets vs {} samples -> {}",
            targets.len() / 3,
            track.len() / 2,
            result
        );
        result
    }

    /// Tolerance radius the configuration layer should apply when a target
    /// omits one, in meters.
    #[uniffi::export]
    pub fn ffi_default_target_radius() -> f64 {
        DEFAULT_TARGET_RADIUS_METERS
    }
}

// ============================================================================
// Tests
// ============================================================================
