//! Marker placement for map display.
//!
//! Reports submitted from the same spot carry identical coordinates and
//! would render as a single marker. This module derives a *display position*
//! for each issue: reports sharing a rounded-coordinate bucket are nudged
//! apart by a fixed diagonal step, everything else is left untouched. The
//! stored location is never modified; direction links and distance math keep
//! using it.

use crate::model::{Issue, Location};
use std::collections::HashMap;

/// Diagonal displacement per overlapping marker, in degrees. Roughly 15 m at
/// typical latitudes; enough to separate up to ~5 markers visibly without
/// leaving the immediate area.
pub const JITTER_STEP: f64 = 0.00015;

/// Coordinates are bucketed at 6 decimal digits (~0.11 m at the equator).
/// Two reports collide only when both rounded coordinates match exactly.
const BUCKET_PRECISION: usize = 6;

/// Fallback map center when the issue list is empty (Connaught Place,
/// New Delhi, the service's pilot deployment area).
pub const DEFAULT_CENTER: Location = Location {
    lat: 28.6139,
    lng: 77.2090,
};

/// An issue paired with the position it should render at.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedIssue {
    pub issue: Issue,
    pub display: Location,
}

fn bucket_key(location: &Location) -> String {
    format!(
        "{:.prec$},{:.prec$}",
        location.lat,
        location.lng,
        prec = BUCKET_PRECISION
    )
}

/// Compute an overlap-free display position for each location, in input
/// order.
///
/// The k-th location within a collision bucket (0-indexed, input order) is
/// displaced by `k * JITTER_STEP` on both axes. Locations with a unique
/// bucket come back bit-identical. Pure and total: the empty list maps to
/// the empty list, and non-finite coordinates are passed straight through
/// the arithmetic without validation.
pub fn resolve_display_positions(locations: &[Location]) -> Vec<Location> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    locations
        .iter()
        .map(|loc| {
            let count = seen.entry(bucket_key(loc)).or_insert(0);
            let offset = JITTER_STEP * *count as f64;
            *count += 1;

            Location {
                lat: loc.lat + offset,
                lng: loc.lng + offset,
            }
        })
        .collect()
}

/// Pair each issue with its display position, preserving order.
pub fn place_issues(issues: Vec<Issue>) -> Vec<PlacedIssue> {
    let locations: Vec<Location> = issues.iter().map(|i| i.location).collect();
    let positions = resolve_display_positions(&locations);

    issues
        .into_iter()
        .zip(positions)
        .map(|(issue, display)| PlacedIssue { issue, display })
        .collect()
}

/// Initial map center: the first issue's stored location, or the default
/// center for an empty list.
pub fn map_center(issues: &[Issue]) -> Location {
    issues
        .first()
        .map(|i| i.location)
        .unwrap_or(DEFAULT_CENTER)
}
