//! Nearest-breakpoint resolution for a single observation
//!
//! A deliberate O(R) linear scan over the registry: breakpoint sets number in
//! the tens to low hundreds, so a spatial index would cost more in complexity
//! than it saves. Ties in distance resolve to the first breakpoint in
//! registry order, which keeps the result deterministic.

use crate::app::models::{Breakpoint, GeoPoint, NearestBreakpoint};
use crate::app::services::breakpoint_registry::BreakpointRegistry;
use crate::app::services::geodesic::{self, Distance};
use crate::{Error, Result};

/// Resolve the nearest breakpoint for one observed position
///
/// Distance and bearing are measured from the breakpoint toward the
/// observation, so the reported direction reads as "the storm is <direction>
/// of <breakpoint>".
pub fn nearest_breakpoint<'a>(
    observed: GeoPoint,
    registry: &'a BreakpointRegistry,
) -> Result<NearestBreakpoint<'a>> {
    if registry.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }

    // Score every candidate, then select the minimum; first-wins on ties.
    let scored: Vec<(&Breakpoint, Distance, f64)> = registry
        .iter()
        .map(|breakpoint| {
            (
                breakpoint,
                geodesic::distance(breakpoint.location, observed),
                geodesic::initial_bearing(breakpoint.location, observed),
            )
        })
        .collect();

    let mut winner = &scored[0];
    for candidate in &scored[1..] {
        if candidate.1.km() < winner.1.km() {
            winner = candidate;
        }
    }

    Ok(NearestBreakpoint {
        breakpoint: winner.0,
        distance: winner.1,
        direction: geodesic::bearing_to_compass(winner.2),
    })
}
