//! Placement strategies for the three arrangement patterns
//!
//! All strategies share one shell: walk the roles in paint order (focal,
//! secondary, filler), emit `count` circles per entry, and advance a global
//! sequence index per attempted circle. They differ only in how a single
//! circle's position is chosen. Randomness comes from the caller's `Rng`,
//! so a seeded source reproduces a layout exactly and a thread source
//! varies it.

use std::f64::consts::PI;

use rand::Rng;

use super::config::{LayoutConfig, RoleBand};
use super::types::{PlacedCircle, Point};
use super::Pattern;
use crate::selection::{FlowerRole, SelectionEntry};

/// Cascade angle spread per role group, radians. Later groups fan wider.
const CASCADE_SPREADS: [f64; 3] = [0.9, 1.6, 2.4];

/// Cascade downward drift per role group: (base, uniform span).
const CASCADE_DRIFTS: [(f64, f64); 3] = [(0.0, 10.0), (15.0, 25.0), (30.0, 45.0)];

/// Lay out all entries with the given pattern.
///
/// Circle ids are `"<role>-<index>"` where the index runs across the whole
/// emission and also advances for circles a pattern drops, so ids are stable
/// for a given (entries, pattern, seed) triple. Empty entries produce an
/// empty layout.
pub fn compute<R: Rng>(
    entries: &[SelectionEntry],
    pattern: Pattern,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<PlacedCircle> {
    let mut circles = Vec::new();
    let mut index: usize = 0;

    for role in FlowerRole::ALL {
        let group: Vec<&SelectionEntry> = entries.iter().filter(|e| e.role == role).collect();
        let group_total: u32 = group.iter().map(|e| e.count).sum();
        // The guard only matters for empty groups, which emit nothing anyway
        let slots = group_total.max(1) as f64;
        let mut k: u32 = 0;

        for entry in group {
            for _ in 0..entry.count {
                let placed = match pattern {
                    Pattern::Compact => {
                        Some(place_compact(config.band(role), config, k, slots, rng))
                    }
                    Pattern::Asymmetric => Some(place_asymmetric(role, config, rng)),
                    Pattern::Cascade => place_cascade(role, config, rng),
                };
                if let Some((position, radius)) = placed {
                    circles.push(PlacedCircle {
                        id: format!("{}-{}", role.ident(), index),
                        position,
                        radius,
                        color: entry.color.clone(),
                        entry_key: entry.key.clone(),
                    });
                }
                index += 1;
                k += 1;
            }
        }
    }

    circles
}

/// Even radial spread around the shared center.
///
/// `k` is the circle's position within its role group, so each group forms
/// its own evenly divided ring; the band's angular jitter keeps rings from
/// looking mechanical.
fn place_compact<R: Rng>(
    band: &RoleBand,
    config: &LayoutConfig,
    k: u32,
    slots: f64,
    rng: &mut R,
) -> (Point, f64) {
    let center = config.center();
    let angle = 2.0 * PI * k as f64 / slots + rng.random::<f64>() * band.angle_jitter;
    let distance = band.distance(rng);
    let position = Point::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    );
    (position, band.radius(rng))
}

/// Off-center rectangular scatter: focal mass sits left of center,
/// secondary balances right, filler lands on a random side further out.
fn place_asymmetric<R: Rng>(role: FlowerRole, config: &LayoutConfig, rng: &mut R) -> (Point, f64) {
    let center = config.center();
    let band = config.band(role);
    let position = match role {
        FlowerRole::Focal => Point::new(
            center.x - 60.0 + rng.random::<f64>() * 70.0,
            center.y - 40.0 + rng.random::<f64>() * 80.0,
        ),
        FlowerRole::Secondary => Point::new(
            center.x - 10.0 + rng.random::<f64>() * 70.0,
            center.y - 50.0 + rng.random::<f64>() * 100.0,
        ),
        FlowerRole::Filler => {
            let side = if rng.random::<f64>() < 0.5 { -1.0 } else { 1.0 };
            Point::new(
                center.x + side * (40.0 + rng.random::<f64>() * 90.0),
                center.y - 80.0 + rng.random::<f64>() * 160.0,
            )
        }
    };
    (position, band.radius(rng))
}

/// Waterfall arc around a pivot above canvas center.
///
/// Each role group fans over a wider downward-opening angle range with a
/// larger +y drift. Filler that drifts past the bouquet radius (measured
/// from the pivot) is dropped; its random draws are still consumed so the
/// following circles land in the same spots either way.
fn place_cascade<R: Rng>(
    role: FlowerRole,
    config: &LayoutConfig,
    rng: &mut R,
) -> Option<(Point, f64)> {
    let band = config.band(role);
    let group = match role {
        FlowerRole::Focal => 0,
        FlowerRole::Secondary => 1,
        FlowerRole::Filler => 2,
    };
    let pivot = cascade_pivot(config);

    let angle = PI / 2.0 + (rng.random::<f64>() - 0.5) * CASCADE_SPREADS[group];
    let distance = band.distance(rng);
    let (drift_base, drift_span) = CASCADE_DRIFTS[group];
    let drift = drift_base + rng.random::<f64>() * drift_span;
    let radius = band.radius(rng);

    let position = Point::new(
        pivot.x + angle.cos() * distance,
        pivot.y + angle.sin() * distance + drift,
    );

    if role == FlowerRole::Filler && position.distance(pivot) > config.max_bouquet_radius {
        return None;
    }
    Some((position, radius))
}

/// Arc pivot the cascade pattern hangs from
pub(super) fn cascade_pivot(config: &LayoutConfig) -> Point {
    let center = config.center();
    Point::new(center.x, center.y - config.cascade_lift)
}
