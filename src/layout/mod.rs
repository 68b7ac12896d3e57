//! Layout engine for arranging a bouquet as colored circles
//!
//! This module takes selection entries and computes circle placements on a
//! square canvas, producing a fresh `Vec<PlacedCircle>` per invocation.
//! Three named patterns are supported; unrecognized identifiers fall back
//! to compact.

pub mod config;
pub mod engine;
pub mod types;

pub use config::{LayoutConfig, RoleBand};
pub use types::{PlacedCircle, Point, Scheme};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::selection::SelectionEntry;

/// Named arrangement pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Even rings around the canvas center
    Compact,
    /// Off-center masses balancing left against right
    Asymmetric,
    /// Downward waterfall from a pivot above center
    Cascade,
}

impl Pattern {
    /// All patterns, in scheme generation order
    pub const ALL: [Pattern; 3] = [Pattern::Compact, Pattern::Asymmetric, Pattern::Cascade];

    /// Stable lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Compact => "compact",
            Pattern::Asymmetric => "asymmetric",
            Pattern::Cascade => "cascade",
        }
    }

    /// Parse an identifier, case-insensitive
    pub fn parse(s: &str) -> Option<Pattern> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Some(Pattern::Compact),
            "asymmetric" => Some(Pattern::Asymmetric),
            "cascade" => Some(Pattern::Cascade),
            _ => None,
        }
    }

    /// Parse an identifier, falling back to compact when unrecognized
    pub fn resolve(s: &str) -> Pattern {
        Pattern::parse(s).unwrap_or(Pattern::Compact)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seeded layout with the default geometry.
///
/// The same (entries, pattern, seed) triple always produces the identical
/// circle sequence.
pub fn layout(entries: &[SelectionEntry], pattern: Pattern, seed: u64) -> Vec<PlacedCircle> {
    let mut rng = StdRng::seed_from_u64(seed);
    layout_with(entries, pattern, &LayoutConfig::default(), &mut rng)
}

/// Unseeded layout with the default geometry; varies per call
pub fn layout_random(entries: &[SelectionEntry], pattern: Pattern) -> Vec<PlacedCircle> {
    let mut rng = rand::rng();
    layout_with(entries, pattern, &LayoutConfig::default(), &mut rng)
}

/// Layout with explicit geometry and randomness source
pub fn layout_with<R: Rng>(
    entries: &[SelectionEntry],
    pattern: Pattern,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<PlacedCircle> {
    engine::compute(entries, pattern, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::FlowerRole;

    fn entries() -> Vec<SelectionEntry> {
        vec![
            SelectionEntry {
                key: "rose-#DC143C".to_string(),
                display_name: "Rose (Red)".to_string(),
                role: FlowerRole::Focal,
                color: "#DC143C".to_string(),
                count: 3,
            },
            SelectionEntry {
                key: "fern-#689F38".to_string(),
                display_name: "Fern (Green)".to_string(),
                role: FlowerRole::Filler,
                color: "#689F38".to_string(),
                count: 4,
            },
        ]
    }

    #[test]
    fn test_pattern_parse() {
        assert_eq!(Pattern::parse("compact"), Some(Pattern::Compact));
        assert_eq!(Pattern::parse("Cascade"), Some(Pattern::Cascade));
        assert_eq!(Pattern::parse("spiral"), None);
    }

    #[test]
    fn test_pattern_resolve_falls_back_to_compact() {
        assert_eq!(Pattern::resolve("asymmetric"), Pattern::Asymmetric);
        assert_eq!(Pattern::resolve("spiral"), Pattern::Compact);
        assert_eq!(Pattern::resolve(""), Pattern::Compact);
    }

    #[test]
    fn test_pattern_name_round_trips() {
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::parse(pattern.name()), Some(pattern));
        }
    }

    #[test]
    fn test_layout_is_reproducible() {
        let entries = entries();
        let a = layout(&entries, Pattern::Compact, 42);
        let b = layout(&entries, Pattern::Compact, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let entries = entries();
        let a = layout(&entries, Pattern::Compact, 1);
        let b = layout(&entries, Pattern::Compact, 2);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn test_layout_random_emits_everything() {
        let entries = entries();
        let circles = layout_random(&entries, Pattern::Compact);
        assert_eq!(circles.len(), 7);
    }
}
