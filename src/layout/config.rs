//! Configuration for the layout engine

use rand::Rng;

use super::types::Point;
use crate::selection::FlowerRole;

/// Placement band for one role: how far from the pattern center its
/// circles sit, how large they are, and how much angular noise the
/// evenly spread patterns add.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleBand {
    /// Minimum distance from the pattern center
    pub min_distance: f64,

    /// Width of the uniform jitter added to the distance
    pub distance_spread: f64,

    /// Minimum circle radius
    pub min_radius: f64,

    /// Width of the uniform jitter added to the radius
    pub radius_spread: f64,

    /// Angular jitter in radians for evenly spread placements
    pub angle_jitter: f64,
}

impl RoleBand {
    pub fn new(
        min_distance: f64,
        distance_spread: f64,
        min_radius: f64,
        radius_spread: f64,
        angle_jitter: f64,
    ) -> Self {
        Self {
            min_distance,
            distance_spread,
            min_radius,
            radius_spread,
            angle_jitter,
        }
    }

    /// Sample a center distance within the band
    pub fn distance<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min_distance + rng.random::<f64>() * self.distance_spread
    }

    /// Sample a circle radius within the band
    pub fn radius<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min_radius + rng.random::<f64>() * self.radius_spread
    }
}

/// Geometry shared by all placement strategies.
///
/// Larger roles sit closer to the center with bigger circles; filler
/// drifts furthest out with the smallest circles and the widest jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Edge length of the square canvas
    pub canvas_size: f64,

    /// Maximum distance from the pattern center; filler placed beyond
    /// it may be dropped by the pattern
    pub max_bouquet_radius: f64,

    /// How far above canvas center the cascade arc pivot sits
    pub cascade_lift: f64,

    pub focal: RoleBand,
    pub secondary: RoleBand,
    pub filler: RoleBand,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            max_bouquet_radius: 180.0,
            cascade_lift: 60.0,
            focal: RoleBand::new(30.0, 25.0, 40.0, 15.0, 0.4),
            secondary: RoleBand::new(70.0, 35.0, 25.0, 12.0, 0.5),
            filler: RoleBand::new(100.0, 80.0, 10.0, 8.0, 0.8),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Nominal canvas center
    pub fn center(&self) -> Point {
        Point::new(self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    /// Band for one role
    pub fn band(&self, role: FlowerRole) -> &RoleBand {
        match role {
            FlowerRole::Focal => &self.focal,
            FlowerRole::Secondary => &self.secondary,
            FlowerRole::Filler => &self.filler,
        }
    }

    /// Set the canvas edge length
    pub fn with_canvas_size(mut self, size: f64) -> Self {
        self.canvas_size = size;
        self
    }

    /// Set the maximum bouquet radius
    pub fn with_max_bouquet_radius(mut self, radius: f64) -> Self {
        self.max_bouquet_radius = radius;
        self
    }

    /// Set the cascade arc lift
    pub fn with_cascade_lift(mut self, lift: f64) -> Self {
        self.cascade_lift = lift;
        self
    }

    /// Replace the band for one role
    pub fn with_band(mut self, role: FlowerRole, band: RoleBand) -> Self {
        match role {
            FlowerRole::Focal => self.focal = band,
            FlowerRole::Secondary => self.secondary = band,
            FlowerRole::Filler => self.filler = band,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_size, 400.0);
        assert_eq!(config.max_bouquet_radius, 180.0);
        assert_eq!(config.cascade_lift, 60.0);
        assert_eq!(config.center(), Point::new(200.0, 200.0));
        assert_eq!(config.focal.min_distance, 30.0);
        assert_eq!(config.secondary.min_radius, 25.0);
        assert_eq!(config.filler.angle_jitter, 0.8);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas_size(160.0)
            .with_max_bouquet_radius(70.0)
            .with_band(FlowerRole::Focal, RoleBand::new(15.0, 10.0, 12.0, 0.0, 0.0));

        assert_eq!(config.canvas_size, 160.0);
        assert_eq!(config.center(), Point::new(80.0, 80.0));
        assert_eq!(config.max_bouquet_radius, 70.0);
        assert_eq!(config.focal.min_distance, 15.0);
        assert_eq!(config.secondary.min_distance, 70.0);
    }

    #[test]
    fn test_band_samples_stay_in_range() {
        let band = RoleBand::new(30.0, 25.0, 40.0, 15.0, 0.4);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let d = band.distance(&mut rng);
            let r = band.radius(&mut rng);
            assert!((30.0..55.0).contains(&d));
            assert!((40.0..55.0).contains(&r));
        }
    }

    #[test]
    fn test_band_lookup_matches_fields() {
        let config = LayoutConfig::default();
        assert_eq!(*config.band(FlowerRole::Focal), config.focal);
        assert_eq!(*config.band(FlowerRole::Secondary), config.secondary);
        assert_eq!(*config.band(FlowerRole::Filler), config.filler);
    }
}
