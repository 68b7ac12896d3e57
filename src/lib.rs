//! Bouquet Studio - a procedural flower bouquet composer
//!
//! This library provides a flower catalog, a seeded circle layout engine with
//! three arrangement patterns, an interactive composer session, and an SVG
//! renderer with hover tooltips.
//!
//! # Example
//!
//! ```rust
//! use bouquet_studio::{compose_svg, FlowerRole, Pattern, Selection};
//!
//! let mut selection = Selection::new();
//! let key = selection.add("rose", FlowerRole::Focal, "#DC143C", "Rose (Red)");
//! selection.set_count(&key, 5);
//!
//! let svg = compose_svg(&selection, Pattern::Compact, 42);
//! assert!(svg.contains("<svg"));
//! assert_eq!(svg.matches("<circle").count(), 5);
//! ```

pub mod catalog;
pub mod composer;
pub mod gallery;
pub mod interact;
pub mod layout;
pub mod photo;
pub mod renderer;
pub mod selection;

pub use catalog::{Catalog, CatalogError};
pub use composer::{ComposeError, Composer};
pub use gallery::{demo_selection, Gallery};
pub use layout::{LayoutConfig, Pattern, PlacedCircle, Point, Scheme};
pub use photo::{PhotoClient, PhotoError};
pub use renderer::{render_circles, render_scheme, SvgConfig};
pub use selection::{FlowerRole, Selection, SelectionEntry};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for the complete compose pipeline
#[derive(Debug, Clone)]
pub struct ComposeConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
        }
    }
}

impl ComposeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Lay out a selection and render it to SVG with default configuration
///
/// This is the main entry point for one-shot use. The same selection,
/// pattern, and seed always produce the same SVG.
///
/// # Example
///
/// ```rust
/// use bouquet_studio::{compose_svg, FlowerRole, Pattern, Selection};
///
/// let mut selection = Selection::new();
/// selection.add("rose", FlowerRole::Focal, "#DC143C", "Rose (Red)");
/// selection.add("fern", FlowerRole::Filler, "#228B22", "Fern (Green)");
///
/// let svg = compose_svg(&selection, Pattern::Cascade, 7);
/// assert!(svg.contains("<title>Rose (Red)</title>"));
/// ```
pub fn compose_svg(selection: &Selection, pattern: Pattern, seed: u64) -> String {
    compose_svg_with_config(selection, pattern, seed, &ComposeConfig::default())
}

/// Lay out a selection and render it to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use bouquet_studio::{
///     compose_svg_with_config, ComposeConfig, FlowerRole, LayoutConfig, Pattern, Selection,
///     SvgConfig,
/// };
///
/// let mut selection = Selection::new();
/// let key = selection.add("gypsophila", FlowerRole::Filler, "#FFFFFF", "Gypsophila (White)");
/// selection.set_count(&key, 8);
///
/// let config = ComposeConfig::new()
///     .with_layout(LayoutConfig::default().with_canvas_size(200.0))
///     .with_svg(SvgConfig::default().with_view_size(200.0));
///
/// let svg = compose_svg_with_config(&selection, Pattern::Compact, 7, &config);
/// assert!(svg.contains(r#"viewBox="0 0 200 200""#));
/// ```
pub fn compose_svg_with_config(
    selection: &Selection,
    pattern: Pattern,
    seed: u64,
    config: &ComposeConfig,
) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let circles = layout::layout_with(selection.entries(), pattern, &config.layout, &mut rng);
    render_circles(&circles, selection.entries(), &config.svg)
}
