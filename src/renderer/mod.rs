//! SVG renderer for bouquet previews
//!
//! This module takes placed circles and produces an SVG string with
//! hover tooltips and CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_circles, render_scheme};
