//! Core types for the layout engine

use serde::Serialize;

use super::Pattern;
use crate::selection::SelectionEntry;

/// A 2D point in canvas space, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One flower placed by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCircle {
    /// Unique within one layout result, `"<role>-<index>"`
    pub id: String,
    pub position: Point,
    pub radius: f64,
    /// Hex fill color copied from the owning entry
    pub color: String,
    /// Key of the owning selection entry. Used for labeling only;
    /// mutation never travels through this reference.
    pub entry_key: String,
}

/// One generated arrangement candidate.
///
/// A scheme snapshots the entries it was built from, so later edits to
/// the live selection do not disturb an already generated layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scheme {
    pub id: u32,
    pub pattern: Pattern,
    pub circles: Vec<PlacedCircle>,
    pub entries: Vec<SelectionEntry>,
    /// Image URL from a completed render request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Scheme {
    pub fn new(
        id: u32,
        pattern: Pattern,
        circles: Vec<PlacedCircle>,
        entries: Vec<SelectionEntry>,
    ) -> Self {
        Self {
            id,
            pattern,
            circles,
            entries,
            photo_url: None,
        }
    }

    /// Display name of the entry owning a circle, for tooltips
    pub fn display_name_for(&self, entry_key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == entry_key)
            .map(|e| e.display_name.as_str())
    }

    pub fn circle(&self, id: &str) -> Option<&PlacedCircle> {
        self.circles.iter().find(|c| c.id == id)
    }

    pub fn circle_mut(&mut self, id: &str) -> Option<&mut PlacedCircle> {
        self.circles.iter_mut().find(|c| c.id == id)
    }
}
