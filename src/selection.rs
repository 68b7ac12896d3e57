//! Selection model for composing a bouquet.
//!
//! A [`Selection`] tracks which flowers the user has picked, in which
//! color, and how many of each. Entries are keyed by species and color
//! so picking the same flower twice bumps its count instead of adding
//! a duplicate row.

use serde::Serialize;

/// Structural role a flower plays in the arrangement.
///
/// Roles drive both grouping in the selection panel and placement
/// bands in the layout engine: focal blooms sit near the center,
/// secondary blooms ring them, and filler drifts to the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerRole {
    Focal,
    Secondary,
    Filler,
}

impl FlowerRole {
    /// All roles in placement order (innermost first).
    pub const ALL: [FlowerRole; 3] = [
        FlowerRole::Focal,
        FlowerRole::Secondary,
        FlowerRole::Filler,
    ];

    /// Stable lowercase identifier, used in circle ids and CSS classes.
    pub fn ident(&self) -> &'static str {
        match self {
            FlowerRole::Focal => "focal",
            FlowerRole::Secondary => "secondary",
            FlowerRole::Filler => "filler",
        }
    }

    /// Parse an identifier produced by [`FlowerRole::ident`].
    pub fn from_ident(s: &str) -> Option<FlowerRole> {
        match s {
            "focal" => Some(FlowerRole::Focal),
            "secondary" => Some(FlowerRole::Secondary),
            "filler" => Some(FlowerRole::Filler),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlowerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ident())
    }
}

/// One row of the selection: a species in a specific color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionEntry {
    /// Unique key of the form `"{species}-{color}"`.
    pub key: String,
    /// Human-readable name, e.g. `"Rose (Red)"`.
    pub display_name: String,
    pub role: FlowerRole,
    /// Hex fill color, e.g. `"#DC2626"`.
    pub color: String,
    pub count: u32,
}

/// Build the selection key for a species/color pair.
pub fn selection_key(species: &str, color: &str) -> String {
    format!("{species}-{color}")
}

/// The user's current pick of flowers, ordered by insertion.
///
/// The same species may appear under several keys when picked in
/// different colors; each key holds its own count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one flower of the given species and color.
    ///
    /// If the species/color pair is already present its count goes up
    /// by one; otherwise a new entry is appended. Returns the entry
    /// key either way.
    pub fn add(
        &mut self,
        species: &str,
        role: FlowerRole,
        color: &str,
        display_name: &str,
    ) -> String {
        let key = selection_key(species, color);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(SelectionEntry {
                key: key.clone(),
                display_name: display_name.to_string(),
                role,
                color: color.to_string(),
                count: 1,
            }),
        }
        key
    }

    pub fn get(&self, key: &str) -> Option<&SelectionEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Remove an entry entirely, regardless of its count.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
    }

    /// Set an entry's count. A count of zero or below removes the
    /// entry. Unknown keys are ignored.
    pub fn set_count(&mut self, key: &str, count: i32) {
        if count <= 0 {
            self.remove(key);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.count = count as u32;
        }
    }

    /// Total number of flowers across all entries.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
