//! Flower and palette catalogs
//!
//! Static data describing which species are available for each role, which
//! colors every species comes in, and the curated color palettes offered
//! alongside the composer. The selection model and the layout engine never
//! look inside the catalog; they only consume (role, color, display name)
//! tuples resolved here.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::selection::FlowerRole;

/// Errors that can occur when loading or querying a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown species '{0}'")]
    UnknownSpecies(String),
    #[error("Species '{species}' is not offered in '{color}' (available: {available})")]
    UnknownColor {
        species: String,
        color: String,
        available: String,
    },
}

impl CatalogError {
    pub fn unknown_species(species: impl Into<String>) -> Self {
        CatalogError::UnknownSpecies(species.into())
    }

    pub fn unknown_color(species: &str, color: &str, options: &[ColorOption]) -> Self {
        let available = options
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        CatalogError::UnknownColor {
            species: species.to_string(),
            color: color.to_string(),
            available,
        }
    }
}

/// One color a species is offered in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorOption {
    /// Display name, e.g. "Red"
    pub name: String,
    /// Hex value, e.g. "#DC143C"
    pub hex: String,
}

/// A species entry: stable identifier, display name, color options
#[derive(Debug, Clone, Deserialize)]
pub struct FlowerSpec {
    pub id: String,
    pub name: String,
    pub colors: Vec<ColorOption>,
}

/// A curated five-color palette
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
}

/// A species/color pair resolved against the catalog, ready to feed
/// [`Selection::add`](crate::selection::Selection::add).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFlower {
    pub species: String,
    pub role: FlowerRole,
    pub color: String,
    pub display_name: String,
}

/// Built-in catalog: six focal species, five secondary, seven filler,
/// plus the ten curated palettes.
const DEFAULT_CATALOG: &str = r##"
[[focal]]
id = "rose"
name = "Rose"
colors = [
    { name = "Red", hex = "#DC143C" },
    { name = "Pink", hex = "#FF69B4" },
    { name = "White", hex = "#FFF5EE" },
    { name = "Peach", hex = "#FFDAB9" },
    { name = "Burgundy", hex = "#800020" },
]

[[focal]]
id = "peony"
name = "Peony"
colors = [
    { name = "Pink", hex = "#FFB6C1" },
    { name = "White", hex = "#FFFAF0" },
    { name = "Coral", hex = "#FF7F50" },
    { name = "Red", hex = "#DC143C" },
]

[[focal]]
id = "tulip"
name = "Tulip"
colors = [
    { name = "Red", hex = "#FF0000" },
    { name = "Yellow", hex = "#FFD700" },
    { name = "Pink", hex = "#FF69B4" },
    { name = "White", hex = "#FFFFFF" },
    { name = "Purple", hex = "#9370DB" },
]

[[focal]]
id = "sunflower"
name = "Sunflower"
colors = [
    { name = "Yellow", hex = "#FFD700" },
    { name = "Orange", hex = "#FFA500" },
]

[[focal]]
id = "lily"
name = "Lily"
colors = [
    { name = "White", hex = "#FFFAFA" },
    { name = "Pink", hex = "#FFB6D9" },
    { name = "Orange", hex = "#FF8C42" },
]

[[focal]]
id = "orchid"
name = "Orchid"
colors = [
    { name = "White", hex = "#FFFAFA" },
    { name = "Pink", hex = "#FFB6D9" },
    { name = "Purple", hex = "#9370DB" },
]

[[secondary]]
id = "chrysanthemum"
name = "Chrysanthemum"
colors = [
    { name = "White", hex = "#F5F5F5" },
    { name = "Yellow", hex = "#FFEB3B" },
    { name = "Pink", hex = "#F8BBD0" },
    { name = "Lilac", hex = "#CE93D8" },
]

[[secondary]]
id = "carnation"
name = "Carnation"
colors = [
    { name = "Red", hex = "#E91E63" },
    { name = "Pink", hex = "#F48FB1" },
    { name = "White", hex = "#FAFAFA" },
]

[[secondary]]
id = "freesia"
name = "Freesia"
colors = [
    { name = "White", hex = "#FFFFFF" },
    { name = "Yellow", hex = "#FFF59D" },
    { name = "Violet", hex = "#B39DDB" },
]

[[secondary]]
id = "ranunculus"
name = "Ranunculus"
colors = [
    { name = "Pink", hex = "#FFB3C6" },
    { name = "Peach", hex = "#FFDAC1" },
    { name = "White", hex = "#FFF5F7" },
    { name = "Yellow", hex = "#FFF8DC" },
]

[[secondary]]
id = "hydrangea"
name = "Hydrangea"
colors = [
    { name = "Blue", hex = "#B3E5FC" },
    { name = "Pink", hex = "#F8BBD0" },
    { name = "White", hex = "#F5F5F5" },
    { name = "Violet", hex = "#D1C4E9" },
]

[[filler]]
id = "eucalyptus"
name = "Eucalyptus"
colors = [
    { name = "Green", hex = "#8BC34A" },
    { name = "Silver", hex = "#A8D8AC" },
]

[[filler]]
id = "gypsophila"
name = "Gypsophila"
colors = [
    { name = "White", hex = "#FFFFFF" },
    { name = "Pink", hex = "#FFE4E1" },
]

[[filler]]
id = "fern"
name = "Fern"
colors = [
    { name = "Green", hex = "#689F38" },
]

[[filler]]
id = "wheat"
name = "Wheat"
colors = [
    { name = "Golden", hex = "#DAA520" },
    { name = "Beige", hex = "#F5DEB3" },
]

[[filler]]
id = "lavender"
name = "Lavender"
colors = [
    { name = "Lilac", hex = "#E6E6FA" },
    { name = "Violet", hex = "#9370DB" },
]

[[filler]]
id = "leaf"
name = "Leaf"
colors = [
    { name = "Green", hex = "#4CAF50" },
    { name = "Dark Green", hex = "#2E7D32" },
]

[[filler]]
id = "berries"
name = "Berries"
colors = [
    { name = "Red", hex = "#DC143C" },
    { name = "Blue", hex = "#4169E1" },
]

[[palettes]]
id = "romantic"
name = "Romantic"
description = "Soft pink and peach tones"
colors = ["#FFB6C1", "#FFDAB9", "#FFF0F5", "#FFE4E1", "#F0E6F6"]

[[palettes]]
id = "spring"
name = "Spring Freshness"
description = "Bright yellow and green tones"
colors = ["#FFEB3B", "#8BC34A", "#FFFACD", "#E8F5E9", "#FFF9C4"]

[[palettes]]
id = "lavender"
name = "Lavender Fields"
description = "Lilac and violet shades"
colors = ["#E6E6FA", "#DDA0DD", "#D8BFD8", "#F3E5F5", "#B39DDB"]

[[palettes]]
id = "sunset"
name = "Sunset Glow"
description = "Warm orange and red tones"
colors = ["#FF7F50", "#FFA07A", "#FFB347", "#FFDAB9", "#FFE4B5"]

[[palettes]]
id = "ocean"
name = "Ocean Breeze"
description = "Blue and white shades"
colors = ["#B3E5FC", "#E1F5FE", "#FFFFFF", "#F0F8FF", "#E0F7FA"]

[[palettes]]
id = "autumn"
name = "Autumn Forest"
description = "Burgundy and gold colors"
colors = ["#8B0000", "#DAA520", "#CD853F", "#D2691E", "#BC8F8F"]

[[palettes]]
id = "tropical"
name = "Tropics"
description = "Bold contrasting shades"
colors = ["#FF1493", "#FF8C00", "#32CD32", "#FFD700", "#FF6347"]

[[palettes]]
id = "classic"
name = "Classic"
description = "Red and white tones"
colors = ["#DC143C", "#FFFFFF", "#FFE4E1", "#F5F5F5", "#FFF5EE"]

[[palettes]]
id = "vintage"
name = "Vintage"
description = "Muted pastel tones"
colors = ["#D4C5C7", "#C9A9A6", "#E8D5C4", "#F5E6E8", "#D5C6E0"]

[[palettes]]
id = "modern"
name = "Modern"
description = "Contrasting vivid colors"
colors = ["#FF6B9D", "#4ECDC4", "#FFE66D", "#95E1D3", "#F38181"]
"##;

/// Species grouped by role, plus curated palettes
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    focal: Vec<FlowerSpec>,
    secondary: Vec<FlowerSpec>,
    filler: Vec<FlowerSpec>,
    #[serde(default)]
    palettes: Vec<Palette>,
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        Ok(catalog)
    }

    /// Species available for one role, in catalog order
    pub fn species(&self, role: FlowerRole) -> &[FlowerSpec] {
        match role {
            FlowerRole::Focal => &self.focal,
            FlowerRole::Secondary => &self.secondary,
            FlowerRole::Filler => &self.filler,
        }
    }

    /// Look up a species by identifier across all roles
    pub fn find(&self, species_id: &str) -> Option<(FlowerRole, &FlowerSpec)> {
        for role in FlowerRole::ALL {
            if let Some(spec) = self.species(role).iter().find(|s| s.id == species_id) {
                return Some((role, spec));
            }
        }
        None
    }

    /// Resolve a species/color pair into the tuple the selection needs.
    ///
    /// The color matches by name (case-insensitive) or by hex value.
    pub fn resolve(&self, species_id: &str, color: &str) -> Result<ResolvedFlower, CatalogError> {
        let (role, spec) = self
            .find(species_id)
            .ok_or_else(|| CatalogError::unknown_species(species_id))?;

        let option = spec
            .colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(color) || c.hex.eq_ignore_ascii_case(color))
            .ok_or_else(|| CatalogError::unknown_color(species_id, color, &spec.colors))?;

        Ok(ResolvedFlower {
            species: spec.id.clone(),
            role,
            color: option.hex.clone(),
            display_name: format!("{} ({})", spec.name, option.name),
        })
    }

    /// Curated palettes, in catalog order
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Look up a palette by identifier
    pub fn palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Default catalog should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_parses() {
        let catalog = Catalog::default();
        assert_eq!(catalog.species(FlowerRole::Focal).len(), 6);
        assert_eq!(catalog.species(FlowerRole::Secondary).len(), 5);
        assert_eq!(catalog.species(FlowerRole::Filler).len(), 7);
        assert_eq!(catalog.palettes().len(), 10);
    }

    #[test]
    fn test_resolve_by_color_name() {
        let catalog = Catalog::default();
        let flower = catalog.resolve("rose", "Red").expect("rose should resolve");
        assert_eq!(flower.species, "rose");
        assert_eq!(flower.role, FlowerRole::Focal);
        assert_eq!(flower.color, "#DC143C");
        assert_eq!(flower.display_name, "Rose (Red)");
    }

    #[test]
    fn test_resolve_color_name_case_insensitive() {
        let catalog = Catalog::default();
        let flower = catalog.resolve("rose", "red").expect("should resolve");
        assert_eq!(flower.color, "#DC143C");
    }

    #[test]
    fn test_resolve_by_hex() {
        let catalog = Catalog::default();
        let flower = catalog.resolve("rose", "#dc143c").expect("should resolve");
        assert_eq!(flower.display_name, "Rose (Red)");
    }

    #[test]
    fn test_resolve_unknown_species() {
        let catalog = Catalog::default();
        let err = catalog.resolve("dandelion", "Yellow").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSpecies(_)));
    }

    #[test]
    fn test_resolve_unknown_color_lists_options() {
        let catalog = Catalog::default();
        let err = catalog.resolve("fern", "Blue").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("fern"));
        assert!(message.contains("Green"));
    }

    #[test]
    fn test_find_spans_roles() {
        let catalog = Catalog::default();
        let (role, spec) = catalog.find("eucalyptus").expect("should find");
        assert_eq!(role, FlowerRole::Filler);
        assert_eq!(spec.name, "Eucalyptus");
        assert!(catalog.find("cactus").is_none());
    }

    #[test]
    fn test_palette_lookup() {
        let catalog = Catalog::default();
        let palette = catalog.palette("romantic").expect("should exist");
        assert_eq!(palette.colors.len(), 5);
        assert_eq!(palette.colors[0], "#FFB6C1");
        assert!(catalog.palette("neon").is_none());
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml_str = r##"
[[focal]]
id = "daisy"
name = "Daisy"
colors = [{ name = "White", hex = "#FFFFFF" }]

[[secondary]]
id = "aster"
name = "Aster"
colors = [{ name = "Violet", hex = "#B39DDB" }]

[[filler]]
id = "moss"
name = "Moss"
colors = [{ name = "Green", hex = "#4CAF50" }]
"##;
        let catalog = Catalog::from_str(toml_str).expect("Should parse");
        assert_eq!(catalog.species(FlowerRole::Focal).len(), 1);
        assert!(catalog.palettes().is_empty());
        let flower = catalog.resolve("daisy", "white").expect("should resolve");
        assert_eq!(flower.display_name, "Daisy (White)");
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Catalog::from_str(invalid).is_err());
    }
}
