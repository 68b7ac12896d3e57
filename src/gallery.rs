//! Curated gallery arrangements and the demo selection
//!
//! The gallery is a fixed set of showcase bouquets, each with a four-color
//! palette and per-role counts. Thumbnails reuse the layout engine with a
//! scaled-down geometry instead of carrying their own placement code.

use std::f64::consts::PI;

use rand::Rng;
use serde::Deserialize;

use crate::layout::{layout_with, LayoutConfig, Pattern, PlacedCircle, RoleBand};
use crate::selection::{FlowerRole, Selection};

/// Demo palette per role: (color name, hex)
const DEMO_FOCAL: [(&str, &str); 3] = [
    ("Rose Pink", "#FF6B9D"),
    ("Light Pink", "#FFB4D1"),
    ("Salmon", "#FFA07A"),
];
const DEMO_SECONDARY: [(&str, &str); 3] = [
    ("Plum", "#DDA0DD"),
    ("Orchid", "#E6A8D7"),
    ("Pale Pink", "#F0C4E1"),
];
const DEMO_FILLER: [(&str, &str); 3] = [
    ("Mint", "#98D8C8"),
    ("Pale Mint", "#B4E5D8"),
    ("Light Green", "#A8E6CF"),
];

/// Built-in showcase arrangements
const CURATED_GALLERY: &str = r##"
[[bouquets]]
id = 1
name = "Romantic Sunset"
colors = ["#FF6B9D", "#FFB4D1", "#FFA07A", "#F0C4E1"]
focal_count = 5
secondary_count = 8
filler_count = 12

[[bouquets]]
id = 2
name = "Spring Freshness"
colors = ["#98D8C8", "#B4E5D8", "#FFFACD", "#E6F3FF"]
focal_count = 4
secondary_count = 10
filler_count = 15

[[bouquets]]
id = 3
name = "Lavender Dreams"
colors = ["#DDA0DD", "#E6A8D7", "#B8A9C9", "#F0E6FF"]
focal_count = 6
secondary_count = 7
filler_count = 13

[[bouquets]]
id = 4
name = "Peach Breeze"
colors = ["#FFDAB9", "#FFE4B5", "#FFA07A", "#FFE5CC"]
focal_count = 5
secondary_count = 9
filler_count = 14

[[bouquets]]
id = 5
name = "Tropical Cocktail"
colors = ["#FF6B9D", "#FFA500", "#98D8C8", "#FFD700"]
focal_count = 7
secondary_count = 8
filler_count = 11

[[bouquets]]
id = 6
name = "Tender Classic"
colors = ["#FFF5EE", "#FFE4E1", "#E6E6FA", "#F5F5DC"]
focal_count = 4
secondary_count = 9
filler_count = 16
"##;

/// One curated arrangement
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryBouquet {
    pub id: u32,
    pub name: String,
    /// Palette, most prominent first
    pub colors: Vec<String>,
    pub focal_count: u32,
    pub secondary_count: u32,
    pub filler_count: u32,
}

impl GalleryBouquet {
    /// Synthetic selection for previewing this arrangement.
    ///
    /// Roles take the palette colors in order (focal, secondary, filler);
    /// missing colors fall back to the previous one.
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        let focal = match self.colors.first() {
            Some(color) => color,
            None => return selection,
        };
        let secondary = self.colors.get(1).unwrap_or(focal);
        let filler = self.colors.get(2).unwrap_or(secondary);

        add_counted(
            &mut selection,
            "accent",
            FlowerRole::Focal,
            focal,
            "Accent bloom",
            self.focal_count,
        );
        add_counted(
            &mut selection,
            "supporting",
            FlowerRole::Secondary,
            secondary,
            "Supporting bloom",
            self.secondary_count,
        );
        add_counted(
            &mut selection,
            "greenery",
            FlowerRole::Filler,
            filler,
            "Greenery",
            self.filler_count,
        );
        selection
    }

    /// Scaled-down geometry for 160x160 thumbnails.
    ///
    /// Radii are fixed per role and the filler ring gets a full-circle
    /// angular jitter, giving the thumbnails their loose outer scatter.
    pub fn mini_config(&self) -> LayoutConfig {
        LayoutConfig::new()
            .with_canvas_size(160.0)
            .with_max_bouquet_radius(70.0)
            .with_band(FlowerRole::Focal, RoleBand::new(15.0, 10.0, 12.0, 0.0, 0.0))
            .with_band(
                FlowerRole::Secondary,
                RoleBand::new(30.0, 12.0, 7.0, 0.0, 0.0),
            )
            .with_band(
                FlowerRole::Filler,
                RoleBand::new(45.0, 25.0, 4.0, 0.0, 2.0 * PI),
            )
    }

    /// Thumbnail layout for this arrangement
    pub fn mini_layout<R: Rng>(&self, rng: &mut R) -> Vec<PlacedCircle> {
        let selection = self.selection();
        layout_with(
            selection.entries(),
            Pattern::Compact,
            &self.mini_config(),
            rng,
        )
    }
}

/// The curated gallery
#[derive(Debug, Clone, Deserialize)]
pub struct Gallery {
    bouquets: Vec<GalleryBouquet>,
}

impl Gallery {
    /// All arrangements, in curated order
    pub fn bouquets(&self) -> &[GalleryBouquet] {
        &self.bouquets
    }

    /// Look up an arrangement by id
    pub fn bouquet(&self, id: u32) -> Option<&GalleryBouquet> {
        self.bouquets.iter().find(|b| b.id == id)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        toml::from_str(CURATED_GALLERY).expect("Curated gallery should be valid TOML")
    }
}

/// Sample selection for showcasing the composer: 5 focal, 8 secondary,
/// 15 filler, colors distributed round-robin within each role.
pub fn demo_selection() -> Selection {
    let mut selection = Selection::new();
    add_round_robin(
        &mut selection,
        "demo-focal",
        FlowerRole::Focal,
        "Focal bloom",
        &DEMO_FOCAL,
        5,
    );
    add_round_robin(
        &mut selection,
        "demo-secondary",
        FlowerRole::Secondary,
        "Secondary bloom",
        &DEMO_SECONDARY,
        8,
    );
    add_round_robin(
        &mut selection,
        "demo-filler",
        FlowerRole::Filler,
        "Filler",
        &DEMO_FILLER,
        15,
    );
    selection
}

fn add_counted(
    selection: &mut Selection,
    species: &str,
    role: FlowerRole,
    color: &str,
    display_name: &str,
    count: u32,
) {
    if count == 0 {
        return;
    }
    let key = selection.add(species, role, color, display_name);
    selection.set_count(&key, count as i32);
}

fn add_round_robin(
    selection: &mut Selection,
    species: &str,
    role: FlowerRole,
    label: &str,
    colors: &[(&str, &str); 3],
    count: usize,
) {
    for i in 0..count {
        let (name, hex) = colors[i % colors.len()];
        selection.add(species, role, hex, &format!("{label} ({name})"));
    }
}
