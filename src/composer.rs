//! Scheme session: one selection, its generated schemes, and the drag state
//!
//! The composer owns everything a single editing session touches. All
//! mutations run synchronously; the only asynchronous boundary is the
//! render request, which re-enters through [`Composer::apply_photo`] and
//! is dropped there when its scheme is no longer the selected one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::interact::{DragController, DragState, Viewport};
use crate::layout::{layout_with, LayoutConfig, Pattern, Scheme};
use crate::photo::build_prompt;
use crate::selection::{Selection, SelectionEntry};

/// Minimum number of elements before schemes can be generated
pub const MIN_ELEMENTS: u32 = 5;

/// Per-scheme seed step; scheme `id` lays out with seed `id * SEED_STEP`
const SEED_STEP: u64 = 123;

/// Errors produced by the scheme session
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Selection holds {total} elements; at least {minimum} are needed")]
    SelectionTooSmall { total: u32, minimum: u32 },
    #[error("No scheme with id {0}")]
    UnknownScheme(u32),
    #[error("No scheme is selected")]
    NoSchemeSelected,
}

impl ComposeError {
    fn too_small(total: u32) -> Self {
        ComposeError::SelectionTooSmall {
            total,
            minimum: MIN_ELEMENTS,
        }
    }
}

/// A bouquet editing session
#[derive(Debug, Clone, Default)]
pub struct Composer {
    selection: Selection,
    schemes: Vec<Scheme>,
    selected: Option<u32>,
    drag: DragController,
    config: LayoutConfig,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing selection
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Override the layout geometry
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Whether the selection is large enough to generate schemes
    pub fn can_generate(&self) -> bool {
        self.selection.total() >= MIN_ELEMENTS
    }

    /// Build one scheme per pattern from the current selection.
    ///
    /// Replaces any previous schemes, selects the first one, and ends a
    /// drag in progress. Each scheme snapshots the entries it was built
    /// from and lays out with its own derived seed, so re-generating from
    /// an unchanged selection reproduces the same three candidates.
    pub fn generate(&mut self) -> Result<&[Scheme], ComposeError> {
        let total = self.selection.total();
        if total < MIN_ELEMENTS {
            return Err(ComposeError::too_small(total));
        }

        let entries: Vec<SelectionEntry> = self.selection.entries().to_vec();
        self.schemes = Pattern::ALL
            .iter()
            .enumerate()
            .map(|(i, &pattern)| {
                let id = i as u32;
                let mut rng = StdRng::seed_from_u64(id as u64 * SEED_STEP);
                let circles = layout_with(&entries, pattern, &self.config, &mut rng);
                Scheme::new(id, pattern, circles, entries.clone())
            })
            .collect();
        self.selected = Some(0);
        self.drag.release();
        Ok(&self.schemes)
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn scheme(&self, id: u32) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    /// Make a scheme the selected one
    pub fn select(&mut self, id: u32) -> Result<(), ComposeError> {
        if self.scheme(id).is_none() {
            return Err(ComposeError::UnknownScheme(id));
        }
        self.selected = Some(id);
        self.drag.release();
        Ok(())
    }

    pub fn selected(&self) -> Option<&Scheme> {
        self.selected.and_then(|id| self.scheme(id))
    }

    /// Rebuild the selected scheme's circles from its own entry snapshot
    /// with fresh, unseeded randomness. Keeps id and pattern, forgets any
    /// photo since the arrangement it showed no longer exists.
    pub fn regenerate(&mut self) -> Result<(), ComposeError> {
        let id = self.selected.ok_or(ComposeError::NoSchemeSelected)?;
        let config = self.config.clone();
        let scheme = self
            .schemes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ComposeError::UnknownScheme(id))?;

        let mut rng = rand::rng();
        scheme.circles = layout_with(&scheme.entries, scheme.pattern, &config, &mut rng);
        scheme.photo_url = None;
        Ok(())
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Pointer press on a circle of the selected scheme
    pub fn begin_drag(&mut self, circle_id: &str) {
        self.drag.press(circle_id);
    }

    /// Pointer move; returns whether a circle of the selected scheme moved
    pub fn drag_to(&mut self, viewport: &Viewport, x: f64, y: f64) -> bool {
        let id = match self.selected {
            Some(id) => id,
            None => return false,
        };
        let scheme = match self.schemes.iter_mut().find(|s| s.id == id) {
            Some(scheme) => scheme,
            None => return false,
        };
        self.drag.drag(&mut scheme.circles, viewport, x, y)
    }

    /// Pointer release or pointer leave
    pub fn end_drag(&mut self) {
        self.drag.release();
    }

    /// Prompt for the selected scheme, if one is selected
    pub fn photo_prompt(&self) -> Option<String> {
        self.selected().map(build_prompt)
    }

    /// Accept a completed render request.
    ///
    /// The URL is stored only when the scheme it was requested for is
    /// still the selected one; a stale response returns `false` and
    /// changes nothing.
    pub fn apply_photo(&mut self, scheme_id: u32, url: impl Into<String>) -> bool {
        if self.selected != Some(scheme_id) {
            return false;
        }
        match self.schemes.iter_mut().find(|s| s.id == scheme_id) {
            Some(scheme) => {
                scheme.photo_url = Some(url.into());
                true
            }
            None => false,
        }
    }
}
