//! End-to-end composer session tests
//!
//! These walk the full florist workflow: build a selection, compose the
//! three pattern schemes, pick one, nudge circles, and attach a photo.

use bouquet_studio::interact::{DragState, Viewport};
use bouquet_studio::{ComposeError, Composer, FlowerRole, Pattern, Point, Scheme, Selection};
use pretty_assertions::{assert_eq, assert_ne};

fn florist_selection() -> Selection {
    let mut selection = Selection::new();
    let rose = selection.add("rose", FlowerRole::Focal, "#DC143C", "Rose (Red)");
    let mum = selection.add(
        "chrysanthemum",
        FlowerRole::Secondary,
        "#FFD700",
        "Chrysanthemum (Yellow)",
    );
    selection.set_count(&rose, 3);
    selection.set_count(&mum, 2);
    selection
}

#[test]
fn test_adding_same_flower_twice_increments() {
    let mut selection = Selection::new();
    let first = selection.add("rose", FlowerRole::Focal, "#DC143C", "Rose (Red)");
    let second = selection.add("rose", FlowerRole::Focal, "#DC143C", "Rose (Red)");

    assert_eq!(first, second);
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.total(), 2);
    assert_eq!(selection.get(&first).expect("Entry exists").count, 2);
}

#[test]
fn test_generate_gate_needs_five_flowers() {
    let mut selection = florist_selection();
    selection.set_count("chrysanthemum-#FFD700", 1);

    let mut composer = Composer::with_selection(selection);
    assert!(!composer.can_generate());
    let err = composer.generate().expect_err("Four flowers are not enough");
    assert!(matches!(
        err,
        ComposeError::SelectionTooSmall {
            total: 4,
            minimum: 5
        }
    ));

    composer.selection_mut().set_count("chrysanthemum-#FFD700", 2);
    assert!(composer.can_generate());
    assert!(composer.generate().is_ok());
}

#[test]
fn test_generate_builds_three_pattern_schemes() {
    let mut composer = Composer::with_selection(florist_selection());
    let schemes = composer.generate().expect("Should compose").to_vec();

    assert_eq!(schemes.len(), 3);
    let patterns: Vec<Pattern> = schemes.iter().map(|s| s.pattern).collect();
    assert_eq!(
        patterns,
        vec![Pattern::Compact, Pattern::Asymmetric, Pattern::Cascade]
    );
    assert_eq!(schemes[0].id, 0);
    assert_eq!(schemes[2].id, 2);
    assert_eq!(composer.selected().expect("First scheme auto-selected").id, 0);

    // Compact and asymmetric place every flower
    assert_eq!(schemes[0].circles.len(), 5);
    assert_eq!(schemes[1].circles.len(), 5);
    for scheme in &schemes {
        assert_eq!(scheme.entries.len(), 2);
    }
}

#[test]
fn test_compact_scheme_follows_role_bands() {
    let center = Point::new(200.0, 200.0);
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");

    let compact = composer.scheme(0).expect("Compact scheme");
    for circle in &compact.circles {
        let d = circle.position.distance(center);
        if circle.id.starts_with("focal") {
            assert!((30.0..55.0).contains(&d), "{} at {}", circle.id, d);
            assert_eq!(circle.color, "#DC143C");
        } else {
            assert!((70.0..105.0).contains(&d), "{} at {}", circle.id, d);
            assert_eq!(circle.color, "#FFD700");
        }
    }
}

#[test]
fn test_scheme_snapshot_survives_selection_edits() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");

    composer.selection_mut().set_count("rose-#DC143C", 0);
    assert_eq!(composer.selection().total(), 2);

    let compact = composer.scheme(0).expect("Scheme survives the edit");
    assert_eq!(compact.circles.len(), 5);
    assert_eq!(compact.display_name_for("rose-#DC143C"), Some("Rose (Red)"));
}

#[test]
fn test_drag_moves_only_the_grabbed_circle() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");
    let before: Vec<Scheme> = composer.schemes().to_vec();
    let target = before[0].circles[0].id.clone();

    let viewport = Viewport::new(800.0, 800.0, 400.0);
    assert!(!composer.drag_to(&viewport, 10.0, 10.0));

    composer.begin_drag(&target);
    assert!(composer.drag_to(&viewport, 500.0, 300.0));
    composer.end_drag();

    let after = composer.scheme(0).expect("Scheme exists");
    assert_eq!(after.circles[0].position, Point::new(250.0, 150.0));
    assert_eq!(after.circles[1..], before[0].circles[1..]);
    assert_eq!(composer.schemes()[1..], before[1..]);
}

#[test]
fn test_stale_photo_response_is_ignored() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");

    // Response for scheme 2 arrives while scheme 0 is still selected
    assert!(!composer.apply_photo(2, "https://img.example/a.png"));
    assert_eq!(composer.scheme(2).expect("Scheme exists").photo_url, None);

    composer.select(2).expect("Scheme 2 exists");
    assert!(composer.apply_photo(2, "https://img.example/a.png"));
    assert_eq!(
        composer
            .scheme(2)
            .expect("Scheme exists")
            .photo_url
            .as_deref(),
        Some("https://img.example/a.png")
    );
}

#[test]
fn test_select_unknown_scheme_errors() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");

    let err = composer.select(7).expect_err("No scheme 7");
    assert!(matches!(err, ComposeError::UnknownScheme(7)));
    assert_eq!(composer.selected().expect("Selection unchanged").id, 0);
}

#[test]
fn test_regenerate_keeps_identity_and_clears_photo() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");
    composer.select(1).expect("Scheme 1 exists");
    composer.apply_photo(1, "https://img.example/old.png");

    let before = composer.selected().expect("Selected").clone();
    composer.regenerate().expect("Regenerate selected scheme");

    let after = composer.selected().expect("Still selected");
    assert_eq!(after.id, 1);
    assert_eq!(after.pattern, Pattern::Asymmetric);
    assert_eq!(after.circles.len(), before.circles.len());
    assert_ne!(after.circles, before.circles);
    assert_eq!(after.photo_url, None);
}

#[test]
fn test_photo_prompt_names_flowers_and_pattern() {
    let mut composer = Composer::with_selection(florist_selection());
    assert_eq!(composer.photo_prompt(), None);

    composer.generate().expect("Should compose");
    let prompt = composer.photo_prompt().expect("Prompt for selected scheme");
    assert!(prompt.contains("3x Rose (Red), 2x Chrysanthemum (Yellow)"));
    assert!(prompt.contains("arranged in a compact arrangement"));
}

#[test]
fn test_generate_resets_previous_session() {
    let mut composer = Composer::with_selection(florist_selection());
    composer.generate().expect("Should compose");
    composer.select(2).expect("Scheme 2 exists");
    composer.begin_drag("focal-0");

    composer.generate().expect("Should compose again");
    assert_eq!(composer.selected().expect("Reset to first scheme").id, 0);
    assert!(!matches!(
        composer.drag_state(),
        DragState::Dragging { .. }
    ));
}
