//! Manual drag adjustment of a generated layout
//!
//! Dragging is a two-state machine: idle, or dragging exactly one circle.
//! Pointer coordinates arrive in display space and are rescaled into canvas
//! space per axis, so the math holds for any displayed size.

use crate::layout::{PlacedCircle, Point};

/// Maps pointer coordinates on the displayed surface into canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub display_width: f64,
    pub display_height: f64,
    pub canvas_size: f64,
}

impl Viewport {
    pub fn new(display_width: f64, display_height: f64, canvas_size: f64) -> Self {
        Self {
            display_width,
            display_height,
            canvas_size,
        }
    }

    /// Rescale a pointer position into canvas space
    pub fn to_canvas(&self, x: f64, y: f64) -> Point {
        Point::new(
            x * self.canvas_size / self.display_width,
            y * self.canvas_size / self.display_height,
        )
    }
}

/// Current drag state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        circle_id: String,
    },
}

/// Drives drag interactions against a mutable circle slice.
///
/// Only the grabbed circle ever moves; a pointer move while idle, or with
/// a circle id that is no longer present, changes nothing.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer press on a circle starts dragging it
    pub fn press(&mut self, circle_id: &str) {
        self.state = DragState::Dragging {
            circle_id: circle_id.to_string(),
        };
    }

    /// Pointer move. Repositions the grabbed circle to the pointer and
    /// returns whether anything moved.
    pub fn drag(
        &self,
        circles: &mut [PlacedCircle],
        viewport: &Viewport,
        x: f64,
        y: f64,
    ) -> bool {
        let circle_id = match &self.state {
            DragState::Dragging { circle_id } => circle_id,
            DragState::Idle => return false,
        };
        match circles.iter_mut().find(|c| &c.id == circle_id) {
            Some(circle) => {
                circle.position = viewport.to_canvas(x, y);
                true
            }
            None => false,
        }
    }

    /// Pointer release or pointer leaving the surface ends the drag
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circles() -> Vec<PlacedCircle> {
        vec![
            PlacedCircle {
                id: "focal-0".to_string(),
                position: Point::new(200.0, 200.0),
                radius: 45.0,
                color: "#DC143C".to_string(),
                entry_key: "rose-#DC143C".to_string(),
            },
            PlacedCircle {
                id: "filler-1".to_string(),
                position: Point::new(120.0, 280.0),
                radius: 12.0,
                color: "#689F38".to_string(),
                entry_key: "fern-#689F38".to_string(),
            },
        ]
    }

    #[test]
    fn test_viewport_rescales_per_axis() {
        let square = Viewport::new(800.0, 800.0, 400.0);
        assert_eq!(square.to_canvas(400.0, 300.0), Point::new(200.0, 150.0));

        let wide = Viewport::new(800.0, 400.0, 400.0);
        assert_eq!(wide.to_canvas(400.0, 300.0), Point::new(200.0, 300.0));
    }

    #[test]
    fn test_press_then_release() {
        let mut controller = DragController::new();
        assert_eq!(*controller.state(), DragState::Idle);
        assert!(!controller.is_dragging());

        controller.press("focal-0");
        assert!(controller.is_dragging());
        assert_eq!(
            *controller.state(),
            DragState::Dragging {
                circle_id: "focal-0".to_string()
            }
        );

        controller.release();
        assert_eq!(*controller.state(), DragState::Idle);
        controller.release();
        assert_eq!(*controller.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_moves_only_the_grabbed_circle() {
        let mut circles = circles();
        let untouched = circles[1].clone();
        let viewport = Viewport::new(800.0, 800.0, 400.0);

        let mut controller = DragController::new();
        controller.press("focal-0");
        assert!(controller.drag(&mut circles, &viewport, 100.0, 100.0));

        assert_eq!(circles[0].position, Point::new(50.0, 50.0));
        assert_eq!(circles[1], untouched);
    }

    #[test]
    fn test_drag_while_idle_is_a_noop() {
        let mut circles = circles();
        let before = circles.clone();
        let viewport = Viewport::new(400.0, 400.0, 400.0);

        let controller = DragController::new();
        assert!(!controller.drag(&mut circles, &viewport, 10.0, 10.0));
        assert_eq!(circles, before);
    }

    #[test]
    fn test_drag_with_vanished_circle_is_a_noop() {
        let mut circles = circles();
        let before = circles.clone();
        let viewport = Viewport::new(400.0, 400.0, 400.0);

        let mut controller = DragController::new();
        controller.press("focal-9");
        assert!(!controller.drag(&mut circles, &viewport, 10.0, 10.0));
        assert_eq!(circles, before);
        // The drag itself stays active; the user still has to let go
        assert!(controller.is_dragging());
    }
}
