//! Drag gesture recognition for the topmost card.
//!
//! One interaction at a time: a pointer-down on the current topmost card
//! (and only there) enters `Dragging`, move events yield visual frames for
//! the renderer, and release resolves to a directional commit or a
//! spring-back cancel. Pointer-cancel aborts straight back to idle.
//!
//! The recognizer is an explicit state object owned by whoever owns the
//! deck; it holds no global state.

use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

/// Horizontal displacement (px) beyond which a release commits the card.
pub const COMMIT_THRESHOLD: f32 = 120.0;

/// Distance over which a directional badge fades to full opacity.
pub const BADGE_FADE_DISTANCE: f32 = 120.0;

/// Rotation (degrees) applied per horizontal pixel of drag.
pub const ROTATION_FACTOR: f32 = 0.06;

/// Exit animation length for a committed card.
pub const EXIT_ANIM: Duration = Duration::from_millis(220);

/// Spring-back animation length for a cancelled drag.
pub const SPRING_ANIM: Duration = Duration::from_millis(200);

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDirection {
    /// Dragged left: dismiss the card.
    Skip,
    /// Dragged right: keep the card.
    Keep,
}

impl SwipeDirection {
    /// Sign of the horizontal exit translation.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Keep => 1.0,
            SwipeDirection::Skip => -1.0,
        }
    }
}

/// Visual feedback for one in-flight drag frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragFrame {
    /// Card translation from its resting position.
    pub translate: (f32, f32),
    /// Card rotation in degrees, proportional to the horizontal drag.
    pub rotation: f32,
    /// Opacity of the "keep" badge (right drag), in `[0, 1]`.
    pub keep_opacity: f32,
    /// Opacity of the "skip" badge (left drag), in `[0, 1]`.
    pub skip_opacity: f32,
    /// Scale applied to whichever badge is visible.
    pub badge_scale: f32,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureRelease {
    /// No drag was in progress.
    Ignored,
    /// Threshold crossed: the card leaves the stack in `direction`.
    Commit {
        direction: SwipeDirection,
        /// Vertical displacement at release, carried into the exit path.
        dy: f32,
        duration: Duration,
    },
    /// Below threshold: the card springs back to rest, badges reset.
    Cancelled { duration: Duration },
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    card: Uuid,
    origin: (f32, f32),
    dx: f32,
    dy: f32,
}

/// Converts a pointer-down/move/up sequence into commit or cancel decisions.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    drag: Option<DragState>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The card currently being dragged, if any.
    pub fn dragging_card(&self) -> Option<Uuid> {
        self.drag.map(|d| d.card)
    }

    /// Cumulative displacement of the active drag.
    pub fn offset(&self) -> Option<(f32, f32)> {
        self.drag.map(|d| (d.dx, d.dy))
    }

    /// Try to begin a drag. Only a pointer-down on the current topmost card
    /// that did not originate from an interactive control starts one; downs
    /// arriving while a drag is active are ignored. Returns whether the
    /// recognizer entered `Dragging`.
    pub fn pointer_down(
        &mut self,
        card: Uuid,
        top_card: Option<Uuid>,
        position: (f32, f32),
        from_control: bool,
    ) -> bool {
        if self.drag.is_some() || from_control || top_card != Some(card) {
            return false;
        }
        self.drag = Some(DragState {
            card,
            origin: position,
            dx: 0.0,
            dy: 0.0,
        });
        true
    }

    /// Track pointer motion and produce the visual frame for it.
    pub fn pointer_move(&mut self, position: (f32, f32)) -> Option<DragFrame> {
        let drag = self.drag.as_mut()?;
        drag.dx = position.0 - drag.origin.0;
        drag.dy = position.1 - drag.origin.1;

        let mag = (drag.dx.abs() / BADGE_FADE_DISTANCE).min(1.0);
        let (keep_opacity, skip_opacity) = if drag.dx > 0.0 {
            (mag, 0.0)
        } else if drag.dx < 0.0 {
            (0.0, mag)
        } else {
            (0.0, 0.0)
        };

        Some(DragFrame {
            translate: (drag.dx, drag.dy),
            rotation: drag.dx * ROTATION_FACTOR,
            keep_opacity,
            skip_opacity,
            badge_scale: 0.9 + mag * 0.2,
        })
    }

    /// Resolve the drag on pointer release. The decision depends only on the
    /// horizontal displacement; vertical motion never commits a card.
    pub fn pointer_up(&mut self) -> GestureRelease {
        let drag = match self.drag.take() {
            Some(drag) => drag,
            None => return GestureRelease::Ignored,
        };

        if drag.dx > COMMIT_THRESHOLD {
            GestureRelease::Commit {
                direction: SwipeDirection::Keep,
                dy: drag.dy,
                duration: EXIT_ANIM,
            }
        } else if drag.dx < -COMMIT_THRESHOLD {
            GestureRelease::Commit {
                direction: SwipeDirection::Skip,
                dy: drag.dy,
                duration: EXIT_ANIM,
            }
        } else {
            GestureRelease::Cancelled {
                duration: SPRING_ANIM,
            }
        }
    }

    /// Abort immediately without committing (pointer-cancel).
    pub fn pointer_cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_drag(recognizer: &mut GestureRecognizer) -> Uuid {
        let card = Uuid::new_v4();
        assert!(recognizer.pointer_down(card, Some(card), (10.0, 20.0), false));
        card
    }

    #[test]
    fn test_commit_right_past_threshold() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);
        recognizer.pointer_move((160.0, 320.0));

        match recognizer.pointer_up() {
            GestureRelease::Commit {
                direction,
                dy,
                duration,
            } => {
                assert_eq!(direction, SwipeDirection::Keep);
                assert_eq!(dy, 300.0);
                assert_eq!(duration, EXIT_ANIM);
            }
            other => panic!("expected commit, got {:?}", other),
        }
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn test_commit_left_past_threshold() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);
        recognizer.pointer_move((-140.0, 20.0));

        match recognizer.pointer_up() {
            GestureRelease::Commit { direction, .. } => {
                assert_eq!(direction, SwipeDirection::Skip)
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_release_below_threshold_cancels() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);
        // Large vertical motion must not commit
        recognizer.pointer_move((60.0, 400.0));

        assert_eq!(
            recognizer.pointer_up(),
            GestureRelease::Cancelled {
                duration: SPRING_ANIM
            }
        );
    }

    #[test]
    fn test_exact_threshold_cancels() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);
        recognizer.pointer_move((10.0 + COMMIT_THRESHOLD, 20.0));

        assert!(matches!(
            recognizer.pointer_up(),
            GestureRelease::Cancelled { .. }
        ));
    }

    #[test]
    fn test_down_on_non_top_card_ignored() {
        let mut recognizer = GestureRecognizer::new();
        let top = Uuid::new_v4();
        let buried = Uuid::new_v4();
        assert!(!recognizer.pointer_down(buried, Some(top), (0.0, 0.0), false));
        assert!(!recognizer.pointer_down(buried, None, (0.0, 0.0), false));
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn test_down_on_control_ignored() {
        let mut recognizer = GestureRecognizer::new();
        let card = Uuid::new_v4();
        assert!(!recognizer.pointer_down(card, Some(card), (0.0, 0.0), true));
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn test_second_down_while_dragging_ignored() {
        let mut recognizer = GestureRecognizer::new();
        let first = start_drag(&mut recognizer);
        let other = Uuid::new_v4();
        assert!(!recognizer.pointer_down(other, Some(other), (0.0, 0.0), false));
        assert_eq!(recognizer.dragging_card(), Some(first));
    }

    #[test]
    fn test_pointer_cancel_aborts_without_commit() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);
        recognizer.pointer_move((300.0, 20.0));
        recognizer.pointer_cancel();

        assert!(!recognizer.is_dragging());
        assert_eq!(recognizer.pointer_up(), GestureRelease::Ignored);
    }

    #[test]
    fn test_badge_opacity_scales_with_drag() {
        let mut recognizer = GestureRecognizer::new();
        start_drag(&mut recognizer);

        let frame = recognizer.pointer_move((70.0, 20.0)).unwrap();
        assert_eq!(frame.keep_opacity, 0.5);
        assert_eq!(frame.skip_opacity, 0.0);
        assert_eq!(frame.rotation, 60.0 * ROTATION_FACTOR);
        assert_eq!(frame.badge_scale, 1.0);

        let frame = recognizer.pointer_move((-230.0, 20.0)).unwrap();
        assert_eq!(frame.keep_opacity, 0.0);
        // Saturates at full opacity
        assert_eq!(frame.skip_opacity, 1.0);
        assert_eq!(frame.translate, (-240.0, 0.0));
    }

    #[test]
    fn test_move_without_drag_yields_nothing() {
        let mut recognizer = GestureRecognizer::new();
        assert_eq!(recognizer.pointer_move((50.0, 50.0)), None);
        assert_eq!(recognizer.pointer_up(), GestureRelease::Ignored);
    }
}
