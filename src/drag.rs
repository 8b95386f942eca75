//! Drag-to-Rotate Input
//!
//! The VR fallback: pointer or touch drags rotate the camera. Horizontal
//! drag maps to yaw (the Y axis), vertical drag to pitch (the X axis),
//! scaled so a full-viewport drag spans one full turn. Touch and pointer
//! input unify on the same press/move/release primitive, keyed on the
//! first touch point only; multi-touch gestures are out of scope.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::host::{RotationTarget, ViewportSize};

/// Baseline captured at press time; present only while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Press coordinate in client pixels.
    pub start: Vec2,
    /// Camera (pitch, yaw) rotation at press time, radians.
    pub base: Vec2,
}

/// Converts pointer/touch drags into camera pitch and yaw.
#[derive(Debug, Clone)]
pub struct DragRotate {
    damping: f32,
    drag: Option<DragState>,
}

impl DragRotate {
    /// Create a drag controller with the given damping factor.
    pub fn new(damping: f32) -> Self {
        Self {
            damping,
            drag: None,
        }
    }

    /// Whether a press is currently active.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The damping factor applied to pixel deltas.
    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Record the press coordinate and the camera's current rotation as
    /// the drag baseline.
    pub fn press(&mut self, position: Vec2, object: &impl RotationTarget) {
        let rotation = object.rotation();
        self.drag = Some(DragState {
            start: position,
            base: Vec2::new(rotation.x, rotation.y),
        });
    }

    /// Rotate the camera toward the current pointer position.
    ///
    /// No-op unless a press is active. The damped pixel delta is converted
    /// to radians proportionally to the viewport extent:
    /// `angle = TAU * delta / extent`, applied on top of the baseline.
    pub fn move_to(
        &mut self,
        position: Vec2,
        viewport: ViewportSize,
        object: &mut impl RotationTarget,
    ) {
        let Some(drag) = self.drag else { return };

        let delta = (position - drag.start) * self.damping;
        let mut rotation = object.rotation();
        rotation.y = TAU * (delta.x / viewport.width) + drag.base.y;
        rotation.x = TAU * (delta.y / viewport.height) + drag.base.x;
        object.set_rotation(rotation);
    }

    /// Clear the drag baseline; the rotation is left where it is.
    pub fn release(&mut self) {
        self.drag = None;
    }
}
