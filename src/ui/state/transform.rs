// SPDX-License-Identifier: MPL-2.0
//! Gesture-driven image transform.
//!
//! This module turns raw gesture samples into the scale, offset and angle
//! the renderer applies to the displayed page:
//! - Pan replaces the offset with the drag's cumulative translation
//! - Pinch replaces the scale while it sits inside the settled band
//! - Rotation tracks the fingers and always snaps back to zero
//! - Double tap and the zoom buttons jump between settled scales
//!
//! Bounds are enforced when a gesture settles, not while it is live, so the
//! scale may briefly sit outside `[1, 5]` during a pinch.

use super::gesture::{GestureConflict, GestureKind, GestureSession};
use crate::domain::ui::{is_within_scale_bounds, scale_bounds};
use crate::ui::animation::Curve;
use iced::{Radians, Vector};

/// Rest angle. Rotation never outlives its gesture.
const NO_ROTATION: Radians = Radians(0.0);

/// Scale, offset and angle applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Uniform zoom multiplier (1.0 = native size).
    pub scale: f32,
    /// Translation from center, in drag units.
    pub offset: Vector,
    /// Transient rotation of a live rotate gesture.
    pub angle: Radians,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: scale_bounds::DEFAULT,
            offset: Vector::ZERO,
            angle: NO_ROTATION,
        }
    }
}

/// Inputs accepted by the controller.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Cumulative drag translation since the drag began.
    Pan(Vector),
    PanEnded,
    /// Cumulative pinch magnification since the pinch began.
    Magnify(f32),
    MagnifyEnded,
    /// Cumulative rotation since the rotate gesture began.
    Rotate(Radians),
    RotateEnded,
    /// Double tap on the image.
    DoubleTap,
    /// Reset control button.
    Reset,
    /// Zoom-out control button.
    StepDown,
    /// Zoom-in control button.
    StepUp,
}

/// Outcome of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// State written (or left alone) without a transition.
    None,
    /// State written; the renderer should ease toward it.
    Animate(Curve),
    /// Sample refused because another gesture owns the transform.
    Rejected(GestureConflict),
}

/// Owns the [`TransformState`] and applies gesture policies to it.
#[derive(Debug, Clone, Default)]
pub struct TransformController {
    state: TransformState,
    session: GestureSession,
}

impl TransformController {
    /// Controller at mount: native scale, centered, unrotated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller starting from an arbitrary state, bypassing every policy.
    ///
    /// Non-finite fields are still sanitized.
    #[must_use]
    pub fn from_state(state: TransformState) -> Self {
        Self {
            state: TransformState {
                scale: sanitize_scale(state.scale),
                offset: sanitize_offset(state.offset),
                angle: sanitize_angle(state.angle),
            },
            session: GestureSession::default(),
        }
    }

    /// Handle a controller message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pan(translation) => self.apply_pan(translation),
            Message::PanEnded => self.end_pan(),
            Message::Magnify(value) => self.apply_magnification(value),
            Message::MagnifyEnded => self.end_magnification(),
            Message::Rotate(angle) => self.apply_rotation(angle),
            Message::RotateEnded => self.end_rotation(),
            Message::DoubleTap => self.toggle_zoom(),
            Message::Reset => self.reset(),
            Message::StepDown => self.step_down(),
            Message::StepUp => self.step_up(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PAN
    // ═══════════════════════════════════════════════════════════════════════

    /// Replaces the offset with the drag's cumulative translation.
    pub fn apply_pan(&mut self, translation: Vector) -> Effect {
        if let Err(conflict) = self.session.update(GestureKind::Pan) {
            return rejected(conflict);
        }
        self.state.offset = sanitize_offset(translation);
        Effect::Animate(Curve::Spring)
    }

    /// Re-centers the image unless it is zoomed in.
    pub fn end_pan(&mut self) -> Effect {
        if let Err(conflict) = self.session.end(GestureKind::Pan) {
            return rejected(conflict);
        }
        if self.state.scale <= scale_bounds::MIN {
            self.reset()
        } else {
            Effect::None
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PINCH
    // ═══════════════════════════════════════════════════════════════════════

    /// Replaces the scale with the pinch magnification.
    ///
    /// Ignored while the current scale is outside the settled band; the
    /// value is then corrected when the pinch ends.
    pub fn apply_magnification(&mut self, value: f32) -> Effect {
        if let Err(conflict) = self.session.update(GestureKind::Pinch) {
            return rejected(conflict);
        }
        if !is_within_scale_bounds(self.state.scale) {
            log::trace!("pinch sample {value} ignored at scale {}", self.state.scale);
            return Effect::None;
        }
        self.state.scale = sanitize_scale(value);
        Effect::Animate(Curve::Spring)
    }

    /// Brings the scale back into `[1, 5]`.
    pub fn end_magnification(&mut self) -> Effect {
        if let Err(conflict) = self.session.end(GestureKind::Pinch) {
            return rejected(conflict);
        }
        if is_within_scale_bounds(self.state.scale) {
            Effect::None
        } else {
            self.settle_scale(self.state.scale)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ROTATION
    // ═══════════════════════════════════════════════════════════════════════

    /// Sets the angle directly so the image tracks the fingers.
    pub fn apply_rotation(&mut self, angle: Radians) -> Effect {
        if let Err(conflict) = self.session.update(GestureKind::Rotate) {
            return rejected(conflict);
        }
        self.state.angle = sanitize_angle(angle);
        Effect::None
    }

    /// Snaps the angle back to zero.
    pub fn end_rotation(&mut self) -> Effect {
        if let Err(conflict) = self.session.end(GestureKind::Rotate) {
            return rejected(conflict);
        }
        self.state.angle = NO_ROTATION;
        Effect::Animate(Curve::Spring)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DISCRETE ACTIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Zooms to the maximum from exactly native scale, otherwise resets.
    ///
    /// The comparison is exact: a scale that drifted to `1.0000001` resets
    /// instead of zooming in.
    #[allow(clippy::float_cmp)]
    pub fn toggle_zoom(&mut self) -> Effect {
        if self.state.scale == scale_bounds::MIN {
            self.state.scale = scale_bounds::MAX;
            Effect::Animate(Curve::Spring)
        } else {
            self.reset()
        }
    }

    /// Native scale, centered. The angle is left to its own gesture.
    pub fn reset(&mut self) -> Effect {
        self.state.scale = scale_bounds::DEFAULT;
        self.state.offset = Vector::ZERO;
        Effect::Animate(Curve::Spring)
    }

    /// Zooms out by one step, resetting once native scale is reached.
    pub fn step_down(&mut self) -> Effect {
        if self.state.scale <= scale_bounds::MIN {
            return self.reset();
        }
        self.settle_scale(self.state.scale - scale_bounds::STEP)
    }

    /// Zooms in by one step, stopping at the maximum.
    pub fn step_up(&mut self) -> Effect {
        if self.state.scale < scale_bounds::MAX {
            self.settle_scale(self.state.scale + scale_bounds::STEP)
        } else {
            self.state.scale = scale_bounds::MAX;
            Effect::None
        }
    }

    /// Applies the settle policy shared by pinch end and the zoom buttons.
    fn settle_scale(&mut self, candidate: f32) -> Effect {
        if candidate < scale_bounds::MIN {
            self.reset()
        } else {
            self.state.scale = candidate.min(scale_bounds::MAX);
            Effect::Animate(Curve::Spring)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.state.offset
    }

    #[must_use]
    pub fn angle(&self) -> Radians {
        self.state.angle
    }

    /// Whether the image is displayed above native scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.scale > scale_bounds::MIN
    }

    /// The gesture currently in progress, if any.
    #[must_use]
    pub fn live_gesture(&self) -> Option<GestureKind> {
        self.session.live()
    }
}

fn rejected(conflict: GestureConflict) -> Effect {
    log::debug!("{conflict}");
    Effect::Rejected(conflict)
}

/// Maps pathological scale input to the nearest settled bound.
fn sanitize_scale(value: f32) -> f32 {
    if value.is_nan() {
        scale_bounds::MIN
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            scale_bounds::MAX
        } else {
            scale_bounds::MIN
        }
    } else {
        value
    }
}

fn sanitize_offset(offset: Vector) -> Vector {
    let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
    Vector::new(finite_or_zero(offset.x), finite_or_zero(offset.y))
}

fn sanitize_angle(angle: Radians) -> Radians {
    if angle.0.is_finite() {
        angle
    } else {
        NO_ROTATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Degrees;

    fn at_scale(scale: f32) -> TransformController {
        TransformController::from_state(TransformState {
            scale,
            ..TransformState::default()
        })
    }

    fn assert_reset(controller: &TransformController) {
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.offset(), Vector::ZERO);
    }

    // -------------------------------------------------------------------------
    // Mount
    // -------------------------------------------------------------------------

    #[test]
    fn new_controller_is_native_centered_unrotated() {
        let controller = TransformController::new();
        assert_eq!(controller.state(), TransformState::default());
        assert_eq!(controller.angle(), Radians(0.0));
        assert!(controller.live_gesture().is_none());
        assert!(!controller.is_zoomed());
    }

    // -------------------------------------------------------------------------
    // Pan
    // -------------------------------------------------------------------------

    #[test]
    fn pan_replaces_offset_with_cumulative_translation() {
        let mut controller = at_scale(2.0);
        controller.apply_pan(Vector::new(10.0, 5.0));
        controller.apply_pan(Vector::new(30.0, -20.0));

        assert_eq!(controller.offset(), Vector::new(30.0, -20.0));
        assert_eq!(controller.live_gesture(), Some(GestureKind::Pan));
    }

    #[test]
    fn every_pan_update_is_animated() {
        let mut controller = TransformController::new();
        let effect = controller.apply_pan(Vector::new(1.0, 1.0));
        assert_eq!(effect, Effect::Animate(Curve::Spring));
    }

    #[test]
    fn end_pan_at_native_scale_resets() {
        let mut controller = TransformController::new();
        controller.apply_pan(Vector::new(50.0, -30.0));
        assert_eq!(controller.offset(), Vector::new(50.0, -30.0));

        controller.end_pan();
        assert_reset(&controller);
        assert!(controller.live_gesture().is_none());
    }

    #[test]
    fn end_pan_below_native_scale_resets() {
        let mut controller = at_scale(0.5);
        controller.apply_pan(Vector::new(5.0, 5.0));
        controller.end_pan();
        assert_reset(&controller);
    }

    #[test]
    fn end_pan_when_zoomed_keeps_offset() {
        let mut controller = at_scale(3.0);
        controller.apply_pan(Vector::new(50.0, -30.0));

        let effect = controller.end_pan();

        assert_eq!(effect, Effect::None);
        assert_eq!(controller.offset(), Vector::new(50.0, -30.0));
        assert_eq!(controller.scale(), 3.0);
    }

    #[test]
    fn non_finite_pan_components_become_zero() {
        let mut controller = at_scale(2.0);
        controller.apply_pan(Vector::new(f32::NAN, 12.0));
        assert_eq!(controller.offset(), Vector::new(0.0, 12.0));
    }

    // -------------------------------------------------------------------------
    // Pinch
    // -------------------------------------------------------------------------

    #[test]
    fn magnification_may_leave_bounds_while_live() {
        let mut controller = TransformController::new();
        controller.apply_magnification(7.5);
        assert_eq!(controller.scale(), 7.5);
    }

    #[test]
    fn magnification_is_ignored_above_bounds() {
        let mut controller = at_scale(6.0);
        let effect = controller.apply_magnification(2.0);

        assert_eq!(effect, Effect::None);
        assert_eq!(controller.scale(), 6.0);
    }

    #[test]
    fn magnification_is_ignored_below_bounds() {
        let mut controller = TransformController::new();
        controller.apply_magnification(0.4);
        controller.apply_magnification(2.0);
        assert_eq!(controller.scale(), 0.4);
    }

    #[test]
    fn end_magnification_below_bounds_resets() {
        let mut controller = TransformController::from_state(TransformState {
            scale: 1.0,
            offset: Vector::new(40.0, 40.0),
            angle: Radians(0.0),
        });
        controller.apply_magnification(0.6);
        controller.end_magnification();
        assert_reset(&controller);
    }

    #[test]
    fn end_magnification_above_bounds_clamps_to_max() {
        let mut controller = TransformController::new();
        controller.apply_magnification(9.0);

        let effect = controller.end_magnification();

        assert_eq!(effect, Effect::Animate(Curve::Spring));
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn end_magnification_inside_bounds_keeps_scale_and_offset() {
        let mut controller = TransformController::from_state(TransformState {
            scale: 2.0,
            offset: Vector::new(8.0, 4.0),
            angle: Radians(0.0),
        });
        controller.apply_magnification(3.25);

        assert_eq!(controller.end_magnification(), Effect::None);
        assert_eq!(controller.scale(), 3.25);
        assert_eq!(controller.offset(), Vector::new(8.0, 4.0));
    }

    #[test]
    fn settled_scale_is_always_within_bounds() {
        let samples = [-3.0, 0.0, 0.5, 1.0, 2.2, 5.0, 5.5, 100.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY];
        for start in [0.2, 1.0, 3.0, 6.0] {
            for value in samples {
                let mut controller = at_scale(start);
                controller.apply_magnification(value);
                controller.end_magnification();
                assert!(
                    is_within_scale_bounds(controller.scale()),
                    "start {start}, sample {value} settled at {}",
                    controller.scale()
                );
            }
        }
    }

    #[test]
    fn infinite_magnification_clamps_to_nearest_bound() {
        let mut controller = TransformController::new();
        controller.apply_magnification(f32::INFINITY);
        assert_eq!(controller.scale(), 5.0);

        let mut controller = TransformController::new();
        controller.apply_magnification(f32::NEG_INFINITY);
        assert_eq!(controller.scale(), 1.0);
    }

    // -------------------------------------------------------------------------
    // Rotation
    // -------------------------------------------------------------------------

    #[test]
    fn rotation_tracks_fingers_without_animation() {
        let mut controller = TransformController::new();
        let effect = controller.apply_rotation(Radians(0.5));
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.angle(), Radians(0.5));
    }

    #[test]
    fn end_rotation_always_returns_to_zero() {
        for degrees in [360.0, -45.0, 0.0, 90.0] {
            let mut controller = TransformController::new();
            controller.apply_rotation(Radians::from(Degrees(degrees)));

            let effect = controller.end_rotation();

            assert_eq!(effect, Effect::Animate(Curve::Spring));
            assert_eq!(controller.angle(), Radians(0.0));
        }
    }

    #[test]
    fn rotation_does_not_touch_scale_or_offset() {
        let mut controller = TransformController::from_state(TransformState {
            scale: 2.5,
            offset: Vector::new(3.0, 4.0),
            angle: Radians(0.0),
        });
        controller.apply_rotation(Radians(1.0));
        controller.end_rotation();
        assert_eq!(controller.scale(), 2.5);
        assert_eq!(controller.offset(), Vector::new(3.0, 4.0));
    }

    // -------------------------------------------------------------------------
    // Double tap
    // -------------------------------------------------------------------------

    #[test]
    fn double_tap_at_native_scale_zooms_to_max() {
        let mut controller = TransformController::new();
        controller.toggle_zoom();
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn double_tap_at_max_resets() {
        let mut controller = TransformController::new();
        controller.toggle_zoom();
        controller.apply_pan(Vector::new(12.0, 12.0));
        controller.end_pan();

        controller.toggle_zoom();
        assert_reset(&controller);
    }

    #[test]
    fn double_tap_at_intermediate_scale_resets() {
        let mut controller = at_scale(2.5);
        controller.toggle_zoom();
        assert_reset(&controller);
    }

    #[test]
    fn double_tap_uses_exact_equality() {
        // A value that drifted off 1.0 no longer zooms in.
        let mut controller = at_scale(1.0 + f32::EPSILON);
        controller.toggle_zoom();
        assert_eq!(controller.scale(), 1.0);
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    #[test]
    fn step_up_stops_at_max() {
        let mut controller = TransformController::new();
        for _ in 0..4 {
            controller.step_up();
        }
        assert_eq!(controller.scale(), 5.0);

        assert_eq!(controller.step_up(), Effect::None);
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn step_up_from_above_max_clamps() {
        let mut controller = at_scale(6.0);
        controller.step_up();
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn step_down_at_native_scale_resets() {
        let mut controller = TransformController::from_state(TransformState {
            scale: 1.0,
            offset: Vector::new(-7.0, 2.0),
            angle: Radians(0.0),
        });
        controller.step_down();
        assert_reset(&controller);
    }

    #[test]
    fn step_down_below_native_scale_resets() {
        let mut controller = at_scale(1.5);
        controller.step_down();
        assert_reset(&controller);
    }

    #[test]
    fn step_down_from_above_max_clamps() {
        let mut controller = at_scale(8.0);
        controller.step_down();
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn step_down_walks_back_to_native() {
        let mut controller = at_scale(5.0);
        controller.step_down();
        assert_eq!(controller.scale(), 4.0);
        for _ in 0..3 {
            controller.step_down();
        }
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn reset_leaves_angle_alone() {
        let mut controller = TransformController::new();
        controller.apply_rotation(Radians(0.3));
        controller.reset();
        assert_eq!(controller.angle(), Radians(0.3));
    }

    // -------------------------------------------------------------------------
    // Gesture serialization
    // -------------------------------------------------------------------------

    #[test]
    fn interleaved_gesture_is_rejected_without_mutation() {
        let mut controller = TransformController::new();
        controller.apply_magnification(2.0);

        let effect = controller.apply_rotation(Radians(1.0));

        assert!(matches!(
            effect,
            Effect::Rejected(GestureConflict {
                requested: GestureKind::Rotate,
                live: GestureKind::Pinch,
            })
        ));
        assert_eq!(controller.angle(), Radians(0.0));
        assert!(matches!(controller.end_pan(), Effect::Rejected(_)));
        assert_eq!(controller.scale(), 2.0);
    }

    #[test]
    fn next_gesture_is_accepted_after_end() {
        let mut controller = TransformController::new();
        controller.apply_magnification(2.0);
        controller.end_magnification();

        controller.apply_pan(Vector::new(4.0, 4.0));
        assert_eq!(controller.offset(), Vector::new(4.0, 4.0));
    }

    #[test]
    fn handle_dispatches_messages() {
        let mut controller = TransformController::new();
        controller.handle(Message::Magnify(3.0));
        controller.handle(Message::MagnifyEnded);
        controller.handle(Message::Pan(Vector::new(1.0, 2.0)));
        controller.handle(Message::PanEnded);
        assert_eq!(controller.scale(), 3.0);
        assert_eq!(controller.offset(), Vector::new(1.0, 2.0));

        controller.handle(Message::StepUp);
        assert_eq!(controller.scale(), 4.0);
        controller.handle(Message::StepDown);
        assert_eq!(controller.scale(), 3.0);

        controller.handle(Message::DoubleTap);
        assert_reset(&controller);
        controller.handle(Message::DoubleTap);
        assert_eq!(controller.scale(), 5.0);
        controller.handle(Message::Reset);
        assert_reset(&controller);

        controller.handle(Message::Rotate(Radians(2.0)));
        controller.handle(Message::RotateEnded);
        assert_eq!(controller.angle(), Radians(0.0));
    }
}
