// SPDX-License-Identifier: MPL-2.0
//! Pointer adapters that turn desktop input into gesture samples.
//!
//! Touch platforms deliver pan, pinch and rotate samples directly. On a
//! desktop the shell synthesizes them:
//! - Left drag past the touch slop is a pan
//! - Ctrl + wheel is a pinch, Shift + wheel is a rotation
//!
//! Wheels have no release, so a wheel gesture ends once it has been idle for
//! [`WHEEL_GESTURE_IDLE_MS`].

use crate::config::{
    TOUCH_SLOP, WHEEL_DEGREES_PER_LINE, WHEEL_GESTURE_IDLE_MS, WHEEL_MAGNIFICATION_PER_LINE,
};
use crate::ui::state::transform::Message as TransformMessage;
use iced::mouse::ScrollDelta;
use iced::{Degrees, Point, Radians, Vector};
use std::time::{Duration, Instant};

/// Logical pixels treated as one wheel line for pixel-precise devices.
const PIXELS_PER_LINE: f32 = 40.0;

/// Tracks a left-button drag and emits cumulative translations.
#[derive(Debug, Clone, Default)]
pub struct DragInput {
    cursor: Option<Point>,
    origin: Option<Point>,
    live: bool,
}

impl DragInput {
    pub fn press(&mut self) {
        self.origin = self.cursor;
        self.live = false;
    }

    /// Returns a pan sample once the pointer has left the slop.
    pub fn moved(&mut self, position: Point) -> Option<TransformMessage> {
        self.cursor = Some(position);
        let origin = self.origin?;
        let translation = position - origin;
        if !self.live && translation.x.hypot(translation.y) <= TOUCH_SLOP {
            return None;
        }
        self.live = true;
        Some(TransformMessage::Pan(translation))
    }

    /// Returns the end sample if the press turned into a pan.
    pub fn release(&mut self) -> Option<TransformMessage> {
        self.origin = None;
        std::mem::take(&mut self.live).then_some(TransformMessage::PanEnded)
    }

    /// Distance travelled since the press, if any.
    #[must_use]
    pub fn travel(&self) -> f32 {
        match (self.origin, self.cursor) {
            (Some(origin), Some(cursor)) => {
                let delta: Vector = cursor - origin;
                delta.x.hypot(delta.y)
            }
            _ => 0.0,
        }
    }
}

/// What a wheel step means under the current modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelMode {
    Pinch,
    Rotate,
}

#[derive(Debug, Clone, Copy)]
struct WheelGesture {
    mode: WheelMode,
    /// Magnification factor or accumulated degrees, per mode.
    value: f32,
    last_step: Instant,
}

/// Accumulates wheel steps into pinch or rotate gestures.
#[derive(Debug, Clone, Default)]
pub struct WheelInput {
    active: Option<WheelGesture>,
}

impl WheelInput {
    /// Converts a wheel step into a gesture update.
    ///
    /// A step in another mode while a wheel gesture is live is dropped.
    pub fn scroll(
        &mut self,
        mode: WheelMode,
        delta: ScrollDelta,
        now: Instant,
    ) -> Option<TransformMessage> {
        let lines = match delta {
            ScrollDelta::Lines { y, .. } => y,
            ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_LINE,
        };

        let gesture = self.active.get_or_insert(WheelGesture {
            mode,
            value: match mode {
                WheelMode::Pinch => 1.0,
                WheelMode::Rotate => 0.0,
            },
            last_step: now,
        });
        if gesture.mode != mode {
            return None;
        }
        gesture.last_step = now;

        Some(match mode {
            WheelMode::Pinch => {
                gesture.value += lines * WHEEL_MAGNIFICATION_PER_LINE;
                TransformMessage::Magnify(gesture.value)
            }
            WheelMode::Rotate => {
                gesture.value += lines * WHEEL_DEGREES_PER_LINE;
                TransformMessage::Rotate(Radians::from(Degrees(gesture.value)))
            }
        })
    }

    /// Ends the wheel gesture after it has been idle long enough.
    pub fn tick(&mut self, now: Instant) -> Option<TransformMessage> {
        let gesture = self.active?;
        if now.saturating_duration_since(gesture.last_step)
            < Duration::from_millis(WHEEL_GESTURE_IDLE_MS)
        {
            return None;
        }
        self.active = None;
        Some(match gesture.mode {
            WheelMode::Pinch => TransformMessage::MagnifyEnded,
            WheelMode::Rotate => TransformMessage::RotateEnded,
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_stay_below_slop() {
        let mut drag = DragInput::default();
        drag.moved(Point::new(10.0, 10.0));
        drag.press();

        assert!(drag.moved(Point::new(12.0, 11.0)).is_none());
        assert!(drag.release().is_none());
    }

    #[test]
    fn drag_emits_cumulative_translation_and_end() {
        let mut drag = DragInput::default();
        drag.moved(Point::new(100.0, 100.0));
        drag.press();

        let sample = drag.moved(Point::new(150.0, 70.0));
        assert!(matches!(
            sample,
            Some(TransformMessage::Pan(v)) if v == Vector::new(50.0, -30.0)
        ));
        assert!(matches!(drag.release(), Some(TransformMessage::PanEnded)));
        assert!(drag.release().is_none());
    }

    #[test]
    fn moves_without_press_do_nothing() {
        let mut drag = DragInput::default();
        assert!(drag.moved(Point::new(300.0, 300.0)).is_none());
        assert_eq!(drag.travel(), 0.0);
    }

    #[test]
    fn wheel_pinch_accumulates_from_one() {
        let start = Instant::now();
        let mut wheel = WheelInput::default();
        wheel.scroll(WheelMode::Pinch, ScrollDelta::Lines { x: 0.0, y: 5.0 }, start);
        let sample = wheel.scroll(WheelMode::Pinch, ScrollDelta::Lines { x: 0.0, y: 5.0 }, start);

        match sample {
            Some(TransformMessage::Magnify(value)) => assert!((value - 2.0).abs() < 1e-5),
            other => panic!("expected magnify sample, got {other:?}"),
        }
    }

    #[test]
    fn wheel_mode_switch_is_dropped_while_live() {
        let start = Instant::now();
        let mut wheel = WheelInput::default();
        wheel.scroll(WheelMode::Pinch, ScrollDelta::Lines { x: 0.0, y: 1.0 }, start);
        let sample = wheel.scroll(WheelMode::Rotate, ScrollDelta::Lines { x: 0.0, y: 1.0 }, start);
        assert!(sample.is_none());
    }

    #[test]
    fn wheel_gesture_ends_after_idle() {
        let start = Instant::now();
        let mut wheel = WheelInput::default();
        wheel.scroll(WheelMode::Rotate, ScrollDelta::Lines { x: 0.0, y: 1.0 }, start);

        assert!(wheel.tick(start + Duration::from_millis(100)).is_none());
        assert!(matches!(
            wheel.tick(start + Duration::from_millis(WHEEL_GESTURE_IDLE_MS)),
            Some(TransformMessage::RotateEnded)
        ));
        assert!(!wheel.is_active());
    }
}
