// SPDX-License-Identifier: MPL-2.0
//! Info overlay state
//!
//! The info panel shows the live scale and offset. It is hidden by default
//! and toggled by holding the info icon, tracked by [`LongPress`].

use super::transform::TransformState;
use crate::config::TOUCH_SLOP;
use crate::domain::ui::LongPressDuration;
use crate::ui::animation::Curve;
use iced::Point;
use std::time::Instant;

/// Visibility of the info panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoOverlayState {
    pub info_panel_visible: bool,
}

impl InfoOverlayState {
    /// Shows or hides the info panel.
    pub fn toggle_info_panel(&mut self) -> Curve {
        self.info_panel_visible = !self.info_panel_visible;
        Curve::EASE_OUT
    }

    /// Formatted values displayed by the panel.
    #[must_use]
    pub fn readout(state: &TransformState) -> InfoReadout {
        InfoReadout {
            scale: format_number(state.scale),
            offset_x: format_number(state.offset.x),
            offset_y: format_number(state.offset.y),
        }
    }
}

/// Text shown by the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoReadout {
    pub scale: String,
    pub offset_x: String,
    pub offset_y: String,
}

/// Hold detector for the info icon.
///
/// Fires once per press after the pointer has been held for the threshold.
/// Releasing early or moving past the touch slop abandons the press.
#[derive(Debug, Clone)]
pub struct LongPress {
    threshold: LongPressDuration,
    pressed_at: Option<Instant>,
    origin: Point,
    fired: bool,
}

impl LongPress {
    #[must_use]
    pub fn new(threshold: LongPressDuration) -> Self {
        Self {
            threshold,
            pressed_at: None,
            origin: Point::ORIGIN,
            fired: false,
        }
    }

    /// Starts tracking a press at `position`.
    pub fn press(&mut self, at: Instant, position: Point) {
        self.pressed_at = Some(at);
        self.origin = position;
        self.fired = false;
    }

    /// Abandons the press once the pointer travelled past the slop.
    pub fn moved(&mut self, position: Point) {
        if self.pressed_at.is_some() && position.distance(self.origin) > TOUCH_SLOP {
            self.pressed_at = None;
        }
    }

    /// Ends the press.
    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    /// Returns `true` exactly once when the hold reaches the threshold.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pressed_at) = self.pressed_at else {
            return false;
        };
        if self.fired || now.saturating_duration_since(pressed_at) < self.threshold.as_duration() {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether a press is currently being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    #[must_use]
    pub fn threshold(&self) -> LongPressDuration {
        self.threshold
    }
}

impl Default for LongPress {
    fn default() -> Self {
        Self::new(LongPressDuration::default())
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
