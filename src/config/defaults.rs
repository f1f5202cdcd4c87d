// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Settled zoom bounds and button step
//! - **Long Press**: Info panel hold threshold
//! - **Input**: Pointer slop and wheel gesture timing

use crate::domain::ui::newtypes::{long_press_bounds, scale_bounds};

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale at mount and after a reset (1.0 = native size).
pub const DEFAULT_SCALE: f32 = scale_bounds::DEFAULT;

/// Lower settled scale bound.
pub const MIN_SCALE: f32 = scale_bounds::MIN;

/// Upper settled scale bound.
pub const MAX_SCALE: f32 = scale_bounds::MAX;

/// Scale change per press of the zoom control buttons.
pub const SCALE_STEP: f32 = scale_bounds::STEP;

// ==========================================================================
// Long Press Defaults
// ==========================================================================

/// Default hold duration before the info panel toggles (in seconds).
pub const DEFAULT_LONG_PRESS_SECS: f32 = long_press_bounds::DEFAULT_SECS;

/// Minimum hold duration (in seconds).
pub const MIN_LONG_PRESS_SECS: f32 = long_press_bounds::MIN_SECS;

/// Maximum hold duration (in seconds).
pub const MAX_LONG_PRESS_SECS: f32 = long_press_bounds::MAX_SECS;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Pointer travel, in logical pixels, that turns a press into a drag.
pub const TOUCH_SLOP: f32 = 8.0;

/// Idle time after the last wheel step before a wheel gesture ends (in ms).
pub const WHEEL_GESTURE_IDLE_MS: u64 = 250;

/// Magnification gained per wheel line while pinching with the wheel.
pub const WHEEL_MAGNIFICATION_PER_LINE: f32 = 0.1;

/// Rotation per wheel line while rotating with the wheel (in degrees).
pub const WHEEL_DEGREES_PER_LINE: f32 = 5.0;
