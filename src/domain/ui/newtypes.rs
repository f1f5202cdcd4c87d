// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

// =============================================================================
// Scale Bounds
// =============================================================================

/// Settled scale bounds (1× to 5×).
///
/// The live scale may leave this band while a pinch is in progress; these
/// bounds are enforced when a gesture settles.
pub mod scale_bounds {
    /// Native size. Also the lower settled bound.
    pub const MIN: f32 = 1.0;
    /// Upper settled bound, also the double-tap target.
    pub const MAX: f32 = 5.0;
    /// Scale applied when the view is mounted or reset.
    pub const DEFAULT: f32 = 1.0;
    /// Increment applied by the zoom control buttons.
    pub const STEP: f32 = 1.0;
}

/// Returns whether `scale` lies inside the settled band, bounds included.
#[must_use]
pub fn is_within_scale_bounds(scale: f32) -> bool {
    (scale_bounds::MIN..=scale_bounds::MAX).contains(&scale)
}

// =============================================================================
// PageId
// =============================================================================

/// 1-based identifier of a page in a [`PageCollection`](crate::domain::pages::PageCollection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(NonZeroU32);

impl PageId {
    /// The first page of any non-empty collection.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page id, returning `None` for `0`.
    #[must_use]
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Returns the raw id.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based position of this page in its collection.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Long Press Bounds
// =============================================================================

/// Long-press threshold bounds in seconds (0.1 s to 5 s).
pub mod long_press_bounds {
    /// Minimum hold duration.
    pub const MIN_SECS: f32 = 0.1;
    /// Maximum hold duration.
    pub const MAX_SECS: f32 = 5.0;
    /// Default hold duration for toggling the info panel.
    pub const DEFAULT_SECS: f32 = 0.75;
}

// =============================================================================
// LongPressDuration
// =============================================================================

/// Minimum hold duration before a long press fires.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.1–5 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPressDuration(f32);

impl LongPressDuration {
    /// Creates a new threshold, clamping to valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(secs.clamp(long_press_bounds::MIN_SECS, long_press_bounds::MAX_SECS))
    }

    /// Returns the threshold in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the threshold as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for LongPressDuration {
    fn default() -> Self {
        Self(long_press_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Tests
// =============================================================================
