// SPDX-License-Identifier: MPL-2.0
//! Named animation curves.
//!
//! State mutations never animate themselves. Controllers return a [`Curve`]
//! as a hint next to the new value and the renderer decides how to ease
//! from the previous frame to it. Dropping the hint is always correct: the
//! settled value is already in place.

use std::time::Duration;

/// Easing the renderer should use to reach a freshly written value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Critically damped spring with the platform's default response.
    Spring,
    /// Decelerating curve, optionally with a fixed duration.
    EaseOut(Option<Duration>),
    /// Constant-rate interpolation over a fixed duration.
    Linear(Duration),
}

impl Curve {
    /// Fade-in played when a page is shown.
    pub const ENTRANCE: Self = Self::Linear(Duration::from_secs(1));

    /// Fade of the drawer thumbnails when the drawer opens or closes.
    pub const THUMBNAIL_FADE: Self = Self::EaseOut(Some(Duration::from_millis(500)));

    /// Default ease-out without an explicit duration.
    pub const EASE_OUT: Self = Self::EaseOut(None);

    /// Nominal length of the transition, if the curve fixes one.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Curve::Spring => None,
            Curve::EaseOut(duration) => duration,
            Curve::Linear(duration) => Some(duration),
        }
    }
}
