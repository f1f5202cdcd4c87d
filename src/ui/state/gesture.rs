// SPDX-License-Identifier: MPL-2.0
//! Live gesture tracking.
//!
//! The viewer recognizes one continuous gesture at a time. A gesture goes
//! live on its first update and returns to idle on its end event, which
//! covers both natural completion and interruption. Samples of another kind
//! arriving while a gesture is live are refused instead of being mixed into
//! the transform.

use std::fmt;

/// Continuous gestures that drive the image transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Pan,
    Pinch,
    Rotate,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GestureKind::Pan => "pan",
            GestureKind::Pinch => "pinch",
            GestureKind::Rotate => "rotate",
        };
        f.write_str(name)
    }
}

/// A sample refused because another gesture is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConflict {
    /// Kind of the refused sample.
    pub requested: GestureKind,
    /// Gesture that currently owns the transform.
    pub live: GestureKind,
}

impl fmt::Display for GestureConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sample ignored while {} is live", self.requested, self.live)
    }
}

/// Idle / live state machine shared by all transform gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSession {
    live: Option<GestureKind>,
}

impl GestureSession {
    /// Records an update sample, entering the live state if idle.
    ///
    /// # Errors
    ///
    /// Returns a [`GestureConflict`] if a gesture of another kind is live.
    pub fn update(&mut self, kind: GestureKind) -> Result<(), GestureConflict> {
        match self.live {
            Some(live) if live != kind => Err(GestureConflict {
                requested: kind,
                live,
            }),
            _ => {
                self.live = Some(kind);
                Ok(())
            }
        }
    }

    /// Records the terminal event of a gesture and returns to idle.
    ///
    /// Ending while idle is accepted so the end policy still runs for
    /// gestures that finish without a single update.
    ///
    /// # Errors
    ///
    /// Returns a [`GestureConflict`] if a gesture of another kind is live.
    pub fn end(&mut self, kind: GestureKind) -> Result<(), GestureConflict> {
        match self.live {
            Some(live) if live != kind => Err(GestureConflict {
                requested: kind,
                live,
            }),
            _ => {
                self.live = None;
                Ok(())
            }
        }
    }

    /// The gesture currently in progress, if any.
    #[must_use]
    pub fn live(&self) -> Option<GestureKind> {
        self.live
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.live.is_none()
    }
}
