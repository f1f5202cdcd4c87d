// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer state logic separated from the iced
//! application, following the principle of separation of concerns. Each
//! state group has a single owner and is never mutated by another:
//!
//! - [`transform`]: scale, offset and angle driven by gestures
//! - [`browser`]: selected page and thumbnail drawer
//! - [`overlay`]: info panel visibility and its long-press trigger

pub mod browser;
pub mod gesture;
pub mod overlay;
pub mod transform;

// Re-export commonly used types for convenience
pub use browser::PageBrowserState;
pub use gesture::{GestureConflict, GestureKind, GestureSession};
pub use overlay::{InfoOverlayState, InfoReadout, LongPress};
pub use transform::{TransformController, TransformState};
