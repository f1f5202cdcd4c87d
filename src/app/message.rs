// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::state::transform;
use iced::keyboard::Modifiers;
use iced::mouse::ScrollDelta;
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded directly to the transform controller.
    Transform(transform::Message),
    /// Left button pressed over the page.
    PointerPressed,
    /// Cursor moved over the page.
    PointerMoved(Point),
    /// Left button released over the page, or the cursor left it.
    PointerReleased,
    /// Wheel step over the page.
    Wheel(ScrollDelta),
    ModifiersChanged(Modifiers),
    /// Press started on the info icon.
    InfoPressed,
    /// Cursor moved over the info icon.
    InfoMoved(Point),
    /// Press on the info icon ended or left the icon.
    InfoReleased,
    ToggleDrawer,
    /// Thumbnail tapped in the drawer.
    SelectPage(u32),
    /// Periodic tick while a timed input is pending.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g., `fr`).
    pub lang: Option<String>,
    /// Page to show first.
    pub page: Option<u32>,
    /// Settings file to use instead of the per-user one.
    pub config_path: Option<PathBuf>,
    /// Directory holding the page and thumbnail images.
    pub pages_dir: Option<PathBuf>,
}
