// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` is a touch-style page viewer built with the Iced GUI framework.
//!
//! A single page is shown at a time and can be panned, pinched and rotated.
//! Gestures settle back into bounds when they end: magnification is kept
//! within 1x to 5x and rotation always springs back upright. A drawer of
//! thumbnails switches pages and a long press on the info icon reveals the
//! live transform readout.
//!
//! The gesture rules live in [`ui::state`] and carry no rendering concerns,
//! so they can be driven from tests or any other shell.

#![doc(html_root_url = "https://docs.rs/pinch_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
