// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks: gesture state, animation hints and styling.

pub mod animation;
pub mod design_tokens;
pub mod state;
pub mod styles;
