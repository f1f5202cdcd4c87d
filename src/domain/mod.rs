// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`SelectionError`](error::SelectionError))
//! - [`pages`]: The page catalogue ([`Page`](pages::Page), [`PageCollection`](pages::PageCollection))
//! - [`ui`]: UI value objects ([`PageId`](ui::newtypes::PageId),
//!   [`LongPressDuration`](ui::newtypes::LongPressDuration), scale bounds)

pub mod error;
pub mod pages;
pub mod ui;
