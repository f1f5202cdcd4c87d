// SPDX-License-Identifier: MPL-2.0
//! Page selection errors.

use std::fmt;

/// Failures when addressing pages of the catalogue.
///
/// Unlike scale or offset there is no sensible value to clamp a bad page id
/// to, so these are reported instead of corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested id does not exist in the loaded collection.
    InvalidPageId(u32),

    /// A collection was built without any page.
    EmptyCollection,
}

impl SelectionError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectionError::InvalidPageId(_) => "error-selection-invalid-page",
            SelectionError::EmptyCollection => "error-selection-empty-collection",
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidPageId(id) => write!(f, "Invalid page id: {id}"),
            SelectionError::EmptyCollection => write!(f, "Page collection is empty"),
        }
    }
}

impl std::error::Error for SelectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_id() {
        assert_eq!(
            SelectionError::InvalidPageId(7).to_string(),
            "Invalid page id: 7"
        );
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(
            SelectionError::InvalidPageId(0).i18n_key(),
            "error-selection-invalid-page"
        );
        assert_eq!(
            SelectionError::EmptyCollection.i18n_key(),
            "error-selection-empty-collection"
        );
    }
}
