// SPDX-License-Identifier: MPL-2.0
//! Page catalogue.
//!
//! A viewer session shows one page at a time out of a fixed, ordered
//! collection. Pages are addressed by a 1-based [`PageId`] that matches
//! their position in the collection.

use crate::domain::error::SelectionError;
use crate::domain::ui::PageId;

/// Prefix prepended to an image name to find its drawer thumbnail.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Image names shipped with the application, in display order.
pub const BUNDLED_IMAGES: &[&str] = &["magazine-front-cover", "magazine-back-cover"];

/// A single page of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub image_name: String,
}

impl Page {
    /// Name of the thumbnail asset shown in the drawer.
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Ordered, immutable set of pages with contiguous ids starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCollection {
    pages: Vec<Page>,
}

impl PageCollection {
    /// Builds a collection, numbering the images from 1 in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EmptyCollection`] when `names` yields nothing.
    pub fn from_names<I, S>(names: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages: Vec<Page> = names
            .into_iter()
            .zip(1u32..)
            .filter_map(|(name, id)| {
                PageId::new(id).map(|id| Page {
                    id,
                    image_name: name.into(),
                })
            })
            .collect();

        if pages.is_empty() {
            return Err(SelectionError::EmptyCollection);
        }
        Ok(Self { pages })
    }

    /// The hardcoded catalogue bundled with the application.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            pages: BUNDLED_IMAGES
                .iter()
                .zip(1u32..)
                .filter_map(|(name, id)| {
                    PageId::new(id).map(|id| Page {
                        id,
                        image_name: (*name).to_string(),
                    })
                })
                .collect(),
        }
    }

    /// Looks up a page by id.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.index())
    }

    /// Looks up a page from a raw, possibly invalid id.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidPageId`] when no page has this id.
    pub fn resolve(&self, raw_id: u32) -> Result<&Page, SelectionError> {
        PageId::new(raw_id)
            .and_then(|id| self.get(id))
            .ok_or(SelectionError::InvalidPageId(raw_id))
    }

    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        id.index() < self.pages.len()
    }

    /// First page. Collections are never empty.
    #[must_use]
    pub fn first(&self) -> &Page {
        &self.pages[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for PageCollection {
    fn default() -> Self {
        Self::bundled()
    }
}
