// SPDX-License-Identifier: MPL-2.0
//! Page browser state
//!
//! Tracks which page of the catalogue is shown and whether the thumbnail
//! drawer is open.

use crate::domain::error::SelectionError;
use crate::domain::pages::{Page, PageCollection};
use crate::domain::ui::PageId;
use crate::ui::animation::Curve;

/// Render hints produced by browser actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The drawer flipped; animate its slide and the thumbnail fade.
    DrawerToggled { slide: Curve, thumbnails: Curve },
    /// A page was selected; replay its entrance transition.
    Entrance(Curve),
}

/// Selected page and drawer visibility
#[derive(Debug, Clone)]
pub struct PageBrowserState {
    pages: PageCollection,
    selected: PageId,
    drawer_open: bool,
}

impl PageBrowserState {
    /// Starts on the first page with the drawer closed.
    #[must_use]
    pub fn new(pages: PageCollection) -> Self {
        let selected = pages.first().id;
        Self {
            pages,
            selected,
            drawer_open: false,
        }
    }

    /// Sets the initial drawer visibility.
    #[must_use]
    pub fn with_drawer_open(mut self, open: bool) -> Self {
        self.drawer_open = open;
        self
    }

    /// Shows the page with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidPageId`] if the id is not in the
    /// collection; the selection is left unchanged.
    pub fn select_page(&mut self, raw_id: u32) -> Result<Effect, SelectionError> {
        let id = self.pages.resolve(raw_id)?.id;
        self.selected = id;
        log::trace!("selected page {id}");
        Ok(Effect::Entrance(Curve::ENTRANCE))
    }

    /// Opens or closes the thumbnail drawer.
    pub fn toggle_drawer(&mut self) -> Effect {
        self.drawer_open = !self.drawer_open;
        Effect::DrawerToggled {
            slide: Curve::EASE_OUT,
            thumbnails: Curve::THUMBNAIL_FADE,
        }
    }

    #[must_use]
    pub fn selected_page_id(&self) -> PageId {
        self.selected
    }

    /// The page currently displayed.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        self.pages.get(self.selected).unwrap_or_else(|| self.pages.first())
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn pages(&self) -> &PageCollection {
        &self.pages
    }
}

impl Default for PageBrowserState {
    fn default() -> Self {
        Self::new(PageCollection::bundled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> PageBrowserState {
        PageBrowserState::new(PageCollection::from_names(["a", "b", "c"]).expect("non-empty"))
    }

    #[test]
    fn starts_on_first_page_with_drawer_closed() {
        let browser = three_pages();
        assert_eq!(browser.selected_page_id(), PageId::FIRST);
        assert_eq!(browser.current_page().image_name, "a");
        assert!(!browser.is_drawer_open());
    }

    #[test]
    fn select_page_changes_current_page() {
        let mut browser = three_pages();
        let effect = browser.select_page(3).expect("page 3 exists");

        assert_eq!(effect, Effect::Entrance(Curve::ENTRANCE));
        assert_eq!(browser.selected_page_id().get(), 3);
        assert_eq!(browser.current_page().image_name, "c");
    }

    #[test]
    fn invalid_page_is_rejected_and_selection_kept() {
        let mut browser = three_pages();
        browser.select_page(2).expect("page 2 exists");

        assert_eq!(browser.select_page(4), Err(SelectionError::InvalidPageId(4)));
        assert_eq!(browser.select_page(0), Err(SelectionError::InvalidPageId(0)));
        assert_eq!(browser.selected_page_id().get(), 2);
    }

    #[test]
    fn toggle_drawer_flips_visibility() {
        let mut browser = three_pages();
        browser.toggle_drawer();
        assert!(browser.is_drawer_open());
        browser.toggle_drawer();
        assert!(!browser.is_drawer_open());
    }

    #[test]
    fn drawer_can_start_open() {
        let browser = three_pages().with_drawer_open(true);
        assert!(browser.is_drawer_open());
    }
}
