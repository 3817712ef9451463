// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract with the page container that owns the content.
//!
//! The turn controller does not own pages. On each gesture it asks a
//! [`PageHost`] whether an adjacent page exists and, once a direction is
//! known, asks it to capture that page as an opaque snapshot. Answers are
//! never cached across gestures because availability changes as the reader
//! moves through the content.

use crate::state::Direction;

/// One of the three pages a reader keeps around the visible one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSlot {
    /// The page before the visible one.
    Prev,
    /// The visible page.
    Current,
    /// The page after the visible one.
    Next,
}

impl PageSlot {
    /// The slot a turn in `direction` reveals, or `None` for an unresolved
    /// direction.
    #[must_use]
    pub const fn revealed_by(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Prev => Some(Self::Prev),
            Direction::Next => Some(Self::Next),
            Direction::None => None,
        }
    }
}

/// The page container driving a turn controller.
///
/// Every method may be called any number of times per gesture and must be
/// cheap enough to call from an input callback.
pub trait PageHost {
    /// A page's content surface.
    type Page: ?Sized;

    /// Captured appearance of a page, held by the controller for one turn.
    type Snapshot;

    /// Whether a page after the current one exists.
    fn has_next(&self) -> bool;

    /// Whether a page before the current one exists.
    fn has_prev(&self) -> bool;

    /// Read access to the page in `slot`, if it is loaded.
    fn page(&self, slot: PageSlot) -> Option<&Self::Page>;

    /// Captures `page` as it currently renders.
    fn capture(&self, page: &Self::Page) -> Self::Snapshot;

    /// Whether a turn in `direction` has a page to land on.
    fn has_page(&self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.has_next(),
            Direction::Prev => self.has_prev(),
            Direction::None => false,
        }
    }

    /// Captures the page a turn in `direction` reveals.
    ///
    /// Returns `None` when the direction is unresolved or the page is not
    /// loaded.
    fn snapshot(&self, direction: Direction) -> Option<Self::Snapshot> {
        let slot = PageSlot::revealed_by(direction)?;
        self.page(slot).map(|page| self.capture(page))
    }
}
