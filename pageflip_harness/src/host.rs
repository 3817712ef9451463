// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted page container.

use core::cell::Cell;

use pageflip_core::host::{PageHost, PageSlot};

/// Captured appearance of a numbered page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageShot {
    /// Page number that was captured.
    pub page: u32,
    /// Sequence number of the capture (1 for the first capture).
    pub serial: u32,
}

/// Numbered pages with switchable neighbours.
#[derive(Debug)]
pub struct ScriptedHost {
    pages: [u32; 3],
    has_prev: bool,
    has_next: bool,
    captures: Cell<u32>,
}

impl ScriptedHost {
    /// Creates a host on page `current` with both neighbours present.
    #[must_use]
    pub const fn new(current: u32) -> Self {
        Self {
            pages: [current.saturating_sub(1), current, current.saturating_add(1)],
            has_prev: true,
            has_next: true,
            captures: Cell::new(0),
        }
    }

    /// The first page: nothing before it.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(0).with_prev(false)
    }

    /// Sets whether a previous page exists.
    #[must_use]
    pub const fn with_prev(mut self, has_prev: bool) -> Self {
        self.has_prev = has_prev;
        self
    }

    /// Sets whether a next page exists.
    #[must_use]
    pub const fn with_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Number of snapshots taken so far.
    #[must_use]
    pub fn captures(&self) -> u32 {
        self.captures.get()
    }
}

impl PageHost for ScriptedHost {
    type Page = u32;
    type Snapshot = PageShot;

    fn has_next(&self) -> bool {
        self.has_next
    }

    fn has_prev(&self) -> bool {
        self.has_prev
    }

    fn page(&self, slot: PageSlot) -> Option<&u32> {
        match slot {
            PageSlot::Prev => self.has_prev.then_some(&self.pages[0]),
            PageSlot::Current => Some(&self.pages[1]),
            PageSlot::Next => self.has_next.then_some(&self.pages[2]),
        }
    }

    fn capture(&self, page: &u32) -> PageShot {
        let serial = self.captures.get().saturating_add(1);
        self.captures.set(serial);
        PageShot {
            page: *page,
            serial,
        }
    }
}
