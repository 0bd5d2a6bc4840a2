//! Fixed set of pages, one session each, plus the active-page pointer.

use crate::core::Session;
use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of independently tracked pages.
pub const PAGE_COUNT: usize = 5;

/// Zero-based index of a page, guaranteed to be below [`PAGE_COUNT`].
///
/// Callers outside the crate speak in 1-based page numbers; use
/// [`PageIndex::from_number`] to convert.
///
/// # Example
///
/// ```rust
/// use rotation_tracker::store::PageIndex;
///
/// let page = PageIndex::from_number(3).unwrap();
/// assert_eq!(page.index(), 2);
/// assert_eq!(page.number(), 3);
/// assert!(PageIndex::from_number(0).is_err());
/// assert!(PageIndex::from_number(6).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageIndex(usize);

impl PageIndex {
    /// Build from a zero-based index.
    pub fn new(index: usize) -> Result<Self, TrackerError> {
        if index < PAGE_COUNT {
            Ok(Self(index))
        } else {
            Err(TrackerError::PageOutOfRange {
                page: index + 1,
                pages: PAGE_COUNT,
            })
        }
    }

    /// Build from a 1-based page number.
    pub fn from_number(number: usize) -> Result<Self, TrackerError> {
        match number.checked_sub(1) {
            Some(index) => Self::new(index),
            None => Err(TrackerError::PageOutOfRange {
                page: number,
                pages: PAGE_COUNT,
            }),
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Owns every page's session and knows which one is active.
///
/// The store itself hands out only shared references. Replacing or resetting
/// a session is crate-internal so that the engine can snapshot it first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    sessions: [Session; PAGE_COUNT],
    active: PageIndex,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `page` the active page.
    pub fn select(&mut self, page: PageIndex) {
        self.active = page;
    }

    pub fn active_page(&self) -> PageIndex {
        self.active
    }

    pub fn active(&self) -> &Session {
        &self.sessions[self.active.index()]
    }

    pub fn session(&self, page: PageIndex) -> &Session {
        &self.sessions[page.index()]
    }

    /// Iterate all pages in order.
    pub fn pages(&self) -> impl Iterator<Item = (PageIndex, &Session)> {
        self.sessions
            .iter()
            .enumerate()
            .map(|(index, session)| (PageIndex(index), session))
    }

    pub(crate) fn session_mut(&mut self, page: PageIndex) -> &mut Session {
        &mut self.sessions[page.index()]
    }

    /// Install `session` at `page`, returning what was there.
    pub(crate) fn replace(&mut self, page: PageIndex, session: Session) -> Session {
        std::mem::replace(&mut self.sessions[page.index()], session)
    }
}
