//! # List and Pagination State
//!
//! The transaction list is held as an immutable snapshot. Every change goes
//! through [`ListState::apply`], which returns the next snapshot.
//!
//! Loads are numbered. A completion is applied only when its generation is the
//! latest one started, so a slow response can never overwrite the result of a
//! newer request (for example after a double click on "next").

use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::{Page, Transaction};

/// Which page a list request asks for (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Current,
    Previous,
    Next,
}

/// Monotonic load counter value
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    LoadStarted {
        generation: Generation,
    },
    LoadSucceeded {
        generation: Generation,
        request: PageRequest,
        page: Page<Transaction>,
    },
    LoadFailed {
        generation: Generation,
    },
}

/// Snapshot of the list screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub transactions: Vec<Transaction>,
    /// Generation of the most recently started load
    pub generation: Generation,
    pub loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_pages: 0,
            total_elements: 0,
            transactions: Vec::new(),
            generation: 0,
            loading: false,
        }
    }

    /// Request that reloads the page on screen
    pub fn current_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            size: self.page_size,
        }
    }

    /// Page request for a navigation, or `None` when already at that boundary
    pub fn request(&self, navigation: Navigation) -> Option<PageRequest> {
        let page = match navigation {
            Navigation::Current => self.current_page,
            Navigation::Previous if self.current_page > 1 => self.current_page - 1,
            Navigation::Next if self.current_page < self.total_pages => self.current_page + 1,
            Navigation::Previous | Navigation::Next => return None,
        };
        Some(PageRequest {
            page,
            size: self.page_size,
        })
    }

    pub fn apply(&self, event: ListEvent) -> ListState {
        match event {
            ListEvent::LoadStarted { generation } => {
                if generation <= self.generation {
                    return self.clone();
                }
                ListState {
                    generation,
                    loading: true,
                    ..self.clone()
                }
            }
            ListEvent::LoadSucceeded {
                generation,
                request,
                page,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "dropping stale page {} (generation {} < {})",
                        request.page,
                        generation,
                        self.generation
                    );
                    return self.clone();
                }
                ListState {
                    current_page: request.page,
                    page_size: request.size,
                    total_pages: page.total_pages,
                    total_elements: page.total_elements,
                    transactions: page.content,
                    generation,
                    loading: false,
                }
            }
            ListEvent::LoadFailed { generation } => {
                if generation != self.generation {
                    return self.clone();
                }
                ListState {
                    loading: false,
                    ..self.clone()
                }
            }
        }
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(self.current_page, self.total_pages)
    }
}

/// What the pagination controls show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationView {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            label: format!("第 {} 页，共 {} 页", current_page, total_pages),
            prev_disabled: current_page <= 1,
            next_disabled: current_page >= total_pages,
        }
    }
}
