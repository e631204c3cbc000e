//! Raw-data paging over a filtered dataset.

use crate::types::{Dataset, TripRecord};

/// A command understood by the raw-data viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Next,
    Previous,
    Exit,
}

impl PageAction {
    /// Accepted prompt keys, including aliases.
    pub const KEYS: [&'static str; 5] = ["next", "prev", "previous", "no", "exit"];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "next" => Some(Self::Next),
            "prev" | "previous" => Some(Self::Previous),
            "no" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    Idle,
    Showing,
    Closed,
}

/// Result of applying a [`PageAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome<'a> {
    /// Records `[start, start + rows.len())`.
    Page { start: usize, rows: &'a [TripRecord] },
    /// `next` past the end; the cursor did not move.
    NoMoreData,
    /// The viewer is closed.
    Finished,
}

/// Cursor over a dataset, yielding fixed-size windows.
///
/// `next` shows the window at the cursor and then advances it; `previous` steps back first and
/// then shows the window, so the cursor always sits one page past what `next` last displayed.
#[derive(Debug)]
pub struct Paginator<'a> {
    dataset: &'a Dataset,
    offset: usize,
    page_size: usize,
    state: PagerState,
}

impl<'a> Paginator<'a> {
    /// A page size of zero is treated as one.
    pub fn new(dataset: &'a Dataset, page_size: usize) -> Self {
        Self {
            dataset,
            offset: 0,
            page_size: page_size.max(1),
            state: PagerState::Idle,
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Enter viewing. Returns `false` (and closes) when there is nothing to show.
    pub fn begin(&mut self) -> bool {
        if self.state == PagerState::Idle {
            self.state = if self.dataset.is_empty() {
                PagerState::Closed
            } else {
                PagerState::Showing
            };
        }
        self.state == PagerState::Showing
    }

    pub fn apply(&mut self, action: PageAction) -> PageOutcome<'a> {
        if self.state != PagerState::Showing {
            return PageOutcome::Finished;
        }

        match action {
            PageAction::Exit => {
                self.state = PagerState::Closed;
                PageOutcome::Finished
            }
            PageAction::Next => {
                if self.offset >= self.dataset.row_count() {
                    return PageOutcome::NoMoreData;
                }
                let start = self.offset;
                self.offset += self.page_size;
                self.page_at(start)
            }
            PageAction::Previous => {
                self.offset = self.offset.saturating_sub(self.page_size);
                self.page_at(self.offset)
            }
        }
    }

    fn page_at(&self, start: usize) -> PageOutcome<'a> {
        let dataset: &'a Dataset = self.dataset;
        PageOutcome::Page {
            start,
            rows: dataset.window(start, self.page_size),
        }
    }
}
