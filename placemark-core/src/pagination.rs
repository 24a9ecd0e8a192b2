use placemark_boundary::Page;

/// Identifies a single fetch started by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out monotonically increasing tickets.
///
/// Only the result of the most recently started
/// fetch may be committed to the view state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn start(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// State of a list-bearing view.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    page: u32,
    navigation: u64,
    fetches: FetchSequence,
    current: Option<Page<T>>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            page: 0,
            navigation: 0,
            fetches: FetchSequence::default(),
            current: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> ListState<T> {
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Counts requested page changes.
    ///
    /// Views fetch whenever this changes, so moving to a page
    /// that failed before fetches it again.
    #[must_use]
    pub const fn navigation(&self) -> u64 {
        self.navigation
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Page<T>> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
        self.navigation += 1;
    }

    /// Used whenever the filter changes.
    pub fn reset_page(&mut self) {
        self.set_page(0);
    }

    /// Drops the held page, used when the search parameters change.
    pub fn clear(&mut self) {
        self.current = None;
        self.error = None;
        self.reset_page();
    }

    /// Moves past the held page.
    ///
    /// Returns `false` if the held page is the last one.
    pub fn next_page(&mut self) -> bool {
        match &self.current {
            Some(page) if !page.last => {
                let next = page.number.saturating_add(1);
                self.set_page(next);
                true
            }
            _ => false,
        }
    }

    /// Moves before the held page.
    ///
    /// Returns `false` if the held page is the first one.
    pub fn previous_page(&mut self) -> bool {
        let previous = match &self.current {
            Some(page) if page.first || page.number == 0 => return false,
            Some(page) => page.number - 1,
            None if self.page == 0 => return false,
            None => self.page - 1,
        };
        self.set_page(previous);
        true
    }

    /// Marks the beginning of a new fetch and supersedes all
    /// fetches that are still in flight.
    pub fn start_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.fetches.start()
    }

    /// Commits the result of a fetch.
    ///
    /// Results of superseded fetches are discarded and `false` is returned.
    /// A failure keeps the previously held page and moves the page index
    /// back to it.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Page<T>, String>) -> bool {
        if !self.fetches.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.current = Some(page);
            }
            Err(msg) => {
                if let Some(page) = &self.current {
                    self.page = page.number;
                }
                self.error = Some(msg);
            }
        }
        true
    }

    /// Records a failure of an operation that is not a fetch, e.g. a delete.
    pub fn fail(&mut self, msg: String) {
        self.error = Some(msg);
    }
}
