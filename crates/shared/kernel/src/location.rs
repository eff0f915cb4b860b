//! Abstraction over the browser location bar and its session history.

/// The page location as seen by the navigator.
///
/// Implementations only store and report query strings; deciding what they mean is
/// the navigator's job.
pub trait Location {
    /// Current query string, including the leading `?`, or empty.
    fn search(&self) -> String;

    /// Serialized origin of the hub page itself (e.g. `https://hub.example`).
    fn origin(&self) -> String;

    /// Adds a new history entry with the given query string.
    fn push(&mut self, search: &str);

    /// Rewrites the current history entry in place.
    fn replace(&mut self, search: &str);
}

/// In-memory session history, used by tests and the command line tooling.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    origin: String,
    entries: Vec<String>,
    index: usize,
}

impl MemoryLocation {
    pub const DEFAULT_ORIGIN: &'static str = "http://localhost";

    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into(), entries: vec![String::new()], index: 0 }
    }

    /// Starts the history at the given query string.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.entries = vec![normalize(&search)];
        self.index = 0;
        self
    }

    /// All entries in order, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Steps one entry back, like the browser back button.
    ///
    /// Returns `false` when already at the oldest entry.
    pub const fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Steps one entry forward. Returns `false` when already at the newest entry.
    pub const fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ORIGIN)
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.entries[self.index].clone()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn push(&mut self, search: &str) {
        // A push discards the forward entries, as in a browser.
        self.entries.truncate(self.index + 1);
        self.entries.push(normalize(search));
        self.index += 1;
    }

    fn replace(&mut self, search: &str) {
        self.entries[self.index] = normalize(search);
    }
}

fn normalize(search: &str) -> String {
    match search {
        "" | "?" => String::new(),
        s if s.starts_with('?') => s.to_owned(),
        s => format!("?{s}"),
    }
}
