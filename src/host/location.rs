//! Browser location abstraction.
//!
//! # Responsibilities
//! - Expose the current fragment and pathname to the router
//! - Rewrite the current history entry (default-route fallback)
//! - Push a new fragment (programmatic navigation)
//!
//! # Design Decisions
//! - Host capabilities are injected through a trait instead of global state
//! - `MemoryLocation` keeps a full history stack so replace vs push is observable

/// The host capabilities the router depends on.
pub trait Location {
    /// Path portion of the current URL (e.g. `/app/index.html`).
    fn pathname(&self) -> String;

    /// Current fragment including its leading `#`, or empty when there is none.
    fn hash(&self) -> String;

    /// Rewrite the current history entry to `url` (`path#fragment`) without
    /// adding a back-navigation entry.
    fn replace_state(&mut self, url: &str);

    /// Navigate to `fragment`, adding a history entry.
    fn push_hash(&mut self, fragment: &str);
}

/// In-memory history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    pathname: String,
    /// Fragments without `#`, oldest first.
    entries: Vec<String>,
    cursor: usize,
    replaced: Vec<String>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryLocation {
    /// Create a location at `pathname` with an empty fragment.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            entries: vec![String::new()],
            cursor: 0,
            replaced: Vec::new(),
        }
    }

    /// Create a location whose single history entry is `fragment`.
    pub fn with_hash(pathname: impl Into<String>, fragment: &str) -> Self {
        let mut location = Self::new(pathname);
        location.entries[0] = strip_hash(fragment).to_string();
        location
    }

    /// All history entries (fragments without `#`), oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Every URL passed to [`Location::replace_state`], in call order.
    pub fn replaced_urls(&self) -> &[String] {
        &self.replaced
    }

    /// Move one entry back. Returns false when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns false when already at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Location for MemoryLocation {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn hash(&self) -> String {
        let fragment = &self.entries[self.cursor];
        if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        }
    }

    fn replace_state(&mut self, url: &str) {
        let (path, fragment) = url.split_once('#').unwrap_or((url, ""));
        if !path.is_empty() {
            self.pathname = path.to_string();
        }
        self.entries[self.cursor] = fragment.to_string();
        self.replaced.push(url.to_string());
    }

    fn push_hash(&mut self, fragment: &str) {
        // Navigating drops any forward history
        self.entries.truncate(self.cursor + 1);
        self.entries.push(strip_hash(fragment).to_string());
        self.cursor += 1;
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
