//! In-memory navigation history.

/// A parsed location: pathname, search (with `?`) and hash (with `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    /// Parse a URL path such as `/apps/files?view=grid#top`.
    ///
    /// An empty pathname becomes `/`.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(i) => (&url[..i], &url[i..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Reassemble the location into a URL path.
    pub fn to_url(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Routing snapshot for one request.
///
/// Seeded with the request URL at index 0. Route logic that redirects
/// during render moves the current location.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// Create a history with a single entry.
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial_url)],
            index: 0,
        }
    }

    /// The current location.
    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Navigate to a new entry, dropping any forward entries.
    pub fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(url));
        self.index = self.entries.len() - 1;
    }

    /// Replace the current entry.
    pub fn replace(&mut self, url: &str) {
        self.entries[self.index] = Location::parse(url);
    }

    /// Step back one entry. Returns false at the first entry.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
