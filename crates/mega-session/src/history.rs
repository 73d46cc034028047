//! History set
//!
//! Every URL appears at most once and entries keep the order in which they
//! were first seen. Nothing is ever reordered or evicted; the only way out
//! is `clear`.

use linked_hash_map::LinkedHashMap;

/// Receives the full history whenever it changes
pub trait HistoryView {
    fn refresh(&mut self, entries: &[String]);
}

#[derive(Debug, Clone, Default)]
pub struct HistorySet {
    /// URLs in first-seen order
    entries: LinkedHashMap<String, ()>,
}

impl HistorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a URL if it is not already present.
    ///
    /// Surrounding whitespace is stripped so the set holds exactly what the
    /// history file will. Blank URLs are ignored. Returns true if the set
    /// changed.
    pub fn insert(&mut self, url: &str) -> bool {
        let url = url.trim();
        // Re-inserting an existing key would move it to the back
        if url.is_empty() || self.entries.contains_key(url) {
            return false;
        }

        self.entries.insert(url.to_string(), ());
        true
    }

    /// Replace the whole set, keeping the first occurrence of duplicates
    pub fn replace<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        for url in urls {
            self.insert(url.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
