//! Session Store
//!
//! Owns the on-disk tab list and history file plus the authoritative
//! in-memory history for the current run. Every public operation is
//! best-effort: I/O failures are logged and swallowed so browsing never
//! fails because persistence did. The `try_*` variants expose the errors.

use std::path::{Path, PathBuf};

use crate::history::{HistorySet, HistoryView};
use crate::lines;
use crate::{Result, HISTORY_FILE, TABS_FILE};

pub struct SessionStore {
    /// Ordered tab URLs, one per line
    tabs_path: PathBuf,
    /// First-seen-ordered history URLs, one per line
    history_path: PathBuf,
    /// In-memory history for this run
    history: HistorySet,
    /// Gets the full list after every change
    view: Option<Box<dyn HistoryView>>,
}

impl SessionStore {
    pub fn new(tabs_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            tabs_path: tabs_path.into(),
            history_path: history_path.into(),
            history: HistorySet::new(),
            view: None,
        }
    }

    /// Store using the default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(TABS_FILE), dir.join(HISTORY_FILE))
    }

    pub fn tabs_path(&self) -> &Path {
        &self.tabs_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Install the view that is refreshed on history changes
    pub fn set_view(&mut self, view: Box<dyn HistoryView>) {
        self.view = Some(view);
        self.refresh_view();
    }

    // === Tabs ===

    /// Load persisted tab URLs in tab order. Never fails.
    pub fn load_tabs(&self) -> Vec<String> {
        self.try_load_tabs().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load tabs");
            Vec::new()
        })
    }

    pub fn try_load_tabs(&self) -> Result<Vec<String>> {
        let tabs = lines::read_lines(&self.tabs_path)?;
        tracing::debug!(path = %self.tabs_path.display(), count = tabs.len(), "Loaded tabs");
        Ok(tabs)
    }

    /// Overwrite the tab file with the non-blank URLs, in order. Never fails.
    pub fn save_tabs<'a, I>(&self, urls: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        if let Err(e) = self.try_save_tabs(urls) {
            tracing::error!(error = %e, "Failed to save tabs");
        }
    }

    pub fn try_save_tabs<'a, I>(&self, urls: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let count = lines::write_lines(&self.tabs_path, urls)?;
        tracing::debug!(path = %self.tabs_path.display(), count, "Saved tabs");
        Ok(())
    }

    // === History ===

    /// History URLs in first-seen order
    pub fn history(&self) -> Vec<String> {
        self.history.to_vec()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.history.contains(url)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Replace the in-memory history with the persisted one. Never fails.
    ///
    /// A missing file leaves an empty history. On a read error the
    /// in-memory history is left untouched.
    pub fn load_history(&mut self) {
        if let Err(e) = self.try_load_history() {
            tracing::error!(error = %e, "Failed to load history");
        }
    }

    pub fn try_load_history(&mut self) -> Result<()> {
        let urls = lines::read_lines(&self.history_path)?;
        self.history.replace(urls);
        tracing::debug!(
            path = %self.history_path.display(),
            count = self.history.len(),
            "Loaded history"
        );
        self.refresh_view();
        Ok(())
    }

    /// Record a visited URL. Returns true if it was not known yet.
    pub fn add_to_history(&mut self, url: &str) -> bool {
        let added = self.history.insert(url);
        if added {
            tracing::trace!(url = %url, "Added to history");
            self.refresh_view();
        }
        added
    }

    /// Overwrite the history file with the in-memory set. Never fails.
    pub fn save_history(&self) {
        if let Err(e) = self.try_save_history() {
            tracing::error!(error = %e, "Failed to save history");
        }
    }

    pub fn try_save_history(&self) -> Result<()> {
        let count = lines::write_lines(&self.history_path, self.history.iter())?;
        tracing::debug!(path = %self.history_path.display(), count, "Saved history");
        Ok(())
    }

    /// Forget all history and delete the history file right away. Never fails.
    pub fn clear_history(&mut self) {
        if let Err(e) = self.try_clear_history() {
            tracing::error!(error = %e, "Failed to delete history file");
        }
    }

    /// The in-memory set is cleared even when the file cannot be deleted
    pub fn try_clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.refresh_view();
        lines::remove(&self.history_path)?;
        tracing::info!(path = %self.history_path.display(), "Cleared history");
        Ok(())
    }

    fn refresh_view(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.refresh(&self.history.to_vec());
        }
    }
}
