//! Main browser state container
//!
//! The browser owns the open tabs, the session store and the address bar
//! text. Everything runs on the UI thread: engine notifications are queued
//! by the engines and applied here by [`Browser::pump_events`].

use mega_navigation::InputResolver;
use mega_session::{HistoryView, SessionStore};
use mega_tabs::{EngineEvent, EngineFactory, EventQueue, Tab, TabError, TabManager};
use uuid::Uuid;

use crate::config::Config;
use crate::Result;

/// Main browser instance
pub struct Browser<F: EngineFactory> {
    /// Configuration
    config: Config,
    /// Persisted tabs and the history set
    store: SessionStore,
    /// Open tabs in visual order
    tabs: TabManager<F::Engine>,
    /// Input resolver for address bar
    input_resolver: InputResolver,
    /// Creates one engine per tab
    factory: F,
    /// Engine notifications waiting for the UI thread
    events: EventQueue,
    /// Text shown in the address bar
    address_bar: String,
    history_panel_visible: bool,
}

impl<F: EngineFactory> Browser<F> {
    pub fn new(config: Config, factory: F) -> Self {
        let store = SessionStore::new(config.tabs_path(), config.history_path());
        let input_resolver = InputResolver::with_default_scheme(config.default_scheme.clone());

        Self {
            config,
            store,
            tabs: TabManager::new(),
            input_resolver,
            factory,
            events: EventQueue::new(),
            address_bar: String::new(),
            history_panel_visible: true,
        }
    }

    /// Install the view refreshed whenever history changes
    pub fn set_history_view(&mut self, view: Box<dyn HistoryView>) {
        self.store.set_view(view);
    }

    /// Restore the previous session.
    ///
    /// Loads history, then reopens the saved tabs in order. Without saved
    /// tabs a single tab at the homepage is opened.
    pub fn start(&mut self) -> Result<()> {
        self.store.load_history();

        let saved = self.store.load_tabs();
        if saved.is_empty() {
            self.new_tab()?;
        } else {
            for url in &saved {
                self.open_tab(url)?;
            }
        }

        tracing::info!(
            tabs = self.tabs.len(),
            history = self.store.len(),
            "Browser started"
        );

        Ok(())
    }

    /// Write the session out: open tabs in visual order, then history
    pub fn shutdown(&mut self) {
        let urls = self.tabs.urls();
        self.store.save_tabs(urls.iter().map(String::as_str));
        self.store.save_history();

        tracing::info!(
            tabs = urls.len(),
            history = self.store.len(),
            "Browser session saved"
        );
    }

    // === Tab operations ===

    /// Open a tab at the homepage
    pub fn new_tab(&mut self) -> Result<String> {
        let homepage = self.config.homepage.clone();
        self.open_tab(&homepage)
    }

    /// Open a tab at `url`, select it and return its ID
    pub fn open_tab(&mut self, url: &str) -> Result<String> {
        if url.trim().is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()).into());
        }

        let id = Uuid::new_v4().to_string();
        let engine = self.factory.create(self.events.sink(id.clone()));
        let tab = self.tabs.push(Tab::new(id.clone(), engine));
        tab.load(url)?;

        self.sync_address_bar();
        Ok(id)
    }

    pub fn select_tab(&mut self, tab_id: &str) -> Result<()> {
        self.tabs.activate(tab_id)?;
        self.sync_address_bar();
        Ok(())
    }

    /// Release the tab's engine and remove the tab
    pub fn close_tab(&mut self, tab_id: &str) -> Result<()> {
        self.tabs.close(tab_id)?;
        self.sync_address_bar();
        Ok(())
    }

    pub fn tabs(&self) -> &TabManager<F::Engine> {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<&Tab<F::Engine>> {
        self.tabs.active()
    }

    /// Current locations of all open tabs, left to right
    pub fn tab_urls(&self) -> Vec<String> {
        self.tabs.urls()
    }

    // === Navigation ===

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    /// Text typed by the user, not yet submitted
    pub fn set_address_bar(&mut self, text: impl Into<String>) {
        self.address_bar = text.into();
    }

    /// Load address bar text into the active tab.
    ///
    /// Returns the URL that was loaded, or `None` when the input is empty
    /// or no tab is open.
    pub fn submit_address(&mut self, input: &str) -> Result<Option<String>> {
        let Some(url) = self.input_resolver.resolve(input) else {
            return Ok(None);
        };
        let Some(tab) = self.tabs.active_mut() else {
            tracing::debug!("Address submitted without an open tab");
            return Ok(None);
        };

        tab.load(&url)?;
        Ok(Some(url))
    }

    /// Go back in the active tab if it has an earlier page
    pub fn back(&mut self) -> Result<bool> {
        match self.tabs.active_mut() {
            Some(tab) => Ok(tab.go_back()?),
            None => Ok(false),
        }
    }

    /// Go forward in the active tab if it has a later page
    pub fn forward(&mut self) -> Result<bool> {
        match self.tabs.active_mut() {
            Some(tab) => Ok(tab.go_forward()?),
            None => Ok(false),
        }
    }

    /// Reload the active tab's current page
    pub fn reload(&mut self) -> Result<bool> {
        match self.tabs.active_mut() {
            Some(tab) => Ok(tab.reload()?),
            None => Ok(false),
        }
    }

    fn sync_address_bar(&mut self) {
        self.address_bar = self
            .tabs
            .active()
            .and_then(|tab| tab.location())
            .unwrap_or_default();
    }

    // === History ===

    pub fn history(&self) -> Vec<String> {
        self.store.history()
    }

    /// Forget all history and delete the history file immediately
    pub fn clear_history(&mut self) {
        self.store.clear_history();
    }

    /// Load a history entry into the active tab
    pub fn open_history_entry(&mut self, url: &str) -> Result<bool> {
        if url.trim().is_empty() {
            return Ok(false);
        }
        match self.tabs.active_mut() {
            Some(tab) => {
                tab.load(url)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn history_panel_visible(&self) -> bool {
        self.history_panel_visible
    }

    /// Show or hide the history panel; returns the new visibility
    pub fn toggle_history_panel(&mut self) -> bool {
        self.history_panel_visible = !self.history_panel_visible;
        self.history_panel_visible
    }

    // === Engine events ===

    /// Queue engines report into
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Apply every queued engine event. Returns how many were handled.
    pub fn pump_events(&mut self) -> usize {
        let events = self.events.drain();
        let count = events.len();
        for event in events {
            self.handle_event(&event.tab_id, event.event);
        }
        count
    }

    /// Apply one engine event to its tab.
    ///
    /// Events for tabs that are gone are dropped.
    pub fn handle_event(&mut self, tab_id: &str, event: EngineEvent) {
        let is_active = self.tabs.active_id() == Some(tab_id);
        let tab = match self.tabs.get_mut(tab_id) {
            Ok(tab) => tab,
            Err(e) => {
                tracing::debug!(tab_id = %tab_id, error = %e, "Dropping engine event");
                return;
            }
        };

        let outcome = match event {
            EngineEvent::LocationChanged(location) => {
                match tab.location_changed(location.as_deref()) {
                    Ok(Some(url)) => {
                        self.store.add_to_history(&url);
                        if is_active {
                            self.address_bar = url;
                        }
                        Ok(())
                    }
                    Ok(None) => Ok(()),
                    Err(e) => Err(e),
                }
            }
            EngineEvent::TitleChanged(title) => tab.title_changed(title.as_deref()),
            EngineEvent::LoadFinished => tab.load_finished(),
        };

        if let Err(e) = outcome {
            tracing::debug!(tab_id = %tab_id, error = %e, "Engine event not applied");
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
