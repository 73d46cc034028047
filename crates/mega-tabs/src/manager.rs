//! Tab Manager
//!
//! Holds the open tabs in visual left-to-right order and tracks which one
//! is selected.

use crate::engine::RenderEngine;
use crate::error::TabError;
use crate::tab::{Tab, TabInfo};
use crate::Result;

pub struct TabManager<E> {
    /// Open tabs, left to right
    tabs: Vec<Tab<E>>,
    /// Currently selected tab ID
    active_tab_id: Option<String>,
}

impl<E: RenderEngine> TabManager<E> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    /// Append a tab at the right end and select it
    pub fn push(&mut self, tab: Tab<E>) -> &mut Tab<E> {
        tracing::info!(tab_id = %tab.id, position = self.tabs.len(), "Opened tab");
        self.active_tab_id = Some(tab.id.clone());
        self.tabs.push(tab);
        let last = self.tabs.len() - 1;
        &mut self.tabs[last]
    }

    fn position(&self, tab_id: &str) -> Result<usize> {
        self.tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    pub fn get(&self, tab_id: &str) -> Result<&Tab<E>> {
        let index = self.position(tab_id)?;
        Ok(&self.tabs[index])
    }

    pub fn get_mut(&mut self, tab_id: &str) -> Result<&mut Tab<E>> {
        let index = self.position(tab_id)?;
        Ok(&mut self.tabs[index])
    }

    /// Select a tab
    pub fn activate(&mut self, tab_id: &str) -> Result<&Tab<E>> {
        let index = self.position(tab_id)?;
        self.active_tab_id = Some(tab_id.to_string());
        Ok(&self.tabs[index])
    }

    pub fn active(&self) -> Option<&Tab<E>> {
        let id = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab<E>> {
        let id = self.active_tab_id.clone()?;
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Release a tab's engine and remove it.
    ///
    /// If it was selected, the tab that slides into its place is selected,
    /// or the new rightmost tab when it was last.
    pub fn close(&mut self, tab_id: &str) -> Result<Tab<E>> {
        let index = self.position(tab_id)?;
        self.tabs[index].close()?;
        let tab = self.tabs.remove(index);

        if self.active_tab_id.as_deref() == Some(tab_id) {
            let next = index.min(self.tabs.len().saturating_sub(1));
            self.active_tab_id = self.tabs.get(next).map(|t| t.id.clone());
        }

        tracing::info!(tab_id = %tab_id, remaining = self.tabs.len(), "Closed tab");
        Ok(tab)
    }

    /// Current locations of all tabs in visual order, skipping tabs
    /// without one
    pub fn urls(&self) -> Vec<String> {
        self.tabs.iter().filter_map(|t| t.location()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab<E>> {
        self.tabs.iter()
    }

    pub fn infos(&self) -> Vec<TabInfo> {
        self.tabs.iter().map(Tab::info).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl<E: RenderEngine> Default for TabManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::tests::StubEngine;
    use crate::TabState;

    fn open(manager: &mut TabManager<StubEngine>, id: &str, url: &str) {
        let tab = manager.push(Tab::new(id.to_string(), StubEngine::default()));
        tab.load(url).unwrap();
    }

    #[test]
    fn test_tab_manager() {
        let mut manager = TabManager::new();
        open(&mut manager, "tab-1", "https://a.example");
        open(&mut manager, "tab-2", "https://b.example");

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.active_id(), Some("tab-2"));
        assert_eq!(manager.urls(), vec!["https://a.example", "https://b.example"]);

        manager.activate("tab-1").unwrap();
        assert_eq!(manager.active().unwrap().id, "tab-1");

        assert!(matches!(
            manager.activate("missing"),
            Err(TabError::NotFound(_))
        ));
    }

    #[test]
    fn test_urls_skip_tabs_without_location() {
        let mut manager = TabManager::new();
        open(&mut manager, "tab-1", "https://a.example");
        manager.push(Tab::new("tab-2".to_string(), StubEngine::default()));
        open(&mut manager, "tab-3", "https://c.example");

        assert_eq!(manager.urls(), vec!["https://a.example", "https://c.example"]);
    }

    #[test]
    fn test_close_selects_neighbour() {
        let mut manager = TabManager::new();
        open(&mut manager, "tab-1", "https://a.example");
        open(&mut manager, "tab-2", "https://b.example");
        open(&mut manager, "tab-3", "https://c.example");

        manager.activate("tab-2").unwrap();
        let closed = manager.close("tab-2").unwrap();
        assert_eq!(closed.state, TabState::Closed);
        assert_eq!(closed.engine().loads.last(), Some(&None));
        assert_eq!(manager.active_id(), Some("tab-3"));

        manager.close("tab-3").unwrap();
        assert_eq!(manager.active_id(), Some("tab-1"));

        manager.close("tab-1").unwrap();
        assert!(manager.active_id().is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_infos_serialize() {
        let mut manager = TabManager::new();
        open(&mut manager, "tab-1", "https://a.example");

        let infos = manager.infos();
        assert_eq!(infos[0].url.as_deref(), Some("https://a.example"));
        assert!(infos[0].is_loading);

        let json = serde_json::to_value(&infos[0]).unwrap();
        assert_eq!(json["state"], "navigating");
        assert_eq!(json["title"], "New Tab");
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_close_inactive_keeps_selection() {
        let mut manager = TabManager::new();
        open(&mut manager, "tab-1", "https://a.example");
        open(&mut manager, "tab-2", "https://b.example");

        manager.close("tab-1").unwrap();
        assert_eq!(manager.active_id(), Some("tab-2"));
        assert!(manager.close("tab-1").is_err());
    }
}
