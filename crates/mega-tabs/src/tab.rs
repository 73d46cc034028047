//! Tab data structure
//!
//! A tab owns its rendering engine. Closing the tab unloads the engine
//! exactly once; a closed tab refuses every further operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::RenderEngine;
use crate::error::TabError;
use crate::state::TabState;
use crate::title;
use crate::Result;

pub struct Tab<E> {
    /// Unique identifier
    pub id: String,
    /// Display title (already shortened)
    pub title: String,
    /// Current state in the state machine
    pub state: TabState,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    engine: E,
}

/// Serializable view of a tab for the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub url: Option<String>,
    pub title: String,
    pub state: TabState,
    pub is_loading: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<E: RenderEngine> Tab<E> {
    pub fn new(id: String, engine: E) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: title::NEW_TAB_TITLE.to_string(),
            state: TabState::Created,
            created_at: now,
            updated_at: now,
            engine,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: TabState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
        self.updated_at = Utc::now();

        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.is_closed() {
            return Err(TabError::Closed(self.id.clone()));
        }
        Ok(())
    }

    /// Ask the engine to load `url`
    pub fn load(&mut self, url: &str) -> Result<()> {
        self.ensure_open()?;
        if url.trim().is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
        }

        self.transition_to(TabState::Navigating)?;
        self.engine.load(Some(url));
        Ok(())
    }

    /// Current location reported by the engine, if not blank
    pub fn location(&self) -> Option<String> {
        if self.state.is_closed() {
            return None;
        }
        self.engine.location().filter(|loc| !loc.trim().is_empty())
    }

    /// Step back in the engine's history if there is an earlier entry.
    ///
    /// Returns whether a navigation was started.
    pub fn go_back(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.engine.history_index() == 0 {
            return Ok(false);
        }

        self.engine.go(-1);
        Ok(true)
    }

    /// Step forward if the engine has a later entry
    pub fn go_forward(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.engine.history_index() + 1 >= self.engine.history_len() {
            return Ok(false);
        }

        self.engine.go(1);
        Ok(true)
    }

    /// Reload the current page. Returns false when nothing is loaded yet.
    pub fn reload(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.location().is_none() {
            return Ok(false);
        }

        self.transition_to(TabState::Navigating)?;
        self.engine.reload();
        Ok(true)
    }

    /// Engine moved to a new location.
    ///
    /// Returns the location when it is worth recording, i.e. not blank.
    pub fn location_changed(&mut self, location: Option<&str>) -> Result<Option<String>> {
        self.ensure_open()?;
        let Some(location) = location.filter(|loc| !loc.trim().is_empty()) else {
            return Ok(None);
        };

        if self.state != TabState::Navigating {
            self.transition_to(TabState::Navigating)?;
        }
        self.set_title(title::url_title(location));
        Ok(Some(location.to_string()))
    }

    /// Engine reported a page title. Blank titles are ignored.
    pub fn title_changed(&mut self, page_title: Option<&str>) -> Result<()> {
        self.ensure_open()?;
        if let Some(page_title) = page_title.filter(|t| !t.trim().is_empty()) {
            self.set_title(title::page_title(page_title));
        }
        Ok(())
    }

    /// Engine finished the current load.
    ///
    /// The finished page's title replaces the URL fallback when the engine
    /// has a non-blank one.
    pub fn load_finished(&mut self) -> Result<()> {
        self.ensure_open()?;
        match self.state {
            TabState::Navigating => {
                self.transition_to(TabState::Loaded)?;
                if let Some(page_title) = self.engine.title().filter(|t| !t.trim().is_empty()) {
                    self.set_title(title::page_title(&page_title));
                }
                Ok(())
            }
            _ => {
                tracing::debug!(tab_id = %self.id, state = %self.state, "Ignoring stray load completion");
                Ok(())
            }
        }
    }

    /// Release the engine. Only the first call succeeds.
    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.transition_to(TabState::Closed)?;
        self.engine.load(None);
        tracing::debug!(tab_id = %self.id, "Released tab engine");
        Ok(())
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn info(&self) -> TabInfo {
        TabInfo {
            id: self.id.clone(),
            url: self.location(),
            title: self.title.clone(),
            state: self.state,
            is_loading: self.state.is_loading(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<E> std::fmt::Debug for Tab<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
