//! Rendering engine contract
//!
//! The shell never renders anything itself. Each tab drives one engine
//! supplied by the host toolkit and learns about page changes through the
//! [`EngineEvents`] sink the engine was created with.

use crate::events::EngineEvents;

pub trait RenderEngine {
    /// Start loading `url`. `None` unloads the page and frees the engine's
    /// resources.
    fn load(&mut self, url: Option<&str>);

    /// Location of the current page, if any
    fn location(&self) -> Option<String>;

    /// Title of the current page, if any
    fn title(&self) -> Option<String>;

    /// Position in the engine's own navigation history, 0 for the first entry
    fn history_index(&self) -> usize;

    /// Number of entries in the engine's navigation history
    fn history_len(&self) -> usize;

    /// Move through the navigation history by `offset` entries
    fn go(&mut self, offset: isize);

    /// Load the current page again
    fn reload(&mut self);
}

/// Creates one engine per tab
pub trait EngineFactory {
    type Engine: RenderEngine;

    /// `events` is bound to the new tab; the engine reports location, title
    /// and load completion through it.
    fn create(&mut self, events: EngineEvents) -> Self::Engine;
}
