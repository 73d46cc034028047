//! Mega Browser Tabs
//!
//! A tab is one browsing context: a display title, a small lifecycle state
//! machine and exactly one rendering engine it owns exclusively. The engine
//! itself is supplied by the host toolkit through [`EngineFactory`].

mod engine;
mod error;
mod events;
mod manager;
mod state;
mod tab;
pub mod title;

pub use engine::{EngineFactory, RenderEngine};
pub use error::TabError;
pub use events::{EngineEvent, EngineEvents, EventQueue, TabEvent};
pub use manager::TabManager;
pub use state::TabState;
pub use tab::{Tab, TabInfo};

pub type Result<T> = std::result::Result<T, TabError>;
