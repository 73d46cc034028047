//! Mega Browser Core
//!
//! Controller of the browser shell. Bridges live tab state coming from the
//! rendering engines to the session store: visited URLs flow into history,
//! open tabs are written out on shutdown and restored on start.

mod browser;
mod config;
mod error;

pub use browser::Browser;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use mega_navigation::InputResolver;
pub use mega_session::{HistorySet, HistoryView, SessionError, SessionStore};
pub use mega_tabs::{
    EngineEvent, EngineEvents, EngineFactory, EventQueue, RenderEngine, Tab, TabError, TabEvent,
    TabInfo, TabManager, TabState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
