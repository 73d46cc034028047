//! Mega Browser Session Store
//!
//! Durable state of the browser shell:
//! - Open tabs: ordered URLs, left to right, restored on the next start
//! - History: every visited URL once, in first-seen order, kept until cleared
//!
//! Both live in plain line-oriented text files. Persistence is best-effort:
//! failures are logged and never reach the user.

mod error;
mod history;
mod lines;
mod store;

pub use error::SessionError;
pub use history::{HistorySet, HistoryView};
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Default file name of the persisted tab list
pub const TABS_FILE: &str = "tabs.txt";
/// Default file name of the persisted history
pub const HISTORY_FILE: &str = "history.txt";
