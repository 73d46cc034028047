//! Mega Browser Navigation
//!
//! Address bar input resolution: text typed by the user becomes the URL the
//! active tab loads. Input without a scheme gets the default secure one.

mod input;

pub use input::{InputResolver, DEFAULT_SCHEME};
