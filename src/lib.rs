//! Whole-word find, navigate and replace over HTML-bearing rich text.
//!
//! Matches are found in the text a browser would render, mapped back to offsets in the HTML
//! source, and highlighted or replaced by splicing `<span>` markers into the markup.

mod commands;
mod state;

pub use commands::*;
pub use state::{AppState, Document};
