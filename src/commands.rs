use crate::state::{AppState, Document};
use std::path::Path;
use uuid::Uuid;

mod config;
mod constants;
mod editor;
mod error;
mod highlight;
mod matcher;
mod navigator;
mod offset_map;
mod replace;
mod search;
mod search_commands;
mod session;
mod settings;
mod types;

pub use config::build_marker_stylesheet;
pub use constants::DEFAULT_TEXT;
pub use editor::{EditorHandle, HtmlBuffer};
pub use error::FindError;
pub use highlight::{compose, Composition, Markers};
pub use matcher::find_whole_words;
pub use navigator::Navigator;
pub use offset_map::{
    extract_plain_text, map_spans_to_html, map_to_html_offset, HtmlOffsetMapper, TextIndex,
};
pub use replace::{replace_current_marker, replace_matches};
pub use search_commands::*;
pub use session::{search_pass, FindSession, SearchPass};
pub use settings::EngineConfig;
pub use types::{
    DocumentInfo, FindStatePayload, MarkerKind, Match, ReplaceAllResultPayload, ScrollRequest,
};

pub fn load_config(path: &Path) -> Result<EngineConfig, String> {
    config::load_config_impl(path)
}

pub fn save_config(path: &Path, engine_config: EngineConfig) -> Result<EngineConfig, String> {
    config::save_config_impl(path, engine_config)
}

pub fn get_marker_stylesheet(state: &AppState) -> String {
    build_marker_stylesheet(state.config())
}
