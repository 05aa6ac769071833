use std::time::Duration;

use super::constants::{STATUS_NO_MATCHES, STATUS_NO_MORE_MATCHES};
use super::editor::EditorHandle;
use super::error::FindError;
use super::highlight::{compose, Markers};
use super::matcher::{find_whole_words, is_blank_term};
use super::navigator::Navigator;
use super::offset_map::{map_spans_to_html, TextIndex};
use super::replace::{replace_current_marker, replace_matches};
use super::settings::EngineConfig;
use super::types::{MarkerKind, Match};

/// A snapshot with search markers removed plus the whole-word matches in it, in HTML offsets.
#[derive(Debug)]
pub struct SearchPass {
    pub clean_html: String,
    pub matches: Vec<Match>,
}

/// Strips current/other markers from `html` and locates every whole-word match of `term`.
pub fn search_pass(html: &str, term: &str, markers: &Markers) -> Result<SearchPass, FindError> {
    let clean_html = markers.strip(html, &MarkerKind::SEARCH);
    let index = TextIndex::build(&clean_html);
    let plain_matches = find_whole_words(index.plain_text(), term)?;
    let matches = map_spans_to_html(&clean_html, &index, &plain_matches);

    Ok(SearchPass {
        clean_html,
        matches,
    })
}

pub(super) fn replaced_status(count: usize) -> String {
    format!(
        "{} occurrence{} replaced",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Find/replace state for one editor: the two input terms, the occurrence cursor and the
/// status line.
#[derive(Debug)]
pub struct FindSession {
    search_word: String,
    replace_word: String,
    searched_word: Option<String>,
    navigator: Navigator,
    stats: String,
    markers: Markers,
    scroll_into_view: bool,
    scroll_delay: Duration,
}

impl FindSession {
    pub fn new(config: &EngineConfig) -> Result<Self, FindError> {
        Ok(Self {
            search_word: String::new(),
            replace_word: String::new(),
            searched_word: None,
            navigator: Navigator::new(),
            stats: String::new(),
            markers: Markers::new(config)?,
            scroll_into_view: config.scroll_into_view,
            scroll_delay: Duration::from_millis(config.scroll_delay_ms),
        })
    }

    pub fn search_word(&self) -> &str {
        &self.search_word
    }

    pub fn set_search_word(&mut self, value: impl Into<String>) {
        self.search_word = value.into();
    }

    pub fn replace_word(&self) -> &str {
        &self.replace_word
    }

    pub fn set_replace_word(&mut self, value: impl Into<String>) {
        self.replace_word = value.into();
    }

    pub fn stats(&self) -> &str {
        &self.stats
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn has_selection(&self) -> bool {
        self.navigator.cursor().is_some()
    }

    pub fn can_replace_all(&self) -> bool {
        !self.navigator.is_empty()
    }

    fn update_stats(&mut self) {
        self.stats = match self.navigator.cursor() {
            Some(index) => format!("{} of {} matches", index + 1, self.navigator.len()),
            None => STATUS_NO_MATCHES.to_string(),
        };
    }

    fn run_search<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> Result<(), FindError> {
        let term = self.search_word.clone();
        if is_blank_term(&term) {
            return Err(FindError::EmptySearchTerm);
        }

        let content = editor.get_content();
        let pass = search_pass(&content, &term, &self.markers)?;

        if self.searched_word.as_deref() != Some(term.as_str()) {
            self.navigator.reset();
        }
        self.searched_word = Some(term.clone());

        if pass.matches.is_empty() {
            self.navigator.on_search(Vec::new());
            editor.set_content(pass.clean_html);
            self.stats = STATUS_NO_MATCHES.to_string();
            log::debug!("search for '{}' found nothing", term);
            return Ok(());
        }

        let cursor = self.navigator.cursor_for(pass.matches.len());
        let composition = compose(&pass.clean_html, &pass.matches, cursor, &self.markers);
        self.navigator.on_search(composition.spans);
        editor.set_content(composition.html);
        self.update_stats();

        log::debug!(
            "search for '{}' found {} occurrences, current {:?}",
            term,
            self.navigator.len(),
            self.navigator.cursor()
        );

        if self.scroll_into_view {
            editor.scroll_into_view(
                self.markers.class_for(MarkerKind::Current),
                self.scroll_delay,
            );
        }

        Ok(())
    }

    fn skip<T>(&self, operation: &str, result: Result<T, FindError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                log::debug!("{} skipped: {}", operation, error);
                None
            }
        }
    }

    /// Runs a fresh search pass and re-renders the markers. Returns false when the search term
    /// is blank and nothing was touched.
    pub fn find_word<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> bool {
        let result = self.run_search(editor);
        self.skip("find", result).is_some()
    }

    pub fn next_match<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> bool {
        if !self.navigator.next() {
            return false;
        }
        self.find_word(editor)
    }

    pub fn previous_match<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> bool {
        if !self.navigator.previous() {
            return false;
        }
        self.find_word(editor)
    }

    pub fn jump_to_match<E: EditorHandle + ?Sized>(&mut self, editor: &mut E, index: usize) -> bool {
        if !self.navigator.jump_to(index) {
            return false;
        }
        self.find_word(editor)
    }

    fn run_replace_current<E: EditorHandle + ?Sized>(
        &mut self,
        editor: &mut E,
    ) -> Result<(), FindError> {
        if is_blank_term(&self.search_word) {
            return Err(FindError::EmptySearchTerm);
        }
        if self.replace_word.is_empty() {
            return Err(FindError::EmptyReplacement);
        }
        if self.navigator.cursor().is_none() {
            return Err(FindError::NoSelection);
        }

        let content = editor.get_content();
        let anchor = self.navigator.current().map(|item| item.index);
        let replaced = replace_current_marker(
            &content,
            &self.search_word,
            &self.replace_word,
            &self.markers,
            anchor,
        )?;
        editor.set_content(replaced);

        let removed = self.navigator.remove_current();
        log::debug!(
            "replaced current occurrence {:?}, {} left",
            removed,
            self.navigator.len()
        );

        if self.navigator.is_empty() {
            self.stats = STATUS_NO_MORE_MATCHES.to_string();
            return Ok(());
        }

        self.run_search(editor)
    }

    /// Replaces the occurrence under the cursor and re-anchors the rest.
    pub fn replace_current<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> bool {
        let result = self.run_replace_current(editor);
        self.skip("replace current", result).is_some()
    }

    fn run_replace_all<E: EditorHandle + ?Sized>(
        &mut self,
        editor: &mut E,
    ) -> Result<usize, FindError> {
        if is_blank_term(&self.search_word) {
            return Err(FindError::EmptySearchTerm);
        }
        if self.replace_word.is_empty() {
            return Err(FindError::EmptyReplacement);
        }

        let content = editor.get_content();
        let pass = search_pass(&content, &self.search_word, &self.markers)?;
        let (html, count) =
            replace_matches(&pass.clean_html, &pass.matches, &self.replace_word, &self.markers);

        editor.set_content(html);
        self.navigator.clear();
        self.searched_word = None;
        self.stats = replaced_status(count);
        log::debug!("replaced {} occurrences of '{}'", count, self.search_word);

        Ok(count)
    }

    /// Replaces every whole-word occurrence. `None` means the call was a no-op.
    pub fn replace_all<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) -> Option<usize> {
        let result = self.run_replace_all(editor);
        self.skip("replace all", result)
    }

    /// Removes every marker, including replaced ones, and forgets the occurrence list.
    pub fn clear_highlights<E: EditorHandle + ?Sized>(&mut self, editor: &mut E) {
        let content = editor.get_content();
        editor.set_content(self.markers.strip(&content, &MarkerKind::ALL));
        self.navigator.clear();
        self.searched_word = None;
        self.stats.clear();
    }
}
