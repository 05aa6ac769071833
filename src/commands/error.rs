use thiserror::Error;

/// Failures inside the find/replace engine.
///
/// None of these reach the host as an error value: the session turns each one into a no-op
/// and leaves the status line as it was.
#[derive(Debug, Error)]
pub enum FindError {
    #[error("search term is empty")]
    EmptySearchTerm,

    #[error("replacement text is empty")]
    EmptyReplacement,

    #[error("no occurrence is selected")]
    NoSelection,

    /// The current marker holding the search word is no longer in the document.
    #[error("current marker for '{term}' not found in document")]
    MarkerNotFound { term: String },

    #[error("plain-text offset {offset} is beyond the document text (length {plain_len})")]
    UnmappedOffset { offset: usize, plain_len: usize },

    #[error("text at html offset {offset} is split by markup")]
    CrossesMarkup { offset: usize },

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl FindError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FindError::EmptySearchTerm | FindError::EmptyReplacement | FindError::NoSelection
        )
    }
}
