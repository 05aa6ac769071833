use super::*;

pub fn open_document(state: &AppState, html: Option<String>) -> Result<DocumentInfo, String> {
    search::open_document_impl(state, html)
}

pub fn close_document(state: &AppState, id: String) {
    search::close_document_impl(state, id)
}

pub fn get_document_content(state: &AppState, id: String) -> Result<String, String> {
    search::get_document_content_impl(state, id)
}

pub fn set_document_content(state: &AppState, id: String, html: String) -> Result<u64, String> {
    search::set_document_content_impl(state, id, html)
}

pub fn get_find_state(state: &AppState, id: String) -> Result<FindStatePayload, String> {
    search::get_find_state_impl(state, id)
}

pub fn find_in_document(
    state: &AppState,
    id: String,
    search_word: String,
) -> Result<FindStatePayload, String> {
    search::find_in_document_impl(state, id, search_word)
}

pub fn next_match_in_document(state: &AppState, id: String) -> Result<FindStatePayload, String> {
    search::next_match_in_document_impl(state, id)
}

pub fn previous_match_in_document(
    state: &AppState,
    id: String,
) -> Result<FindStatePayload, String> {
    search::previous_match_in_document_impl(state, id)
}

pub fn jump_to_match_in_document(
    state: &AppState,
    id: String,
    index: usize,
) -> Result<FindStatePayload, String> {
    search::jump_to_match_in_document_impl(state, id, index)
}

pub fn replace_current_in_document(
    state: &AppState,
    id: String,
    replace_word: String,
) -> Result<FindStatePayload, String> {
    search::replace_current_in_document_impl(state, id, replace_word)
}

pub fn replace_all_in_document(
    state: &AppState,
    id: String,
    search_word: String,
    replace_word: String,
) -> Result<ReplaceAllResultPayload, String> {
    search::replace_all_in_document_impl(state, id, search_word, replace_word)
}

pub fn clear_highlights_in_document(
    state: &AppState,
    id: String,
) -> Result<FindStatePayload, String> {
    search::clear_highlights_in_document_impl(state, id)
}
