use super::*;

fn build_find_state(doc: &mut Document) -> FindStatePayload {
    let session = &doc.session;

    FindStatePayload {
        html: doc.buffer.content().to_string(),
        occurrence_count: session.navigator().len(),
        current_index: session.navigator().cursor(),
        stats: session.stats().to_string(),
        has_selection: session.has_selection(),
        can_replace_all: session.can_replace_all(),
        document_version: doc.buffer.version(),
        scroll_target: doc.buffer.take_scroll_request(),
    }
}

fn with_document<T>(
    state: &AppState,
    id: &str,
    action: impl FnOnce(&mut Document) -> T,
) -> Result<T, String> {
    if let Some(mut doc) = state.documents.get_mut(id) {
        Ok(action(&mut *doc))
    } else {
        Err("Document not found".to_string())
    }
}

pub(super) fn open_document_impl(
    state: &AppState,
    html: Option<String>,
) -> Result<DocumentInfo, String> {
    let session = FindSession::new(state.config()).map_err(|e| e.to_string())?;
    let buffer = HtmlBuffer::new(html.unwrap_or_else(|| DEFAULT_TEXT.to_string()));
    let id = Uuid::new_v4().to_string();
    let document_version = buffer.version();

    state
        .documents
        .insert(id.clone(), Document { buffer, session });
    log::debug!("opened document {}", id);

    Ok(DocumentInfo {
        id,
        document_version,
    })
}

pub(super) fn close_document_impl(state: &AppState, id: String) {
    state.documents.remove(&id);
}

pub(super) fn get_document_content_impl(state: &AppState, id: String) -> Result<String, String> {
    with_document(state, &id, |doc| doc.buffer.content().to_string())
}

pub(super) fn set_document_content_impl(
    state: &AppState,
    id: String,
    html: String,
) -> Result<u64, String> {
    with_document(state, &id, |doc| {
        doc.buffer.set_content(html);
        doc.buffer.version()
    })
}

pub(super) fn get_find_state_impl(state: &AppState, id: String) -> Result<FindStatePayload, String> {
    with_document(state, &id, build_find_state)
}

pub(super) fn find_in_document_impl(
    state: &AppState,
    id: String,
    search_word: String,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.set_search_word(search_word);
        session.find_word(buffer);
        build_find_state(doc)
    })
}

pub(super) fn next_match_in_document_impl(
    state: &AppState,
    id: String,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.next_match(buffer);
        build_find_state(doc)
    })
}

pub(super) fn previous_match_in_document_impl(
    state: &AppState,
    id: String,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.previous_match(buffer);
        build_find_state(doc)
    })
}

pub(super) fn jump_to_match_in_document_impl(
    state: &AppState,
    id: String,
    index: usize,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.jump_to_match(buffer, index);
        build_find_state(doc)
    })
}

pub(super) fn replace_current_in_document_impl(
    state: &AppState,
    id: String,
    replace_word: String,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.set_replace_word(replace_word);
        session.replace_current(buffer);
        build_find_state(doc)
    })
}

pub(super) fn replace_all_in_document_impl(
    state: &AppState,
    id: String,
    search_word: String,
    replace_word: String,
) -> Result<ReplaceAllResultPayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.set_search_word(search_word);
        session.set_replace_word(replace_word);
        let replaced_count = session.replace_all(buffer).unwrap_or(0);

        ReplaceAllResultPayload {
            replaced_count,
            state: build_find_state(doc),
        }
    })
}

pub(super) fn clear_highlights_in_document_impl(
    state: &AppState,
    id: String,
) -> Result<FindStatePayload, String> {
    with_document(state, &id, |doc| {
        let Document { buffer, session } = &mut *doc;
        session.clear_highlights(buffer);
        build_find_state(doc)
    })
}
