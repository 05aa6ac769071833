use richfind::{
    extract_plain_text, find_in_document, find_whole_words, next_match_in_document,
    open_document, previous_match_in_document, replace_all_in_document,
    replace_current_in_document, AppState, EditorHandle, EngineConfig, FindSession, HtmlBuffer,
    MarkerKind, DEFAULT_TEXT,
};

fn session_for(term: &str, replacement: &str) -> FindSession {
    let mut session = FindSession::new(&EngineConfig::default()).expect("session should build");
    session.set_search_word(term);
    session.set_replace_word(replacement);
    session
}

#[test]
fn scenario_a_should_match_standalone_words_only() {
    let matches = find_whole_words("cat catalog cat", "cat").expect("search should run");

    assert_eq!(matches.len(), 2);
    assert_eq!((matches[0].index, matches[1].index), (0, 12));

    let state = AppState::new();
    let id = open_document(&state, Some("<p>cat catalog cat</p>".to_string()))
        .expect("document should open")
        .id;
    let payload = find_in_document(&state, id, "cat".to_string()).expect("search should run");

    assert_eq!(payload.occurrence_count, 2);
    assert!(payload.html.contains("catalog"));
    assert!(!payload.html.contains("\">catalog"));
}

#[test]
fn scenario_b_should_replace_every_standalone_token_in_sample_text() {
    let state = AppState::new();
    let id = open_document(&state, None).expect("document should open").id;

    let found = find_in_document(&state, id.clone(), "text".to_string())
        .expect("search should run")
        .occurrence_count;
    let result = replace_all_in_document(&state, id, "text".to_string(), "message".to_string())
        .expect("replace all should run");

    assert_eq!(result.replaced_count, found);
    assert_eq!(
        result.state.stats,
        format!("{} occurrences replaced", found)
    );
    assert_eq!(
        result
            .state
            .html
            .matches(r#"<span class="replaced-match">message</span>"#)
            .count(),
        found
    );

    let plain = extract_plain_text(&result.state.html);
    assert!(plain.contains("texting"));
    assert!(plain.contains("texts"));
    assert!(plain.contains("contexts"));
    assert!(find_whole_words(&plain, "text")
        .expect("search should run")
        .is_empty());
    assert_eq!(result.state.occurrence_count, 0);
    assert_eq!(result.state.current_index, None);
}

#[test]
fn scenario_c_should_wrap_cursor_at_both_ends() {
    let state = AppState::new();
    let id = open_document(&state, Some("<p>one x one x one</p>".to_string()))
        .expect("document should open")
        .id;
    find_in_document(&state, id.clone(), "one".to_string()).expect("search should run");

    let last = previous_match_in_document(&state, id.clone()).expect("previous should run");
    assert_eq!(last.current_index, Some(2));

    let first = next_match_in_document(&state, id.clone()).expect("next should run");
    assert_eq!(first.current_index, Some(0));

    let back = previous_match_in_document(&state, id).expect("previous should run");
    assert_eq!(back.current_index, Some(2));
    assert_eq!(back.stats, "3 of 3 matches");
}

#[test]
fn scenario_d_should_clear_selection_after_replacing_last_occurrence() {
    let state = AppState::new();
    let id = open_document(&state, Some("<p>a lone word</p>".to_string()))
        .expect("document should open")
        .id;
    find_in_document(&state, id.clone(), "word".to_string()).expect("search should run");

    let payload = replace_current_in_document(&state, id, "term".to_string())
        .expect("replace should run");

    assert_eq!(payload.current_index, None);
    assert!(!payload.has_selection);
    assert_eq!(payload.stats, "No more matches");
    assert_eq!(
        payload.html,
        r#"<p>a lone <span class="replaced-match">term</span></p>"#
    );
}

#[test]
fn scenario_e_should_leave_document_untouched_for_empty_term() {
    let mut editor = HtmlBuffer::new(DEFAULT_TEXT);
    let mut session = session_for("", "message");

    assert!(!session.find_word(&mut editor));
    assert_eq!(session.replace_all(&mut editor), None);
    assert_eq!(editor.get_content(), DEFAULT_TEXT);
    assert_eq!(editor.version(), 0);
    assert!(session.navigator().is_empty());
}

#[test]
fn highlighting_should_preserve_surrounding_markup() {
    let html = r#"<h1 title="text">Title text</h1> <ul><li><em>text</em> item</li> <li>plain&nbsp;text</li></ul>"#;
    let mut editor = HtmlBuffer::new(html);
    let mut session = session_for("text", "word");

    session.find_word(&mut editor);
    assert_eq!(session.navigator().len(), 3);

    let highlighted = editor.get_content();
    assert!(highlighted
        .starts_with(r#"<h1 title="text">Title <span class="current-match">text</span></h1>"#));
    assert_eq!(
        session.markers().strip(&highlighted, &MarkerKind::SEARCH),
        html
    );

    session.replace_all(&mut editor);
    assert_eq!(
        session.markers().strip(&editor.get_content(), &MarkerKind::ALL),
        r#"<h1 title="text">Title word</h1> <ul><li><em>word</em> item</li> <li>plain&nbsp;word</li></ul>"#
    );
}

#[test]
fn navigating_len_times_should_return_to_start() {
    let mut editor = HtmlBuffer::new("<p>x y x y x y x</p>");
    let mut session = session_for("x", "z");
    session.find_word(&mut editor);
    session.next_match(&mut editor);
    let start = session.navigator().cursor();

    for _ in 0..session.navigator().len() {
        session.next_match(&mut editor);
    }
    assert_eq!(session.navigator().cursor(), start);

    session.next_match(&mut editor);
    session.previous_match(&mut editor);
    assert_eq!(session.navigator().cursor(), start);
}

#[test]
fn replace_current_sequence_should_consume_all_occurrences() {
    let mut editor = HtmlBuffer::new("<p>cat, cat and cat</p>");
    let mut session = session_for("cat", "dog");
    session.find_word(&mut editor);

    let mut replaced = 0;
    while session.has_selection() {
        assert!(session.replace_current(&mut editor));
        replaced += 1;
    }

    assert_eq!(replaced, 3);
    assert_eq!(session.stats(), "No more matches");
    assert_eq!(
        session.markers().strip(&editor.get_content(), &MarkerKind::ALL),
        "<p>dog, dog and dog</p>"
    );
}
