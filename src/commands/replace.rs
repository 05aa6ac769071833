use quick_xml::escape::partial_escape;
use regex::RegexBuilder;

use super::error::FindError;
use super::highlight::{splice_ascending, Markers};
use super::offset_map::extract_plain_text;
use super::types::{MarkerKind, Match};

fn escape_replacement(replacement: &str) -> String {
    partial_escape(replacement).into_owned()
}

/// Replaces a current marker whose decoded text is `term` with a replaced marker holding
/// `replacement`.
///
/// Markers are found by their wrapper, not by offset. When several current markers hold the term,
/// the one starting at `anchor` wins, then the first one. If the document changed so that no
/// current marker holds the term any more, nothing is replaced.
pub fn replace_current_marker(
    html: &str,
    term: &str,
    replacement: &str,
    markers: &Markers,
    anchor: Option<usize>,
) -> Result<String, FindError> {
    let source = format!(
        r#"<span class="{}">(.*?)</span>"#,
        regex::escape(markers.class_for(MarkerKind::Current))
    );
    let pattern = RegexBuilder::new(&source)
        .dot_matches_new_line(true)
        .build()?;

    let holding_term: Vec<Match> = pattern
        .captures_iter(html)
        .filter_map(|captures| {
            let wrapper = captures.get(0)?;
            let inner = captures.get(1)?;
            (extract_plain_text(inner.as_str()) == term)
                .then(|| Match::new(wrapper.start(), wrapper.len()))
        })
        .collect();

    let target = anchor
        .and_then(|start| holding_term.iter().find(|item| item.index == start))
        .or_else(|| holding_term.first())
        .copied()
        .ok_or_else(|| FindError::MarkerNotFound {
            term: term.to_string(),
        })?;

    let wrapped = markers.wrap(MarkerKind::Replaced, &escape_replacement(replacement));
    Ok(splice_ascending(html, &[target], |_, _| wrapped.clone()).html)
}

/// Replaces every match (HTML offsets, ascending) with a replaced marker in one pass.
///
/// Returns the new document and the number of substitutions.
pub fn replace_matches(
    html: &str,
    matches: &[Match],
    replacement: &str,
    markers: &Markers,
) -> (String, usize) {
    let wrapped = markers.wrap(MarkerKind::Replaced, &escape_replacement(replacement));
    let composition = splice_ascending(html, matches, |_, _| wrapped.clone());
    let count = composition.spans.len();

    (composition.html, count)
}
