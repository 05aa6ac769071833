use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use super::error::FindError;
use super::settings::EngineConfig;
use super::types::{MarkerKind, Match};

/// Class names for the three marker kinds plus the patterns that strip them again.
#[derive(Clone, Debug)]
pub struct Markers {
    current_class: String,
    other_class: String,
    replaced_class: String,
    search_pattern: Regex,
    all_pattern: Regex,
}

fn build_strip_pattern(classes: &[&str]) -> Result<Regex, FindError> {
    let alternatives = classes
        .iter()
        .map(|class| regex::escape(class))
        .collect::<Vec<_>>()
        .join("|");
    let source = format!(r#"<span class="(?:{})">(.*?)</span>"#, alternatives);

    let regex = RegexBuilder::new(&source)
        .dot_matches_new_line(true)
        .build()?;
    Ok(regex)
}

impl Markers {
    pub fn new(config: &EngineConfig) -> Result<Self, FindError> {
        let current_class = config.current_class.clone();
        let other_class = config.other_class.clone();
        let replaced_class = config.replaced_class.clone();

        let search_pattern = build_strip_pattern(&[&current_class, &other_class])?;
        let all_pattern = build_strip_pattern(&[&current_class, &other_class, &replaced_class])?;

        Ok(Self {
            current_class,
            other_class,
            replaced_class,
            search_pattern,
            all_pattern,
        })
    }

    pub fn class_for(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Current => &self.current_class,
            MarkerKind::Other => &self.other_class,
            MarkerKind::Replaced => &self.replaced_class,
        }
    }

    pub fn wrap(&self, kind: MarkerKind, inner: &str) -> String {
        format!(r#"<span class="{}">{}</span>"#, self.class_for(kind), inner)
    }

    /// Removes marker wrappers of the given kinds, keeping their inner text.
    ///
    /// A marker nested inside another one (a search hit inside an earlier replacement) ends the
    /// outer match early, so passes repeat until nothing is left to strip.
    pub fn strip(&self, html: &str, kinds: &[MarkerKind]) -> String {
        let has = |kind: MarkerKind| kinds.contains(&kind);

        let pattern = match (
            has(MarkerKind::Current),
            has(MarkerKind::Other),
            has(MarkerKind::Replaced),
        ) {
            (false, false, false) => return html.to_string(),
            (true, true, false) => self.search_pattern.clone(),
            (true, true, true) => self.all_pattern.clone(),
            _ => {
                let classes: Vec<&str> = kinds.iter().map(|kind| self.class_for(*kind)).collect();
                match build_strip_pattern(&classes) {
                    Ok(pattern) => pattern,
                    Err(error) => {
                        log::warn!("marker strip pattern failed to build: {}", error);
                        return html.to_string();
                    }
                }
            }
        };

        let mut stripped = html.to_string();
        loop {
            let next = match pattern.replace_all(&stripped, "$1") {
                Cow::Borrowed(_) => break,
                Cow::Owned(next) => next,
            };
            stripped = next;
        }

        stripped
    }
}

/// Result of splicing wrappers into a document.
#[derive(Debug)]
pub struct Composition {
    pub html: String,
    /// Where each wrapper starts in the new document, paired with the length of the text it
    /// replaced.
    pub spans: Vec<Match>,
    /// Running length delta after each insertion.
    pub deltas: Vec<isize>,
}

/// Replaces each match of `matches` (HTML offsets into `html`, ascending and non-overlapping)
/// with the text produced by `render`, shifting every later match by the accumulated
/// `len(rendered) - len(matched)`.
pub(super) fn splice_ascending<F>(html: &str, matches: &[Match], mut render: F) -> Composition
where
    F: FnMut(usize, &str) -> String,
{
    let mut output = String::with_capacity(html.len() + matches.len() * 32);
    let mut spans = Vec::with_capacity(matches.len());
    let mut deltas = Vec::with_capacity(matches.len());
    let mut delta: isize = 0;
    let mut consumed = 0usize;

    for (position, item) in matches.iter().enumerate() {
        if item.index < consumed {
            log::warn!(
                "skipping match at {}: overlaps or precedes the previous one",
                item.index
            );
            continue;
        }

        let (Some(gap), Some(matched)) = (
            html.get(consumed..item.index),
            html.get(item.index..item.end()),
        ) else {
            log::warn!("skipping match at {}: outside the document", item.index);
            continue;
        };

        output.push_str(gap);

        let adjusted = (item.index as isize + delta) as usize;
        debug_assert_eq!(adjusted, output.len());

        let rendered = render(position, matched);
        output.push_str(&rendered);
        spans.push(Match::new(adjusted, matched.len()));

        delta += rendered.len() as isize - matched.len() as isize;
        deltas.push(delta);
        consumed = item.end();
    }

    output.push_str(html.get(consumed..).unwrap_or_default());

    Composition {
        html: output,
        spans,
        deltas,
    }
}

/// Wraps every match, marking the one at `current_index` as current and the rest as other.
pub fn compose(
    html: &str,
    matches: &[Match],
    current_index: Option<usize>,
    markers: &Markers,
) -> Composition {
    splice_ascending(html, matches, |position, matched| {
        let kind = if Some(position) == current_index {
            MarkerKind::Current
        } else {
            MarkerKind::Other
        };
        markers.wrap(kind, matched)
    })
}
