use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::FindError;
use super::types::Match;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum LeafKind {
    /// Raw text copied verbatim from the source; plain and raw bytes line up one to one.
    Literal,
    /// A character or entity reference such as `&amp;`; its decoded text stands for the whole
    /// raw span.
    Reference,
}

#[derive(Debug)]
pub(super) struct TextLeaf {
    pub(super) kind: LeafKind,
    pub(super) text: String,
    pub(super) plain_start: usize,
    pub(super) raw_start: usize,
    pub(super) raw_end: usize,
}

impl TextLeaf {
    fn plain_end(&self) -> usize {
        self.plain_start + self.text.len()
    }

    fn raw_offset_of(&self, residual: usize) -> usize {
        match self.kind {
            LeafKind::Literal => self.raw_start + residual,
            LeafKind::Reference => self.raw_start,
        }
    }

    fn raw_end_of_char_at(&self, residual: usize) -> usize {
        match self.kind {
            LeafKind::Literal => {
                let width = self
                    .text
                    .get(residual..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(0, char::len_utf8);
                self.raw_start + residual + width
            }
            LeafKind::Reference => self.raw_end,
        }
    }
}

fn decode_reference(raw: &str) -> String {
    let name = raw.trim_start_matches('&').trim_end_matches(';');

    if let Some(numeric) = name.strip_prefix('#') {
        let parsed = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => numeric.parse::<u32>().ok(),
        };

        return parsed
            .and_then(char::from_u32)
            .map(|ch| ch.to_string())
            .unwrap_or_else(|| raw.to_string());
    }

    resolve_html5_entity(name)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

fn lenient_reader(source: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    reader
}

/// Length of a run at the start of `rest` that HTML reads as text but an XML reader does not:
/// a `<` that cannot open a tag, or a `&` that is not closed by `;`.
fn stray_text_len(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();

    match chars.next()? {
        '<' => match chars.next() {
            Some(ch) if ch.is_ascii_alphabetic() || matches!(ch, '/' | '!' | '?') => None,
            _ => Some(1),
        },
        '&' => {
            let name = &rest[1..];
            let name_len = name
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '#'))
                .unwrap_or(name.len());

            if name_len > 0 && name[name_len..].starts_with(';') {
                None
            } else {
                Some(1)
            }
        }
        _ => None,
    }
}

/// The text-bearing leaves of an HTML snapshot, in document order, with their positions in both
/// the extracted plain text and the HTML source.
#[derive(Debug)]
pub struct TextIndex {
    leaves: Vec<TextLeaf>,
    plain_text: String,
}

impl TextIndex {
    pub fn build(html: &str) -> Self {
        let mut index = Self {
            leaves: Vec::new(),
            plain_text: String::new(),
        };
        let mut base = 0usize;
        let mut reader = lenient_reader(html);

        loop {
            let raw_start = base + reader.buffer_position() as usize;
            let Some(rest) = html.get(raw_start..) else {
                break;
            };

            if let Some(len) = stray_text_len(rest) {
                index.push_leaf(LeafKind::Literal, &rest[..len], raw_start, raw_start + len);
                base = raw_start + len;
                reader = lenient_reader(html.get(base..).unwrap_or_default());
                continue;
            }

            let event = match reader.read_event() {
                Ok(event) => event,
                Err(error) => {
                    let resume = rest
                        .char_indices()
                        .skip(1)
                        .find(|(_, ch)| *ch == '<')
                        .map_or(html.len(), |(position, _)| raw_start + position);
                    log::warn!(
                        "html tokenizer error at byte {}: {}; reading up to byte {} as text",
                        raw_start,
                        error,
                        resume
                    );

                    let skipped = html.get(raw_start..resume).unwrap_or_default();
                    index.push_leaf(LeafKind::Literal, skipped, raw_start, resume);
                    base = resume;
                    reader = lenient_reader(html.get(base..).unwrap_or_default());
                    continue;
                }
            };
            let raw_end = base + reader.buffer_position() as usize;

            match event {
                Event::Eof => break,
                Event::Text(_) => {
                    if let Some(raw) = html.get(raw_start..raw_end) {
                        index.push_leaf(LeafKind::Literal, raw, raw_start, raw_end);
                    }
                }
                Event::GeneralRef(_) => {
                    if let Some(raw) = html.get(raw_start..raw_end) {
                        index.push_leaf(
                            LeafKind::Reference,
                            &decode_reference(raw),
                            raw_start,
                            raw_end,
                        );
                    }
                }
                _ => {}
            }
        }

        index
    }

    fn push_leaf(&mut self, kind: LeafKind, text: &str, raw_start: usize, raw_end: usize) {
        if text.is_empty() {
            return;
        }

        let plain_start = self.plain_text.len();
        self.plain_text.push_str(text);
        self.leaves.push(TextLeaf {
            kind,
            text: text.to_string(),
            plain_start,
            raw_start,
            raw_end,
        });
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn mapper(&self) -> HtmlOffsetMapper<'_> {
        HtmlOffsetMapper {
            index: self,
            next_leaf: 0,
        }
    }
}

/// Maps plain-text offsets to HTML offsets with a forward-only leaf pointer.
///
/// Offsets fed in ascending order cost one pass over the leaves in total. A smaller offset than
/// the previous one rewinds the pointer with a binary search.
pub struct HtmlOffsetMapper<'a> {
    index: &'a TextIndex,
    next_leaf: usize,
}

impl<'a> HtmlOffsetMapper<'a> {
    fn unmapped(&self, offset: usize) -> FindError {
        FindError::UnmappedOffset {
            offset,
            plain_len: self.index.plain_text.len(),
        }
    }

    fn seek(&mut self, plain_offset: usize) -> Result<(usize, &'a TextLeaf), FindError> {
        let index: &'a TextIndex = self.index;
        let leaves = &index.leaves;

        if let Some(leaf) = leaves.get(self.next_leaf) {
            if plain_offset < leaf.plain_start {
                self.next_leaf = leaves.partition_point(|item| item.plain_end() <= plain_offset);
            }
        }

        while let Some(leaf) = leaves.get(self.next_leaf) {
            if plain_offset < leaf.plain_end() {
                return Ok((self.next_leaf, leaf));
            }
            self.next_leaf += 1;
        }

        Err(self.unmapped(plain_offset))
    }

    fn locate_start(&mut self, plain_offset: usize) -> Result<(usize, usize), FindError> {
        let (position, leaf) = self.seek(plain_offset)?;
        Ok((position, leaf.raw_offset_of(plain_offset - leaf.plain_start)))
    }

    fn locate_end(&mut self, plain_end: usize) -> Result<(usize, usize), FindError> {
        let last_char_start = self
            .index
            .plain_text
            .get(..plain_end)
            .and_then(|head| head.char_indices().next_back())
            .map(|(position, _)| position)
            .ok_or_else(|| self.unmapped(plain_end))?;

        let (position, leaf) = self.seek(last_char_start)?;
        Ok((
            position,
            leaf.raw_end_of_char_at(last_char_start - leaf.plain_start),
        ))
    }

    /// HTML offset where the character at `plain_offset` begins.
    pub fn map_start(&mut self, plain_offset: usize) -> Result<usize, FindError> {
        self.locate_start(plain_offset).map(|(_, offset)| offset)
    }

    /// HTML offset just past the character that ends at `plain_end`.
    pub fn map_end(&mut self, plain_end: usize) -> Result<usize, FindError> {
        self.locate_end(plain_end).map(|(_, offset)| offset)
    }

    /// Translates a plain-text span to the HTML span covering the same characters.
    ///
    /// The span must lie in one unbroken run of text: leaves separated by a tag or comment are
    /// rejected with [`FindError::CrossesMarkup`].
    pub fn map_span(&mut self, span: Match) -> Result<Match, FindError> {
        if span.length == 0 || span.end() > self.index.plain_text.len() {
            return Err(self.unmapped(span.end()));
        }

        let (first_leaf, start) = self.locate_start(span.index)?;
        let (last_leaf, end) = self.locate_end(span.end())?;

        let contiguous = self
            .index
            .leaves
            .get(first_leaf..=last_leaf)
            .is_some_and(|run| run.windows(2).all(|pair| pair[0].raw_end == pair[1].raw_start));
        if !contiguous {
            return Err(FindError::CrossesMarkup { offset: start });
        }

        Ok(Match::new(start, end.saturating_sub(start)))
    }
}

pub fn extract_plain_text(html: &str) -> String {
    TextIndex::build(html).plain_text
}

/// Resolves where the character at `plain_offset` of the extracted text begins in `html`.
///
/// Offsets past the end of the text come back unchanged; such a result is not a real position.
pub fn map_to_html_offset(html: &str, plain_offset: usize) -> usize {
    let index = TextIndex::build(html);
    let mut mapper = index.mapper();

    match mapper.map_start(plain_offset) {
        Ok(offset) => offset,
        Err(error) => {
            log::debug!("falling back to unmapped offset: {}", error);
            plain_offset
        }
    }
}

/// Maps plain-text spans onto `html`, dropping spans that cannot be placed inside a single run of
/// text without enclosing markup.
pub fn map_spans_to_html(html: &str, index: &TextIndex, spans: &[Match]) -> Vec<Match> {
    let mut mapper = index.mapper();
    let mut mapped = Vec::with_capacity(spans.len());

    for span in spans {
        match mapper.map_span(*span) {
            Ok(html_span) if html.get(html_span.index..html_span.end()).is_some() => {
                mapped.push(html_span)
            }
            Ok(html_span) => log::warn!(
                "dropping match at html offset {}: outside the document",
                html_span.index
            ),
            Err(error) => log::warn!("dropping match at plain offset {}: {}", span.index, error),
        }
    }

    mapped
}
