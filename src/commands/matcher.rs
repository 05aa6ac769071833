use regex::{Regex, RegexBuilder};

use super::error::FindError;
use super::types::Match;

pub(super) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub(super) fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

fn build_literal_regex(term: &str) -> Result<Regex, FindError> {
    let regex = RegexBuilder::new(&regex::escape(term)).build()?;
    Ok(regex)
}

fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |ch| !is_word_char(ch));
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |ch| !is_word_char(ch));

    before_ok && after_ok
}

/// Finds every whole-word occurrence of `term` in `text`, left to right, without overlap.
///
/// Offsets are byte offsets into `text`. A candidate that touches a letter, digit or underscore
/// on either side is rejected and scanning resumes one character after its start, so a later
/// candidate overlapping the rejected one can still match.
pub fn find_whole_words(text: &str, term: &str) -> Result<Vec<Match>, FindError> {
    if is_blank_term(term) {
        return Ok(Vec::new());
    }

    let regex = build_literal_regex(term)?;
    let mut matches = Vec::new();
    let mut position = 0usize;

    while position <= text.len() {
        let Some(found) = regex.find_at(text, position) else {
            break;
        };

        let (start, end) = (found.start(), found.end());
        if has_word_boundaries(text, start, end) {
            matches.push(Match::new(start, end - start));
            position = end;
            continue;
        }

        let step = text[start..].chars().next().map_or(1, char::len_utf8);
        position = start + step;
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str, term: &str) -> Vec<(usize, usize)> {
        find_whole_words(text, term)
            .expect("literal pattern should compile")
            .into_iter()
            .map(|item| (item.index, item.length))
            .collect()
    }

    #[test]
    fn find_whole_words_should_skip_words_containing_term() {
        assert_eq!(spans("cat catalog cat", "cat"), vec![(0, 3), (12, 3)]);
    }

    #[test]
    fn find_whole_words_should_treat_punctuation_as_boundary() {
        assert_eq!(spans("(cat), cat.", "cat"), vec![(1, 3), (7, 3)]);
    }

    #[test]
    fn find_whole_words_should_reject_underscore_and_digit_neighbours() {
        assert!(spans("_cat cat1 2cat", "cat").is_empty());
    }

    #[test]
    fn find_whole_words_should_treat_non_latin_letters_as_word_chars() {
        let text = "text다시 text. 다시text";
        let found = spans(text, "text");

        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].0..found[0].0 + found[0].1], "text");
        assert_eq!(found[0].0, "text다시 ".len());
    }

    #[test]
    fn find_whole_words_should_match_non_latin_terms() {
        let text = "다시 또 다시다";
        assert_eq!(spans(text, "다시"), vec![(0, "다시".len())]);
    }

    #[test]
    fn find_whole_words_should_escape_pattern_syntax() {
        assert_eq!(spans("a.b axb a.b", "a.b"), vec![(0, 3), (8, 3)]);
        assert_eq!(spans("1+1 = 2", "1+1"), vec![(0, 3)]);
    }

    #[test]
    fn find_whole_words_should_resume_after_rejected_candidate() {
        assert_eq!(spans("aaa aa", "aa"), vec![(4, 2)]);
    }

    #[test]
    fn find_whole_words_should_not_overlap_matches() {
        assert_eq!(spans("a a a", "a a"), vec![(0, 3)]);
    }

    #[test]
    fn find_whole_words_should_return_empty_for_blank_terms() {
        assert!(spans("some text", "").is_empty());
        assert!(spans("some text", "   ").is_empty());
    }

    #[test]
    fn every_match_should_equal_term_and_sit_on_boundaries() {
        let text = "text, texting text_ text. (text) 다시text text";
        for (start, length) in spans(text, "text") {
            let end = start + length;
            assert_eq!(&text[start..end], "text");
            assert!(text[..start].chars().next_back().map_or(true, |ch| !is_word_char(ch)));
            assert!(text[end..].chars().next().map_or(true, |ch| !is_word_char(ch)));
        }
    }
}
