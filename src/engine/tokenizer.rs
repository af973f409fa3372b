use unicode_segmentation::UnicodeSegmentation;

/// A word found in a larger text, with its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split text into candidate words.
///
/// Words are runs of alphabetic graphemes, with inner apostrophes and hyphens
/// kept (`don't`, `well-known`). Leading and trailing punctuation is dropped.
pub fn words(text: &str) -> Vec<WordToken<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut last_letter_end = 0;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let ch = grapheme.chars().next().unwrap_or(' ');

        if ch.is_alphabetic() {
            word_start.get_or_insert(offset);
            last_letter_end = offset + grapheme.len();
        } else if is_joiner(ch) && word_start.is_some() {
            // Only part of the word if a letter follows
        } else if let Some(start) = word_start.take() {
            tokens.push(token(text, start, last_letter_end));
        }
    }

    if let Some(start) = word_start {
        tokens.push(token(text, start, last_letter_end));
    }

    tokens
}

fn token(text: &str, start: usize, end: usize) -> WordToken<'_> {
    WordToken {
        text: &text[start..end],
        start,
        end,
    }
}

fn is_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '-')
}
