pub mod output;

use crate::engine::tokenizer;
use crate::session::SpellCheckHandler;
use output::{context_around, Misspelling};

#[derive(Debug, Default)]
pub struct CheckReport {
    pub words_checked: usize,
    pub misspellings: Vec<Misspelling>,
}

/// Run every word of `content` through the handler the way a text surface
/// would, collecting corrections for the flagged ones.
pub async fn check_text(handler: &SpellCheckHandler, content: &str) -> CheckReport {
    let mut report = CheckReport::default();

    for (line_num, line) in content.lines().enumerate() {
        for word in tokenizer::words(line) {
            report.words_checked += 1;
            if !handler.is_misspelled(word.text) {
                continue;
            }

            let suggestions = handler
                .get_corrections_for_misspelling(word.text)
                .await
                .unwrap_or_default();

            report.misspellings.push(Misspelling {
                word: word.text.to_string(),
                line: line_num + 1,
                column: line[..word.start].chars().count() + 1,
                context: context_around(line, word.start, word.end),
                suggestions,
            });
        }
    }

    report
}
