use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A word the session flagged, located in the checked input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    language: Option<&'a str>,
    words_checked: usize,
    total_errors: usize,
    errors: &'a [Misspelling],
}

pub fn print_misspellings(
    misspellings: &[Misspelling],
    words_checked: usize,
    language: Option<&str>,
    colored_output: bool,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text(misspellings, colored_output),
        OutputFormat::Json => print_json(misspellings, words_checked, language),
    }
}

fn print_text(misspellings: &[Misspelling], colored_output: bool) {
    for error in misspellings {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                error.word.red().bold(),
                format_context(&error.context, &error.word, colored_output)
            );

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {} {}", line_info, error.word, error.context);

            if !error.suggestions.is_empty() {
                println!("    → {}", error.suggestions.join(", "));
            }
        }
    }
}

fn print_json(misspellings: &[Misspelling], words_checked: usize, language: Option<&str>) {
    let output = JsonOutput {
        language,
        words_checked,
        total_errors: misspellings.len(),
        errors: misspellings,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize output: {}", e),
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

/// Up to 20 bytes of surrounding text on each side, on char boundaries.
pub fn context_around(line: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(20);
    while !line.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + 20).min(line.len());
    while !line.is_char_boundary(to) {
        to += 1;
    }

    let context = &line[from..to];
    match (from > 0, to < line.len()) {
        (true, true) => format!("...{}...", context),
        (true, false) => format!("...{}", context),
        (false, true) => format!("{}...", context),
        (false, false) => context.to_string(),
    }
}

pub fn print_check_summary(total_errors: usize, language: Option<&str>, colored: bool) {
    println!();
    let language = language.unwrap_or("no dictionary");
    if total_errors == 0 {
        let message = format!("✓ No spelling errors found ({})", language);
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found ({})",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                language
            );
        } else {
            println!("✗ {} {} found ({})", total_errors, error_word, language);
        }
    }
}

pub fn print_added(words: &[String], colored: bool) {
    for word in words {
        if colored {
            println!("{} Added {}", "✓".green().bold(), word.cyan());
        } else {
            println!("✓ Added {}", word);
        }
    }
}
