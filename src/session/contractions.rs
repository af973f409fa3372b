use lazy_static::lazy_static;
use std::collections::HashSet;

// Contractions the native checkers tend to flag, usually because the host
// hands them the word split at the apostrophe.
const CONTRACTIONS: &[&str] = &[
    "ain't", "aren't", "can't", "could've", "couldn't", "couldn't've", "didn't", "doesn't",
    "don't", "hadn't", "hadn't've", "hasn't", "haven't", "he'd", "he'd've", "he'll", "he's",
    "how'd", "how'll", "how's", "I'd", "I'd've", "I'll", "I'm", "I've", "isn't", "it'd",
    "it'd've", "it'll", "it's", "let's", "ma'am", "mightn't", "mightn't've", "might've",
    "mustn't", "must've", "needn't", "not've", "o'clock", "shan't", "she'd", "she'd've",
    "she'll", "she's", "should've", "shouldn't", "shouldn't've", "that'll", "that's",
    "there'd", "there'd've", "there're", "there's", "they'd", "they'd've", "they'll",
    "they're", "they've", "wasn't", "we'd", "we'd've", "we'll", "we're", "we've", "weren't",
    "what'll", "what're", "what's", "what've", "when's", "where'd", "where's", "where've",
    "who'd", "who'll", "who're", "who's", "who've", "why'll", "why're", "why's", "won't",
    "would've", "wouldn't", "wouldn't've", "y'all", "y'all'd've", "you'd", "you'd've",
    "you'll", "you're", "you've",
];

lazy_static! {
    pub static ref CONTRACTION_TABLE: ContractionTable = ContractionTable::new(CONTRACTIONS);
}

/// Known contractions, indexed by lowercase root (the text before the first
/// apostrophe) and by lowercase full form.
#[derive(Debug)]
pub struct ContractionTable {
    roots: HashSet<String>,
    forms: HashSet<String>,
}

impl ContractionTable {
    pub fn new(contractions: &[&str]) -> Self {
        let mut roots = HashSet::with_capacity(contractions.len());
        let mut forms = HashSet::with_capacity(contractions.len());

        for contraction in contractions {
            let form = contraction.to_lowercase();
            if let Some((root, _)) = form.split_once('\'') {
                roots.insert(root.to_string());
            }
            forms.insert(form);
        }

        Self { roots, forms }
    }

    /// Whether `text` is a known contraction or contraction root.
    pub fn contains(&self, text: &str) -> bool {
        let candidate = text.to_lowercase().replace('\u{2019}', "'");
        self.roots.contains(&candidate) || self.forms.contains(&candidate)
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }
}
