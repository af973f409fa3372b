use crate::engine::dictionary::Dictionary;

/// Generate ordered correction candidates for `word`.
///
/// Candidates are found with progressively more expensive passes and keep the
/// capitalization of the original word's first letter.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    if max_suggestions == 0 || word.is_empty() {
        return Vec::new();
    }

    let lower = word.to_lowercase();
    let mut found = Candidates::new(max_suggestions);

    // 1. Three-letter prefix, close matches only
    if lower.chars().count() >= 3 {
        for candidate in ranked_by_prefix(&lower, dictionary, 3) {
            if edit_distance(&lower, &candidate) <= 2 && found.push(candidate) {
                return found.finish(word);
            }
        }
    }

    // 2. Single-edit typos
    for candidate in generate_transformations(&lower) {
        if dictionary.contains(&candidate) && found.push(candidate) {
            return found.finish(word);
        }
    }

    // 3. Two-letter prefix, looser distance
    if lower.chars().count() >= 2 {
        for candidate in ranked_by_prefix(&lower, dictionary, 2) {
            if edit_distance(&lower, &candidate) <= 3 && found.push(candidate) {
                return found.finish(word);
            }
        }
    }

    // 4. Full scan, short words only
    if lower.chars().count() <= 3 {
        let len = lower.chars().count();
        let mut scanned: Vec<(usize, String)> = dictionary
            .all_words()
            .into_iter()
            .filter(|w| w.chars().count().abs_diff(len) <= 1)
            .take(100)
            .map(|w| (edit_distance(&lower, &w), w))
            .filter(|(dist, _)| *dist <= 2)
            .collect();
        scanned.sort_by_key(|(dist, _)| *dist);

        for (_, candidate) in scanned {
            if found.push(candidate) {
                break;
            }
        }
    }

    found.finish(word)
}

struct Candidates {
    words: Vec<String>,
    limit: usize,
}

impl Candidates {
    fn new(limit: usize) -> Self {
        Self {
            words: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Returns true once the limit is reached.
    fn push(&mut self, candidate: String) -> bool {
        if !self.words.contains(&candidate) {
            self.words.push(candidate);
        }
        self.words.len() >= self.limit
    }

    fn finish(mut self, original: &str) -> Vec<String> {
        self.words.truncate(self.limit);
        if original.chars().next().is_some_and(char::is_uppercase) {
            self.words.iter().map(|w| capitalize(w)).collect()
        } else {
            self.words
        }
    }
}

fn ranked_by_prefix(word: &str, dictionary: &Dictionary, prefix_chars: usize) -> Vec<String> {
    let prefix: String = word.chars().take(prefix_chars).collect();
    let mut matches = dictionary.words_with_prefix(&prefix);
    matches.retain(|m| m != word);
    matches.sort_by_key(|m| edit_distance(word, m));
    matches
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rolling rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Generate common single-edit transformations of a word
fn generate_transformations(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut transformations = Vec::new();

    // Deletions
    for i in 0..chars.len() {
        let mut new_word = chars.clone();
        new_word.remove(i);
        transformations.push(new_word.iter().collect());
    }

    // Transpositions (swap adjacent)
    for i in 0..chars.len().saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        transformations.push(new_word.iter().collect());
    }

    // Replacements (common typos)
    const COMMON_REPLACEMENTS: [(char, char); 11] = [
        ('a', 'e'),
        ('e', 'i'),
        ('i', 'o'),
        ('o', 'u'),
        ('b', 'v'),
        ('c', 'k'),
        ('f', 'v'),
        ('g', 'j'),
        ('m', 'n'),
        ('s', 'z'),
        ('t', 'd'),
    ];

    for (i, &ch) in chars.iter().enumerate() {
        for &(from, to) in &COMMON_REPLACEMENTS {
            if ch == from {
                let mut new_word = chars.clone();
                new_word[i] = to;
                transformations.push(new_word.iter().collect());
            }
        }
    }

    transformations
}
