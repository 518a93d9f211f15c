//! Word tokenization: splits a line of text into normalized words.
//!
//! Words are maximal runs of alphanumeric characters, lowercased. An
//! apostrophe between two letters stays inside the word so contractions like
//! "DON'T" and possessives like "Alice's" are kept as single tokens. Curly
//! apostrophes are folded to `'`. Everything else is a separator and is
//! dropped.
//!
//! This crate has no dependencies on the other workspace crates. Consumers
//! take any [`Tokenizer`], so the normalization policy can be swapped out.

/// Turns one line of text into an ordered sequence of normalized words.
pub trait Tokenizer {
    fn words(&self, line: &str) -> Vec<String>;
}

/// The default tokenizer. See [`tokenize`] for the rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn words(&self, line: &str) -> Vec<String> {
        tokenize(line)
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn words(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// Tokenize a line with the default rules.
///
/// 1. Converts to lowercase.
/// 2. Collects maximal runs of alphanumeric characters.
/// 3. Keeps `'` or `’` inside a run when both neighbors are letters.
///
/// # Examples
///
/// ```
/// use word_tokenizer::tokenize;
///
/// let words = tokenize("Don't panic, Alice!");
/// assert_eq!(words, vec!["don't", "panic", "alice"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let lower = line.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (pos, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if is_inner_apostrophe(&chars, pos) {
            current.push('\'');
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// True if `chars[pos]` is an apostrophe with a letter on both sides.
fn is_inner_apostrophe(chars: &[char], pos: usize) -> bool {
    if !matches!(chars[pos], '\'' | '\u{2019}') || pos == 0 {
        return false;
    }

    let prev = chars[pos - 1];
    let next = chars.get(pos + 1);
    prev.is_alphabetic() && next.is_some_and(|c| c.is_alphabetic())
}
