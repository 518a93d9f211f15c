//! Statistics snapshot produced by [`WordCounter::report`](crate::WordCounter::report).

use std::fmt;

use serde::Serialize;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Number of words starting with `letter` (shown uppercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: u64,
}

/// Word-frequency statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// All non-blank words seen, duplicates included.
    pub total_words: u64,
    pub distinct_words: usize,
    /// Distinct words seen more than once.
    pub repeated_words: usize,
    pub first_word: Option<String>,
    pub last_word: Option<String>,
    /// Highest count; ties go to the smallest word in byte order.
    pub most_frequent: Option<WordFrequency>,
    /// Non-zero initial-letter buckets, `A` to `Z`.
    pub initial_letters: Vec<LetterCount>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let none = "(none)";

        writeln!(f, "Total words: {}", self.total_words)?;
        writeln!(f, "Distinct words: {}", self.distinct_words)?;
        writeln!(f, "Repeated words: {}", self.repeated_words)?;
        writeln!(f, "First word: {}", self.first_word.as_deref().unwrap_or(none))?;
        writeln!(f, "Last word: {}", self.last_word.as_deref().unwrap_or(none))?;
        match &self.most_frequent {
            Some(top) => writeln!(f, "Most frequent word: {} ({} times)", top.word, top.count)?,
            None => writeln!(f, "Most frequent word: {none}")?,
        }

        writeln!(f)?;
        writeln!(f, "Words by initial letter:")?;
        for bucket in &self.initial_letters {
            writeln!(f, "{}: {}", bucket.letter, bucket.count)?;
        }
        Ok(())
    }
}
