//! Word-frequency analysis over an ordered symbol table.
//!
//! This is the facade crate that wires together the lower-level pieces:
//! - [`symbol_table`]: sorted-array map holding word counts
//! - [`word_tokenizer`]: line-to-word normalization
//! - [`source`]: buffered line reading from files
//! - [`catalog`]: the menu of predefined input sources
//!
//! # Quick Start
//!
//! ```
//! use word_count::WordCounter;
//! use word_tokenizer::WordTokenizer;
//!
//! let mut counter = WordCounter::new();
//! counter.process_text("The cat sat on the mat.", &WordTokenizer);
//! let stats = counter.report();
//! assert_eq!(stats.total_words, 6);
//! assert_eq!(stats.most_frequent.unwrap().word, "the");
//! ```

use std::io;
use std::path::Path;

use symbol_table::SymbolTable;
use tracing::{debug, warn};

pub mod catalog;
pub mod source;
pub mod stats;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use source::{LineSource, SourceError};
pub use stats::{LetterCount, Statistics, WordFrequency};
pub use symbol_table::{DEFAULT_INITIAL_CAPACITY, TableConfig};
pub use word_tokenizer::{Tokenizer, WordTokenizer};

const LETTERS: usize = 26;

/// Accumulates word counts and running statistics for one analysis run.
///
/// Words go in through [`add_word`](Self::add_word) (directly or via the
/// `process_*` methods). [`report`](Self::report) can be called at any time,
/// any number of times; it never changes the counter.
#[derive(Debug, Clone)]
pub struct WordCounter {
    config: TableConfig,
    /// Word -> occurrence count.
    table: SymbolTable<String, u64>,
    /// All counted words, duplicates included.
    total_words: u64,
    first_word: Option<String>,
    last_word: Option<String>,
    /// Words by first byte, `a` through `z`.
    initial_letters: [u64; LETTERS],
}

impl WordCounter {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create a counter whose table uses `config`.
    ///
    /// # Panics
    /// Panics if `config.initial_capacity` is zero.
    pub fn with_config(config: TableConfig) -> Self {
        WordCounter {
            config,
            table: SymbolTable::with_config(config),
            total_words: 0,
            first_word: None,
            last_word: None,
            initial_letters: [0; LETTERS],
        }
    }

    /// Count one word.
    ///
    /// The word is trimmed first. `None` and blank input are ignored and do
    /// not touch any counter. Only words starting with `a`..=`z` land in the
    /// initial-letter histogram.
    pub fn add_word<'a>(&mut self, word: impl Into<Option<&'a str>>) {
        let Some(word) = word.into() else {
            return;
        };
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        self.total_words += 1;
        if self.first_word.is_none() {
            self.first_word = Some(word.to_owned());
        }
        self.last_word = Some(word.to_owned());

        let count = self.table.get(word).copied().unwrap_or(0);
        self.table.put(word.to_owned(), count + 1);

        if let Some(first @ b'a'..=b'z') = word.bytes().next() {
            self.initial_letters[(first - b'a') as usize] += 1;
        }
    }

    /// Tokenize and count every line from `lines`.
    ///
    /// All or nothing: lines are counted into a scratch counter that is
    /// merged in only once the whole sequence has been read. On the first
    /// read error the error is returned and `self` is left untouched. On
    /// success returns the number of lines processed.
    pub fn process_lines<I, T>(&mut self, lines: I, tokenizer: &T) -> io::Result<usize>
    where
        I: IntoIterator<Item = io::Result<String>>,
        T: Tokenizer + ?Sized,
    {
        let mut batch = WordCounter::with_config(self.config);
        let mut processed = 0;
        for line in lines {
            let line = line?;
            for word in tokenizer.words(&line) {
                batch.add_word(word.as_str());
            }
            processed += 1;
        }

        self.merge(batch);
        debug!(
            lines = processed,
            total = self.total_words,
            distinct = self.table.size(),
            "processed lines"
        );
        Ok(processed)
    }

    /// Fold the counts of `other` into `self`, as if its words had been
    /// added after the ones already here.
    pub fn merge(&mut self, other: WordCounter) {
        if self.total_words == 0 {
            self.table = other.table;
            self.total_words = other.total_words;
            self.first_word = other.first_word;
            self.last_word = other.last_word;
            self.initial_letters = other.initial_letters;
            return;
        }
        if other.total_words == 0 {
            return;
        }

        for (word, count) in other.table.iter() {
            let current = self.table.get(word.as_str()).copied().unwrap_or(0);
            self.table.put(word.clone(), current + count);
        }
        for (mine, theirs) in self.initial_letters.iter_mut().zip(other.initial_letters) {
            *mine += theirs;
        }
        self.total_words += other.total_words;
        self.last_word = other.last_word;
    }

    /// Tokenize and count in-memory text.
    pub fn process_text<T>(&mut self, text: &str, tokenizer: &T) -> usize
    where
        T: Tokenizer + ?Sized,
    {
        let mut processed = 0;
        for line in text.lines() {
            for word in tokenizer.words(line) {
                self.add_word(word.as_str());
            }
            processed += 1;
        }
        processed
    }

    /// Read `path` line by line and count its words.
    ///
    /// The file is closed before this returns, on success or failure. A
    /// failed read leaves the counter as it was before the call.
    pub fn process_file<T>(&mut self, path: &Path, tokenizer: &T) -> Result<usize, SourceError>
    where
        T: Tokenizer + ?Sized,
    {
        debug!(path = %path.display(), "opening source");
        let mut source = LineSource::open(path)?;

        self.process_lines(&mut source, tokenizer).map_err(|err| {
            let line = source.line_number() + 1;
            warn!(path = %path.display(), line, error = %err, "read failed");
            SourceError::Read {
                path: path.to_path_buf(),
                line,
                source: err,
            }
        })
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn distinct_words(&self) -> usize {
        self.table.size()
    }

    pub fn first_word(&self) -> Option<&str> {
        self.first_word.as_deref()
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    /// Occurrences of `word`; zero if never seen.
    pub fn count_of(&self, word: &str) -> u64 {
        self.table.get(word).copied().unwrap_or(0)
    }

    /// Count for an initial-letter bucket. Accepts either case; any other
    /// character yields zero.
    pub fn initial_letter_count(&self, letter: char) -> u64 {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.initial_letters[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Distinct words in ascending byte order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.table.keys().map(String::as_str)
    }

    /// `(word, count)` pairs in ascending byte order of the word.
    pub fn frequencies(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
        self.table.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Snapshot the current statistics.
    pub fn report(&self) -> Statistics {
        let repeated_words = self.table.values().filter(|&&count| count > 1).count();

        // Ascending traversal with strict `>`: the smallest word wins a tie.
        let mut most_frequent: Option<(&String, u64)> = None;
        for (word, &count) in &self.table {
            if most_frequent.is_none_or(|(_, max)| count > max) {
                most_frequent = Some((word, count));
            }
        }

        let initial_letters = (b'A'..=b'Z')
            .zip(self.initial_letters)
            .filter(|&(_, count)| count > 0)
            .map(|(letter, count)| LetterCount {
                letter: letter as char,
                count,
            })
            .collect();

        Statistics {
            total_words: self.total_words,
            distinct_words: self.table.size(),
            repeated_words,
            first_word: self.first_word.clone(),
            last_word: self.last_word.clone(),
            most_frequent: most_frequent.map(|(word, count)| WordFrequency {
                word: word.clone(),
                count,
            }),
            initial_letters,
        }
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}
