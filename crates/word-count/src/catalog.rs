//! Catalog of predefined input sources offered by the selection menu.
//!
//! A catalog file is TOML with one `[[book]]` table per entry:
//!
//! ```toml
//! [[book]]
//! title = "Moby Dick"
//! path = "books/Moby Dick.txt"
//! ```
//!
//! Relative paths resolve against the directory holding the catalog file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a catalog or to pick an entry from it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog `{}`", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid catalog `{}`", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("catalog `{}` lists no books", path.display())]
    Empty { path: PathBuf },

    #[error("invalid selection `{choice}`: choose a number from 1 to {available}")]
    InvalidSelection { choice: String, available: usize },
}

/// One selectable input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "book", default)]
    books: Vec<CatalogEntry>,
}

/// An ordered list of input sources, selected by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The two bundled books, looked up under `base_dir/books/`.
    pub fn builtin(base_dir: &Path) -> Self {
        let books = base_dir.join("books");
        Catalog {
            entries: vec![
                CatalogEntry {
                    title: "Alice's Adventures in Wonderland".to_string(),
                    path: books.join("Alice Adventures in Wonderland.txt"),
                },
                CatalogEntry {
                    title: "Moby Dick".to_string(),
                    path: books.join("Moby Dick.txt"),
                },
            ],
        }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base).map_err(|err| match err {
            ParseFailure::Toml(source) => CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Empty => CatalogError::Empty {
                path: path.to_path_buf(),
            },
        })
    }

    fn parse(content: &str, base: &Path) -> Result<Self, ParseFailure> {
        let file: CatalogFile = toml::from_str(content).map_err(ParseFailure::Toml)?;
        if file.books.is_empty() {
            return Err(ParseFailure::Empty);
        }

        let entries = file
            .books
            .into_iter()
            .map(|entry| CatalogEntry {
                path: base.join(&entry.path),
                title: entry.title,
            })
            .collect();
        Ok(Catalog { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick the entry at 1-based position `choice`.
    pub fn select(&self, choice: usize) -> Result<&CatalogEntry, CatalogError> {
        choice
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .ok_or_else(|| CatalogError::InvalidSelection {
                choice: choice.to_string(),
                available: self.entries.len(),
            })
    }

    /// Pick an entry from free-form user input such as a menu answer.
    pub fn select_input(&self, input: &str) -> Result<&CatalogEntry, CatalogError> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(choice) => self.select(choice),
            Err(_) => Err(CatalogError::InvalidSelection {
                choice: input.to_string(),
                available: self.entries.len(),
            }),
        }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Empty,
}

/// Renders the numbered menu, one entry per line.
impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {}", idx + 1, entry.title)?;
        }
        Ok(())
    }
}
