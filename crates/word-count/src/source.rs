//! Line-by-line reading of text sources.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read an input source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open `{}`", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot read `{}` at line {line}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: io::Error,
    },
}

/// A finite sequence of text lines read from a buffered reader.
///
/// Yields each line without its `\n` or `\r\n` terminator. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD instead of failing the read. The
/// underlying file is closed when the source is dropped.
#[derive(Debug)]
pub struct LineSource<R = BufReader<File>> {
    reader: R,
    line: usize,
}

impl LineSource {
    /// Open a file for line-by-line reading.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LineSource::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn from_reader(reader: R) -> Self {
        LineSource { reader, line: 0 }
    }

    /// Number of lines successfully read so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
