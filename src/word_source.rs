//! Word sources: where the corpus comes from.

use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::{LadderError, Result};
use crate::word::Word;

/// Produces the ordered corpus. Duplicates are passed through.
pub trait WordSource {
    fn words(&self) -> Result<Vec<Word>>;
}

/// Line-delimited word list on disk.
///
/// Each line is read as a CSV record and its first field is the word, so a
/// plain list and a `word,frequency` file both load. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn words(&self) -> Result<Vec<Word>> {
        let start = Instant::now();
        let unavailable = |e: csv::Error| {
            LadderError::source_unavailable(format!("{}: {}", self.path.display(), e))
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false) // word lists have no column titles
            .flexible(true)
            .trim(Trim::All)
            .quoting(false) // a stray quote must not swallow the following lines
            .from_path(&self.path)
            .map_err(unavailable)?;

        let mut words = Vec::new();
        for record in reader.records() {
            let record = record.map_err(unavailable)?; // never skip unreadable lines
            match record.get(0) {
                Some(word) if !word.is_empty() => words.push(word.to_string()),
                _ => {}
            }
        }

        info!(
            "List finished: {} words from {} in {}ms",
            words.len(),
            self.path.display(),
            start.elapsed().as_millis()
        );
        Ok(words)
    }
}

/// In-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct VecWordSource {
    words: Vec<Word>,
}

impl VecWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Word>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for VecWordSource {
    fn words(&self) -> Result<Vec<Word>> {
        Ok(self.words.clone())
    }
}
