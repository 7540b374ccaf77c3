//! Parallel construction of the word-adjacency graph.
//!
//! Every word is scanned against the words of the same length on a bounded
//! rayon pool. Each task produces one (word, neighbors) pair and the calling
//! thread collects them into the map, so the merge needs no locking.

use std::collections::HashMap;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, info, warn};

use crate::error::{LadderError, Result};
use crate::word::{one_step, word_len, Word};

/// Worker pool size used by [`build`].
pub const DEFAULT_WORKERS: usize = 8;

/// Word -> ordered list of words one letter away.
///
/// Every corpus word is a key; words without neighbors map to an empty list.
/// The map is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborMap {
    adjacency: HashMap<Word, Vec<Word>>,
}

impl NeighborMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from explicit entries. Later duplicates of a key replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Word, Vec<Word>)>,
    {
        Self {
            adjacency: entries.into_iter().collect(),
        }
    }

    /// Neighbors of `word`, or `None` if the word is not in the map.
    pub fn neighbors(&self, word: &str) -> Option<&[Word]> {
        self.adjacency.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, &Vec<Word>)> {
        self.adjacency.iter()
    }

    /// Entries sorted by key, with neighbor lists in their stored order.
    pub fn sorted_entries(&self) -> Vec<(&Word, &Vec<Word>)> {
        let mut entries: Vec<_> = self.adjacency.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Build the neighbor map with [`DEFAULT_WORKERS`] workers.
///
/// Never fails: an empty word list gives an empty map, and if the worker pool
/// cannot be started the scan runs on the calling thread instead.
pub fn build(words: &[Word]) -> NeighborMap {
    match build_with_workers(words, DEFAULT_WORKERS) {
        Ok(map) => map,
        Err(e) => {
            warn!("Worker pool unavailable ({}), building on the calling thread", e);
            build_sequential(words)
        }
    }
}

/// Same scan as [`build_with_workers`], on the calling thread only.
fn build_sequential(words: &[Word]) -> NeighborMap {
    let buckets = bucket_by_length(words);
    let lists = words
        .iter()
        .map(|word| (word.clone(), make_list(word, &buckets)))
        .collect();
    collect_map(lists)
}

/// Build the neighbor map on a pool of exactly `workers` threads.
///
/// Blocks until every word has been processed.
pub fn build_with_workers(words: &[Word], workers: usize) -> Result<NeighborMap> {
    if workers == 0 {
        return Err(LadderError::config("worker pool size must be at least 1"));
    }
    let start = Instant::now();

    let pool = make_pool(workers)?;
    let buckets = bucket_by_length(words);
    debug!(
        "Bucketed {} words into {} length classes",
        words.len(),
        buckets.len()
    );

    // one task per word; install() returns only once every task has finished
    let lists: Vec<(Word, Vec<Word>)> = pool.install(|| {
        words
            .par_iter()
            .map(|word| (word.clone(), make_list(word, &buckets)))
            .collect()
    });

    let map = collect_map(lists);
    info!(
        "Map finished: {} words, {} keys, {} edges, {} workers, {}ms",
        words.len(),
        map.len(),
        map.edge_count(),
        workers,
        start.elapsed().as_millis()
    );
    Ok(map)
}

fn make_pool(workers: usize) -> Result<ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("ladder-build-{}", i))
        .build()
        .map_err(LadderError::config)
}

/// Groups words by character length, keeping corpus order within each group.
fn bucket_by_length(words: &[Word]) -> HashMap<usize, Vec<&str>> {
    let mut buckets: HashMap<usize, Vec<&str>> = HashMap::new();
    for word in words {
        buckets.entry(word_len(word)).or_default().push(word.as_str());
    }
    buckets
}

/// Full scan of one word against its length class.
fn make_list(word: &str, buckets: &HashMap<usize, Vec<&str>>) -> Vec<Word> {
    match buckets.get(&word_len(word)) {
        Some(candidates) => candidates
            .iter()
            .filter(|candidate| one_step(word, candidate))
            .map(|candidate| candidate.to_string())
            .collect(),
        None => Vec::new(),
    }
}

fn collect_map(lists: Vec<(Word, Vec<Word>)>) -> NeighborMap {
    let mut adjacency = HashMap::with_capacity(lists.len());
    for (word, neighbors) in lists {
        adjacency.insert(word, neighbors); // duplicates carry identical lists
    }
    NeighborMap { adjacency }
}
