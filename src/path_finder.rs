//! Breadth-first search for the shortest word ladder.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use tracing::debug;

use crate::error::{LadderError, Result};
use crate::graph_builder::NeighborMap;
use crate::word::{word_len, Word};

/// A walk through the graph, from the start word to the current word.
///
/// Never empty. Consecutive words are neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    words: Vec<Word>,
}

impl Path {
    /// Single-word path.
    pub fn new(start: impl Into<Word>) -> Self {
        Self {
            words: vec![start.into()],
        }
    }

    /// A copy of this path with `word` appended.
    pub fn appended(&self, word: impl Into<Word>) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend(self.words.iter().cloned());
        words.push(word.into());
        Self { words }
    }

    /// Last word of the path (the frontier during search).
    pub fn current_word(&self) -> &str {
        // non-empty by construction
        self.words.last().map(String::as_str).unwrap_or_default()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of one-letter steps.
    pub fn edge_count(&self) -> usize {
        self.words.len() - 1
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Shortest ladder from `start` to `end`.
///
/// - `Err(InvalidInput)` if the words differ in length, whatever the map holds.
/// - `Ok(None)` if either word is not a key of the map, or no ladder exists.
/// - `Ok(Some([start]))` if `start == end`.
///
/// Among several shortest ladders the one found first wins; that depends only
/// on neighbor-list order, so results are deterministic for a given map.
pub fn find_path(map: &NeighborMap, start: &str, end: &str) -> Result<Option<Path>> {
    let start_len = word_len(start);
    let end_len = word_len(end);
    if start_len != end_len {
        return Err(LadderError::InvalidInput {
            start: start.to_string(),
            end: end.to_string(),
            start_len,
            end_len,
        });
    }

    // both words must be in the map
    if !map.contains(start) || !map.contains(end) {
        debug!("{:?} or {:?} not in map", start, end);
        return Ok(None);
    }

    if start == end {
        return Ok(Some(Path::new(start)));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);

    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(Path::new(start));

    while let Some(current_path) = queue.pop_front() {
        let current_word = current_path.current_word();
        // words missing from the map behave like dead ends
        let Some(neighbors) = map.neighbors(current_word) else {
            continue;
        };

        for neighbor in neighbors {
            if !visited.insert(neighbor.as_str()) {
                continue; // already enqueued via a path at least as short
            }
            let new_path = current_path.appended(neighbor.as_str());
            if neighbor == end {
                debug!(
                    "Found ladder of {} steps, {} words visited",
                    new_path.edge_count(),
                    visited.len()
                );
                return Ok(Some(new_path));
            }
            queue.push_back(new_path);
        }
    }

    debug!("Queue exhausted after {} words", visited.len());
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_builder::build;
    use proptest::prelude::*;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn cat_map() -> NeighborMap {
        build(&corpus(&["cat", "cot", "cog", "dog", "dot", "cop"]))
    }

    /// Length in edges of every simple path from `start` to `end`, by DFS.
    fn all_path_lengths(map: &NeighborMap, start: &str, end: &str) -> Vec<usize> {
        fn walk(
            map: &NeighborMap,
            current: &str,
            end: &str,
            on_path: &mut Vec<String>,
            lengths: &mut Vec<usize>,
        ) {
            if current == end {
                lengths.push(on_path.len() - 1);
                return;
            }
            for neighbor in map.neighbors(current).unwrap_or(&[]) {
                if on_path.contains(neighbor) {
                    continue;
                }
                on_path.push(neighbor.clone());
                walk(map, neighbor, end, on_path, lengths);
                on_path.pop();
            }
        }
        let mut lengths = Vec::new();
        walk(map, start, end, &mut vec![start.to_string()], &mut lengths);
        lengths
    }

    #[test]
    fn test_find_path_cat_to_dog() {
        let map = cat_map();
        let path = find_path(&map, "cat", "dog").unwrap().unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path.edge_count(), 3);
        // cot lists cog before dot, so cog is reached first
        assert_eq!(path.words(), &corpus(&["cat", "cot", "cog", "dog"])[..]);
        assert_eq!(path.to_string(), "cat -> cot -> cog -> dog");
    }

    #[test]
    fn test_find_path_disjoint_components() {
        let map = build(&corpus(&["abc", "abd", "xyz", "xyy"]));
        assert_eq!(find_path(&map, "abc", "xyz").unwrap(), None);
        assert!(find_path(&map, "abc", "abd").unwrap().is_some());
    }

    #[test]
    fn test_find_path_length_mismatch() {
        let map = cat_map();
        let err = find_path(&map, "cat", "cats").unwrap_err();
        assert!(err.is_invalid_input());

        // checked before membership
        let empty = NeighborMap::new();
        assert!(find_path(&empty, "ab", "abc").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_find_path_absent_words() {
        let map = cat_map();
        assert_eq!(find_path(&map, "cat", "zzz").unwrap(), None);
        assert_eq!(find_path(&map, "zzz", "cat").unwrap(), None);
        assert_eq!(find_path(&map, "zzz", "zzz").unwrap(), None);
    }

    #[test]
    fn test_find_path_same_word() {
        let map = cat_map();
        let path = find_path(&map, "cat", "cat").unwrap().unwrap();
        assert_eq!(path.words(), &corpus(&["cat"])[..]);
        assert_eq!(path.edge_count(), 0);
    }

    #[test]
    fn test_find_path_isolated_word() {
        let map = build(&corpus(&["cat", "cot", "xyz"]));
        assert_eq!(find_path(&map, "cat", "xyz").unwrap(), None);
        assert!(find_path(&map, "xyz", "xyz").unwrap().is_some());
    }

    #[test]
    fn test_find_path_neighbor_missing_from_map() {
        // hand-built map whose neighbor has no entry of its own
        let map = NeighborMap::from_entries(vec![
            ("aa".to_string(), vec!["ab".to_string()]),
            ("bb".to_string(), vec![]),
        ]);
        assert_eq!(find_path(&map, "aa", "bb").unwrap(), None);
    }

    #[test]
    fn test_find_path_prefers_shorter_over_earlier() {
        // baa is listed first but only leads to bba in three steps
        let map = NeighborMap::from_entries(vec![
            ("aaa".to_string(), vec!["baa".to_string(), "aba".to_string()]),
            ("baa".to_string(), vec!["aaa".to_string(), "bca".to_string()]),
            ("bca".to_string(), vec!["baa".to_string(), "bba".to_string()]),
            ("aba".to_string(), vec!["aaa".to_string(), "bba".to_string()]),
            ("bba".to_string(), vec!["aba".to_string(), "bca".to_string()]),
        ]);
        let path = find_path(&map, "aaa", "bba").unwrap().unwrap();
        assert_eq!(path.words(), &corpus(&["aaa", "aba", "bba"])[..]);
    }

    #[test]
    fn test_concurrent_searches_share_map() {
        let map = cat_map();
        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| find_path(&map, "cat", "dog").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_path_appended_leaves_original() {
        let path = Path::new("cat");
        let longer = path.appended("cot");
        assert_eq!(path.len(), 1);
        assert_eq!(longer.current_word(), "cot");
        assert_eq!(longer.to_string(), "cat -> cot");
    }

    proptest! {
        #[test]
        fn prop_find_path_is_shortest(words in prop::collection::vec("[ab]{3}", 1..10)) {
            let map = build(&words);
            let start = &words[0];
            for end in &words {
                let found = find_path(&map, start, end).unwrap();
                let lengths = all_path_lengths(&map, start, end);
                match found {
                    Some(path) => {
                        prop_assert_eq!(Some(path.edge_count()), lengths.iter().copied().min());
                        for pair in path.words().windows(2) {
                            prop_assert!(crate::word::one_step(&pair[0], &pair[1]));
                        }
                    }
                    None => {
                        prop_assert!(lengths.is_empty());
                    }
                }
            }
        }

        #[test]
        fn prop_length_mismatch_always_invalid(words in prop::collection::vec("[ab]{1,4}", 0..10)) {
            let map = build(&words);
            prop_assert!(find_path(&map, "ab", "abab").unwrap_err().is_invalid_input());
        }
    }

    #[test]
    fn test_all_path_lengths_helper() {
        let map = cat_map();
        let mut lengths = all_path_lengths(&map, "cat", "dog");
        lengths.sort();
        // via cog, via dot, and via cop then cog
        assert_eq!(lengths, vec![3, 3, 4]);
    }
}
