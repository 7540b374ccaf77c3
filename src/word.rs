/// A dictionary word. Compared exactly, case-sensitive.
pub type Word = String;

/// Length of a word in characters, not bytes.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Legal-transformation predicate: `word2` is reachable from `word1` in one step.
///
/// The words must differ, have the same length, and differ at exactly one
/// character position.
pub fn one_step(word1: &str, word2: &str) -> bool {
    if word1 == word2 {
        return false; // no self-loops
    }
    if word_len(word1) != word_len(word2) {
        return false;
    }
    let mut diff = 0;
    for (c1, c2) in word1.chars().zip(word2.chars()) {
        if c1 != c2 {
            diff += 1;
            if diff > 1 {
                return false; // second difference, stop scanning
            }
        }
    }
    diff == 1
}
