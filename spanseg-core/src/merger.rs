//! Single-pass token merging
//!
//! Tokenizers often split runs like `། །` into several tokens. The merger
//! collapses every occurrence of an expanded merge pattern into one token so
//! the segmenter sees the run as a single delimiter-terminated unit.

use crate::rules::RuleSet;

/// Merge token runs that match the rule set's patterns
///
/// Scans left to right. At each position the first matching pattern (in
/// [`RuleSet::patterns`] order) wins and its tokens are replaced by their
/// concatenation. Merged tokens are never rescanned. Input is returned as-is
/// when the rule set has no merge templates.
pub fn merge_tokens(mut tokens: Vec<String>, rules: &RuleSet) -> Vec<String> {
    let patterns = rules.patterns();
    if patterns.is_empty() || tokens.is_empty() {
        return tokens;
    }

    let mut merged = Vec::with_capacity(tokens.len());
    let mut merge_count = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let matched = patterns
            .iter()
            .find(|pattern| matches_at(&tokens, i, pattern));

        match matched {
            Some(pattern) => {
                merged.push(pattern.concat());
                i += pattern.len();
                merge_count += 1;
            }
            None => {
                merged.push(std::mem::take(&mut tokens[i]));
                i += 1;
            }
        }
    }

    tracing::trace!(
        language = rules.code(),
        merges = merge_count,
        tokens_out = merged.len(),
        "merged token runs"
    );

    merged
}

#[inline]
fn matches_at(tokens: &[String], at: usize, pattern: &[String]) -> bool {
    !pattern.is_empty()
        && tokens
            .get(at..at + pattern.len())
            .is_some_and(|window| window == pattern)
}
