//! Knowledge-base compilation and longest-n-gram matching.
//!
//! A `CompiledKnowledgeBase` maps normalized token tuples to answer text and
//! caches the longest key length so the matcher can bound its search. The
//! compile step runs once per knowledge-base load; the compiled value is
//! read-only for the remainder of the process.

use std::collections::HashMap;

use crate::model::knowledge_entry::KnowledgeEntry;
use crate::normalize::normalize;
use crate::utils::logging;

/// Compiled form of the knowledge base: normalized token-tuple keys mapped to
/// answer strings, plus the token length of the longest key.
///
/// Invariants:
/// - Keys are unique after normalization; when two raw phrases normalize to
///   the same token tuple the later entry overwrites the earlier one
///   (last-write-wins).
/// - Entries whose phrase normalizes to an empty token sequence are discarded
///   during compilation, since no query could ever match them.
/// - `max_key_len` is at least 1 even when no entries compiled, so the
///   matcher's window loop is always well-formed.
#[derive(Clone, Debug)]
pub struct CompiledKnowledgeBase {
    answers: HashMap<Vec<String>, String>,
    max_key_len: usize,
}

impl CompiledKnowledgeBase {
    /// Compile raw entries into the lookup form used by the matcher.
    ///
    /// Each phrase is run through `normalize`; empty keys are dropped and
    /// duplicate keys are overwritten in entry order.
    pub fn compile(entries: &[KnowledgeEntry]) -> Self {
        let mut answers: HashMap<Vec<String>, String> = HashMap::with_capacity(entries.len());
        let mut max_key_len = 0usize;

        for entry in entries {
            let key = normalize(&entry.phrase);
            if key.is_empty() {
                logging::debug(&format!(
                    "discarding unmatchable entry (phrase normalizes to nothing): {:?}",
                    entry.phrase
                ));
                continue;
            }
            max_key_len = max_key_len.max(key.len());
            if let Some(previous) = answers.insert(key, entry.answer.clone()) {
                logging::debug(&format!(
                    "duplicate normalized key from phrase {:?}; replacing answer {:?}",
                    entry.phrase, previous
                ));
            }
        }

        Self {
            answers,
            // Default to 1 so an empty knowledge base still yields valid loop bounds.
            max_key_len: max_key_len.max(1),
        }
    }

    /// Number of distinct compiled keys.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no entries survived compilation (every query will fall back).
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Token length of the longest compiled key (>= 1).
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Look up an exact normalized token tuple.
    pub fn lookup(&self, key: &[String]) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Iterate over compiled keys and answers in arbitrary order (used by
    /// knowledge-base inspection tooling; matching never iterates).
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.answers
            .iter()
            .map(|(key, answer)| (key.as_slice(), answer.as_str()))
    }
}

/// Result of a successful knowledge-base match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    /// Answer text of the matched entry.
    pub answer: String,
    /// Number of query tokens the matched key covered (the n of the n-gram).
    pub matched_len: usize,
}

/// Find the longest contiguous token subsequence that exactly equals a
/// compiled knowledge-base key.
///
/// Algorithm (longest-n-gram-first exact match): for `n` from
/// `min(kb.max_key_len, tokens.len())` down to 1, scan all windows of length
/// `n` left to right and return on the first hit, stopping both loops.
///
/// Tie-break policy: longer matches strictly dominate shorter ones regardless
/// of position; among distinct keys of the same maximal length the leftmost
/// window in the token sequence wins. Both rules are deliberate, so matching
/// is fully deterministic for a fixed knowledge base.
///
/// # Returns
///
/// `Some(MatchResult)` with the answer and matched token count, or `None`
/// when `tokens` is empty or no window matches any key.
pub fn find_match(tokens: &[String], kb: &CompiledKnowledgeBase) -> Option<MatchResult> {
    if tokens.is_empty() || kb.is_empty() {
        return None;
    }

    let upper = kb.max_key_len().min(tokens.len());
    for n in (1..=upper).rev() {
        for window in tokens.windows(n) {
            if let Some(answer) = kb.lookup(window) {
                return Some(MatchResult {
                    answer: answer.to_string(),
                    matched_len: n,
                });
            }
        }
    }
    None
}
