use serde::{Deserialize, Serialize};

/// A single raw knowledge-base entry: a key phrase and its answer text.
///
/// The phrase is free text; it is normalized into a token-tuple key during
/// compilation. Entries are loaded once (from the built-in set or a JSON
/// file) and treated as immutable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub phrase: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(phrase: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            answer: answer.into(),
        }
    }
}
