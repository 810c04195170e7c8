//! Response orchestration: the thin pipeline tying the normalizer and matcher
//! together behind a single `respond` call.
//!
//! The `Responder` is a plain immutable value constructed once at startup. No
//! ambient global state is involved: the compiled knowledge base lives inside
//! the responder and callers pass it by reference wherever a reply is needed.

use std::fmt;

use crate::matcher::{find_match, CompiledKnowledgeBase};
use crate::model::knowledge_entry::KnowledgeEntry;
use crate::normalize::normalize;
use crate::utils::logging;

/// Fallback answer used when no knowledge-base key matches the query.
pub const DEFAULT_FALLBACK: &str =
    "Sorry, I don't have information about that. Please contact the admin office.";

/// Reply produced for a single user query.
///
/// `confidence` is a crude coverage heuristic, not a probability: matched
/// token count divided by total query token count, rounded to 2 decimals.
/// It is 0.0 on the fallback path and in (0, 1] on a match.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub text: String,
    pub confidence: f32,
}

impl fmt::Display for Reply {
    /// Render the reply in the presentation format the shell displays:
    /// the answer text, a blank line, then the "Confidence:" label with the
    /// score at two decimal places. This exact shape is a contract with the
    /// chat history display and must stay stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nConfidence: {:.2}", self.text, self.confidence)
    }
}

/// Round a ratio to 2 decimal places for stable, display-friendly scores.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Rule-based question answerer over a compiled knowledge base.
pub struct Responder {
    kb: CompiledKnowledgeBase,
    fallback: String,
}

impl Responder {
    /// Build a responder from raw knowledge entries using the default
    /// fallback message. Compilation runs exactly once here; the knowledge
    /// base is read-only afterwards.
    pub fn new(entries: &[KnowledgeEntry]) -> Self {
        Self::with_fallback(entries, DEFAULT_FALLBACK)
    }

    /// Build a responder with a custom fallback message.
    pub fn with_fallback(entries: &[KnowledgeEntry], fallback: &str) -> Self {
        logging::init();
        let kb = CompiledKnowledgeBase::compile(entries);
        logging::debug(&format!(
            "compiled knowledge base: {} keys, max key length {}",
            kb.len(),
            kb.max_key_len()
        ));
        Self {
            kb,
            fallback: fallback.to_string(),
        }
    }

    /// Access the compiled knowledge base (used by inspection tooling).
    pub fn kb(&self) -> &CompiledKnowledgeBase {
        &self.kb
    }

    /// The fallback answer returned when nothing matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Answer a single raw user query.
    ///
    /// Pipeline: normalize the input; an empty token sequence or a miss in
    /// the knowledge base yields the fallback text with confidence 0.0, a hit
    /// yields the stored answer with confidence `matched / total` rounded to
    /// 2 decimals. This path never errors under well-formed string input; an
    /// empty knowledge base simply sends every query down the fallback path.
    pub fn respond(&self, raw_input: &str) -> Reply {
        let tokens = normalize(raw_input);
        if tokens.is_empty() {
            return Reply {
                text: self.fallback.clone(),
                confidence: 0.0,
            };
        }

        match find_match(&tokens, &self.kb) {
            Some(hit) => Reply {
                text: hit.answer,
                confidence: round2(hit.matched_len as f32 / tokens.len() as f32),
            },
            None => Reply {
                text: self.fallback.clone(),
                confidence: 0.0,
            },
        }
    }
}
