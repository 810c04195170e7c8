//! Library entry point for the campus enquiry responder.
//!
//! This file re-exports the core types and provides convenient helpers to
//! load and save knowledge-base files and chat transcripts as JSON. The
//! knowledge-base file format is a single JSON object mapping raw phrases to
//! answer text, simple enough to hand-edit.
//
// Public modules
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod responder;
pub mod utils;

// Re‑export primary types for ergonomic use.
pub use matcher::{find_match, CompiledKnowledgeBase, MatchResult};
pub use model::{
    conversation_turn::{ConversationTurn, Role},
    knowledge_entry::KnowledgeEntry,
};
pub use normalize::normalize;
pub use responder::{Reply, Responder, DEFAULT_FALLBACK};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

/// Load knowledge entries from a JSON file.
///
/// The expected format is a single JSON object whose keys are raw phrases and
/// whose values are answer strings:
///
/// ```json
/// { "library timings": "The library is open from 8 AM to 8 PM." }
/// ```
///
/// Document order is preserved, which matters when two phrases normalize to
/// the same token tuple: compilation applies last-write-wins in entry order.
///
/// # Behavior
///
/// - A missing file is not an error: it degrades to `Ok(vec![])`, so a
///   responder built from it answers every query with the fallback.
/// - A present but unparsable file is a real error, surfaced with context;
///   silently discarding a typo'd hand-edited file would hide the problem.
pub fn load_entries_json(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("opening knowledge base file {}", path.display()))
        }
    };

    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing knowledge base file {}", path.display()))?;

    let mut entries = Vec::with_capacity(map.len());
    for (phrase, value) in map {
        let answer = value.as_str().ok_or_else(|| {
            anyhow::anyhow!(
                "knowledge base entry {:?} in {} has a non-string answer",
                phrase,
                path.display()
            )
        })?;
        entries.push(KnowledgeEntry::new(phrase, answer));
    }
    Ok(entries)
}

/// Save knowledge entries to a JSON file in the same object format that
/// `load_entries_json` reads, preserving entry order.
pub fn save_entries_json(entries: &[KnowledgeEntry], path: &Path) -> Result<()> {
    let mut map = serde_json::Map::with_capacity(entries.len());
    for entry in entries {
        map.insert(
            entry.phrase.clone(),
            serde_json::Value::String(entry.answer.clone()),
        );
    }
    let file = File::create(path)
        .with_context(|| format!("creating knowledge base file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &map)
        .with_context(|| format!("writing knowledge base file {}", path.display()))?;
    Ok(())
}

/// Save a chat transcript (append-only turn history) as a JSON array.
pub fn save_transcript_json(turns: &[ConversationTurn], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating transcript {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), turns)
        .with_context(|| format!("writing transcript {}", path.display()))?;
    Ok(())
}

/// Load a chat transcript previously written with `save_transcript_json`.
pub fn load_transcript_json(path: &Path) -> Result<Vec<ConversationTurn>> {
    let file =
        File::open(path).with_context(|| format!("opening transcript {}", path.display()))?;
    let turns: Vec<ConversationTurn> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing transcript {}", path.display()))?;
    Ok(turns)
}
