use anyhow::Result;
use campus_faq::{
    load_entries_json, normalize, save_entries_json, KnowledgeEntry, Responder, DEFAULT_FALLBACK,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Build the small fixture knowledge base shared by these tests.
fn fixture_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new("fee", "The annual fee for the AI & ML department is ₹1,50,000."),
        KnowledgeEntry::new("annual fee", "The annual fee is ₹1,50,000, payable in June."),
        KnowledgeEntry::new("library timings", "The library is open from 8 AM to 8 PM."),
        KnowledgeEntry::new("hostel", "Hostel facilities are available with Wi-Fi."),
    ]
}

/// End-to-end pipeline test: normalize -> match -> reply.
///
/// Uses the fixture knowledge base and checks the boundary behaviors the
/// responder guarantees: exact phrase matches with coverage-based confidence,
/// longest-match dominance, and fallback on unknown/empty input.
#[test]
fn respond_pipeline_boundaries() -> Result<()> {
    let responder = Responder::new(&fixture_entries());

    // Exact phrase match: the two surviving tokens are exactly the key.
    let reply = responder.respond("What are the library timings?");
    assert_eq!(reply.text, "The library is open from 8 AM to 8 PM.");
    assert_eq!(reply.confidence, 1.0);

    // Longest wins: both "fee" and "annual fee" are keys; the two-token key
    // must be returned even though the one-token key also appears.
    let reply = responder.respond("what is the annual fee");
    assert_eq!(reply.text, "The annual fee is ₹1,50,000, payable in June.");
    assert_eq!(reply.confidence, 1.0);

    // Unknown input falls back with zero confidence.
    let reply = responder.respond("tell me a joke");
    assert_eq!(reply.text, DEFAULT_FALLBACK);
    assert_eq!(reply.confidence, 0.0);

    // Empty and punctuation-only input take the same fallback path.
    for raw in ["", "!!!"] {
        let reply = responder.respond(raw);
        assert_eq!(reply.text, DEFAULT_FALLBACK);
        assert_eq!(reply.confidence, 0.0);
    }

    Ok(())
}

/// Confidence is matched-token-count over total-token-count, rounded to two
/// decimals, and a longer match never loses to a shorter one.
#[test]
fn confidence_is_monotonic_in_match_length() -> Result<()> {
    let responder = Responder::new(&fixture_entries());

    // Query with an extra non-matching token: "annual fee" covers 2 of 3.
    let reply = responder.respond("annual fee deadline");
    assert_eq!(reply.text, "The annual fee is ₹1,50,000, payable in June.");
    assert_eq!(reply.confidence, 0.67);

    // Dropping the longer key from the KB makes the shorter key match with a
    // strictly lower confidence on the same query.
    let shorter_only = vec![KnowledgeEntry::new("fee", "short answer")];
    let responder_short = Responder::new(&shorter_only);
    let reply_short = responder_short.respond("annual fee deadline");
    assert_eq!(reply_short.text, "short answer");
    assert!(reply_short.confidence < reply.confidence);

    Ok(())
}

/// `respond` is deterministic for a fixed compiled knowledge base.
#[test]
fn respond_is_deterministic() -> Result<()> {
    let responder = Responder::new(&fixture_entries());
    let queries = ["annual fee", "hostel wifi", "library timings", "gibberish"];
    for q in queries {
        let first = responder.respond(q);
        for _ in 0..10 {
            assert_eq!(responder.respond(q), first, "query {:?} was not stable", q);
        }
    }
    Ok(())
}

/// Normalization idempotence: re-normalizing the re-joined token string does
/// not change the already-normalized tokens.
#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "What are the library timings?",
        "Admissions start in May every year!",
        "hostel facilities with Wi-Fi and 24/7 security",
    ];
    for input in inputs {
        let tokens = normalize(input);
        let rejoined = tokens.join(" ");
        assert_eq!(normalize(&rejoined), tokens, "input {:?}", input);
    }
}

/// Compiling two raw phrases that normalize identically keeps only the later
/// one's answer.
#[test]
fn duplicate_normalized_keys_keep_the_later_answer() {
    let entries = vec![
        KnowledgeEntry::new("library timings", "first answer"),
        KnowledgeEntry::new("the library timing!", "second answer"),
    ];
    let responder = Responder::new(&entries);
    let reply = responder.respond("library timings");
    assert_eq!(reply.text, "second answer");
}

/// Knowledge-base file round trip: save entries, load them back, and answer
/// from the reloaded responder. A missing file loads as an empty knowledge
/// base rather than an error.
#[test]
fn kb_file_roundtrip_and_missing_file_degrade() -> Result<()> {
    let entries = fixture_entries();

    // Write to a unique temp path.
    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("campus_faq_kb_test_{}.json", stamp));
    save_entries_json(&entries, &path)?;

    // Reload and verify order and content survived.
    let loaded = load_entries_json(&path)?;
    assert_eq!(loaded, entries);

    // A responder over the reloaded entries behaves identically.
    let responder = Responder::new(&loaded);
    let reply = responder.respond("hostel");
    assert_eq!(reply.text, "Hostel facilities are available with Wi-Fi.");

    // Cleanup the temporary file; ignore errors during cleanup.
    let _ = std::fs::remove_file(&path);

    // Missing file: empty knowledge base, every query falls back.
    let mut missing = std::env::temp_dir();
    missing.push(format!("campus_faq_kb_missing_{}.json", stamp));
    let empty = load_entries_json(&missing)?;
    assert!(empty.is_empty());
    let responder = Responder::new(&empty);
    assert_eq!(responder.respond("library timings").text, DEFAULT_FALLBACK);
    assert_eq!(responder.respond("library timings").confidence, 0.0);

    Ok(())
}
