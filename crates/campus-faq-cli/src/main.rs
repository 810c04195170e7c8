//! CLI chat shell for the campus enquiry responder.
//!
//! Subcommands:
//!  - `chat` : interactive REPL with an append-only turn history.
//!  - `ask`  : answer a single query and exit (optionally as JSON).
//!  - `kb`   : inspect the compiled knowledge base.
//!
//! Design goals:
//!  - Small, testable, and clear CLI surface.
//!  - Use the library crate (`campus_faq`) for normalization and matching.
//!  - Prefer `anyhow::Result` for application-level error handling.
//!
//! Usage examples:
//!  cargo run -p campus-faq-cli -- chat
//!  cargo run -p campus-faq-cli -- ask --query "What are the library timings?"
//!  cargo run -p campus-faq-cli -- kb --json
//!
//! Notes:
//!  - The shell owns all presentation state (welcome banner, turn history,
//!    transcript persistence). The core only ever sees a query string and
//!    returns a (text, confidence) reply.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

mod default_kb;

use crate::default_kb::default_entries;

/// Local library crate export (hyphen -> underscore).
use campus_faq::{
    find_match, load_entries_json, normalize, save_transcript_json, ConversationTurn,
    KnowledgeEntry, Responder, Role,
};

/// CLI entrypoint.
#[derive(Parser)]
#[command(
    name = "campus-faq",
    about = "Campus FAQ CLI — rule-based enquiry chat",
    version
)]
struct Cli {
    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session.
    Chat(ChatArgs),

    /// Answer a single query and exit.
    Ask(AskArgs),

    /// Inspect the compiled knowledge base.
    Kb(KbArgs),
}

/// Arguments for the `chat` subcommand.
#[derive(Args, Debug)]
struct ChatArgs {
    /// Path to a JSON knowledge base file (replaces the built-in entries).
    /// A missing file degrades to an empty knowledge base.
    #[arg(short, long, value_name = "PATH")]
    kb: Option<PathBuf>,

    /// Override the fallback answer used when nothing matches.
    #[arg(long, value_name = "TEXT")]
    fallback: Option<String>,

    /// Write the session turn history to this path as JSON on exit.
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,
}

/// Arguments for the `ask` subcommand.
#[derive(Args, Debug)]
struct AskArgs {
    /// Query string to answer.
    #[arg(short, long)]
    query: String,

    /// Path to a JSON knowledge base file (replaces the built-in entries).
    #[arg(short, long, value_name = "PATH")]
    kb: Option<PathBuf>,

    /// Override the fallback answer used when nothing matches.
    #[arg(long, value_name = "TEXT")]
    fallback: Option<String>,

    /// Output the result as JSON to stdout.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `kb` subcommand.
#[derive(Args, Debug)]
struct KbArgs {
    /// Path to a JSON knowledge base file (replaces the built-in entries).
    #[arg(short, long, value_name = "PATH")]
    kb: Option<PathBuf>,

    /// Output as JSON.
    #[arg(long)]
    json: bool,
}

/// Application entry point.
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat(args) => run_chat(args),
        Commands::Ask(args) => run_ask(args),
        Commands::Kb(args) => run_kb(args),
    }
}

/// Load knowledge entries from `--kb` when given, otherwise use the built-in
/// campus entries.
fn load_entries(kb_path: Option<&PathBuf>) -> Result<Vec<KnowledgeEntry>> {
    match kb_path {
        Some(path) => load_entries_json(path)
            .with_context(|| format!("loading knowledge base from {}", path.display())),
        None => Ok(default_entries()),
    }
}

/// Build a responder from CLI arguments (knowledge base + optional fallback).
fn build_responder(kb_path: Option<&PathBuf>, fallback: Option<&str>) -> Result<Responder> {
    let entries = load_entries(kb_path)?;
    Ok(match fallback {
        Some(text) => Responder::with_fallback(&entries, text),
        None => Responder::new(&entries),
    })
}

/// Run the `chat` subcommand: a line-oriented REPL.
///
/// Each iteration appends a user turn, calls `respond`, appends an assistant
/// turn whose content is the rendered reply (answer text, blank line, then
/// the "Confidence:" score), and prints it. The history is append-only and
/// owned entirely by this shell; the core never reads it.
fn run_chat(args: ChatArgs) -> Result<()> {
    let entries = load_entries(args.kb.as_ref())?;
    let topics: Vec<&str> = entries.iter().map(|e| e.phrase.as_str()).collect();
    let responder = match args.fallback.as_deref() {
        Some(text) => Responder::with_fallback(&entries, text),
        None => Responder::new(&entries),
    };

    println!("Campus FAQ — your virtual assistant for college enquiries.");
    if topics.is_empty() {
        println!("(knowledge base is empty; every question will get the fallback answer)");
    } else {
        println!("You can ask about: {}.", topics.join(", "));
    }
    println!("Type your question, or 'quit' to exit.\n");

    let mut history: Vec<ConversationTurn> = Vec::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("reading from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            print!("> ");
            stdout.flush()?;
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        history.push(ConversationTurn::now(Role::User, input));

        let reply = responder.respond(input);
        let rendered = reply.to_string();
        history.push(ConversationTurn::now(Role::Assistant, rendered.clone()));

        println!("{}\n", rendered);
        print!("> ");
        stdout.flush()?;
    }

    if let Some(path) = args.transcript {
        save_transcript_json(&history, &path)
            .with_context(|| format!("saving transcript to {}", path.display()))?;
        println!("Saved {} turns to {}", history.len(), path.display());
    }

    Ok(())
}

/// Run the `ask` subcommand.
fn run_ask(args: AskArgs) -> Result<()> {
    let responder = build_responder(args.kb.as_ref(), args.fallback.as_deref())?;
    let reply = responder.respond(&args.query);

    if args.json {
        let tokens = normalize(&args.query);
        let matched = find_match(&tokens, responder.kb()).is_some();
        let out = json!({
            "query": args.query,
            "tokens": tokens,
            "answer": reply.text,
            "confidence": round2_f64(reply.confidence),
            "matched": matched,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", reply);
    }

    Ok(())
}

/// Run the `kb` subcommand: show the compiled knowledge base.
fn run_kb(args: KbArgs) -> Result<()> {
    let responder = build_responder(args.kb.as_ref(), None)?;
    let kb = responder.kb();

    // Collect and sort keys for deterministic output.
    let mut compiled: Vec<(String, String)> = kb
        .iter()
        .map(|(key, answer)| (key.join(" "), answer.to_string()))
        .collect();
    compiled.sort_by(|a, b| a.0.cmp(&b.0));

    if args.json {
        let keys: Vec<serde_json::Value> = compiled
            .iter()
            .map(|(key, answer)| json!({ "key": key, "answer": answer }))
            .collect();
        let out = json!({
            "entries": kb.len(),
            "max_key_len": kb.max_key_len(),
            "keys": keys,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "Compiled knowledge base: {} keys, longest key = {} tokens",
            kb.len(),
            kb.max_key_len()
        );
        for (key, answer) in compiled {
            println!("  [{}] -> {}", key, answer);
        }
    }

    Ok(())
}

/// Round a score to 2 decimals as f64 so JSON output shows e.g. 0.33, not the
/// widened binary expansion of the f32.
fn round2_f64(value: f32) -> f64 {
    (value as f64 * 100.0).round() / 100.0
}
