/*
campus-faq/crates/campus-faq-lib/src/normalize.rs

Text normalization for the enquiry responder: lowercasing, word tokenization,
stopword removal and a light dictionary-form (noun) lemmatizer. The single
entrypoint `normalize` turns raw user text into the ordered token sequence the
matcher consumes.

Design notes:
- `normalize` is a total function: any input (empty, punctuation-only,
  malformed) yields a possibly-empty Vec<String>, never an error.
- Token order is preserved and duplicates are allowed; the matcher relies on
  contiguity, so no sorting or de-duplication happens here.
- The same function is used for knowledge-base phrases and for user queries,
  so both sides of a lookup always agree on token shape.
*/

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Word tokenizer pattern: maximal runs of Unicode letters and digits.
/// Punctuation and whitespace can never appear inside a token, which also
/// covers the "drop non-alphanumeric tokens" step in one pass.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("token pattern is valid"));

/// Fixed English stopword set (surface forms are checked before lemmatization).
///
/// The list follows the standard English stopword inventory used by common NLP
/// toolkits, including the clitic fragments (`s`, `t`, `don`, `doesn`, ...)
/// that word tokenization produces from contractions.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let words = [
        // Pronouns
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those",
        // Auxiliary and linking verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "can", "will", "just", "should", "now",
        // Articles and conjunctions
        "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
        // Prepositions
        "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
        "on", "off", "over", "under", "again", "further", "then", "once",
        // Adverbs and quantifiers
        "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very",
        // Contraction fragments left over after tokenization
        "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "don", "ain", "aren", "couldn", "didn",
        "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
        "shouldn", "wasn", "weren", "won", "wouldn",
    ];
    words.into_iter().collect()
});

/// Irregular forms the suffix rules would get wrong, mapped to their lemma.
/// Entries mapping a word to itself pin nouns whose trailing `s` is not a
/// plural marker (e.g. "news").
static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("news", "news"),
    ])
});

/// Reduce a single lowercase token to its dictionary base form using the
/// default (noun) rules: irregular table first, then ordered suffix rules.
///
/// The rules intentionally mirror dictionary-style noun lemmatization without
/// part-of-speech disambiguation: "timings" -> "timing", "libraries" ->
/// "library", "classes" -> "class". Words the rules do not recognize are
/// returned unchanged. Applying `lemmatize` to its own output is a no-op,
/// which the normalization-idempotence property depends on.
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = IRREGULAR_NOUNS.get(token) {
        return (*lemma).to_string();
    }

    let len = token.len();

    // "libraries" -> "library", "facilities" -> "facility"
    if len > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        // "shelves" -> "shelf"
        if let Some(stem) = token.strip_suffix("ves") {
            return format!("{}f", stem);
        }
    }

    // "classes" -> "class", "boxes" -> "box", "branches" -> "branch"
    for es_suffix in ["sses", "xes", "ches", "shes", "zes"] {
        if len > es_suffix.len() && token.ends_with(es_suffix) {
            return token[..len - 2].to_string();
        }
    }

    // Plain plural: "timings" -> "timing", "fees" -> "fee". Guard against
    // lemmas that legitimately end in s ("class", "campus", "thesis") and
    // very short words ("gas", "bus").
    if len > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..len - 1].to_string();
    }

    token.to_string()
}

/// Normalize raw text into the canonical token sequence.
///
/// Steps, in order:
/// 1. Lowercase the input.
/// 2. Tokenize into alphanumeric word runs (punctuation is discarded).
/// 3. Drop tokens present in the fixed English stopword set.
/// 4. Lemmatize each surviving token to its base form.
///
/// # Returns
///
/// An ordered, possibly-empty sequence of tokens. Degenerate input (empty
/// string, pure punctuation, stopwords only) yields an empty vector rather
/// than an error.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|tok| !STOPWORDS.contains(*tok))
        .map(lemmatize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = normalize("What are the LIBRARY timings?!");
        assert_eq!(tokens, vec!["library", "timing"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_inputs() {
        assert!(normalize("").is_empty());
        assert!(normalize("!!! ... ???").is_empty());
        // Stopwords-only input normalizes to nothing as well.
        assert!(normalize("what is the").is_empty());
    }

    #[test]
    fn test_contractions_tokenize_to_stopword_fragments() {
        // "don't" splits into "don" + "t", both of which are stopwords.
        let tokens = normalize("don't you have hostel rooms?");
        assert_eq!(tokens, vec!["hostel", "room"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokens = normalize("fee fee and more fee");
        assert_eq!(tokens, vec!["fee", "fee", "fee"]);
    }

    #[test]
    fn test_lemmatizer_suffix_rules() {
        assert_eq!(lemmatize("timings"), "timing");
        assert_eq!(lemmatize("libraries"), "library");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("branches"), "branch");
        assert_eq!(lemmatize("fees"), "fee");
        assert_eq!(lemmatize("course"), "course");
    }

    #[test]
    fn test_lemmatizer_guards_and_irregulars() {
        // Lemmas ending in ss/us/is are left alone.
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("campus"), "campus");
        assert_eq!(lemmatize("thesis"), "thesis");
        // Short words are left alone.
        assert_eq!(lemmatize("bus"), "bus");
        // Irregular plural table wins over suffix rules.
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("women"), "woman");
        assert_eq!(lemmatize("news"), "news");
    }

    #[test]
    fn test_lemmatize_is_a_fixpoint() {
        for word in ["timings", "libraries", "classes", "children", "hostel"] {
            let once = lemmatize(word);
            assert_eq!(lemmatize(&once), once, "lemma of {:?} is not stable", word);
        }
    }

    #[test]
    fn test_normalize_is_idempotent_on_rejoined_tokens() {
        let first = normalize("What are the library timings on weekdays?");
        let rejoined = first.join(" ");
        let second = normalize(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        // Non-ASCII alphanumerics are kept as tokens; symbols are dropped.
        let tokens = normalize("fee is ₹1,50,000 — écoles");
        assert!(tokens.contains(&"école".to_string()) || tokens.contains(&"écoles".to_string()));
        assert!(tokens.iter().all(|t| t.chars().all(char::is_alphanumeric)));
    }
}
