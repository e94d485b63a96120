//! Static knowledge base with question-pattern handlers.
//!
//! A question prefix ("who is", "when did", ...) picks which fact table to
//! search. When no prefix matches, or its table has nothing, the whole
//! message is tried against the definitions.
//!
//! Partial matches resolve by table order. When several keys overlap (one key
//! is a substring of another, or of the query) the earliest entry wins.

pub mod tables;

use tracing::debug;

pub type FactTable = &'static [(&'static str, &'static str)];

/// Follow-up appended to facts found through a question pattern
pub const PATTERN_FOLLOWUP: &str = "💡 Would you like to know more about this topic?";

/// Follow-up appended to facts found by direct lookup
pub const DIRECT_FOLLOWUP: &str = "📚 Is there anything else you'd like to learn about?";

/// Shortest query allowed to match as a substring of a longer key
const MIN_PARTIAL_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "of", "about", "me", "tell", "explain", "what",
    "who", "when", "where", "how", "does", "do", "did", "to", "in", "on", "for", "please", "can",
    "you", "work", "works", "happen", "happened", "located", "mean", "means",
];

/// Which fact table a question pattern routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Definition,
    Person,
    Event,
    Process,
    Location,
}

/// Question prefixes in match order
pub const QUESTION_PATTERNS: &[(&str, QuestionKind)] = &[
    ("what is", QuestionKind::Definition),
    ("tell me about", QuestionKind::Definition),
    ("explain", QuestionKind::Definition),
    ("who is", QuestionKind::Person),
    ("when did", QuestionKind::Event),
    ("how does", QuestionKind::Process),
    ("where is", QuestionKind::Location),
];

/// Key to fact lookup over the five static tables
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    definitions: FactTable,
    people: FactTable,
    events: FactTable,
    processes: FactTable,
    locations: FactTable,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            definitions: tables::DEFINITIONS,
            people: tables::PEOPLE,
            events: tables::EVENTS,
            processes: tables::PROCESSES,
            locations: tables::LOCATIONS,
        }
    }
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Knowledge base over custom definition entries only
    pub fn with_definitions(definitions: FactTable) -> Self {
        Self {
            definitions,
            people: &[],
            events: &[],
            processes: &[],
            locations: &[],
        }
    }

    /// Answer a message from the fact tables, or None to fall through
    pub fn query(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();

        for (prefix, kind) in QUESTION_PATTERNS {
            if !lower.contains(prefix) {
                continue;
            }
            let remainder = lower.replacen(prefix, "", 1);
            if let Some(fact) = self.lookup(*kind, &remainder) {
                debug!(pattern = prefix, ?kind, "knowledge pattern hit");
                return Some(format!("{}\n\n{}", fact, PATTERN_FOLLOWUP));
            }
        }

        let fact = self.lookup(QuestionKind::Definition, &lower)?;
        debug!("knowledge direct hit");
        Some(format!("{}\n\n{}", fact, DIRECT_FOLLOWUP))
    }

    /// Raw fact for a question kind, without follow-up text
    pub fn lookup(&self, kind: QuestionKind, subject: &str) -> Option<&'static str> {
        let cleaned = clean(subject);
        if cleaned.is_empty() {
            return None;
        }

        match kind {
            QuestionKind::Definition => phrase_lookup(self.definitions, &cleaned),
            QuestionKind::Person => phrase_lookup(self.people, &cleaned),
            QuestionKind::Location => phrase_lookup(self.locations, &cleaned),
            QuestionKind::Event => {
                let phrase = cleaned
                    .split_whitespace()
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(" ");
                keyed_lookup(self.events, &cleaned, &phrase)
            }
            QuestionKind::Process => {
                let first = cleaned.split_whitespace().next().unwrap_or_default();
                keyed_lookup(self.processes, &cleaned, first)
            }
        }
    }
}

/// Lowercase, drop punctuation and stop words
pub fn clean(text: &str) -> String {
    let spaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact key match first, then bidirectional containment in table order
fn phrase_lookup(table: FactTable, cleaned: &str) -> Option<&'static str> {
    if let Some((_, fact)) = table.iter().find(|(key, _)| clean(key) == cleaned) {
        return Some(fact);
    }
    keyed_lookup(table, cleaned, cleaned)
}

/// First entry whose key contains `needle`, or whose key appears in `cleaned`
fn keyed_lookup(table: FactTable, cleaned: &str, needle: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| {
            let key = clean(key);
            if key.is_empty() {
                return false;
            }
            cleaned.contains(&key) || (needle.len() >= MIN_PARTIAL_LEN && key.contains(needle))
        })
        .map(|(_, fact)| *fact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_stop_words_and_punctuation() {
        assert_eq!(clean("What is the Eiffel Tower?"), "eiffel tower");
        assert_eq!(clean("  tell me ABOUT DNA!! "), "dna");
        assert_eq!(clean("the of a"), "");
    }

    #[test]
    fn test_definition_exact() {
        let kb = KnowledgeBase::new();
        let fact = kb.lookup(QuestionKind::Definition, "photosynthesis").unwrap();
        assert!(fact.starts_with("**Photosynthesis**"));
    }

    #[test]
    fn test_definition_partial_both_directions() {
        let kb = KnowledgeBase::new();
        // query contains key
        let fact = kb
            .lookup(QuestionKind::Definition, "supermassive black hole")
            .unwrap();
        assert!(fact.contains("event horizon"));
        // key contains query
        let fact = kb.lookup(QuestionKind::Definition, "quantum").unwrap();
        assert!(fact.contains("qubits"));
    }

    #[test]
    fn test_short_query_does_not_partially_match() {
        let kb = KnowledgeBase::new();
        assert!(kb.lookup(QuestionKind::Definition, "hi").is_none());
    }

    #[test]
    fn test_person_partial_name() {
        let kb = KnowledgeBase::new();
        let fact = kb.lookup(QuestionKind::Person, "einstein").unwrap();
        assert!(fact.contains("relativity"));
    }

    #[test]
    fn test_event_two_word_phrase() {
        let kb = KnowledgeBase::new();
        let fact = kb
            .lookup(QuestionKind::Event, "the moon landing happen")
            .unwrap();
        assert!(fact.contains("1969"));

        let fact = kb
            .lookup(QuestionKind::Event, "the declaration of independence get signed")
            .unwrap();
        assert!(fact.contains("1776"));
    }

    #[test]
    fn test_process_first_word() {
        let kb = KnowledgeBase::new();
        let fact = kb.lookup(QuestionKind::Process, "a rainbow form").unwrap();
        assert!(fact.contains("raindrops"));
    }

    #[test]
    fn test_location() {
        let kb = KnowledgeBase::new();
        let fact = kb
            .lookup(QuestionKind::Location, "the great wall of china")
            .unwrap();
        assert!(fact.contains("northern China"));
    }

    #[test]
    fn test_query_pattern_hit_uses_pattern_followup() {
        let kb = KnowledgeBase::new();
        let reply = kb.query("What is photosynthesis?").unwrap();
        assert!(reply.starts_with("**Photosynthesis**"));
        assert!(reply.ends_with(PATTERN_FOLLOWUP));
    }

    #[test]
    fn test_query_pattern_miss_falls_back_to_definitions() {
        let kb = KnowledgeBase::new();
        let gravity = kb.lookup(QuestionKind::Definition, "gravity").unwrap();
        let reply = kb.query("who is gravity").unwrap();
        assert_eq!(reply, format!("{}\n\n{}", gravity, DIRECT_FOLLOWUP));
    }

    #[test]
    fn test_query_pattern_and_fallback_miss() {
        let kb = KnowledgeBase::new();
        assert!(kb.query("who is zorblax").is_none());
        assert!(kb.query("hello there").is_none());
    }

    #[test]
    fn test_table_order_resolves_overlap() {
        const OVERLAPPING: &[(&str, &str)] = &[("star", "first"), ("star cluster", "second")];
        let kb = KnowledgeBase::with_definitions(OVERLAPPING);
        // exact match still wins over earlier partial
        assert_eq!(kb.lookup(QuestionKind::Definition, "star cluster"), Some("second"));
        // partial resolves to the earliest entry
        assert_eq!(kb.lookup(QuestionKind::Definition, "big star clusters"), Some("first"));
    }
}
