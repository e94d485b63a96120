//! Extra sentences appended to topic-template replies.
//!
//! Additions never replace the base reply. Each one is separated from the
//! text before it by a blank line.

use crate::context::ConversationContext;
use crate::random::RandomSource;
use crate::topics::Topic;

pub const JAVASCRIPT_HINT: &str =
    "JavaScript is a versatile language! Are you working on web development, Node.js, or something else?";

pub const PYTHON_HINT: &str =
    "Python is excellent for beginners and experts alike! What kind of project are you working on?";

pub const NUMBERS_HINT: &str =
    "I see you mentioned some numbers! Feel free to share the specific calculation you need help with.";

pub const ENTHUSIASM: &[&str] = &[
    "I'm really enjoying our conversation! 😊",
    "You ask great questions!",
    "This is a fun discussion!",
    "I love chatting with curious people like you!",
];

/// Chance of an enthusiasm line once the user is engaged
pub const ENTHUSIASM_PROBABILITY: f64 = 0.3;

/// Turns inspected when judging engagement
const ENGAGEMENT_WINDOW: usize = 6;

/// More than this many user turns in the window counts as engaged
const ENGAGEMENT_THRESHOLD: usize = 2;

/// Topic-specific hint for the message, if any
pub fn topic_hint(topic: Topic, text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    match topic {
        Topic::Programming if lower.contains("javascript") => Some(JAVASCRIPT_HINT),
        Topic::Programming if lower.contains("python") => Some(PYTHON_HINT),
        _ => None,
    }
}

/// Nudge toward the calculator when a math message carries digits
pub fn numbers_hint(topic: Topic, text: &str) -> Option<&'static str> {
    if topic == Topic::Math && text.chars().any(|c| c.is_ascii_digit()) {
        Some(NUMBERS_HINT)
    } else {
        None
    }
}

/// Enthusiasm line drawn with probability `ENTHUSIASM_PROBABILITY` once the
/// recent history holds more than two user turns
pub fn enthusiasm(context: &ConversationContext, rng: &mut dyn RandomSource) -> Option<&'static str> {
    if context.recent_user_turns(ENGAGEMENT_WINDOW) <= ENGAGEMENT_THRESHOLD {
        return None;
    }
    if rng.next_f64() >= ENTHUSIASM_PROBABILITY {
        return None;
    }
    Some(ENTHUSIASM[rng.pick_index(ENTHUSIASM.len())])
}

/// Apply every enrichment to a base template reply
pub fn enrich(
    base: &str,
    topic: Topic,
    text: &str,
    context: &ConversationContext,
    rng: &mut dyn RandomSource,
) -> String {
    let mut reply = base.to_string();
    let additions = [
        topic_hint(topic, text),
        numbers_hint(topic, text),
        enthusiasm(context, rng),
    ];
    for addition in additions.into_iter().flatten() {
        reply.push_str("\n\n");
        reply.push_str(addition);
    }
    reply
}
