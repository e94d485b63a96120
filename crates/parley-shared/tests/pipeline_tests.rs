//! End-to-end tests for the response pipeline.

use parley_shared::flavor::{ENTHUSIASM, JAVASCRIPT_HINT, NUMBERS_HINT, PYTHON_HINT};
use parley_shared::knowledge::tables::{DEFINITIONS, EVENTS, LOCATIONS, PEOPLE};
use parley_shared::knowledge::{DIRECT_FOLLOWUP, PATTERN_FOLLOWUP};
use parley_shared::math::{format_number, DIVISION_BY_ZERO_REPLY, OUT_OF_RANGE_REPLY};
use parley_shared::search::{CLARIFY_REPLY, SEARCH_FAILURE_REPLY, SIMULATED_NOTE};
use parley_shared::{
    ReplyKind, ResponsePipeline, ScriptedRandom, StdRandom, StubSearchProvider, Topic, WebSearch,
    HISTORY_CAP,
};
use std::sync::Arc;
use std::time::Duration;

fn scripted(draws: Vec<f64>) -> ResponsePipeline {
    ResponsePipeline::with_parts(
        WebSearch::stub(Duration::ZERO),
        Box::new(ScriptedRandom::new(draws)),
    )
}

fn seeded(seed: u64) -> ResponsePipeline {
    ResponsePipeline::with_parts(WebSearch::stub(Duration::ZERO), Box::new(StdRandom::seeded(seed)))
}

fn fact(table: &[(&str, &'static str)], key: &str) -> &'static str {
    table.iter().find(|(k, _)| *k == key).map(|(_, f)| *f).unwrap()
}

#[tokio::test]
async fn test_arithmetic_contains_exact_value() {
    let cases = [
        (12.0, "+", 30.0, 42.0),
        (7.5, "-", 10.0, -2.5),
        (6.0, "*", 7.0, 42.0),
        (9.0, "/", 4.0, 2.25),
        (100.0, "/", 8.0, 12.5),
    ];
    let mut p = scripted(vec![0.0]);
    for (lhs, op, rhs, expected) in cases {
        let text = format!("{} {} {}", format_number(lhs), op, format_number(rhs));
        let response = p.respond(&text).await;
        assert_eq!(response.kind, ReplyKind::Arithmetic, "{}", text);
        assert!(
            response.text.contains(&format!("= {}", format_number(expected))),
            "{} -> {}",
            text,
            response.text
        );
    }
}

#[tokio::test]
async fn test_division_by_zero_is_refused() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("5 / 0").await;
    assert_eq!(response.kind, ReplyKind::Arithmetic);
    assert_eq!(response.text, DIVISION_BY_ZERO_REPLY);
    assert!(!response.text.contains("inf"));
}

#[tokio::test]
async fn test_percentage() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("what is 50% of 200").await;
    assert_eq!(response.kind, ReplyKind::Percentage);
    assert!(response.text.contains("100"));
}

#[tokio::test]
async fn test_photosynthesis_definition() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("what is photosynthesis").await;
    assert_eq!(response.kind, ReplyKind::Fact);
    assert!(response.text.contains(fact(DEFINITIONS, "photosynthesis")));
    assert!(response.text.ends_with(PATTERN_FOLLOWUP));
}

#[tokio::test]
async fn test_question_patterns_route_to_tables() {
    let mut p = scripted(vec![0.0]);

    let response = p.respond("Who is Marie Curie?").await;
    assert!(response.text.contains(fact(PEOPLE, "marie curie")));

    let response = p.respond("When did the Berlin Wall fall?").await;
    assert!(response.text.contains(fact(EVENTS, "berlin wall")));

    let response = p.respond("where is machu picchu").await;
    assert!(response.text.contains(fact(LOCATIONS, "machu picchu")));

    let response = p.respond("how does a rainbow form").await;
    assert_eq!(response.kind, ReplyKind::Fact);
    assert!(response.text.contains("raindrops"));
}

#[tokio::test]
async fn test_direct_lookup_uses_direct_followup() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("black hole").await;
    assert_eq!(response.kind, ReplyKind::Fact);
    assert!(response.text.ends_with(DIRECT_FOLLOWUP));
}

#[tokio::test]
async fn test_unmatched_pattern_falls_back_to_definitions() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("who is gravity").await;
    assert_eq!(response.kind, ReplyKind::Fact);
    assert!(response.text.contains(fact(DEFINITIONS, "gravity")));
    assert!(response.text.ends_with(DIRECT_FOLLOWUP));

    let response = p.respond("who is zorblax").await;
    assert_eq!(response.kind, ReplyKind::TopicReply);
}

#[tokio::test]
async fn test_hello_is_greeting() {
    let mut p = seeded(11);
    let response = p.respond("hello").await;
    assert_eq!(response.kind, ReplyKind::TopicReply);
    assert_eq!(response.topic, Some(Topic::Greeting));
    assert!(Topic::Greeting.templates().contains(&response.text.as_str()));
}

#[tokio::test]
async fn test_history_never_exceeds_cap() {
    let mut p = seeded(3);
    let inputs = ["hello", "2 + 2", "what is gravity", "tell me a joke", "search for pizza"];
    for i in 0..50 {
        p.generate_response(inputs[i % inputs.len()]).await;
        assert!(p.context().len() <= HISTORY_CAP);
    }
    assert_eq!(p.context().len(), HISTORY_CAP);
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let inputs = ["hi", "tell me a joke", "interesting fact please", "bye", "hmm", "thanks"];
    let mut a = seeded(42);
    let mut b = seeded(42);
    for text in inputs {
        assert_eq!(a.generate_response(text).await, b.generate_response(text).await);
    }
}

#[tokio::test]
async fn test_same_text_same_candidate_set() {
    let mut p = seeded(5);
    let first = p.respond("tell me a joke").await;
    let second = p.respond("tell me a joke").await;
    assert_eq!(first.topic, Some(Topic::Jokes));
    assert_eq!(first.topic, second.topic);
    for response in [first, second] {
        assert!(Topic::Jokes
            .templates()
            .iter()
            .any(|t| response.text.starts_with(t)));
    }
}

#[tokio::test]
async fn test_enthusiasm_after_three_user_turns() {
    let mut p = scripted(vec![0.0]);
    let first = p.generate_response("hello").await;
    let second = p.generate_response("hello").await;
    let third = p.generate_response("hello").await;

    let greeting = Topic::Greeting.templates()[0];
    assert_eq!(first, greeting);
    assert_eq!(second, greeting);
    assert_eq!(third, format!("{}\n\n{}", greeting, ENTHUSIASM[0]));
}

#[tokio::test]
async fn test_enthusiasm_skipped_when_draw_too_high() {
    let mut p = scripted(vec![0.9]);
    for _ in 0..5 {
        let reply = p.generate_response("hello").await;
        assert!(ENTHUSIASM.iter().all(|e| !reply.contains(e)));
    }
}

#[tokio::test]
async fn test_flavor_only_on_topic_path() {
    let mut p = scripted(vec![0.0]);
    p.generate_response("hello").await;
    p.generate_response("hello").await;
    let reply = p.generate_response("3 * 3").await;
    assert!(ENTHUSIASM.iter().all(|e| !reply.contains(e)));
}

#[tokio::test]
async fn test_programming_hints() {
    let mut p = scripted(vec![0.0]);
    let reply = p.generate_response("I'm learning javascript and python").await;
    assert!(reply.contains(JAVASCRIPT_HINT));
    assert!(!reply.contains(PYTHON_HINT));

    let reply = p.generate_response("python programming").await;
    assert!(reply.contains(PYTHON_HINT));
}

#[tokio::test]
async fn test_math_topic_numbers_hint() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("can you solve 3 equations").await;
    assert_eq!(response.topic, Some(Topic::Math));
    assert!(response.text.contains(NUMBERS_HINT));
}

#[tokio::test]
async fn test_search_stub_reply() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("search for pizza near me").await;
    assert_eq!(response.kind, ReplyKind::SearchStub);
    assert!(response.text.contains("\"pizza near me\""));
    assert!(response.text.contains(SIMULATED_NOTE));
}

#[tokio::test]
async fn test_clarification_example_reaches_search() {
    let example = CLARIFY_REPLY.split('"').nth(1).unwrap();
    let mut p = scripted(vec![0.0]);
    let response = p.respond(example).await;
    assert_eq!(response.kind, ReplyKind::SearchStub);
}

#[tokio::test]
async fn test_oversized_numbers_are_refused() {
    let big = "9".repeat(400);
    let mut p = scripted(vec![0.0]);
    let response = p.respond(&format!("{} - {}", big, big)).await;
    assert_eq!(response.kind, ReplyKind::Arithmetic);
    assert_eq!(response.text, OUT_OF_RANGE_REPLY);
}

#[tokio::test]
async fn test_search_failure_is_apology() {
    let search = WebSearch::new(Arc::new(StubSearchProvider::offline(Duration::ZERO)));
    let mut p = ResponsePipeline::with_parts(search, Box::new(ScriptedRandom::constant(0.0)));
    let reply = p.generate_response("look up the best pizza in town").await;
    assert_eq!(reply, SEARCH_FAILURE_REPLY);
}

#[tokio::test]
async fn test_stage_priority() {
    let mut p = scripted(vec![0.0]);
    // math before search
    assert_eq!(p.respond("search for 2 * 3").await.kind, ReplyKind::Arithmetic);
    // knowledge before search
    let response = p.respond("look up photosynthesis").await;
    assert_eq!(response.kind, ReplyKind::Fact);
    assert!(response.text.ends_with(DIRECT_FOLLOWUP));
}

#[tokio::test]
async fn test_blank_input_still_answers() {
    let mut p = scripted(vec![0.0]);
    let response = p.respond("   ").await;
    assert_eq!(response.topic, Some(Topic::Default));
    assert!(!response.text.is_empty());
}

#[tokio::test]
async fn test_stub_latency_is_awaited() {
    let search = WebSearch::stub(Duration::from_millis(20));
    let mut p = ResponsePipeline::with_parts(search, Box::new(ScriptedRandom::constant(0.0)));
    let started = std::time::Instant::now();
    let response = p.respond("google rust async").await;
    assert_eq!(response.kind, ReplyKind::SearchStub);
    assert!(started.elapsed() >= Duration::from_millis(20));
}
