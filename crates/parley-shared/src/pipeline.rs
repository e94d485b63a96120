//! Response pipeline - ordered responders with short-circuit.
//!
//! Stage order is fixed: math, knowledge base, web search, topic templates.
//! The first stage that produces a reply wins; the topic stage always does.
//! Only topic replies receive flavor text.
//!
//! The pipeline owns the conversation history and mutates it through
//! `&mut self`, so calls on one conversation cannot overlap and replies are
//! recorded in call order.

use crate::config::PipelineConfig;
use crate::context::{ConversationContext, Turn};
use crate::flavor;
use crate::knowledge::KnowledgeBase;
use crate::math::MathEvaluator;
use crate::random::{RandomSource, StdRandom};
use crate::search::{SearchError, WebSearch};
use crate::topics::{self, Topic};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Classification of a produced reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Arithmetic(String),
    Percentage(String),
    Fact(String),
    SearchStub(String),
    TopicReply { topic: Topic, text: String },
}

/// Which responder produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Arithmetic,
    Percentage,
    Fact,
    SearchStub,
    TopicReply,
}

impl std::fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Arithmetic => "arithmetic",
            Self::Percentage => "percentage",
            Self::Fact => "fact",
            Self::SearchStub => "search_stub",
            Self::TopicReply => "topic_reply",
        };
        write!(f, "{}", s)
    }
}

impl Reply {
    pub fn kind(&self) -> ReplyKind {
        match self {
            Self::Arithmetic(_) => ReplyKind::Arithmetic,
            Self::Percentage(_) => ReplyKind::Percentage,
            Self::Fact(_) => ReplyKind::Fact,
            Self::SearchStub(_) => ReplyKind::SearchStub,
            Self::TopicReply { .. } => ReplyKind::TopicReply,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Arithmetic(text)
            | Self::Percentage(text)
            | Self::Fact(text)
            | Self::SearchStub(text)
            | Self::TopicReply { text, .. } => text,
        }
    }

    pub fn topic(&self) -> Option<Topic> {
        match self {
            Self::TopicReply { topic, .. } => Some(*topic),
            _ => None,
        }
    }
}

/// Reply handed back to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub kind: ReplyKind,
    /// Set when the topic stage answered
    pub topic: Option<Topic>,
}

impl From<Reply> for Response {
    fn from(reply: Reply) -> Self {
        let kind = reply.kind();
        let topic = reply.topic();
        let text = match reply {
            Reply::Arithmetic(text)
            | Reply::Percentage(text)
            | Reply::Fact(text)
            | Reply::SearchStub(text)
            | Reply::TopicReply { text, .. } => text,
        };
        Self { text, kind, topic }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Math,
    Knowledge,
    WebSearch,
    Topic,
}

const STAGES: [Stage; 4] = [Stage::Math, Stage::Knowledge, Stage::WebSearch, Stage::Topic];

/// Ties the responders and the conversation history together
pub struct ResponsePipeline {
    context: ConversationContext,
    math: MathEvaluator,
    knowledge: KnowledgeBase,
    search: WebSearch,
    rng: Box<dyn RandomSource>,
}

impl Default for ResponsePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponsePipeline {
    /// Stub search with default latency, entropy-seeded randomness
    pub fn new() -> Self {
        Self::with_parts(WebSearch::default(), Box::new(StdRandom::from_entropy()))
    }

    pub fn with_parts(search: WebSearch, rng: Box<dyn RandomSource>) -> Self {
        let context = ConversationContext::new();
        info!(
            session = %context.session_id(),
            search = search.provider_name(),
            "conversation started"
        );
        Self {
            context,
            math: MathEvaluator::new(),
            knowledge: KnowledgeBase::new(),
            search,
            rng,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, SearchError> {
        let search = WebSearch::from_config(&config.search)?;
        Ok(Self::with_parts(search, Box::new(StdRandom::from_entropy())))
    }

    /// Replace the knowledge base
    pub fn with_knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Replace the randomness source
    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Read-only view of the history
    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Reply text for one user message. Never empty.
    pub async fn generate_response(&mut self, text: &str) -> String {
        self.respond(text).await.text
    }

    /// Reply for one user message with its classification
    pub async fn respond(&mut self, text: &str) -> Response {
        self.context.push(Turn::user(text));

        let mut reply = None;
        for stage in STAGES {
            if let Some(hit) = self.run_stage(stage, text).await {
                debug!(
                    session = %self.context.session_id(),
                    ?stage,
                    kind = %hit.kind(),
                    "stage answered"
                );
                reply = Some(hit);
                break;
            }
        }
        let reply = reply.unwrap_or_else(|| self.topic_reply(text));

        self.context.push(Turn::bot(reply.text()));
        reply.into()
    }

    async fn run_stage(&mut self, stage: Stage, text: &str) -> Option<Reply> {
        match stage {
            Stage::Math => {
                let calc = self.math.detect(text)?;
                let rendered = calc.render();
                Some(if calc.is_percentage() {
                    Reply::Percentage(rendered)
                } else {
                    Reply::Arithmetic(rendered)
                })
            }
            Stage::Knowledge => self.knowledge.query(text).map(Reply::Fact),
            Stage::WebSearch => self.search.respond(text).await.map(Reply::SearchStub),
            Stage::Topic => Some(self.topic_reply(text)),
        }
    }

    fn topic_reply(&mut self, text: &str) -> Reply {
        let topic = topics::classify(text);
        let base = topics::render(topic, self.rng.as_mut());
        let text = flavor::enrich(base, topic, text, &self.context, self.rng.as_mut());
        debug!(%topic, "topic reply");
        Reply::TopicReply { topic, text }
    }
}
