//! Shared types and the response pipeline for Parley.
//!
//! The pipeline turns a free-text user message into a reply string by trying
//! a fixed chain of deterministic responders: arithmetic, knowledge base,
//! web search, then topic templates.

pub mod config;
pub mod context;
pub mod error;
pub mod flavor;
pub mod knowledge;
pub mod math;
pub mod pipeline;
pub mod random;
pub mod search;
pub mod topics;

pub use config::{ChatSettings, ParleyConfig, PipelineConfig, ResponseSpeed, SearchConfig};
pub use context::{ConversationContext, Role, Turn, HISTORY_CAP};
pub use error::ParleyError;
pub use knowledge::KnowledgeBase;
pub use math::MathEvaluator;
pub use pipeline::{Reply, ReplyKind, Response, ResponsePipeline};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use search::{
    HttpSearchProvider, SearchError, SearchProvider, StubSearchProvider, WebSearch,
};
pub use topics::{classify, render, Topic};
