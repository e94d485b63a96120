//! Web search stage.
//!
//! Detects search intent in a message, extracts the query, and hands it to a
//! `SearchProvider`. Two providers exist:
//! - `StubSearchProvider`: deterministic canned results after a fixed delay.
//!   It performs no network access and every block it returns says so.
//! - `HttpSearchProvider`: real lookups against a DuckDuckGo-style instant
//!   answer API.
//!
//! Provider errors never escape this module: they are logged and replaced
//! with a fixed apology.

use crate::config::{SearchConfig, SearchProviderKind, DEFAULT_STUB_LATENCY_MS};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Asked when the query left after stripping triggers is too short
pub const CLARIFY_REPLY: &str =
    "🔍 What would you like me to search for? Try something like \"search for pizza near me\".";

/// Returned whenever a provider fails
pub const SEARCH_FAILURE_REPLY: &str =
    "😕 Sorry, I couldn't complete that search right now. Try asking me directly, the answer might be in my knowledge base!";

/// Footer on every stub result block
pub const SIMULATED_NOTE: &str =
    "*Simulated search results: no live data was fetched. Check the sources above for current information.*";

/// Minimum query length in characters
const MIN_QUERY_LEN: usize = 2;

/// Explicit search intent
static EXPLICIT_TRIGGERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\bsearch\s+(?:the\s+web\s+|online\s+|the\s+internet\s+)?for\b").unwrap(),
        Regex::new(r"(?i)\bsearch\s+(?:the\s+web|online|the\s+internet)\b").unwrap(),
        Regex::new(r"(?i)\blook\s+up\b").unwrap(),
        Regex::new(r"(?i)\bgoogle\b").unwrap(),
        Regex::new(r"(?i)\bfind\s+(?:me\s+)?(?:information|info)\s+(?:about|on)\b").unwrap(),
    ]
});

/// Implicit need for current information
static IMPLICIT_TRIGGERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(
            r"(?i)\b(?:latest|current|recent|today'?s)\b.*\b(?:news|prices?|weather|scores?|updates?|events)\b",
        )
        .unwrap(),
        Regex::new(r"(?i)\bwhat'?s\s+happening\b").unwrap(),
        Regex::new(r"(?i)\bright\s+now\b").unwrap(),
        Regex::new(r"(?i)\bbreaking\s+news\b").unwrap(),
    ]
});

/// Trigger phrases removed from the message to form the query
static STRIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\bsearch\s+(?:the\s+web|online|the\s+internet)(?:\s+for)?\b").unwrap(),
        Regex::new(r"(?i)\bsearch(?:\s+for)?\b").unwrap(),
        Regex::new(r"(?i)\blook\s+up\b").unwrap(),
        Regex::new(r"(?i)\bgoogle\b").unwrap(),
        Regex::new(r"(?i)\bfind\s+(?:me\s+)?(?:information|info)\s+(?:about|on)\b").unwrap(),
        Regex::new(r"(?i)\b(?:latest|current|recent|today'?s)\b").unwrap(),
        Regex::new(r"(?i)\bwhat'?s\s+happening\b").unwrap(),
        Regex::new(r"(?i)\bright\s+now\b").unwrap(),
        Regex::new(r"(?i)\b(?:can|could)\s+you\b").unwrap(),
        Regex::new(r"(?i)\bplease\b").unwrap(),
    ]
});

/// Leading prepositions and filler left in front of the query
static LEADING_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:what'?s|what\s+is|what\s+are|show\s+me|tell\s+me|give\s+me|for|about|on|the|a|an|of|in|with)\s+)+",
    )
    .unwrap()
});

/// Search provider errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    #[error("Search provider is offline")]
    Offline,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No results for \"{0}\"")]
    NoResults(String),
}

/// Anything that can answer a search query
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Run a search and return a formatted result block
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

// ============================================================================
// Trigger detection
// ============================================================================

/// Does the message ask for a search, explicitly or implicitly?
pub fn is_search_request(text: &str) -> bool {
    EXPLICIT_TRIGGERS.iter().any(|re| re.is_match(text))
        || IMPLICIT_TRIGGERS.iter().any(|re| re.is_match(text))
}

/// Remove trigger phrases and leading filler, keeping the user's casing
pub fn extract_query(text: &str) -> String {
    let mut query = text.to_string();
    for re in STRIP_PATTERNS.iter() {
        query = re.replace_all(&query, " ").into_owned();
    }

    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    let query = query.trim_matches(|c: char| c.is_whitespace() || "?!.,".contains(c));
    LEADING_FILLER.replace(query, "").trim().to_string()
}

// ============================================================================
// Stub provider
// ============================================================================

/// Coarse bucket a stub query falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBucket {
    Weather,
    News,
    Market,
    Programming,
    Science,
    General,
}

/// Bucket keywords in priority order
const BUCKET_KEYWORDS: &[(SearchBucket, &[&str])] = &[
    (SearchBucket::Weather, &["weather", "temperature", "forecast"]),
    (SearchBucket::News, &["news", "headline"]),
    (
        SearchBucket::Market,
        &["stock", "market", "price", "crypto", "bitcoin"],
    ),
    (
        SearchBucket::Programming,
        &["code", "programming", "rust", "python", "javascript", "api", "library"],
    ),
    (
        SearchBucket::Science,
        &["science", "research", "space", "physics", "biology", "chemistry"],
    ),
];

impl SearchBucket {
    /// First bucket with a keyword contained in the query
    pub fn classify(query: &str) -> Self {
        let lower = query.to_lowercase();
        BUCKET_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(bucket, _)| *bucket)
            .unwrap_or(SearchBucket::General)
    }

    /// Canned result block with the query interpolated
    pub fn canned_block(&self, query: &str) -> String {
        let body = match self {
            Self::Weather => format!(
                "🌤️ **Weather search: \"{}\"**\n\nI can't reach live weather services, but these sources have up-to-date conditions:\n• https://weather.com for forecasts\n• https://www.windy.com for live maps\n• Your national meteorological service for alerts",
                query
            ),
            Self::News => format!(
                "📰 **News search: \"{}\"**\n\nFor the latest headlines on this, try:\n• https://news.google.com\n• https://apnews.com\n• https://www.bbc.com/news",
                query
            ),
            Self::Market => format!(
                "📈 **Market search: \"{}\"**\n\nLive prices change by the second. Check:\n• https://finance.yahoo.com\n• https://www.google.com/finance\n• https://coinmarketcap.com for crypto",
                query
            ),
            Self::Programming => format!(
                "💻 **Programming search: \"{}\"**\n\nGood places to dig in:\n• https://stackoverflow.com for Q&A\n• https://github.com for example code\n• The official documentation for your language or library",
                query
            ),
            Self::Science => format!(
                "🔬 **Science search: \"{}\"**\n\nReliable sources to explore:\n• https://www.nature.com\n• https://www.sciencedaily.com\n• https://www.nasa.gov for space topics",
                query
            ),
            Self::General => format!(
                "🔍 **Search: \"{}\"**\n\nHere's where I'd start looking:\n• https://duckduckgo.com/?q={}\n• https://en.wikipedia.org for background",
                query,
                query.replace(' ', "+")
            ),
        };
        format!("{}\n\n{}", body, SIMULATED_NOTE)
    }
}

/// Deterministic stand-in for a network search
#[derive(Debug, Clone)]
pub struct StubSearchProvider {
    latency: Duration,
    offline: bool,
}

impl StubSearchProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            offline: false,
        }
    }

    /// Stub that always takes the failure path
    pub fn offline(latency: Duration) -> Self {
        Self {
            latency,
            offline: true,
        }
    }
}

#[async_trait]
impl SearchProvider for StubSearchProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn search(&self, query: &str) -> Result<String, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.offline {
            return Err(SearchError::Offline);
        }
        let bucket = SearchBucket::classify(query);
        debug!(?bucket, query, "stub search");
        Ok(bucket.canned_block(query))
    }
}

// ============================================================================
// HTTP provider
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Default, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: Option<String>,
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
}

/// Live search against an instant-answer JSON endpoint
pub struct HttpSearchProvider {
    endpoint: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSearchProvider {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SearchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout_secs,
            client,
        })
    }

    fn format_answer(query: &str, answer: &InstantAnswer) -> Option<String> {
        let title = if answer.heading.is_empty() {
            query
        } else {
            answer.heading.as_str()
        };

        if !answer.abstract_text.is_empty() {
            let mut block = format!("🔍 **{}**\n\n{}", title, answer.abstract_text);
            if !answer.abstract_url.is_empty() {
                block.push_str(&format!("\n\nSource: {}", answer.abstract_url));
            }
            return Some(block);
        }

        let related: Vec<String> = answer
            .related_topics
            .iter()
            .filter_map(|t| match (&t.text, &t.first_url) {
                (Some(text), Some(url)) => Some(format!("• {} ({})", text, url)),
                (Some(text), None) => Some(format!("• {}", text)),
                _ => None,
            })
            .take(3)
            .collect();

        if related.is_empty() {
            return None;
        }
        Some(format!("🔍 **{}**\n\n{}", title, related.join("\n")))
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(self.timeout_secs)
                } else {
                    SearchError::Http(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(SearchError::Http(format!(
                "HTTP {} from search endpoint",
                response.status()
            )));
        }

        let answer: InstantAnswer = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Self::format_answer(query, &answer).ok_or_else(|| SearchError::NoResults(query.to_string()))
    }
}

// ============================================================================
// Stage
// ============================================================================

/// Search stage of the response pipeline
#[derive(Clone)]
pub struct WebSearch {
    provider: Arc<dyn SearchProvider>,
}

impl WebSearch {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Stub provider with the given simulated latency
    pub fn stub(latency: Duration) -> Self {
        Self::new(Arc::new(StubSearchProvider::new(latency)))
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let provider: Arc<dyn SearchProvider> = match config.provider {
            SearchProviderKind::Stub => Arc::new(StubSearchProvider::new(Duration::from_millis(
                config.stub_latency_ms,
            ))),
            SearchProviderKind::Http => Arc::new(HttpSearchProvider::new(
                config.endpoint.clone(),
                config.timeout_secs,
            )?),
        };
        Ok(Self::new(provider))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Search reply, clarification, or apology; None when no search was asked for
    pub async fn respond(&self, text: &str) -> Option<String> {
        if !is_search_request(text) {
            return None;
        }

        let query = extract_query(text);
        if query.chars().count() < MIN_QUERY_LEN {
            debug!(text, "search query too short");
            return Some(CLARIFY_REPLY.to_string());
        }

        match self.provider.search(&query).await {
            Ok(block) => Some(block),
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "search failed");
                Some(SEARCH_FAILURE_REPLY.to_string())
            }
        }
    }
}

impl Default for WebSearch {
    fn default() -> Self {
        Self::stub(Duration::from_millis(DEFAULT_STUB_LATENCY_MS))
    }
}
