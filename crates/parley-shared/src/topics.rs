//! Topic classification and templated replies.
//!
//! Topics are checked in table order; the first topic with a keyword found
//! in the lowercased message wins. Keywords are plain substrings, so "hi"
//! also fires inside "this".

use crate::error::ParleyError;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Coarse category that selects a template pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Farewell,
    Thanks,
    Programming,
    Math,
    Weather,
    Jokes,
    Facts,
    Help,
    Default,
}

impl std::str::FromStr for Topic {
    type Err = ParleyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greeting" => Ok(Self::Greeting),
            "farewell" => Ok(Self::Farewell),
            "thanks" => Ok(Self::Thanks),
            "programming" => Ok(Self::Programming),
            "math" => Ok(Self::Math),
            "weather" => Ok(Self::Weather),
            "jokes" => Ok(Self::Jokes),
            "facts" => Ok(Self::Facts),
            "help" => Ok(Self::Help),
            "default" => Ok(Self::Default),
            other => Err(ParleyError::UnknownTopic(other.to_string())),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Thanks => "thanks",
            Self::Programming => "programming",
            Self::Math => "math",
            Self::Weather => "weather",
            Self::Jokes => "jokes",
            Self::Facts => "facts",
            Self::Help => "help",
            Self::Default => "default",
        }
    }

    /// Trigger keywords (empty for `Default`)
    pub fn keywords(&self) -> &'static [&'static str] {
        TOPIC_KEYWORDS
            .iter()
            .find(|(topic, _)| topic == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Reply templates for this topic
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Greeting => GREETING,
            Self::Farewell => FAREWELL,
            Self::Thanks => THANKS,
            Self::Programming => PROGRAMMING,
            Self::Math => MATH,
            Self::Weather => WEATHER,
            Self::Jokes => JOKES,
            Self::Facts => FACTS,
            Self::Help => HELP,
            Self::Default => DEFAULT,
        }
    }
}

/// Topic keyword table in classification order
pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
    ),
    (
        Topic::Farewell,
        &["bye", "goodbye", "see you", "farewell", "take care"],
    ),
    (
        Topic::Thanks,
        &["thank you", "thanks", "appreciate", "grateful"],
    ),
    (
        Topic::Programming,
        &["code", "programming", "javascript", "python", "html", "css", "algorithm", "function"],
    ),
    (
        Topic::Math,
        &["calculate", "math", "mathematics", "equation", "solve", "number"],
    ),
    (
        Topic::Weather,
        &["weather", "temperature", "rain", "sunny", "cloudy", "forecast"],
    ),
    (
        Topic::Jokes,
        &["joke", "funny", "humor", "laugh", "comedy"],
    ),
    (
        Topic::Facts,
        &["fact", "interesting", "tell me about", "explain", "what is"],
    ),
    (
        Topic::Help,
        &["help", "assist", "support", "how to", "can you"],
    ),
];

const GREETING: &[&str] = &[
    "Hello! How can I help you today? 😊",
    "Hi there! What would you like to talk about?",
    "Hey! I'm here to assist you with anything you need.",
    "Good to see you! How can I make your day better?",
];

const FAREWELL: &[&str] = &[
    "Goodbye! Have a wonderful day! 👋",
    "See you later! Feel free to come back anytime.",
    "Take care! It was great chatting with you.",
    "Farewell! Hope I was helpful today.",
];

const THANKS: &[&str] = &[
    "You're very welcome! Happy to help! 😊",
    "No problem at all! That's what I'm here for.",
    "My pleasure! Is there anything else you'd like to know?",
    "Glad I could help! Feel free to ask more questions.",
];

const PROGRAMMING: &[&str] = &[
    "I'd love to help with programming! What language or concept are you working with?",
    "Programming is fascinating! Are you looking for help with a specific problem or learning something new?",
    "Great choice! Coding opens up so many possibilities. What programming topic interests you?",
    "I'm here to help with your coding journey! What would you like to explore?",
];

const MATH: &[&str] = &[
    "Math can be fun! What kind of problem are you working on?",
    "I'm ready to help with mathematics! What calculation or concept do you need assistance with?",
    "Numbers and equations are my specialty! What mathematical challenge can I help you solve?",
    "Let's tackle some math together! What do you need help calculating or understanding?",
];

const WEATHER: &[&str] = &[
    "I don't have access to real-time weather data, but I can help you understand weather patterns! What would you like to know?",
    "Weather is always interesting to discuss! While I can't give current conditions, I can explain meteorological concepts.",
    "I'd love to chat about weather! Though I don't have live data, I can share weather-related information.",
    "Weather talk! I can't provide current forecasts, but I'm happy to discuss climate and weather science.",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything! 😄",
    "I told my computer a joke about UDP... I don't know if it got it! 💻",
    "Why did the programmer quit his job? He didn't get arrays! 🤓",
    "What do you call a bear with no teeth? A gummy bear! 🐻",
    "Why don't eggs tell jokes? They'd crack each other up! 🥚",
];

const FACTS: &[&str] = &[
    "Here's a fun fact: Honey never spoils! Archaeologists have found edible honey in ancient Egyptian tombs! 🍯",
    "Did you know? Octopuses have three hearts and blue blood! 🐙",
    "Interesting fact: Bananas are berries, but strawberries aren't! 🍌",
    "Cool fact: A group of flamingos is called a 'flamboyance'! 🦩",
    "Amazing fact: There are more possible games of chess than atoms in the observable universe! ♟️",
];

const HELP: &[&str] = &[
    "I'm here to help! I can assist with:\n• General questions and conversations\n• Programming and technology\n• Math problems\n• Creative writing\n• Fun facts and jokes\n\nWhat would you like help with?",
    "Happy to assist! I can help you with various topics like coding, math, general questions, or just have a friendly chat. What interests you?",
    "I'm your AI assistant! I can provide information, help solve problems, answer questions, or just chat. How can I help you today?",
    "Need assistance? I'm here for you! Whether it's learning something new, solving a problem, or having a conversation, I'm ready to help.",
];

const DEFAULT: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I'd love to learn more about your thoughts on this topic.",
    "That's a great point! What else would you like to discuss?",
    "Interesting perspective! How can I help you explore this further?",
    "I'm listening! What would you like to know or talk about?",
    "That's fascinating! Is there a specific aspect you'd like to dive deeper into?",
    "Thanks for sharing! What questions do you have about this?",
    "I appreciate you bringing that up! How can I assist you with it?",
];

/// First topic whose keyword appears in the lowercased text
pub fn classify(text: &str) -> Topic {
    let lower = text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Default)
}

/// Uniformly pick one template for the topic
pub fn render(topic: Topic, rng: &mut dyn RandomSource) -> &'static str {
    let templates = match topic.templates() {
        [] => Topic::Default.templates(),
        list => list,
    };
    templates[rng.pick_index(templates.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify("hello"), Topic::Greeting);
        assert_eq!(classify("Goodbye now"), Topic::Farewell);
        assert_eq!(classify("THANKS a lot"), Topic::Thanks);
        assert_eq!(classify("I write Python"), Topic::Programming);
        assert_eq!(classify("tell me a joke"), Topic::Jokes);
        assert_eq!(classify("zzz qqq"), Topic::Default);
    }

    #[test]
    fn test_classify_table_order() {
        // greeting precedes programming
        assert_eq!(classify("hey, show me some code"), Topic::Greeting);
        // "hi" is a plain substring
        assert_eq!(classify("this one"), Topic::Greeting);
    }

    #[test]
    fn test_every_topic_has_templates() {
        for (topic, keywords) in TOPIC_KEYWORDS {
            assert!(!keywords.is_empty(), "{} has no keywords", topic);
            assert!(!topic.templates().is_empty(), "{} has no templates", topic);
        }
        assert!(!Topic::Default.templates().is_empty());
        assert!(Topic::Default.keywords().is_empty());
    }

    #[test]
    fn test_render_is_uniform_floor() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.26, 0.99]);
        assert_eq!(render(Topic::Greeting, &mut rng), GREETING[0]);
        assert_eq!(render(Topic::Greeting, &mut rng), GREETING[1]);
        assert_eq!(render(Topic::Greeting, &mut rng), GREETING[3]);
    }

    #[test]
    fn test_topic_name_round_trip() {
        for (topic, _) in TOPIC_KEYWORDS {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), *topic);
        }
        assert_eq!(" Jokes ".parse::<Topic>().unwrap(), Topic::Jokes);
        assert!(matches!(
            "nope".parse::<Topic>(),
            Err(ParleyError::UnknownTopic(name)) if name == "nope"
        ));
    }
}
