//! Core domain types for Strategist knowledge documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// KnowledgeDomain
// ---------------------------------------------------------------------------

/// Topical tag partitioning frameworks and experiences.
///
/// Variant order is the declared domain order: it drives aggregation order
/// and the key order of serialized domain tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeDomain {
    BrandPositioning,
    CommunicationPlanning,
    ContentStrategy,
    AiStrategy,
}

impl KnowledgeDomain {
    /// Every domain, in declared order.
    pub const ALL: [KnowledgeDomain; 4] = [
        Self::BrandPositioning,
        Self::CommunicationPlanning,
        Self::ContentStrategy,
        Self::AiStrategy,
    ];

    /// The wire tag, e.g. `brand_positioning`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrandPositioning => "brand_positioning",
            Self::CommunicationPlanning => "communication_planning",
            Self::ContentStrategy => "content_strategy",
            Self::AiStrategy => "ai_strategy",
        }
    }
}

impl std::fmt::Display for KnowledgeDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domain: {0:?}")]
pub struct UnknownDomain(pub String);

impl std::str::FromStr for KnowledgeDomain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

/// Per-domain item lists as stored in `frameworks.json` / `experience.json`.
pub type DomainTable<T> = BTreeMap<KnowledgeDomain, Vec<T>>;

// ---------------------------------------------------------------------------
// Framework / Experience
// ---------------------------------------------------------------------------

/// A named strategic methodology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub name: String,
    pub description: String,
    pub when_to_use: String,
    pub steps: Vec<String>,
    pub key_principles: Vec<String>,
}

/// A past engagement: situation, challenge, approach, outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub context: String,
    pub challenge: String,
    pub approach: String,
    pub result: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Profile / Career / Contact
// ---------------------------------------------------------------------------

/// `profile.json`. Fields beyond the typed ones are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub philosophy: String,
    #[serde(default)]
    pub expertise_areas: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One role in the career timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `career.json`. Education, languages and similar sections live in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub timeline: Vec<CareerEntry>,
    #[serde(default)]
    pub notable_clients: Vec<String>,
    #[serde(default)]
    pub key_highlights: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `contact.json`, forwarded as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contact(pub Map<String, Value>);
