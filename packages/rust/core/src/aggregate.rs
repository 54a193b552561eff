//! Domain aggregation: rank within each domain, concatenate across domains.
//!
//! Domains are visited in declared order ([`KnowledgeDomain::ALL`]). Each
//! domain's frameworks and experiences are ranked independently and appended
//! to the running sequences, so every item from an earlier domain precedes
//! every item from a later one regardless of score. Top-K selection happens
//! on the concatenated sequence.

use serde::Serialize;
use tracing::{debug, instrument};

use strategist_knowledge::KnowledgeBase;
use strategist_shared::{Experience, Framework, KnowledgeDomain};

use crate::scoring::{Searchable, rank};

/// A ranked item tagged with the domain it came from.
///
/// Serializes flat: `{"domain": "...", <item fields>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedItem<'a, T> {
    pub domain: KnowledgeDomain,
    #[serde(flatten)]
    pub payload: &'a T,
}

/// Aggregated ranking across all domains.
#[derive(Debug, Clone, Default)]
pub struct Aggregated<'a> {
    pub frameworks: Vec<RankedItem<'a, Framework>>,
    pub experiences: Vec<RankedItem<'a, Experience>>,
}

impl Aggregated<'_> {
    /// Keep the first `max_frameworks` / `max_experiences` aggregated items.
    pub fn truncate(mut self, max_frameworks: usize, max_experiences: usize) -> Self {
        self.frameworks.truncate(max_frameworks);
        self.experiences.truncate(max_experiences);
        self
    }
}

/// Rank every domain's items against `keywords` and concatenate in domain order.
#[instrument(skip_all, fields(keywords = keywords.len()))]
pub fn aggregate<'a>(kb: &'a KnowledgeBase, keywords: &[String]) -> Aggregated<'a> {
    let mut out = Aggregated::default();

    for domain in KnowledgeDomain::ALL {
        let frameworks = kb.frameworks(domain);
        let experiences = kb.experiences(domain);

        append_ranked(&mut out.frameworks, domain, frameworks, keywords);
        append_ranked(&mut out.experiences, domain, experiences, keywords);

        debug!(
            %domain,
            frameworks = frameworks.len(),
            experiences = experiences.len(),
            "domain ranked"
        );
    }

    out
}

fn append_ranked<'a, T: Searchable>(
    out: &mut Vec<RankedItem<'a, T>>,
    domain: KnowledgeDomain,
    items: &'a [T],
    keywords: &[String],
) {
    out.extend(
        rank(items, keywords)
            .into_iter()
            .map(|payload| RankedItem { domain, payload }),
    );
}
