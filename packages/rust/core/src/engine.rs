//! Retrieval engine: brief → keywords → domain ranking → selection → context.
//!
//! The engine holds only shared read-only state, so one instance behind an
//! `Arc` can serve any number of concurrent callers without locking.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use strategist_knowledge::KnowledgeBase;
use strategist_shared::ConsultLimits;

use crate::aggregate::aggregate;
use crate::context::{ConsultResponse, assemble};
use crate::keywords::extract_keywords;

/// Ranks knowledge against briefs.
#[derive(Debug, Clone)]
pub struct Engine {
    kb: Arc<KnowledgeBase>,
    limits: ConsultLimits,
}

impl Engine {
    pub fn new(kb: Arc<KnowledgeBase>, limits: ConsultLimits) -> Self {
        Self { kb, limits }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn limits(&self) -> ConsultLimits {
        self.limits
    }

    /// Answer a brief with the top frameworks and experiences plus context.
    ///
    /// Performs no length validation; that belongs to the caller.
    #[instrument(skip_all, fields(brief_chars = brief.chars().count()))]
    pub fn consult<'a>(&'a self, brief: &'a str) -> ConsultResponse<'a> {
        let keywords = extract_keywords(brief);
        debug!(?keywords, "keywords extracted");

        let selected = aggregate(&self.kb, &keywords)
            .truncate(self.limits.max_frameworks, self.limits.max_experiences);

        info!(
            keywords = keywords.len(),
            frameworks = selected.frameworks.len(),
            experiences = selected.experiences.len(),
            "consult context assembled"
        );

        assemble(
            brief,
            selected.frameworks,
            selected.experiences,
            self.kb.profile(),
            self.kb.career(),
        )
    }
}
