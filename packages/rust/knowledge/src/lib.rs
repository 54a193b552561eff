//! Static knowledge store.
//!
//! The [`KnowledgeBase`] holds every document the retrieval engine reads:
//! per-domain frameworks and experiences, plus the flat profile, career and
//! contact documents. It is loaded once at startup and never mutated, so a
//! single instance can be shared behind an `Arc` by any number of callers.
//!
//! **Layout of a data directory:**
//! ```text
//! <data_dir>/
//! ├── frameworks.json   { "<domain>": [Framework, ...], ... }
//! ├── experience.json   { "<domain>": [Experience, ...], ... }
//! ├── profile.json
//! ├── career.json
//! └── contact.json
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use strategist_shared::{
    Career, Contact, DomainTable, Experience, Framework, KnowledgeDomain, Profile, Result,
    StrategistError,
};

pub const FRAMEWORKS_FILE: &str = "frameworks.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const PROFILE_FILE: &str = "profile.json";
pub const CAREER_FILE: &str = "career.json";
pub const CONTACT_FILE: &str = "contact.json";

/// Every document a data directory must provide.
pub const REQUIRED_FILES: [&str; 5] = [
    FRAMEWORKS_FILE,
    EXPERIENCE_FILE,
    PROFILE_FILE,
    CAREER_FILE,
    CONTACT_FILE,
];

/// Read-only knowledge documents.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    frameworks: DomainTable<Framework>,
    experiences: DomainTable<Experience>,
    profile: Profile,
    career: Career,
    contact: Contact,
}

/// Item counts for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain: KnowledgeDomain,
    pub frameworks: usize,
    pub experiences: usize,
}

impl KnowledgeBase {
    /// Load and validate all documents from `dir`.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> Result<Self> {
        for file in REQUIRED_FILES {
            if !dir.join(file).exists() {
                return Err(StrategistError::validation(format!(
                    "missing {file} in {}",
                    dir.display()
                )));
            }
        }

        let kb = Self::from_parts(
            read_document(&dir.join(FRAMEWORKS_FILE))?,
            read_document(&dir.join(EXPERIENCE_FILE))?,
            read_document(&dir.join(PROFILE_FILE))?,
            read_document(&dir.join(CAREER_FILE))?,
            read_document(&dir.join(CONTACT_FILE))?,
        )?;

        for s in kb.summary() {
            debug!(
                domain = %s.domain,
                frameworks = s.frameworks,
                experiences = s.experiences,
                "domain loaded"
            );
        }
        info!(
            frameworks = kb.frameworks.values().map(Vec::len).sum::<usize>(),
            experiences = kb.experiences.values().map(Vec::len).sum::<usize>(),
            "knowledge base loaded"
        );

        Ok(kb)
    }

    /// Build a knowledge base from already-parsed documents (fixtures, embedding).
    pub fn from_parts(
        frameworks: DomainTable<Framework>,
        experiences: DomainTable<Experience>,
        profile: Profile,
        career: Career,
        contact: Contact,
    ) -> Result<Self> {
        for (domain, items) in &frameworks {
            if let Some(pos) = items.iter().position(|f| f.name.trim().is_empty()) {
                return Err(StrategistError::validation(format!(
                    "framework #{pos} in {domain} has an empty name"
                )));
            }
        }

        Ok(Self {
            frameworks,
            experiences,
            profile,
            career,
            contact,
        })
    }

    /// Frameworks for `domain`; empty when the document has no such key.
    pub fn frameworks(&self, domain: KnowledgeDomain) -> &[Framework] {
        self.frameworks.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Experiences for `domain`; empty when the document has no such key.
    pub fn experiences(&self, domain: KnowledgeDomain) -> &[Experience] {
        self.experiences.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn frameworks_table(&self) -> &DomainTable<Framework> {
        &self.frameworks
    }

    pub fn experiences_table(&self) -> &DomainTable<Experience> {
        &self.experiences
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn career(&self) -> &Career {
        &self.career
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Per-domain counts in declared domain order.
    pub fn summary(&self) -> Vec<DomainSummary> {
        KnowledgeDomain::ALL
            .into_iter()
            .map(|domain| DomainSummary {
                domain,
                frameworks: self.frameworks(domain).len(),
                experiences: self.experiences(domain).len(),
            })
            .collect()
    }
}

/// Read and parse one JSON document, naming the file on failure.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| StrategistError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| StrategistError::parse(format!("invalid {}: {e}", path.display())))
}
