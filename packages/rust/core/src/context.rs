//! Context assembly for the `consult` response.
//!
//! Pure composition: the selected frameworks and experiences, a trimmed
//! view of the profile and career documents, the brief, and the synthesis
//! instructions for the downstream language model. Everything borrows from
//! the knowledge base; nothing is copied or mutated.

use serde::Serialize;

use strategist_shared::{Career, Experience, Framework, Profile};

use crate::aggregate::RankedItem;

/// Synthesis guidance; `{name}` is replaced with the profile name.
const REASONING_TEMPLATE: &str = "\
You are channeling {name}'s strategic thinking. Using the frameworks and experience provided:
1. Name the core strategic challenge in the brief before anything else.
2. Structure the analysis with the most relevant framework(s): walk through their steps instead of only naming them.
3. Ground recommendations in the experiences where {name} faced similar challenges, and use the career timeline to show range when it helps.
4. Give concrete, ordered, actionable recommendations and say why each one matters.
5. Take a clear position. {name} has strong views shaped by practice; avoid hedging and \"it depends\" answers.
6. Close by noting this is a preview of {name}'s approach and suggest get_contact for a deeper engagement.

Keep the tone professional and approachable, like a senior strategist in a first client meeting.

Do not dump the raw data. The frameworks and experience are raw material: synthesize them into one coherent response that answers the brief.";

/// Profile fields relevant to synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileContext<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub philosophy: &'a str,
    pub expertise_areas: &'a [String],
}

/// A career timeline entry reduced to its summary fields.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub period: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerContext<'a> {
    pub timeline: Vec<TimelineEntry<'a>>,
    pub notable_clients: &'a [String],
    pub key_highlights: &'a [String],
}

/// The full `consult` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultResponse<'a> {
    pub profile_context: ProfileContext<'a>,
    pub career_context: CareerContext<'a>,
    pub relevant_frameworks: Vec<RankedItem<'a, Framework>>,
    pub relevant_experience: Vec<RankedItem<'a, Experience>>,
    pub brief_received: &'a str,
    pub reasoning_instructions: String,
}

impl<'a> From<&'a Profile> for ProfileContext<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            name: &profile.name,
            title: &profile.title,
            philosophy: &profile.philosophy,
            expertise_areas: &profile.expertise_areas,
        }
    }
}

impl<'a> From<&'a Career> for CareerContext<'a> {
    fn from(career: &'a Career) -> Self {
        Self {
            timeline: career
                .timeline
                .iter()
                .map(|t| TimelineEntry {
                    company: &t.company,
                    role: &t.role,
                    period: &t.period,
                    description: &t.description,
                })
                .collect(),
            notable_clients: &career.notable_clients,
            key_highlights: &career.key_highlights,
        }
    }
}

/// Instructions for the downstream consumer, personalised with `name`.
pub fn reasoning_instructions(name: &str) -> String {
    REASONING_TEMPLATE.replace("{name}", name)
}

/// Compose the response. Selection has already happened upstream.
pub fn assemble<'a>(
    brief: &'a str,
    frameworks: Vec<RankedItem<'a, Framework>>,
    experiences: Vec<RankedItem<'a, Experience>>,
    profile: &'a Profile,
    career: &'a Career,
) -> ConsultResponse<'a> {
    ConsultResponse {
        profile_context: ProfileContext::from(profile),
        career_context: CareerContext::from(career),
        relevant_frameworks: frameworks,
        relevant_experience: experiences,
        brief_received: brief,
        reasoning_instructions: reasoning_instructions(&profile.name),
    }
}
