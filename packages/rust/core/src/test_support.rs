//! Fixture builders shared by unit tests.

use serde_json::{Map, json};

use strategist_knowledge::KnowledgeBase;
use strategist_shared::{
    Career, CareerEntry, Contact, DomainTable, Experience, Framework, KnowledgeDomain, Profile,
};

pub(crate) fn make_framework(name: &str, description: &str) -> Framework {
    Framework {
        name: name.into(),
        description: description.into(),
        when_to_use: "Whenever it helps.".into(),
        steps: vec!["Look".into(), "Decide".into()],
        key_principles: vec!["Be specific".into()],
    }
}

pub(crate) fn make_experience(context: &str, challenge: &str, tags: &[&str]) -> Experience {
    Experience {
        context: context.into(),
        challenge: challenge.into(),
        approach: "Did the work.".into(),
        result: "It worked.".into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub(crate) fn make_profile() -> Profile {
    let mut extra = Map::new();
    extra.insert("location".into(), json!("Milan"));
    Profile {
        name: "Pez".into(),
        title: "Strategist".into(),
        philosophy: "Choose what not to do.".into(),
        expertise_areas: vec!["Branding".into(), "AI".into()],
        extra,
    }
}

pub(crate) fn make_career() -> Career {
    let mut entry_extra = Map::new();
    entry_extra.insert("skills".into(), json!(["PHP"]));
    let mut extra = Map::new();
    extra.insert("languages".into(), json!(["Italian", "English"]));
    Career {
        timeline: vec![CareerEntry {
            company: "Agency".into(),
            role: "Founder".into(),
            period: "2008-2018".into(),
            description: "Ran the agency.".into(),
            extra: entry_extra,
        }],
        notable_clients: vec!["Retailer".into()],
        key_highlights: vec!["Ten years of agency work".into()],
        extra,
    }
}

pub(crate) fn make_contact() -> Contact {
    let mut map = Map::new();
    map.insert("email".into(), json!("hello@example.com"));
    Contact(map)
}

pub(crate) fn kb_with(
    frameworks: Vec<(KnowledgeDomain, Vec<Framework>)>,
    experiences: Vec<(KnowledgeDomain, Vec<Experience>)>,
) -> KnowledgeBase {
    KnowledgeBase::from_parts(
        frameworks.into_iter().collect::<DomainTable<_>>(),
        experiences.into_iter().collect::<DomainTable<_>>(),
        make_profile(),
        make_career(),
        make_contact(),
    )
    .expect("valid fixture knowledge base")
}

/// Short label used in fixture names, so names never contain domain words.
fn abbrev(domain: KnowledgeDomain) -> &'static str {
    match domain {
        KnowledgeDomain::BrandPositioning => "bp",
        KnowledgeDomain::CommunicationPlanning => "cp",
        KnowledgeDomain::ContentStrategy => "cs",
        KnowledgeDomain::AiStrategy => "ai",
    }
}

/// Two frameworks and two experiences in every domain.
pub(crate) fn full_kb() -> KnowledgeBase {
    let frameworks = KnowledgeDomain::ALL
        .into_iter()
        .map(|d| {
            (
                d,
                vec![
                    make_framework(&format!("{} one", abbrev(d)), "generic method"),
                    make_framework(&format!("{} two", abbrev(d)), "brand method"),
                ],
            )
        })
        .collect();
    let experiences = KnowledgeDomain::ALL
        .into_iter()
        .map(|d| {
            (
                d,
                vec![
                    make_experience(&format!("{} case a", abbrev(d)), "growth", &[]),
                    make_experience(
                        &format!("{} case b", abbrev(d)),
                        "brand refresh",
                        &["brand"],
                    ),
                ],
            )
        })
        .collect();
    kb_with(frameworks, experiences)
}
