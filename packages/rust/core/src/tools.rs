//! Tool surface over the engine and the static documents.
//!
//! Each tool returns a [`ToolOutput`]: pretty-printed JSON on success, or a
//! user-facing message with `is_error` set. Bad user input (unknown domain,
//! a brief that is too short, missing arguments) is reported that way and
//! never as an `Err`; `Err` is reserved for internal failures.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use strategist_shared::{DomainTable, KnowledgeDomain, Profile, Result, UnknownDomain};

use crate::engine::Engine;

// ---------------------------------------------------------------------------
// Tool catalogue
// ---------------------------------------------------------------------------

/// The operations exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GetProfile,
    GetFrameworks,
    GetExperience,
    Consult,
    GetContact,
    GetCareer,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Self::GetProfile,
        Self::GetFrameworks,
        Self::GetExperience,
        Self::Consult,
        Self::GetContact,
        Self::GetCareer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetProfile => "get_profile",
            Self::GetFrameworks => "get_frameworks",
            Self::GetExperience => "get_experience",
            Self::Consult => "consult",
            Self::GetContact => "get_contact",
            Self::GetCareer => "get_career",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GetProfile => {
                "Professional profile: background, areas of expertise and philosophy. \
                 Read this first to understand who is giving the advice."
            }
            Self::GetFrameworks => {
                "Strategic frameworks and methodologies, optionally filtered by domain \
                 (brand_positioning, communication_planning, content_strategy, ai_strategy, all)."
            }
            Self::GetExperience => {
                "Past engagements and their results, optionally filtered by domain \
                 (brand_positioning, communication_planning, content_strategy, ai_strategy, all)."
            }
            Self::Consult => {
                "Strategic advice on a brand, communication, content or AI challenge. \
                 Pass a brief of at least 10 characters; the most relevant frameworks and \
                 experiences are returned with instructions for synthesis."
            }
            Self::GetContact => "Contact details and engagement options.",
            Self::GetCareer => {
                "Full career timeline, education, languages and notable clients."
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Result of a tool call as shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    /// Pretty-printed JSON success output.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self {
            text: serde_json::to_string_pretty(value)?,
            is_error: false,
        })
    }

    /// A user-facing error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain filter
// ---------------------------------------------------------------------------

/// Domain argument accepted by `get_frameworks` / `get_experience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainFilter {
    All,
    Only(KnowledgeDomain),
}

impl DomainFilter {
    /// `None`, `""` and `"all"` select everything.
    pub fn parse(input: Option<&str>) -> std::result::Result<Self, UnknownDomain> {
        match input {
            None | Some("") | Some("all") => Ok(Self::All),
            Some(tag) => tag.parse().map(Self::Only),
        }
    }
}

fn unknown_domain_message(raw: &str) -> String {
    let available: Vec<&str> = KnowledgeDomain::ALL.iter().map(|d| d.as_str()).collect();
    format!(
        "Unknown domain: \"{raw}\". Available domains: {}, all.",
        available.join(", ")
    )
}

fn filtered_table<T: Serialize>(
    table: &DomainTable<T>,
    domain: Option<&str>,
) -> Result<ToolOutput> {
    match DomainFilter::parse(domain) {
        Ok(DomainFilter::All) => ToolOutput::json(table),
        Ok(DomainFilter::Only(d)) => {
            let items: &[T] = table.get(&d).map(Vec::as_slice).unwrap_or(&[]);
            ToolOutput::json(&BTreeMap::from([(d, items)]))
        }
        Err(UnknownDomain(raw)) => {
            warn!(domain = %raw, "unknown domain requested");
            Ok(ToolOutput::error(unknown_domain_message(&raw)))
        }
    }
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

pub fn get_profile(engine: &Engine) -> Result<ToolOutput> {
    ToolOutput::json(engine.knowledge().profile())
}

pub fn get_frameworks(engine: &Engine, domain: Option<&str>) -> Result<ToolOutput> {
    filtered_table(engine.knowledge().frameworks_table(), domain)
}

pub fn get_experience(engine: &Engine, domain: Option<&str>) -> Result<ToolOutput> {
    filtered_table(engine.knowledge().experiences_table(), domain)
}

pub fn get_career(engine: &Engine) -> Result<ToolOutput> {
    ToolOutput::json(engine.knowledge().career())
}

pub fn get_contact(engine: &Engine) -> Result<ToolOutput> {
    ToolOutput::json(engine.knowledge().contact())
}

/// Validate the brief length, then run the ranking engine.
pub fn consult(engine: &Engine, brief: &str) -> Result<ToolOutput> {
    let min = engine.limits().min_brief_chars;
    if brief.chars().count() < min {
        return Ok(ToolOutput::error(format!(
            "brief must be at least {min} characters"
        )));
    }
    ToolOutput::json(&engine.consult(brief))
}

/// Dispatch `tool` with a JSON argument object.
pub fn call(engine: &Engine, tool: Tool, args: &Value) -> Result<ToolOutput> {
    debug!(tool = tool.name(), "tool call");

    // Undeclared keys are ignored; only declared arguments are type-checked.
    match tool {
        Tool::GetProfile => get_profile(engine),
        Tool::GetFrameworks => match string_arg(args, "domain") {
            Ok(domain) => get_frameworks(engine, domain),
            Err(output) => Ok(output),
        },
        Tool::GetExperience => match string_arg(args, "domain") {
            Ok(domain) => get_experience(engine, domain),
            Err(output) => Ok(output),
        },
        Tool::GetCareer => get_career(engine),
        Tool::GetContact => get_contact(engine),
        Tool::Consult => match string_arg(args, "brief") {
            Ok(Some(brief)) => consult(engine, brief),
            Ok(None) => Ok(ToolOutput::error("missing required argument: brief")),
            Err(output) => Ok(output),
        },
    }
}

/// Optional string argument; a non-string value is a user error.
fn string_arg<'a>(
    args: &'a Value,
    key: &str,
) -> std::result::Result<Option<&'a str>, ToolOutput> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ToolOutput::error(format!("argument {key} must be a string"))),
    }
}

// ---------------------------------------------------------------------------
// Server info
// ---------------------------------------------------------------------------

/// Self-description shown to clients that are not calling a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: String,
    pub usage: &'static str,
}

impl ServerInfo {
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            name: "strategist",
            version: env!("CARGO_PKG_VERSION"),
            description: format!(
                "Personal knowledge server for {}: {}",
                profile.name, profile.title
            ),
            usage: "Call a tool by name; start with get_profile, then consult with a brief.",
        }
    }
}
