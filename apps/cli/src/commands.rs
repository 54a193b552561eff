//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use strategist_core::keywords::extract_keywords;
use strategist_core::tools::{self, ServerInfo, Tool, ToolOutput};
use strategist_core::Engine;
use strategist_knowledge::KnowledgeBase;
use strategist_shared::{AppConfig, ConsultLimits, init_config, load_config};
use tracing::info;

use crate::batch;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Strategist: answer strategy briefs with ranked frameworks and experience.
#[derive(Parser)]
#[command(
    name = "strategist",
    version,
    about = "Rank strategic frameworks and past experience against a free-text brief.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Directory holding the knowledge documents (overrides the config file).
    #[arg(long, env = "STRATEGIST_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Rank knowledge against a brief and print the consult context.
    Consult {
        /// Free-text description of the strategic challenge.
        brief: String,
    },

    /// Print frameworks, optionally for one domain.
    Frameworks {
        /// brand_positioning, communication_planning, content_strategy, ai_strategy or all.
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Print past experience, optionally for one domain.
    Experience {
        /// brand_positioning, communication_planning, content_strategy, ai_strategy or all.
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Print the profile document.
    Profile,

    /// Print the career document.
    Career,

    /// Print contact details.
    Contact,

    /// Show the keywords extracted from a brief.
    Keywords {
        /// Brief to analyse.
        brief: String,
    },

    /// List the available tools.
    Tools,

    /// Answer one brief per line from a file (or stdin) as JSON lines.
    Batch {
        /// Input file; reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Filter used when `RUST_LOG` is unset.
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "strategist=info",
        1 => "strategist=debug",
        _ => "strategist=trace",
    }
}

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir;
    match cli.command {
        Command::Consult { brief } => cmd_consult(data_dir, &brief).await,
        Command::Frameworks { domain } => {
            cmd_tool(data_dir, Tool::GetFrameworks, domain.as_deref()).await
        }
        Command::Experience { domain } => {
            cmd_tool(data_dir, Tool::GetExperience, domain.as_deref()).await
        }
        Command::Profile => cmd_tool(data_dir, Tool::GetProfile, None).await,
        Command::Career => cmd_tool(data_dir, Tool::GetCareer, None).await,
        Command::Contact => cmd_tool(data_dir, Tool::GetContact, None).await,
        Command::Keywords { brief } => cmd_keywords(&brief).await,
        Command::Tools => cmd_tools(data_dir).await,
        Command::Batch { input } => cmd_batch(data_dir, input).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Engine setup
// ---------------------------------------------------------------------------

/// Load config and knowledge, and build the shared engine.
fn build_engine(data_dir: Option<PathBuf>) -> Result<Engine> {
    let config = load_config()?;
    let dir = data_dir.unwrap_or_else(|| PathBuf::from(&config.knowledge.data_dir));

    info!(data_dir = %dir.display(), "loading knowledge base");
    let kb = KnowledgeBase::load(&dir)?;

    Ok(Engine::new(Arc::new(kb), ConsultLimits::from(&config)))
}

/// Print a tool result; flagged outputs become a non-zero exit.
fn emit(output: ToolOutput) -> Result<()> {
    if output.is_error {
        return Err(eyre!(output.text));
    }
    println!("{}", output.text);
    Ok(())
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_consult(data_dir: Option<PathBuf>, brief: &str) -> Result<()> {
    let engine = build_engine(data_dir)?;
    info!(brief_chars = brief.chars().count(), "consulting");
    emit(tools::consult(&engine, brief)?)
}

async fn cmd_tool(data_dir: Option<PathBuf>, tool: Tool, domain: Option<&str>) -> Result<()> {
    let engine = build_engine(data_dir)?;
    let args = match domain {
        Some(d) => serde_json::json!({ "domain": d }),
        None => serde_json::json!({}),
    };
    emit(tools::call(&engine, tool, &args)?)
}

async fn cmd_keywords(brief: &str) -> Result<()> {
    let keywords = extract_keywords(brief);
    println!("{}", serde_json::to_string_pretty(&keywords)?);
    Ok(())
}

async fn cmd_tools(data_dir: Option<PathBuf>) -> Result<()> {
    let engine = build_engine(data_dir)?;
    let info = ServerInfo::for_profile(engine.knowledge().profile());

    let listing: Vec<serde_json::Value> = Tool::ALL
        .iter()
        .map(|t| serde_json::json!({ "name": t.name(), "description": t.description() }))
        .collect();

    let out = serde_json::json!({ "server": info, "tools": listing });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn cmd_batch(data_dir: Option<PathBuf>, input: Option<PathBuf>) -> Result<()> {
    let engine = Arc::new(build_engine(data_dir)?);
    let briefs = batch::read_briefs(input.as_deref()).await?;

    info!(count = briefs.len(), "answering briefs");

    for line in batch::answer_all(engine, briefs).await? {
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
