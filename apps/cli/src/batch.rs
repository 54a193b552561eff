//! Batch mode: many briefs against one shared engine.
//!
//! Briefs are answered concurrently on blocking worker threads and reported
//! in input order.

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use serde_json::Value;
use strategist_core::Engine;
use strategist_core::tools;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinSet;
use tracing::debug;

/// One answered brief.
#[derive(Debug, Serialize)]
pub(crate) struct BatchLine {
    /// 1-based line number among non-empty input lines.
    pub line: usize,
    pub brief: String,
    pub is_error: bool,
    /// Consult payload, or the error message.
    pub output: Value,
}

/// Read non-empty, trimmed lines from `input` or stdin.
pub(crate) async fn read_briefs(input: Option<&Path>) -> Result<Vec<String>> {
    match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .wrap_err_with(|| format!("cannot open {}", path.display()))?;
            collect_lines(file).await
        }
        None => collect_lines(tokio::io::stdin()).await,
    }
}

async fn collect_lines<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = BufReader::new(reader).lines();
    let mut briefs = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            briefs.push(trimmed.to_string());
        }
    }
    Ok(briefs)
}

/// Answer every brief concurrently; results come back in input order.
pub(crate) async fn answer_all(
    engine: Arc<Engine>,
    briefs: Vec<String>,
) -> Result<Vec<BatchLine>> {
    let mut set = JoinSet::new();

    for (idx, brief) in briefs.into_iter().enumerate() {
        let engine = Arc::clone(&engine);
        set.spawn_blocking(move || {
            let output = tools::consult(&engine, &brief)?;
            let value = if output.is_error {
                Value::String(output.text)
            } else {
                serde_json::from_str(&output.text)?
            };
            Ok::<_, color_eyre::eyre::Report>(BatchLine {
                line: idx + 1,
                brief,
                is_error: output.is_error,
                output: value,
            })
        });
    }

    let mut lines = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        let line = joined.wrap_err("batch worker panicked")??;
        debug!(line = line.line, is_error = line.is_error, "brief answered");
        lines.push(line);
    }

    lines.sort_by_key(|l| l.line);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategist_knowledge::KnowledgeBase;
    use strategist_shared::ConsultLimits;

    fn engine() -> Arc<Engine> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let kb = KnowledgeBase::load(&dir).expect("load shipped data");
        Arc::new(Engine::new(Arc::new(kb), ConsultLimits::default()))
    }

    #[tokio::test]
    async fn collects_non_empty_lines() {
        let input: &[u8] = b"first brief here\n\n   \n  second brief here  \n";
        let briefs = collect_lines(input).await.expect("read");
        assert_eq!(briefs, vec!["first brief here", "second brief here"]);
    }

    #[tokio::test]
    async fn answers_in_input_order() {
        let briefs = vec![
            "I need help positioning my brand for a younger audience".to_string(),
            "short".to_string(),
            "How should we start adopting generative AI for content?".to_string(),
        ];

        let lines = answer_all(engine(), briefs).await.expect("batch");
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.iter().map(|l| l.line).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        assert!(!lines[0].is_error);
        assert_eq!(lines[0].output["brief_received"], lines[0].brief);
        assert!(lines[0].output["relevant_frameworks"].as_array().expect("array").len() <= 4);

        assert!(lines[1].is_error);
        assert!(lines[1].output.as_str().expect("message").contains("at least 10"));

        assert!(!lines[2].is_error);
        assert!(lines[2].output["relevant_experience"].as_array().expect("array").len() <= 3);
    }
}
