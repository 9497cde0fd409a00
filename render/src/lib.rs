//! Humanize Render
//!
//! Line-oriented front end over the formatter. Each input line is one
//! `HumanValue` as JSON; each output line is either
//! `{"human": "..."}` or an [`ErrorResponse`]. Blank lines are skipped and a
//! bad line never stops the stream.

use humanize_core::{Error, Formatter, HumanValue};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Successful rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedValue {
    pub human: String,
}

/// Error response line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// One output line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderResponse {
    Rendered(RenderedValue),
    Failed(ErrorResponse),
}

/// Counts reported when the input is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rendered: u64,
    pub failed: u64,
}

/// Render a single request line
pub fn render_line(formatter: &Formatter, line: &str) -> RenderResponse {
    let value: HumanValue = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Invalid request line");
            return RenderResponse::Failed(ErrorResponse::new("invalid_request", e.to_string()));
        }
    };

    match formatter.human_string(&value) {
        Ok(human) => RenderResponse::Rendered(RenderedValue { human }),
        Err(e) => error_response(&value, e),
    }
}

fn error_response(value: &HumanValue, e: Error) -> RenderResponse {
    warn!(kind = value.kind(), error = %e, "Render failed");
    let body = ErrorResponse::new(e.code(), e.to_string())
        .with_details(serde_json::json!({ "type": value.kind() }));
    RenderResponse::Failed(body)
}

/// Render every line of `input` into `output`
pub async fn run<R, W>(input: R, mut output: W, formatter: Formatter) -> std::io::Result<RunStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut stats = RunStats::default();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = render_line(&formatter, &line);
        match response {
            RenderResponse::Rendered(_) => stats.rendered += 1,
            RenderResponse::Failed(_) => stats.failed += 1,
        }

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        output.write_all(json.as_bytes()).await?;
    }

    output.flush().await?;
    info!(rendered = stats.rendered, failed = stats.failed, "Finished rendering");

    Ok(stats)
}
