//! One-shot summarisation for the `summarise` command.
//!
//! Runs a single summarize action and renders the result as terminal text.

use crate::config::Config;
use crate::service::{ServiceError, SummaryService};
use crate::summarizer::Summarizer;
use crate::summary::SummaryState;
use crate::view::{self, EntityView, View};
use colored::Colorize;
use std::fmt::Write;

/// Outcome of one `summarise` run
#[derive(Debug, Clone)]
pub struct Report {
    state: SummaryState,
    search_url: String,
}

/// Text for the two output streams
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

/// Summarise `url` against the configured service
pub async fn summarise(config: &Config, url: impl Into<String>) -> Result<Report, ServiceError> {
    let mut summarizer = Summarizer::new(SummaryService::from_config(config)?);
    summarizer.set_url(url);
    summarizer.summarize().await;

    Ok(Report {
        state: summarizer.state().clone(),
        search_url: config.links.search_url.clone(),
    })
}

impl Report {
    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn view(&self) -> View<'_> {
        view::project(&self.state, &self.search_url)
    }

    /// False after a validation or request failure; the command exits non-zero
    pub fn succeeded(&self) -> bool {
        self.state.error().is_empty()
    }

    pub fn render(&self) -> Rendered {
        let projection = self.view();
        let mut out = Rendered::default();

        if let Some(error) = projection.error {
            out.stderr = format!("{}\n", error.red());
        }

        let Some(panel) = &projection.panel else {
            return out;
        };

        let stdout = &mut out.stdout;
        // Writing to a String cannot fail
        let _ = writeln!(stdout, "=== {} ===\n", view::SUMMARY_HEADING.bold());
        let _ = writeln!(stdout, "{}\n", panel.summary);

        let _ = writeln!(stdout, "🔎 {}:", view::ENTITY_HEADING.bold());
        let _ = match &panel.entity {
            EntityView::Link { label, href } => {
                writeln!(stdout, "  {} ({})\n", label.blue().underline(), href)
            }
            EntityView::NotFound => writeln!(stdout, "  {}\n", view::NO_TOPIC_MESSAGE),
        };

        let _ = writeln!(stdout, "⠿ {}:", view::BRAILLE_HEADING.bold());
        let _ = writeln!(stdout, "{}", panel.braille_summary);
        out
    }
}
