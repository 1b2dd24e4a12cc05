//! Terminal rendering of soil submissions

use std::cell::RefCell;
use std::io::Write;

use shared::{RecommendationResult, SoilFormView};

/// How a recommendation is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes results to `out` and messages to `err`
pub struct TerminalView<O: Write, E: Write> {
    out: RefCell<O>,
    err: RefCell<E>,
    format: OutputFormat,
    site_url: String,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat, site_url: impl Into<String>) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            format,
            site_url: site_url.into(),
        }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn write_out(&self, text: &str) {
        if let Err(e) = self.out.borrow_mut().write_all(text.as_bytes()) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }

    fn write_err(&self, text: &str) {
        if let Err(e) = self.err.borrow_mut().write_all(text.as_bytes()) {
            tracing::warn!("Failed to write message: {}", e);
        }
    }
}

/// Plain-text layout of a recommendation
pub fn format_recommendation(recommendation: &RecommendationResult) -> String {
    let mut text = String::new();
    text.push_str(&format!("Recommended crop: {}\n\n", recommendation.crop_or_default()));
    text.push_str(recommendation.description_or_default());
    text.push_str("\n\nRecommended fertilizers:\n");
    for fertilizer in &recommendation.fertilizers {
        text.push_str(&format!("  - {}\n", fertilizer));
    }
    if !recommendation.tips.is_empty() {
        text.push_str("\nFarming tips:\n");
        text.push_str(&recommendation.tips);
        text.push('\n');
    }
    text
}

impl<O: Write, E: Write> SoilFormView for TerminalView<O, E> {
    fn clear_error(&self) {}

    fn show_error(&self, message: &str) {
        self.write_err(&format!("Error: {}\n", message));
    }

    fn show_loading(&self) {
        tracing::info!("Analyzing soil sample...");
    }

    fn finish_loading(&self) {
        if let Err(e) = self.out.borrow_mut().flush() {
            tracing::warn!("Failed to flush output: {}", e);
        }
    }

    fn render(&self, recommendation: &RecommendationResult) {
        match self.format {
            OutputFormat::Text => self.write_out(&format_recommendation(recommendation)),
            OutputFormat::Json => match serde_json::to_string_pretty(recommendation) {
                Ok(json) => self.write_out(&format!("{}\n", json)),
                Err(e) => self.show_error(&format!("Failed to encode recommendation: {}", e)),
            },
        }
    }

    fn redirect(&self, path: &str) {
        self.write_err(&format!(
            "Authentication required. Log in at {}{} and try again.\n",
            self.site_url, path
        ));
    }
}
