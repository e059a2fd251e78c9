//! Colored terminal rendering for diagnostics.

use kolabcal_core::{Diagnostic, Severity};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Severity {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            Severity::Debug => label.dimmed().to_string(),
            Severity::Warning => label.yellow().to_string(),
            Severity::Error => label.red().to_string(),
            Severity::Critical => label.red().bold().to_string(),
        }
    }
}

impl Render for Diagnostic {
    fn render(&self) -> String {
        format!(
            "{}: {} {}",
            self.severity.render(),
            self.message,
            format!("({})", self.location).dimmed()
        )
    }
}
