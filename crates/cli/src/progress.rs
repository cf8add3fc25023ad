//! Spinner shown while waiting on the language model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// One blocking provider call. The spinner draws on stderr and nothing at
/// all on a non-TTY; the closing line is printed either way.
pub struct Step {
    pb: ProgressBar,
    label: String,
}

impl Step {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("  {spinner:.green} {msg} {elapsed:.dim}")
        {
            pb.set_style(style);
        }
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb, label }
    }

    /// `  label · 2.4s · summary`
    pub fn finish(&self, summary: &str) {
        let elapsed = self.pb.elapsed();
        self.pb.finish_and_clear();
        eprintln!(
            "  {} · {} · {}",
            self.label,
            format!("{:.1}s", elapsed.as_secs_f64()).green(),
            summary
        );
    }

    /// `  label · failed`
    pub fn fail(&self) {
        self.pb.finish_and_clear();
        eprintln!("  {} · {}", self.label, "failed".red());
    }
}
