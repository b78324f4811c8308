
use crate::config::OutputFormat;
use crate::error::Result;
use crate::similarity::Metric;
use crate::simplifier::{Simplification, Stats};

use std::fmt::Write;
use serde::Serialize;

/// What the binary hands to its output: both texts, the metric and the counts.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub input_text: String,
    pub simplified_text: String,
    pub similarity_method: &'static str,
    pub summary: Stats,
}

impl Report {

    pub fn new(input: &[String], simplification: &Simplification, metric: Metric) -> Self {
        Self {
            input_text: input.join("\n"),
            simplified_text: simplification.lines.join("\n"),
            similarity_method: metric.label(),
            summary: simplification.stats,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {

        // writing into a String cannot fail, results are ignored
        let mut out = String::new();
        let _ = writeln!(out, "{}", section(&format!("Simplified Text using {}", self.similarity_method)));
        let _ = writeln!(out, "Input Text:\n{}\n{}\n", rule("Input Text:"), self.input_text);
        let _ = writeln!(out, "Simplified Text:\n{}\n{}\n", rule("Simplified Text:"), self.simplified_text);
        let _ = writeln!(out, "{}", section("Processing Summary"));
        let _ = writeln!(out, "Number of words found to simplify: {}", self.summary.words_simplified);
        let _ = writeln!(out, "Number of words already in reference vocabulary: {}", self.summary.words_in_reference_vocabulary);
        let _ = writeln!(out, "Number of words not in embedding file: {}", self.summary.words_not_in_vocabulary);
        out
    }

}

fn rule(title: &str) -> String {
    "-".repeat(title.chars().count())
}

fn section(title: &str) -> String {
    let bar = "=".repeat(title.chars().count());
    format!("{}\n{}\n{}", bar, title, bar)
}
