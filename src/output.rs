//! Output formatting for human and JSON modes
//!
//! This module turns an [`Evaluation`] into a structured report that can be
//! rendered either as human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::models::Evaluation;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of judging one subject against a rule set
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Rule set name
    pub rules: String,
    /// Short description of the subject
    pub subject: String,
    /// Whether every rule held
    pub satisfied: bool,
    /// One line per rule, in rule order
    pub verdicts: Vec<VerdictLine>,
}

/// A single rule's outcome
#[derive(Debug, Serialize)]
pub struct VerdictLine {
    /// Position in the rule set, starting at 1
    pub position: usize,
    /// Rule name
    pub rule: String,
    /// Whether the rule held
    pub satisfied: bool,
    /// Leaf reasons, empty when satisfied
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl EvaluationReport {
    /// Build a report from an evaluation
    #[must_use]
    pub fn new(rules: impl Into<String>, subject: impl Into<String>, evaluation: &Evaluation) -> Self {
        let verdicts = evaluation
            .verdicts
            .iter()
            .map(|v| VerdictLine {
                position: v.index + 1,
                rule: v.name.clone(),
                satisfied: v.is_satisfied(),
                reasons: v
                    .reason
                    .as_ref()
                    .map(|f| f.reasons().into_iter().map(str::to_string).collect())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            rules: rules.into(),
            subject: subject.into(),
            satisfied: evaluation.is_satisfied(),
            verdicts,
        }
    }

    /// Number of rules that did not hold
    #[must_use]
    pub fn failed(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.satisfied).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// The human-readable rendering
    #[must_use]
    pub fn human_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Checking {} against {} ({} rule(s))...\n",
            self.subject,
            self.rules,
            self.verdicts.len()
        );

        for v in &self.verdicts {
            let mark = if v.satisfied { "ok" } else { "FAIL" };
            let _ = writeln!(out, "  [{mark}] {}. {}", v.position, v.rule);
            for reason in &v.reasons {
                let _ = writeln!(out, "          {reason}");
            }
        }

        if self.satisfied {
            let _ = writeln!(out, "\nSatisfied: all rules hold.");
        } else {
            let _ = writeln!(
                out,
                "\nUNSATISFIED: {} of {} rule(s) failed",
                self.failed(),
                self.verdicts.len()
            );
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
