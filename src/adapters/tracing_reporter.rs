// Reporter backed by tracing, recording every check and detail into a Report.
//
// Purpose
// - Default reporting sink for fixtures.
//
// Responsibilities
// - Contexts become entered tracing spans, nested in the order they are opened.
// - Passing checks log at info, failing checks at warn, with the context path.
// - Detail lines follow the DetailPolicy: emitted immediately (On), never (Off),
//   or buffered and flushed when a check fails (Failure).
// - Failed checks never abort; the caller inspects or asserts on the Report afterwards.
// - A Report exports as JSON for tooling that collects fixture outcomes.

use crate::application::errors::FixtureError;
use crate::core::ports::Reporter;
use crate::shell::settings::{DetailPolicy, Settings};
use serde::Serialize;
use std::fmt;
use tracing::span::EnteredSpan;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub context: Vec<String>,
    pub label: String,
    pub passed: bool,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.passed { "pass" } else { "FAIL" };
        if self.context.is_empty() {
            write!(f, "{}: {outcome}", self.label)
        } else {
            write!(f, "{} / {}: {outcome}", self.context.join(" / "), self.label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub context: Vec<String>,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    checks: Vec<Check>,
    details: Vec<Detail>,
}

impl Report {
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn failures(&self) -> Vec<&Check> {
        self.checks.iter().filter(|check| !check.passed).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.label.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Panics with every failed check listed.
    #[track_caller]
    pub fn assert_passed(&self) {
        let failures = self.failures();
        if !failures.is_empty() {
            let listed = failures
                .iter()
                .map(|check| format!("  {check}"))
                .collect::<Vec<_>>()
                .join("\n");
            panic!(
                "{} of {} checks failed:\n{listed}",
                failures.len(),
                self.checks.len()
            );
        }
    }
}

pub struct TracingReporter {
    detail_policy: DetailPolicy,
    context: Vec<String>,
    spans: Vec<EnteredSpan>,
    pending_details: Vec<(usize, String)>,
    report: Report,
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl TracingReporter {
    pub fn new(settings: Settings) -> Self {
        Self {
            detail_policy: settings.detail,
            context: Vec::new(),
            spans: Vec::new(),
            pending_details: Vec::new(),
            report: Report::default(),
        }
    }

    /// Reporter configured from the environment, falling back to defaults on invalid settings.
    pub fn from_env() -> Self {
        let settings = Settings::from_env().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid fixture settings");
            Settings::default()
        });
        Self::new(settings)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }

    fn context_path(&self) -> String {
        self.context.join(" / ")
    }

    fn flush_pending_details(&mut self) {
        for (_, line) in self.pending_details.drain(..) {
            tracing::warn!(detail = %line);
        }
    }
}

impl Reporter for TracingReporter {
    fn enter_context(&mut self, title: &str) {
        let span = tracing::info_span!("context", title = %title).entered();
        self.spans.push(span);
        self.context.push(title.to_string());
    }

    fn exit_context(&mut self) {
        self.context.pop();
        self.spans.pop();
        let depth = self.context.len();
        self.pending_details.retain(|(level, _)| *level <= depth);
    }

    fn detail(&mut self, line: &str) {
        self.report.details.push(Detail {
            context: self.context.clone(),
            line: line.to_string(),
        });
        match self.detail_policy {
            DetailPolicy::On => tracing::info!(detail = %line),
            DetailPolicy::Off => {}
            DetailPolicy::Failure => {
                tracing::debug!(detail = %line);
                self.pending_details.push((self.context.len(), line.to_string()));
            }
        }
    }

    fn test(&mut self, label: &str, passed: bool) {
        if passed {
            tracing::info!(context = %self.context_path(), test = %label, "pass");
        } else {
            tracing::warn!(context = %self.context_path(), test = %label, "FAIL");
            if self.detail_policy == DetailPolicy::Failure {
                self.flush_pending_details();
            }
        }
        self.report.checks.push(Check {
            context: self.context.clone(),
            label: label.to_string(),
            passed,
        });
    }
}
