//! Validation report
//!
//! All validation passes write into a [`ValidationReport`] that is handed back
//! to the caller. The CLI prints it and derives the exit code from it; nothing
//! in the library keeps global counters.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::error::{JsonContext, TokensResult};

/// What kind of check produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory {
    /// Undefined or circular `var()` reference
    Reference,
    /// Value does not match the format of its token kind
    Format,
    /// `themable` attribute missing or wrong
    Themable,
    /// Name outside the `--lufa-<level>-` convention
    Naming,
    /// Same property declared more than once
    Duplicate,
}

impl FindingCategory {
    pub fn title(&self) -> &'static str {
        match self {
            FindingCategory::Reference => "Reference resolution",
            FindingCategory::Format => "Value format",
            FindingCategory::Themable => "Themable attribute",
            FindingCategory::Naming => "Naming convention",
            FindingCategory::Duplicate => "Duplicate declarations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub severity: Severity,
    /// Token path or property name the finding is about
    pub token: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    pub fn error(category: FindingCategory, token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Severity::Error, token.into(), message.into())
    }

    pub fn warning(category: FindingCategory, token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, Severity::Warning, token.into(), message.into())
    }

    fn new(category: FindingCategory, severity: Severity, token: String, message: String) -> Self {
        Self {
            category,
            severity,
            token,
            message,
            expected: None,
            actual: None,
            file: None,
            line: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    pub fn in_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_path_buf());
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// `file:line`, `file`, or nothing
    pub fn location(&self) -> Option<String> {
        let file = self.file.as_ref()?;
        Some(match self.line {
            Some(line) => format!("{}:{}", file.display(), line),
            None => file.display().to_string(),
        })
    }
}

/// Accumulated result of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    passed: usize,
    failed: usize,
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of checking one token. The token passes when none of
    /// its findings is an error; warnings are kept either way.
    pub fn record(&mut self, findings: Vec<Finding>) {
        if findings.iter().any(|finding| finding.severity == Severity::Error) {
            self.failed += 1;
        } else {
            self.passed += 1;
        }
        self.findings.extend(findings);
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.findings.extend(other.findings);
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of tokens checked
    pub fn checked(&self) -> usize {
        self.passed + self.failed
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|finding| finding.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Whether the run should fail. In strict mode warnings fail it too.
    pub fn is_failure(&self, strict: bool) -> bool {
        self.has_errors() || (strict && self.warning_count() > 0)
    }

    /// Findings grouped by category, in category order, keeping report order
    /// inside each group
    pub fn by_category(&self) -> BTreeMap<FindingCategory, Vec<&Finding>> {
        let mut groups: BTreeMap<FindingCategory, Vec<&Finding>> = BTreeMap::new();
        for finding in &self.findings {
            groups.entry(finding.category).or_default().push(finding);
        }
        groups
    }

    pub fn to_json(&self) -> TokensResult<String> {
        serde_json::to_string_pretty(self).with_json_context("Failed to serialize validation report")
    }

    /// Render the human readable summary, listing at most
    /// `max_per_category` findings per category.
    pub fn render_summary(&self, max_per_category: usize) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "Token validation".bold());
        let _ = writeln!(out, "  {} {} passed", "✓".green(), self.passed.to_string().green());
        let _ = writeln!(out, "  {} {} failed", "✗".red(), self.failed.to_string().red());
        if self.warning_count() > 0 {
            let _ = writeln!(out, "  {} {} warnings", "!".yellow(), self.warning_count().to_string().yellow());
        }

        for (category, findings) in self.by_category() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{} ({})", category.title().bold(), findings.len());

            for finding in findings.iter().take(max_per_category) {
                let marker = match finding.severity {
                    Severity::Error => "✗".red(),
                    Severity::Warning => "!".yellow(),
                };
                let _ = write!(out, "  {} {}", marker, finding.token.cyan());
                if let Some(location) = finding.location() {
                    let _ = write!(out, " {}", location.dimmed());
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "      {}", finding.message);
                if let Some(expected) = &finding.expected {
                    let _ = writeln!(out, "      expected: {}", expected.green());
                }
                if let Some(actual) = &finding.actual {
                    let _ = writeln!(out, "      actual:   {}", actual.red());
                }
            }

            if findings.len() > max_per_category {
                let _ = writeln!(out, "  ... and {} more", findings.len() - max_per_category);
            }
        }

        out
    }

    pub fn print_summary(&self, max_per_category: usize) {
        print!("{}", self.render_summary(max_per_category));
    }
}
