//! Validation gate - naming and evidence checks run before review.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::policy::{NamingPolicy, NAME_SEPARATORS};
use crate::domain::document::Document;

/// Which convention a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    FileNameCase,
    FileNameCharacters,
    FileNameSuffix,
    FileNameNotDescriptive,
    CategoryFolderMismatch,
    MissingEvidence,
    EvidenceNaming,
}

/// A single failed check, with a message the contributor can act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: ViolationRule,
    pub message: String,
}

impl Violation {
    fn new(rule: ViolationRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of running the gate over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    passed: bool,
    violations: Vec<Violation>,
}

impl ValidationResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    /// True when no check failed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks a document against the naming and evidence conventions.
///
/// Pure: no I/O, no mutation, the same document always yields the same
/// result.
#[derive(Debug, Clone, Default)]
pub struct ValidationGate {
    policy: NamingPolicy,
}

impl ValidationGate {
    pub fn new(policy: NamingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Runs every check and collects all violations in a stable order.
    pub fn validate(&self, document: &Document) -> ValidationResult {
        let mut violations = Vec::new();
        self.check_file_name(document, &mut violations);
        self.check_folder(document, &mut violations);
        self.check_evidence(document, &mut violations);
        ValidationResult::from_violations(violations)
    }

    fn check_file_name(&self, document: &Document, violations: &mut Vec<Violation>) {
        let name = document.path().file_name();

        if name.chars().any(|c| c.is_uppercase()) {
            violations.push(Violation::new(
                ViolationRule::FileNameCase,
                format!("File name '{}' must be lowercase", name),
            ));
        }

        // Only the extension dot is allowed; any other '.' is a bad character.
        let base = name.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(name);
        let bad_chars: Vec<char> = base
            .chars()
            .filter(|c| !c.is_uppercase() && !is_name_char(*c))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if !bad_chars.is_empty() {
            violations.push(Violation::new(
                ViolationRule::FileNameCharacters,
                format!(
                    "File name '{}' contains unsupported characters {:?}; use letters, digits, '_' or '-'",
                    name, bad_chars
                ),
            ));
        }

        let Some(suffix) = self.policy.matching_prompt_suffix(name) else {
            violations.push(Violation::new(
                ViolationRule::FileNameSuffix,
                format!(
                    "File name '{}' must end with one of: {}",
                    name,
                    self.policy.prompt_suffixes.join(", ")
                ),
            ));
            return;
        };

        let stem = &name[..name.len() - suffix.len()];
        let words: Vec<&str> = stem.split(&NAME_SEPARATORS[..]).collect();
        if words.iter().any(|w| w.is_empty()) {
            violations.push(Violation::new(
                ViolationRule::FileNameNotDescriptive,
                format!(
                    "File name '{}' has leading, trailing or doubled separators",
                    name
                ),
            ));
        } else if words.len() < self.policy.min_name_segments {
            violations.push(Violation::new(
                ViolationRule::FileNameNotDescriptive,
                format!(
                    "File name '{}' is not descriptive: use at least {} words before '{}'",
                    name, self.policy.min_name_segments, suffix
                ),
            ));
        }
    }

    fn check_folder(&self, document: &Document, violations: &mut Vec<Violation>) {
        let expected = document.category().slug();
        if let Some(folder) = document.path().parent_folder() {
            if folder != expected {
                violations.push(Violation::new(
                    ViolationRule::CategoryFolderMismatch,
                    format!(
                        "Document is filed under '{}' but its category is '{}'",
                        folder, expected
                    ),
                ));
            }
        }
    }

    fn check_evidence(&self, document: &Document, violations: &mut Vec<Violation>) {
        let Some(evidence) = document.evidence() else {
            violations.push(Violation::new(
                ViolationRule::MissingEvidence,
                format!(
                    "Missing results/evidence document for '{}': reference the file recording manual testing",
                    document.path().file_name()
                ),
            ));
            return;
        };

        if evidence == document.path() {
            violations.push(Violation::new(
                ViolationRule::EvidenceNaming,
                "Evidence document cannot be the prompt document itself",
            ));
        } else if !self.policy.is_evidence_name(evidence.file_name()) {
            violations.push(Violation::new(
                ViolationRule::EvidenceNaming,
                format!(
                    "Evidence document '{}' must end with one of: {}",
                    evidence.file_name(),
                    self.policy.evidence_suffixes.join(", ")
                ),
            ));
        }
    }
}

const MARKDOWN_EXTENSION: &str = ".md";

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || NAME_SEPARATORS.contains(&c)
}
