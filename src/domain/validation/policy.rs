//! Naming policy applied by the validation gate.

use serde::{Deserialize, Serialize};

/// Suffixes a prompt file name may end with.
pub const DEFAULT_PROMPT_SUFFIXES: [&str; 2] = ["_prompt.md", "-prompt.md"];

/// Suffixes an evidence (results) file name may end with.
pub const DEFAULT_EVIDENCE_SUFFIXES: [&str; 2] = ["_results.md", "-results.md"];

/// Minimum number of words in a prompt file stem, e.g. `python_unittesting`.
pub const DEFAULT_MIN_NAME_SEGMENTS: usize = 2;

/// Word separators allowed in file names.
pub const NAME_SEPARATORS: [char; 2] = ['_', '-'];

/// Configurable naming conventions for contributed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    pub prompt_suffixes: Vec<String>,
    pub evidence_suffixes: Vec<String>,
    pub min_name_segments: usize,
}

impl NamingPolicy {
    /// Returns the prompt suffix `file_name` ends with, preferring the longest.
    pub fn matching_prompt_suffix<'a>(&'a self, file_name: &str) -> Option<&'a str> {
        longest_suffix(&self.prompt_suffixes, file_name)
    }

    /// Returns true if `file_name` ends with a recognized evidence suffix.
    pub fn is_evidence_name(&self, file_name: &str) -> bool {
        longest_suffix(&self.evidence_suffixes, file_name).is_some()
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            prompt_suffixes: DEFAULT_PROMPT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            evidence_suffixes: DEFAULT_EVIDENCE_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_name_segments: DEFAULT_MIN_NAME_SEGMENTS,
        }
    }
}

fn longest_suffix<'a>(suffixes: &'a [String], file_name: &str) -> Option<&'a str> {
    suffixes
        .iter()
        .filter(|s| !s.is_empty() && file_name.len() > s.len() && file_name.ends_with(s.as_str()))
        .max_by_key(|s| s.len())
        .map(String::as_str)
}
