//! Review workflow configuration: maintainers and naming conventions.

use serde::Deserialize;

use super::error::ConfigValidationError;
use crate::domain::foundation::UserId;
use crate::domain::validation::{
    NamingPolicy, DEFAULT_EVIDENCE_SUFFIXES, DEFAULT_MIN_NAME_SEGMENTS, DEFAULT_PROMPT_SUFFIXES,
};

/// List values are comma-separated so they can come from a single
/// environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    /// Users allowed to approve, request changes and merge
    #[serde(default)]
    pub maintainers: String,

    #[serde(default = "default_prompt_suffixes")]
    pub prompt_suffixes: String,

    #[serde(default = "default_evidence_suffixes")]
    pub evidence_suffixes: String,

    #[serde(default = "default_min_name_segments")]
    pub min_name_segments: usize,
}

impl WorkflowConfig {
    /// Parsed maintainer ids.
    pub fn maintainer_ids(&self) -> Result<Vec<UserId>, ConfigValidationError> {
        split_list(&self.maintainers)
            .into_iter()
            .map(|raw| {
                UserId::new(raw.clone()).map_err(|_| ConfigValidationError::InvalidMaintainer(raw))
            })
            .collect()
    }

    pub fn naming_policy(&self) -> NamingPolicy {
        NamingPolicy {
            prompt_suffixes: split_list(&self.prompt_suffixes),
            evidence_suffixes: split_list(&self.evidence_suffixes),
            min_name_segments: self.min_name_segments,
        }
    }

    pub fn validate(&self, production: bool) -> Result<(), ConfigValidationError> {
        let policy = self.naming_policy();
        if policy.prompt_suffixes.is_empty() {
            return Err(ConfigValidationError::MissingRequired("workflow.prompt_suffixes"));
        }
        if policy.evidence_suffixes.is_empty() {
            return Err(ConfigValidationError::MissingRequired("workflow.evidence_suffixes"));
        }
        if let Some(bad) = policy
            .prompt_suffixes
            .iter()
            .chain(policy.evidence_suffixes.iter())
            .find(|s| !s.ends_with(".md"))
        {
            return Err(ConfigValidationError::InvalidSuffix(bad.clone()));
        }
        if self.min_name_segments == 0 {
            return Err(ConfigValidationError::InvalidMinNameSegments);
        }

        let maintainers = self.maintainer_ids()?;
        if production && maintainers.is_empty() {
            return Err(ConfigValidationError::NoMaintainers);
        }
        Ok(())
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            maintainers: String::new(),
            prompt_suffixes: default_prompt_suffixes(),
            evidence_suffixes: default_evidence_suffixes(),
            min_name_segments: default_min_name_segments(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_prompt_suffixes() -> String {
    DEFAULT_PROMPT_SUFFIXES.join(",")
}

fn default_evidence_suffixes() -> String {
    DEFAULT_EVIDENCE_SUFFIXES.join(",")
}

fn default_min_name_segments() -> usize {
    DEFAULT_MIN_NAME_SEGMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_gate() {
        let config = WorkflowConfig::default();
        assert_eq!(config.naming_policy(), NamingPolicy::default());
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn maintainers_are_trimmed_and_split() {
        let config = WorkflowConfig {
            maintainers: " alice, bob ,,".to_string(),
            ..Default::default()
        };
        let ids = config.maintainer_ids().unwrap();
        assert_eq!(
            ids,
            vec![UserId::new("alice").unwrap(), UserId::new("bob").unwrap()]
        );
    }

    #[test]
    fn production_requires_a_maintainer() {
        let config = WorkflowConfig::default();
        assert_eq!(config.validate(true), Err(ConfigValidationError::NoMaintainers));
    }

    #[test]
    fn suffixes_must_be_markdown() {
        let config = WorkflowConfig {
            prompt_suffixes: "_prompt.txt".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(false),
            Err(ConfigValidationError::InvalidSuffix("_prompt.txt".to_string()))
        );
    }

    #[test]
    fn empty_suffix_list_is_rejected() {
        let config = WorkflowConfig {
            evidence_suffixes: " , ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ConfigValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn zero_segments_is_rejected() {
        let config = WorkflowConfig {
            min_name_segments: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(false),
            Err(ConfigValidationError::InvalidMinNameSegments)
        );
    }
}
