//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Maximum length for a user identifier.
pub const MAX_USER_ID_LENGTH: usize = 128;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a submission (the pull-request analogue).
    SubmissionId
);

uuid_identifier!(
    /// Unique identifier for a recorded review decision.
    DecisionId
);

uuid_identifier!(
    /// Unique identifier for a published event, used by consumers to
    /// drop redeliveries.
    EventId
);

/// Identity of a contributor or maintainer.
///
/// Opaque to the workflow: whatever the transport authenticates (a git
/// handle, an email, an SSO subject) is accepted as long as it is
/// non-blank and reasonably short.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if blank or too long.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        if trimmed.len() > MAX_USER_ID_LENGTH {
            return Err(ValidationError::invalid_format(
                "user_id",
                format!("must be {} characters or less", MAX_USER_ID_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }

    #[test]
    fn submission_id_parses_from_display() {
        let id = SubmissionId::new();
        let parsed: SubmissionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn submission_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SubmissionId>().is_err());
    }

    #[test]
    fn decision_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = DecisionId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn user_id_rejects_blank() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn user_id_trims_whitespace() {
        let id = UserId::new("  octocat ").unwrap();
        assert_eq!(id.as_str(), "octocat");
    }

    #[test]
    fn user_id_rejects_overlong() {
        let long = "u".repeat(MAX_USER_ID_LENGTH + 1);
        assert!(UserId::new(long).is_err());
    }

    #[test]
    fn user_id_deserialization_validates() {
        let ok: Result<UserId, _> = serde_json::from_str("\"maintainer-1\"");
        assert!(ok.is_ok());

        let blank: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(blank.is_err());
    }
}
