use thiserror::Error;
use uuid::Uuid;

/// Result type for allocation operations
pub type Result<T> = std::result::Result<T, AllocationError>;

/// Errors raised while grouping or diffing a hearing hierarchy
#[derive(Error, Debug)]
pub enum AllocationError {
    /// The same case is attached to a hearing twice
    #[error("Duplicate prosecution case {case_id} in hearing {hearing_id}")]
    DuplicateCase { hearing_id: Uuid, case_id: Uuid },

    /// The same defendant appears twice under one case
    #[error("Duplicate defendant {defendant_id} in prosecution case {case_id}")]
    DuplicateDefendant { case_id: Uuid, defendant_id: Uuid },

    /// An offence id is reachable more than once in a hearing
    #[error("Offence {offence_id} repeated in hearing {hearing_id} (defendant {defendant_id})")]
    DuplicateOffence {
        hearing_id: Uuid,
        defendant_id: Uuid,
        offence_id: Uuid,
    },

    /// A defendant's case back-reference disagrees with where it is nested
    #[error("Defendant {defendant_id} under case {case_id} references case {referenced_case_id}")]
    DefendantCaseMismatch {
        case_id: Uuid,
        defendant_id: Uuid,
        referenced_case_id: Uuid,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AllocationError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error comes from a malformed hierarchy rather than setup
    #[must_use]
    pub const fn is_integrity_defect(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCase { .. }
                | Self::DuplicateDefendant { .. }
                | Self::DuplicateOffence { .. }
                | Self::DefendantCaseMismatch { .. }
        )
    }
}
