//! Removal commands for detaching unconfirmed parts of a hearing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_util::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffencesToRemove {
    pub offence_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefendantsToRemove {
    pub defendant_id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub offences_to_remove: Vec<OffencesToRemove>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsecutionCasesToRemove {
    pub case_id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub defendants_to_remove: Vec<DefendantsToRemove>,
}

/// Hearing mutation detaching the listed cases, defendants and offences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHearingForPartialAllocation {
    pub hearing_id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prosecution_cases_to_remove: Vec<ProsecutionCasesToRemove>,
}

impl UpdateHearingForPartialAllocation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prosecution_cases_to_remove.is_empty()
    }

    /// Total number of offences being removed
    #[must_use]
    pub fn offence_count(&self) -> usize {
        self.prosecution_cases_to_remove
            .iter()
            .flat_map(|case| &case.defendants_to_remove)
            .map(|defendant| defendant.offences_to_remove.len())
            .sum()
    }

    /// Offences removed from one defendant of one case, if that defendant is listed
    #[must_use]
    pub fn offences_for(&self, case_id: Uuid, defendant_id: Uuid) -> Option<&[OffencesToRemove]> {
        self.prosecution_cases_to_remove
            .iter()
            .find(|case| case.case_id == case_id)?
            .defendants_to_remove
            .iter()
            .find(|defendant| defendant.defendant_id == defendant_id)
            .map(|defendant| defendant.offences_to_remove.as_slice())
    }
}
