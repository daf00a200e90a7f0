use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_util::null_as_default;
use crate::types::{CourtCentre, HearingDay, HearingType, Jurisdiction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedOffence {
    pub id: Uuid,
}

impl ConfirmedOffence {
    pub const fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedDefendant {
    pub id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub offences: Vec<ConfirmedOffence>,
}

impl ConfirmedDefendant {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            offences: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_offence(mut self, offence_id: Uuid) -> Self {
        self.offences.push(ConfirmedOffence::new(offence_id));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedProsecutionCase {
    pub id: Uuid,

    #[serde(default, deserialize_with = "null_as_default")]
    pub defendants: Vec<ConfirmedDefendant>,
}

impl ConfirmedProsecutionCase {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            defendants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_defendant(mut self, defendant: ConfirmedDefendant) -> Self {
        self.defendants.push(defendant);
        self
    }
}

/// The part of a hearing that listing confirmed would actually proceed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedHearing {
    pub id: Uuid,

    pub jurisdiction_type: Jurisdiction,

    #[serde(default)]
    pub court_centre: Option<CourtCentre>,

    #[serde(default)]
    pub hearing_type: Option<HearingType>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hearing_days: Vec<HearingDay>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prosecution_cases: Vec<ConfirmedProsecutionCase>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub court_application_ids: Vec<Uuid>,
}

impl ConfirmedHearing {
    pub const fn new(id: Uuid, jurisdiction_type: Jurisdiction) -> Self {
        Self {
            id,
            jurisdiction_type,
            court_centre: None,
            hearing_type: None,
            hearing_days: Vec::new(),
            prosecution_cases: Vec::new(),
            court_application_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_court_centre(mut self, court_centre: CourtCentre) -> Self {
        self.court_centre = Some(court_centre);
        self
    }

    #[must_use]
    pub fn with_case(mut self, case: ConfirmedProsecutionCase) -> Self {
        self.prosecution_cases.push(case);
        self
    }
}
