use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_util::null_as_default;
use crate::types::{
    CommittingCourt, CourtCentre, HearingDay, HearingType, JudicialResult, JudicialRole,
    Jurisdiction, NextHearing, SeedingHearing,
};

/// A single charge against a defendant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offence {
    pub id: Uuid,

    #[serde(default)]
    pub offence_code: Option<String>,

    /// Position of the offence on the charge sheet
    #[serde(default)]
    pub order_index: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub judicial_results: Vec<JudicialResult>,

    /// Hearing that produced this offence's current listing
    #[serde(default)]
    pub seeding_hearing: Option<SeedingHearing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committing_court: Option<CommittingCourt>,
}

impl Offence {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            offence_code: None,
            order_index: None,
            judicial_results: Vec::new(),
            seeding_hearing: None,
            committing_court: None,
        }
    }

    #[must_use]
    pub fn with_result(mut self, result: JudicialResult) -> Self {
        self.judicial_results.push(result);
        self
    }

    #[must_use]
    pub const fn with_seeding_hearing(mut self, seeding_hearing: SeedingHearing) -> Self {
        self.seeding_hearing = Some(seeding_hearing);
        self
    }

    /// First next-hearing pointer among the offence's results
    #[must_use]
    pub fn next_hearing(&self) -> Option<&NextHearing> {
        first_next_hearing(&self.judicial_results)
    }

    #[must_use]
    pub fn has_next_hearing(&self) -> bool {
        self.next_hearing().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defendant {
    pub id: Uuid,

    #[serde(default)]
    pub master_defendant_id: Option<Uuid>,

    /// Back-reference to the owning case, when supplied upstream
    #[serde(default)]
    pub prosecution_case_id: Option<Uuid>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub offences: Vec<Offence>,

    /// Defendant-level results; these never open a next-hearing grouping
    #[serde(default, deserialize_with = "null_as_default")]
    pub defendant_results: Vec<JudicialResult>,
}

impl Defendant {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            master_defendant_id: None,
            prosecution_case_id: None,
            offences: Vec::new(),
            defendant_results: Vec::new(),
        }
    }

    #[must_use]
    pub const fn in_case(mut self, case_id: Uuid) -> Self {
        self.prosecution_case_id = Some(case_id);
        self
    }

    #[must_use]
    pub fn with_offence(mut self, offence: Offence) -> Self {
        self.offences.push(offence);
        self
    }

    #[must_use]
    pub fn with_defendant_result(mut self, result: JudicialResult) -> Self {
        self.defendant_results.push(result);
        self
    }

    /// Copy of this defendant with no offences attached
    #[must_use]
    pub fn without_offences(&self) -> Self {
        Self {
            id: self.id,
            master_defendant_id: self.master_defendant_id,
            prosecution_case_id: self.prosecution_case_id,
            offences: Vec::new(),
            defendant_results: self.defendant_results.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsecutionCase {
    pub id: Uuid,

    /// Prosecuting organisation code (e.g. "GAFTL00")
    #[serde(default)]
    pub originating_organisation: Option<String>,

    #[serde(default)]
    pub case_urn: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub defendants: Vec<Defendant>,
}

impl ProsecutionCase {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            originating_organisation: None,
            case_urn: None,
            defendants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_urn(mut self, urn: impl Into<String>) -> Self {
        self.case_urn = Some(urn.into());
        self
    }

    #[must_use]
    pub fn with_defendant(mut self, defendant: Defendant) -> Self {
        self.defendants.push(defendant);
        self
    }

    /// Copy of this case with no defendants attached
    #[must_use]
    pub fn without_defendants(&self) -> Self {
        Self {
            id: self.id,
            originating_organisation: self.originating_organisation.clone(),
            case_urn: self.case_urn.clone(),
            defendants: Vec::new(),
        }
    }

    /// All offence ids in walk order
    pub fn offence_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.defendants
            .iter()
            .flat_map(|defendant| defendant.offences.iter().map(|offence| offence.id))
    }
}

/// Application made to the court, optionally linked to a prosecution case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtApplication {
    pub id: Uuid,

    #[serde(default)]
    pub application_reference: Option<String>,

    /// Case id this application is raised against
    #[serde(default)]
    pub linked_case_id: Option<Uuid>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub judicial_results: Vec<JudicialResult>,

    #[serde(default)]
    pub seeding_hearing: Option<SeedingHearing>,
}

impl CourtApplication {
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            application_reference: None,
            linked_case_id: None,
            judicial_results: Vec::new(),
            seeding_hearing: None,
        }
    }

    #[must_use]
    pub const fn linked_to(mut self, case_id: Uuid) -> Self {
        self.linked_case_id = Some(case_id);
        self
    }

    #[must_use]
    pub fn with_result(mut self, result: JudicialResult) -> Self {
        self.judicial_results.push(result);
        self
    }

    #[must_use]
    pub fn next_hearing(&self) -> Option<&NextHearing> {
        first_next_hearing(&self.judicial_results)
    }
}

/// Full hearing snapshot as held by progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hearing {
    pub id: Uuid,

    pub jurisdiction_type: Jurisdiction,

    #[serde(default)]
    pub court_centre: Option<CourtCentre>,

    #[serde(default)]
    pub hearing_type: Option<HearingType>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hearing_days: Vec<HearingDay>,

    #[serde(default)]
    pub estimated_minutes: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub judiciary: Vec<JudicialRole>,

    #[serde(default)]
    pub reporting_restriction_reason: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prosecution_cases: Vec<ProsecutionCase>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub court_applications: Vec<CourtApplication>,
}

impl Hearing {
    pub const fn new(id: Uuid, jurisdiction_type: Jurisdiction) -> Self {
        Self {
            id,
            jurisdiction_type,
            court_centre: None,
            hearing_type: None,
            hearing_days: Vec::new(),
            estimated_minutes: None,
            judiciary: Vec::new(),
            reporting_restriction_reason: None,
            prosecution_cases: Vec::new(),
            court_applications: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_court_centre(mut self, court_centre: CourtCentre) -> Self {
        self.court_centre = Some(court_centre);
        self
    }

    #[must_use]
    pub fn with_hearing_type(mut self, hearing_type: HearingType) -> Self {
        self.hearing_type = Some(hearing_type);
        self
    }

    #[must_use]
    pub fn with_hearing_day(mut self, day: HearingDay) -> Self {
        self.hearing_days.push(day);
        self
    }

    #[must_use]
    pub fn with_case(mut self, case: ProsecutionCase) -> Self {
        self.prosecution_cases.push(case);
        self
    }

    #[must_use]
    pub fn with_application(mut self, application: CourtApplication) -> Self {
        self.court_applications.push(application);
        self
    }

    #[must_use]
    pub fn earliest_sitting_day(&self) -> Option<DateTime<Utc>> {
        HearingDay::earliest(&self.hearing_days)
    }
}

fn first_next_hearing(results: &[JudicialResult]) -> Option<&NextHearing> {
    results.iter().find_map(|result| result.next_hearing.as_ref())
}
