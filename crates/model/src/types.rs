use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_util::null_as_default;

/// Court jurisdiction a hearing sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Jurisdiction {
    Crown,
    Magistrates,
}

impl Jurisdiction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crown => "CROWN",
            Self::Magistrates => "MAGISTRATES",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Court building (and optionally room) where a hearing sits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtCentre {
    pub id: Uuid,

    #[serde(default)]
    pub name: String,

    /// Organisation unit code (e.g. "B01LY00")
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub room_id: Option<Uuid>,

    #[serde(default)]
    pub room_name: Option<String>,
}

impl CourtCentre {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: None,
            room_id: None,
            room_name: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingType {
    pub id: Uuid,

    #[serde(default)]
    pub description: String,
}

impl HearingType {
    pub fn new(id: Uuid, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// One sitting day of a hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingDay {
    pub sitting_day: DateTime<Utc>,

    #[serde(default)]
    pub listed_duration_minutes: u32,

    #[serde(default)]
    pub listing_sequence: Option<u32>,
}

impl HearingDay {
    pub const fn new(sitting_day: DateTime<Utc>, listed_duration_minutes: u32) -> Self {
        Self {
            sitting_day,
            listed_duration_minutes,
            listing_sequence: None,
        }
    }

    /// Earliest sitting day among `days`, if any
    #[must_use]
    pub fn earliest(days: &[HearingDay]) -> Option<DateTime<Utc>> {
        days.iter().map(|day| day.sitting_day).min()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudicialRole {
    pub judicial_id: Uuid,

    /// Role type code (e.g. "CIRCUIT_JUDGE", "MAGISTRATE")
    #[serde(default)]
    pub role_type: String,

    #[serde(default)]
    pub is_bench_chairman: bool,
}

/// Forward pointer recorded by a judicial result: a further hearing is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearing {
    /// Identity of the hearing to be listed; the grouping key
    pub hearing_id: Uuid,

    pub jurisdiction_type: Jurisdiction,

    #[serde(default)]
    pub court_centre: Option<CourtCentre>,

    #[serde(default)]
    pub hearing_type: Option<HearingType>,

    #[serde(default)]
    pub estimated_minutes: Option<u32>,

    #[serde(default)]
    pub listed_start_date_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub judiciary: Vec<JudicialRole>,

    #[serde(default)]
    pub reporting_restriction_reason: Option<String>,
}

impl NextHearing {
    pub fn new(hearing_id: Uuid, jurisdiction_type: Jurisdiction) -> Self {
        Self {
            hearing_id,
            jurisdiction_type,
            court_centre: None,
            hearing_type: None,
            estimated_minutes: None,
            listed_start_date_time: None,
            judiciary: Vec::new(),
            reporting_restriction_reason: None,
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
    pub const fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub const fn with_listed_start(mut self, start: DateTime<Utc>) -> Self {
        self.listed_start_date_time = Some(start);
        self
    }

    #[must_use]
    pub fn with_judge(mut self, role: JudicialRole) -> Self {
        self.judiciary.push(role);
        self
    }
}

/// The hearing that originally produced an offence or application.
///
/// Equality and hashing cover both the id and the jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedingHearing {
    pub seeding_hearing_id: Uuid,
    pub jurisdiction_type: Jurisdiction,
}

impl SeedingHearing {
    pub const fn new(seeding_hearing_id: Uuid, jurisdiction_type: Jurisdiction) -> Self {
        Self {
            seeding_hearing_id,
            jurisdiction_type,
        }
    }
}

/// Outcome recorded against an offence, defendant or application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudicialResult {
    pub judicial_result_id: Uuid,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub is_adjournment_result: bool,

    #[serde(default)]
    pub next_hearing: Option<NextHearing>,
}

impl JudicialResult {
    pub fn new(judicial_result_id: Uuid, label: impl Into<String>) -> Self {
        Self {
            judicial_result_id,
            label: label.into(),
            is_adjournment_result: false,
            next_hearing: None,
        }
    }

    /// Adjournment result pointing at `next_hearing`
    pub fn adjournment(judicial_result_id: Uuid, next_hearing: NextHearing) -> Self {
        Self {
            judicial_result_id,
            label: "Adjourned".to_string(),
            is_adjournment_result: true,
            next_hearing: Some(next_hearing),
        }
    }
}

/// Court that committed an offence onward, attached while listing a next hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittingCourt {
    pub court_centre_id: Uuid,

    #[serde(default)]
    pub court_house_name: String,

    #[serde(default)]
    pub court_house_code: Option<String>,

    pub court_house_type: Jurisdiction,
}
