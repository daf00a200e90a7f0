//! Listing requests produced for new or next hearings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::case::{CourtApplication, ProsecutionCase};
use crate::serde_util::null_as_default;
use crate::types::{CourtCentre, HearingType, JudicialRole, Jurisdiction, SeedingHearing};

/// Everything listing needs to schedule one hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingListingNeeds {
    pub id: Uuid,

    pub jurisdiction_type: Jurisdiction,

    #[serde(default)]
    pub court_centre: Option<CourtCentre>,

    #[serde(default)]
    pub hearing_type: Option<HearingType>,

    pub estimated_minutes: u32,

    #[serde(default)]
    pub earliest_start_date_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub listed_start_date_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub judiciary: Vec<JudicialRole>,

    #[serde(default)]
    pub reporting_restriction_reason: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prosecution_cases: Vec<ProsecutionCase>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub court_applications: Vec<CourtApplication>,
}

impl HearingListingNeeds {
    /// Offence ids carried by this listing, in walk order
    #[must_use]
    pub fn offence_ids(&self) -> Vec<Uuid> {
        self.prosecution_cases
            .iter()
            .flat_map(ProsecutionCase::offence_ids)
            .collect()
    }

    #[must_use]
    pub fn application_ids(&self) -> Vec<Uuid> {
        self.court_applications.iter().map(|app| app.id).collect()
    }
}

/// Next hearings split off a resulted hearing, one entry per next-hearing id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearingDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hearing_listing_needs: Vec<HearingListingNeeds>,
}

impl NextHearingDetails {
    #[must_use]
    pub fn len(&self) -> usize {
        self.hearing_listing_needs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hearing_listing_needs.is_empty()
    }

    /// Listing for a next-hearing id
    #[must_use]
    pub fn get(&self, hearing_id: Uuid) -> Option<&HearingListingNeeds> {
        self.hearing_listing_needs
            .iter()
            .find(|listing| listing.id == hearing_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HearingListingNeeds> {
        self.hearing_listing_needs.iter()
    }

    #[must_use]
    pub fn hearing_ids(&self) -> Vec<Uuid> {
        self.iter().map(|listing| listing.id).collect()
    }
}

impl<'a> IntoIterator for &'a NextHearingDetails {
    type Item = &'a HearingListingNeeds;
    type IntoIter = std::slice::Iter<'a, HearingListingNeeds>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Request to list one or more brand new hearings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCourtHearing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hearings: Vec<HearingListingNeeds>,
}

impl From<NextHearingDetails> for ListCourtHearing {
    fn from(details: NextHearingDetails) -> Self {
        Self {
            hearings: details.hearing_listing_needs,
        }
    }
}

/// Request to list hearings seeded by an earlier hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNextHearings {
    /// Hearing whose partial allocation triggered the listing
    pub hearing_id: Uuid,

    pub seeding_hearing: SeedingHearing,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hearings: Vec<HearingListingNeeds>,
}
