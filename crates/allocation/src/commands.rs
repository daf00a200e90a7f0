use chrono::{DateTime, Utc};
use hearing_model::{
    ConfirmedHearing, Hearing, HearingListingNeeds, ListCourtHearing, ListNextHearings,
    ProsecutionCase, SeedingHearing,
};
use uuid::Uuid;

use crate::config::AllocationConfig;
use crate::seeded::SeededProsecutionCases;

/// Builds re-listing commands for cases detached from a hearing.
///
/// Each new listing takes its id from `next_id`, random v4 ids unless a
/// source is supplied with [`ListingCommandBuilder::with_id_source`].
#[derive(Debug, Clone)]
pub struct ListingCommandBuilder<F = fn() -> Uuid> {
    config: AllocationConfig,
    next_id: F,
}

impl ListingCommandBuilder {
    pub fn new(config: AllocationConfig) -> Self {
        Self {
            config,
            next_id: Uuid::new_v4,
        }
    }
}

impl Default for ListingCommandBuilder {
    fn default() -> Self {
        Self::new(AllocationConfig::default())
    }
}

impl<F: Fn() -> Uuid> ListingCommandBuilder<F> {
    pub fn with_id_source(config: AllocationConfig, next_id: F) -> Self {
        Self { config, next_id }
    }

    /// List `delta_cases` as a new hearing shaped like the one in progression
    pub fn transform_to_list_court_hearing(
        &self,
        delta_cases: &[ProsecutionCase],
        confirmed: &ConfirmedHearing,
        hearing_in_progression: &Hearing,
    ) -> ListCourtHearing {
        let listing = self.listing_needs(delta_cases, confirmed, hearing_in_progression);
        ListCourtHearing {
            hearings: vec![listing],
        }
    }

    /// List `delta_cases` as a next hearing of `seeding_hearing`
    pub fn transform_to_list_next_court_hearing(
        &self,
        delta_cases: &[ProsecutionCase],
        confirmed: &ConfirmedHearing,
        hearing_in_progression: &Hearing,
        seeding_hearing: SeedingHearing,
    ) -> ListNextHearings {
        let listing = self.listing_needs(delta_cases, confirmed, hearing_in_progression);
        ListNextHearings {
            hearing_id: confirmed.id,
            seeding_hearing,
            hearings: vec![listing],
        }
    }

    /// One next-hearing listing per related seeding hearing
    pub fn transform_related_seeding_hearings(
        &self,
        related: &[SeededProsecutionCases],
        confirmed: &ConfirmedHearing,
        hearing_in_progression: &Hearing,
    ) -> Vec<ListNextHearings> {
        related
            .iter()
            .map(|group| {
                self.transform_to_list_next_court_hearing(
                    &group.prosecution_cases,
                    confirmed,
                    hearing_in_progression,
                    group.seeding_hearing,
                )
            })
            .collect()
    }

    fn listing_needs(
        &self,
        delta_cases: &[ProsecutionCase],
        confirmed: &ConfirmedHearing,
        hearing_in_progression: &Hearing,
    ) -> HearingListingNeeds {
        let earliest_start: Option<DateTime<Utc>> = hearing_in_progression.earliest_sitting_day();
        let id = (self.next_id)();

        log::debug!(
            "Listing {} detached case(s) from hearing {} as new hearing {}",
            delta_cases.len(),
            hearing_in_progression.id,
            id
        );

        HearingListingNeeds {
            id,
            jurisdiction_type: hearing_in_progression.jurisdiction_type,
            court_centre: hearing_in_progression
                .court_centre
                .clone()
                .or_else(|| confirmed.court_centre.clone()),
            hearing_type: hearing_in_progression
                .hearing_type
                .clone()
                .or_else(|| confirmed.hearing_type.clone()),
            estimated_minutes: hearing_in_progression
                .estimated_minutes
                .unwrap_or(self.config.default_estimated_minutes),
            earliest_start_date_time: earliest_start,
            listed_start_date_time: None,
            judiciary: hearing_in_progression.judiciary.clone(),
            reporting_restriction_reason: hearing_in_progression
                .reporting_restriction_reason
                .clone(),
            prosecution_cases: delta_cases.to_vec(),
            court_applications: Vec::new(),
        }
    }
}
