use std::collections::HashSet;

use hearing_model::{
    CourtApplication, Hearing, HearingListingNeeds, NextHearing, NextHearingDetails, Offence,
    SeedingHearing,
};
use uuid::Uuid;

use crate::committing_court::{NoCommittingCourt, OffenceToCommittingCourtConverter};
use crate::config::AllocationConfig;
use crate::error::Result;
use crate::grouping::{group_by_key, offence_paths, CaseTreeBuilder, OffencePath, OrderedGroups};
use crate::index::validate_hierarchy;

/// Splits a resulted hearing into the next hearings its results asked for
pub struct NextHearingGrouper<C = NoCommittingCourt> {
    config: AllocationConfig,
    converter: C,
}

impl NextHearingGrouper<NoCommittingCourt> {
    pub fn new(config: AllocationConfig) -> Self {
        Self {
            config,
            converter: NoCommittingCourt,
        }
    }
}

impl Default for NextHearingGrouper<NoCommittingCourt> {
    fn default() -> Self {
        Self::new(AllocationConfig::default())
    }
}

impl<C: OffenceToCommittingCourtConverter> NextHearingGrouper<C> {
    pub const fn with_converter(config: AllocationConfig, converter: C) -> Self {
        Self { config, converter }
    }

    /// Group every offence and application carrying a next hearing by that
    /// hearing's id.
    ///
    /// Listings come out in first-encounter order: cases depth-first, then
    /// applications. An offence lands in exactly one listing; an application
    /// is carried once per listing even when it is repeated or its linked case
    /// is already there.
    pub fn get_next_hearing_details(
        &self,
        hearing: &Hearing,
        include_committing_court: bool,
        seeding_hearing: Option<&SeedingHearing>,
    ) -> Result<NextHearingDetails> {
        validate_hierarchy(hearing)?;

        let offences = offence_paths(&hearing.prosecution_cases)
            .filter_map(|path| path.offence.next_hearing().map(|next| (path, next)));
        let applications = hearing
            .court_applications
            .iter()
            .filter_map(|app| app.next_hearing().map(|next| (app, next)));

        let offence_groups = group_by_key(offences, |(_, next)| Some(next.hearing_id));
        let application_groups = group_by_key(applications, |(_, next)| Some(next.hearing_id));

        log::debug!(
            "Next hearing grouping for {}: {} offence groups, {} application groups",
            hearing.id,
            offence_groups.len(),
            application_groups.len()
        );

        let mut listings: OrderedGroups<Uuid, ListingDraft<'_>> = OrderedGroups::new();

        for (hearing_id, paths) in offence_groups {
            for (path, next) in paths {
                let offence =
                    self.prepare_offence(path, hearing, include_committing_court, seeding_hearing);
                listings
                    .get_or_insert_with(hearing_id, || ListingDraft::new(next))
                    .push_offence(path, offence);
            }
        }

        for (hearing_id, applications) in application_groups {
            for (application, next) in applications {
                listings
                    .get_or_insert_with(hearing_id, || ListingDraft::new(next))
                    .merge_application(application, self.stamp(seeding_hearing));
            }
        }

        let hearing_listing_needs: Vec<_> = listings
            .into_iter()
            .map(|(_, draft)| draft.into_listing(&self.config))
            .collect();

        log::info!(
            "Hearing {} resulted into {} next hearing(s)",
            hearing.id,
            hearing_listing_needs.len()
        );

        Ok(NextHearingDetails {
            hearing_listing_needs,
        })
    }

    fn stamp<'s>(
        &self,
        seeding_hearing: Option<&'s SeedingHearing>,
    ) -> Option<&'s SeedingHearing> {
        seeding_hearing.filter(|_| self.config.stamp_seeding_hearing)
    }

    fn prepare_offence(
        &self,
        path: OffencePath<'_>,
        hearing: &Hearing,
        include_committing_court: bool,
        seeding_hearing: Option<&SeedingHearing>,
    ) -> Offence {
        let mut offence = path.offence.clone();

        if include_committing_court {
            if let Some(court) =
                self.converter
                    .convert(path.offence, hearing.jurisdiction_type, seeding_hearing)
            {
                offence.committing_court = Some(court);
            }
        }

        if let Some(seeding) = self.stamp(seeding_hearing) {
            offence.seeding_hearing = Some(*seeding);
        }

        offence
    }
}

/// One next hearing being assembled from case and application results
struct ListingDraft<'a> {
    next: &'a NextHearing,
    cases: CaseTreeBuilder<'a>,
    applications: Vec<CourtApplication>,
    application_ids: HashSet<Uuid>,
}

impl<'a> ListingDraft<'a> {
    fn new(next: &'a NextHearing) -> Self {
        Self {
            next,
            cases: CaseTreeBuilder::new(),
            applications: Vec::new(),
            application_ids: HashSet::new(),
        }
    }

    fn push_offence(&mut self, path: OffencePath<'a>, offence: Offence) {
        self.cases.push_with(path, offence);
    }

    fn merge_application(
        &mut self,
        application: &CourtApplication,
        seeding_hearing: Option<&SeedingHearing>,
    ) {
        if !self.application_ids.insert(application.id) {
            log::warn!(
                "Application {} repeated under next hearing {}, keeping first",
                application.id,
                self.next.hearing_id
            );
            return;
        }

        if let Some(case_id) = application.linked_case_id {
            if self.cases.contains_case(case_id) {
                log::debug!(
                    "Application {} shares next hearing {} with its linked case {}",
                    application.id,
                    self.next.hearing_id,
                    case_id
                );
            }
        }

        let mut application = application.clone();
        if let Some(seeding) = seeding_hearing {
            application.seeding_hearing = Some(*seeding);
        }
        self.applications.push(application);
    }

    fn into_listing(self, config: &AllocationConfig) -> HearingListingNeeds {
        let next = self.next;
        HearingListingNeeds {
            id: next.hearing_id,
            jurisdiction_type: next.jurisdiction_type,
            court_centre: next.court_centre.clone(),
            hearing_type: next.hearing_type.clone(),
            estimated_minutes: next
                .estimated_minutes
                .unwrap_or(config.default_estimated_minutes),
            earliest_start_date_time: next.listed_start_date_time,
            listed_start_date_time: next.listed_start_date_time,
            judiciary: next.judiciary.clone(),
            reporting_restriction_reason: next.reporting_restriction_reason.clone(),
            prosecution_cases: self.cases.build(),
            court_applications: self.applications,
        }
    }
}
