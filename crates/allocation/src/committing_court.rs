use hearing_model::{CommittingCourt, CourtCentre, Jurisdiction, Offence, SeedingHearing};

/// Works out which court committed an offence onward to its next hearing
pub trait OffenceToCommittingCourtConverter {
    fn convert(
        &self,
        offence: &Offence,
        jurisdiction: Jurisdiction,
        seeding_hearing: Option<&SeedingHearing>,
    ) -> Option<CommittingCourt>;
}

impl<F> OffenceToCommittingCourtConverter for F
where
    F: Fn(&Offence, Jurisdiction, Option<&SeedingHearing>) -> Option<CommittingCourt>,
{
    fn convert(
        &self,
        offence: &Offence,
        jurisdiction: Jurisdiction,
        seeding_hearing: Option<&SeedingHearing>,
    ) -> Option<CommittingCourt> {
        self(offence, jurisdiction, seeding_hearing)
    }
}

/// Never produces a committing court
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommittingCourt;

impl OffenceToCommittingCourtConverter for NoCommittingCourt {
    fn convert(
        &self,
        _offence: &Offence,
        _jurisdiction: Jurisdiction,
        _seeding_hearing: Option<&SeedingHearing>,
    ) -> Option<CommittingCourt> {
        None
    }
}

/// Commits from a known magistrates' court centre.
///
/// Only offences that reached the hearing through the magistrates' court are
/// committed: the seeding hearing's jurisdiction decides when there is one,
/// otherwise the resulted hearing's own.
#[derive(Debug, Clone, Default)]
pub struct CourtCentreCommittingCourt {
    court_centre: Option<CourtCentre>,
}

impl CourtCentreCommittingCourt {
    pub const fn new(court_centre: Option<CourtCentre>) -> Self {
        Self { court_centre }
    }
}

impl OffenceToCommittingCourtConverter for CourtCentreCommittingCourt {
    fn convert(
        &self,
        _offence: &Offence,
        jurisdiction: Jurisdiction,
        seeding_hearing: Option<&SeedingHearing>,
    ) -> Option<CommittingCourt> {
        let source = seeding_hearing.map_or(jurisdiction, |seeding| seeding.jurisdiction_type);
        if source != Jurisdiction::Magistrates {
            return None;
        }

        self.court_centre.as_ref().map(|centre| CommittingCourt {
            court_centre_id: centre.id,
            court_house_name: centre.name.clone(),
            court_house_code: centre.code.clone(),
            court_house_type: Jurisdiction::Magistrates,
        })
    }
}
