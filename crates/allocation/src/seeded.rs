//! Partial allocation across chains of seeded hearings.
//!
//! A hearing in progression can hold offences seeded by different earlier
//! hearings. When only part of it is confirmed, the unconfirmed offences are
//! split by the hearing that seeded them: those seeded by the current seeding
//! hearing go back to it, the rest are handed to their own seeding hearings.

use std::collections::HashSet;

use hearing_model::{Hearing, HearingNode, ProsecutionCase, SeedingHearing};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::grouping::{group_by_key, offence_paths, CaseTreeBuilder};
use crate::index::{validate_hierarchy, HierarchyIndex};
use crate::partial::unconfirmed_offences;

/// Unconfirmed cases belonging to one seeding hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededProsecutionCases {
    pub seeding_hearing: SeedingHearing,
    pub prosecution_cases: Vec<ProsecutionCase>,
}

/// Unconfirmed offences of `hearing_in_progression` seeded by `seeding_hearing`
pub fn get_delta_seeded_prosecution_cases<H: HearingNode>(
    confirmed: &H,
    hearing_in_progression: &Hearing,
    seeding_hearing: &SeedingHearing,
) -> Result<Vec<ProsecutionCase>> {
    let wanted = Some(*seeding_hearing);
    let seeded: CaseTreeBuilder<'_> = unconfirmed_offences(confirmed, hearing_in_progression)?
        .into_iter()
        .filter(|path| path.offence.seeding_hearing == wanted)
        .collect();

    Ok(seeded.build())
}

/// Offences seeded by any other hearing and confirmed nowhere, grouped by
/// that hearing.
///
/// Unlike the delta-seeded set this covers whole cases the confirmed hearing
/// does not hold at all. Groups follow the order their first offence is met
/// in; offences with no seeding hearing are never grouped.
pub fn get_related_seeding_hearings_prosecution_cases_map<H: HearingNode>(
    confirmed: &H,
    hearing_in_progression: &Hearing,
    seeding_hearing: &SeedingHearing,
) -> Result<Vec<SeededProsecutionCases>> {
    validate_hierarchy(confirmed)?;
    validate_hierarchy(hearing_in_progression)?;

    let index = HierarchyIndex::of_hearing(confirmed);
    let confirmed_offences: HashSet<Uuid> = index.offence_ids().collect();
    let missing = offence_paths(&hearing_in_progression.prosecution_cases)
        .filter(|path| !confirmed_offences.contains(&path.offence.id));
    let groups = group_by_key(missing, |path| {
        path.offence
            .seeding_hearing
            .filter(|other| other != seeding_hearing)
    });

    let related: Vec<_> = groups
        .into_iter()
        .map(|(seeding_hearing, paths)| SeededProsecutionCases {
            seeding_hearing,
            prosecution_cases: paths.into_iter().collect::<CaseTreeBuilder<'_>>().build(),
        })
        .collect();

    if !related.is_empty() {
        log::info!(
            "Hearing {} partial allocation touches {} related seeding hearing(s)",
            hearing_in_progression.id,
            related.len()
        );
    }

    Ok(related)
}
