//! Partial allocation: what a hearing holds that listing did not confirm.

use hearing_model::{
    CaseNode, ConfirmedProsecutionCase, DefendantNode, DefendantsToRemove, Hearing, HearingNode,
    Identified, OffencesToRemove, ProsecutionCase, ProsecutionCasesToRemove,
    UpdateHearingForPartialAllocation,
};
use uuid::Uuid;

use crate::error::Result;
use crate::grouping::{offence_paths, CaseTreeBuilder, OffencePath};
use crate::index::{validate_hierarchy, DefendantLookup, HierarchyIndex};

/// Cases, defendants and offences of `full` missing from `confirmed`.
///
/// Only cases that `confirmed` also holds are compared; a case listing did not
/// confirm at all is left out. A defendant absent from its confirmed case is
/// returned whole, otherwise only its unconfirmed offences are. Cases and
/// defendants without a missing offence are omitted.
pub fn get_differences<H: HearingNode>(
    confirmed: &H,
    full: &Hearing,
) -> Result<Vec<ProsecutionCase>> {
    let missing = unconfirmed_offences(confirmed, full)?;
    let delta: CaseTreeBuilder<'_> = missing.into_iter().collect();
    let delta = delta.build();

    log::debug!(
        "Hearing {}: {} case(s) carry offences not confirmed by {}",
        full.id,
        delta.len(),
        confirmed.id()
    );

    Ok(delta)
}

/// Offence paths of `full` that `confirmed` lacks, in walk order.
pub(crate) fn unconfirmed_offences<'a, H: HearingNode>(
    confirmed: &H,
    full: &'a Hearing,
) -> Result<Vec<OffencePath<'a>>> {
    validate_hierarchy(confirmed)?;
    validate_hierarchy(full)?;

    let index = HierarchyIndex::of_hearing(confirmed);
    let missing = offence_paths(&full.prosecution_cases)
        .filter(|path| match index.lookup(path.case.id, path.defendant.id) {
            DefendantLookup::CaseAbsent => false,
            DefendantLookup::DefendantAbsent => true,
            DefendantLookup::Offences(offences) => !offences.contains(&path.offence.id),
        })
        .collect();

    Ok(missing)
}

/// Flatten delta cases 1:1 into a removal command for `hearing_id`
pub fn transform_to_update_hearing_for_partial_allocation<C: CaseNode>(
    hearing_id: Uuid,
    delta_cases: &[C],
) -> UpdateHearingForPartialAllocation {
    let prosecution_cases_to_remove = delta_cases
        .iter()
        .map(|case| ProsecutionCasesToRemove {
            case_id: case.id(),
            defendants_to_remove: case
                .defendants()
                .iter()
                .map(|defendant| DefendantsToRemove {
                    defendant_id: defendant.id(),
                    offences_to_remove: defendant
                        .offences()
                        .iter()
                        .map(|offence| OffencesToRemove {
                            offence_id: offence.id(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    UpdateHearingForPartialAllocation {
        hearing_id,
        prosecution_cases_to_remove,
    }
}

/// Removal command when the confirmed cases themselves are what must leave
/// the hearing, e.g. cases spun off into a hearing of their own
pub fn transform_confirm_prosecution_cases_to_update_hearing_for_partial_allocation(
    hearing_id: Uuid,
    confirmed_cases: &[ConfirmedProsecutionCase],
) -> UpdateHearingForPartialAllocation {
    transform_to_update_hearing_for_partial_allocation(hearing_id, confirmed_cases)
}
