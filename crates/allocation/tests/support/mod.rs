#![allow(dead_code)]

use std::collections::BTreeSet;

use hearing_model::{
    ConfirmedDefendant, ConfirmedHearing, ConfirmedProsecutionCase, CourtApplication, CourtCentre,
    Defendant, Hearing, HearingType, JudicialResult, Jurisdiction, NextHearing, Offence,
    ProsecutionCase, SeedingHearing,
};
use uuid::Uuid;

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn next_hearing(hearing: u128) -> NextHearing {
    let centre = CourtCentre::new(id(9_000 + hearing), "Snaresbrook Crown Court");
    NextHearing::new(id(hearing), Jurisdiction::Crown)
        .with_court_centre(centre)
        .with_hearing_type(HearingType::new(id(8_000), "Plea and Trial Preparation"))
}

/// Offence adjourned to `hearing`
pub fn adjourned(offence: u128, hearing: u128) -> Offence {
    let result = JudicialResult::adjournment(id(offence + 1_000_000), next_hearing(hearing));
    Offence::new(id(offence)).with_result(result)
}

/// Offence resulted without a next hearing
pub fn finalised(offence: u128) -> Offence {
    Offence::new(id(offence)).with_result(JudicialResult::new(id(offence + 1_000_000), "Guilty"))
}

pub fn seeded(offence: u128, seeding: SeedingHearing) -> Offence {
    Offence::new(id(offence)).with_seeding_hearing(seeding)
}

pub fn defendant(defendant: u128, case: u128, offences: Vec<Offence>) -> Defendant {
    let seed = Defendant::new(id(defendant)).in_case(id(case));
    offences.into_iter().fold(seed, Defendant::with_offence)
}

pub fn case(case: u128, defendants: Vec<Defendant>) -> ProsecutionCase {
    let seed = ProsecutionCase::new(id(case));
    defendants
        .into_iter()
        .fold(seed, ProsecutionCase::with_defendant)
}

pub fn hearing(hearing: u128, cases: Vec<ProsecutionCase>) -> Hearing {
    let seed = Hearing::new(id(hearing), Jurisdiction::Crown);
    cases.into_iter().fold(seed, Hearing::with_case)
}

pub fn application(
    application: u128,
    linked_case: Option<u128>,
    next: Option<u128>,
) -> CourtApplication {
    let mut built = CourtApplication::new(id(application));
    if let Some(case) = linked_case {
        built = built.linked_to(id(case));
    }
    if let Some(hearing) = next {
        let next = next_hearing(hearing);
        let result = JudicialResult::adjournment(id(application + 1_000_000), next);
        built = built.with_result(result);
    }
    built
}

/// Confirmed hearing from `(case, [(defendant, [offence])])` tuples
pub fn confirmed(hearing: u128, cases: Vec<(u128, Vec<(u128, Vec<u128>)>)>) -> ConfirmedHearing {
    let mut built = ConfirmedHearing::new(id(hearing), Jurisdiction::Crown);
    for (case, defendants) in cases {
        let mut confirmed_case = ConfirmedProsecutionCase::new(id(case));
        for (defendant, offences) in defendants {
            let mut confirmed_defendant = ConfirmedDefendant::new(id(defendant));
            for offence in offences {
                confirmed_defendant = confirmed_defendant.with_offence(id(offence));
            }
            confirmed_case = confirmed_case.with_defendant(confirmed_defendant);
        }
        built = built.with_case(confirmed_case);
    }
    built
}

/// `(case, defendant, offence)` ids of a case list, in walk order
pub fn triples(cases: &[ProsecutionCase]) -> Vec<(Uuid, Uuid, Uuid)> {
    cases
        .iter()
        .flat_map(|case| {
            case.defendants.iter().flat_map(move |defendant| {
                defendant
                    .offences
                    .iter()
                    .map(move |offence| (case.id, defendant.id, offence.id))
            })
        })
        .collect()
}

pub fn offence_set(cases: &[ProsecutionCase]) -> BTreeSet<Uuid> {
    cases.iter().flat_map(ProsecutionCase::offence_ids).collect()
}
