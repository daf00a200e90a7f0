mod support;

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use hearing_allocation::{
    AllocationConfig, AllocationError, CourtCentreCommittingCourt, NextHearingGrouper,
};
use hearing_model::{
    CommittingCourt, CourtCentre, Hearing, JudicialResult, JudicialRole, Jurisdiction,
    NextHearingDetails, Offence, SeedingHearing,
};
use pretty_assertions::assert_eq;
use support::*;

fn group(resulted: &Hearing) -> NextHearingDetails {
    NextHearingGrouper::default()
        .get_next_hearing_details(resulted, false, None)
        .expect("grouping")
}

#[test]
fn offences_sharing_a_next_hearing_form_one_listing() {
    let offences = vec![adjourned(100, 500), adjourned(101, 500)];
    let resulted = hearing(50, vec![case(1, vec![defendant(10, 1, offences)])]);

    let details = group(&resulted);

    assert_eq!(details.len(), 1);
    let listing = details.get(id(500)).expect("listing for hearing 500");
    assert_eq!(
        triples(&listing.prosecution_cases),
        vec![(id(1), id(10), id(100)), (id(1), id(10), id(101))]
    );
    assert_eq!(listing.prosecution_cases, resulted.prosecution_cases);
}

#[test]
fn defendant_split_across_next_hearings_appears_in_each() {
    let offences = vec![adjourned(100, 500), adjourned(101, 501)];
    let resulted = hearing(50, vec![case(1, vec![defendant(10, 1, offences)])]);

    let details = group(&resulted);

    assert_eq!(details.hearing_ids(), vec![id(500), id(501)]);
    assert_eq!(details.get(id(500)).unwrap().offence_ids(), vec![id(100)]);
    assert_eq!(details.get(id(501)).unwrap().offence_ids(), vec![id(101)]);
    for listing in &details {
        let cases = &listing.prosecution_cases;
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].defendants.len(), 1);
        assert_eq!(cases[0].defendants[0].id, id(10));
    }
}

#[test]
fn offences_without_next_hearing_are_left_out() {
    let mixed = vec![Offence::new(id(100)), finalised(101), adjourned(102, 500)];
    let resulted = hearing(
        50,
        vec![
            case(
                1,
                vec![
                    defendant(10, 1, mixed),
                    defendant(11, 1, vec![finalised(110)]),
                ],
            ),
            case(2, vec![defendant(20, 2, vec![Offence::new(id(200))])]),
        ],
    );

    let details = group(&resulted);

    assert_eq!(details.len(), 1);
    assert_eq!(
        triples(&details.get(id(500)).unwrap().prosecution_cases),
        vec![(id(1), id(10), id(102))]
    );
}

#[test]
fn every_adjourned_offence_lands_in_exactly_one_listing() {
    let first = vec![adjourned(100, 500), finalised(101), adjourned(102, 502)];
    let second = vec![adjourned(110, 501), adjourned(111, 500)];
    let third = vec![
        adjourned(200, 502),
        Offence::new(id(201)),
        adjourned(202, 501),
    ];
    let resulted = hearing(
        50,
        vec![
            case(1, vec![defendant(10, 1, first), defendant(11, 1, second)]),
            case(2, vec![defendant(20, 2, third)]),
        ],
    );

    let details = group(&resulted);

    let expected: BTreeSet<_> = resulted
        .prosecution_cases
        .iter()
        .flat_map(|case| &case.defendants)
        .flat_map(|defendant| &defendant.offences)
        .filter(|offence| offence.has_next_hearing())
        .map(|offence| offence.id)
        .collect();

    let grouped: Vec<_> = details
        .iter()
        .flat_map(|listing| listing.offence_ids())
        .collect();
    let unique: BTreeSet<_> = grouped.iter().copied().collect();

    assert_eq!(grouped.len(), unique.len(), "an offence was duplicated");
    assert_eq!(unique, expected);

    assert_eq!(details.hearing_ids(), vec![id(500), id(502), id(501)]);
    for listing in &details {
        let offences = listing
            .prosecution_cases
            .iter()
            .flat_map(|case| &case.defendants)
            .flat_map(|defendant| &defendant.offences);
        for offence in offences {
            let next_id = offence.next_hearing().map(|next| next.hearing_id);
            assert_eq!(next_id, Some(listing.id));
        }
    }
}

#[test]
fn defendant_level_results_never_open_a_listing() {
    let result = JudicialResult::adjournment(id(77), next_hearing(500));
    let with_result = defendant(10, 1, vec![finalised(100)]).with_defendant_result(result);
    let resulted = hearing(50, vec![case(1, vec![with_result])]);

    assert!(group(&resulted).is_empty());
}

fn single_offence_hearing() -> Hearing {
    let offences = vec![adjourned(100, 500)];
    hearing(50, vec![case(1, vec![defendant(10, 1, offences)])])
}

#[test]
fn application_linked_to_listed_case_is_carried_once() {
    let resulted = single_offence_hearing()
        .with_application(application(300, Some(1), Some(500)))
        .with_application(application(300, Some(1), Some(500)));

    let details = group(&resulted);

    assert_eq!(details.len(), 1);
    let listing = details.get(id(500)).unwrap();
    assert_eq!(listing.application_ids(), vec![id(300)]);
    assert_eq!(listing.offence_ids(), vec![id(100)]);
}

#[test]
fn application_only_listings_follow_case_listings() {
    let resulted = single_offence_hearing()
        .with_application(application(301, None, Some(600)))
        .with_application(application(302, Some(1), None))
        .with_application(application(303, Some(1), Some(500)));

    let details = group(&resulted);

    assert_eq!(details.hearing_ids(), vec![id(500), id(600)]);
    let case_listing = details.get(id(500)).unwrap();
    assert_eq!(case_listing.application_ids(), vec![id(303)]);

    let application_only = details.get(id(600)).unwrap();
    assert!(application_only.prosecution_cases.is_empty());
    assert_eq!(application_only.application_ids(), vec![id(301)]);
}

#[test]
fn listing_carries_next_hearing_metadata() {
    let next = next_hearing(500).with_estimated_minutes(90);
    let result = JudicialResult::adjournment(id(1), next.clone());
    let offences = vec![
        Offence::new(id(100)).with_result(result),
        adjourned(101, 501),
    ];
    let resulted = hearing(50, vec![case(1, vec![defendant(10, 1, offences)])]);

    let config = AllocationConfig::default().with_default_estimated_minutes(20);
    let details = NextHearingGrouper::new(config)
        .get_next_hearing_details(&resulted, false, None)
        .expect("grouping");

    let listed = details.get(id(500)).unwrap();
    assert_eq!(listed.estimated_minutes, 90);
    assert_eq!(listed.court_centre, next.court_centre);
    assert_eq!(listed.hearing_type, next.hearing_type);
    assert_eq!(listed.jurisdiction_type, Jurisdiction::Crown);

    assert_eq!(details.get(id(501)).unwrap().estimated_minutes, 20);
}

#[test]
fn listing_copies_judiciary_and_start_time() {
    let start = Utc.with_ymd_and_hms(2024, 7, 1, 10, 30, 0).unwrap();
    let judge = JudicialRole {
        judicial_id: id(900),
        role_type: "CIRCUIT_JUDGE".to_string(),
        is_bench_chairman: false,
    };
    let next = next_hearing(500)
        .with_listed_start(start)
        .with_judge(judge.clone());
    let result = JudicialResult::adjournment(id(1), next);
    let offences = vec![Offence::new(id(100)).with_result(result)];
    let resulted = hearing(50, vec![case(1, vec![defendant(10, 1, offences)])]);

    let details = group(&resulted);

    let listed = details.get(id(500)).unwrap();
    assert_eq!(listed.judiciary, vec![judge]);
    assert_eq!(listed.listed_start_date_time, Some(start));
    assert_eq!(listed.earliest_start_date_time, Some(start));
}

#[test]
fn default_estimated_minutes_is_thirty() {
    let details = group(&single_offence_hearing());

    assert_eq!(details.get(id(500)).unwrap().estimated_minutes, 30);
}

fn magistrates_hearing() -> Hearing {
    let offences = vec![adjourned(100, 500), adjourned(101, 500)];
    let centre = CourtCentre::new(id(4_000), "Highbury Corner Magistrates' Court");
    let mut resulted = hearing(50, vec![case(1, vec![defendant(10, 1, offences)])])
        .with_court_centre(centre.with_code("B01IX00"));
    resulted.jurisdiction_type = Jurisdiction::Magistrates;
    resulted
}

fn listed_offences(details: &NextHearingDetails, hearing_id: u128) -> &[Offence] {
    let listing = details.get(id(hearing_id)).expect("listing");
    &listing.prosecution_cases[0].defendants[0].offences
}

#[test]
fn committing_court_added_only_when_requested() {
    let resulted = magistrates_hearing();
    let grouper = NextHearingGrouper::with_converter(
        AllocationConfig::default(),
        CourtCentreCommittingCourt::new(resulted.court_centre.clone()),
    );

    let without = grouper.get_next_hearing_details(&resulted, false, None).unwrap();
    let offences = listed_offences(&without, 500);
    assert!(offences.iter().all(|o| o.committing_court.is_none()));

    let with = grouper.get_next_hearing_details(&resulted, true, None).unwrap();
    let expected = CommittingCourt {
        court_centre_id: id(4_000),
        court_house_name: "Highbury Corner Magistrates' Court".to_string(),
        court_house_code: Some("B01IX00".to_string()),
        court_house_type: Jurisdiction::Magistrates,
    };
    for offence in listed_offences(&with, 500) {
        assert_eq!(offence.committing_court.as_ref(), Some(&expected));
    }
}

#[test]
fn missing_committing_court_leaves_field_unset() {
    let resulted = magistrates_hearing();
    let calls = std::cell::Cell::new(0);
    let converter = |offence: &Offence, _: Jurisdiction, _: Option<&SeedingHearing>| {
        calls.set(calls.get() + 1);
        (offence.id == id(100)).then(|| CommittingCourt {
            court_centre_id: id(4_001),
            court_house_name: "Stratford Magistrates' Court".to_string(),
            court_house_code: None,
            court_house_type: Jurisdiction::Magistrates,
        })
    };
    let grouper = NextHearingGrouper::with_converter(AllocationConfig::default(), converter);

    let details = grouper.get_next_hearing_details(&resulted, true, None).unwrap();
    let offences = listed_offences(&details, 500);

    assert_eq!(calls.get(), 2);
    assert!(offences[0].committing_court.is_some());
    assert!(offences[1].committing_court.is_none());
}

#[test]
fn seeding_hearing_stamped_on_listed_offences() {
    let seeding = SeedingHearing::new(id(50), Jurisdiction::Crown);
    let linked = application(300, Some(1), Some(500));
    let resulted = single_offence_hearing().with_application(linked);

    let stamped = NextHearingGrouper::default()
        .get_next_hearing_details(&resulted, false, Some(&seeding))
        .unwrap();
    let offence = &listed_offences(&stamped, 500)[0];
    assert_eq!(offence.seeding_hearing, Some(seeding));
    let application = &stamped.get(id(500)).unwrap().court_applications[0];
    assert_eq!(application.seeding_hearing, Some(seeding));

    let config = AllocationConfig::default().with_seeding_stamp(false);
    let unstamped = NextHearingGrouper::new(config)
        .get_next_hearing_details(&resulted, false, Some(&seeding))
        .unwrap();
    assert_eq!(listed_offences(&unstamped, 500)[0].seeding_hearing, None);
}

#[test]
fn duplicated_offence_is_an_integrity_error() {
    let resulted = hearing(
        50,
        vec![case(
            1,
            vec![
                defendant(10, 1, vec![adjourned(100, 500)]),
                defendant(11, 1, vec![adjourned(100, 501)]),
            ],
        )],
    );

    let err = NextHearingGrouper::default()
        .get_next_hearing_details(&resulted, false, None)
        .unwrap_err();

    assert!(matches!(err, AllocationError::DuplicateOffence { .. }));
}

#[test]
fn grouping_is_reproducible() {
    let offences = vec![adjourned(100, 501), adjourned(101, 500)];
    let resulted = hearing(
        50,
        vec![
            case(1, vec![defendant(10, 1, offences)]),
            case(2, vec![defendant(20, 2, vec![adjourned(200, 500)])]),
        ],
    )
    .with_application(application(300, Some(2), Some(502)));

    let first = serde_json::to_string(&group(&resulted)).unwrap();
    let second = serde_json::to_string(&group(&resulted)).unwrap();

    assert_eq!(first, second);
}
