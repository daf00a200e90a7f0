use std::collections::{HashMap, HashSet};

use hearing_model::{CaseNode, DefendantNode, HearingNode, Identified};
use uuid::Uuid;

use crate::error::{AllocationError, Result};

/// What an index knows about a (case, defendant) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefendantLookup<'a> {
    CaseAbsent,
    DefendantAbsent,
    Offences(&'a HashSet<Uuid>),
}

/// caseId → defendantId → offence ids
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    cases: HashMap<Uuid, HashMap<Uuid, HashSet<Uuid>>>,
}

impl HierarchyIndex {
    pub fn build<C: CaseNode>(cases: &[C]) -> Self {
        let mut index = Self::default();
        for case in cases {
            let defendants = index.cases.entry(case.id()).or_default();
            for defendant in case.defendants() {
                defendants
                    .entry(defendant.id())
                    .or_default()
                    .extend(defendant.offences().iter().map(Identified::id));
            }
        }
        index
    }

    pub fn of_hearing<H: HearingNode>(hearing: &H) -> Self {
        Self::build(hearing.prosecution_cases())
    }

    #[must_use]
    pub fn contains_case(&self, case_id: Uuid) -> bool {
        self.cases.contains_key(&case_id)
    }

    #[must_use]
    pub fn lookup(&self, case_id: Uuid, defendant_id: Uuid) -> DefendantLookup<'_> {
        match self.cases.get(&case_id) {
            None => DefendantLookup::CaseAbsent,
            Some(defendants) => defendants
                .get(&defendant_id)
                .map_or(DefendantLookup::DefendantAbsent, DefendantLookup::Offences),
        }
    }

    #[must_use]
    pub fn contains_offence(&self, case_id: Uuid, defendant_id: Uuid, offence_id: Uuid) -> bool {
        matches!(
            self.lookup(case_id, defendant_id),
            DefendantLookup::Offences(offences) if offences.contains(&offence_id)
        )
    }

    /// Every indexed offence id, whichever case and defendant holds it
    pub fn offence_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.cases
            .values()
            .flat_map(HashMap::values)
            .flat_map(|offences| offences.iter().copied())
    }

    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

/// Reject hierarchies that would make grouping drop or duplicate an offence.
///
/// Checks for repeated case ids, repeated defendant ids within a case, any
/// offence id reachable twice, and defendants whose case back-reference
/// points elsewhere.
pub fn validate_hierarchy<H: HearingNode>(hearing: &H) -> Result<()> {
    let hearing_id = hearing.id();
    let mut case_ids = HashSet::new();
    let mut offence_ids = HashSet::new();

    for case in hearing.prosecution_cases() {
        let case_id = case.id();
        if !case_ids.insert(case_id) {
            return Err(AllocationError::DuplicateCase {
                hearing_id,
                case_id,
            });
        }

        let mut defendant_ids = HashSet::new();
        for defendant in case.defendants() {
            let defendant_id = defendant.id();
            if !defendant_ids.insert(defendant_id) {
                return Err(AllocationError::DuplicateDefendant {
                    case_id,
                    defendant_id,
                });
            }
            if let Some(referenced_case_id) = defendant.parent_case_id() {
                if referenced_case_id != case_id {
                    return Err(AllocationError::DefendantCaseMismatch {
                        case_id,
                        defendant_id,
                        referenced_case_id,
                    });
                }
            }
            for offence in defendant.offences() {
                if !offence_ids.insert(offence.id()) {
                    return Err(AllocationError::DuplicateOffence {
                        hearing_id,
                        defendant_id,
                        offence_id: offence.id(),
                    });
                }
            }
        }
    }

    Ok(())
}
