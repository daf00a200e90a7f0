//! Case → defendant → offence traversal shared by both hearing flavours.
//!
//! The allocation engine only needs ids and children to index, diff and
//! flatten a hierarchy, so everything it does generically goes through these
//! traits. The plain flavour ([`Hearing`]) and the confirmed flavour
//! ([`ConfirmedHearing`]) implement them side by side.

use uuid::Uuid;

use crate::case::{Defendant, Hearing, Offence, ProsecutionCase};
use crate::confirmed::{
    ConfirmedDefendant, ConfirmedHearing, ConfirmedOffence, ConfirmedProsecutionCase,
};

/// Anything carrying a stable identity
pub trait Identified {
    fn id(&self) -> Uuid;
}

pub trait DefendantNode: Identified {
    type Offence: Identified;

    fn offences(&self) -> &[Self::Offence];

    /// Case id the defendant claims to belong to, when it records one
    fn parent_case_id(&self) -> Option<Uuid> {
        None
    }
}

pub trait CaseNode: Identified {
    type Defendant: DefendantNode;

    fn defendants(&self) -> &[Self::Defendant];

    fn offence_count(&self) -> usize {
        self.defendants()
            .iter()
            .map(|defendant| defendant.offences().len())
            .sum()
    }
}

pub trait HearingNode: Identified {
    type Case: CaseNode;

    fn prosecution_cases(&self) -> &[Self::Case];
}

impl Identified for Offence {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for ConfirmedOffence {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Defendant {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DefendantNode for Defendant {
    type Offence = Offence;

    fn offences(&self) -> &[Offence] {
        &self.offences
    }

    fn parent_case_id(&self) -> Option<Uuid> {
        self.prosecution_case_id
    }
}

impl Identified for ConfirmedDefendant {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl DefendantNode for ConfirmedDefendant {
    type Offence = ConfirmedOffence;

    fn offences(&self) -> &[ConfirmedOffence] {
        &self.offences
    }
}

impl Identified for ProsecutionCase {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl CaseNode for ProsecutionCase {
    type Defendant = Defendant;

    fn defendants(&self) -> &[Defendant] {
        &self.defendants
    }
}

impl Identified for ConfirmedProsecutionCase {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl CaseNode for ConfirmedProsecutionCase {
    type Defendant = ConfirmedDefendant;

    fn defendants(&self) -> &[ConfirmedDefendant] {
        &self.defendants
    }
}

impl Identified for Hearing {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HearingNode for Hearing {
    type Case = ProsecutionCase;

    fn prosecution_cases(&self) -> &[ProsecutionCase] {
        &self.prosecution_cases
    }
}

impl Identified for ConfirmedHearing {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HearingNode for ConfirmedHearing {
    type Case = ConfirmedProsecutionCase;

    fn prosecution_cases(&self) -> &[ConfirmedProsecutionCase] {
        &self.prosecution_cases
    }
}
