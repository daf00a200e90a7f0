//! # Hearing Model
//!
//! Shared case hierarchy for the hearing allocation engine.
//!
//! ## Hierarchy
//!
//! ```text
//! Hearing / ConfirmedHearing
//!     │
//!     ├──> ProsecutionCase / ConfirmedProsecutionCase
//!     │      └──> Defendant / ConfirmedDefendant
//!     │             └──> Offence / ConfirmedOffence
//!     │                    ├─ JudicialResult[] ──> NextHearing?
//!     │                    └─ SeedingHearing?
//!     │
//!     └──> CourtApplication (Hearing only)
//!            ├─ linked case id alias
//!            └─ JudicialResult[] ──> NextHearing?
//! ```
//!
//! Both flavours implement the traits in [`hierarchy`], so the allocation
//! engine diffs and indexes them through one abstraction.
//!
//! The [`listing`] and [`removal`] modules hold the command structures the
//! engine hands to downstream listing and hearing-mutation commands.

mod case;
mod confirmed;
pub mod hierarchy;
pub mod listing;
pub mod removal;
mod serde_util;
mod types;

pub use case::{CourtApplication, Defendant, Hearing, Offence, ProsecutionCase};
pub use confirmed::{
    ConfirmedDefendant, ConfirmedHearing, ConfirmedOffence, ConfirmedProsecutionCase,
};
pub use hierarchy::{CaseNode, DefendantNode, HearingNode, Identified};
pub use listing::{HearingListingNeeds, ListCourtHearing, ListNextHearings, NextHearingDetails};
pub use removal::{
    DefendantsToRemove, OffencesToRemove, ProsecutionCasesToRemove,
    UpdateHearingForPartialAllocation,
};
pub use types::{
    CommittingCourt, CourtCentre, HearingDay, HearingType, JudicialResult, JudicialRole,
    Jurisdiction, NextHearing, SeedingHearing,
};
