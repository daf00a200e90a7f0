//! # Hearing Allocation
//!
//! Grouping and diff engine run after a court hearing is resulted or
//! partially allocated.
//!
//! ## Features
//!
//! - **Next-hearing grouping** - split offences and applications into the next
//!   hearings their results ask for
//! - **Partial allocation** - find what listing did not confirm and build the removal command
//! - **Seeded hearings** - split unconfirmed offences by the hearing that seeded them
//! - **Re-listing commands** - turn detached cases into new listing requests
//!
//! ## Architecture
//!
//! ```text
//! Hearing (case → defendant → offence, applications)
//!     │
//!     ├──> NextHearingGrouper
//!     │      ├─ group offences by next-hearing id
//!     │      ├─ merge applications per next-hearing id
//!     │      └─ NextHearingDetails (one listing per hearing id)
//!     │
//!     ├──> partial::get_differences (vs ConfirmedHearing)
//!     │      ├─ index confirmed: case → defendant → offences
//!     │      ├─ keep unconfirmed offences of confirmed cases
//!     │      └─ UpdateHearingForPartialAllocation
//!     │
//!     ├──> seeded (unconfirmed offences, grouped by seeding hearing)
//!     │
//!     └──> ListingCommandBuilder
//!            └─ ListCourtHearing / ListNextHearings
//! ```
//!
//! Every operation validates the hierarchy it is given and refuses to work
//! on one that could make it drop or duplicate an offence.

mod commands;
mod committing_court;
mod config;
mod error;
pub mod grouping;
mod index;
mod next_hearing;
pub mod partial;
pub mod seeded;

pub use commands::ListingCommandBuilder;
pub use committing_court::{
    CourtCentreCommittingCourt, NoCommittingCourt, OffenceToCommittingCourtConverter,
};
pub use config::{AllocationConfig, DEFAULT_ESTIMATED_MINUTES};
pub use error::{AllocationError, Result};
pub use index::{validate_hierarchy, DefendantLookup, HierarchyIndex};
pub use next_hearing::NextHearingGrouper;
pub use partial::{
    get_differences, transform_confirm_prosecution_cases_to_update_hearing_for_partial_allocation,
    transform_to_update_hearing_for_partial_allocation,
};
pub use seeded::{
    get_delta_seeded_prosecution_cases, get_related_seeding_hearings_prosecution_cases_map,
    SeededProsecutionCases,
};
