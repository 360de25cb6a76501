#![deny(warnings)]
//! The allocation core of fairsplit.
//!
//! This crate turns a list of participants with nominal amounts plus a
//! bill-wide surcharge and discount into integer payments that add up to the
//! adjusted total exactly. It also provides the editable [`Bill`] that callers
//! mutate between recomputations and the text [`Summary`] renderings.

pub mod allocator;
pub mod bill;
pub mod error;
pub mod summary;

pub use allocator::allocate;
pub use bill::Bill;
pub use error::{SplitError, SplitResult};
pub use summary::{Summary, SummaryOptions};

pub use fairsplit_types::{
    Adjustments, Allocation, AllocationResult, AmountInput, ParticipantId, ParticipantInput,
};
