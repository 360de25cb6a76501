//! Fairsplit Types
//!
//! This crate defines the data model shared by the fairsplit crates
//! (currently `fairsplit-calculator` and `fairsplit-cli`): participant records,
//! the lenient amount input, adjustments and the allocation output.

#![deny(warnings)]
#![deny(missing_docs)]

mod amount;
mod types;

pub use amount::AmountInput;
pub use types::{Adjustments, Allocation, AllocationResult, ParticipantId, ParticipantInput};
