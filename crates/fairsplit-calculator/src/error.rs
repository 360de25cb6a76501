//! Error types for editing a bill.
//!
//! Allocation itself cannot fail; these errors only come from operations that
//! address participants by id or assemble a bill from external records.

use fairsplit_types::ParticipantId;
use thiserror::Error;

/// Errors raised by [`crate::Bill`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// No participant with this id exists in the bill.
    #[error("Unknown participant: {id}")]
    UnknownParticipant { id: ParticipantId },

    /// Two records share one id.
    #[error("Duplicate participant id: {id}")]
    DuplicateParticipant { id: ParticipantId },

    /// A bill needs at least one participant.
    #[error("A bill needs at least one participant")]
    EmptyBill,

    /// Every participant id has already been handed out.
    #[error("No participant ids left in this bill")]
    IdSpaceExhausted,
}

impl SplitError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SplitError::UnknownParticipant { .. } => "unknown_participant",
            SplitError::DuplicateParticipant { .. } => "duplicate_participant",
            SplitError::EmptyBill => "empty_bill",
            SplitError::IdSpaceExhausted => "id_space_exhausted",
        }
    }
}

/// Result type used by bill operations.
pub type SplitResult<T> = Result<T, SplitError>;
