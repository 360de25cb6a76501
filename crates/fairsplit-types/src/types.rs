use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AmountInput;

/// Opaque, stable identifier of a participant within a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One participant as entered by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInput {
    /// Stable identity, unrelated to position.
    pub id: ParticipantId,
    /// Display name; may be empty and need not be unique.
    #[serde(default)]
    pub label: String,
    /// Pre-adjustment cost of this participant's items.
    #[serde(default, rename = "amount")]
    pub nominal_amount: AmountInput,
}

impl ParticipantInput {
    /// Creates a participant record.
    pub fn new(id: ParticipantId, label: impl Into<String>, nominal_amount: impl Into<AmountInput>) -> Self {
        Self { id, label: label.into(), nominal_amount: nominal_amount.into() }
    }

    /// A participant with no name and no amount.
    pub fn blank(id: ParticipantId) -> Self {
        Self { id, label: String::new(), nominal_amount: AmountInput::Empty }
    }

    /// True when neither a name nor an amount has been entered.
    pub fn is_blank(&self) -> bool {
        self.label.is_empty() && self.nominal_amount.is_empty()
    }
}

/// Bill-wide adjustments, applied once to the total rather than per participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    /// Added to the total (delivery fee, tip, service charge).
    #[serde(default)]
    pub surcharge: AmountInput,
    /// Subtracted from the total (coupon, promotion).
    #[serde(default)]
    pub discount: AmountInput,
}

impl Adjustments {
    /// Creates adjustments from any amount-like values.
    pub fn new(surcharge: impl Into<AmountInput>, discount: impl Into<AmountInput>) -> Self {
        Self { surcharge: surcharge.into(), discount: discount.into() }
    }
}

/// A participant annotated with the amount they owe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Identity carried through from the input.
    pub id: ParticipantId,
    /// Label carried through from the input.
    pub label: String,
    /// Parsed nominal amount.
    pub nominal_amount: f64,
    /// False when the caller left the amount field empty.
    #[serde(skip)]
    pub amount_entered: bool,
    /// Final integer obligation.
    pub payment: i64,
}

/// Output of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Sum of the parsed nominal amounts.
    pub subtotal: f64,
    /// Parsed surcharge.
    pub surcharge: f64,
    /// Parsed discount.
    pub discount: f64,
    /// `max(0, subtotal + surcharge - discount)` before rounding.
    pub exact_total: f64,
    /// The adjusted total rounded to an integer, as reported to users.
    pub adjusted_total: i64,
    /// One entry per participant, in input order.
    pub results: Vec<AllocationResult>,
}

impl Allocation {
    /// Sum of all payments, saturating at the `i64` bounds.
    pub fn total_paid(&self) -> i64 {
        self.results.iter().fold(0_i64, |acc, r| acc.saturating_add(r.payment))
    }

    /// True when the adjusted total was reported but nobody was charged for it,
    /// which happens when every nominal amount is zero.
    pub fn is_unallocated(&self) -> bool {
        self.subtotal == 0.0 && self.adjusted_total != 0
    }
}
