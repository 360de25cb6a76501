//! The editable bill: an ordered participant list plus adjustments.
//!
//! Participants are addressed by a stable [`ParticipantId`] that is never
//! reused within one bill, so adding, removing or editing one row never
//! changes the identity of another. Allocation is recomputed from scratch on
//! every call to [`Bill::allocate`].

use std::collections::HashSet;

use fairsplit_types::{Adjustments, AmountInput, Allocation, ParticipantId, ParticipantInput};
use tracing::{debug, info};

use crate::allocator::allocate;
use crate::error::{SplitError, SplitResult};

/// Number of blank rows a fresh or reset bill starts with.
pub const DEFAULT_PARTICIPANTS: usize = 2;

/// An editable bill: participants in display order plus bill-wide adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    participants: Vec<ParticipantInput>,
    adjustments: Adjustments,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl Default for Bill {
    fn default() -> Self {
        Self::new()
    }
}

impl Bill {
    /// A bill with two blank participants and no adjustments.
    pub fn new() -> Self {
        let count = DEFAULT_PARTICIPANTS as u64;
        let participants = (1..=count).map(|n| ParticipantInput::blank(ParticipantId(n))).collect();
        Self { participants, adjustments: Adjustments::default(), next_id: Some(count + 1) }
    }

    /// Builds a bill from existing records, keeping their ids. A record may
    /// use `u64::MAX`; such a bill loads fine but cannot grow.
    pub fn from_parts(participants: Vec<ParticipantInput>, adjustments: Adjustments) -> SplitResult<Self> {
        if participants.is_empty() {
            return Err(SplitError::EmptyBill);
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for p in &participants {
            if !seen.insert(p.id) {
                return Err(SplitError::DuplicateParticipant { id: p.id });
            }
        }

        let next_id = participants.iter().map(|p| p.id.0).max().unwrap_or(0).checked_add(1);
        Ok(Self { participants, adjustments, next_id })
    }

    /// Participants in display order.
    pub fn participants(&self) -> &[ParticipantInput] {
        &self.participants
    }

    /// Looks up one participant by id.
    pub fn participant(&self, id: ParticipantId) -> Option<&ParticipantInput> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Current surcharge and discount.
    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false: a bill keeps at least one participant.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Appends a participant and returns its new id. Fails only when the id
    /// space is used up.
    pub fn add_participant(
        &mut self,
        label: impl Into<String>,
        amount: impl Into<AmountInput>,
    ) -> SplitResult<ParticipantId> {
        let id = self.issue_id()?;
        self.participants.push(ParticipantInput::new(id, label, amount));
        debug!(%id, count = self.participants.len(), "participant added");
        Ok(id)
    }

    /// Removes a participant. Removing the last remaining participant is a
    /// no-op and returns `Ok(false)`.
    pub fn remove_participant(&mut self, id: ParticipantId) -> SplitResult<bool> {
        let index = self.index_of(id)?;
        if self.participants.len() == 1 {
            debug!(%id, "refusing to remove the last participant");
            return Ok(false);
        }
        self.participants.remove(index);
        debug!(%id, count = self.participants.len(), "participant removed");
        Ok(true)
    }

    /// Renames a participant.
    pub fn set_label(&mut self, id: ParticipantId, label: impl Into<String>) -> SplitResult<()> {
        let index = self.index_of(id)?;
        self.participants[index].label = label.into();
        Ok(())
    }

    /// Replaces a participant's nominal amount.
    pub fn set_amount(&mut self, id: ParticipantId, amount: impl Into<AmountInput>) -> SplitResult<()> {
        let index = self.index_of(id)?;
        self.participants[index].nominal_amount = amount.into();
        Ok(())
    }

    /// Replaces the surcharge.
    pub fn set_surcharge(&mut self, amount: impl Into<AmountInput>) {
        self.adjustments.surcharge = amount.into();
    }

    /// Replaces the discount.
    pub fn set_discount(&mut self, amount: impl Into<AmountInput>) {
        self.adjustments.discount = amount.into();
    }

    /// Clears everything back to two blank participants. The new rows get
    /// fresh ids; ids handed out before the reset are not reused. When too few
    /// ids remain the bill is left untouched.
    pub fn reset(&mut self) -> SplitResult<()> {
        let first = self.next_id.ok_or(SplitError::IdSpaceExhausted)?;
        let last = first
            .checked_add(DEFAULT_PARTICIPANTS as u64 - 1)
            .ok_or(SplitError::IdSpaceExhausted)?;
        self.participants = (first..=last).map(|n| ParticipantInput::blank(ParticipantId(n))).collect();
        self.adjustments = Adjustments::default();
        self.next_id = last.checked_add(1);
        info!(next_id = ?self.next_id, "bill reset");
        Ok(())
    }

    /// Current payments for every participant.
    pub fn allocate(&self) -> Allocation {
        allocate(&self.participants, &self.adjustments)
    }

    fn issue_id(&mut self) -> SplitResult<ParticipantId> {
        let id = self.next_id.ok_or(SplitError::IdSpaceExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(ParticipantId(id))
    }

    fn index_of(&self, id: ParticipantId) -> SplitResult<usize> {
        self.participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(SplitError::UnknownParticipant { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(bill: &Bill) -> Vec<ParticipantId> {
        bill.participants().iter().map(|p| p.id).collect()
    }

    #[test]
    fn new_bill_has_two_blank_rows() {
        let bill = Bill::new();
        assert_eq!(ids(&bill), vec![ParticipantId(1), ParticipantId(2)]);
        assert!(bill.participants().iter().all(ParticipantInput::is_blank));
        assert_eq!(bill.adjustments(), &Adjustments::default());
    }

    #[test]
    fn adding_keeps_existing_ids() {
        let mut bill = Bill::new();
        let before = ids(&bill);
        let added = bill.add_participant("Cat", "12").unwrap();
        assert_eq!(added, ParticipantId(3));
        assert_eq!(&ids(&bill)[..2], &before[..]);
    }

    #[test]
    fn removed_ids_are_not_reissued() {
        let mut bill = Bill::new();
        let third = bill.add_participant("", AmountInput::Empty).unwrap();
        assert_eq!(bill.remove_participant(third), Ok(true));
        assert_eq!(bill.add_participant("", AmountInput::Empty), Ok(ParticipantId(4)));
    }

    #[test]
    fn last_participant_cannot_be_removed() {
        let mut bill = Bill::new();
        assert_eq!(bill.remove_participant(ParticipantId(1)), Ok(true));
        assert_eq!(bill.remove_participant(ParticipantId(2)), Ok(false));
        assert_eq!(bill.len(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut bill = Bill::new();
        let missing = ParticipantId(42);
        assert_eq!(bill.set_label(missing, "x"), Err(SplitError::UnknownParticipant { id: missing }));
        assert_eq!(bill.set_amount(missing, 1.0), Err(SplitError::UnknownParticipant { id: missing }));
        assert_eq!(bill.remove_participant(missing), Err(SplitError::UnknownParticipant { id: missing }));
    }

    #[test]
    fn reset_issues_fresh_ids_and_clears_adjustments() {
        let mut bill = Bill::new();
        bill.set_surcharge("30");
        bill.set_discount("10");
        bill.set_amount(ParticipantId(1), "100").unwrap();
        bill.reset().unwrap();
        assert_eq!(ids(&bill), vec![ParticipantId(3), ParticipantId(4)]);
        assert_eq!(bill.adjustments(), &Adjustments::default());
        assert!(bill.participants().iter().all(ParticipantInput::is_blank));
    }

    #[test]
    fn edits_are_reflected_in_the_next_allocation() {
        let mut bill = Bill::new();
        bill.set_amount(ParticipantId(1), "60").unwrap();
        bill.set_amount(ParticipantId(2), "40").unwrap();
        bill.set_surcharge("10");
        let first: Vec<i64> = bill.allocate().results.iter().map(|r| r.payment).collect();
        assert_eq!(first, vec![66, 44]);

        bill.set_discount("110");
        let second = bill.allocate();
        assert_eq!(second.adjusted_total, 0);
        assert_eq!(second.total_paid(), 0);
    }

    #[test]
    fn from_parts_continues_after_largest_id() {
        let mut bill = Bill::from_parts(
            vec![
                ParticipantInput::new(ParticipantId(9), "A", 1.0),
                ParticipantInput::new(ParticipantId(4), "B", 2.0),
            ],
            Adjustments::default(),
        )
        .unwrap();
        assert_eq!(bill.add_participant("C", 3.0), Ok(ParticipantId(10)));
    }

    #[test]
    fn bill_holding_the_largest_id_loads_but_cannot_grow() {
        let mut bill = Bill::from_parts(
            vec![ParticipantInput::new(ParticipantId(u64::MAX), "A", 1.0)],
            Adjustments::default(),
        )
        .unwrap();
        assert_eq!(bill.allocate().total_paid(), 1);
        assert_eq!(bill.add_participant("B", 2.0), Err(SplitError::IdSpaceExhausted));
        assert_eq!(bill.reset(), Err(SplitError::IdSpaceExhausted));
        assert_eq!(bill.len(), 1);
    }

    #[test]
    fn last_free_id_is_issued_once() {
        let mut bill = Bill::from_parts(
            vec![ParticipantInput::blank(ParticipantId(u64::MAX - 1))],
            Adjustments::default(),
        )
        .unwrap();
        assert_eq!(bill.add_participant("", AmountInput::Empty), Ok(ParticipantId(u64::MAX)));
        assert_eq!(bill.add_participant("", AmountInput::Empty), Err(SplitError::IdSpaceExhausted));
        assert_eq!(bill.len(), 2);
    }

    #[test]
    fn from_parts_rejects_duplicates_and_empty_lists() {
        let dup = vec![
            ParticipantInput::blank(ParticipantId(1)),
            ParticipantInput::blank(ParticipantId(1)),
        ];
        assert_eq!(
            Bill::from_parts(dup, Adjustments::default()),
            Err(SplitError::DuplicateParticipant { id: ParticipantId(1) })
        );
        assert_eq!(Bill::from_parts(Vec::new(), Adjustments::default()), Err(SplitError::EmptyBill));
    }
}
