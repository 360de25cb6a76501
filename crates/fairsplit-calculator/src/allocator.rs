//! Proportional Allocator
//!
//! Distributes the adjusted total of a bill over its participants in
//! proportion to each participant's nominal amount.
//!
//! share_i = (nominal_i / subtotal) * max(0, subtotal + surcharge - discount)
//!
//! Each share is rounded on its own, then the whole rounding remainder is
//! charged to the participant with the largest nominal amount (the first one
//! on ties), so the payments add up to the rounded adjusted total exactly.
//! Returns all-zero payments when the subtotal is 0.

use fairsplit_types::{Adjustments, Allocation, AllocationResult, ParticipantInput};
use tracing::debug;

/// Computes every participant's payment for one snapshot of a bill.
///
/// Never fails: amounts that cannot be read count as zero, and totals beyond
/// the `i64` range saturate.
pub fn allocate(participants: &[ParticipantInput], adjustments: &Adjustments) -> Allocation {
    let amounts: Vec<f64> = participants.iter().map(|p| p.nominal_amount.value()).collect();
    let surcharge = adjustments.surcharge.value();
    let discount = adjustments.discount.value();

    let subtotal: f64 = amounts.iter().sum();
    let exact_total = (subtotal + surcharge - discount).max(0.0);
    let adjusted_total = exact_total.round() as i64;

    let mut payments = vec![0_i64; participants.len()];

    if subtotal > 0.0 {
        for (payment, amount) in payments.iter_mut().zip(&amounts) {
            let fair_share = (amount / subtotal) * exact_total;
            *payment = fair_share.round() as i64;
        }

        // i128 so that saturated shares cannot overflow the sum
        let rounded_sum: i128 = payments.iter().map(|p| i128::from(*p)).sum();
        let diff = i128::from(adjusted_total) - rounded_sum;
        if diff != 0 {
            let target = largest_index(&amounts);
            debug!(
                participant = %participants[target].id,
                diff = diff as f64,
                "applying rounding remainder to largest payer"
            );
            let corrected = i128::from(payments[target]) + diff;
            payments[target] = corrected.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        }
    }

    debug!(
        participants = participants.len(),
        subtotal,
        surcharge,
        discount,
        adjusted_total,
        "allocation computed"
    );

    let results = participants
        .iter()
        .zip(amounts)
        .zip(payments)
        .map(|((p, nominal_amount), payment)| AllocationResult {
            id: p.id,
            label: p.label.clone(),
            nominal_amount,
            amount_entered: !p.nominal_amount.is_empty(),
            payment,
        })
        .collect();

    Allocation { subtotal, surcharge, discount, exact_total, adjusted_total, results }
}

/// Index of the first maximum. Only called with a positive subtotal, so the
/// slice is never empty.
fn largest_index(amounts: &[f64]) -> usize {
    let mut max_idx = 0;
    for (idx, amount) in amounts.iter().enumerate() {
        if *amount > amounts[max_idx] {
            max_idx = idx;
        }
    }
    max_idx
}
