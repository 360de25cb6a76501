//! Plain-text renderings of an [`Allocation`].
//!
//! `render` produces the short message people paste into a group chat;
//! `table` is the fuller per-participant view. Both print the numbers the
//! allocator produced and never recompute anything.

use chrono::NaiveDate;
use fairsplit_types::Allocation;

const RULE: &str = "----------------";

/// Presentation settings for summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// First line of the exported text.
    pub title: String,
    /// Shown instead of an empty participant name.
    pub placeholder_label: String,
    /// Appended to the title in parentheses when present.
    pub date: Option<NaiveDate>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { title: "Bill split".to_string(), placeholder_label: "Friend".to_string(), date: None }
    }
}

#[derive(Debug, Default)]
pub struct Summary;

impl Summary {
    /// Export text: one line per participant that has a name or an amount,
    /// followed by subtotal, non-zero adjustments and the total.
    pub fn render(allocation: &Allocation, options: &SummaryOptions) -> String {
        let mut out = String::new();

        match options.date {
            Some(date) => out.push_str(&format!("{} ({})\n", options.title, date.format("%Y-%m-%d"))),
            None => out.push_str(&format!("{}\n", options.title)),
        }
        out.push_str(RULE);
        out.push('\n');

        for result in &allocation.results {
            if result.label.is_empty() && !result.amount_entered {
                continue;
            }
            let name = if result.label.is_empty() { &options.placeholder_label } else { &result.label };
            out.push_str(&format!("{name}: ${}\n", result.payment));
        }

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("Subtotal: ${}\n", allocation.subtotal));
        if allocation.surcharge != 0.0 {
            out.push_str(&format!("Surcharge: +${}\n", allocation.surcharge));
        }
        if allocation.discount != 0.0 {
            out.push_str(&format!("Discount: -${}\n", allocation.discount));
        }
        out.push_str(&format!("Total: ${}\n", allocation.adjusted_total));
        out
    }

    /// Every participant with nominal amount and payment, numbered by row.
    pub fn table(allocation: &Allocation, options: &SummaryOptions) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:<4}{:<20}{:>10}{:>10}\n", "#", "Name", "Nominal", "Pays"));

        for (index, result) in allocation.results.iter().enumerate() {
            let row = index + 1;
            let name = if result.label.is_empty() {
                format!("{} {row}", options.placeholder_label)
            } else {
                result.label.clone()
            };
            out.push_str(&format!(
                "{:<4}{:<20}{:>10}{:>10}\n",
                row, name, result.nominal_amount, result.payment
            ));
        }

        out.push_str(&format!("{:<24}{:>10}\n", "Subtotal", allocation.subtotal));
        if allocation.surcharge != 0.0 {
            out.push_str(&format!("{:<24}{:>10}\n", "Surcharge", format!("+{}", allocation.surcharge)));
        }
        if allocation.discount != 0.0 {
            out.push_str(&format!("{:<24}{:>10}\n", "Discount", format!("-{}", allocation.discount)));
        }
        out.push_str(&format!("{:<24}{:>10}{:>10}\n", "Total", "", allocation.adjusted_total));

        if allocation.subtotal == 0.0 {
            out.push_str("Enter item amounts to start splitting.\n");
        }
        out
    }
}
