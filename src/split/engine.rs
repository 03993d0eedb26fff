//! Per-person total computation.

use std::collections::BTreeMap;

use crate::model::{Fee, Item};

/// Result of one splitting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSummary {
    /// Item-share sum per participant, before fees
    pub subtotals: BTreeMap<String, f64>,

    /// Final amount owed per participant
    pub totals: BTreeMap<String, f64>,
}

/// Compute each participant's item subtotal.
///
/// Every item with a non-empty assignment set contributes an even share of
/// its price to each assigned participant. Items nobody is assigned to
/// contribute nothing; their cost is unassigned and stays off the bill.
/// The output covers exactly the given participant list.
pub fn compute_subtotals(
    items: &BTreeMap<String, Item>,
    people: &[String],
) -> BTreeMap<String, f64> {
    let mut subtotals: BTreeMap<String, f64> =
        people.iter().map(|p| (p.clone(), 0.0)).collect();

    for item in items.values() {
        if item.assignments.is_empty() {
            continue;
        }
        let share = item.price / item.assignments.len() as f64;
        for person in &item.assignments {
            if let Some(subtotal) = subtotals.get_mut(person) {
                *subtotal += share;
            }
        }
    }

    subtotals
}

/// Compute each participant's final total: item subtotal plus fee shares.
///
/// Fees apply in slice order. An even-split fee divides its price equally
/// across all participants; a proportional fee divides it by each
/// participant's share of the item subtotal sum. Both degenerate divisions
/// are guarded: with no participants an even fee has nobody to charge, and
/// with a zero subtotal sum a proportional fee yields zero shares rather
/// than a numeric fault.
pub fn compute_totals(
    items: &BTreeMap<String, Item>,
    people: &[String],
    fees: &[Fee],
) -> SplitSummary {
    let subtotals = compute_subtotals(items, people);
    let mut totals = subtotals.clone();

    let subtotal_sum: f64 = subtotals.values().sum();

    for fee in fees {
        if fee.even_split {
            if people.is_empty() {
                log::debug!("split: even fee {:?} with no participants", fee.name);
                continue;
            }
            let share = fee.price / people.len() as f64;
            for total in totals.values_mut() {
                *total += share;
            }
        } else {
            if subtotal_sum == 0.0 {
                log::debug!(
                    "split: proportional fee {:?} with zero subtotal sum",
                    fee.name
                );
                continue;
            }
            for (person, total) in totals.iter_mut() {
                *total += fee.price * subtotals[person] / subtotal_sum;
            }
        }
    }

    SplitSummary { subtotals, totals }
}
