//! Social influence operator: pulls a tour toward a better-ranked one.

use crate::tour::Tour;
use rand::Rng;

/// Imports directed edges from a donor tour into a recipient tour.
pub struct Influence;

impl Influence {
    /// Copy the edge leaving a random city in `donor` into `recipient`.
    pub fn apply<R: Rng>(donor: &Tour, recipient: &mut Tour, rng: &mut R) {
        let target_a = rng.gen_range(0..donor.len());
        Self::apply_to_target(donor, recipient, target_a);
    }

    /// Make the successor of `target_a` in `donor` follow `target_a` in `recipient`.
    ///
    /// The city currently after `target_a` in `recipient` swaps places with
    /// the donor's successor, so `recipient` stays a permutation. When the
    /// edge is already present the swap touches a single slot and nothing changes.
    pub fn apply_to_target(donor: &Tour, recipient: &mut Tour, target_a: usize) {
        let Some(target_b) = donor.successor_of(target_a) else {
            return;
        };

        let mut index_a = None;
        let mut index_b = None;
        for (i, &city) in recipient.order.iter().enumerate() {
            if city == target_a {
                index_a = Some(i);
            }
            if city == target_b {
                index_b = Some(i);
            }
        }

        if let (Some(index_a), Some(index_b)) = (index_a, index_b) {
            let temp_index = (index_a + 1) % recipient.order.len();
            recipient.order.swap(temp_index, index_b);
        }
    }
}
