//! Ranking of tours by fitness.
//!
//! An in-place quicksort with the leftmost element of each range as pivot.
//! The partition moves the pivot through the range by swaps, so the pivot
//! always sits in the slot the next out-of-place element is moved into.

use crate::tour::Tour;

/// Sort `tours` ascending by fitness.
pub fn rank_by_fitness(tours: &mut [Tour]) {
    let mut range = tours;

    // Recurse into the smaller side and loop over the larger one, keeping
    // the stack depth logarithmic.
    while range.len() > 1 {
        let current = range;
        let pivot = partition(current);
        let (left, rest) = current.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            rank_by_fitness(left);
            range = right;
        } else {
            rank_by_fitness(right);
            range = left;
        }
    }
}

/// Partition around the fitness of `tours[0]` and return the pivot's final
/// index. Everything left of it is `<=` the pivot, everything right is `>=`.
fn partition(tours: &mut [Tour]) -> usize {
    let pivot = tours[0].fitness;
    let mut left = 0;
    let mut right = tours.len() - 1;

    // Invariant: the pivot is at `left` before the first inner scan and at
    // `right` before the second.
    while left < right {
        while left < right && tours[right].fitness >= pivot {
            right -= 1;
        }
        if left != right {
            tours.swap(left, right);
            left += 1;
        }

        while left < right && tours[left].fitness <= pivot {
            left += 1;
        }
        if left != right {
            tours.swap(left, right);
            right -= 1;
        }
    }

    left
}

/// True when `tours` is ascending by fitness.
pub fn is_ranked(tours: &[Tour]) -> bool {
    tours.windows(2).all(|w| w[0].fitness <= w[1].fitness)
}
