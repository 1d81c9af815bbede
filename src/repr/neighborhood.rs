use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A Neighborhood is a duplicate-free set of nodes that is always iterated in ascending order.
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in ascending order
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Returns the Neighborhood as a slot mask
    fn as_mask(&self) -> u16 {
        self.neighbors().fold(0, |mask, u| mask | node_bit(u))
    }

    /// Adds a neighbor to the Neighborhood if it is not already present.
    /// Returns *true* exactly if the node was inserted.
    fn try_add_neighbor(&mut self, u: Node) -> bool;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood kept as a sorted `SmallVec<[Node; 16]>`, i.e. a classic adjacency list.
/// Since a graph has at most `MAX_NODES` vertices, it never spills onto the heap.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedNeighborhood(SmallVec<[Node; MAX_NODES as usize]>);

impl SortedNeighborhood {
    /// Returns the sorted neighbors as a slice
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl Neighborhood for SortedNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, u);
                true
            }
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Ok(pos) = self.0.binary_search(&u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// A Neighborhood represented by one row of an adjacency matrix
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitNeighborhood(u16);

impl Neighborhood for BitNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.count_ones()
    }

    type NeighborhoodIter<'a>
        = MaskIter
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        MaskIter::new(self.0)
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0 & node_bit(u) != 0
    }

    fn as_mask(&self) -> u16 {
        self.0
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        let added = !self.has_neighbor(u);
        self.0 |= node_bit(u);
        added
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        let removed = self.has_neighbor(u);
        self.0 &= !node_bit(u);
        removed
    }

    fn clear(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn check_sorted_and_unique<N: Neighborhood>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..100 {
            let mut nbs = N::default();
            let mut reference = 0u16;

            for _ in 0..40 {
                let u = rng.random_range(0..MAX_NODES);
                if rng.random_bool(0.7) {
                    assert_eq!(nbs.try_add_neighbor(u), reference & node_bit(u) == 0);
                    reference |= node_bit(u);
                } else {
                    assert_eq!(nbs.try_remove_neighbor(u), reference & node_bit(u) != 0);
                    reference &= !node_bit(u);
                }

                let neighbors = nbs.neighbors().collect_vec();
                assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(nbs.as_mask(), reference);
                assert_eq!(nbs.num_of_neighbors(), reference.count_ones());
            }

            nbs.clear();
            assert_eq!(nbs.num_of_neighbors(), 0);
        }
    }

    #[test]
    fn sorted_neighborhood() {
        check_sorted_and_unique::<SortedNeighborhood>();
    }

    #[test]
    fn bit_neighborhood() {
        check_sorted_and_unique::<BitNeighborhood>();
    }

    #[test]
    fn duplicate_insert_keeps_order() {
        let mut nbs = SortedNeighborhood::default();
        for u in [5, 1, 9, 5, 1, 3] {
            nbs.try_add_neighbor(u);
        }
        assert_eq!(nbs.as_slice(), &[1, 3, 5, 9]);
    }
}
