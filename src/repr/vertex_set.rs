use super::*;

/// The occupied vertex slots of a graph as a 16-bit mask.
/// Bit `i` is set exactly if vertex `i` exists.
///
/// Every method taking a vertex fails with `GraphError::OutOfRange` if `u >= MAX_NODES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexSet(u16);

impl VertexSet {
    /// Creates an empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates the set `{0, ..., n - 1}`.
    /// Fails with `GraphError::TooManyVertices` if `n > MAX_NODES`.
    pub const fn with_first(n: NumNodes) -> Result<Self> {
        if n > MAX_NODES {
            Err(GraphError::TooManyVertices(n))
        } else if n == MAX_NODES {
            Ok(Self(u16::MAX))
        } else {
            Ok(Self((1 << n) - 1))
        }
    }

    /// Creates a set from a raw mask
    pub const fn from_mask(mask: u16) -> Self {
        Self(mask)
    }

    /// Creates a set from a collection of vertices; duplicates are ignored
    pub fn try_from_nodes<I>(nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new();
        for u in nodes {
            set.insert(u)?;
        }
        Ok(set)
    }

    /// Returns the raw mask
    pub const fn mask(&self) -> u16 {
        self.0
    }

    /// Returns *true* if `u` is in the set
    #[inline]
    pub fn contains(&self, u: Node) -> Result<bool> {
        node_index(u)?;
        Ok(self.0 & node_bit(u) != 0)
    }

    /// Inserts `u` and returns *true* exactly if it was not present before
    #[inline]
    pub fn insert(&mut self, u: Node) -> Result<bool> {
        let added = !self.contains(u)?;
        self.0 |= node_bit(u);
        Ok(added)
    }

    /// Removes `u` and returns *true* exactly if it was present before
    #[inline]
    pub fn remove(&mut self, u: Node) -> Result<bool> {
        let removed = self.contains(u)?;
        self.0 &= !node_bit(u);
        Ok(removed)
    }

    /// Number of vertices in the set
    pub const fn len(&self) -> NumNodes {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Largest vertex in the set
    pub fn max(&self) -> Option<Node> {
        self.iter().next_back()
    }

    /// Iterates over the vertices in ascending order
    pub const fn iter(&self) -> MaskIter {
        MaskIter::new(self.0)
    }
}

impl IntoIterator for VertexSet {
    type Item = Node;
    type IntoIter = MaskIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn with_first() {
        assert!(VertexSet::with_first(0).unwrap().is_empty());
        assert_eq!(VertexSet::with_first(3).unwrap().mask(), 0b111);
        assert_eq!(VertexSet::with_first(16).unwrap().mask(), u16::MAX);
        assert_eq!(VertexSet::with_first(16).unwrap().len(), 16);
        assert_eq!(
            VertexSet::with_first(17),
            Err(GraphError::TooManyVertices(17))
        );
    }

    #[test]
    fn insert_remove() {
        let mut set = VertexSet::new();
        assert_eq!(set.insert(4), Ok(true));
        assert_eq!(set.insert(4), Ok(false));
        assert_eq!(set.insert(15), Ok(true));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect_vec(), vec![4, 15]);
        assert_eq!(set.max(), Some(15));

        assert_eq!(set.remove(15), Ok(true));
        assert_eq!(set.remove(15), Ok(false));
        assert_eq!(set.contains(15), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.max(), Some(4));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut set = VertexSet::from_mask(0b1_0001);

        for u in [16, 20, Node::MAX] {
            let err = Err(GraphError::OutOfRange { node: u });
            assert_eq!(set.contains(u), err);
            assert_eq!(set.insert(u), err);
            assert_eq!(set.remove(u), err);
        }

        // 20 must not alias vertex 4
        assert_eq!(set.mask(), 0b1_0001);
        assert_eq!(
            VertexSet::try_from_nodes([1, 20]),
            Err(GraphError::OutOfRange { node: 20 })
        );
    }

    #[test]
    fn from_nodes_and_mask() {
        let set = VertexSet::try_from_nodes([0, 3, 3, 9, 12]).unwrap();
        assert_eq!(set.len(), set.mask().count_ones());
        assert_eq!(set, VertexSet::from_mask(0b1_0010_0000_1001));
        assert_eq!(set.into_iter().collect_vec(), vec![0, 3, 9, 12]);
        assert_eq!(VertexSet::from_mask(0).max(), None);
    }
}
