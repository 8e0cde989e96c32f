//! Symmetric adjacency storage for undirected links.
//!
//! Every undirected link `{a, b}` is stored twice: `b` in the list of `a` and
//! `a` in the list of `b`. Lists keep insertion order. Storage is keyed by
//! node index only and knows nothing about how many nodes currently exist,
//! so links outlive a shrinking node set until they are cleared.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkSet {
    adjacency: Vec<Vec<usize>>,
    edges: usize,
}

impl LinkSet {
    pub(crate) const fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            edges: 0,
        }
    }

    /// Nodes linked to `node` in insertion order; empty for unknown nodes.
    pub(crate) fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    pub(crate) fn contains(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Records `{a, b}` in both directions.
    ///
    /// Callers have already rejected self-links and duplicates.
    pub(crate) fn insert(&mut self, a: usize, b: usize) {
        debug_assert!(a != b, "self-links must be rejected before insertion");
        debug_assert!(!self.contains(a, b), "duplicate link {a}-{b}");
        self.push_directed(a, b);
        self.push_directed(b, a);
        self.edges += 1;
    }

    /// Number of undirected links.
    pub(crate) const fn len(&self) -> usize {
        self.edges
    }

    pub(crate) fn clear(&mut self) {
        self.adjacency.clear();
        self.edges = 0;
    }

    /// Each undirected link once, as `(low, high)`.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(node, partners)| {
                partners
                    .iter()
                    .filter(move |&&partner| node < partner)
                    .map(move |&partner| (node, partner))
            })
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "adjacency is grown to cover `from` immediately before indexing"
    )]
    fn push_directed(&mut self, from: usize, to: usize) {
        if self.adjacency.len() <= from {
            self.adjacency.resize_with(from + 1, Vec::new);
        }
        self.adjacency[from].push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::LinkSet;

    #[test]
    fn insert_is_symmetric_and_ordered() {
        let mut links = LinkSet::default();
        links.insert(2, 0);
        links.insert(2, 5);
        links.insert(1, 2);

        assert_eq!(links.neighbors(2), &[0, 5, 1]);
        assert_eq!(links.neighbors(0), &[2]);
        assert_eq!(links.neighbors(5), &[2]);
        assert_eq!(links.degree(2), 3);
        assert_eq!(links.len(), 3);
        assert!(links.contains(5, 2));
        assert!(!links.contains(0, 5));
    }

    #[test]
    fn unknown_nodes_have_no_partners() {
        let links = LinkSet::default();
        assert!(links.neighbors(100).is_empty());
        assert_eq!(links.degree(usize::MAX), 0);
    }

    #[test]
    fn edges_lists_each_link_once() {
        let mut links = LinkSet::default();
        links.insert(3, 1);
        links.insert(0, 3);
        let mut edges: Vec<_> = links.edges().collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 3), (1, 3)]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut links = LinkSet::default();
        links.insert(0, 1);
        links.clear();
        assert_eq!(links.len(), 0);
        assert!(links.neighbors(0).is_empty());
        assert_eq!(links.edges().count(), 0);
    }
}
