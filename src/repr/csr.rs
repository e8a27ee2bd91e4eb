/*!
# Compressed Sparse Row (CSR) Representation

A weighted digraph stored in the **Compressed Sparse Row (CSR)** format,
designed for **memory efficiency** and **fast iteration** over adjacency
in sparse graphs.

All adjacency lists live in two flattened arrays (targets and payloads),
with offset indices marking the start of each node's window. This gives:

- **Compact storage** compared to `Vec<Vec<(usize, E)>>`.
- **Fast sequential access** due to good cache locality.
- **Higher construction cost**, but the structure is immutable and
  optimized for traversal afterwards.

The relative order of a node's outgoing edges is the order in which they
were supplied to [`CsrDiGraph::from_edges`].
*/

use std::{iter::Zip, ops::Range, slice};

use itertools::Itertools;

use crate::ops::GraphView;
use crate::testing::test_graph_view;

/// Directed **CSR graph** with per-edge payloads.
///
/// - Node identifiers are the indices `0..n`.
/// - Adjacency is stored as a single flattened `(targets, payloads)` pair
///   of arrays with an offset array marking per-node windows.
/// - Parallel edges and self-loops are supported.
///
/// # Examples
/// ```
/// use wdgraphs::prelude::*;
///
/// let g = CsrDiGraph::from_edges(3, [(0, 1, 7.0), (0, 2, 5.0), (2, 0, 2.0)]);
///
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.number_of_edges(), 3);
/// assert_eq!(g.out_degree_of(0), 2);
/// assert_eq!(g.out_edges_of(2).collect::<Vec<_>>(), vec![(0, 2.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct CsrDiGraph<E> {
    first_out: Vec<usize>,
    targets: Vec<usize>,
    payloads: Vec<E>,
}

impl<E> CsrDiGraph<E> {
    /// Builds a CSR graph with `n` nodes from `(source, target, payload)`
    /// triples. Edges are grouped by source with a stable sort, so the
    /// supplied order is preserved within each node.
    ///
    /// **Panics if an endpoint is `>= n`.**
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, E)>,
    {
        let mut first_out = vec![0usize; n + 1];
        let mut targets = Vec::new();
        let mut payloads = Vec::new();

        for (u, v, e) in edges.into_iter().sorted_by_key(|&(u, _, _)| u) {
            assert!(u < n && v < n, "edge ({u}, {v}) out of range for {n} nodes");
            first_out[u + 1] += 1;
            targets.push(v);
            payloads.push(e);
        }
        for u in 0..n {
            first_out[u + 1] += first_out[u];
        }

        Self {
            first_out,
            targets,
            payloads,
        }
    }

    /// Returns the number of edges in the graph.
    pub fn number_of_edges(&self) -> usize {
        self.targets.len()
    }

    /// Returns the number of outgoing edges of `u`.
    ///
    /// **Panics if `u >= n`.**
    pub fn out_degree_of(&self, u: usize) -> usize {
        self.first_out[u + 1] - self.first_out[u]
    }

    /// Returns an iterator over the outgoing `(target, payload)` pairs
    /// of `u`.
    ///
    /// **Panics if `u >= n`.**
    pub fn out_edges_of(&self, u: usize) -> CsrOutEdges<'_, E> {
        let window = self.first_out[u]..self.first_out[u + 1];
        CsrOutEdges {
            entries: self.targets[window.clone()]
                .iter()
                .zip(self.payloads[window].iter()),
        }
    }
}

/// Iterator over the outgoing edges of one node in a [`CsrDiGraph`].
pub struct CsrOutEdges<'a, E> {
    entries: Zip<slice::Iter<'a, usize>, slice::Iter<'a, E>>,
}

impl<E> Iterator for CsrOutEdges<'_, E>
where
    E: Clone,
{
    type Item = (usize, E);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(&v, e)| (v, e.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// Iterator over the `(node, outgoing edges)` pairs of a [`CsrDiGraph`].
pub struct CsrAdjacency<'a, E> {
    graph: &'a CsrDiGraph<E>,
    nodes: Range<usize>,
}

impl<'a, E> Iterator for CsrAdjacency<'a, E>
where
    E: Clone,
{
    type Item = (usize, CsrOutEdges<'a, E>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|u| (u, self.graph.out_edges_of(u)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<E> GraphView for CsrDiGraph<E>
where
    E: Clone,
{
    type Node = usize;
    type Edge = E;

    type NodeIter<'a>
        = Range<usize>
    where
        Self: 'a;

    type OutIter<'a>
        = CsrOutEdges<'a, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = CsrAdjacency<'a, E>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        0..self.number_of_nodes()
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        CsrAdjacency {
            graph: self,
            nodes: 0..self.number_of_nodes(),
        }
    }

    fn number_of_nodes(&self) -> usize {
        self.first_out.len() - 1
    }
}

test_graph_view!(csr_graph, |n: usize, edges: Vec<(usize, usize, i64)>| {
    crate::repr::CsrDiGraph::from_edges(n, edges)
});

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn preserves_parallel_edges_in_order() {
        let g = CsrDiGraph::from_edges(3, [(2, 0, 2), (0, 1, 7), (2, 0, 1), (2, 1, 1)]);

        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.out_degree_of(2), 3);
        assert_eq!(
            g.out_edges_of(2).collect_vec(),
            vec![(0, 2), (0, 1), (1, 1)]
        );
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_range_edges() {
        CsrDiGraph::from_edges(2, [(0, 2, 1)]);
    }
}
