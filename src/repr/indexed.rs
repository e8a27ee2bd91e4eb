/*!
# Integer-Indexed Representations

[`GraphView`] implementations that present a contiguous sequence of
adjacency lists as a graph view: node identifiers are the integer indices
`0..n-1` and node iteration visits the indices in order.

This is the adapter to use when a graph is naturally stored as
`Vec<Vec<(usize, E)>>`: no wrapping type is required, the container *is*
the view. Parallel edges and self-loops are simply repeated or reflexive
entries in a node's list.

# Examples
```
use wdgraphs::prelude::*;

// 0 -> 1 (weight 7), 0 -> 2 (weight 5), 2 -> 0 twice (parallel edges)
let g: Vec<Vec<(usize, i32)>> = vec![
    vec![(1, 7), (2, 5)],
    vec![],
    vec![(0, 2), (0, 1)],
];

assert_eq!(g.number_of_nodes(), 3);
let out_of_2: Vec<_> = g.adjacency().nth(2).unwrap().1.collect();
assert_eq!(out_of_2, vec![(0, 2), (0, 1)]);
```
*/

use std::{iter::Enumerate, ops::Range, slice};

use crate::ops::{GraphView, OutEdges};
use crate::testing::test_graph_view;

/// Iterator over the `(node, outgoing edges)` pairs of an adjacency
/// array, in index order.
pub struct IndexedAdjacency<'a, E> {
    entries: Enumerate<slice::Iter<'a, Vec<(usize, E)>>>,
}

impl<'a, E> Iterator for IndexedAdjacency<'a, E>
where
    E: Clone,
{
    type Item = (usize, OutEdges<'a, usize, E>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|(u, nbrs)| (u, OutEdges::new(nbrs)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E> GraphView for [Vec<(usize, E)>]
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
        = OutEdges<'a, usize, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = IndexedAdjacency<'a, E>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        0..self.len()
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        IndexedAdjacency {
            entries: self.iter().enumerate(),
        }
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

impl<E> GraphView for Vec<Vec<(usize, E)>>
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
        = OutEdges<'a, usize, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = IndexedAdjacency<'a, E>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        0..self.len()
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        self.as_slice().adjacency()
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

test_graph_view!(adj_array, |n: usize, edges: Vec<(usize, usize, i64)>| {
    let mut graph: Vec<Vec<(usize, i64)>> = vec![Vec::new(); n];
    for (u, v, w) in edges {
        graph[u].push((v, w));
    }
    graph
});
