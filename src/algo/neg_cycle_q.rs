/*!
# Constrained Negative Cycle Detection

Negative-cycle detection by Howard's method with **update constraints**.

This extends [`neg_cycle`](super::neg_cycle) in two ways:

- every distance update is additionally gated by a caller-supplied
  `update_ok(current, proposed)` filter, and
- both a **predecessor** (forward relaxation) and a **successor**
  (reverse relaxation) variant are provided.

A restrictive filter can prevent forward relaxation from ever exposing a
cycle; running the predecessor and successor variants alternately (see
[`MinParametricSolver`](super::min_parametric::MinParametricSolver))
recovers cycles that one direction misses.

Cycles from [`ConstrainedNegCycleFinder::howard_succ`] are *not* verified
to be negative: under a restrictive filter the successor policy can close
a cycle whose total weight is not negative, and callers of the constrained
variant are expected to evaluate cycles themselves.
*/

use std::{
    marker::PhantomData,
    ops::{Add, Sub},
};

use fxhash::FxHashMap;

use super::neg_cycle::{Cycle, Policy, PolicySearch};
use crate::{ops::GraphView, utils::DistanceMap};

/// Negative cycle finder with update constraints, by Howard's method.
///
/// Maintains a private predecessor policy and a private successor policy;
/// [`howard_pred`](Self::howard_pred) and [`howard_succ`](Self::howard_succ)
/// each reset their own policy on entry, so the two directions can be
/// interleaved freely on one finder.
pub struct ConstrainedNegCycleFinder<'g, G>
where
    G: GraphView,
{
    digraph: &'g G,
    pred: Policy<G>,
    succ: Policy<G>,
}

impl<'g, G> ConstrainedNegCycleFinder<'g, G>
where
    G: GraphView,
{
    /// Creates a finder over the given graph view.
    pub fn new(digraph: &'g G) -> Self {
        Self {
            digraph,
            pred: FxHashMap::default(),
            succ: FxHashMap::default(),
        }
    }

    /// Lazily enumerates negative cycles found by **forward** relaxation,
    /// admitting only updates for which `update_ok(current, proposed)`
    /// holds.
    ///
    /// With a filter that always returns `true` this behaves exactly like
    /// [`NegCycleFinder::howard`](super::neg_cycle::NegCycleFinder::howard).
    pub fn howard_pred<'f, D, M, W, U>(
        &'f mut self,
        dist: &'f mut M,
        weight_of: W,
        update_ok: U,
    ) -> ConstrainedCycles<'g, 'f, G, D, M, W, U, false>
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
        U: Fn(&D, &D) -> bool,
    {
        self.pred.clear();
        ConstrainedCycles {
            finder: self,
            dist,
            weight_of,
            update_ok,
            search: None,
            found: false,
            exhausted: false,
            _domain: PhantomData,
        }
    }

    /// Lazily enumerates cycles found by **reverse** relaxation on the
    /// successor policy: for an edge `u -> v` the update
    /// `dist[u] := dist[v] - w(e)` is attempted whenever it raises
    /// `dist[u]` and passes `update_ok`.
    ///
    /// The reconstructed cycles follow edge direction. Their total weight
    /// is not asserted to be negative; evaluating them is the caller's
    /// responsibility.
    pub fn howard_succ<'f, D, M, W, U>(
        &'f mut self,
        dist: &'f mut M,
        weight_of: W,
        update_ok: U,
    ) -> ConstrainedCycles<'g, 'f, G, D, M, W, U, true>
    where
        D: Clone + PartialOrd + Sub<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
        U: Fn(&D, &D) -> bool,
    {
        self.succ.clear();
        ConstrainedCycles {
            finder: self,
            dist,
            weight_of,
            update_ok,
            search: None,
            found: false,
            exhausted: false,
            _domain: PhantomData,
        }
    }

    fn relax_pred<D, M, W, U>(&mut self, dist: &mut M, weight_of: &W, update_ok: &U) -> bool
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
        U: Fn(&D, &D) -> bool,
    {
        let digraph = self.digraph;
        let mut changed = false;
        for (utx, nbrs) in digraph.adjacency() {
            for (vtx, edge) in nbrs {
                let distance = dist.get(&utx).clone() + weight_of(&edge);
                if *dist.get(&vtx) > distance && update_ok(dist.get(&vtx), &distance) {
                    dist.set(&vtx, distance);
                    self.pred.insert(vtx.clone(), (utx.clone(), edge));
                    changed = true;
                }
            }
        }
        changed
    }

    fn relax_succ<D, M, W, U>(&mut self, dist: &mut M, weight_of: &W, update_ok: &U) -> bool
    where
        D: Clone + PartialOrd + Sub<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
        U: Fn(&D, &D) -> bool,
    {
        let digraph = self.digraph;
        let mut changed = false;
        for (utx, nbrs) in digraph.adjacency() {
            for (vtx, edge) in nbrs {
                let distance = dist.get(&vtx).clone() - weight_of(&edge);
                if *dist.get(&utx) < distance && update_ok(dist.get(&utx), &distance) {
                    dist.set(&utx, distance);
                    self.succ.insert(utx.clone(), (vtx.clone(), edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Verifies that the predecessor-policy cycle through `handle` is
    /// negative.
    fn is_negative<D, M, W>(&self, handle: &G::Node, dist: &M, weight_of: &W) -> bool
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
    {
        let mut vtx = handle.clone();
        loop {
            let (utx, edge) = &self.pred[&vtx];
            if *dist.get(&vtx) > dist.get(utx).clone() + weight_of(edge) {
                return true;
            }
            vtx = utx.clone();
            if vtx == *handle {
                break;
            }
        }
        false
    }
}

/// Reconstructs the cycle through `handle` by walking `policy` until it
/// returns to `handle`.
fn cycle_list<G>(policy: &Policy<G>, handle: &G::Node) -> Cycle<G::Edge>
where
    G: GraphView,
{
    let mut vtx = handle.clone();
    let mut cycle = Vec::new();
    loop {
        let (utx, edge) = &policy[&vtx];
        cycle.push(edge.clone());
        vtx = utx.clone();
        if vtx == *handle {
            break;
        }
    }
    cycle
}

/// Lazy iterator over the cycles found by the constrained finder.
///
/// `SUCC` selects the relaxation direction: `false` drives the
/// predecessor policy, `true` the successor policy.
pub struct ConstrainedCycles<'g, 'f, G, D, M, W, U, const SUCC: bool>
where
    G: GraphView,
{
    finder: &'f mut ConstrainedNegCycleFinder<'g, G>,
    dist: &'f mut M,
    weight_of: W,
    update_ok: U,
    search: Option<PolicySearch<'g, G>>,
    found: bool,
    exhausted: bool,
    _domain: PhantomData<D>,
}

impl<G, D, M, W, U> Iterator for ConstrainedCycles<'_, '_, G, D, M, W, U, false>
where
    G: GraphView,
    D: Clone + PartialOrd + Add<Output = D>,
    M: DistanceMap<G::Node, D>,
    W: Fn(&G::Edge) -> D,
    U: Fn(&D, &D) -> bool,
{
    type Item = Cycle<G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }

            if let Some(search) = self.search.as_mut() {
                if let Some(handle) = search.next_entry(&self.finder.pred) {
                    debug_assert!(self.finder.is_negative(
                        &handle,
                        &*self.dist,
                        &self.weight_of
                    ));
                    self.found = true;
                    return Some(cycle_list::<G>(&self.finder.pred, &handle));
                }

                self.search = None;
                if self.found {
                    self.exhausted = true;
                    return None;
                }
            }

            if !self
                .finder
                .relax_pred(&mut *self.dist, &self.weight_of, &self.update_ok)
            {
                self.exhausted = true;
                return None;
            }
            self.search = Some(PolicySearch::new(self.finder.digraph));
        }
    }
}

impl<G, D, M, W, U> Iterator for ConstrainedCycles<'_, '_, G, D, M, W, U, true>
where
    G: GraphView,
    D: Clone + PartialOrd + Sub<Output = D>,
    M: DistanceMap<G::Node, D>,
    W: Fn(&G::Edge) -> D,
    U: Fn(&D, &D) -> bool,
{
    type Item = Cycle<G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }

            if let Some(search) = self.search.as_mut() {
                if let Some(handle) = search.next_entry(&self.finder.succ) {
                    self.found = true;
                    return Some(cycle_list::<G>(&self.finder.succ, &handle));
                }

                self.search = None;
                if self.found {
                    self.exhausted = true;
                    return None;
                }
            }

            if !self
                .finder
                .relax_succ(&mut *self.dist, &self.weight_of, &self.update_ok)
            {
                self.exhausted = true;
                return None;
            }
            self.search = Some(PolicySearch::new(self.finder.digraph));
        }
    }
}
