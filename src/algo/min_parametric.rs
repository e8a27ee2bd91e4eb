/*!
# Constrained Minimum Parametric Solver

The dual of [`parametric`](super::parametric) for constrained settings:

```text
 min  r
 s.t. dist[v] - dist[u] <= distance(r, e)   for all edges e(u, v)
      subject to: update_ok(current, proposed) on every distance update
```

The driver uses the [`ConstrainedNegCycleFinder`] and **alternates the
relaxation direction** between passes, starting with the successor
variant. Under a restrictive `update_ok` one direction may fail to expose
a cycle that the other reveals; alternation makes the search robust
without giving up the constraint.

Improvements are tracked **ascending**: within a pass the solver collects
cycles, evaluates `zero_cancel` on each, and keeps the largest value seen.
The outer loop terminates as soon as a full pass yields no improvement:
the same "no cycle tightens the parameter further" condition as in the
maximum solver, with the opposite orientation.

Constraint examples:

```text
// only accept clear improvements
|current, proposed| current - proposed >= min_improvement

// bounded step size
|current, proposed| (proposed - current).abs() <= max_step
```
*/

use std::ops::{Add, Sub};

use super::neg_cycle::Cycle;
use super::neg_cycle_q::ConstrainedNegCycleFinder;
use super::parametric::ParametricAPI;
use crate::{ops::GraphView, utils::DistanceMap};

/// Minimum parametric solver with constraint support.
///
/// Constructed once around a borrowed graph view and a
/// [`ParametricAPI`]; reusable across [`run`](Self::run) calls.
pub struct MinParametricSolver<'g, G, P>
where
    G: GraphView,
{
    ncf: ConstrainedNegCycleFinder<'g, G>,
    omega: P,
    pick_one_only: bool,
}

impl<'g, G, P> MinParametricSolver<'g, G, P>
where
    G: GraphView,
{
    /// Creates a solver over the given graph view and cost semantics.
    pub fn new(digraph: &'g G, omega: P) -> Self {
        Self {
            ncf: ConstrainedNegCycleFinder::new(digraph),
            omega,
            pick_one_only: false,
        }
    }

    /// When set, a pass stops collecting at the first strictly improving
    /// cycle instead of scanning the whole enumeration. Off by default.
    pub fn set_pick_one_only(&mut self, pick_one_only: bool) {
        self.pick_one_only = pick_one_only;
    }

    /// Builder-style variant of [`Self::set_pick_one_only`].
    pub fn pick_one_only(mut self, pick_one_only: bool) -> Self {
        self.set_pick_one_only(pick_one_only);
        self
    }

    /// Runs the solver from the starting parameter `ratio`, updating
    /// `dist` in place and gating every distance update through
    /// `update_ok`.
    ///
    /// Returns the final parameter and the cycle that determined it; the
    /// cycle is empty iff no pass improved on the starting parameter.
    pub fn run<R, D, M, U>(&mut self, dist: &mut M, mut ratio: R, update_ok: U) -> (R, Cycle<G::Edge>)
    where
        P: ParametricAPI<G::Edge, R, D>,
        R: Clone + PartialOrd,
        D: Clone + PartialOrd + Add<Output = D> + Sub<Output = D>,
        M: DistanceMap<G::Node, D>,
        U: Fn(&D, &D) -> bool,
    {
        let mut cycle = Vec::new();
        let mut reverse = true;

        loop {
            let mut r_max = ratio.clone();
            let mut c_max = Vec::new();

            let omega = &self.omega;
            let pick_one_only = self.pick_one_only;
            let r = ratio.clone();

            if reverse {
                let cycles =
                    self.ncf
                        .howard_succ(dist, |edge: &G::Edge| omega.distance(&r, edge), &update_ok);
                for ci in cycles {
                    let ri = omega.zero_cancel(&ci);
                    if r_max < ri {
                        r_max = ri;
                        c_max = ci;
                        if pick_one_only {
                            break;
                        }
                    }
                }
            } else {
                let cycles =
                    self.ncf
                        .howard_pred(dist, |edge: &G::Edge| omega.distance(&r, edge), &update_ok);
                for ci in cycles {
                    let ri = omega.zero_cancel(&ci);
                    if r_max < ri {
                        r_max = ri;
                        c_max = ci;
                        if pick_one_only {
                            break;
                        }
                    }
                }
            }

            if r_max <= ratio {
                break;
            }
            ratio = r_max;
            cycle = c_max;
            reverse = !reverse;
        }

        (ratio, cycle)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::super::cycle_ratio::CycleRatioAPI;
    use super::*;

    type CostTime = (f64, f64);

    fn timing_graph() -> BTreeMap<&'static str, Vec<(&'static str, CostTime)>> {
        [
            ("a0", vec![("a1", (7.0, 1.0)), ("a2", (5.0, 1.0))]),
            ("a1", vec![("a0", (0.0, 1.0)), ("a2", (3.0, 1.0))]),
            ("a2", vec![("a1", (1.0, 1.0)), ("a0", (2.0, 1.0))]),
        ]
        .into_iter()
        .collect()
    }

    fn ratio_api() -> CycleRatioAPI<impl Fn(&CostTime) -> f64, impl Fn(&CostTime) -> f64> {
        CycleRatioAPI::new(|e: &CostTime| e.0, |e: &CostTime| e.1)
    }

    #[test]
    fn descent_filter_on_infinite_distances_finds_nothing() {
        let graph = timing_graph();
        let mut dist: BTreeMap<&str, f64> =
            graph.keys().map(|&v| (v, f64::INFINITY)).collect();

        let mut solver = MinParametricSolver::new(&graph, ratio_api());
        let (ratio, cycle) =
            solver.run(&mut dist, 0.0, |current: &f64, proposed: &f64| current > proposed);

        assert_eq!(ratio, 0.0);
        assert!(cycle.is_empty());
    }

    #[test]
    fn cycle_below_the_starting_parameter_is_no_improvement() {
        // The only cycle has ratio -2/3, below the start value 0.0; the
        // ascending driver must leave the parameter untouched.
        let graph: BTreeMap<&str, Vec<(&str, CostTime)>> = [
            ("a0", vec![("a1", (1.0, 1.0))]),
            ("a1", vec![("a2", (1.0, 1.0))]),
            ("a2", vec![("a0", (-4.0, 1.0))]),
        ]
        .into_iter()
        .collect();
        let mut dist: BTreeMap<&str, f64> = graph.keys().map(|&v| (v, 0.0)).collect();

        let mut solver = MinParametricSolver::new(&graph, ratio_api());
        let (ratio, cycle) = solver.run(&mut dist, 0.0, |_: &f64, _: &f64| true);

        assert_eq!(ratio, 0.0);
        assert!(cycle.is_empty());
    }

    #[test]
    fn pick_one_only_terminates_with_same_fixed_point() {
        let graph = timing_graph();
        let mut dist: BTreeMap<&str, f64> =
            graph.keys().map(|&v| (v, f64::INFINITY)).collect();

        let mut solver = MinParametricSolver::new(&graph, ratio_api()).pick_one_only(true);
        let (ratio, cycle) =
            solver.run(&mut dist, 0.0, |current: &f64, proposed: &f64| current > proposed);

        assert_eq!(ratio, 0.0);
        assert!(cycle.is_empty());
    }

    #[test]
    fn solver_is_reusable_across_runs() {
        let graph = timing_graph();
        let mut solver = MinParametricSolver::new(&graph, ratio_api());

        for _ in 0..2 {
            let mut dist: BTreeMap<&str, f64> = graph.keys().map(|&v| (v, 0.0)).collect();
            let (ratio, _) = solver.run(&mut dist, 0.0, |_: &f64, _: &f64| true);
            assert_eq!(ratio, 0.0);
        }
    }
}
