/*!
# Minimum Cycle Ratio

Solves the minimum cost-to-time cycle ratio problem

```text
 min over directed cycles C of  Σ cost(e) / Σ time(e),  e in C
```

as a parametric network problem:

```text
 max  r
 s.t. dist[v] - dist[u] <= cost(e) - r * time(e)   for all edges e(u, v)
```

With all times positive, a cycle is negative under the parameterized
weights exactly when its cost-to-time ratio is below the current
parameter, so [`MaxParametricSolver`] drives the parameter down to the
minimum ratio and returns a cycle realizing it.

The parameter and distance domains coincide here. Any
`num::Num + PartialOrd` type works: `f64` for the common case, or
`num::rational::Ratio` when exact arithmetic (and guaranteed termination)
is wanted.
*/

use num::Num;

use super::neg_cycle::Cycle;
use super::parametric::{MaxParametricSolver, ParametricAPI};
use crate::{ops::GraphView, utils::DistanceMap};

/// Cost semantics of the cycle-ratio problem: edge weights
/// `cost(e) - r * time(e)` and zero-cancel value `Σcost / Σtime`.
///
/// Built from two accessors reading cost and time out of an edge payload.
pub struct CycleRatioAPI<FC, FT> {
    get_cost: FC,
    get_time: FT,
}

impl<FC, FT> CycleRatioAPI<FC, FT> {
    /// Creates the semantics from cost and time accessors.
    ///
    /// For the problem to be well-posed, every cycle must have
    /// `Σ time > 0`.
    pub fn new(get_cost: FC, get_time: FT) -> Self {
        Self { get_cost, get_time }
    }
}

impl<E, R, FC, FT> ParametricAPI<E, R, R> for CycleRatioAPI<FC, FT>
where
    R: Clone + PartialOrd + Num,
    FC: Fn(&E) -> R,
    FT: Fn(&E) -> R,
{
    fn distance(&self, ratio: &R, edge: &E) -> R {
        (self.get_cost)(edge) - ratio.clone() * (self.get_time)(edge)
    }

    fn zero_cancel(&self, cycle: &[E]) -> R {
        let total_cost = cycle
            .iter()
            .fold(R::zero(), |acc, edge| acc + (self.get_cost)(edge));
        let total_time = cycle
            .iter()
            .fold(R::zero(), |acc, edge| acc + (self.get_time)(edge));
        total_cost / total_time
    }
}

/// Minimum cycle-ratio solver.
///
/// A thin wrapper tying [`CycleRatioAPI`] to [`MaxParametricSolver`].
pub struct MinCycleRatioSolver<'g, G, FC, FT>
where
    G: GraphView,
{
    solver: MaxParametricSolver<'g, G, CycleRatioAPI<FC, FT>>,
}

impl<'g, G, FC, FT> MinCycleRatioSolver<'g, G, FC, FT>
where
    G: GraphView,
{
    /// Creates a solver over the given graph view and payload accessors.
    pub fn new(digraph: &'g G, get_cost: FC, get_time: FT) -> Self {
        Self {
            solver: MaxParametricSolver::new(digraph, CycleRatioAPI::new(get_cost, get_time)),
        }
    }

    /// Caps the number of parameter-improving passes, see
    /// [`MaxParametricSolver::set_iteration_bound`].
    pub fn set_iteration_bound(&mut self, bound: usize) {
        self.solver.set_iteration_bound(bound);
    }

    /// Builder-style variant of [`Self::set_iteration_bound`].
    pub fn with_iteration_bound(mut self, bound: usize) -> Self {
        self.set_iteration_bound(bound);
        self
    }

    /// Runs the solver from the upper bound `r0`, updating `dist` in
    /// place.
    ///
    /// Returns the minimum cycle ratio and a cycle achieving it; the
    /// cycle is empty iff no cycle improved on `r0` (in particular when
    /// the graph is acyclic).
    pub fn run<R, M>(&mut self, r0: R, dist: &mut M) -> (R, Cycle<G::Edge>)
    where
        R: Clone + PartialOrd + Num,
        FC: Fn(&G::Edge) -> R,
        FT: Fn(&G::Edge) -> R,
        M: DistanceMap<G::Node, R>,
    {
        self.solver.run(r0, dist)
    }
}

/// Functional form of [`MinCycleRatioSolver`].
///
/// `r0` must upper-bound the minimum ratio; starting high is always
/// safe.
pub fn min_cycle_ratio<G, R, M, FC, FT>(
    digraph: &G,
    r0: R,
    get_cost: FC,
    get_time: FT,
    dist: &mut M,
) -> (R, Cycle<G::Edge>)
where
    G: GraphView,
    R: Clone + PartialOrd + Num,
    M: DistanceMap<G::Node, R>,
    FC: Fn(&G::Edge) -> R,
    FT: Fn(&G::Edge) -> R,
{
    MinCycleRatioSolver::new(digraph, get_cost, get_time).run(r0, dist)
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;
    use num::rational::Ratio;

    use super::*;

    /// Cost/time payloads of the three-node reference graph.
    fn ratio_triangle() -> Vec<Vec<(usize, (i64, i64))>> {
        vec![
            vec![(1, (5, 1)), (2, (1, 1))],
            vec![(0, (1, 1)), (2, (1, 1))],
            vec![(1, (1, 1)), (0, (1, 1))],
        ]
    }

    #[test]
    fn minimum_ratio_of_the_reference_triangle() {
        let graph = ratio_triangle();
        let mut dist = vec![0.0; 3];

        let (ratio, cycle) = min_cycle_ratio(
            &graph,
            100.0,
            |e: &(i64, i64)| e.0 as f64,
            |e: &(i64, i64)| e.1 as f64,
            &mut dist,
        );

        assert_eq!(ratio, 1.0);
        assert!(!cycle.is_empty());

        let cost: i64 = cycle.iter().map(|e| e.0).sum();
        let time: i64 = cycle.iter().map(|e| e.1).sum();
        assert_eq!(cost, time);
    }

    #[test]
    fn keyed_graph_with_cost_and_time_tables() {
        let mut graph: FxHashMap<u32, Vec<(u32, usize)>> = FxHashMap::default();
        graph.insert(0, vec![(1, 0), (2, 1)]);
        graph.insert(1, vec![(0, 2), (2, 3)]);
        graph.insert(2, vec![(1, 4), (0, 5)]);
        let cost = [5.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let time = [1.0; 6];

        let mut dist: FxHashMap<u32, f64> = (0..3).map(|v| (v, 0.0)).collect();
        let (ratio, cycle) = min_cycle_ratio(
            &graph,
            100.0,
            |e: &usize| cost[*e],
            |e: &usize| time[*e],
            &mut dist,
        );

        assert_eq!(ratio, 1.0);
        assert!(!cycle.is_empty());
    }

    #[test]
    fn exact_arithmetic_with_rationals() {
        let graph = ratio_triangle();
        let mut dist = vec![Ratio::from_integer(0i64); 3];

        let mut solver = MinCycleRatioSolver::new(
            &graph,
            |e: &(i64, i64)| Ratio::from_integer(e.0),
            |e: &(i64, i64)| Ratio::from_integer(e.1),
        );
        let (ratio, cycle) = solver.run(Ratio::from_integer(100), &mut dist);

        assert_eq!(ratio, Ratio::from_integer(1));
        assert!(!cycle.is_empty());
    }

    #[test]
    fn acyclic_graph_returns_the_upper_bound() {
        let graph: Vec<Vec<(usize, (i64, i64))>> =
            vec![vec![(1, (3, 1))], vec![(2, (4, 1))], vec![]];
        let mut dist = vec![0.0; 3];

        let (ratio, cycle) = min_cycle_ratio(
            &graph,
            100.0,
            |e: &(i64, i64)| e.0 as f64,
            |e: &(i64, i64)| e.1 as f64,
            &mut dist,
        );

        assert_eq!(ratio, 100.0);
        assert!(cycle.is_empty());
    }

    #[test]
    fn self_loop_ratio() {
        // A single self-loop is the only cycle; its ratio wins.
        let graph: Vec<Vec<(usize, (i64, i64))>> = vec![vec![(0, (3, 2))]];
        let mut dist = vec![0.0];

        let (ratio, cycle) = min_cycle_ratio(
            &graph,
            100.0,
            |e: &(i64, i64)| e.0 as f64,
            |e: &(i64, i64)| e.1 as f64,
            &mut dist,
        );

        assert_eq!(ratio, 1.5);
        assert_eq!(cycle, vec![(3, 2)]);
    }
}
