/*!
# Maximum Parametric Network Solver

Solves parametric network problems where edge weights depend on a single
scalar parameter:

```text
 max  r
 s.t. dist[v] - dist[u] <= distance(r, e)   for all edges e(u, v)
```

The solver starts from a parameter value known to be an upper bound and
repeatedly asks the negative-cycle finder for infeasibility witnesses:
every negative cycle under the current weights identifies a parameter
value (`zero_cancel`) at which that cycle's total weight vanishes. The
smallest such value becomes the next parameter, and the loop stops once
no cycle tightens the parameter further.

`distance` must be monotonically non-increasing in the parameter: as the
parameter decreases, edge weights only grow, so a cycle that is not
negative at the current parameter cannot become negative later.

Key applications are maximum/minimum cycle-ratio problems (see
[`cycle_ratio`](super::cycle_ratio)), performance analysis of discrete
event systems, and timing analysis.

## Termination

Each pass strictly decreases the parameter or stops. With integer or
rational parameter types this terminates unconditionally; with floating
point, progress per pass can underflow. Callers on such types should set
[`MaxParametricSolver::set_iteration_bound`] or enforce a bound
externally.
*/

use std::ops::Add;

use super::neg_cycle::{Cycle, NegCycleFinder};
use crate::{ops::GraphView, utils::DistanceMap};

/// Problem-specific cost semantics for a parametric network problem.
///
/// `distance` maps the current parameter and an edge payload to a weight
/// in the distance domain `D`; `zero_cancel` maps a cycle to the
/// parameter value that would make its total weight zero.
pub trait ParametricAPI<E, R, D> {
    /// Weight of `edge` under parameter `ratio`. Must be monotonically
    /// non-increasing in `ratio`.
    fn distance(&self, ratio: &R, edge: &E) -> D;

    /// The parameter value at which the total weight of `cycle`
    /// vanishes.
    fn zero_cancel(&self, cycle: &[E]) -> R;
}

/// Maximum parametric solver driving the parameter downward with
/// negative-cycle witnesses.
///
/// Constructed once around a borrowed graph view and a
/// [`ParametricAPI`]; reusable across [`run`](Self::run) calls.
pub struct MaxParametricSolver<'g, G, P>
where
    G: GraphView,
{
    ncf: NegCycleFinder<'g, G>,
    omega: P,
    iteration_bound: Option<usize>,
}

impl<'g, G, P> MaxParametricSolver<'g, G, P>
where
    G: GraphView,
{
    /// Creates a solver over the given graph view and cost semantics.
    pub fn new(digraph: &'g G, omega: P) -> Self {
        Self {
            ncf: NegCycleFinder::new(digraph),
            omega,
            iteration_bound: None,
        }
    }

    /// Caps the number of parameter-improving passes. Unbounded by
    /// default.
    ///
    /// Integer and rational parameter types terminate without a bound;
    /// floating-point types may not (see the module notes).
    pub fn set_iteration_bound(&mut self, bound: usize) {
        self.iteration_bound = Some(bound);
    }

    /// Builder-style variant of [`Self::set_iteration_bound`].
    pub fn with_iteration_bound(mut self, bound: usize) -> Self {
        self.set_iteration_bound(bound);
        self
    }

    /// Runs the solver from the starting parameter `r_opt`, updating
    /// `dist` in place.
    ///
    /// Returns the final parameter and the **critical cycle** that
    /// determined it. The cycle is empty iff no cycle improved on the
    /// starting parameter.
    pub fn run<R, D, M>(&mut self, mut r_opt: R, dist: &mut M) -> (R, Cycle<G::Edge>)
    where
        P: ParametricAPI<G::Edge, R, D>,
        R: Clone + PartialOrd,
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
    {
        let mut c_opt = Vec::new();
        let mut passes = 0usize;

        loop {
            let mut r_min = r_opt.clone();
            let mut c_min = Vec::new();

            let omega = &self.omega;
            let r = r_opt.clone();
            for ci in self
                .ncf
                .howard(dist, |edge: &G::Edge| omega.distance(&r, edge))
            {
                let ri = omega.zero_cancel(&ci);
                if ri < r_min {
                    r_min = ri;
                    c_min = ci;
                }
            }

            if r_min >= r_opt {
                break;
            }
            r_opt = r_min;
            c_opt = c_min;

            passes += 1;
            if self.iteration_bound.is_some_and(|bound| passes >= bound) {
                break;
            }
        }

        (r_opt, c_opt)
    }
}

/// Functional form of [`MaxParametricSolver`] for closure-based cost
/// semantics.
///
/// `distance` and `zero_cancel` have the same contracts as on
/// [`ParametricAPI`]. The loop is unbounded; wrap the call if your
/// parameter type does not guarantee progress.
pub fn max_parametric<G, R, D, M, F1, F2>(
    digraph: &G,
    mut r_opt: R,
    distance: F1,
    zero_cancel: F2,
    dist: &mut M,
) -> (R, Cycle<G::Edge>)
where
    G: GraphView,
    R: Clone + PartialOrd,
    D: Clone + PartialOrd + Add<Output = D>,
    M: DistanceMap<G::Node, D>,
    F1: Fn(&R, &G::Edge) -> D,
    F2: Fn(&[G::Edge]) -> R,
{
    let mut ncf = NegCycleFinder::new(digraph);
    let mut c_opt = Vec::new();

    loop {
        let mut r_min = r_opt.clone();
        let mut c_min = Vec::new();

        let r = r_opt.clone();
        for ci in ncf.howard(dist, |edge: &G::Edge| distance(&r, edge)) {
            let ri = zero_cancel(&ci);
            if ri < r_min {
                r_min = ri;
                c_min = ci;
            }
        }

        if r_min >= r_opt {
            break;
        }
        r_opt = r_min;
        c_opt = c_min;
    }

    (r_opt, c_opt)
}
