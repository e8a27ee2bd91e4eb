/*!
# Graph Algorithms

The solver components of `wdgraphs`, bottom-up:

- [`neg_cycle`]: negative-cycle detection by Howard's policy iteration,
  enumerated lazily.
- [`neg_cycle_q`]: the same with a caller-supplied update filter and both
  predecessor and successor relaxation.
- [`parametric`]: maximum parametric network solver driving a scalar
  parameter until infeasibility disappears.
- [`cycle_ratio`]: minimum cost-to-time cycle ratio, a specialization of
  the parametric solver.
- [`min_parametric`]: constrained parametric driver alternating between
  relaxation directions.

All algorithms borrow a [`GraphView`](crate::ops::GraphView) and a
caller-owned [`DistanceMap`](crate::utils::DistanceMap); none of them owns
graph data or holds references past a call.
*/

pub mod cycle_ratio;
pub mod min_parametric;
pub mod neg_cycle;
pub mod neg_cycle_q;
pub mod parametric;

pub use cycle_ratio::{min_cycle_ratio, CycleRatioAPI, MinCycleRatioSolver};
pub use min_parametric::MinParametricSolver;
pub use neg_cycle::{Cycle, NegCycleFinder, NegCycles};
pub use neg_cycle_q::{ConstrainedCycles, ConstrainedNegCycleFinder};
pub use parametric::{max_parametric, MaxParametricSolver, ParametricAPI};
