/*!
`wdgraphs` is a graph algorithms library designed for graphs that are
- **w**eighted : Every edge carries an opaque payload; weights are derived from payloads by caller-supplied functions
- **d**irected : Edges have orientation, so `u -> v` and `v -> u` are distinct

# Representation

Nodes are generic: anything that is cheap to clone and usable as a hash key
(`Clone + Eq + Hash`) works as a node identifier, from `usize` indices to
interned strings. Edge payloads are equally opaque to the library; the
algorithms only ever hand them to the caller's weight functions and return
them inside reconstructed cycles.

### Available Representations

See the [`repr`] module for the full list of graph view backends:

- `Vec<Vec<(usize, E)>>` and `[Vec<(usize, E)>]` : integer-indexed adjacency arrays
- `HashMap<N, Vec<(N, E)>, S>` : hashed node keys
- `BTreeMap<N, Vec<(N, E)>>` : ordered node keys with deterministic iteration
- `Vec<(N, Vec<(N, E)>)>` : association lists with stable order and arbitrary keys
- [`CsrDiGraph`](crate::repr::CsrDiGraph) : compressed sparse row storage

Each backend implements the single [`GraphView`](crate::ops::GraphView)
trait that all algorithms consume; none of them is privileged.

# Design

The algorithms in [`algo`] are configurable structs borrowing a graph view:
construct once, tune via *Setter* / *Builder* methods where options exist, and
run as often as needed. Cycle enumeration is lazy: the Howard finders return
iterators that interleave relaxation passes with the caller's consumption,
so a caller that only needs one negative cycle pays for one.

Distances live in a caller-owned [`DistanceMap`](crate::utils::DistanceMap)
which the algorithms update in place. Numeric domains are generic; integer,
rational and floating-point weights all work without touching the
algorithms.

# When to use

You should only use this library if the following apply:
- Your graphs are directed and your edge weights come from per-edge data.
- You need negative-cycle detection, parametric network solving, or minimum
  cycle-ratio computation rather than shortest paths.
- You want to keep your own graph and distance containers.

For general-purpose graph data structures and a wider algorithm portfolio,
[petgraph](https://crates.io/crates/petgraph) is the richer choice.
*/

pub mod algo;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wdgraphs::prelude` includes the core graph view trait, all provided
/// representations, and the distance map abstraction.
pub mod prelude {
    pub use super::{ops::*, repr::*, utils::*};
}
