/*!
# Graph Representations

This module contains the concrete graph view backends one can use.
Each balances **construction convenience** and **iteration performance**
differently, making them suitable for different settings.

### Representations

- [`indexed`]: `Vec<Vec<(usize, E)>>` / `[Vec<(usize, E)>]`
  Integer-indexed adjacency arrays: node identifiers are the indices
  `0..n-1`, visited in order.
  - Zero conversion cost if your data already lives in a `Vec`.
  - Deterministic iteration, cheap distance maps (`Vec<D>`).

- [`keyed`]: `HashMap<N, Vec<(N, E)>, S>`, `BTreeMap<N, Vec<(N, E)>>`,
  `Vec<(N, Vec<(N, E)>)>`
  Arbitrary node identity.
  - `HashMap` (including `FxHashMap`) for the common hashed case.
  - `BTreeMap` when deterministic node order matters.
  - The association list keeps insertion order and permits duplicate-free
    arbitrary keys without hashing overhead on tiny graphs.

- [`CsrDiGraph`] (Compressed Sparse Row)
  Stores all adjacency in flattened arrays with offset indices.
  - Memory-efficient for large sparse graphs.
  - Good cache locality and iteration speed.
  - Built once via [`CsrDiGraph::from_edges`], immutable afterwards.

## Choosing a Representation

- Use **`Vec<Vec<(usize, E)>>`** when your nodes are already dense integers.
- Use **`CsrDiGraph`** for large, static graphs where iteration dominates.
- Use a **keyed** backend when node identity is anything else.
*/

pub mod csr;
pub mod indexed;
pub mod keyed;

pub use csr::CsrDiGraph;
