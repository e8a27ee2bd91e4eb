/*!
# Utilities

Provides the map abstraction shared by all algorithms:

- [`DistanceMap`]: caller-owned node → distance storage, with
  implementations for contiguous and keyed containers.

Apart from [`DistanceMap`], you probably do not need to interact with this
module directly.
*/

pub mod map;

pub use map::DistanceMap;
