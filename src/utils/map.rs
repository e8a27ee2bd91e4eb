/*!
# Distance Maps

This module provides an abstraction over the mutable node → distance
storage consumed by the algorithms, allowing callers to choose the most
efficient backing based on context.

Examples:
- Dense integer-indexed maps -> `Vec<D>` / `[D]`
- Sparse or arbitrary-key maps -> `HashMap`, `BTreeMap`

The caller owns the map and provides its initial contents; the algorithms
update values in place and never insert or remove keys. Every node of the
accompanying graph view must already be present; a missing key is a
programming error, not a recoverable condition.
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use num::ToPrimitive;

/// Minimalist trait for mutable node → distance storage.
///
/// Supports lookup and in-place update, nothing else. All node keys are
/// expected to be present from the start.
///
/// # Examples
/// ```
/// use wdgraphs::prelude::*;
///
/// let mut dist = vec![0.0, 0.0, 0.0];
/// DistanceMap::<usize, f64>::set(&mut dist, &1, -2.5);
/// assert_eq!(*DistanceMap::<usize, f64>::get(&dist, &1), -2.5);
/// ```
pub trait DistanceMap<K, V> {
    /// Returns a reference to the value stored for `key`.
    ///
    /// **Panics if `key` is not present.**
    fn get(&self, key: &K) -> &V;

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// **Panics if `key` is not present.**
    fn get_mut(&mut self, key: &K) -> &mut V;

    /// Overwrites the value stored for `key`.
    ///
    /// **Panics if `key` is not present.**
    fn set(&mut self, key: &K, value: V) {
        *self.get_mut(key) = value;
    }
}

/// Contiguous storage indexed by integer-like keys.
impl<K, V> DistanceMap<K, V> for [V]
where
    K: ToPrimitive,
{
    fn get(&self, key: &K) -> &V {
        &self[key.to_usize().unwrap()]
    }

    fn get_mut(&mut self, key: &K) -> &mut V {
        &mut self[key.to_usize().unwrap()]
    }
}

impl<K, V> DistanceMap<K, V> for Vec<V>
where
    K: ToPrimitive,
{
    fn get(&self, key: &K) -> &V {
        &self[key.to_usize().unwrap()]
    }

    fn get_mut(&mut self, key: &K) -> &mut V {
        &mut self[key.to_usize().unwrap()]
    }
}

impl<K, V, S> DistanceMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> &V {
        HashMap::get(self, key).expect("node missing from distance map")
    }

    fn get_mut(&mut self, key: &K) -> &mut V {
        HashMap::get_mut(self, key).expect("node missing from distance map")
    }
}

impl<K, V> DistanceMap<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn get(&self, key: &K) -> &V {
        BTreeMap::get(self, key).expect("node missing from distance map")
    }

    fn get_mut(&mut self, key: &K) -> &mut V {
        BTreeMap::get_mut(self, key).expect("node missing from distance map")
    }
}
