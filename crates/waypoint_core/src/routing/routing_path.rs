use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Rebuilds the path from `src` to `sink` by following the predecessor map
/// backwards from `sink`.
///
/// Returns an empty path whenever the chain breaks or loops before reaching
/// `src`; a partial path is never returned. `sink == src` is the trivial path.
pub fn build_path<V, S>(predecessors: &HashMap<V, V, S>, src: &V, sink: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    let mut reversed_path: Vec<V> = Vec::with_capacity(32);
    reversed_path.push(sink.clone());

    if sink == src {
        return reversed_path;
    }

    let mut vertex = sink;
    while let Some(parent) = predecessors.get(vertex) {
        // An acyclic chain uses every entry at most once
        if reversed_path.len() > predecessors.len() {
            return Vec::new();
        }

        reversed_path.push(parent.clone());

        if parent == src {
            reversed_path.reverse();
            return reversed_path;
        }

        vertex = parent;
    }

    Vec::new()
}
