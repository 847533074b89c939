use crate::weight::Weight;

/// Estimates the remaining cost when `to` is reached from `from`.
pub trait AStarHeuristic<V> {
    fn estimate(&self, from: &V, to: &V) -> Weight;
}

impl<V, F> AStarHeuristic<V> for F
where
    F: Fn(&V, &V) -> Weight,
{
    #[inline(always)]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        self(from, to)
    }
}
