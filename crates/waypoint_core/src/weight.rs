pub type Weight = f64;

pub(crate) const MAX_WEIGHT: Weight = f64::INFINITY;

/// A weight is usable when it is non-negative and not NaN.
/// `f64::INFINITY` is accepted and marks an impassable edge.
#[inline]
pub fn is_valid_weight(weight: Weight) -> bool {
    weight >= 0.0
}
