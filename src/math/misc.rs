/// Relative-epsilon comparison: `a` and `b` are equal when their difference is within
/// `max_relative_diff` scaled by the larger magnitude of the two.
pub fn relatively_equal(a: f32, b: f32, max_relative_diff: f32) -> bool {
    let diff = (a - b).abs();
    let scaled_eps = max_relative_diff * a.abs().max(b.abs());
    diff <= scaled_eps
}

/// `relatively_equal` at single precision machine epsilon. every `PartialEq` impl in `math`
/// goes through this.
#[inline]
pub fn approximately_equal(a: f32, b: f32) -> bool {
    relatively_equal(a, b, f32::EPSILON)
}

pub(crate) fn all_approximately_equal(lhs: &[f32], rhs: &[f32]) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs.iter())
            .all(|(&a, &b)| approximately_equal(a, b))
}
