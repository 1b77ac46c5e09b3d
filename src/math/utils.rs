use num_traits::ToPrimitive;

/// Converts any primitive to `f32`.
///
/// Values that cannot be represented become NaN, which then propagates
/// through whatever matrix is being built.
pub(crate) fn scalar<T: ToPrimitive>(value: T) -> f32 {
    value.to_f32().unwrap_or(f32::NAN)
}
