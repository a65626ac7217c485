//! Shared range-validation helpers.

/// Push an error if `value` is outside `(min, max]`, or not finite.
pub(crate) fn validate_range_exclusive_min(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(value > min && value <= max) {
        errors.push(format!("{name} = {value} is out of range ({min}, {max}]"));
    }
}
