//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
