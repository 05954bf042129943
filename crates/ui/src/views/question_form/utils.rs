use std::str::FromStr;

/// Value an optional closed-set choice takes in a `<select>`.
pub fn option_value<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Inverse of [`option_value`]; anything unrecognised means "unset".
pub fn option_from_value<T: FromStr>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

pub fn labels<T: Copy + ToString>(all: &[T]) -> Vec<String> {
    all.iter().map(ToString::to_string).collect()
}
