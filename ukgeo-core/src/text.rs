fn is_removed_char(c: char) -> bool {
    c == ','
}

/// Upper-case, strip commas and collapse whitespace.
///
/// Tolerates minor formatting differences between the
/// dataset and user input, e.g. `"10, Downing Street"`
/// becomes `"10 DOWNING STREET"`.
pub fn normalize_address(raw: &str) -> String {
    let upper = raw.to_uppercase().replace(is_removed_char, "");
    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}
